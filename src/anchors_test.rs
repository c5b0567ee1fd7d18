#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn fragment_id_strips_hash() {
    assert_eq!(fragment_id("#about"), Some("about"));
    assert_eq!(fragment_id("#contact-me"), Some("contact-me"));
}

#[test]
fn bare_hash_keeps_default_behavior() {
    assert_eq!(fragment_id("#"), None);
}

#[test]
fn non_fragment_links_are_ignored() {
    assert_eq!(fragment_id("/about"), None);
    assert_eq!(fragment_id("https://example.com/#about"), None);
    assert_eq!(fragment_id(""), None);
}

#[test]
fn destination_subtracts_nav_height() {
    assert_eq!(scroll_destination(400.0, 1000.0, 72.0), 1328.0);
}

#[test]
fn destination_above_viewport() {
    assert_eq!(scroll_destination(-250.0, 1000.0, 50.0), 700.0);
}

#[test]
fn destination_without_nav() {
    assert_eq!(scroll_destination(120.0, 0.0, 0.0), 120.0);
}
