#![allow(clippy::float_cmp)]

use super::*;

fn nav() -> Navigation {
    Navigation::new(NavConfig::default(), 0.0)
}

// =============================================================
// nav_visibility
// =============================================================

#[test]
fn visible_below_reveal_offset_even_when_scrolling_down() {
    let config = NavConfig::default();
    assert_eq!(nav_visibility(0.0, 50.0, &config), NavVisibility::Visible);
    assert_eq!(nav_visibility(50.0, 100.0, &config), NavVisibility::Visible);
}

#[test]
fn visible_between_offsets_when_scrolling_down() {
    let config = NavConfig::default();
    assert_eq!(nav_visibility(120.0, 180.0, &config), NavVisibility::Visible);
    assert_eq!(nav_visibility(150.0, 200.0, &config), NavVisibility::Visible);
}

#[test]
fn hidden_past_hide_offset_when_scrolling_down() {
    let config = NavConfig::default();
    assert_eq!(nav_visibility(50.0, 250.0, &config), NavVisibility::Hidden);
    assert_eq!(nav_visibility(250.0, 400.0, &config), NavVisibility::Hidden);
}

#[test]
fn visible_when_scrolling_up() {
    let config = NavConfig::default();
    assert_eq!(nav_visibility(400.0, 300.0, &config), NavVisibility::Visible);
    assert_eq!(nav_visibility(400.0, 100.0, &config), NavVisibility::Visible);
}

#[test]
fn visible_when_position_unchanged() {
    let config = NavConfig::default();
    assert_eq!(nav_visibility(500.0, 500.0, &config), NavVisibility::Visible);
}

#[test]
fn custom_thresholds_are_respected() {
    let config = NavConfig { reveal_offset_px: 10.0, hide_offset_px: 20.0, ..NavConfig::default() };
    assert_eq!(nav_visibility(0.0, 25.0, &config), NavVisibility::Hidden);
    assert_eq!(nav_visibility(0.0, 15.0, &config), NavVisibility::Visible);
}

// =============================================================
// Navigation scroll tracking
// =============================================================

#[test]
fn scroll_sequence_hides_then_shows() {
    let mut nav = Navigation::new(NavConfig::default(), 50.0);
    assert_eq!(nav.scrolled(250.0), NavVisibility::Hidden);
    assert_eq!(nav.scrolled(400.0), NavVisibility::Hidden);
    assert_eq!(nav.scrolled(100.0), NavVisibility::Visible);
    assert_eq!(nav.visibility(), NavVisibility::Visible);
}

#[test]
fn last_scroll_updates_on_every_event() {
    let mut nav = nav();
    nav.scrolled(30.0);
    assert_eq!(nav.last_scroll_y(), 30.0);
    nav.scrolled(500.0);
    assert_eq!(nav.last_scroll_y(), 500.0);
    nav.scrolled(20.0);
    assert_eq!(nav.last_scroll_y(), 20.0);
}

#[test]
fn initial_scroll_is_the_first_previous_position() {
    let mut up = Navigation::new(NavConfig::default(), 600.0);
    assert_eq!(up.scrolled(550.0), NavVisibility::Visible);

    let mut down = Navigation::new(NavConfig::default(), 300.0);
    assert_eq!(down.scrolled(350.0), NavVisibility::Hidden);
}

// =============================================================
// Menu
// =============================================================

#[test]
fn menu_starts_closed() {
    assert!(!nav().is_menu_open());
}

#[test]
fn toggle_flips_menu() {
    let mut nav = nav();
    assert!(nav.toggle_menu());
    assert!(nav.is_menu_open());
    assert!(!nav.toggle_menu());
    assert!(!nav.is_menu_open());
}

#[test]
fn link_closes_open_menu() {
    let mut nav = nav();
    nav.toggle_menu();
    assert!(nav.link_selected());
    assert!(!nav.is_menu_open());
}

#[test]
fn link_leaves_closed_menu_closed() {
    let mut nav = nav();
    assert!(!nav.link_selected());
    assert!(!nav.is_menu_open());
}

#[test]
fn desktop_resize_closes_menu() {
    let mut nav = nav();
    nav.toggle_menu();
    assert!(nav.resized(1024.0));
    assert!(!nav.is_menu_open());
}

#[test]
fn mobile_resize_keeps_menu_open() {
    let mut nav = nav();
    nav.toggle_menu();
    assert!(!nav.resized(768.0));
    assert!(!nav.resized(400.0));
    assert!(nav.is_menu_open());
}

#[test]
fn desktop_resize_with_closed_menu_is_noop() {
    let mut nav = nav();
    assert!(!nav.resized(1920.0));
    assert!(!nav.is_menu_open());
}

#[test]
fn menu_and_visibility_are_independent() {
    let mut nav = nav();
    nav.toggle_menu();
    nav.scrolled(300.0);
    assert!(nav.is_menu_open());
    assert_eq!(nav.visibility(), NavVisibility::Hidden);
}
