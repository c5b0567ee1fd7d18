use super::*;

#[test]
fn every_line_is_styled() {
    for (message, css) in BANNER {
        assert!(message.starts_with("%c"), "{message} lacks a style directive");
        assert!(css.contains("font-size"));
    }
}

#[test]
fn last_line_hints_at_the_easter_egg() {
    assert!(BANNER[2].0.contains("Konami"));
}
