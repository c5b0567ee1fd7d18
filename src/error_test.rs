use super::*;

#[test]
fn missing_element_names_the_selector() {
    let err = Error::MissingElement(".btn-submit");
    assert_eq!(err.to_string(), "required element `.btn-submit` is missing");
}

#[test]
fn js_error_carries_message() {
    let err = Error::Js("TypeError: x is null".to_owned());
    assert_eq!(err.to_string(), "browser call failed: TypeError: x is null");
}

#[test]
fn config_error_is_transparent() {
    let err = Error::from(ConfigError::EmptySequence);
    assert_eq!(err.to_string(), ConfigError::EmptySequence.to_string());
}
