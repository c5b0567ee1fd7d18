//! Styled console banner for visitors who open the developer tools.

#[cfg(test)]
#[path = "greeting_test.rs"]
mod greeting_test;

/// `(message, css)` pairs, printed with `%c` styling in order.
pub const BANNER: [(&str, &str); 3] = [
    ("%c\u{1F44B} Hey there, curious one!", "font-size: 20px; font-weight: bold; color: #22d3ee;"),
    ("%cLooking for something interesting?", "font-size: 14px; color: #94a3b8;"),
    ("%cTry the Konami Code \u{1F3AE}", "font-size: 12px; color: #64748b;"),
];

#[cfg(feature = "hydrate")]
pub fn print() {
    for (message, css) in BANNER {
        web_sys::console::log_2(&message.into(), &css.into());
    }
}
