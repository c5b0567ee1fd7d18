//! Shared constants: document contract selectors and default timings.

// ── Document contract ───────────────────────────────────────────

/// Splash overlay shown until the page finishes loading.
pub const LOADER_ID: &str = "loader";
/// Fixed navigation bar.
pub const NAV_ID: &str = "nav";
/// Mobile menu toggle button.
pub const NAV_TOGGLE_ID: &str = "navToggle";
/// Collapsible mobile menu panel.
pub const NAV_MENU_ID: &str = "navMenu";
/// Links inside the navigation menu.
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
/// Element whose text the typewriter rewrites.
pub const TYPEWRITER_ID: &str = "typewriter";
/// Elements revealed on viewport entry.
pub const REVEAL_SELECTOR: &str = "[data-aos]";
/// Optional per-element reveal delay, in milliseconds.
pub const REVEAL_DELAY_ATTR: &str = "data-aos-delay";
/// Decorative background shapes that receive a parallax offset.
pub const PARALLAX_SELECTOR: &str = ".gradient-orb";
/// The contact form.
pub const CONTACT_FORM_ID: &str = "contactForm";
/// Submit control inside the contact form.
pub const SUBMIT_SELECTOR: &str = ".btn-submit";
/// In-page anchor links.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
/// Optional JSON configuration block.
pub const CONFIG_ID: &str = "portfolio-config";
/// Style element holding the easter egg keyframes.
pub const EASTER_EGG_STYLE_ID: &str = "easter-egg-style";

// ── Classes ─────────────────────────────────────────────────────

pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";
pub const REVEALED_CLASS: &str = "aos-animate";

// ── Loader ──────────────────────────────────────────────────────

/// Delay between the load signal and hiding the splash.
pub const LOADER_GRACE_MS: u32 = 800;
/// Hide the splash after this long no matter what.
pub const LOADER_FALLBACK_MS: u32 = 3000;

// ── Navigation ──────────────────────────────────────────────────

/// Up to this offset the nav bar is always shown.
pub const NAV_REVEAL_OFFSET_PX: f64 = 100.0;
/// Scrolling down past this offset hides the nav bar.
pub const NAV_HIDE_OFFSET_PX: f64 = 200.0;
/// Viewports wider than this are desktop layouts with no mobile menu.
pub const NAV_DESKTOP_MIN_WIDTH_PX: f64 = 768.0;

// ── Typewriter ──────────────────────────────────────────────────

pub const TYPE_DELAY_MS: u32 = 80;
pub const DELETE_DELAY_MS: u32 = 40;
/// Upper bound (exclusive) of the random delay added to every tick.
pub const TYPE_JITTER_MS: u32 = 50;
/// How long a fully typed phrase stays on screen.
pub const TYPE_PAUSE_MS: u32 = 1500;

pub const TYPEWRITER_PHRASES: [&str; 6] = [
    "echo \"Hello, World!\"",
    "npm run build-something-cool",
    "git commit -m \"made it work\"",
    "sudo make me a sandwich",
    "ping reality.life",
    "./start_adventure.sh",
];

// ── Scroll animations ───────────────────────────────────────────

/// Fraction of an element that must be visible to count as intersecting.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Negative bottom margin so reveals fire slightly before full entry.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
/// Parallax speed per decorative shape; later shapes reuse the last entry.
pub const PARALLAX_SPEEDS: [f64; 2] = [0.3, 0.2];

// ── Contact form ────────────────────────────────────────────────

pub const SENDING_LABEL: &str = "Sending...";
pub const SENT_LABEL: &str = "Message Sent! \u{2713}";
pub const SUCCESS_BACKGROUND: &str = "var(--success)";
/// Simulated delivery time.
pub const SEND_DELAY_MS: u32 = 1500;
/// How long the "sent" state stays before the button resets.
pub const SENT_HOLD_MS: u32 = 3000;

// ── Easter egg ──────────────────────────────────────────────────

pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];
pub const PARTICLE_GLYPHS: [&str; 6] = ["\u{1F680}", "\u{1F4BB}", "\u{26A1}", "\u{1F525}", "\u{2728}", "\u{1F3AE}"];
pub const PARTICLE_COUNT: u32 = 20;
pub const PARTICLE_STAGGER_MS: u32 = 100;
pub const PARTICLE_LIFETIME_MS: u32 = 3000;
pub const FLOURISH_FILTER: &str = "hue-rotate(180deg)";
pub const FLOURISH_FILTER_MS: u32 = 5000;

// ── Cursor glow ─────────────────────────────────────────────────

/// Fraction of the remaining distance covered each frame.
pub const GLOW_SMOOTHING: f64 = 0.1;
pub const GLOW_SIZE_PX: u32 = 300;
