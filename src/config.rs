//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the site.
//! Page copy is loaded at compile time using `include_str!`.

use std::time::Duration;

use folio_core::TypewriterTiming;

// =============================================================================
// Content (loaded at compile time)
// =============================================================================

/// Site content document, parsed into `SiteContent` at startup.
pub const CONTENT_TOML: &str = include_str!("../assets/content.toml");

// =============================================================================
// Logging
// =============================================================================

/// Console log level; debug builds are chattier.
pub const LOG_LEVEL: log::LevelFilter = if cfg!(debug_assertions) {
    log::LevelFilter::Debug
} else {
    log::LevelFilter::Warn
};

// =============================================================================
// Hero
// =============================================================================

/// Typewriter delays (typing, reading pause, deleting).
pub const TYPEWRITER_TIMING: TypewriterTiming = TypewriterTiming::DEFAULT;

/// Number of drifting background particles.
pub const PARTICLE_COUNT: usize = 30;

/// Section the "learn more" button scrolls to.
pub const HERO_SCROLL_TARGET: &str = "about";

/// Section the "view work" button scrolls to.
pub const HERO_WORK_TARGET: &str = "projects";

// =============================================================================
// Sections
// =============================================================================

/// Testimonial slider auto-advance interval.
pub const TESTIMONIAL_INTERVAL: Duration = Duration::from_millis(5000);

/// Fraction of an element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Per-item stagger for entrance animations (milliseconds).
pub const REVEAL_STAGGER_MS: u32 = 100;

/// Contact form submission timing.
pub mod contact {
    use std::time::Duration;

    /// Simulated network delay before a message counts as sent.
    pub const SUBMIT_DELAY: Duration = Duration::from_millis(2000);
    /// How long the success message stays before the form clears.
    pub const RESET_DELAY: Duration = Duration::from_millis(3000);
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the site.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
