//! Scroll-position derived UI flags.

/// Offset after which the navbar switches to its solid background.
pub const NAVBAR_SOLID_OFFSET: f64 = 50.0;

/// Offset after which the scroll-to-top button appears.
pub const SCROLL_TOP_OFFSET: f64 = 400.0;

/// Flags derived from the vertical scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub navbar_solid: bool,
    pub show_scroll_top: bool,
}

impl ScrollState {
    pub fn from_offset(y: f64) -> Self {
        Self {
            navbar_solid: y > NAVBAR_SOLID_OFFSET,
            show_scroll_top: y > SCROLL_TOP_OFFSET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_of_page() {
        assert_eq!(ScrollState::from_offset(0.0), ScrollState::default());
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        let s = ScrollState::from_offset(50.0);
        assert!(!s.navbar_solid);
        let s = ScrollState::from_offset(50.5);
        assert!(s.navbar_solid);
        assert!(!s.show_scroll_top);
        let s = ScrollState::from_offset(400.0);
        assert!(!s.show_scroll_top);
        let s = ScrollState::from_offset(401.0);
        assert!(s.show_scroll_top);
    }
}
