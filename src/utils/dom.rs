//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Current vertical scroll offset in CSS pixels, 0 when unavailable.
pub fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Smoothly scroll the section with the given id into view.
///
/// Returns `true` if the element was found.
pub fn scroll_to_section(id: &str) -> bool {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.get_element_by_id(id)
    {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    } else {
        ::log::debug!("no section with id '{id}'");
        false
    }
}

/// Smoothly scroll back to the top of the page.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Reload the current page.
pub fn reload() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}

/// Current calendar year from the browser clock.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_scroll_offset_at_top() {
        assert!(scroll_offset() >= 0.0);
    }

    #[wasm_bindgen_test]
    fn test_missing_section() {
        assert!(!scroll_to_section("definitely-not-a-section"));
    }

    #[wasm_bindgen_test]
    fn test_current_year() {
        assert!(current_year() >= 2024);
    }
}
