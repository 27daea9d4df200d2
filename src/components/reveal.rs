//! Scroll-triggered entrance animation.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_use::{UseIntersectionObserverOptions, use_intersection_observer_with_options};

use crate::config::{REVEAL_STAGGER_MS, REVEAL_THRESHOLD};

stylance::import_crate_style!(css, "src/components/reveal.module.css");

/// Entrance delay for the `index`-th item of a staggered list.
pub fn stagger(index: usize) -> u32 {
    index as u32 * REVEAL_STAGGER_MS
}

/// Fades and slides its children in the first time they scroll into view.
///
/// The observer disconnects after the first intersection, so content never
/// hides again once shown.
#[component]
pub fn Reveal(
    children: Children,
    /// Delay before the transition starts, see [`stagger`].
    #[prop(optional)]
    delay_ms: u32,
    /// Extra classes for the wrapper.
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let target = NodeRef::<Div>::new();
    let visible = RwSignal::new(false);

    use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                visible.set(true);
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    let wrapper_class = move || {
        let state = if visible.get() { css::visible } else { css::hidden };
        format!("{} {} {}", css::reveal, state, class)
    };

    view! {
        <div
            node_ref=target
            class=wrapper_class
            style=format!("transition-delay: {delay_ms}ms;")
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(0), 0);
        assert_eq!(stagger(3), 3 * REVEAL_STAGGER_MS);
    }
}
