//! Root application module.
//!
//! Contains the App component, the SiteContext definition, and the page
//! layout that stacks every section in order.

use leptos::prelude::*;

use folio_core::{ContentError, ScrollState, SiteContent};

use crate::components::{
    About, Blog, Contact, Expertise, Footer, Hero, LoadError, Navbar, Projects, Skills,
    Testimonials,
};
use crate::config::CONTENT_TOML;
use crate::utils::dom;

// ============================================================================
// SiteContext
// ============================================================================

/// Site-wide reactive context.
///
/// Provided once the content document has been parsed and validated, and
/// available to every section through `use_context::<SiteContext>()`.
///
/// # Note
///
/// This struct is `Copy` because every field is an arena handle, which is
/// cheap to copy.
#[derive(Clone, Copy)]
pub struct SiteContext {
    /// Parsed page content. Static for the lifetime of the page.
    pub content: StoredValue<SiteContent>,
    /// Vertical window scroll offset.
    pub scroll_y: RwSignal<f64>,
    /// Navbar/scroll-to-top flags derived from `scroll_y`.
    pub scroll: Memo<ScrollState>,
}

impl SiteContext {
    pub fn new(content: SiteContent) -> Self {
        let scroll_y = RwSignal::new(dom::scroll_offset());
        Self {
            content: StoredValue::new(content),
            scroll_y,
            scroll: Memo::new(move |_| ScrollState::from_offset(scroll_y.get())),
        }
    }

    /// Keeps `scroll_y` in sync with the window until the owner is disposed.
    fn track_scroll(&self) {
        let scroll_y = self.scroll_y;
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            scroll_y.set(dom::scroll_offset());
        });
        on_cleanup(move || handle.remove());
    }
}

/// Parses the bundled content and provides [`SiteContext`] for the page.
fn load_page() -> Result<impl IntoView, ContentError> {
    let content = SiteContent::from_toml(CONTENT_TOML)?;
    log::info!(
        "loaded content: {} projects, {} posts",
        content.projects.len(),
        content.posts.len()
    );

    let ctx = SiteContext::new(content);
    ctx.track_scroll();
    provide_context(ctx);

    Ok(view! { <Page /> })
}

/// Root application component.
///
/// Content parse or validation failures render [`LoadError`] instead of the page.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! { <LoadError errors=errors /> }>
            {load_page()}
        </ErrorBoundary>
    }
}

/// All sections in page order.
#[component]
fn Page() -> impl IntoView {
    view! {
        <Navbar />
        <main>
            <Hero />
            <About />
            <Expertise />
            <Projects />
            <Testimonials />
            <Skills />
            <Blog />
            <Contact />
        </main>
        <Footer />
    }
}
