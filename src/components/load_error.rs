//! Fallback shown when the page content cannot be loaded.

use leptos::error::Errors;
use leptos::prelude::*;

use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/load_error.module.css");

#[component]
pub fn LoadError(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let messages = move || {
        errors
            .with(error_messages)
            .into_iter()
            .map(|msg| view! { <li><code>{msg}</code></li> })
            .collect_view()
    };

    view! {
        <div class=css::screen role="alert">
            <h1 class=css::title>"The page content failed to load"</h1>
            <ul class=css::messages>{messages}</ul>
            <button class=css::reload on:click=|_| dom::reload()>
                "Reload"
            </button>
        </div>
    }
}

/// One line per distinct error, in the order they were raised.
fn error_messages(errors: &Errors) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for (_, err) in errors.iter() {
        let msg = err.to_string();
        if !out.contains(&msg) {
            out.push(msg);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use folio_core::ContentError;

    use super::*;

    #[test]
    fn test_error_messages() {
        let mut errors = Errors::default();
        errors.insert_with_default_key(ContentError::DuplicateProjectId(3));
        assert_eq!(error_messages(&errors), vec!["duplicate project id 3"]);
    }

    #[test]
    fn test_no_errors_no_messages() {
        assert!(error_messages(&Errors::default()).is_empty());
    }
}
