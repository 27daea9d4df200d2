//! Shared controls for [`CarouselFilter`]-backed sections.
//!
//! Both components take the carousel signal itself, so the owning section
//! and the controls always read the same state.

use leptos::prelude::*;
use leptos_icons::Icon;

use folio_core::{CarouselFilter, Categorized};

use crate::components::icons as ic;
use crate::utils::format::{filter_label, position_label};

stylance::import_crate_style!(css, "src/components/sections.module.css");

/// One button per filter option, wildcard first.
#[component]
pub fn FilterBar<T>(carousel: RwSignal<CarouselFilter<T>>) -> impl IntoView
where
    T: Categorized + Send + Sync + 'static,
{
    let options: Vec<String> = carousel.with_untracked(|c| {
        c.filter_options()
            .into_iter()
            .map(String::from)
            .collect()
    });

    view! {
        <div class=css::filters role="tablist">
            {options
                .into_iter()
                .map(|option| {
                    let label = filter_label(&option);
                    let is_active = {
                        let option = option.clone();
                        move || carousel.with(|c| c.active_filter() == option)
                    };
                    let class = move || {
                        if is_active() {
                            format!("{} {}", css::filter, css::filterActive)
                        } else {
                            css::filter.to_string()
                        }
                    };
                    view! {
                        <button
                            class=class
                            role="tab"
                            on:click=move |_| {
                                // Rejections are logged by the carousel.
                                carousel.update(|c| {
                                    let _ = c.set_filter(&option);
                                });
                            }
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Previous/next buttons, one dot per visible item, and an `i / n` label.
#[component]
pub fn CarouselNav<T>(
    carousel: RwSignal<CarouselFilter<T>>,
    /// Noun for the dot labels ("project", "post").
    item_name: &'static str,
) -> impl IntoView
where
    T: Categorized + Send + Sync + 'static,
{
    let dots = move || {
        let (len, current) = carousel.with(|c| (c.len(), c.current_index()));
        (0..len)
            .map(|i| {
                let class = if current == Some(i) {
                    format!("{} {}", css::dot, css::dotActive)
                } else {
                    css::dot.to_string()
                };
                view! {
                    <button
                        class=class
                        aria-label=format!("Show {item_name} {}", i + 1)
                        on:click=move |_| {
                            carousel.update(|c| {
                                let _ = c.select_index(i);
                            });
                        }
                    />
                }
            })
            .collect_view()
    };

    view! {
        <div class=css::carouselNav>
            <button
                class=css::navButton
                aria-label="Previous"
                on:click=move |_| carousel.update(|c| c.previous())
            >
                <Icon icon=ic::CHEVRON_LEFT />
            </button>

            <div class=css::dots>{dots}</div>

            <button
                class=css::navButton
                aria-label="Next"
                on:click=move |_| carousel.update(|c| c.next())
            >
                <Icon icon=ic::CHEVRON_RIGHT />
            </button>

            <span class=css::position>
                {move || carousel.with(|c| position_label(c.current_index(), c.len()))}
            </span>
        </div>
    }
}
