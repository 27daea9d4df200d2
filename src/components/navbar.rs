//! Fixed top navigation.
//!
//! Turns solid once the page scrolls past `NAVBAR_SOLID_OFFSET`, and folds
//! the links into a toggleable menu on narrow screens.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use folio_core::NavLink;

use crate::app::SiteContext;
use crate::components::icons as ic;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/navbar.module.css");

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext must be provided");
    let menu_open = RwSignal::new(false);

    let (brand, links) = ctx
        .content
        .with_value(|c| (c.profile.name.clone(), c.nav.clone()));
    let mobile_links = links.clone();

    let go = move |target: &str| {
        dom::scroll_to_section(target);
        menu_open.set(false);
    };

    let nav_class = move || {
        if ctx.scroll.get().navbar_solid {
            format!("{} {}", css::nav, css::solid)
        } else {
            css::nav.to_string()
        }
    };

    view! {
        <nav class=nav_class>
            <div class=css::inner>
                <button class=css::brand on:click=move |_| go("home")>
                    {brand}
                </button>

                <ul class=css::links>{nav_items(links, go)}</ul>

                <button
                    class=css::menuToggle
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || {
                        let icon = if menu_open.get() { ic::CLOSE } else { ic::MENU };
                        view! { <Icon icon=icon /> }
                    }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <ul class=css::mobileLinks>{nav_items(mobile_links.clone(), go)}</ul>
            </Show>
        </nav>
    }
}

fn nav_items(
    links: Vec<NavLink>,
    go: impl Fn(&str) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    links
        .into_iter()
        .map(|link| {
            let href = format!("#{}", link.target);
            let target = link.target;
            view! {
                <li>
                    <a
                        href=href
                        class=css::link
                        on:click=move |ev: MouseEvent| {
                            ev.prevent_default();
                            go(&target);
                        }
                    >
                        {link.label}
                    </a>
                </li>
            }
        })
        .collect_view()
}
