//! Page footer with quick links, socials, and a scroll-to-top button.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::SiteContext;
use crate::components::icons as ic;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext must be provided");
    let (profile, nav, socials) = ctx
        .content
        .with_value(|c| (c.profile.clone(), c.nav.clone(), c.socials.clone()));
    let year = dom::current_year();

    view! {
        <footer class=css::footer>
            <div class=css::inner>
                <div class=css::brand>
                    <span class=css::name>{profile.name.clone()}</span>
                    <p class=css::headline>{profile.headline}</p>
                </div>

                <nav class=css::column aria-label="Quick links">
                    <h4 class=css::heading>"Quick Links"</h4>
                    <ul class=css::list>
                        {nav
                            .into_iter()
                            .map(|link| {
                                let href = format!("#{}", link.target);
                                let target = link.target;
                                view! {
                                    <li>
                                        <a
                                            class=css::link
                                            href=href
                                            on:click=move |ev: MouseEvent| {
                                                ev.prevent_default();
                                                dom::scroll_to_section(&target);
                                            }
                                        >
                                            {link.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>

                <div class=css::column>
                    <h4 class=css::heading>"Connect"</h4>
                    <ul class=css::list>
                        {socials
                            .into_iter()
                            .map(|social| {
                                view! {
                                    <li>
                                        <a
                                            class=css::link
                                            href=social.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                        >
                                            <Icon icon=ic::social_icon(&social.label) />
                                            {social.label.clone()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>

            <div class=css::bottom>
                <span>{format!("© {year} {}. All rights reserved.", profile.name)}</span>
            </div>

            <Show when=move || ctx.scroll.get().show_scroll_top>
                <button
                    class=css::scrollTop
                    aria-label="Scroll to top"
                    on:click=move |_| dom::scroll_to_top()
                >
                    <Icon icon=ic::ARROW_UP />
                </button>
            </Show>
        </footer>
    }
}
