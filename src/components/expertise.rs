//! Areas of expertise as cards.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::SiteContext;
use crate::components::icons as ic;
use crate::components::{Reveal, stagger};

stylance::import_crate_style!(css, "src/components/expertise.module.css");
stylance::import_crate_style!(section_css, "src/components/sections.module.css");

#[component]
pub fn Expertise() -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext must be provided");
    let areas = ctx.content.with_value(|c| c.expertise.clone());

    view! {
        <section id="expertise" class=format!("{} {}", section_css::section, section_css::alt)>
            <div class=section_css::container>
                <Reveal class=section_css::header>
                    <h2 class=section_css::title>"Expertise"</h2>
                    <p class=section_css::subtitle>
                        "Three disciplines that feed into each other: running a company, \
                         reading the markets, and shipping the software."
                    </p>
                </Reveal>

                <div class=css::grid>
                    {areas
                        .into_iter()
                        .enumerate()
                        .map(|(i, area)| {
                            let icon = ic::EXPERTISE[i % ic::EXPERTISE.len()];
                            view! {
                                <Reveal delay_ms=stagger(i)>
                                    <article class=format!("{} {}", section_css::card, css::area)>
                                        <span class=css::icon><Icon icon=icon /></span>
                                        <h3 class=css::areaTitle>{area.title}</h3>
                                        <p class=css::areaSubtitle>{area.subtitle}</p>
                                        <p class=css::description>{area.description}</p>

                                        <ul class=section_css::tags>
                                            {area
                                                .skills
                                                .into_iter()
                                                .map(|s| view! { <li class=section_css::tag>{s}</li> })
                                                .collect_view()}
                                        </ul>

                                        <ul class=css::achievements>
                                            {area
                                                .achievements
                                                .into_iter()
                                                .map(|a| {
                                                    view! {
                                                        <li>
                                                            <Icon icon=ic::SUCCESS />
                                                            {a}
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </article>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
