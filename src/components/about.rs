//! Biography and headline numbers.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::SiteContext;
use crate::components::icons as ic;
use crate::components::{Reveal, stagger};

stylance::import_crate_style!(css, "src/components/about.module.css");
stylance::import_crate_style!(section_css, "src/components/sections.module.css");

#[component]
pub fn About() -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext must be provided");
    let (about, profile) = ctx
        .content
        .with_value(|c| (c.about.clone(), c.profile.clone()));

    view! {
        <section id="about" class=section_css::section>
            <div class=section_css::container>
                <Reveal class=section_css::header>
                    <h2 class=section_css::title>"About Me"</h2>
                    <p class=section_css::subtitle>{profile.bio}</p>
                </Reveal>

                <div class=css::layout>
                    <Reveal class=css::story>
                        {about
                            .paragraphs
                            .into_iter()
                            .map(|p| view! { <p class=css::paragraph>{p}</p> })
                            .collect_view()}
                        <p class=css::location>
                            <Icon icon=ic::LOCATION />
                            {profile.location}
                        </p>
                    </Reveal>

                    <div class=css::stats>
                        {about
                            .stats
                            .into_iter()
                            .enumerate()
                            .map(|(i, stat)| {
                                view! {
                                    <Reveal delay_ms=stagger(i)>
                                        <div class=css::stat>
                                            <span class=css::statValue>{stat.value}</span>
                                            <span class=css::statLabel>{stat.label}</span>
                                        </div>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
