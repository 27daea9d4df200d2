//! Skill levels and tool chips.

use leptos::prelude::*;

use crate::app::SiteContext;
use crate::components::{Reveal, stagger};

stylance::import_crate_style!(css, "src/components/skills.module.css");
stylance::import_crate_style!(section_css, "src/components/sections.module.css");

#[component]
pub fn Skills() -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext must be provided");
    let (groups, tools) = ctx
        .content
        .with_value(|c| (c.skills.clone(), c.tools.clone()));

    view! {
        <section id="skills" class=format!("{} {}", section_css::section, section_css::alt)>
            <div class=section_css::container>
                <Reveal class=section_css::header>
                    <h2 class=section_css::title>"Skills & Tools"</h2>
                    <p class=section_css::subtitle>
                        "What I reach for when leading teams, trading, and building for the web."
                    </p>
                </Reveal>

                <div class=css::groups>
                    {groups
                        .into_iter()
                        .enumerate()
                        .map(|(i, group)| {
                            view! {
                                <Reveal delay_ms=stagger(i)>
                                    <div class=section_css::card>
                                        <h3 class=css::groupTitle>{group.title}</h3>
                                        {group
                                            .skills
                                            .into_iter()
                                            .map(|skill| {
                                                let percent = skill.percent();
                                                view! {
                                                    <div class=css::skill>
                                                        <div class=css::skillHeader>
                                                            <span>{skill.name}</span>
                                                            <span class=css::level>{format!("{percent}%")}</span>
                                                        </div>
                                                        <div
                                                            class=css::bar
                                                            role="progressbar"
                                                            aria-valuemin="0"
                                                            aria-valuemax="100"
                                                            aria-valuenow=percent.to_string()
                                                        >
                                                            <div
                                                                class=css::barFill
                                                                style=format!("width: {percent}%;")
                                                            />
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <Reveal class=css::tools>
                    <h3 class=css::groupTitle>"Tools & Technologies"</h3>
                    <ul class=format!("{} {}", section_css::tags, css::toolList)>
                        {tools
                            .into_iter()
                            .map(|t| view! { <li class=section_css::tag>{t}</li> })
                            .collect_view()}
                    </ul>
                </Reveal>
            </div>
        </section>
    }
}
