//! Filterable project gallery with a spotlight carousel.
//!
//! Filter buttons, the card grid, and the spotlight all read one
//! [`CarouselFilter`]; clicking a card selects it in the spotlight.

use leptos::prelude::*;
use leptos_icons::Icon;

use folio_core::{CarouselFilter, Project};

use crate::app::SiteContext;
use crate::components::icons as ic;
use crate::components::{CarouselNav, FilterBar, Reveal};
use crate::utils::format::capitalize;

stylance::import_crate_style!(css, "src/components/projects.module.css");
stylance::import_crate_style!(section_css, "src/components/sections.module.css");

#[component]
pub fn Projects() -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext must be provided");
    let carousel = RwSignal::new(ctx.content.with_value(|c| {
        CarouselFilter::new(c.projects.clone(), c.project_categories.iter().cloned())
    }));

    let grid = move || {
        carousel.with(|c| {
            let current = c.current_index();
            c.visible_items()
                .into_iter()
                .enumerate()
                .map(|(i, project)| {
                    let class = if current == Some(i) {
                        format!("{} {}", css::tile, css::tileActive)
                    } else {
                        css::tile.to_string()
                    };
                    view! {
                        <button
                            class=class
                            on:click=move |_| {
                                carousel.update(|c| {
                                    let _ = c.select_index(i);
                                });
                            }
                        >
                            <span class=css::tileCategory>{capitalize(&project.category)}</span>
                            <span class=css::tileTitle>{project.title.clone()}</span>
                        </button>
                    }
                })
                .collect_view()
        })
    };

    let spotlight = move || match carousel.with(|c| c.current().cloned()) {
        Some(project) => view! { <Spotlight project=project /> }.into_any(),
        None => view! {
            <p class=section_css::empty>"No projects in this category yet."</p>
        }
        .into_any(),
    };

    view! {
        <section id="projects" class=section_css::section>
            <div class=section_css::container>
                <Reveal class=section_css::header>
                    <h2 class=section_css::title>"Featured Projects"</h2>
                    <p class=section_css::subtitle>
                        "Marketplaces, trading tools, and web builds. Filter by area or step through them one at a time."
                    </p>
                </Reveal>

                <FilterBar carousel=carousel />
                <div class=css::grid>{grid}</div>
                {spotlight}
                <CarouselNav carousel=carousel item_name="project" />
            </div>
        </section>
    }
}

#[component]
fn Spotlight(project: Project) -> impl IntoView {
    let links = (project.link.is_some() || project.github.is_some()).then(|| {
        view! {
            <div class=css::links>
                {project
                    .link
                    .map(|url| {
                        view! {
                            <a class=css::link href=url target="_blank" rel="noopener noreferrer">
                                <Icon icon=ic::EXTERNAL_LINK />
                                "Live Demo"
                            </a>
                        }
                    })}
                {project
                    .github
                    .map(|url| {
                        view! {
                            <a class=css::link href=url target="_blank" rel="noopener noreferrer">
                                <Icon icon=ic::GITHUB />
                                "Source"
                            </a>
                        }
                    })}
            </div>
        }
    });

    view! {
        <article class=format!("{} {}", section_css::card, css::spotlight)>
            <div class=css::body>
                <span class=section_css::tag>{capitalize(&project.category)}</span>
                <h3 class=css::title>{project.title}</h3>
                <p class=css::description>{project.description}</p>
                <ul class=section_css::tags>
                    {project
                        .technologies
                        .into_iter()
                        .map(|t| view! { <li class=section_css::tag>{t}</li> })
                        .collect_view()}
                </ul>
                {links}
            </div>

            <dl class=css::stats>
                {project
                    .stats
                    .into_iter()
                    .map(|stat| {
                        view! {
                            <div class=css::stat>
                                <dt class=css::statLabel>{stat.label}</dt>
                                <dd class=css::statValue>{stat.value}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
        </article>
    }
}
