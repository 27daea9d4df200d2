//! Landing section: greeting, typewriter headline, call-to-action buttons.

mod particles;
mod typewriter;

use leptos::prelude::*;
use leptos_icons::Icon;

use folio_core::TypewriterCycler;

use crate::app::SiteContext;
use crate::components::icons as ic;
use crate::config::{HERO_SCROLL_TARGET, HERO_WORK_TARGET, PARTICLE_COUNT, TYPEWRITER_TIMING};
use crate::utils::dom;

use particles::Particles;
use typewriter::Typewriter;

stylance::import_crate_style!(css, "src/components/hero/hero.module.css");

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext must be provided");
    let (hero, headline) = ctx
        .content
        .with_value(|c| (c.hero.clone(), c.profile.headline.clone()));

    // Invalid phrases surface through the ErrorBoundary.
    let headline_text = TypewriterCycler::with_timing(hero.phrases, TYPEWRITER_TIMING)
        .map(|cycler| view! { <Typewriter cycler=cycler /> });

    view! {
        <section id="home" class=css::hero>
            <Particles count=PARTICLE_COUNT />

            <div class=css::content>
                <p class=css::greeting>{hero.greeting}</p>
                <h1 class=css::headline>{headline_text}</h1>
                <p class=css::tagline>{headline}</p>
                <p class=css::intro>{hero.intro}</p>

                <div class=css::actions>
                    <button
                        class=css::primary
                        on:click=move |_| {
                            dom::scroll_to_section(HERO_WORK_TARGET);
                        }
                    >
                        <Icon icon=ic::PLAY />
                        "View My Work"
                    </button>
                    <button
                        class=css::secondary
                        on:click=move |_| {
                            dom::scroll_to_section(HERO_SCROLL_TARGET);
                        }
                    >
                        "Get to Know Me"
                    </button>
                </div>
            </div>

            <button
                class=css::scrollHint
                aria-label="Scroll down"
                on:click=move |_| {
                    dom::scroll_to_section(HERO_SCROLL_TARGET);
                }
            >
                <Icon icon=ic::ARROW_DOWN />
            </button>
        </section>
    }
}
