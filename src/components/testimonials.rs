//! Auto-rotating testimonial slider.
//!
//! A [`WrapCursor`] drives the slider. An interval advances it every
//! `TESTIMONIAL_INTERVAL`; manual navigation restarts the interval so a
//! quote the visitor picked is not replaced right away.

use leptos::prelude::*;
use leptos_icons::Icon;

use folio_core::{Testimonial, WrapCursor};

use crate::app::SiteContext;
use crate::components::Reveal;
use crate::components::icons as ic;
use crate::config::TESTIMONIAL_INTERVAL;
use crate::utils::format::initials;
use crate::utils::timer::IntervalSlot;

stylance::import_crate_style!(css, "src/components/testimonials.module.css");
stylance::import_crate_style!(section_css, "src/components/sections.module.css");

#[component]
pub fn Testimonials() -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext must be provided");
    let (testimonials, companies) = ctx
        .content
        .with_value(|c| (c.testimonials.clone(), c.companies.clone()));
    let testimonials = StoredValue::new(testimonials);

    let cursor = RwSignal::new(WrapCursor::new(testimonials.with_value(Vec::len)));
    let rotation = IntervalSlot::new();

    let start = move || {
        rotation.clear();
        if rotates(cursor.get_untracked()) {
            rotation.restart(TESTIMONIAL_INTERVAL, move || cursor.update(WrapCursor::next));
        }
    };
    start();
    rotation.clear_on_cleanup();

    let navigate = move |step: fn(&mut WrapCursor)| {
        cursor.update(step);
        start();
    };

    let current = move || {
        let index = cursor.with(|c| c.index())?;
        testimonials.with_value(|all| all.get(index).cloned())
    };

    let dots = move || {
        let (len, active) = cursor.with(|c| (c.len(), c.index()));
        (0..len)
            .map(|i| {
                let class = if active == Some(i) {
                    format!("{} {}", section_css::dot, section_css::dotActive)
                } else {
                    section_css::dot.to_string()
                };
                view! {
                    <button
                        class=class
                        aria-label=format!("Show testimonial {}", i + 1)
                        on:click=move |_| {
                            cursor.update(|c| {
                                let _ = c.select(i);
                            });
                            start();
                        }
                    />
                }
            })
            .collect_view()
    };

    view! {
        <section id="testimonials" class=format!("{} {}", section_css::section, section_css::alt)>
            <div class=section_css::container>
                <Reveal class=section_css::header>
                    <h2 class=section_css::title>"What People Say"</h2>
                    <p class=section_css::subtitle>
                        "Feedback from clients, partners, and collaborators."
                    </p>
                </Reveal>

                <Reveal class=css::slider>
                    <button
                        class=section_css::navButton
                        aria-label="Previous testimonial"
                        on:click=move |_| navigate(WrapCursor::previous)
                    >
                        <Icon icon=ic::CHEVRON_LEFT />
                    </button>

                    {move || current().map(|t| view! { <Quote testimonial=t /> })}

                    <button
                        class=section_css::navButton
                        aria-label="Next testimonial"
                        on:click=move |_| navigate(WrapCursor::next)
                    >
                        <Icon icon=ic::CHEVRON_RIGHT />
                    </button>
                </Reveal>

                <div class=css::dots>
                    <div class=section_css::dots>{dots}</div>
                </div>

                <Reveal class=css::companies>
                    <p class=css::companiesLabel>"Trusted by teams at"</p>
                    <ul class=css::companyList>
                        {companies
                            .into_iter()
                            .map(|name| view! { <li class=css::company>{name}</li> })
                            .collect_view()}
                    </ul>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn Quote(testimonial: Testimonial) -> impl IntoView {
    let rating = testimonial.rating.min(5);

    view! {
        <figure class=format!("{} {}", section_css::card, css::quote)>
            <div class=css::stars aria-label=format!("{rating} out of 5")>
                {(0..rating).map(|_| view! { <Icon icon=ic::STAR /> }).collect_view()}
            </div>
            <blockquote class=css::text>{testimonial.quote}</blockquote>
            <figcaption class=css::author>
                <span class=css::avatar aria-hidden="true">{initials(&testimonial.name)}</span>
                <span>
                    <span class=css::name>{testimonial.name}</span>
                    <span class=css::role>{testimonial.role}</span>
                </span>
            </figcaption>
        </figure>
    }
}

/// Auto-advance only makes sense with something to advance to.
fn rotates(cursor: WrapCursor) -> bool {
    cursor.len() > 1
}
