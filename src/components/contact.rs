//! Contact section: direct details plus a client-side message form.
//!
//! Nothing leaves the browser. A valid submission waits `SUBMIT_DELAY`,
//! shows a confirmation for `RESET_DELAY`, then clears the form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use folio_core::{ContactField, ContactMessage, SubmissionState};

use crate::app::SiteContext;
use crate::components::icons as ic;
use crate::components::{Reveal, stagger};
use crate::config::contact::{RESET_DELAY, SUBMIT_DELAY};
use crate::utils::timer::TimerSlot;

stylance::import_crate_style!(css, "src/components/contact.module.css");
stylance::import_crate_style!(section_css, "src/components/sections.module.css");

#[component]
pub fn Contact() -> impl IntoView {
    let ctx = use_context::<SiteContext>().expect("SiteContext must be provided");
    let (profile, socials) = ctx
        .content
        .with_value(|c| (c.profile.clone(), c.socials.clone()));

    let message = RwSignal::new(ContactMessage::default());
    let state = RwSignal::new(SubmissionState::Idle);
    let error = RwSignal::new(None::<String>);
    let busy = Signal::derive(move || state.get() != SubmissionState::Idle);

    let timer = TimerSlot::new();
    timer.clear_on_cleanup();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let mut next = state.get_untracked();
        if let Err(err) = message.with_untracked(|msg| next.begin(msg)) {
            log::debug!("contact form rejected: {err}");
            error.set(Some(err.to_string()));
            return;
        }
        error.set(None);
        state.set(next);

        timer.schedule(SUBMIT_DELAY, move || {
            state.update(SubmissionState::complete);
            log::info!("contact message sent");

            timer.schedule(RESET_DELAY, move || {
                state.update(SubmissionState::reset);
                message.update(ContactMessage::clear);
            });
        });
    };

    view! {
        <section id="contact" class=format!("{} {}", section_css::section, section_css::alt)>
            <div class=section_css::container>
                <Reveal class=section_css::header>
                    <h2 class=section_css::title>"Let's Work Together"</h2>
                    <p class=section_css::subtitle>
                        "Have a project, a partnership, or a question about the markets? Send a message."
                    </p>
                </Reveal>

                <div class=css::layout>
                    <Reveal class=css::info>
                        <h3 class=css::heading>"Get in Touch"</h3>
                        <InfoRow
                            icon=ic::MAIL
                            label="Email"
                            value=profile.email.clone()
                            href=format!("mailto:{}", profile.email)
                        />
                        {profile.phone.map(|phone| {
                            view! {
                                <InfoRow
                                    icon=ic::PHONE
                                    label="Phone"
                                    value=phone.clone()
                                    href=tel_href(&phone)
                                />
                            }
                        })}
                        <InfoRow icon=ic::LOCATION label="Location" value=profile.location />

                        <div class=css::socials>
                            {socials
                                .into_iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            class=css::social
                                            href=social.url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=social.label.clone()
                                        >
                                            <Icon icon=ic::social_icon(&social.label) />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>

                    <Reveal delay_ms=stagger(1)>
                        <form class=format!("{} {}", section_css::card, css::form) on:submit=on_submit novalidate=true>
                            <div class=css::row>
                                <FormField field=ContactField::Name message=message disabled=busy />
                                <FormField field=ContactField::Email message=message disabled=busy />
                            </div>
                            <FormField field=ContactField::Subject message=message disabled=busy />
                            <FormField field=ContactField::Message message=message disabled=busy multiline=true />

                            {move || error.get().map(|msg| view! { <p class=css::error role="alert">{msg}</p> })}

                            <Show when=move || state.get() == SubmissionState::Submitted>
                                <p class=css::success role="status">
                                    <Icon icon=ic::SUCCESS />
                                    "Thanks! Your message has been sent."
                                </p>
                            </Show>

                            <button type="submit" class=css::submit disabled=move || busy.get()>
                                <Icon icon=ic::SEND />
                                {move || submit_label(state.get())}
                            </button>
                        </form>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InfoRow(
    icon: icondata::Icon,
    label: &'static str,
    value: String,
    #[prop(optional)] href: Option<String>,
) -> impl IntoView {
    let body = match href {
        Some(href) => view! { <a class=css::infoValue href=href>{value}</a> }.into_any(),
        None => view! { <span class=css::infoValue>{value}</span> }.into_any(),
    };

    view! {
        <div class=css::infoRow>
            <span class=css::infoIcon><Icon icon=icon /></span>
            <div>
                <span class=css::infoLabel>{label}</span>
                {body}
            </div>
        </div>
    }
}

/// Labelled input bound to one field of the message.
#[component]
fn FormField(
    field: ContactField,
    message: RwSignal<ContactMessage>,
    disabled: Signal<bool>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let id = format!("contact-{}", field.label());
    let value = move || message.with(|m| m.field(field).to_string());
    let input_type = if field == ContactField::Email { "email" } else { "text" };
    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        message.update(|m| *m.field_mut(field) = text);
    };

    let control = if multiline {
        view! {
            <textarea
                id=id.clone()
                name=field.label()
                class=css::input
                rows="6"
                placeholder=placeholder(field)
                prop:value=value
                on:input=on_input
                disabled=move || disabled.get()
            />
        }
        .into_any()
    } else {
        view! {
            <input
                id=id.clone()
                name=field.label()
                type=input_type
                class=css::input
                placeholder=placeholder(field)
                prop:value=value
                on:input=on_input
                disabled=move || disabled.get()
            />
        }
        .into_any()
    };

    view! {
        <div class=css::field>
            <label class=css::label for=id>{field_title(field)}</label>
            {control}
        </div>
    }
}

fn field_title(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "Name",
        ContactField::Email => "Email",
        ContactField::Subject => "Subject",
        ContactField::Message => "Message",
    }
}

fn placeholder(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "Your name",
        ContactField::Email => "you@example.com",
        ContactField::Subject => "What is this about?",
        ContactField::Message => "Tell me about your project...",
    }
}

fn submit_label(state: SubmissionState) -> &'static str {
    match state {
        SubmissionState::Idle => "Send Message",
        SubmissionState::Submitting => "Sending...",
        SubmissionState::Submitted => "Message Sent!",
    }
}

/// `tel:` link with the spaces stripped (`"+234 81" -> "tel:+23481"`).
fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}
