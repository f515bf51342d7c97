use dioxus::prelude::*;
use techbuzz_config::Config;
use techbuzz_engine::contact::CONFIRMATION_MESSAGE;
use techbuzz_engine::{ContactField, ContactForm, MapView, PreviewAssets};

use crate::ui::components::MapEmbed;

/// Hidden frame that receives the form post so the app stays on this page.
const SUBMIT_TARGET: &str = "contact-submit";

#[derive(Debug, Clone, PartialEq)]
enum Status {
    Editing,
    Rejected(String),
    Sent,
}

#[component]
pub fn Contact() -> Element {
    let config = use_context::<Config>();
    let assets = use_context::<PreviewAssets>();
    let mut form = use_signal(ContactForm::default);
    let mut status = use_signal(|| Status::Editing);

    let map = MapView::from(&config.map);

    rsx! {
        section {
            class: "contact",
            h2 { "Send a Message" }
            p {
                class: "description",
                "Have questions or suggestions? We'd love to hear from you."
            }
            form {
                class: "contact-form",
                action: "{config.contact_endpoint}",
                method: "POST",
                target: SUBMIT_TARGET,
                onsubmit: move |evt: FormEvent| {
                    let outcome = form.read().validate();
                    match outcome {
                        Ok(()) => {
                            log::info!("Contact form submitted");
                            status.set(Status::Sent);
                        }
                        Err(e) => {
                            evt.prevent_default();
                            log::info!("Contact form rejected: {e}");
                            status.set(Status::Rejected(e.to_string()));
                        }
                    }
                },
                input {
                    r#type: "text",
                    name: ContactField::Name.name(),
                    placeholder: ContactField::Name.placeholder(),
                    required: true,
                    value: "{form.read().name}",
                    oninput: move |evt: FormEvent| form.write().set(ContactField::Name, evt.value()),
                }
                input {
                    r#type: "email",
                    name: ContactField::Email.name(),
                    placeholder: ContactField::Email.placeholder(),
                    required: true,
                    value: "{form.read().email}",
                    oninput: move |evt: FormEvent| form.write().set(ContactField::Email, evt.value()),
                }
                textarea {
                    name: ContactField::Message.name(),
                    placeholder: ContactField::Message.placeholder(),
                    rows: "5",
                    required: true,
                    value: "{form.read().message}",
                    oninput: move |evt: FormEvent| form.write().set(ContactField::Message, evt.value()),
                }
                button { r#type: "submit", "Send Message" }
            }
            {match status() {
                Status::Editing => rsx! {},
                Status::Rejected(message) => rsx! {
                    p { class: "form-error", "{message}" }
                },
                Status::Sent => rsx! {
                    p { class: "form-notice", "{CONFIRMATION_MESSAGE}" }
                },
            }}
            iframe { class: "hidden-frame", name: SUBMIT_TARGET }
            h2 { "Find Us" }
            MapEmbed { view: map, assets }
        }
    }
}
