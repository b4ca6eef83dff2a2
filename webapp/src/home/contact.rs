use dioxus::prelude::*;

use crate::components::{section_header::SectionHeader, social_links::SocialLinks};
use portfolio::{
    catalog::{Profile, SocialLink},
    contact::{ContactField, ContactForm},
    navigation::SectionAnchor,
};

#[derive(Clone, PartialEq, Props)]
struct ContactInputProps {
    field: ContactField,
    form_signal: Signal<ContactForm>,
}

#[component]
fn ContactInput(props: ContactInputProps) -> Element {
    let field = props.field;
    let mut form_signal = props.form_signal;

    let value = form_signal.read().get(field).to_owned();

    rsx! {
        div { class: "form-group",
            label { class: "form-label", "{field.label()}" }
            if field.multiline() {
                textarea {
                    class: "form-textarea",
                    name: field.name(),
                    placeholder: field.placeholder(),
                    value: "{value}",
                    oninput: move |evt| form_signal.write().update(field, evt.value()),
                }
            } else {
                input {
                    class: "form-input",
                    r#type: field.input_type(),
                    name: field.name(),
                    placeholder: field.placeholder(),
                    value: "{value}",
                    oninput: move |evt| form_signal.write().update(field, evt.value()),
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ContactProps {
    profile: Profile,
    social: Vec<SocialLink>,
}

// the form is display-only, submitting it keeps the page where it is and
// sends nothing anywhere
#[component]
pub fn Contact(props: ContactProps) -> Element {
    let profile = props.profile;
    let form_signal = use_signal(ContactForm::default);

    rsx! {
        section { id: SectionAnchor::Contact.id(), class: "contact",
            div { class: "container",
                SectionHeader {
                    title: String::from("Get In Touch"),
                    subtitle: String::from("Have a project in mind or just want to say hello? My inbox is open."),
                }

                div { class: "contact-grid",
                    div { class: "card contact-info",
                        h3 { "Contact Information" }
                        div { class: "contact-detail",
                            div { class: "contact-detail-label", "Email" }
                            a { href: "mailto:{profile.email}", "{profile.email}" }
                        }
                        div { class: "contact-detail",
                            div { class: "contact-detail-label", "Location" }
                            span { "{profile.location}" }
                        }
                        SocialLinks { links: props.social.clone() }
                    }

                    form {
                        class: "card contact-form",
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            form_signal.read().submit();
                        },
                        for field in ContactField::all() {
                            ContactInput { key: "{field.name()}", field, form_signal }
                        }
                        button { class: "btn btn-primary", r#type: "submit", "Send Message" }
                    }
                }
            }
        }
    }
}
