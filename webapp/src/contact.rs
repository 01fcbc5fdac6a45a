use async_trait::async_trait;
use dioxus::prelude::*;

use api::contact::{SendContactReq, send_contact};
use common::contact::{
    ContactDelivery, ContactField, ContactLifecycle, ContactSubmission, LifecycleHandle, Liveness,
    finish_submit,
};

use crate::components::toaster::ToastNotifier;

// the form state lives in a signal so edits and results re-render the section
#[derive(Clone, Copy)]
struct FormSignal(Signal<ContactLifecycle>);

impl LifecycleHandle for FormSignal {
    fn with_mut<R>(&self, f: impl FnOnce(&mut ContactLifecycle) -> R) -> R {
        let mut signal = self.0;
        let mut lifecycle = signal.write();
        f(&mut lifecycle)
    }
}

struct ApiDelivery;

#[async_trait(?Send)]
impl ContactDelivery for ApiDelivery {
    async fn deliver(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        send_contact(&SendContactReq {
            name: submission.name.clone(),
            email: submission.email.clone(),
            message: submission.message.clone(),
        })
        .await?;

        Ok(())
    }
}

#[derive(Clone, PartialEq, Props)]
struct ContactInputProps {
    form: Signal<ContactLifecycle>,
    field: ContactField,
    label: &'static str,
}

#[component]
fn ContactInput(props: ContactInputProps) -> Element {
    let mut form = props.form;
    let field = props.field;

    let value = form.read().form().get(field).to_owned();
    let disabled = form.read().is_submitting();
    let name = field.as_str();

    rsx! {
        div { class: "form-field",
            label { r#for: "contact-{name}", "{props.label}" }
            match field {
                ContactField::Message => rsx! {
                    textarea {
                        id: "contact-{name}",
                        name: "{name}",
                        rows: 6,
                        required: true,
                        disabled,
                        value: "{value}",
                        oninput: move |evt| form.write().update_field(field, evt.value()),
                    }
                },
                ContactField::Name | ContactField::Email => rsx! {
                    input {
                        id: "contact-{name}",
                        name: "{name}",
                        r#type: if field == ContactField::Email { "email" } else { "text" },
                        required: true,
                        disabled,
                        value: "{value}",
                        oninput: move |evt| form.write().update_field(field, evt.value()),
                    }
                },
            }
        }
    }
}

#[component]
pub fn ContactSection() -> Element {
    let mut form = use_signal(ContactLifecycle::default);

    // late delivery results are dropped once this section is gone
    let live = use_hook(Liveness::new);
    use_drop({
        let live = live.clone();
        move || live.end()
    });

    let (editable, submit_disabled, submit_label, thanks_line) = {
        let lifecycle = form.read();
        (
            lifecycle.is_editable(),
            lifecycle.submit_disabled(),
            lifecycle.submit_label(),
            lifecycle.thanks_line(),
        )
    };

    rsx! {
        section { id: "contact", class: "section",
            div { class: "container",
                h2 { class: "section-title", "Contact" }

                if editable {
                    form {
                        class: "contact-form",
                        onsubmit: move |_| {
                            let handle = FormSignal(form);

                            // claimed synchronously, so a second click in the same frame is a no-op
                            let Some(submission) = handle.with_mut(ContactLifecycle::begin_submit) else {
                                return;
                            };

                            let live = live.clone();
                            spawn(async move {
                                finish_submit(&handle, submission, &live, &ApiDelivery, &ToastNotifier).await;
                            });
                        },
                        ContactInput { form, field: ContactField::Name, label: "Name" }
                        ContactInput { form, field: ContactField::Email, label: "Email" }
                        ContactInput { form, field: ContactField::Message, label: "Message" }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: submit_disabled,
                            "{submit_label}"
                        }
                    }
                } else {
                    div { class: "contact-thanks",
                        p { "{thanks_line}I'll get back to you soon." }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| form.write().reset(),
                            "Send another message"
                        }
                    }
                }
            }
        }
    }
}
