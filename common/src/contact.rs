use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::notify::Severity;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    pub fn parse(name: &str) -> Option<ContactField> {
        ContactField::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormState {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }
}

// what actually gets handed to the delivery collaborator
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<&ContactFormState> for ContactSubmission {
    fn from(form: &ContactFormState) -> Self {
        ContactSubmission {
            name: form.name.clone(),
            email: form.email.clone(),
            message: form.message.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: &'static str,
    pub severity: Severity,
}

pub const SENT_NOTICE: Notice = Notice {
    message: "Message sent",
    severity: Severity::Success,
};

pub const FAILED_NOTICE: Notice = Notice {
    message: "Message failed to send. Please try again.",
    severity: Severity::Error,
};

// ContactLifecycle
//
// the pure half of the contact form: field edits, the submitting/submitted flags,
// and reset.  none of these methods perform i/o; see finish_submit() for the
// side-effecting half
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactLifecycle {
    form: ContactFormState,
    is_submitting: bool,
    is_submitted: bool,
    submitted_name: Option<String>,
}

impl ContactLifecycle {
    pub fn form(&self) -> &ContactFormState {
        &self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.is_submitted
    }

    pub fn submitted_name(&self) -> Option<&str> {
        self.submitted_name.as_deref()
    }

    // the editable form and the thank-you panel are never shown together
    pub fn is_editable(&self) -> bool {
        !self.is_submitted
    }

    // no restriction here; the view disables inputs while a send is in flight
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        *self.form.get_mut(field) = value.into();
    }

    // start a submission, or None if one is already in flight
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.is_submitting {
            debug!("ignoring contact submit while another is in flight");
            return None;
        }

        self.is_submitting = true;
        Some(ContactSubmission::from(&self.form))
    }

    pub fn resolve(&mut self, delivered: bool) -> Notice {
        self.is_submitting = false;

        if delivered {
            self.is_submitted = true;
            self.submitted_name = Some(self.form.name.clone());
            SENT_NOTICE
        } else {
            // fields are left exactly as the user typed them
            FAILED_NOTICE
        }
    }

    pub fn reset(&mut self) {
        self.form = ContactFormState::default();
        self.is_submitted = false;
        self.submitted_name = None;
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            "Sending..."
        } else if self.is_submitted {
            "Sent!"
        } else {
            "Send Message"
        }
    }

    pub fn submit_disabled(&self) -> bool {
        self.is_submitting || self.is_submitted
    }

    pub fn thanks_line(&self) -> String {
        match self.submitted_name() {
            Some(name) if !name.is_empty() => format!("Thanks, {name}. "),
            _ => String::new(),
        }
    }
}

// where the lifecycle state lives; lets the async half work against a RefCell in
// tests and a reactive signal in the browser
pub trait LifecycleHandle {
    fn with_mut<R>(&self, f: impl FnOnce(&mut ContactLifecycle) -> R) -> R;
}

impl LifecycleHandle for RefCell<ContactLifecycle> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut ContactLifecycle) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

impl<T: LifecycleHandle + ?Sized> LifecycleHandle for Rc<T> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut ContactLifecycle) -> R) -> R {
        (**self).with_mut(f)
    }
}

// remote delivery of a submission; the failure reason is opaque to the form
#[async_trait(?Send)]
pub trait ContactDelivery {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<()>;
}

// transient user-facing notifications
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

// Liveness
//
// shared flag owned by the surface that started a submission.  once the surface
// unmounts, late results are discarded instead of being applied
#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Default for Liveness {
    fn default() -> Self {
        Liveness(Rc::new(Cell::new(true)))
    }
}

impl Liveness {
    pub fn new() -> Self {
        Liveness::default()
    }

    pub fn is_live(&self) -> bool {
        self.0.get()
    }

    pub fn end(&self) {
        self.0.set(false);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Failed,
    // a submission was already in flight
    Ignored,
    // the surface went away before delivery resolved
    Discarded,
}

// send an already-started submission and apply the result
pub async fn finish_submit<F, D, N>(
    form: &F,
    submission: ContactSubmission,
    live: &Liveness,
    delivery: &D,
    notifier: &N,
) -> SubmitOutcome
where
    F: LifecycleHandle + ?Sized,
    D: ContactDelivery + ?Sized,
    N: Notifier + ?Sized,
{
    let result = delivery.deliver(&submission).await;

    if !live.is_live() {
        debug!("contact form unmounted before delivery resolved, dropping result");
        return SubmitOutcome::Discarded;
    }

    if let Err(err) = &result {
        error!("failed to deliver contact message: {err}");
    }

    let notice = form.with_mut(|lifecycle| lifecycle.resolve(result.is_ok()));
    notifier.notify(notice.message, notice.severity);

    match result {
        Ok(()) => SubmitOutcome::Delivered,
        Err(_) => SubmitOutcome::Failed,
    }
}

// the whole submit path: guard, mark submitting, deliver, resolve
//
// is_submitting is set before the first suspension point, i.e. by the time the
// returned future has been polled once
pub async fn handle_submit<F, D, N>(form: &F, live: &Liveness, delivery: &D, notifier: &N) -> SubmitOutcome
where
    F: LifecycleHandle + ?Sized,
    D: ContactDelivery + ?Sized,
    N: Notifier + ?Sized,
{
    let Some(submission) = form.with_mut(ContactLifecycle::begin_submit) else {
        return SubmitOutcome::Ignored;
    };

    finish_submit(form, submission, live, delivery, notifier).await
}
