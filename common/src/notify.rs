#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

pub type ToastId = u64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
}

// the toasts currently on screen, oldest first
//
// expiry is the caller's business (a timer per toast in the browser); the queue
// only hands out ids and forgets toasts when told to
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: ToastId,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;

        self.toasts.push(Toast {
            id,
            message: message.into(),
            severity,
        });

        id
    }

    // dismissing an id that already expired is fine
    pub fn dismiss(&mut self, id: ToastId) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}
