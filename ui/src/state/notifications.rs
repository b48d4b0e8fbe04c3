use gloo_timers::callback::Timeout;
use leptos::*;

/// Global notification capability
pub trait Notifier {
    fn notify_success(&self, message: &str);
    fn notify_error(&self, message: &str);
}

/// Toast severity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    pub fn class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "bg-green-500/10 border-green-500/30 text-green-400",
            ToastLevel::Error => "bg-red-500/10 border-red-500/30 text-red-400",
        }
    }
}

/// A notification on screen
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Toast queue shared through Leptos context
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    /// Auto-dismiss delay, 0 keeps toasts until dismissed
    duration_ms: u32,
}

impl Toasts {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            next_id: store_value(1),
            duration_ms,
        }
    }

    /// Toasts currently on screen, oldest first
    pub fn items(&self) -> Signal<Vec<Toast>> {
        self.items.into()
    }

    /// Add a toast and return its id
    pub fn push(&self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        let toast = Toast {
            id,
            level,
            message: message.into(),
        };
        self.items.update(|items| items.push(toast));
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|t| t.id != id));
    }

    fn show(&self, level: ToastLevel, message: &str) {
        let id = self.push(level, message);
        if self.duration_ms > 0 {
            let toasts = *self;
            Timeout::new(self.duration_ms, move || toasts.dismiss(id)).forget();
        }
    }
}

impl Notifier for Toasts {
    fn notify_success(&self, message: &str) {
        self.show(ToastLevel::Success, message);
    }

    fn notify_error(&self, message: &str) {
        self.show(ToastLevel::Error, message);
    }
}
