use std::cell::RefCell;

use tracing::debug;

/// User facing message channel, one call per message.
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Keeps alerts in order so the caller decides how to surface them.
#[derive(Debug, Default)]
pub struct AlertLog {
    alerts: RefCell<Vec<String>>,
}

impl AlertLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.alerts.borrow().last().cloned()
    }
}

impl Notifier for AlertLog {
    fn alert(&self, message: &str) {
        debug!(alert = message, "user alert");
        self.alerts.borrow_mut().push(message.to_string());
    }
}
