mod notifier;
mod popup;

#[cfg(test)]
mod tests;

pub use notifier::{AlertLog, Notifier};
pub use popup::Popup;
