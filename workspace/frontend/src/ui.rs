pub mod error;
pub mod loading;
pub mod notifier;
pub mod toast;
