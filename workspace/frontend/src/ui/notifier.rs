use super::toast::ToastContext;
use studio_admin::Notifier;
use web_sys::window;

/// Routes controller feedback to the browser.
///
/// Alerts and confirmations use the native blocking dialogs. Notices become
/// success toasts when a toast provider is mounted.
pub struct BrowserNotifier {
    toasts: Option<ToastContext>,
}

impl BrowserNotifier {
    pub fn new(toasts: Option<ToastContext>) -> Self {
        if toasts.is_none() {
            log::warn!("No toast provider mounted, notices fall back to alerts");
        }
        Self { toasts }
    }
}

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        let shown = window().is_some_and(|w| w.alert_with_message(message).is_ok());
        if !shown {
            log::error!("Could not open alert: {}", message);
            if let Some(toasts) = &self.toasts {
                toasts.show_error(message.to_string());
            }
        }
    }

    fn notice(&self, message: &str) {
        match &self.toasts {
            Some(toasts) => toasts.show_success(message.to_string()),
            None => self.alert(message),
        }
    }

    fn confirm(&self, message: &str) -> bool {
        match window().map(|w| w.confirm_with_message(message)) {
            Some(Ok(answer)) => answer,
            _ => {
                log::error!("Could not open confirmation dialog");
                false
            }
        }
    }
}
