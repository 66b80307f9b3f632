//! View-state controller for the dashboard.
//!
//! The controller owns the snapshot lifecycle (`Loading` then `Loaded` or
//! `Error`), the balance-edit dialog inputs, and every network call. It is
//! single-threaded: state lives in a `RefCell` and is never borrowed across an
//! `.await`, so the UI may read it at any time while requests are in flight.
//! A UI binding subscribes with [`DashboardController::set_listener`] and
//! re-renders whenever it fires.

use crate::api::{self, ActionOutcome, AdminAction, Transport};
use crate::config::{AdminConfig, CredentialStatus};
use crate::error::{ApiError, BalanceInputError};
use common::{DashboardSnapshot, UserId, UserRecord};
use std::cell::RefCell;
use std::rc::Rc;

pub const RESET_CONFIRMATION: &str =
    "Сбросить всю статистику? Это действие нельзя отменить.";
pub const RESET_DONE: &str = "Статистика сброшена";
pub const RESET_FAILED: &str = "Не удалось сбросить статистику";
pub const BALANCE_UPDATE_FAILED: &str = "Не удалось обновить баланс";

/// What the dashboard page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Loaded(Rc<DashboardSnapshot>),
    Error(ApiError),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn snapshot(&self) -> Option<&Rc<DashboardSnapshot>> {
        match self {
            ViewState::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            ViewState::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Transient inputs of the balance-edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceDialog {
    /// The dialog is open while a user is selected.
    pub user_id: Option<UserId>,
    pub amount: String,
    pub reason: String,
    pub submitting: bool,
}

impl BalanceDialog {
    pub fn is_open(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Result of [`DashboardController::update_balance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceUpdate {
    Applied,
    Invalid(BalanceInputError),
    Rejected(String),
    /// Another balance update was still in flight.
    Busy,
}

/// Result of [`DashboardController::reset_stats`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    Declined,
    Done,
    Failed(String),
    /// A reset was already in flight; nothing was asked or sent.
    Busy,
}

/// User-facing feedback the controller needs from its host.
pub trait Notifier {
    /// Blocking message the admin has to acknowledge.
    fn alert(&self, message: &str);
    /// Non-blocking confirmation that something worked.
    fn notice(&self, message: &str);
    /// Blocking yes/no question.
    fn confirm(&self, message: &str) -> bool;
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn alert(&self, message: &str) {
        (**self).alert(message)
    }

    fn notice(&self, message: &str) {
        (**self).notice(message)
    }

    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

/// Parses the amount field: a signed base-10 integer, surrounding spaces ignored.
pub fn parse_amount_delta(raw: &str) -> Result<i64, BalanceInputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BalanceInputError::EmptyAmount);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| BalanceInputError::InvalidAmount(trimmed.to_string()))
}

/// Reason sent to the server; blank input becomes the default text.
pub fn reason_or_default(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        api::DEFAULT_BALANCE_REASON.to_string()
    } else {
        trimmed.to_string()
    }
}

struct Inner {
    state: ViewState,
    dialog: BalanceDialog,
    /// Bumped by every load; responses for an older load are dropped.
    generation: u64,
    resetting: bool,
}

pub struct DashboardController<T, N> {
    config: AdminConfig,
    transport: T,
    notifier: N,
    inner: RefCell<Inner>,
    listener: RefCell<Option<Rc<dyn Fn()>>>,
}

impl<T, N> DashboardController<T, N>
where
    T: Transport,
    N: Notifier,
{
    pub fn new(config: AdminConfig, transport: T, notifier: N) -> Self {
        Self {
            config,
            transport,
            notifier,
            inner: RefCell::new(Inner {
                state: ViewState::Loading,
                dialog: BalanceDialog::default(),
                generation: 0,
                resetting: false,
            }),
            listener: RefCell::new(None),
        }
    }

    /// Registers the callback fired after every state change.
    pub fn set_listener(&self, listener: impl Fn() + 'static) {
        *self.listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    pub fn credential_status(&self) -> CredentialStatus {
        self.config.credential_status()
    }

    pub fn state(&self) -> ViewState {
        self.inner.borrow().state.clone()
    }

    pub fn snapshot(&self) -> Option<Rc<DashboardSnapshot>> {
        self.inner.borrow().state.snapshot().cloned()
    }

    pub fn dialog(&self) -> BalanceDialog {
        self.inner.borrow().dialog.clone()
    }

    /// True from a confirmed reset until its follow-up reload resolves.
    pub fn is_resetting(&self) -> bool {
        self.inner.borrow().resetting
    }

    /// The user the balance dialog is open for, if still in the snapshot.
    pub fn selected_user(&self) -> Option<UserRecord> {
        let inner = self.inner.borrow();
        let user_id = inner.dialog.user_id?;
        inner.state.snapshot()?.find_user(user_id).cloned()
    }

    fn notify(&self) {
        // Clone out first so the listener may call back into the controller
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener();
        }
    }

    /// Fetches the dashboard and replaces the snapshot.
    ///
    /// The state is `Loading` until the response is classified. If another
    /// load starts before this one resolves, this one's result is dropped.
    pub async fn load_dashboard(&self) {
        let generation = {
            let mut inner = self.inner.borrow_mut();
            inner.generation += 1;
            inner.state = ViewState::Loading;
            inner.generation
        };
        self.notify();

        let request = api::dashboard_request(&self.config);
        tracing::debug!(generation, url = %request.url, "Loading dashboard");

        let result = match self.transport.send(request).await {
            Ok(response) => api::parse_dashboard(response),
            Err(e) => Err(e),
        };

        {
            let mut inner = self.inner.borrow_mut();
            if inner.generation != generation {
                tracing::debug!(
                    generation,
                    current = inner.generation,
                    "Dropping superseded dashboard response"
                );
                return;
            }
            inner.state = match result {
                Ok(snapshot) => {
                    tracing::info!(
                        users = snapshot.recent_users.len(),
                        orders = snapshot.recent_orders.len(),
                        "Dashboard loaded"
                    );
                    ViewState::Loaded(Rc::new(snapshot))
                }
                Err(e) => {
                    tracing::error!("Failed to load dashboard: {}", e);
                    ViewState::Error(e)
                }
            };
        }
        self.notify();
    }

    pub fn open_balance_dialog(&self, user_id: UserId) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.dialog = BalanceDialog {
                user_id: Some(user_id),
                ..BalanceDialog::default()
            };
        }
        tracing::debug!(user_id, "Balance dialog opened");
        self.notify();
    }

    /// Closes the dialog and clears its inputs, unless a submit is in flight.
    pub fn close_balance_dialog(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.dialog.submitting {
                return;
            }
            inner.dialog = BalanceDialog::default();
        }
        self.notify();
    }

    pub fn set_amount(&self, amount: impl Into<String>) {
        self.inner.borrow_mut().dialog.amount = amount.into();
        self.notify();
    }

    pub fn set_reason(&self, reason: impl Into<String>) {
        self.inner.borrow_mut().dialog.reason = reason.into();
        self.notify();
    }

    /// Submits the balance dialog.
    pub async fn submit_balance_dialog(&self) -> BalanceUpdate {
        let dialog = self.dialog();
        match dialog.user_id {
            Some(user_id) => {
                self.update_balance(user_id, &dialog.amount, &dialog.reason)
                    .await
            }
            None => self.reject_input(BalanceInputError::NoUserSelected),
        }
    }

    /// Adjusts a user's balance by `amount` (a signed integer as typed).
    ///
    /// Invalid input is reported with an alert and nothing is sent. On
    /// success the dialog closes, its inputs clear and the dashboard reloads
    /// once the response has been received. On failure the server's message
    /// (or a generic one) is alerted and the dialog stays as it was.
    pub async fn update_balance(&self, user_id: UserId, amount: &str, reason: &str) -> BalanceUpdate {
        if self.inner.borrow().dialog.submitting {
            tracing::debug!(user_id, "Balance update already in flight");
            return BalanceUpdate::Busy;
        }

        let known_user = self
            .inner
            .borrow()
            .state
            .snapshot()
            .is_some_and(|snapshot| snapshot.find_user(user_id).is_some());
        if !known_user {
            return self.reject_input(BalanceInputError::UnknownUser(user_id));
        }
        let delta = match parse_amount_delta(amount) {
            Ok(delta) => delta,
            Err(e) => return self.reject_input(e),
        };
        let action = AdminAction::update_balance(user_id, delta, reason_or_default(reason));

        self.inner.borrow_mut().dialog.submitting = true;
        self.notify();

        tracing::info!(user_id, amount = delta, "Updating user balance");
        let outcome = self.send_action(&action).await;
        self.inner.borrow_mut().dialog.submitting = false;

        match outcome {
            ActionOutcome::Succeeded => {
                tracing::info!(user_id, "Balance updated");
                self.inner.borrow_mut().dialog = BalanceDialog::default();
                self.notify();
                self.load_dashboard().await;
                BalanceUpdate::Applied
            }
            ActionOutcome::Rejected(message) => {
                let message = message.unwrap_or_else(|| BALANCE_UPDATE_FAILED.to_string());
                tracing::warn!(user_id, "Balance update rejected: {}", message);
                self.notify();
                self.notifier.alert(&message);
                BalanceUpdate::Rejected(message)
            }
        }
    }

    /// Resets the aggregate statistics after the admin confirms.
    ///
    /// While one reset is in flight further calls return `Busy` without
    /// asking for confirmation.
    pub async fn reset_stats(&self) -> ResetOutcome {
        if self.inner.borrow().resetting {
            tracing::debug!("Statistics reset already in flight");
            return ResetOutcome::Busy;
        }
        if !self.notifier.confirm(RESET_CONFIRMATION) {
            tracing::info!("Statistics reset declined");
            return ResetOutcome::Declined;
        }

        self.inner.borrow_mut().resetting = true;
        self.notify();

        let outcome = self.run_reset().await;

        self.inner.borrow_mut().resetting = false;
        self.notify();
        outcome
    }

    async fn run_reset(&self) -> ResetOutcome {
        tracing::info!("Resetting statistics");
        match self.send_action(&AdminAction::reset_stats()).await {
            ActionOutcome::Succeeded => {
                self.notifier.notice(RESET_DONE);
                self.load_dashboard().await;
                ResetOutcome::Done
            }
            ActionOutcome::Rejected(message) => {
                let message = message.unwrap_or_else(|| RESET_FAILED.to_string());
                tracing::warn!("Statistics reset failed: {}", message);
                self.notifier.alert(&message);
                ResetOutcome::Failed(message)
            }
        }
    }

    fn reject_input(&self, error: BalanceInputError) -> BalanceUpdate {
        tracing::warn!("Balance input rejected: {}", error);
        self.notifier.alert(&error.to_string());
        BalanceUpdate::Invalid(error)
    }

    /// Transport errors are folded into an unlabeled rejection.
    async fn send_action(&self, action: &AdminAction) -> ActionOutcome {
        let request = match api::action_request(&self.config, action) {
            Ok(request) => request,
            Err(e) => {
                tracing::error!(action = action.name(), "{}", e);
                return ActionOutcome::Rejected(None);
            }
        };
        match self.transport.send(request).await {
            Ok(response) => api::parse_action(&response),
            Err(e) => {
                tracing::error!(action = action.name(), "Action request failed: {}", e);
                ActionOutcome::Rejected(None)
            }
        }
    }
}
