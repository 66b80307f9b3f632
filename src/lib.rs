//! Core of the studio admin dashboard.
//!
//! This crate knows how to talk to the admin API and how the dashboard page
//! moves between its states, but nothing about rendering. The web frontend
//! plugs in a browser [`Transport`](api::Transport) and
//! [`Notifier`](controller::Notifier) and draws whatever the
//! [`DashboardController`] exposes.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;

pub use api::{ActionOutcome, AdminAction, ApiRequest, Method, RawResponse, Transport};
pub use config::{AdminConfig, CredentialStatus};
pub use controller::{
    BalanceDialog, BalanceUpdate, DashboardController, Notifier, ResetOutcome, ViewState,
};
pub use error::{ApiError, BalanceInputError};

pub use common;

mod test_utils;
