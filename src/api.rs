//! HTTP contract of the admin API.
//!
//! Requests are described as plain data and responses are classified here, so
//! the UI crate only has to move bytes. Everything the dashboard can ask of the
//! server goes through one base URL:
//!
//! - `GET {base}?endpoint=dashboard` returns the [`DashboardSnapshot`]
//! - `POST {base}` with an `action` body mutates server state

use crate::config::AdminConfig;
use crate::error::ApiError;
use common::{DashboardSnapshot, UserId};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

pub const ADMIN_KEY_HEADER: &str = "X-Admin-Key";
pub const DASHBOARD_ENDPOINT: &str = "dashboard";
/// Name recorded by the backend as the author of admin actions.
pub const ADMIN_USERNAME: &str = "admin";
/// Reason sent with a balance change when the admin leaves it blank.
pub const DEFAULT_BALANCE_REASON: &str = "Корректировка баланса администратором";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A request ready to be handed to a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to the admin API.
///
/// Implementations only report transport failures (network down, request
/// could not be built); any HTTP status, including 4xx and 5xx, comes back as
/// a [`RawResponse`] so it can be classified by this module.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}

impl<T: Transport> Transport for Rc<T> {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        (**self).send(request).await
    }
}

/// Body of a mutating request, discriminated by `action`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AdminAction {
    UpdateBalance {
        user_id: UserId,
        amount: i64,
        admin_username: String,
        reason: String,
    },
    ResetStats {
        admin_username: String,
    },
}

impl AdminAction {
    pub fn update_balance(user_id: UserId, amount: i64, reason: impl Into<String>) -> Self {
        AdminAction::UpdateBalance {
            user_id,
            amount,
            admin_username: ADMIN_USERNAME.to_string(),
            reason: reason.into(),
        }
    }

    pub fn reset_stats() -> Self {
        AdminAction::ResetStats {
            admin_username: ADMIN_USERNAME.to_string(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AdminAction::UpdateBalance { .. } => "update_balance",
            AdminAction::ResetStats { .. } => "reset_stats",
        }
    }
}

/// How the server answered a mutating request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Succeeded,
    /// Carries the server's `error` text when it sent one.
    Rejected(Option<String>),
}

#[derive(Deserialize)]
struct ActionBody {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

pub fn dashboard_request(config: &AdminConfig) -> ApiRequest {
    let base = config.base_url();
    let separator = if base.contains('?') { '&' } else { '?' };
    ApiRequest {
        method: Method::Get,
        url: format!("{}{}endpoint={}", base, separator, DASHBOARD_ENDPOINT),
        headers: vec![(
            ADMIN_KEY_HEADER.to_string(),
            config.header_value().to_string(),
        )],
        body: None,
    }
}

pub fn action_request(config: &AdminConfig, action: &AdminAction) -> Result<ApiRequest, ApiError> {
    let body = serde_json::to_string(action)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?;

    Ok(ApiRequest {
        method: Method::Post,
        url: config.base_url().to_string(),
        headers: vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            (
                ADMIN_KEY_HEADER.to_string(),
                config.header_value().to_string(),
            ),
        ],
        body: Some(body),
    })
}

/// Classifies the answer to [`dashboard_request`].
///
/// Anything but a 2xx JSON object with a `stats` object is a failure.
pub fn parse_dashboard(response: RawResponse) -> Result<DashboardSnapshot, ApiError> {
    if !response.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.error);
        tracing::error!(status = response.status, "Dashboard request failed");
        return Err(ApiError::Status {
            status: response.status,
            message,
        });
    }

    let value: serde_json::Value = serde_json::from_str(&response.body).map_err(|e| {
        tracing::error!("Dashboard response is not JSON: {}", e);
        ApiError::InvalidJson(e.to_string())
    })?;

    if !value.get("stats").is_some_and(serde_json::Value::is_object) {
        tracing::error!("Dashboard response has no stats section");
        return Err(ApiError::MissingStats);
    }

    serde_json::from_value(value).map_err(|e| {
        tracing::error!("Dashboard response does not match the snapshot shape: {}", e);
        ApiError::InvalidJson(e.to_string())
    })
}

/// Classifies the answer to an [`action_request`].
///
/// Only a 2xx response with `success: true` counts as success. A body without
/// a boolean `success` field is an unlabeled rejection.
pub fn parse_action(response: &RawResponse) -> ActionOutcome {
    match serde_json::from_str::<ActionBody>(&response.body) {
        Ok(body) if body.success && response.is_success() => ActionOutcome::Succeeded,
        Ok(body) => {
            ActionOutcome::Rejected(body.error.filter(|error| !error.trim().is_empty()))
        }
        Err(e) => {
            tracing::warn!(status = response.status, "Unrecognised action response: {}", e);
            ActionOutcome::Rejected(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> AdminConfig {
        AdminConfig::new("https://functions.example/admin", Some("key-1".to_string()))
    }

    fn stats() -> serde_json::Value {
        json!({
            "total_users": 42,
            "active_users_24h": 5,
            "total_orders": 10,
            "processing_orders": 1,
            "total_revenue": 500,
            "credits_spent": 300
        })
    }

    #[test]
    fn test_dashboard_request_shape() {
        let request = dashboard_request(&config());
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "https://functions.example/admin?endpoint=dashboard");
        assert_eq!(request.header("x-admin-key"), Some("key-1"));
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_dashboard_request_appends_to_existing_query() {
        let config = AdminConfig::new("https://functions.example/admin?region=eu", None);
        let request = dashboard_request(&config);
        assert_eq!(
            request.url,
            "https://functions.example/admin?region=eu&endpoint=dashboard"
        );
        // Header is still sent, just empty
        assert_eq!(request.header(ADMIN_KEY_HEADER), Some(""));
    }

    #[test]
    fn test_update_balance_request_body() {
        let action = AdminAction::update_balance(77, -100, "refund");
        let request = action_request(&config(), &action).unwrap();

        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "https://functions.example/admin");
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(request.header(ADMIN_KEY_HEADER), Some("key-1"));

        let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "action": "update_balance",
                "user_id": 77,
                "amount": -100,
                "admin_username": "admin",
                "reason": "refund"
            })
        );
    }

    #[test]
    fn test_reset_stats_request_body() {
        let request = action_request(&config(), &AdminAction::reset_stats()).unwrap();
        let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"action": "reset_stats", "admin_username": "admin"}));
        assert_eq!(AdminAction::reset_stats().name(), "reset_stats");
    }

    #[test]
    fn test_parse_dashboard_success() {
        let body = json!({"stats": stats(), "recent_users": []}).to_string();
        let snapshot = parse_dashboard(RawResponse::new(200, body)).unwrap();
        assert_eq!(snapshot.stats.total_users, 42);
        assert!(snapshot.recent_orders.is_empty());
    }

    #[test]
    fn test_parse_dashboard_failures() {
        let err = parse_dashboard(RawResponse::new(500, r#"{"error": "db down"}"#)).unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                message: Some("db down".to_string())
            }
        );

        let err = parse_dashboard(RawResponse::new(502, "<html>bad gateway</html>")).unwrap_err();
        assert_eq!(err, ApiError::Status { status: 502, message: None });

        let err = parse_dashboard(RawResponse::new(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidJson(_)));

        // Unknown endpoint answer from the backend
        let err = parse_dashboard(RawResponse::new(200, r#"{"error": "Unknown endpoint"}"#)).unwrap_err();
        assert_eq!(err, ApiError::MissingStats);

        let err = parse_dashboard(RawResponse::new(200, r#"{"stats": null}"#)).unwrap_err();
        assert_eq!(err, ApiError::MissingStats);

        let err = parse_dashboard(RawResponse::new(200, r#"[1, 2]"#)).unwrap_err();
        assert_eq!(err, ApiError::MissingStats);

        let body = json!({"stats": {"total_users": "many"}}).to_string();
        let err = parse_dashboard(RawResponse::new(200, body)).unwrap_err();
        assert!(matches!(err, ApiError::InvalidJson(_)));
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(
            parse_action(&RawResponse::new(200, r#"{"success": true}"#)),
            ActionOutcome::Succeeded
        );
        assert_eq!(
            parse_action(&RawResponse::new(200, r#"{"success": false, "error": "user not found"}"#)),
            ActionOutcome::Rejected(Some("user not found".to_string()))
        );
        assert_eq!(
            parse_action(&RawResponse::new(400, r#"{"success": false, "error": "  "}"#)),
            ActionOutcome::Rejected(None)
        );
        // success without a 2xx status is not trusted
        assert_eq!(
            parse_action(&RawResponse::new(500, r#"{"success": true}"#)),
            ActionOutcome::Rejected(None)
        );
        assert_eq!(
            parse_action(&RawResponse::new(200, r#"{"ok": 1}"#)),
            ActionOutcome::Rejected(None)
        );
        assert_eq!(
            parse_action(&RawResponse::new(200, "")),
            ActionOutcome::Rejected(None)
        );
    }
}
