#[cfg(test)]
pub mod test_utils {
    use crate::api::{ApiRequest, RawResponse, Transport};
    use crate::config::AdminConfig;
    use crate::controller::{DashboardController, Notifier};
    use crate::error::ApiError;
    use serde_json::json;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;
    use tokio::sync::oneshot;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub const TEST_BASE_URL: &str = "https://functions.example/admin";
    pub const TEST_KEY: &str = "test-admin-key";

    pub type TestController = DashboardController<Rc<FakeTransport>, Rc<RecordingNotifier>>;

    enum Scripted {
        Ready(Result<RawResponse, ApiError>),
        Gated(oneshot::Receiver<Result<RawResponse, ApiError>>),
    }

    /// Transport answering from a script and recording every request.
    #[derive(Default)]
    pub struct FakeTransport {
        script: RefCell<VecDeque<Scripted>>,
        requests: RefCell<Vec<ApiRequest>>,
    }

    impl FakeTransport {
        pub fn respond(&self, status: u16, body: serde_json::Value) {
            self.script
                .borrow_mut()
                .push_back(Scripted::Ready(Ok(RawResponse::new(status, body.to_string()))));
        }

        pub fn respond_raw(&self, status: u16, body: &str) {
            self.script
                .borrow_mut()
                .push_back(Scripted::Ready(Ok(RawResponse::new(status, body))));
        }

        pub fn fail(&self, message: &str) {
            self.script
                .borrow_mut()
                .push_back(Scripted::Ready(Err(ApiError::Transport(message.to_string()))));
        }

        /// Queues a response that is only delivered once the sender fires.
        pub fn gate(&self) -> oneshot::Sender<Result<RawResponse, ApiError>> {
            let (sender, receiver) = oneshot::channel();
            self.script.borrow_mut().push_back(Scripted::Gated(receiver));
            sender
        }

        pub fn requests(&self) -> Vec<ApiRequest> {
            self.requests.borrow().clone()
        }

        pub fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl Transport for FakeTransport {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
            self.requests.borrow_mut().push(request);
            let next = self.script.borrow_mut().pop_front();
            match next {
                Some(Scripted::Ready(result)) => result,
                Some(Scripted::Gated(receiver)) => receiver
                    .await
                    .unwrap_or_else(|_| Err(ApiError::Transport("gate dropped".to_string()))),
                None => Err(ApiError::Transport("no scripted response".to_string())),
            }
        }
    }

    /// Notifier recording what the admin would have seen.
    pub struct RecordingNotifier {
        pub alerts: RefCell<Vec<String>>,
        pub notices: RefCell<Vec<String>>,
        pub confirmations: RefCell<Vec<String>>,
        pub confirm_answer: Cell<bool>,
    }

    impl Default for RecordingNotifier {
        fn default() -> Self {
            Self {
                alerts: RefCell::new(Vec::new()),
                notices: RefCell::new(Vec::new()),
                confirmations: RefCell::new(Vec::new()),
                confirm_answer: Cell::new(true),
            }
        }
    }

    impl RecordingNotifier {
        pub fn alerts(&self) -> Vec<String> {
            self.alerts.borrow().clone()
        }

        pub fn notices(&self) -> Vec<String> {
            self.notices.borrow().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn notice(&self, message: &str) {
            self.notices.borrow_mut().push(message.to_string());
        }

        fn confirm(&self, message: &str) -> bool {
            self.confirmations.borrow_mut().push(message.to_string());
            self.confirm_answer.get()
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level comes from RUST_LOG and defaults to WARN.
    pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn setup_controller_with_key(
        admin_key: Option<&str>,
    ) -> (TestController, Rc<FakeTransport>, Rc<RecordingNotifier>) {
        let transport = Rc::new(FakeTransport::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let config = AdminConfig::new(TEST_BASE_URL, admin_key.map(str::to_string));
        let controller = DashboardController::new(config, transport.clone(), notifier.clone());
        (controller, transport, notifier)
    }

    pub fn setup_controller() -> (TestController, Rc<FakeTransport>, Rc<RecordingNotifier>) {
        setup_controller_with_key(Some(TEST_KEY))
    }

    pub fn stats_json() -> serde_json::Value {
        json!({
            "total_users": 42,
            "active_users_24h": 5,
            "total_orders": 10,
            "processing_orders": 1,
            "total_revenue": 500,
            "credits_spent": 300
        })
    }

    /// The happy-path payload with every list empty.
    pub fn empty_dashboard_json() -> serde_json::Value {
        json!({
            "stats": stats_json(),
            "recent_users": [],
            "recent_orders": [],
            "order_stats": [],
            "daily_revenue": [],
            "model_stats": []
        })
    }

    /// A dashboard with one user holding `balance` credits.
    pub fn dashboard_with_user(user_id: i64, balance: i64) -> serde_json::Value {
        json!({
            "stats": stats_json(),
            "recent_users": [{
                "user_id": user_id,
                "username": "alice",
                "first_name": "Alice",
                "balance": balance,
                "created_at": "2024-03-01 09:15:00",
                "last_activity": "2024-03-05 18:00:00",
                "is_blocked": false
            }],
            "recent_orders": [],
            "order_stats": [],
            "daily_revenue": [],
            "model_stats": []
        })
    }
}
