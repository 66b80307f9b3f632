mod balance_modal;
mod credential_warning;
mod daily_revenue;
mod model_stats;
mod order_stats;
mod recent_orders;
mod recent_users;
mod stats_cards;
mod view;

pub use credential_warning::CredentialWarning;
pub use view::DashboardPage;
