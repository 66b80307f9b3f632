use crate::converters;
use crate::metrics;
use crate::order::{OrderStatus, OrderType};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Telegram user identifier. Telegram ids do not fit in 32 bits.
pub type UserId = i64;

/// Everything the dashboard renders, as returned by `GET ?endpoint=dashboard`.
///
/// The snapshot is read-only on the client and replaced wholesale on reload.
/// List sections missing from the payload are treated as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub stats: StatsSummary,
    #[serde(default)]
    pub recent_users: Vec<UserRecord>,
    #[serde(default)]
    pub recent_orders: Vec<OrderRecord>,
    #[serde(default)]
    pub order_stats: Vec<OrderTypeStat>,
    #[serde(default)]
    pub daily_revenue: Vec<DailyRevenue>,
    #[serde(default)]
    pub model_stats: Vec<ModelStat>,
}

impl DashboardSnapshot {
    pub fn find_user(&self, user_id: UserId) -> Option<&UserRecord> {
        self.recent_users.iter().find(|user| user.user_id == user_id)
    }

    /// Daily revenue in ascending date order; the backend sends newest first.
    pub fn daily_revenue_chronological(&self) -> Vec<&DailyRevenue> {
        let mut days: Vec<&DailyRevenue> = self.daily_revenue.iter().collect();
        days.sort_by_key(|day| day.date);
        days
    }

    /// Sum of order counts across all order types.
    pub fn total_typed_orders(&self) -> i64 {
        self.order_stats.iter().map(|stat| stat.count).sum()
    }
}

/// Aggregate counters for the stat cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_users: i64,
    pub active_users_24h: i64,
    pub total_orders: i64,
    pub processing_orders: i64,
    pub total_revenue: Decimal,
    pub credits_spent: Decimal,
    #[serde(default)]
    pub total_errors: Option<i64>,
}

impl StatsSummary {
    /// Error count; absent means none were reported.
    pub fn errors_or_zero(&self) -> i64 {
        self.total_errors.unwrap_or(0)
    }

    pub fn average_revenue_per_user(&self) -> Decimal {
        metrics::average_per_user(self.total_revenue, self.total_users)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: UserId,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "converters::null_as_default")]
    pub first_name: String,
    pub balance: Decimal,
    #[serde(with = "converters::timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(default, with = "converters::option_timestamp")]
    pub last_activity: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "converters::null_as_default")]
    pub is_blocked: bool,
}

impl UserRecord {
    /// Telegram username when one is set.
    pub fn username(&self) -> Option<&str> {
        self.username
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// `@username`, or `None` for users without one.
    pub fn handle(&self) -> Option<String> {
        self.username().map(|name| format!("@{}", name))
    }

    /// Uppercased first letter of the first name, for the avatar bubble.
    pub fn initial(&self) -> String {
        self.first_name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }

    pub fn has_positive_balance(&self) -> bool {
        self.balance > Decimal::ZERO
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: i64,
    pub user_id: UserId,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub cost: Decimal,
    #[serde(with = "converters::timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "converters::null_as_default")]
    pub first_name: String,
}

impl OrderRecord {
    /// `@username`, falling back to `ID: <user_id>`.
    pub fn customer_handle(&self) -> String {
        match self
            .username
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
        {
            Some(name) => format!("@{}", name),
            None => format!("ID: {}", self.user_id),
        }
    }
}

/// Orders and spend grouped by order type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTypeStat {
    pub order_type: OrderType,
    pub count: i64,
    pub total_cost: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRevenue {
    #[serde(with = "converters::date")]
    pub date: NaiveDate,
    pub revenue: Decimal,
    pub transaction_count: i64,
}

/// Outcome counters per generation model (order type).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStat {
    pub order_type: OrderType,
    pub total_count: i64,
    pub completed_count: i64,
    pub failed_count: i64,
    pub total_revenue: Decimal,
}

impl ModelStat {
    pub fn success_rate(&self) -> f64 {
        metrics::success_rate(self.completed_count, self.total_count)
    }
}
