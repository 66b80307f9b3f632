//! Data model and presentation logic shared by the admin dashboard crates.
//!
//! These types mirror the payload of the admin API's dashboard endpoint so
//! the controller can deserialize it once and every view can render from the
//! same read-only snapshot.

pub mod converters;
mod dashboard;
pub mod format;
pub mod metrics;
mod order;

pub use dashboard::{
    DailyRevenue, DashboardSnapshot, ModelStat, OrderRecord, OrderTypeStat, StatsSummary,
    UserId, UserRecord,
};
pub use format::DisplayLocale;
pub use order::{
    FALLBACK_ORDER_ICON, OrderStatus, OrderType, OrderTypeDescriptor, StatusBadge,
};
