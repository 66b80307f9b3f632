//! Order types and statuses together with their display descriptors.
//!
//! Both enums carry an `Other` arm holding the raw wire string, so a value the
//! backend starts sending tomorrow still deserialises and renders with the
//! fallback icon and its own name as the label.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of generation an order requested.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderType {
    Preview,
    TextToVideo,
    ImageToVideo,
    Storyboard,
    Other(String),
}

/// Icon and label shown next to an order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTypeDescriptor<'a> {
    /// Font Awesome class list
    pub icon: &'static str,
    pub label: &'a str,
}

/// Icon used for order types the dashboard does not know about.
pub const FALLBACK_ORDER_ICON: &str = "fas fa-file-video";

impl OrderType {
    pub fn as_str(&self) -> &str {
        match self {
            OrderType::Preview => "preview",
            OrderType::TextToVideo => "text-to-video",
            OrderType::ImageToVideo => "image-to-video",
            OrderType::Storyboard => "storyboard",
            OrderType::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, OrderType::Other(_))
    }

    pub fn descriptor(&self) -> OrderTypeDescriptor<'_> {
        match self {
            OrderType::Preview => OrderTypeDescriptor {
                icon: "fas fa-image",
                label: "Превью",
            },
            OrderType::TextToVideo => OrderTypeDescriptor {
                icon: "fas fa-video",
                label: "Текст → Видео",
            },
            OrderType::ImageToVideo => OrderTypeDescriptor {
                icon: "fas fa-film",
                label: "Изображение → Видео",
            },
            OrderType::Storyboard => OrderTypeDescriptor {
                icon: "fas fa-clapperboard",
                label: "Storyboard",
            },
            OrderType::Other(raw) => OrderTypeDescriptor {
                icon: FALLBACK_ORDER_ICON,
                label: raw,
            },
        }
    }
}

impl From<String> for OrderType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "preview" => OrderType::Preview,
            "text-to-video" => OrderType::TextToVideo,
            "image-to-video" => OrderType::ImageToVideo,
            "storyboard" => OrderType::Storyboard,
            _ => {
                tracing::debug!("Unknown order type '{}', using fallback descriptor", raw);
                OrderType::Other(raw)
            }
        }
    }
}

impl From<&str> for OrderType {
    fn from(raw: &str) -> Self {
        OrderType::from(raw.to_string())
    }
}

impl From<OrderType> for String {
    fn from(order_type: OrderType) -> Self {
        match order_type {
            OrderType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    Cancelled,
    Other(String),
}

/// Badge styling and label for an order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge<'a> {
    /// DaisyUI badge modifier class
    pub class: &'static str,
    pub label: &'a str,
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Failed => "failed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Other(raw) => raw,
        }
    }

    pub fn badge(&self) -> StatusBadge<'_> {
        match self {
            OrderStatus::Pending => StatusBadge {
                class: "badge-outline",
                label: "Ожидает",
            },
            OrderStatus::Processing => StatusBadge {
                class: "badge-secondary",
                label: "Обработка",
            },
            OrderStatus::Completed => StatusBadge {
                class: "badge-success",
                label: "Готово",
            },
            OrderStatus::Failed => StatusBadge {
                class: "badge-error",
                label: "Ошибка",
            },
            OrderStatus::Cancelled => StatusBadge {
                class: "badge-outline",
                label: "Отменён",
            },
            OrderStatus::Other(raw) => StatusBadge {
                class: "badge-outline",
                label: raw,
            },
        }
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => OrderStatus::Pending,
            "processing" => OrderStatus::Processing,
            "completed" => OrderStatus::Completed,
            "failed" => OrderStatus::Failed,
            "cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::Other(raw),
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(raw: &str) -> Self {
        OrderStatus::from(raw.to_string())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_order_types_resolve_descriptors() {
        let order_type = OrderType::from("text-to-video");
        let descriptor = order_type.descriptor();
        assert_eq!(descriptor.icon, "fas fa-video");
        assert_eq!(descriptor.label, "Текст → Видео");

        assert_eq!(OrderType::from("preview"), OrderType::Preview);
        assert_eq!(OrderType::from("image-to-video"), OrderType::ImageToVideo);
        assert_eq!(OrderType::from("storyboard"), OrderType::Storyboard);
    }

    #[test]
    fn test_unknown_order_type_uses_fallback() {
        let order_type = OrderType::from("lip-sync");
        assert!(!order_type.is_known());

        let descriptor = order_type.descriptor();
        assert_eq!(descriptor.icon, FALLBACK_ORDER_ICON);
        assert_eq!(descriptor.label, "lip-sync");
    }

    #[test]
    fn test_order_type_wire_strings_survive_serde() {
        let parsed: Vec<OrderType> =
            serde_json::from_str(r#"["storyboard", "music-video", ""]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                OrderType::Storyboard,
                OrderType::Other("music-video".to_string()),
                OrderType::Other(String::new()),
            ]
        );

        let written = serde_json::to_string(&parsed).unwrap();
        assert_eq!(written, r#"["storyboard","music-video",""]"#);
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(OrderStatus::from("failed").badge().class, "badge-error");
        assert_eq!(OrderStatus::from("completed").badge().label, "Готово");

        let unknown = OrderStatus::from("queued");
        assert_eq!(unknown.badge().class, "badge-outline");
        assert_eq!(unknown.badge().label, "queued");
    }
}
