//! Order payload normalization and order-center list helpers.

use serde::{Deserialize, Serialize};

/// Order lifecycle states used by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    PendingPayment,
    Paid,
    Shipped,
    Done,
    Canceled,
    #[default]
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "pending_payment" => Self::PendingPayment,
            "paid" => Self::Paid,
            "shipped" => Self::Shipped,
            "done" => Self::Done,
            "canceled" => Self::Canceled,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PendingPayment => "pending_payment",
            Self::Paid => "paid",
            Self::Shipped => "shipped",
            Self::Done => "done",
            Self::Canceled => "canceled",
            Self::Unknown => "unknown",
        }
    }

    /// Display label for the order center.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PendingPayment => "待支付",
            Self::Paid => "已支付",
            Self::Shipped => "已发货",
            Self::Done => "已完成",
            Self::Canceled => "已取消",
            Self::Unknown => "未知状态",
        }
    }

    /// Refunds may only be requested once money actually moved.
    #[must_use]
    pub const fn is_refundable(self) -> bool {
        matches!(self, Self::Paid | Self::Shipped | Self::Done)
    }
}

/// Single purchased line within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OrderLine {
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price_cents: i64,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub line_total_cents: i64,
}

/// Raw order payload as served by `/api/v1/orders`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOrder {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub total_cents: i64,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Canonical order used by the views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: String,
    pub status: OrderStatus,
    pub total_cents: i64,
    pub items: Vec<OrderLine>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<RawOrder> for Order {
    fn from(raw: RawOrder) -> Self {
        let items: Vec<OrderLine> = raw
            .items
            .into_iter()
            .map(|mut line| {
                if line.line_total_cents == 0 {
                    line.line_total_cents = line.price_cents * line.quantity;
                }
                line
            })
            .collect();
        let total_cents = if raw.total_cents == 0 {
            items.iter().map(|line| line.line_total_cents).sum()
        } else {
            raw.total_cents
        };
        Self {
            id: raw.id,
            status: raw.status,
            total_cents,
            items,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        }
    }
}

/// Coerce raw API orders into the canonical shape.
#[must_use]
pub fn normalize_order_items(raw: Vec<RawOrder>) -> Vec<Order> {
    raw.into_iter().map(Order::from).collect()
}

/// Keep only orders in the given state, preserving input order.
#[must_use]
pub fn filter_orders_by_status(orders: &[Order], status: OrderStatus) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| order.status == status)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{OrderLine, OrderStatus, RawOrder, filter_orders_by_status, normalize_order_items};

    fn raw(id: &str, status: OrderStatus, total_cents: i64) -> RawOrder {
        RawOrder {
            id: id.to_string(),
            status,
            total_cents,
            ..RawOrder::default()
        }
    }

    #[test]
    fn filter_keeps_matching_orders_in_input_order() {
        let orders = normalize_order_items(vec![
            raw("O1", OrderStatus::PendingPayment, 1000),
            raw("O2", OrderStatus::Paid, 2000),
            raw("O3", OrderStatus::Paid, 3000),
            raw("O4", OrderStatus::Done, 4000),
        ]);
        let paid = filter_orders_by_status(&orders, OrderStatus::Paid);
        let ids: Vec<&str> = paid.iter().map(|order| order.id.as_str()).collect();
        assert_eq!(ids, ["O2", "O3"]);
    }

    #[test]
    fn refundable_statuses() {
        assert!(OrderStatus::Paid.is_refundable());
        assert!(OrderStatus::Shipped.is_refundable());
        assert!(OrderStatus::Done.is_refundable());
        assert!(!OrderStatus::PendingPayment.is_refundable());
        assert!(!OrderStatus::Canceled.is_refundable());
        assert!(!OrderStatus::Unknown.is_refundable());
    }

    #[test]
    fn status_decodes_from_snake_case() {
        let order: RawOrder = serde_json::from_str(r#"{"id":"O9","status":"pending_payment"}"#)
            .expect("valid order json");
        assert_eq!(order.status, OrderStatus::PendingPayment);

        let odd: RawOrder = serde_json::from_str(r#"{"id":"O9","status":"weird_state"}"#)
            .expect("valid order json");
        assert_eq!(odd.status, OrderStatus::Unknown);
    }

    #[test]
    fn normalization_fills_line_and_order_totals() {
        let orders = normalize_order_items(vec![RawOrder {
            id: "O1".to_string(),
            status: OrderStatus::PendingPayment,
            items: vec![OrderLine {
                product_id: "P1".to_string(),
                name: "Smoke Product".to_string(),
                price_cents: 1999,
                quantity: 2,
                line_total_cents: 0,
            }],
            ..RawOrder::default()
        }]);
        assert_eq!(orders[0].items[0].line_total_cents, 3998);
        assert_eq!(orders[0].total_cents, 3998);
    }
}
