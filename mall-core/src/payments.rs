//! Payment status derivation and the mockpay callback simulator.

use crate::orders::OrderStatus;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

/// Provider id sent when creating a payment.
pub const MOCKPAY_PROVIDER: &str = "mockpay";

/// Header carrying the simulator's HMAC signature.
pub const MOCKPAY_SIGNATURE_HEADER: &str = "X-Mockpay-Signature";

/// Payment record states reported by the payment provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Succeeded,
    Failed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Unknown => "unknown",
        }
    }
}

/// Payment record as served by `/api/v1/payments/order/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct PaymentRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub status: PaymentStatus,
    #[serde(default)]
    pub external_txn_id: String,
}

/// Tri-state summary of order + payment status for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    Success,
    Failed,
    Pending,
}

impl PaymentOutcome {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Success => "支付成功",
            Self::Failed => "支付失败",
            Self::Pending => "等待支付结果",
        }
    }
}

/// Combine order and payment status into a display outcome. The success
/// check is evaluated first, so contradictory inputs (canceled order with a
/// succeeded payment) resolve to success.
#[must_use]
pub const fn derive_payment_outcome(order: OrderStatus, payment: PaymentStatus) -> PaymentOutcome {
    if matches!(payment, PaymentStatus::Succeeded)
        || matches!(
            order,
            OrderStatus::Paid | OrderStatus::Shipped | OrderStatus::Done
        )
    {
        PaymentOutcome::Success
    } else if matches!(payment, PaymentStatus::Failed) || matches!(order, OrderStatus::Canceled) {
        PaymentOutcome::Failed
    } else {
        PaymentOutcome::Pending
    }
}

/// Body posted to the mockpay callback endpoint by the in-page simulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockpayCallback {
    pub order_id: String,
    pub result: String,
    pub external_txn_id: String,
}

impl MockpayCallback {
    /// Build a simulator callback body. `result` is lowercased and the
    /// transaction id carries the web simulator prefix.
    #[must_use]
    pub fn new(order_id: &str, result: &str, txn_suffix: &str) -> Self {
        Self {
            order_id: order_id.to_string(),
            result: result.to_lowercase(),
            external_txn_id: format!("txn-web-{txn_suffix}"),
        }
    }

    /// Serialized body plus its signature. The signature covers the exact
    /// bytes that go on the wire.
    #[must_use]
    pub fn signed_body(&self, secret: &str) -> (String, String) {
        let body = serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string());
        let signature = sign_mockpay_body(&body, secret);
        (body, signature)
    }
}

/// Hex HMAC-SHA256 of the callback body under the shared simulator secret.
#[must_use]
pub fn sign_mockpay_body(body: &str, secret: &str) -> String {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("hmac accepts any key length");
    mac.update(body.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::{
        MockpayCallback, PaymentOutcome, PaymentStatus, derive_payment_outcome, sign_mockpay_body,
    };
    use crate::orders::OrderStatus;

    #[test]
    fn outcome_rules() {
        assert_eq!(
            derive_payment_outcome(OrderStatus::PendingPayment, PaymentStatus::Pending),
            PaymentOutcome::Pending
        );
        assert_eq!(
            derive_payment_outcome(OrderStatus::Paid, PaymentStatus::Succeeded),
            PaymentOutcome::Success
        );
        assert_eq!(
            derive_payment_outcome(OrderStatus::Done, PaymentStatus::Succeeded),
            PaymentOutcome::Success
        );
        assert_eq!(
            derive_payment_outcome(OrderStatus::PendingPayment, PaymentStatus::Failed),
            PaymentOutcome::Failed
        );
        assert_eq!(
            derive_payment_outcome(OrderStatus::Canceled, PaymentStatus::Pending),
            PaymentOutcome::Failed
        );
    }

    #[test]
    fn success_check_wins_over_failure_check() {
        assert_eq!(
            derive_payment_outcome(OrderStatus::Canceled, PaymentStatus::Succeeded),
            PaymentOutcome::Success
        );
    }

    #[test]
    fn callback_payload_shape() {
        let payload = MockpayCallback::new("O0001", "Success", "174000");
        assert_eq!(payload.order_id, "O0001");
        assert_eq!(payload.result, "success");
        assert!(payload.external_txn_id.starts_with("txn-web-"));
    }

    #[test]
    fn signature_is_hex_sha256_of_exact_body() {
        let payload = MockpayCallback::new("O0001", "failed", "1");
        let (body, signature) = payload.signed_body("shared-secret");
        assert_eq!(signature, sign_mockpay_body(&body, "shared-secret"));
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(signature, sign_mockpay_body(&body, "other-secret"));
    }
}
