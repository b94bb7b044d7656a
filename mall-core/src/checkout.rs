//! Checkout form to preview payload mapping.

use serde::{Deserialize, Serialize};

/// Raw text fields captured from the checkout form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckoutForm {
    pub shipping_cents: String,
    pub discount_cents: String,
    pub coupon_code: String,
}

/// Payload for `POST /api/v1/checkout/preview` and order creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CheckoutPreviewInput {
    pub shipping_cents: i64,
    pub discount_cents: i64,
    pub coupon_code: String,
}

/// Money fields parse as non-negative integers (anything else becomes 0);
/// the coupon code is trimmed.
#[must_use]
pub fn build_checkout_preview_input(form: &CheckoutForm) -> CheckoutPreviewInput {
    CheckoutPreviewInput {
        shipping_cents: parse_cents(&form.shipping_cents),
        discount_cents: parse_cents(&form.discount_cents),
        coupon_code: form.coupon_code.trim().to_string(),
    }
}

fn parse_cents(text: &str) -> i64 {
    text.trim().parse::<i64>().map_or(0, |value| value.max(0))
}
