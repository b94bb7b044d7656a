//! HTTP wrapper over the storefront REST API.
//!
//! Every call goes through [`ApiClient::request`], which injects the bearer
//! token, tolerates empty or non-JSON response bodies, and normalizes
//! failures into [`ApiError`]. The auth endpoints additionally write the
//! refreshed credentials through [`SharedSession`].

use crate::store::SharedSession;
use gloo_net::http::{Method, RequestBuilder};
use mall_core::{
    ApiError, CheckoutPreviewInput, MOCKPAY_PROVIDER, MOCKPAY_SIGNATURE_HEADER, MockpayCallback,
    OrderLine, PaymentRecord, RawCatalogItem, RawOrder, Session, User,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Credentials for `POST /api/v1/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Payload for `POST /api/v1/auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Payload for `POST /api/v1/cart/items`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemInput {
    pub product_id: String,
    pub quantity: i64,
}

/// Payload for `POST /api/v1/orders/:id/refunds`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct RefundInput {
    pub reason: String,
}

/// Cart contents as served by `GET /api/v1/cart`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<OrderLine>,
    #[serde(default)]
    pub total_cents: i64,
}

impl Cart {
    /// Fill absent line totals and the cart total from the line data.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        for line in &mut self.items {
            if line.line_total_cents == 0 {
                line.line_total_cents = line.price_cents * line.quantity;
            }
        }
        if self.total_cents == 0 {
            self.total_cents = self.items.iter().map(|line| line.line_total_cents).sum();
        }
        self
    }
}

/// Stateless HTTP client; session state lives in the [`SharedSession`].
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SharedSession,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.session == other.session
    }
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: String, session: SharedSession) -> Self {
        Self { base_url, session }
    }

    /// Issue one API call. `body` is pre-serialized JSON so signed payloads
    /// go on the wire byte-for-byte as signed. Non-2xx responses become an
    /// [`ApiError`] built from the response envelope.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        headers: &[(&str, &str)],
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = RequestBuilder::new(&url).method(method);

        let session = self.session.get();
        if session.is_authenticated() {
            builder = builder.header("Authorization", &format!("Bearer {}", session.access_token));
        }
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        let explicit_content_type = headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("Content-Type"));
        if body.is_some() && !explicit_content_type {
            builder = builder.header("Content-Type", "application/json");
        }

        let request = match body {
            Some(text) => builder.body(text),
            None => builder.build(),
        }
        .map_err(|err| ApiError::network(err.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|err| ApiError::network(err.to_string()))?;
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let payload: Value =
            serde_json::from_str(&text).unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        if !response.ok() {
            let err = ApiError::from_envelope(status, &payload);
            log::debug!("api {path} failed: {} {}", err.code, err.message);
            return Err(err);
        }
        Ok(payload)
    }

    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::GET, path, None, &[]).await
    }

    async fn send_json<T: Serialize>(
        &self,
        method: Method,
        path: &str,
        input: &T,
    ) -> Result<Value, ApiError> {
        let body = serde_json::to_string(input).map_err(|err| ApiError::network(err.to_string()))?;
        self.request(method, path, Some(body), &[]).await
    }

    // --- auth ---

    pub async fn register(&self, input: &RegisterInput) -> Result<Value, ApiError> {
        self.send_json(Method::POST, "/api/v1/auth/register", input)
            .await
    }

    /// Log in and replace the stored session from the response tokens.
    pub async fn login(&self, input: &LoginInput) -> Result<Session, ApiError> {
        let payload = self.send_json(Method::POST, "/api/v1/auth/login", input).await?;
        let session = auth_session_from(&payload, None);
        self.session.set(session.clone());
        Ok(session)
    }

    /// Exchange the refresh token for fresh credentials, keeping the stored
    /// user. Fails locally with `REFRESH_REQUIRED` when no token is held.
    pub async fn refresh_session(&self) -> Result<Session, ApiError> {
        let current = self.session.get();
        if current.refresh_token.is_empty() {
            return Err(ApiError::refresh_required());
        }
        let payload = self
            .send_json(
                Method::POST,
                "/api/v1/auth/refresh",
                &serde_json::json!({ "refresh_token": current.refresh_token }),
            )
            .await?;
        let session = auth_session_from(&payload, current.user);
        self.session.set(session.clone());
        Ok(session)
    }

    /// Re-fetch the current user, keeping the stored tokens.
    pub async fn me(&self) -> Result<Session, ApiError> {
        let payload = self.get("/api/v1/auth/me").await?;
        let current = self.session.get();
        let session = Session::new(
            current.access_token,
            current.refresh_token,
            decode_user(payload.get("user")),
        );
        self.session.set(session.clone());
        Ok(session)
    }

    pub async fn admin_ping(&self) -> Result<Value, ApiError> {
        self.get("/api/v1/admin/ping").await
    }

    // --- catalog ---

    pub async fn list_products(&self) -> Result<Vec<RawCatalogItem>, ApiError> {
        let payload = self.get("/api/v1/products").await?;
        Ok(decode_field(&payload, "items"))
    }

    pub async fn get_product(&self, product_id: &str) -> Result<RawCatalogItem, ApiError> {
        let payload = self.get(&format!("/api/v1/products/{product_id}")).await?;
        Ok(decode_field(&payload, "item"))
    }

    // --- cart ---

    pub async fn get_cart(&self) -> Result<Cart, ApiError> {
        let payload = self.get("/api/v1/cart").await?;
        let cart: Cart = serde_json::from_value(payload).unwrap_or_default();
        Ok(cart.normalized())
    }

    pub async fn add_cart_item(&self, input: &CartItemInput) -> Result<Value, ApiError> {
        self.send_json(Method::POST, "/api/v1/cart/items", input).await
    }

    pub async fn update_cart_item(&self, product_id: &str, quantity: i64) -> Result<Value, ApiError> {
        self.send_json(
            Method::PATCH,
            &format!("/api/v1/cart/items/{product_id}"),
            &serde_json::json!({ "quantity": quantity }),
        )
        .await
    }

    pub async fn remove_cart_item(&self, product_id: &str) -> Result<Value, ApiError> {
        self.request(
            Method::DELETE,
            &format!("/api/v1/cart/items/{product_id}"),
            None,
            &[],
        )
        .await
    }

    // --- checkout & orders ---

    pub async fn checkout_preview(&self, input: &CheckoutPreviewInput) -> Result<Value, ApiError> {
        self.send_json(Method::POST, "/api/v1/checkout/preview", input)
            .await
    }

    pub async fn create_order(&self, input: &CheckoutPreviewInput) -> Result<RawOrder, ApiError> {
        let payload = self.send_json(Method::POST, "/api/v1/orders", input).await?;
        Ok(decode_field(&payload, "order"))
    }

    pub async fn list_orders(&self) -> Result<Vec<RawOrder>, ApiError> {
        let payload = self.get("/api/v1/orders").await?;
        Ok(decode_field(&payload, "items"))
    }

    pub async fn get_order(&self, order_id: &str) -> Result<RawOrder, ApiError> {
        let payload = self.get(&format!("/api/v1/orders/{order_id}")).await?;
        Ok(decode_field(&payload, "order"))
    }

    // --- payments ---

    pub async fn create_payment(&self, order_id: &str) -> Result<Value, ApiError> {
        self.send_json(
            Method::POST,
            "/api/v1/payments/create",
            &serde_json::json!({ "order_id": order_id, "provider": MOCKPAY_PROVIDER }),
        )
        .await
    }

    /// `None` when no payment exists for the order yet.
    pub async fn get_payment_by_order(
        &self,
        order_id: &str,
    ) -> Result<Option<PaymentRecord>, ApiError> {
        let result = self.get(&format!("/api/v1/payments/order/{order_id}")).await;
        Ok(absent_on_404(result)?.map(|payload| decode_field(&payload, "payment")))
    }

    /// Post a simulator callback; the signature covers the exact body bytes.
    pub async fn mockpay_callback(
        &self,
        callback: &MockpayCallback,
        secret: &str,
    ) -> Result<Value, ApiError> {
        let (body, signature) = callback.signed_body(secret);
        self.request(
            Method::POST,
            "/api/v1/payments/callback/mockpay",
            Some(body),
            &[
                (MOCKPAY_SIGNATURE_HEADER, &signature),
                ("Content-Type", "application/json"),
            ],
        )
        .await
    }

    // --- tracking & refunds ---

    /// `None` when the order has no shipment yet.
    pub async fn get_order_tracking(&self, order_id: &str) -> Result<Option<Value>, ApiError> {
        absent_on_404(self.get(&format!("/api/v1/orders/{order_id}/tracking")).await)
    }

    pub async fn request_refund(
        &self,
        order_id: &str,
        input: &RefundInput,
    ) -> Result<Value, ApiError> {
        self.send_json(
            Method::POST,
            &format!("/api/v1/orders/{order_id}/refunds"),
            input,
        )
        .await
    }

    /// `None` when no refund has been requested for the order.
    pub async fn get_refund(&self, order_id: &str) -> Result<Option<Value>, ApiError> {
        absent_on_404(self.get(&format!("/api/v1/orders/{order_id}/refunds")).await)
    }
}

/// Map a 404 on an optional sub-resource to "absent".
fn absent_on_404<T>(result: Result<T, ApiError>) -> Result<Option<T>, ApiError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.status == Some(404) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Pull one field out of a payload and decode it tolerantly: missing or
/// mis-shaped data yields the type's defaults, the way empty response
/// bodies already do.
fn decode_field<T: serde::de::DeserializeOwned + Default>(payload: &Value, field: &str) -> T {
    payload
        .get(field)
        .cloned()
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default()
}

fn decode_user(value: Option<&Value>) -> Option<User> {
    value.and_then(|value| serde_json::from_value(value.clone()).ok())
}

/// Build the replacement session from an auth response payload.
fn auth_session_from(payload: &Value, fallback_user: Option<User>) -> Session {
    let token = |name: &str| {
        payload
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    Session::new(
        token("access_token"),
        token("refresh_token"),
        decode_user(payload.get("user")).or(fallback_user),
    )
}

#[cfg(test)]
mod tests {
    use super::{Cart, absent_on_404, auth_session_from, decode_field};
    use mall_core::{ApiError, OrderLine, RawOrder, User};
    use serde_json::json;

    #[test]
    fn auth_payload_replaces_the_whole_session() {
        let session = auth_session_from(
            &json!({
                "access_token": "tok",
                "refresh_token": "ref",
                "user": {"id": "U1", "email": "a@b.c", "role": "buyer"}
            }),
            None,
        );
        assert_eq!(session.access_token, "tok");
        assert_eq!(session.refresh_token, "ref");
        assert_eq!(session.role(), Some("buyer"));
    }

    #[test]
    fn refresh_payload_without_user_keeps_the_fallback() {
        let kept = User {
            id: "U1".to_string(),
            email: "a@b.c".to_string(),
            role: "buyer".to_string(),
        };
        let session = auth_session_from(
            &json!({"access_token": "tok2", "refresh_token": "ref2"}),
            Some(kept.clone()),
        );
        assert_eq!(session.user, Some(kept));
        assert_eq!(session.access_token, "tok2");
    }

    #[test]
    fn missing_payload_fields_become_empty_strings() {
        let session = auth_session_from(&json!({}), None);
        assert_eq!(session.access_token, "");
        assert_eq!(session.refresh_token, "");
        assert!(session.user.is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn absent_on_404_distinguishes_absence_from_failure() {
        assert_eq!(absent_on_404(Ok::<_, ApiError>(1)), Ok(Some(1)));
        assert_eq!(
            absent_on_404::<u8>(Err(ApiError::new(Some(404), "ORDER_NOT_FOUND", "not found"))),
            Ok(None)
        );
        let terminal = ApiError::new(Some(500), "X", "boom");
        assert_eq!(absent_on_404::<u8>(Err(terminal.clone())), Err(terminal));
    }

    #[test]
    fn decode_field_tolerates_missing_and_mis_shaped_data() {
        let order: RawOrder = decode_field(&json!({}), "order");
        assert_eq!(order.id, "");
        let order: RawOrder = decode_field(&json!({"order": "not an object"}), "order");
        assert_eq!(order.id, "");
        let orders: Vec<RawOrder> = decode_field(&json!({"items": [{"id": "O1"}]}), "items");
        assert_eq!(orders.len(), 1);
    }

    #[test]
    fn cart_normalization_fills_totals() {
        let cart = Cart {
            items: vec![OrderLine {
                product_id: "P1".to_string(),
                name: "x".to_string(),
                price_cents: 150,
                quantity: 3,
                line_total_cents: 0,
            }],
            total_cents: 0,
        }
        .normalized();
        assert_eq!(cart.items[0].line_total_cents, 450);
        assert_eq!(cart.total_cents, 450);
    }
}
