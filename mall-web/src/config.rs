//! Deployment configuration resolved at compile time.

/// Backend origin. Set `MALL_API_BASE_URL` at build time to point the
/// client at a deployed backend; local builds fall back to the dev server.
#[must_use]
pub fn api_base_url() -> String {
    base_url_or_default(option_env!("MALL_API_BASE_URL"))
}

/// Shared secret for the in-page mockpay callback simulator. Must match the
/// backend's configured secret.
#[must_use]
pub fn mockpay_secret() -> String {
    option_env!("MALL_MOCKPAY_SECRET")
        .unwrap_or("mockpay-dev-secret")
        .to_string()
}

fn base_url_or_default(configured: Option<&str>) -> String {
    let base = configured.unwrap_or("http://127.0.0.1:9000");
    base.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::base_url_or_default;

    #[test]
    fn trailing_slash_is_stripped() {
        assert_eq!(
            base_url_or_default(Some("https://shop.example.com/")),
            "https://shop.example.com"
        );
    }

    #[test]
    fn missing_override_uses_dev_server() {
        assert_eq!(base_url_or_default(None), "http://127.0.0.1:9000");
    }
}
