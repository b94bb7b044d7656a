//! Meridian Mall storefront engine
//!
//! Platform-agnostic client logic for the Meridian Mall single-page
//! storefront. This crate provides session, catalog, order, payment and
//! routing logic without UI or browser-specific dependencies.

pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod orders;
pub mod paging;
pub mod payments;
pub mod perf;
pub mod routing;
pub mod session;

// Re-export commonly used types
pub use catalog::{
    CatalogItem, CatalogQuery, CatalogSort, RawCatalogItem, StockFilter, apply_catalog_query,
    normalize_catalog_items, sort_catalog_items,
};
pub use checkout::{CheckoutForm, CheckoutPreviewInput, build_checkout_preview_input};
pub use error::ApiError;
pub use money::format_price_cents;
pub use orders::{
    Order, OrderLine, OrderStatus, RawOrder, filter_orders_by_status, normalize_order_items,
};
pub use paging::{DEFAULT_PAGE_SIZE, Page, paginate};
pub use payments::{
    MOCKPAY_PROVIDER, MOCKPAY_SIGNATURE_HEADER, MockpayCallback, PaymentOutcome, PaymentRecord,
    PaymentStatus, derive_payment_outcome, sign_mockpay_body,
};
pub use perf::{LIST_RENDER_BUDGET_MS, is_render_within_budget};
pub use routing::{
    ACCOUNT_PATH, LOGIN_PATH, RouteDecision, RouteDef, RouteParams, RouteTable, WILDCARD,
    normalize_path,
};
pub use session::{Session, User};
