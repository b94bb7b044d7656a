//! Hash-based routing: the client route table plus browser location
//! plumbing. Path resolution and guard logic live in `mall_core::routing`;
//! this module wires them to `location.hash`.

use mall_core::{RouteDef, RouteTable, WILDCARD, normalize_path};
use std::sync::OnceLock;

/// Views reachable from the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Catalog,
    ProductDetail,
    Cart,
    Checkout,
    Payment,
    PaymentResult,
    Orders,
    OrderDetail,
    Account,
    Admin,
    NotFound,
}

/// The full client route table, guards included. Exact patterns resolve
/// before parameterized ones, and the wildcard catches the rest.
pub fn route_table() -> &'static RouteTable<Page> {
    static TABLE: OnceLock<RouteTable<Page>> = OnceLock::new();
    TABLE.get_or_init(|| {
        RouteTable::new(vec![
            RouteDef::public("/", Page::Home),
            RouteDef::public("/login", Page::Login),
            RouteDef::public("/products", Page::Catalog),
            RouteDef::public("/products/:id", Page::ProductDetail),
            RouteDef::authenticated("/cart", Page::Cart),
            RouteDef::authenticated("/checkout", Page::Checkout),
            RouteDef::authenticated("/payments/:order_id", Page::Payment),
            RouteDef::authenticated("/payment-result/:order_id", Page::PaymentResult),
            RouteDef::authenticated("/orders", Page::Orders),
            RouteDef::authenticated("/orders/:id", Page::OrderDetail),
            RouteDef::authenticated("/account", Page::Account),
            RouteDef::with_role("/admin", "admin", Page::Admin),
            RouteDef::public(WILDCARD, Page::NotFound),
        ])
    })
}

/// Current path from `location.hash`, normalized.
#[must_use]
pub fn current_path() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let hash = crate::dom::window().location().hash().unwrap_or_default();
        normalize_path(hash.trim_start_matches('#'))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        normalize_path("")
    }
}

/// Set the location hash; the `hashchange` listener drives the re-render.
pub fn push_path(path: &str) {
    let target = normalize_path(path);
    #[cfg(target_arch = "wasm32")]
    {
        let _ = crate::dom::window().location().set_hash(&format!("#{target}"));
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = target;
    }
}

#[cfg(test)]
mod tests {
    use super::{Page, route_table};
    use mall_core::{RouteDecision, Session, User};

    fn buyer_session() -> Session {
        Session::new(
            "token".to_string(),
            "refresh".to_string(),
            Some(User {
                id: "U1".to_string(),
                email: "buyer@example.com".to_string(),
                role: "buyer".to_string(),
            }),
        )
    }

    #[test]
    fn logged_out_guarded_routes_redirect_to_login() {
        let logged_out = Session::default();
        for path in ["/cart", "/checkout", "/orders", "/account", "/admin"] {
            assert_eq!(
                route_table().decide(path, &logged_out),
                Some(RouteDecision::Redirect("/login")),
                "path {path}"
            );
        }
    }

    #[test]
    fn buyer_cannot_reach_the_admin_probe() {
        assert_eq!(
            route_table().decide("/admin", &buyer_session()),
            Some(RouteDecision::Redirect("/account"))
        );
    }

    #[test]
    fn product_detail_resolves_with_its_id() {
        match route_table().decide("/products/P42", &Session::default()) {
            Some(RouteDecision::Render { page, params }) => {
                assert_eq!(page, Page::ProductDetail);
                assert_eq!(params.get("id").map(String::as_str), Some("P42"));
            }
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn payment_routes_capture_the_order_id() {
        match route_table().decide("/payment-result/O-1", &buyer_session()) {
            Some(RouteDecision::Render { page, params }) => {
                assert_eq!(page, Page::PaymentResult);
                assert_eq!(params.get("order_id").map(String::as_str), Some("O-1"));
            }
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        match route_table().decide("/definitely/not/here", &buyer_session()) {
            Some(RouteDecision::Render { page, .. }) => assert_eq!(page, Page::NotFound),
            other => panic!("expected render, got {other:?}"),
        }
    }
}
