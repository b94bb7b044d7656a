//! Route table resolution and navigation guards.
//!
//! Resolution order is fixed: exact pattern, then parameterized patterns in
//! declaration order, then the wildcard fallback. Guards run after
//! resolution and turn a match into a redirect instead of a render.

use crate::session::Session;
use std::collections::BTreeMap;

/// Captured `:name` segments from a parameterized pattern.
pub type RouteParams = BTreeMap<String, String>;

/// Pattern that matches any otherwise-unmatched path.
pub const WILDCARD: &str = "*";

/// Guard redirect target for unauthenticated access.
pub const LOGIN_PATH: &str = "/login";

/// Guard redirect target for role mismatches.
pub const ACCOUNT_PATH: &str = "/account";

/// Static description of one client route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDef<P> {
    pub pattern: &'static str,
    pub requires_auth: bool,
    pub required_role: Option<&'static str>,
    pub page: P,
}

impl<P> RouteDef<P> {
    #[must_use]
    pub const fn public(pattern: &'static str, page: P) -> Self {
        Self {
            pattern,
            requires_auth: false,
            required_role: None,
            page,
        }
    }

    #[must_use]
    pub const fn authenticated(pattern: &'static str, page: P) -> Self {
        Self {
            pattern,
            requires_auth: true,
            required_role: None,
            page,
        }
    }

    #[must_use]
    pub const fn with_role(pattern: &'static str, role: &'static str, page: P) -> Self {
        Self {
            pattern,
            requires_auth: true,
            required_role: Some(role),
            page,
        }
    }
}

/// Ensure a leading slash; empty input maps to the root path.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Where the router should go for a path, given the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision<P> {
    /// Render the page with the captured params.
    Render { page: P, params: RouteParams },
    /// A guard rejected the path; navigate to the target instead.
    Redirect(&'static str),
}

/// Ordered route table.
#[derive(Debug, Clone)]
pub struct RouteTable<P> {
    routes: Vec<RouteDef<P>>,
}

impl<P: Copy> RouteTable<P> {
    #[must_use]
    pub fn new(routes: Vec<RouteDef<P>>) -> Self {
        Self { routes }
    }

    /// Resolve a path against the table: exact match first, then the first
    /// matching parameterized pattern, then the wildcard. `None` only when
    /// the table carries no wildcard entry.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<(&RouteDef<P>, RouteParams)> {
        let path = normalize_path(path);
        if let Some(route) = self.routes.iter().find(|route| route.pattern == path) {
            return Some((route, RouteParams::new()));
        }
        for route in &self.routes {
            if !route.pattern.contains("/:") {
                continue;
            }
            if let Some(params) = match_pattern(route.pattern, &path) {
                return Some((route, params));
            }
        }
        self.routes
            .iter()
            .find(|route| route.pattern == WILDCARD)
            .map(|route| (route, RouteParams::new()))
    }

    /// Resolve and run the guards. Redirect targets feed back into this
    /// same pipeline on the next navigation; `/login` and `/account`'s own
    /// guards guarantee the chain terminates.
    #[must_use]
    pub fn decide(&self, path: &str, session: &Session) -> Option<RouteDecision<P>> {
        let (route, params) = self.resolve(path)?;
        if route.requires_auth && !session.is_authenticated() {
            return Some(RouteDecision::Redirect(LOGIN_PATH));
        }
        if let Some(required) = route.required_role {
            if session.role() != Some(required) {
                return Some(RouteDecision::Redirect(ACCOUNT_PATH));
            }
        }
        Some(RouteDecision::Render {
            page: route.page,
            params,
        })
    }
}

/// Segment-wise match of a parameterized pattern. Segment counts must be
/// equal; literal segments compare exactly; `:name` segments capture.
fn match_pattern(pattern: &str, path: &str) -> Option<RouteParams> {
    let pattern_parts: Vec<&str> = pattern.split('/').collect();
    let path_parts: Vec<&str> = path.split('/').collect();
    if pattern_parts.len() != path_parts.len() {
        return None;
    }
    let mut params = RouteParams::new();
    for (pattern_part, path_part) in pattern_parts.iter().zip(&path_parts) {
        if let Some(name) = pattern_part.strip_prefix(':') {
            params.insert(name.to_string(), (*path_part).to_string());
        } else if pattern_part != path_part {
            return None;
        }
    }
    Some(params)
}

#[cfg(test)]
mod tests {
    use super::{RouteDecision, RouteDef, RouteTable, normalize_path};
    use crate::session::{Session, User};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Page {
        Home,
        Login,
        Account,
        Admin,
        Detail,
        DetailEdit,
        NotFound,
    }

    fn table() -> RouteTable<Page> {
        RouteTable::new(vec![
            RouteDef::public("/", Page::Home),
            RouteDef::public("/login", Page::Login),
            RouteDef::public("/items/:id", Page::Detail),
            RouteDef::public("/items/:id/edit", Page::DetailEdit),
            RouteDef::authenticated("/account", Page::Account),
            RouteDef::with_role("/admin", "admin", Page::Admin),
            RouteDef::public(super::WILDCARD, Page::NotFound),
        ])
    }

    fn session_with_role(role: &str) -> Session {
        Session::new(
            "token".to_string(),
            "refresh".to_string(),
            Some(User {
                id: "U1".to_string(),
                email: "u@example.com".to_string(),
                role: role.to_string(),
            }),
        )
    }

    fn rendered_page(decision: Option<RouteDecision<Page>>) -> Page {
        match decision {
            Some(RouteDecision::Render { page, .. }) => page,
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn normalize_adds_leading_slash() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("products"), "/products");
        assert_eq!(normalize_path("/products"), "/products");
    }

    #[test]
    fn exact_match_wins_over_parameterized() {
        let table = RouteTable::new(vec![
            RouteDef::public("/items/:id", Page::Detail),
            RouteDef::public("/items/new", Page::Home),
            RouteDef::public(super::WILDCARD, Page::NotFound),
        ]);
        let (route, params) = table.resolve("/items/new").expect("wildcard present");
        assert_eq!(route.page, Page::Home);
        assert!(params.is_empty());
    }

    #[test]
    fn parameterized_match_extracts_named_segments() {
        let (route, params) = table().resolve("/items/P42").expect("wildcard present");
        assert_eq!(route.page, Page::Detail);
        assert_eq!(params.get("id").map(String::as_str), Some("P42"));

        let (route, params) = table().resolve("/items/P42/edit").expect("wildcard present");
        assert_eq!(route.page, Page::DetailEdit);
        assert_eq!(params.get("id").map(String::as_str), Some("P42"));
    }

    #[test]
    fn segment_count_mismatch_falls_through_to_wildcard() {
        let (route, _) = table().resolve("/items/P42/edit/extra").expect("wildcard");
        assert_eq!(route.page, Page::NotFound);
        let (route, _) = table().resolve("/nowhere").expect("wildcard");
        assert_eq!(route.page, Page::NotFound);
    }

    #[test]
    fn auth_guard_redirects_to_login() {
        let decision = table().decide("/account", &Session::default());
        assert_eq!(decision, Some(RouteDecision::Redirect("/login")));
    }

    #[test]
    fn role_guard_redirects_to_account() {
        let decision = table().decide("/admin", &session_with_role("buyer"));
        assert_eq!(decision, Some(RouteDecision::Redirect("/account")));
    }

    #[test]
    fn admin_role_passes_both_guards() {
        let decision = table().decide("/admin", &session_with_role("admin"));
        assert_eq!(rendered_page(decision), Page::Admin);
    }

    #[test]
    fn guard_redirect_targets_render_without_looping() {
        // /account -> /login for a logged-out session; /login itself renders.
        let logged_out = Session::default();
        assert_eq!(
            table().decide("/account", &logged_out),
            Some(RouteDecision::Redirect("/login"))
        );
        assert_eq!(
            rendered_page(table().decide("/login", &logged_out)),
            Page::Login
        );
        // /admin -> /account for a non-admin session; /account renders.
        let buyer = session_with_role("buyer");
        assert_eq!(
            rendered_page(table().decide("/account", &buyer)),
            Page::Account
        );
    }
}
