//! Root component: owns the session, the current path and the route
//! decision, and hands each page its slice of context.

use crate::api::ApiClient;
use crate::components::{LoadingHint, NavBar};
use crate::pages::{
    AccountPage, AdminPage, CartPage, CatalogPage, CheckoutPage, HomePage, LoginPage,
    NotFoundPage, OrderDetailPage, OrdersPage, PaymentPage, PaymentResultPage, ProductDetailPage,
};
use crate::router::{self, Page};
use crate::store::SharedSession;
use gloo::events::EventListener;
use mall_core::{RouteDecision, RouteParams, Session, normalize_path};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let sessions = use_state(SharedSession::restore);
    let session = use_state(|| sessions.get());
    let path = use_state(router::current_path);
    // Bumped when navigating to the path already shown; the changed key
    // below remounts the page instead of no-opping.
    let epoch = use_state(|| 0u32);
    let api = use_state({
        let sessions = (*sessions).clone();
        move || ApiClient::new(crate::config::api_base_url(), sessions)
    });

    {
        let path = path.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&crate::dom::window(), "hashchange", move |_| {
                path.set(router::current_path());
            });
            move || drop(listener)
        });
    }

    let navigate = {
        let path = path.clone();
        let epoch = epoch.clone();
        Callback::from(move |target: String| {
            let target = normalize_path(&target);
            if target == *path {
                epoch.set(*epoch + 1);
            } else {
                router::push_path(&target);
            }
        })
    };

    let on_session = {
        let session = session.clone();
        Callback::from(move |next: Session| session.set(next))
    };

    let on_logout = {
        let sessions = (*sessions).clone();
        let session = session.clone();
        Callback::from(move |()| {
            sessions.reset();
            session.set(Session::default());
            router::push_path("/login");
        })
    };

    let decision = router::route_table().decide(&path, &session);
    let redirect = match &decision {
        Some(RouteDecision::Redirect(target)) => Some(*target),
        _ => None,
    };
    use_effect_with((redirect, (*path).clone()), move |(redirect, _)| {
        if let Some(target) = redirect {
            router::push_path(target);
        }
    });

    let view = match decision {
        Some(RouteDecision::Render { page, params }) => page_view(
            page,
            &params,
            &api,
            &session,
            &navigate,
            &on_session,
            &on_logout,
        ),
        _ => html! { <LoadingHint label="跳转中..." /> },
    };

    html! {
        <>
            <header>
                <h1>{ "Meridian Mall" }</h1>
                <NavBar
                    active_path={(*path).clone()}
                    session={(*session).clone()}
                    on_logout={on_logout.clone()}
                />
            </header>
            <main id="app" key={format!("{}@{}", *path, *epoch)}>
                { view }
            </main>
        </>
    }
}

#[allow(clippy::too_many_arguments)]
fn page_view(
    page: Page,
    params: &RouteParams,
    api: &UseStateHandle<ApiClient>,
    session: &UseStateHandle<Session>,
    navigate: &Callback<String>,
    on_session: &Callback<Session>,
    on_logout: &Callback<()>,
) -> Html {
    let api = (**api).clone();
    let param = |name: &str| params.get(name).cloned().unwrap_or_default();
    match page {
        Page::Home => html! { <HomePage /> },
        Page::Login => html! {
            <LoginPage {api} navigate={navigate.clone()} on_session={on_session.clone()} />
        },
        Page::Catalog => html! { <CatalogPage {api} /> },
        Page::ProductDetail => html! {
            <ProductDetailPage {api} navigate={navigate.clone()} id={param("id")} />
        },
        Page::Cart => html! { <CartPage {api} /> },
        Page::Checkout => html! { <CheckoutPage {api} navigate={navigate.clone()} /> },
        Page::Payment => html! {
            <PaymentPage {api} navigate={navigate.clone()} order_id={param("order_id")} />
        },
        Page::PaymentResult => html! {
            <PaymentResultPage {api} order_id={param("order_id")} />
        },
        Page::Orders => html! { <OrdersPage {api} /> },
        Page::OrderDetail => html! { <OrderDetailPage {api} id={param("id")} /> },
        Page::Account => html! {
            <AccountPage
                {api}
                session={(**session).clone()}
                on_session={on_session.clone()}
                on_logout={on_logout.clone()}
            />
        },
        Page::Admin => html! { <AdminPage {api} /> },
        Page::NotFound => html! { <NotFoundPage /> },
    }
}
