use mall_core::Session;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub active_path: String,
    pub session: Session,
    pub on_logout: Callback<()>,
}

fn nav_link(path: &'static str, label: &'static str, active_path: &str) -> Html {
    let class = if active_path == path {
        Some("active")
    } else {
        None
    };
    html! {
        <a href={format!("#{path}")} class={class}>{ label }</a>
    }
}

/// Top navigation. Entries follow the session: guests see the login link,
/// signed-in users get cart/orders/account, admins additionally the probe.
#[function_component(NavBar)]
pub fn nav_bar(p: &Props) -> Html {
    let logout = {
        let cb = p.on_logout.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let is_admin = p
        .session
        .user
        .as_ref()
        .is_some_and(mall_core::User::is_admin);
    html! {
        <nav id="nav-links" aria-label="主导航">
            { nav_link("/", "首页", &p.active_path) }
            { nav_link("/products", "商品", &p.active_path) }
            if !p.session.is_authenticated() {
                { nav_link("/login", "登录", &p.active_path) }
            } else {
                { nav_link("/cart", "购物车", &p.active_path) }
                { nav_link("/orders", "订单", &p.active_path) }
                { nav_link("/account", "账号", &p.active_path) }
                if is_admin {
                    { nav_link("/admin", "管理探针", &p.active_path) }
                }
                <button id="logout-button" type="button" onclick={logout}>{ "退出" }</button>
            }
        </nav>
    }
}
