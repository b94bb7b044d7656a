use crate::api::ApiClient;
use mall_core::Session;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub api: ApiClient,
    pub session: Session,
    pub on_session: Callback<Session>,
    pub on_logout: Callback<()>,
}

#[derive(Clone, PartialEq)]
enum Feedback {
    Info(String),
    Error(String),
}

#[function_component(AccountPage)]
pub fn account_page(p: &Props) -> Html {
    let feedback = use_state(|| Option::<Feedback>::None);

    let on_refresh_me = {
        let api = p.api.clone();
        let on_session = p.on_session.clone();
        let feedback = feedback.clone();
        Callback::from(move |_| {
            feedback.set(Some(Feedback::Info("刷新中...".to_string())));
            let api = api.clone();
            let on_session = on_session.clone();
            let feedback = feedback.clone();
            spawn_local(async move {
                match api.me().await {
                    Ok(session) => {
                        let email = session
                            .user
                            .as_ref()
                            .map(|user| user.email.clone())
                            .unwrap_or_default();
                        on_session.emit(session);
                        feedback.set(Some(Feedback::Info(format!("刷新成功: {email}"))));
                    }
                    Err(err) => feedback.set(Some(Feedback::Error(err.message))),
                }
            });
        })
    };

    let on_refresh_tokens = {
        let api = p.api.clone();
        let on_session = p.on_session.clone();
        let feedback = feedback.clone();
        Callback::from(move |_| {
            feedback.set(Some(Feedback::Info("刷新令牌中...".to_string())));
            let api = api.clone();
            let on_session = on_session.clone();
            let feedback = feedback.clone();
            spawn_local(async move {
                match api.refresh_session().await {
                    Ok(session) => {
                        on_session.emit(session);
                        feedback.set(Some(Feedback::Info("令牌已刷新。".to_string())));
                    }
                    Err(err) => feedback.set(Some(Feedback::Error(err.message))),
                }
            });
        })
    };

    let on_logout = {
        let cb = p.on_logout.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let user = p.session.user.clone().unwrap_or_default();
    html! {
        <div class="card" data-testid="account-screen">
            <h2>{ "账号中心" }</h2>
            <p class="text-muted">{ "当前登录用户" }</p>
            <ul>
                <li>{ format!("ID: {}", user.id) }</li>
                <li>{ format!("Email: {}", user.email) }</li>
                <li>{ format!("Role: {}", user.role) }</li>
            </ul>
            <div class="row">
                <button id="refresh-me" class="btn-primary" type="button" onclick={on_refresh_me}>
                    { "刷新用户信息" }
                </button>
                <button id="refresh-tokens" type="button" onclick={on_refresh_tokens}>
                    { "刷新会话令牌" }
                </button>
                <button id="logout-btn" type="button" onclick={on_logout}>
                    { "退出登录" }
                </button>
            </div>
            if let Some(feedback) = feedback.as_ref() {
                <p id="account-msg" class={match feedback {
                    Feedback::Info(_) => "text-muted",
                    Feedback::Error(_) => "text-danger",
                }}>
                    { match feedback {
                        Feedback::Info(text) | Feedback::Error(text) => text.clone(),
                    } }
                </p>
            }
        </div>
    }
}
