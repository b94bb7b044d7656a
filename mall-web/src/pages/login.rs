use crate::api::{ApiClient, LoginInput, RegisterInput};
use mall_core::Session;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub api: ApiClient,
    pub navigate: Callback<String>,
    pub on_session: Callback<Session>,
}

fn input_value(e: &InputEvent) -> String {
    e.target_dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(LoginPage)]
pub fn login_page(p: &Props) -> Html {
    let login_form = use_state(LoginInput::default);
    let login_error = use_state(|| Option::<String>::None);
    let register_form = use_state(|| RegisterInput {
        role: "buyer".to_string(),
        ..RegisterInput::default()
    });
    let register_message = use_state(|| Option::<(bool, String)>::None);

    let on_login = {
        let api = p.api.clone();
        let navigate = p.navigate.clone();
        let on_session = p.on_session.clone();
        let form = login_form.clone();
        let error = login_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);
            let api = api.clone();
            let navigate = navigate.clone();
            let on_session = on_session.clone();
            let input = (*form).clone();
            let error = error.clone();
            spawn_local(async move {
                match api.login(&input).await {
                    Ok(session) => {
                        on_session.emit(session);
                        navigate.emit("/account".to_string());
                    }
                    Err(err) => error.set(Some(err.message)),
                }
            });
        })
    };

    let on_register = {
        let api = p.api.clone();
        let form = register_form.clone();
        let message = register_message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            message.set(None);
            let api = api.clone();
            let input = (*form).clone();
            let message = message.clone();
            spawn_local(async move {
                match api.register(&input).await {
                    Ok(_) => message.set(Some((true, "注册成功，请使用上方登录。".to_string()))),
                    Err(err) => message.set(Some((false, err.message))),
                }
            });
        })
    };

    let login_field = |field: fn(&mut LoginInput, String)| {
        let form = login_form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            field(&mut next, input_value(&e));
            form.set(next);
        })
    };
    let register_field = |field: fn(&mut RegisterInput, String)| {
        let form = register_form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            field(&mut next, input_value(&e));
            form.set(next);
        })
    };

    html! {
        <>
            <div class="card">
                <h2>{ "登录" }</h2>
                <form id="login-form" onsubmit={on_login}>
                    <label class="label">{ "邮箱" }</label>
                    <input
                        name="email"
                        type="email"
                        required=true
                        placeholder="buyer@example.com"
                        value={login_form.email.clone()}
                        oninput={login_field(|form, value| form.email = value)}
                    />
                    <label class="label">{ "密码" }</label>
                    <input
                        name="password"
                        type="password"
                        required=true
                        placeholder="请输入密码"
                        value={login_form.password.clone()}
                        oninput={login_field(|form, value| form.password = value)}
                    />
                    <button class="btn-primary" type="submit">{ "登录" }</button>
                    if let Some(message) = login_error.as_ref() {
                        <p id="login-msg" class="text-danger">{ message.clone() }</p>
                    }
                </form>
            </div>
            <div class="card">
                <h3>{ "快速注册" }</h3>
                <form id="register-form" onsubmit={on_register}>
                    <label class="label">{ "邮箱" }</label>
                    <input
                        name="email"
                        type="email"
                        required=true
                        placeholder="new@example.com"
                        value={register_form.email.clone()}
                        oninput={register_field(|form, value| form.email = value)}
                    />
                    <label class="label">{ "密码" }</label>
                    <input
                        name="password"
                        type="password"
                        required=true
                        placeholder="请输入密码"
                        value={register_form.password.clone()}
                        oninput={register_field(|form, value| form.password = value)}
                    />
                    <label class="label">{ "角色" }</label>
                    <input
                        name="role"
                        type="text"
                        placeholder="buyer/admin/ops"
                        value={register_form.role.clone()}
                        oninput={register_field(|form, value| form.role = value)}
                    />
                    <button class="btn-primary" type="submit">{ "注册" }</button>
                    if let Some((ok, message)) = register_message.as_ref() {
                        <p
                            id="register-msg"
                            class={if *ok { "text-muted" } else { "text-danger" }}
                        >
                            { message.clone() }
                        </p>
                    }
                </form>
            </div>
        </>
    }
}
