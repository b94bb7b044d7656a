use crate::api::ApiClient;
use crate::components::ErrorNotice;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub api: ApiClient,
}

#[function_component(AdminPage)]
pub fn admin_page(p: &Props) -> Html {
    let output = use_state(|| Option::<String>::None);
    let error = use_state(|| Option::<mall_core::ApiError>::None);
    let probing = use_state(|| false);

    let probe = {
        let api = p.api.clone();
        let output = output.clone();
        let error = error.clone();
        let probing = probing.clone();
        Callback::from(move |()| {
            error.set(None);
            output.set(None);
            probing.set(true);
            let api = api.clone();
            let output = output.clone();
            let error = error.clone();
            let probing = probing.clone();
            spawn_local(async move {
                match api.admin_ping().await {
                    Ok(payload) => output.set(Some(
                        serde_json::to_string_pretty(&payload)
                            .unwrap_or_else(|_| "{}".to_string()),
                    )),
                    Err(err) => error.set(Some(err)),
                }
                probing.set(false);
            });
        })
    };

    let on_probe = {
        let probe = probe.clone();
        Callback::from(move |_: MouseEvent| probe.emit(()))
    };

    html! {
        <div class="card" data-testid="admin-screen">
            <h2>{ "管理员探针" }</h2>
            <p class="text-muted">{ "此页面需要 admin 角色。" }</p>
            <button id="admin-probe" class="btn-primary" type="button" disabled={*probing} onclick={on_probe}>
                { "调用 /api/v1/admin/ping" }
            </button>
            if *probing {
                <p id="admin-msg" class="text-muted">{ "请求中..." }</p>
            }
            if let Some(err) = error.as_ref() {
                <ErrorNotice error={err.clone()} on_retry={probe.clone()} />
            }
            if let Some(text) = output.as_ref() {
                <pre id="admin-output">{ text.clone() }</pre>
            }
        </div>
    }
}
