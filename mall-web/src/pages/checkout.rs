use crate::api::ApiClient;
use crate::components::ErrorNotice;
use mall_core::{CheckoutForm, build_checkout_preview_input};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub api: ApiClient,
    pub navigate: Callback<String>,
}

#[function_component(CheckoutPage)]
pub fn checkout_page(p: &Props) -> Html {
    let form = use_state(CheckoutForm::default);
    let preview = use_state(|| Option::<String>::None);
    let error = use_state(|| Option::<mall_core::ApiError>::None);
    let submitting = use_state(|| false);

    let field = |apply: fn(&mut CheckoutForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = e
                .target_dyn_into::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };

    let on_preview = {
        let api = p.api.clone();
        let form = form.clone();
        let preview = preview.clone();
        let error = error.clone();
        Callback::from(move |_| {
            error.set(None);
            let api = api.clone();
            let input = build_checkout_preview_input(&form);
            let preview = preview.clone();
            let error = error.clone();
            spawn_local(async move {
                match api.checkout_preview(&input).await {
                    Ok(payload) => preview.set(Some(
                        serde_json::to_string_pretty(&payload)
                            .unwrap_or_else(|_| "{}".to_string()),
                    )),
                    Err(err) => error.set(Some(err)),
                }
            });
        })
    };

    let on_submit = {
        let api = p.api.clone();
        let navigate = p.navigate.clone();
        let form = form.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);
            submitting.set(true);
            let api = api.clone();
            let navigate = navigate.clone();
            let input = build_checkout_preview_input(&form);
            let error = error.clone();
            let submitting = submitting.clone();
            spawn_local(async move {
                match api.create_order(&input).await {
                    Ok(order) => navigate.emit(format!("/payments/{}", order.id)),
                    Err(err) => {
                        submitting.set(false);
                        error.set(Some(err));
                    }
                }
            });
        })
    };

    html! {
        <div class="card" data-testid="checkout-screen">
            <h2>{ "结算" }</h2>
            <form id="checkout-form" onsubmit={on_submit}>
                <label class="label">{ "运费（分）" }</label>
                <input
                    name="shipping_cents"
                    type="text"
                    placeholder="0"
                    value={form.shipping_cents.clone()}
                    oninput={field(|form, value| form.shipping_cents = value)}
                />
                <label class="label">{ "优惠金额（分）" }</label>
                <input
                    name="discount_cents"
                    type="text"
                    placeholder="0"
                    value={form.discount_cents.clone()}
                    oninput={field(|form, value| form.discount_cents = value)}
                />
                <label class="label">{ "优惠码" }</label>
                <input
                    name="coupon_code"
                    type="text"
                    placeholder="SPRING"
                    value={form.coupon_code.clone()}
                    oninput={field(|form, value| form.coupon_code = value)}
                />
                <div class="row">
                    <button type="button" onclick={on_preview}>{ "试算价格" }</button>
                    <button class="btn-primary" type="submit" disabled={*submitting}>
                        { "提交订单" }
                    </button>
                </div>
            </form>
            if let Some(err) = error.as_ref() {
                <ErrorNotice error={err.clone()} />
            }
            if let Some(text) = preview.as_ref() {
                <h3>{ "价格试算" }</h3>
                <pre id="checkout-preview">{ text.clone() }</pre>
            }
        </div>
    }
}
