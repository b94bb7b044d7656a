use crate::api::ApiClient;
use crate::components::{ErrorNotice, LoadingHint};
use crate::pages::Remote;
use mall_core::{MockpayCallback, Order, PaymentRecord, format_price_cents};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub api: ApiClient,
    pub navigate: Callback<String>,
    pub order_id: String,
}

#[function_component(PaymentPage)]
pub fn payment_page(p: &Props) -> Html {
    let state = use_state(|| Remote::<(Order, Option<PaymentRecord>)>::Loading);
    let action_error = use_state(|| Option::<mall_core::ApiError>::None);
    let reload = use_state(|| 0_u32);

    {
        let api = p.api.clone();
        let order_id = p.order_id.clone();
        let state = state.clone();
        use_effect_with((order_id, *reload), move |(order_id, _)| {
            state.set(Remote::Loading);
            let order_id = order_id.clone();
            spawn_local(async move {
                let loaded = async {
                    let order = api.get_order(&order_id).await?;
                    let payment = api.get_payment_by_order(&order_id).await?;
                    Ok::<_, mall_core::ApiError>((Order::from(order), payment))
                }
                .await;
                match loaded {
                    Ok(pair) => state.set(Remote::Ready(pair)),
                    Err(err) => state.set(Remote::Failed(err)),
                }
            });
        });
    }

    let refresh = {
        let reload = reload.clone();
        Callback::from(move |()| reload.set(*reload + 1))
    };
    let on_create_payment = {
        let api = p.api.clone();
        let order_id = p.order_id.clone();
        let action_error = action_error.clone();
        let refresh = refresh.clone();
        Callback::from(move |_| {
            action_error.set(None);
            let api = api.clone();
            let order_id = order_id.clone();
            let action_error = action_error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match api.create_payment(&order_id).await {
                    Ok(_) => refresh.emit(()),
                    Err(err) => action_error.set(Some(err)),
                }
            });
        })
    };

    // The simulator signs the callback body the way the real provider would.
    let simulate = |result: &'static str| {
        let api = p.api.clone();
        let navigate = p.navigate.clone();
        let order_id = p.order_id.clone();
        let action_error = action_error.clone();
        Callback::from(move |_| {
            action_error.set(None);
            let api = api.clone();
            let navigate = navigate.clone();
            let order_id = order_id.clone();
            let action_error = action_error.clone();
            let txn_suffix = format!("{}", js_sys::Date::now() as u64);
            spawn_local(async move {
                let callback = MockpayCallback::new(&order_id, result, &txn_suffix);
                match api
                    .mockpay_callback(&callback, &crate::config::mockpay_secret())
                    .await
                {
                    Ok(_) => navigate.emit(format!("/payment-result/{order_id}")),
                    Err(err) => action_error.set(Some(err)),
                }
            });
        })
    };

    let body = match &*state {
        Remote::Loading => html! { <LoadingHint /> },
        Remote::Failed(err) => html! { <ErrorNotice error={err.clone()} on_retry={refresh} /> },
        Remote::Ready((order, payment)) => html! {
            <>
                <p>
                    { format!(
                        "订单 {} | 状态: {} | 金额: {}",
                        order.id,
                        order.status.label(),
                        format_price_cents(order.total_cents),
                    ) }
                </p>
                if let Some(record) = payment {
                    <p class="text-muted">
                        { format!(
                            "支付单 {} | 渠道: {} | 状态: {}",
                            record.id, record.provider, record.status.as_str(),
                        ) }
                    </p>
                } else {
                    <p class="text-muted">{ "尚未发起支付。" }</p>
                }
                <div class="row">
                    <button
                        id="create-payment"
                        class="btn-primary"
                        type="button"
                        onclick={on_create_payment}
                    >
                        { "发起支付" }
                    </button>
                    <button id="mockpay-success" type="button" onclick={simulate("success")}>
                        { "模拟支付成功" }
                    </button>
                    <button id="mockpay-fail" type="button" onclick={simulate("failed")}>
                        { "模拟支付失败" }
                    </button>
                </div>
            </>
        },
    };

    html! {
        <div class="card" data-testid="payment-screen">
            <h2>{ "支付" }</h2>
            { body }
            if let Some(err) = action_error.as_ref() {
                <ErrorNotice error={err.clone()} />
            }
            <a href={format!("#/payment-result/{}", p.order_id)}>{ "查看支付结果" }</a>
        </div>
    }
}
