use crate::api::ApiClient;
use crate::components::{ErrorNotice, LoadingHint};
use crate::pages::Remote;
use mall_core::{
    Order, PaymentOutcome, PaymentRecord, PaymentStatus, derive_payment_outcome,
    format_price_cents,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub api: ApiClient,
    pub order_id: String,
}

const fn outcome_class(outcome: PaymentOutcome) -> &'static str {
    match outcome {
        PaymentOutcome::Success => "text-success",
        PaymentOutcome::Failed => "text-danger",
        PaymentOutcome::Pending => "text-muted",
    }
}

#[function_component(PaymentResultPage)]
pub fn payment_result_page(p: &Props) -> Html {
    let state = use_state(|| Remote::<(Order, Option<PaymentRecord>)>::Loading);
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

    let body = match &*state {
        Remote::Loading => html! { <LoadingHint /> },
        Remote::Failed(err) => html! { <ErrorNotice error={err.clone()} on_retry={refresh} /> },
        Remote::Ready((order, payment)) => {
            let payment_status = payment
                .as_ref()
                .map_or(PaymentStatus::Unknown, |record| record.status);
            let outcome = derive_payment_outcome(order.status, payment_status);
            let refresh_button = {
                let refresh = refresh.clone();
                html! {
                    <button type="button" onclick={Callback::from(move |_| refresh.emit(()))}>
                        { "刷新结果" }
                    </button>
                }
            };
            html! {
                <>
                    <p class={outcome_class(outcome)}>
                        <strong>{ outcome.label() }</strong>
                    </p>
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
                            { format!("支付状态: {} | 流水: {}", record.status.as_str(), record.external_txn_id) }
                        </p>
                    }
                    if outcome == PaymentOutcome::Pending {
                        { refresh_button }
                    }
                </>
            }
        }
    };

    html! {
        <div class="card" data-testid="payment-result-screen">
            <h2>{ "支付结果" }</h2>
            { body }
            <div class="row">
                <a href={format!("#/orders/{}", p.order_id)}>{ "查看订单详情" }</a>
                <a href="#/orders">{ "返回订单列表" }</a>
            </div>
        </div>
    }
}
