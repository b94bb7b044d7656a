use crate::api::{ApiClient, RefundInput};
use crate::components::{ErrorNotice, LoadingHint};
use crate::pages::Remote;
use mall_core::{Order, format_price_cents};
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub api: ApiClient,
    pub id: String,
}

/// Order plus its optional sub-resources; both may legitimately be absent.
#[derive(Debug, Clone, PartialEq)]
struct OrderDetail {
    order: Order,
    tracking: Option<Value>,
    refund: Option<Value>,
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

#[function_component(OrderDetailPage)]
pub fn order_detail_page(p: &Props) -> Html {
    let state = use_state(|| Remote::<OrderDetail>::Loading);
    let refund_reason = use_state(String::new);
    let refund_error = use_state(|| Option::<mall_core::ApiError>::None);
    let reload = use_state(|| 0_u32);

    {
        let api = p.api.clone();
        let id = p.id.clone();
        let state = state.clone();
        use_effect_with((id, *reload), move |(id, _)| {
            state.set(Remote::Loading);
            let id = id.clone();
            spawn_local(async move {
                let loaded = async {
                    let order = api.get_order(&id).await?;
                    let tracking = api.get_order_tracking(&id).await?;
                    let refund = api.get_refund(&id).await?;
                    Ok::<_, mall_core::ApiError>(OrderDetail {
                        order: Order::from(order),
                        tracking,
                        refund,
                    })
                }
                .await;
                match loaded {
                    Ok(detail) => state.set(Remote::Ready(detail)),
                    Err(err) => state.set(Remote::Failed(err)),
                }
            });
        });
    }

    let refresh = {
        let reload = reload.clone();
        Callback::from(move |()| reload.set(*reload + 1))
    };
    let on_reason = {
        let refund_reason = refund_reason.clone();
        Callback::from(move |e: InputEvent| {
            let value = e
                .target_dyn_into::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            refund_reason.set(value);
        })
    };
    let on_request_refund = {
        let api = p.api.clone();
        let id = p.id.clone();
        let refund_reason = refund_reason.clone();
        let refund_error = refund_error.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            refund_error.set(None);
            let api = api.clone();
            let id = id.clone();
            let input = RefundInput {
                reason: (*refund_reason).clone(),
            };
            let refund_error = refund_error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match api.request_refund(&id, &input).await {
                    Ok(_) => refresh.emit(()),
                    Err(err) => refund_error.set(Some(err)),
                }
            });
        })
    };

    let body = match &*state {
        Remote::Loading => html! { <LoadingHint /> },
        Remote::Failed(err) => html! { <ErrorNotice error={err.clone()} on_retry={refresh} /> },
        Remote::Ready(detail) => {
            let order = &detail.order;
            html! {
                <>
                    <p>
                        { format!(
                            "订单 {} | 状态: {} | 金额: {}",
                            order.id,
                            order.status.label(),
                            format_price_cents(order.total_cents),
                        ) }
                    </p>
                    <table class="order-lines">
                        <thead>
                            <tr>
                                <th>{ "商品" }</th>
                                <th>{ "单价" }</th>
                                <th>{ "数量" }</th>
                                <th>{ "小计" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for order.items.iter().map(|line| html! {
                                <tr key={line.product_id.clone()}>
                                    <td>{ line.name.clone() }</td>
                                    <td>{ format_price_cents(line.price_cents) }</td>
                                    <td>{ line.quantity }</td>
                                    <td>{ format_price_cents(line.line_total_cents) }</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>

                    <h3>{ "物流" }</h3>
                    if let Some(tracking) = &detail.tracking {
                        <pre id="tracking-json">{ pretty(tracking) }</pre>
                    } else {
                        <p class="text-muted">{ "暂无物流信息。" }</p>
                    }

                    <h3>{ "退款" }</h3>
                    if let Some(refund) = &detail.refund {
                        <pre id="refund-json">{ pretty(refund) }</pre>
                    } else if order.status.is_refundable() {
                        <form id="refund-form" onsubmit={on_request_refund}>
                            <label class="label" for="refund-reason">{ "退款原因" }</label>
                            <input
                                id="refund-reason"
                                type="text"
                                placeholder="填写退款原因"
                                value={(*refund_reason).clone()}
                                oninput={on_reason}
                            />
                            <button class="btn-primary" type="submit">{ "申请退款" }</button>
                        </form>
                    } else {
                        <p class="text-muted">{ "当前状态不可退款。" }</p>
                    }
                    if let Some(err) = refund_error.as_ref() {
                        <ErrorNotice error={err.clone()} />
                    }
                </>
            }
        }
    };

    html! {
        <div class="card" data-testid="order-detail-screen">
            <h2>{ "订单详情" }</h2>
            { body }
            <a href="#/orders">{ "返回订单列表" }</a>
        </div>
    }
}
