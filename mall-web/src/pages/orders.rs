use crate::api::ApiClient;
use crate::components::{ErrorNotice, LoadingHint, Pagination};
use crate::pages::Remote;
use mall_core::{
    Order, OrderStatus, filter_orders_by_status, format_price_cents, normalize_order_items,
    paginate,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

const PAGE_SIZE: i64 = 5;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub api: ApiClient,
}

const STATUS_OPTIONS: &[OrderStatus] = &[
    OrderStatus::PendingPayment,
    OrderStatus::Paid,
    OrderStatus::Shipped,
    OrderStatus::Done,
    OrderStatus::Canceled,
];

fn order_row(order: &Order) -> Html {
    html! {
        <tr key={order.id.clone()}>
            <td>{ order.id.clone() }</td>
            <td>{ order.status.label() }</td>
            <td>{ format_price_cents(order.total_cents) }</td>
            <td class="text-muted">{ order.created_at.clone() }</td>
            <td><a href={format!("#/orders/{}", order.id)}>{ "详情" }</a></td>
        </tr>
    }
}

#[function_component(OrdersPage)]
pub fn orders_page(p: &Props) -> Html {
    let orders = use_state(|| Remote::<Vec<Order>>::Loading);
    let status_filter = use_state(|| Option::<OrderStatus>::None);
    let page = use_state(|| 1_i64);
    let reload = use_state(|| 0_u32);

    {
        let api = p.api.clone();
        let orders = orders.clone();
        use_effect_with(*reload, move |_| {
            orders.set(Remote::Loading);
            spawn_local(async move {
                match api.list_orders().await {
                    Ok(raw) => orders.set(Remote::Ready(normalize_order_items(raw))),
                    Err(err) => orders.set(Remote::Failed(err)),
                }
            });
        });
    }

    let on_retry = {
        let reload = reload.clone();
        Callback::from(move |()| reload.set(*reload + 1))
    };
    let on_filter = {
        let status_filter = status_filter.clone();
        let page = page.clone();
        Callback::from(move |e: Event| {
            let value = e
                .target_dyn_into::<HtmlSelectElement>()
                .map(|select| select.value())
                .unwrap_or_default();
            page.set(1);
            status_filter.set((value != "all").then(|| OrderStatus::parse(&value)));
        })
    };

    let body = match &*orders {
        Remote::Loading => html! { <LoadingHint /> },
        Remote::Failed(err) => html! { <ErrorNotice error={err.clone()} on_retry={on_retry} /> },
        Remote::Ready(list) => {
            let visible = match *status_filter {
                Some(status) => filter_orders_by_status(list, status),
                None => list.clone(),
            };
            let page_data = paginate(&visible, *page, PAGE_SIZE);
            let on_page = {
                let page = page.clone();
                Callback::from(move |next: usize| page.set(next as i64))
            };
            html! {
                <>
                    <div class="row filters">
                        <label class="label" for="order-status">{ "状态" }</label>
                        <select id="order-status" onchange={on_filter}>
                            <option value="all" selected={status_filter.is_none()}>{ "全部" }</option>
                            { for STATUS_OPTIONS.iter().map(|status| html! {
                                <option
                                    value={status.as_str()}
                                    selected={*status_filter == Some(*status)}
                                >
                                    { status.label() }
                                </option>
                            }) }
                        </select>
                    </div>
                    if page_data.items.is_empty() {
                        <p class="text-muted">{ "暂无符合条件的订单。" }</p>
                    } else {
                        <table class="order-table">
                            <thead>
                                <tr>
                                    <th>{ "订单号" }</th>
                                    <th>{ "状态" }</th>
                                    <th>{ "金额" }</th>
                                    <th>{ "创建时间" }</th>
                                    <th>{ "操作" }</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for page_data.items.iter().map(order_row) }
                            </tbody>
                        </table>
                        <Pagination
                            page={page_data.page}
                            total_pages={page_data.total_pages}
                            {on_page}
                        />
                    }
                </>
            }
        }
    };

    html! {
        <div class="card" data-testid="orders-screen">
            <h2>{ "订单中心" }</h2>
            { body }
        </div>
    }
}
