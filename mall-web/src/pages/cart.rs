use crate::api::{ApiClient, Cart};
use crate::components::{ErrorNotice, LoadingHint};
use crate::pages::Remote;
use mall_core::{OrderLine, format_price_cents};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub api: ApiClient,
}

#[function_component(CartPage)]
pub fn cart_page(p: &Props) -> Html {
    let cart = use_state(|| Remote::<Cart>::Loading);
    let action_error = use_state(|| Option::<mall_core::ApiError>::None);
    let reload = use_state(|| 0_u32);

    {
        let api = p.api.clone();
        let cart = cart.clone();
        use_effect_with(*reload, move |_| {
            cart.set(Remote::Loading);
            spawn_local(async move {
                match api.get_cart().await {
                    Ok(loaded) => cart.set(Remote::Ready(loaded)),
                    Err(err) => cart.set(Remote::Failed(err)),
                }
            });
        });
    }

    let refresh = {
        let reload = reload.clone();
        Callback::from(move |()| reload.set(*reload + 1))
    };
    let on_update = {
        let api = p.api.clone();
        let action_error = action_error.clone();
        let refresh = refresh.clone();
        Callback::from(move |(product_id, quantity): (String, i64)| {
            action_error.set(None);
            let api = api.clone();
            let action_error = action_error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match api.update_cart_item(&product_id, quantity).await {
                    Ok(_) => refresh.emit(()),
                    Err(err) => action_error.set(Some(err)),
                }
            });
        })
    };
    let on_remove = {
        let api = p.api.clone();
        let action_error = action_error.clone();
        let refresh = refresh.clone();
        Callback::from(move |product_id: String| {
            action_error.set(None);
            let api = api.clone();
            let action_error = action_error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match api.remove_cart_item(&product_id).await {
                    Ok(_) => refresh.emit(()),
                    Err(err) => action_error.set(Some(err)),
                }
            });
        })
    };

    let line_row = |line: &OrderLine| {
        let update = {
            let on_update = on_update.clone();
            let product_id = line.product_id.clone();
            Callback::from(move |e: Event| {
                let value = e
                    .target_dyn_into::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default();
                if let Ok(quantity) = value.parse::<i64>() {
                    on_update.emit((product_id.clone(), quantity.max(1)));
                }
            })
        };
        let remove = {
            let on_remove = on_remove.clone();
            let product_id = line.product_id.clone();
            Callback::from(move |_| on_remove.emit(product_id.clone()))
        };
        html! {
            <tr key={line.product_id.clone()}>
                <td>{ line.name.clone() }</td>
                <td>{ format_price_cents(line.price_cents) }</td>
                <td>
                    <input
                        type="number"
                        min="1"
                        value={line.quantity.to_string()}
                        onchange={update}
                    />
                </td>
                <td>{ format_price_cents(line.line_total_cents) }</td>
                <td><button type="button" onclick={remove}>{ "移除" }</button></td>
            </tr>
        }
    };

    let body = match &*cart {
        Remote::Loading => html! { <LoadingHint /> },
        Remote::Failed(err) => html! { <ErrorNotice error={err.clone()} on_retry={refresh} /> },
        Remote::Ready(cart) if cart.items.is_empty() => html! {
            <p class="text-muted">{ "购物车是空的，去逛逛商品吧。" }</p>
        },
        Remote::Ready(cart) => html! {
            <>
                <table class="cart-table">
                    <thead>
                        <tr>
                            <th>{ "商品" }</th>
                            <th>{ "单价" }</th>
                            <th>{ "数量" }</th>
                            <th>{ "小计" }</th>
                            <th>{ "操作" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for cart.items.iter().map(line_row) }
                    </tbody>
                </table>
                <p>{ format!("合计: {}", format_price_cents(cart.total_cents)) }</p>
                <a class="btn-primary" href="#/checkout">{ "去结算" }</a>
            </>
        },
    };

    html! {
        <div class="card" data-testid="cart-screen">
            <h2>{ "购物车" }</h2>
            { body }
            if let Some(err) = action_error.as_ref() {
                <ErrorNotice error={err.clone()} />
            }
        </div>
    }
}
