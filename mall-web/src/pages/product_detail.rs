use crate::api::{ApiClient, CartItemInput};
use crate::components::{ErrorNotice, LoadingHint};
use crate::pages::Remote;
use mall_core::{CatalogItem, format_price_cents};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub api: ApiClient,
    pub navigate: Callback<String>,
    pub id: String,
}

#[function_component(ProductDetailPage)]
pub fn product_detail_page(p: &Props) -> Html {
    let item = use_state(|| Remote::<CatalogItem>::Loading);
    let quantity = use_state(|| 1_i64);
    let cart_error = use_state(|| Option::<mall_core::ApiError>::None);
    let reload = use_state(|| 0_u32);

    {
        let api = p.api.clone();
        let id = p.id.clone();
        let item = item.clone();
        use_effect_with((id, *reload), move |(id, _)| {
            item.set(Remote::Loading);
            let id = id.clone();
            spawn_local(async move {
                match api.get_product(&id).await {
                    Ok(raw) => item.set(Remote::Ready(CatalogItem::from(raw))),
                    Err(err) => item.set(Remote::Failed(err)),
                }
            });
        });
    }

    let on_retry = {
        let reload = reload.clone();
        Callback::from(move |()| reload.set(*reload + 1))
    };
    let on_quantity = {
        let quantity = quantity.clone();
        Callback::from(move |e: InputEvent| {
            let value = e
                .target_dyn_into::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            quantity.set(value.parse::<i64>().map_or(1, |parsed| parsed.max(1)));
        })
    };
    let on_add_to_cart = {
        let api = p.api.clone();
        let navigate = p.navigate.clone();
        let id = p.id.clone();
        let quantity = quantity.clone();
        let cart_error = cart_error.clone();
        Callback::from(move |_| {
            cart_error.set(None);
            let api = api.clone();
            let navigate = navigate.clone();
            let input = CartItemInput {
                product_id: id.clone(),
                quantity: *quantity,
            };
            let cart_error = cart_error.clone();
            spawn_local(async move {
                match api.add_cart_item(&input).await {
                    Ok(_) => navigate.emit("/cart".to_string()),
                    Err(err) => cart_error.set(Some(err)),
                }
            });
        })
    };

    let body = match &*item {
        Remote::Loading => html! { <LoadingHint /> },
        Remote::Failed(err) => html! { <ErrorNotice error={err.clone()} on_retry={on_retry} /> },
        Remote::Ready(item) => {
            let raw_json =
                serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            html! {
                <>
                    <h3>{ item.name.clone() }</h3>
                    <p>{ item.description.clone() }</p>
                    <p class="text-muted">
                        { format!(
                            "价格: {} | 库存: {} | 分类: {}",
                            format_price_cents(item.price_cents),
                            item.stock,
                            item.category,
                        ) }
                    </p>
                    <div class="row">
                        <label class="label" for="detail-quantity">{ "数量" }</label>
                        <input
                            id="detail-quantity"
                            type="number"
                            min="1"
                            value={quantity.to_string()}
                            oninput={on_quantity}
                        />
                        <button
                            id="add-to-cart"
                            class="btn-primary"
                            type="button"
                            disabled={item.stock <= 0}
                            onclick={on_add_to_cart}
                        >
                            { if item.stock > 0 { "加入购物车" } else { "暂时缺货" } }
                        </button>
                    </div>
                    if let Some(err) = cart_error.as_ref() {
                        <ErrorNotice error={err.clone()} />
                    }
                    <pre id="detail-json">{ raw_json }</pre>
                </>
            }
        }
    };

    html! {
        <div class="card" data-testid="product-detail-screen">
            <h2>{ "商品详情" }</h2>
            { body }
            <a href="#/products">{ "返回商品列表" }</a>
        </div>
    }
}
