use crate::api::ApiClient;
use crate::components::{ErrorNotice, LoadingHint, Pagination};
use crate::pages::Remote;
use mall_core::{
    CatalogItem, CatalogQuery, CatalogSort, LIST_RENDER_BUDGET_MS, StockFilter,
    apply_catalog_query, format_price_cents, is_render_within_budget, normalize_catalog_items,
    paginate,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

const PAGE_SIZE: i64 = 8;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub api: ApiClient,
}

fn select_value(e: &Event) -> String {
    e.target_dyn_into::<HtmlSelectElement>()
        .map(|select| select.value())
        .unwrap_or_default()
}

fn item_card(item: &CatalogItem) -> Html {
    html! {
        <div class="card product-card" key={item.id.clone()}>
            <h3>{ item.name.clone() }</h3>
            <p>{ item.description.clone() }</p>
            <p class="text-muted">
                { format!("价格: {} | 库存: {}", format_price_cents(item.price_cents), item.stock) }
            </p>
            <a href={format!("#/products/{}", item.id)}>{ "查看详情" }</a>
        </div>
    }
}

#[function_component(CatalogPage)]
pub fn catalog_page(p: &Props) -> Html {
    let items = use_state(|| Remote::<Vec<CatalogItem>>::Loading);
    let query = use_state(CatalogQuery::default);
    let page = use_state(|| 1_i64);
    let reload = use_state(|| 0_u32);

    {
        let api = p.api.clone();
        let items = items.clone();
        use_effect_with(*reload, move |_| {
            items.set(Remote::Loading);
            let started = crate::dom::now_ms();
            spawn_local(async move {
                match api.list_products().await {
                    Ok(raw) => {
                        let normalized = normalize_catalog_items(raw);
                        let elapsed = crate::dom::now_ms() - started;
                        if is_render_within_budget(elapsed, LIST_RENDER_BUDGET_MS) {
                            log::debug!("catalog loaded in {elapsed:.1}ms");
                        } else {
                            log::warn!(
                                "catalog load took {elapsed:.1}ms (budget {LIST_RENDER_BUDGET_MS}ms)"
                            );
                        }
                        items.set(Remote::Ready(normalized));
                    }
                    Err(err) => items.set(Remote::Failed(err)),
                }
            });
        });
    }

    // Any filter change resets the pager to the first page.
    let set_query = {
        let query = query.clone();
        let page = page.clone();
        Callback::from(move |next: CatalogQuery| {
            page.set(1);
            query.set(next);
        })
    };

    let on_keyword = {
        let query = query.clone();
        let set_query = set_query.clone();
        Callback::from(move |e: InputEvent| {
            let keyword = e
                .target_dyn_into::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            set_query.emit(CatalogQuery {
                keyword,
                ..(*query).clone()
            });
        })
    };
    let on_category = {
        let query = query.clone();
        let set_query = set_query.clone();
        Callback::from(move |e: Event| {
            let value = select_value(&e);
            set_query.emit(CatalogQuery {
                category: (value != "all").then_some(value),
                ..(*query).clone()
            });
        })
    };
    let on_stock = {
        let query = query.clone();
        let set_query = set_query.clone();
        Callback::from(move |e: Event| {
            set_query.emit(CatalogQuery {
                stock: StockFilter::parse(&select_value(&e)),
                ..(*query).clone()
            });
        })
    };
    let on_sort = {
        let query = query.clone();
        let set_query = set_query.clone();
        Callback::from(move |e: Event| {
            set_query.emit(CatalogQuery {
                sort: CatalogSort::parse(&select_value(&e)),
                ..(*query).clone()
            });
        })
    };
    let on_retry = {
        let reload = reload.clone();
        Callback::from(move |()| reload.set(*reload + 1))
    };

    let body = match &*items {
        Remote::Loading => html! { <LoadingHint /> },
        Remote::Failed(err) => html! { <ErrorNotice error={err.clone()} on_retry={on_retry} /> },
        Remote::Ready(list) => {
            let mut categories: Vec<String> = list
                .iter()
                .map(|item| item.category.clone())
                .filter(|category| !category.is_empty())
                .collect();
            categories.sort();
            categories.dedup();

            let filtered = apply_catalog_query(list, &query);
            let page_data = paginate(&filtered, *page, PAGE_SIZE);
            let on_page = {
                let page = page.clone();
                Callback::from(move |next: usize| page.set(next as i64))
            };

            html! {
                <>
                    <div class="row filters">
                        <input
                            id="catalog-keyword"
                            type="search"
                            placeholder="搜索商品名称或描述"
                            value={query.keyword.clone()}
                            oninput={on_keyword}
                        />
                        <select id="catalog-category" onchange={on_category}>
                            <option value="all" selected={query.category.is_none()}>{ "全部分类" }</option>
                            { for categories.iter().map(|category| html! {
                                <option
                                    value={category.clone()}
                                    selected={query.category.as_deref() == Some(category.as_str())}
                                >
                                    { category.clone() }
                                </option>
                            }) }
                        </select>
                        <select id="catalog-stock" onchange={on_stock}>
                            <option value="all" selected={query.stock == StockFilter::All}>{ "全部库存" }</option>
                            <option value="in" selected={query.stock == StockFilter::InStock}>{ "有货" }</option>
                            <option value="out" selected={query.stock == StockFilter::OutOfStock}>{ "缺货" }</option>
                        </select>
                        <select id="catalog-sort" onchange={on_sort}>
                            <option value="name_asc" selected={query.sort == CatalogSort::NameAsc}>{ "名称 ↑" }</option>
                            <option value="name_desc" selected={query.sort == CatalogSort::NameDesc}>{ "名称 ↓" }</option>
                            <option value="price_asc" selected={query.sort == CatalogSort::PriceAsc}>{ "价格 ↑" }</option>
                            <option value="price_desc" selected={query.sort == CatalogSort::PriceDesc}>{ "价格 ↓" }</option>
                            <option value="stock_desc" selected={query.sort == CatalogSort::StockDesc}>{ "库存 ↓" }</option>
                        </select>
                    </div>
                    <p class="text-muted">{ format!("共 {} 个在线商品", page_data.total_items) }</p>
                    if page_data.items.is_empty() {
                        <p class="text-muted">{ "暂无可展示商品" }</p>
                    } else {
                        <div id="catalog-list">
                            { for page_data.items.iter().map(item_card) }
                        </div>
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
        <div class="card" data-testid="catalog-screen">
            <h2>{ "商品列表" }</h2>
            { body }
        </div>
    }
}
