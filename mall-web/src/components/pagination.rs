use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub page: usize,
    pub total_pages: usize,
    pub on_page: Callback<usize>,
}

/// Previous/next pager; the page label stays within `[1, total_pages]`
/// because the callers paginate through `mall_core::paginate`.
#[function_component(Pagination)]
pub fn pagination(p: &Props) -> Html {
    let prev = {
        let cb = p.on_page.clone();
        let page = p.page;
        Callback::from(move |_| cb.emit(page.saturating_sub(1).max(1)))
    };
    let next = {
        let cb = p.on_page.clone();
        let page = p.page;
        Callback::from(move |_| cb.emit(page + 1))
    };
    html! {
        <div class="row pagination">
            <button type="button" disabled={p.page <= 1} onclick={prev}>{ "上一页" }</button>
            <span class="text-muted">{ format!("第 {} / {} 页", p.page, p.total_pages) }</span>
            <button type="button" disabled={p.page >= p.total_pages} onclick={next}>{ "下一页" }</button>
        </div>
    }
}
