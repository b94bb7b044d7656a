use yew::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="card" data-testid="not-found-screen">
            <h2>{ "页面不存在" }</h2>
            <p class="text-muted">{ "请从导航返回到可用页面。" }</p>
        </div>
    }
}
