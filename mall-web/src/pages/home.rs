use yew::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="card" data-testid="home-screen">
            <h2>{ "欢迎来到 Meridian Mall" }</h2>
            <p class="text-muted">
                { "单页商城客户端：路由、登录态、接口封装与权限守卫均已就绪。" }
            </p>
            <ul>
                <li>{ "商品页已接入 " }<code>{ "/api/v1/products" }</code></li>
                <li>{ "未登录访问 " }<code>{ "/account" }</code>{ " 会跳转到登录页" }</li>
                <li>{ "非 admin 用户访问 " }<code>{ "/admin" }</code>{ " 会跳转到账号页" }</li>
                <li>{ "登录成功后会话会持久化到 localStorage" }</li>
            </ul>
        </div>
    }
}
