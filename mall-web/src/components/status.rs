use mall_core::ApiError;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LoadingProps {
    #[prop_or(AttrValue::Static("加载中..."))]
    pub label: AttrValue,
}

#[function_component(LoadingHint)]
pub fn loading_hint(p: &LoadingProps) -> Html {
    html! { <p class="text-muted">{ p.label.clone() }</p> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ErrorProps {
    pub error: ApiError,
    /// Shown only for transient failures; terminal errors get a fixed message.
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Inline failure line. Backend-supplied messages surface verbatim; a retry
/// button appears only when the failure is classified transient.
#[function_component(ErrorNotice)]
pub fn error_notice(p: &ErrorProps) -> Html {
    let retry = p.on_retry.clone().filter(|_| p.error.is_transient());
    html! {
        <p class="text-danger">
            { format!("{} ({})", p.error.message, p.error.code) }
            if let Some(cb) = retry {
                <button type="button" class="retry" onclick={Callback::from(move |_| cb.emit(()))}>
                    { "重试" }
                </button>
            }
        </p>
    }
}
