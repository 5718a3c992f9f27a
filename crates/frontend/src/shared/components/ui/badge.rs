use leptos::prelude::*;

/// Badge component
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional)]
    variant: &'static str,
    /// Caption shown before the value, e.g. "Group"
    #[prop(optional)]
    caption: &'static str,
    /// Badge text
    #[prop(into)]
    text: String,
) -> impl IntoView {
    let variant_class = match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=format!("badge {}", variant_class)>
            {(!caption.is_empty()).then(|| view! { <span class="badge__caption">{caption}": "</span> })}
            {text}
        </span>
    }
}
