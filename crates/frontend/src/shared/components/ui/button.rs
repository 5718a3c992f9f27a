use leptos::prelude::*;

/// Button component with variants (primary, secondary, ghost)
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "secondary", or "ghost"
    #[prop(optional)]
    variant: &'static str,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click handler
    on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    let variant_class = match variant {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };

    view! {
        <button
            type="button"
            class=format!("button {}", variant_class)
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}
