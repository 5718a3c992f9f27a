use leptos::prelude::*;

/// Text input with label
#[component]
pub fn Input(
    /// Label text
    #[prop(into)]
    label: String,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new value on every keystroke
    on_input: Callback<String>,
    /// Placeholder text
    #[prop(optional)]
    placeholder: &'static str,
    /// ID for the input element
    id: &'static str,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id>
                {label}
            </label>
            <input
                id=id
                class="form__input"
                type="text"
                prop:value=move || value.get()
                placeholder=placeholder
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
