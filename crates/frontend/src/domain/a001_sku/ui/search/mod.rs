pub mod card;
pub mod state;
pub mod view_model;

use self::card::{SearchEmptyState, SkuCard, SkuCardSkeleton};
use self::state::{ResultsView, SKELETON_CARD_COUNT};
use self::view_model::SkuSearchVm;
use crate::domain::a001_sku::api::SharedCatalogApi;
use crate::shared::components::ui::{Button, Input};
use leptos::prelude::*;

/// Площадка поиска SKU через RPC `search_skus`
#[component]
pub fn SkuSearchPlayground(api: SharedCatalogApi) -> impl IntoView {
    let vm = SkuSearchVm::new(api);

    let text = Signal::derive(move || vm.state.with(|s| s.filters.text.clone()));
    let group = Signal::derive(move || vm.state.with(|s| s.filters.group.clone()));
    let viscosity = Signal::derive(move || vm.state.with(|s| s.filters.viscosity.clone()));
    let loading = Signal::derive(move || vm.state.with(|s| s.loading));
    let error = Memo::new(move |_| vm.state.with(|s| s.error.clone()));
    let can_retry = Memo::new(move |_| vm.state.with(|s| s.can_retry()));
    let results_view = Memo::new(move |_| vm.state.with(|s| s.results_view()));
    let rows = Memo::new(move |_| vm.state.with(|s| s.rows.clone()));

    let on_search = Callback::new(move |_| vm.search_command());
    let on_retry = Callback::new(move |_| vm.retry_command());
    let on_clear = Callback::new(move |_| vm.reset_command());
    let on_sample = Callback::new(move |_| vm.sample_query_command());

    view! {
        <section class="playground">
            <div class="playground__panel">
                <h2 class="playground__title">"SKU Search Playground"</h2>
                <p class="playground__hint">
                    "Type a part of the name or code, and optionally filter by product group / viscosity. "
                    "Results come from the " <code>"search_skus"</code> " RPC."
                </p>

                <div class="playground__filters">
                    <Input
                        id="sku-search-text"
                        label="Search text (name / code)"
                        value=text
                        on_input=Callback::new(move |v| vm.set_text(v))
                        placeholder="e.g. MAK 4T STAR"
                    />
                    <Input
                        id="sku-search-group"
                        label="Product group (optional)"
                        value=group
                        on_input=Callback::new(move |v| vm.set_group(v))
                        placeholder="e.g. TWO WHEELER 4 STROKE"
                    />
                    <Input
                        id="sku-search-viscosity"
                        label="Viscosity (optional)"
                        value=viscosity
                        on_input=Callback::new(move |v| vm.set_viscosity(v))
                        placeholder="e.g. 10W30"
                    />
                </div>

                <div class="playground__actions">
                    <Button on_click=on_search disabled=loading>
                        {move || if loading.get() { "Searching…" } else { "Run search" }}
                    </Button>
                    <Button variant="ghost" on_click=on_clear>
                        "Reset"
                    </Button>
                </div>

                {move || error.get().map(|message| view! {
                    <div class="playground__error">
                        <span>"Error from Supabase: " {message}</span>
                        <Show when=move || can_retry.get()>
                            <Button variant="secondary" on_click=on_retry>
                                "Retry"
                            </Button>
                        </Show>
                    </div>
                })}

                <div class="playground__results">
                    <h3 class="playground__results-title">
                        {move || format!("Results ({})", rows.with(Vec::len))}
                    </h3>

                    {move || match results_view.get() {
                        ResultsView::Skeleton => (0..SKELETON_CARD_COUNT)
                            .map(|_| view! { <SkuCardSkeleton /> })
                            .collect_view()
                            .into_any(),
                        ResultsView::Empty => view! {
                            <SearchEmptyState on_clear=on_clear on_sample=on_sample />
                        }
                        .into_any(),
                        ResultsView::Rows => view! {
                            <div class="playground__cards">
                                <For
                                    each=move || rows.get()
                                    key=|row| row.id.clone()
                                    children=move |row| view! { <SkuCard row=row /> }
                                />
                            </div>
                        }
                        .into_any(),
                    }}
                </div>
            </div>
        </section>
    }
}
