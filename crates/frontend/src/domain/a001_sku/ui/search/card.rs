use crate::shared::components::ui::{Badge, Button};
use crate::shared::number_format::{
    format_pack_size, format_packs_per_case, format_price_per_pack, text_or_missing,
};
use contracts::domain::a001_sku::SkuSearchRow;
use leptos::prelude::*;

/// Карточка цены одного SKU
#[component]
pub fn SkuCard(row: SkuSearchRow) -> impl IntoView {
    let price_class = if row.dlp_per_pack.is_some() {
        "sku-card__price"
    } else {
        "sku-card__price sku-card__price--missing"
    };

    view! {
        <div class="sku-card">
            <div class="sku-card__main">
                <div class="sku-card__title">
                    {row.name.clone()}
                    " "
                    <span class="sku-card__code">"[" {row.sku_code.clone()} "]"</span>
                </div>
                <div class="sku-card__badges">
                    <Badge
                        variant="primary"
                        caption="Group"
                        text=text_or_missing(row.product_group.as_deref())
                    />
                    <Badge
                        variant="neutral"
                        caption="Viscosity"
                        text=text_or_missing(row.viscosity_spec.as_deref())
                    />
                </div>
                <div class="sku-card__meta">
                    "Pack size: " {format_pack_size(row.pack_size_ltr)}
                    " | Packs / case: " {format_packs_per_case(row.packs_per_case)}
                </div>
            </div>
            <div class=price_class>{format_price_per_pack(row.dlp_per_pack)}</div>
        </div>
    }
}

/// Заглушка карточки на время загрузки
#[component]
pub fn SkuCardSkeleton() -> impl IntoView {
    view! {
        <div class="sku-card sku-card--skeleton" aria-hidden="true">
            <div class="sku-card__main">
                <div class="skeleton skeleton--title"></div>
                <div class="skeleton skeleton--line"></div>
                <div class="skeleton skeleton--line skeleton--short"></div>
            </div>
            <div class="skeleton skeleton--price"></div>
        </div>
    }
}

/// Пустой результат: сбросить фильтры или подставить пример запроса
#[component]
pub fn SearchEmptyState(on_clear: Callback<()>, on_sample: Callback<()>) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p class="empty-state__title">"No results yet."</p>
            <p class="empty-state__hint">
                "Try a search above, clear the filters, or start from a sample query."
            </p>
            <div class="empty-state__actions">
                <Button variant="secondary" on_click=on_clear>
                    "Clear filters"
                </Button>
                <Button variant="ghost" on_click=on_sample>
                    "Try sample query"
                </Button>
            </div>
        </div>
    }
}
