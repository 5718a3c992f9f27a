use serde::{Deserialize, Serialize};

/// Жёсткий лимит строк для RPC `search_skus`
pub const SEARCH_LIMIT_ROWS: u32 = 20;

/// Пример запроса для пустого состояния и начального значения поиска
pub const SAMPLE_QUERY: &str = "Mak";

// ============================================================================
// Rows
// ============================================================================

/// Строка результата RPC `search_skus`
///
/// `dlp_per_pack = None` означает "цена не задана", а не ноль.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuSearchRow {
    pub id: String,
    pub sku_code: String,
    pub name: String,
    #[serde(default)]
    pub product_group: Option<String>,
    #[serde(default)]
    pub viscosity_spec: Option<String>,
    #[serde(default)]
    pub pack_size_ltr: Option<f64>,
    #[serde(default)]
    pub packs_per_case: Option<i64>,
    #[serde(default)]
    pub dlp_per_pack: Option<f64>,
}

/// Проекция `select=id,name` для проверки подключения
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuProbeRow {
    pub id: String,
    pub name: String,
}

// ============================================================================
// Search request
// ============================================================================

/// Фильтры в том виде, в котором их ввёл пользователь
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkuSearchFilters {
    pub text: String,
    pub group: String,
    pub viscosity: String,
}

impl SkuSearchFilters {
    pub fn with_sample_query() -> Self {
        Self {
            text: SAMPLE_QUERY.to_string(),
            ..Self::default()
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.group.clear();
        self.viscosity.clear();
    }
}

/// Параметры RPC `search_skus`
///
/// Отсутствующие фильтры сериализуются как явный `null`:
/// процедура получает все четыре именованных параметра.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuSearchParams {
    pub q: Option<String>,
    pub grp: Option<String>,
    pub visc: Option<String>,
    pub limit_rows: u32,
}

impl SkuSearchParams {
    pub fn from_filters(filters: &SkuSearchFilters) -> Self {
        Self {
            q: normalize_filter(&filters.text),
            grp: normalize_filter(&filters.group),
            visc: normalize_filter(&filters.viscosity),
            limit_rows: SEARCH_LIMIT_ROWS,
        }
    }

    /// Повторная нормализация входящего запроса (trim + фиксированный лимит)
    pub fn normalized(self) -> Self {
        Self {
            q: self.q.as_deref().and_then(normalize_filter),
            grp: self.grp.as_deref().and_then(normalize_filter),
            visc: self.visc.as_deref().and_then(normalize_filter),
            limit_rows: SEARCH_LIMIT_ROWS,
        }
    }
}

impl Default for SkuSearchParams {
    fn default() -> Self {
        Self::from_filters(&SkuSearchFilters::default())
    }
}

/// Пустая строка или одни пробелы = параметр не передан
fn normalize_filter(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_filters_become_absent() {
        let filters = SkuSearchFilters {
            text: "   ".into(),
            group: String::new(),
            viscosity: "\t\n".into(),
        };
        let params = SkuSearchParams::from_filters(&filters);
        assert_eq!(params.q, None);
        assert_eq!(params.grp, None);
        assert_eq!(params.visc, None);
        assert_eq!(params, SkuSearchParams::default());
    }

    #[test]
    fn test_filters_are_trimmed() {
        let filters = SkuSearchFilters {
            text: "  MAK 4T STAR ".into(),
            group: " TWO WHEELER 4 STROKE".into(),
            viscosity: "10W30 ".into(),
        };
        let params = SkuSearchParams::from_filters(&filters);
        assert_eq!(params.q.as_deref(), Some("MAK 4T STAR"));
        assert_eq!(params.grp.as_deref(), Some("TWO WHEELER 4 STROKE"));
        assert_eq!(params.visc.as_deref(), Some("10W30"));
    }

    #[test]
    fn test_limit_is_always_twenty() {
        let long_text = "x".repeat(500);
        let filters = SkuSearchFilters {
            text: long_text,
            ..Default::default()
        };
        assert_eq!(SkuSearchParams::from_filters(&filters).limit_rows, 20);

        let tampered = SkuSearchParams {
            q: Some(" oil ".into()),
            grp: Some("  ".into()),
            visc: None,
            limit_rows: 10_000,
        }
        .normalized();
        assert_eq!(tampered.limit_rows, SEARCH_LIMIT_ROWS);
        assert_eq!(tampered.q.as_deref(), Some("oil"));
        assert_eq!(tampered.grp, None);
    }

    #[test]
    fn test_params_serialize_explicit_nulls() {
        let params = SkuSearchParams::from_filters(&SkuSearchFilters {
            text: "Mak".into(),
            ..Default::default()
        });
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"q": "Mak", "grp": null, "visc": null, "limit_rows": 20})
        );
    }

    #[test]
    fn test_row_with_nulls_deserializes() {
        let row: SkuSearchRow = serde_json::from_value(serde_json::json!({
            "id": "7f1c",
            "sku_code": "MK4T-1L",
            "name": "MAK 4T STAR",
            "product_group": null,
            "viscosity_spec": "10W30",
            "pack_size_ltr": 0.9,
            "packs_per_case": null,
            "dlp_per_pack": null
        }))
        .unwrap();
        assert_eq!(row.product_group, None);
        assert_eq!(row.viscosity_spec.as_deref(), Some("10W30"));
        assert_eq!(row.pack_size_ltr, Some(0.9));
        assert_eq!(row.dlp_per_pack, None);
    }

    #[test]
    fn test_clear_filters() {
        let mut filters = SkuSearchFilters {
            text: "a".into(),
            group: "b".into(),
            viscosity: "c".into(),
        };
        filters.clear();
        assert_eq!(filters, SkuSearchFilters::default());
        assert_eq!(SkuSearchFilters::with_sample_query().text, SAMPLE_QUERY);
    }
}
