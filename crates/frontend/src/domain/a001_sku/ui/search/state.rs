use contracts::domain::a001_sku::{SkuSearchFilters, SkuSearchParams, SkuSearchRow};

/// Количество карточек-заглушек во время загрузки
pub const SKELETON_CARD_COUNT: usize = 6;

/// Текст ошибки, если удалённая сторона не прислала сообщения
pub const SEARCH_FAILED_TEXT: &str = "Search failed";

/// Что показывать в блоке результатов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsView {
    Skeleton,
    Empty,
    Rows,
}

/// Выданный запрос: токен + точные параметры, ушедшие на сервер
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub token: u64,
    pub params: SkuSearchParams,
}

/// Состояние поиска SKU без привязки к реактивности
///
/// Ответ применяется, только если его токен совпадает с последним выданным.
/// Ошибка не трогает прежние строки.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub filters: SkuSearchFilters,
    pub loading: bool,
    pub rows: Vec<SkuSearchRow>,
    pub error: Option<String>,
    latest_token: u64,
    last_params: Option<SkuSearchParams>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            filters: SkuSearchFilters::with_sample_query(),
            loading: false,
            rows: Vec::new(),
            error: None,
            latest_token: 0,
            last_params: None,
        }
    }
}

impl SearchState {
    /// Новый поиск по текущим фильтрам
    pub fn begin_search(&mut self) -> SearchTicket {
        let params = SkuSearchParams::from_filters(&self.filters);
        self.issue(params)
    }

    /// Повтор последнего выданного запроса с теми же параметрами
    pub fn retry(&mut self) -> Option<SearchTicket> {
        let params = self.last_params.clone()?;
        Some(self.issue(params))
    }

    fn issue(&mut self, params: SkuSearchParams) -> SearchTicket {
        self.latest_token += 1;
        self.last_params = Some(params.clone());
        self.loading = true;
        self.error = None;
        SearchTicket {
            token: self.latest_token,
            params,
        }
    }

    /// Применить ответ. Возвращает false, если ответ устарел и отброшен.
    pub fn complete(&mut self, token: u64, result: Result<Vec<SkuSearchRow>, String>) -> bool {
        if token != self.latest_token {
            return false;
        }

        self.loading = false;
        match result {
            Ok(rows) => {
                self.rows = rows;
                self.error = None;
            }
            Err(message) => {
                let message = if message.trim().is_empty() {
                    SEARCH_FAILED_TEXT.to_string()
                } else {
                    message
                };
                self.error = Some(message);
            }
        }
        true
    }

    /// Сброс фильтров и результатов. Запрос в полёте после сброса игнорируется.
    pub fn reset(&mut self) {
        self.filters.clear();
        self.rows.clear();
        self.error = None;
        self.loading = false;
        self.last_params = None;
        self.latest_token += 1;
    }

    pub fn use_sample_query(&mut self) {
        self.filters.text = contracts::domain::a001_sku::SAMPLE_QUERY.to_string();
    }

    pub fn can_retry(&self) -> bool {
        self.error.is_some() && self.last_params.is_some()
    }

    pub fn results_view(&self) -> ResultsView {
        if self.loading {
            ResultsView::Skeleton
        } else if self.error.is_none() && self.rows.is_empty() {
            ResultsView::Empty
        } else {
            ResultsView::Rows
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_sku::SEARCH_LIMIT_ROWS;

    fn row(id: &str) -> SkuSearchRow {
        SkuSearchRow {
            id: id.to_string(),
            sku_code: format!("C-{}", id),
            name: format!("Oil {}", id),
            product_group: None,
            viscosity_spec: None,
            pack_size_ltr: None,
            packs_per_case: None,
            dlp_per_pack: None,
        }
    }

    #[test]
    fn test_initial_state_shows_empty_panel_with_sample_text() {
        let state = SearchState::default();
        assert_eq!(state.filters.text, "Mak");
        assert_eq!(state.results_view(), ResultsView::Empty);
        assert!(!state.can_retry());
    }

    #[test]
    fn test_begin_search_normalizes_filters() {
        let mut state = SearchState::default();
        state.filters.text = "   ".into();
        state.filters.group = " TWO WHEELER ".into();
        let ticket = state.begin_search();

        assert_eq!(ticket.params.q, None);
        assert_eq!(ticket.params.grp.as_deref(), Some("TWO WHEELER"));
        assert_eq!(ticket.params.visc, None);
        assert_eq!(ticket.params.limit_rows, SEARCH_LIMIT_ROWS);
        assert!(state.loading);
        assert_eq!(state.results_view(), ResultsView::Skeleton);
    }

    #[test]
    fn test_success_replaces_rows_and_clears_error() {
        let mut state = SearchState::default();
        let first = state.begin_search();
        state.complete(first.token, Err("timeout".into()));
        assert_eq!(state.error.as_deref(), Some("timeout"));

        let second = state.begin_search();
        assert_eq!(state.error, None);
        assert!(state.complete(second.token, Ok(vec![row("1"), row("2")])));
        assert_eq!(state.rows.len(), 2);
        assert_eq!(state.error, None);
        assert!(!state.loading);
        assert_eq!(state.results_view(), ResultsView::Rows);
    }

    #[test]
    fn test_empty_response_shows_empty_panel() {
        let mut state = SearchState::default();
        let ticket = state.begin_search();
        state.complete(ticket.token, Ok(vec![row("old")]));

        let ticket = state.begin_search();
        state.complete(ticket.token, Ok(vec![]));
        assert!(state.rows.is_empty());
        assert_eq!(state.results_view(), ResultsView::Empty);
    }

    #[test]
    fn test_rows_persist_while_loading_and_on_error() {
        let mut state = SearchState::default();
        let ticket = state.begin_search();
        state.complete(ticket.token, Ok(vec![row("1")]));

        let ticket = state.begin_search();
        assert_eq!(state.rows, vec![row("1")]);

        state.complete(ticket.token, Err("connection reset".into()));
        assert_eq!(state.rows, vec![row("1")]);
        assert_eq!(state.error.as_deref(), Some("connection reset"));
        assert!(state.can_retry());
        assert_eq!(state.results_view(), ResultsView::Rows);
    }

    #[test]
    fn test_error_without_rows_is_not_empty_panel() {
        let mut state = SearchState::default();
        let ticket = state.begin_search();
        state.complete(ticket.token, Err("boom".into()));
        assert_eq!(state.results_view(), ResultsView::Rows);
    }

    #[test]
    fn test_blank_error_message_gets_placeholder() {
        let mut state = SearchState::default();
        let ticket = state.begin_search();
        state.complete(ticket.token, Err(" ".into()));
        assert_eq!(state.error.as_deref(), Some(SEARCH_FAILED_TEXT));
    }

    #[test]
    fn test_retry_reissues_identical_request() {
        let mut state = SearchState::default();
        state.filters.text = "MAK 4T".into();
        state.filters.viscosity = "10W30".into();
        let original = state.begin_search();
        state.complete(original.token, Err("network error".into()));

        // Пользователь успел поменять фильтры: повтор всё равно с прежними параметрами
        state.filters.text = "something else".into();
        let retried = state.retry().unwrap();
        assert_eq!(retried.params, original.params);
        assert!(retried.token > original.token);
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_retry_without_prior_request() {
        let mut state = SearchState::default();
        assert_eq!(state.retry(), None);
        assert!(!state.loading);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = SearchState::default();
        let slow = state.begin_search();
        let fast = state.begin_search();

        assert!(state.complete(fast.token, Ok(vec![row("new")])));
        assert!(!state.complete(slow.token, Ok(vec![row("old")])));
        assert_eq!(state.rows, vec![row("new")]);
        assert!(!state.loading);
    }

    #[test]
    fn test_stale_failure_does_not_clear_loading() {
        let mut state = SearchState::default();
        let slow = state.begin_search();
        let _fast = state.begin_search();

        assert!(!state.complete(slow.token, Err("late failure".into())));
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = SearchState::default();
        state.filters.group = "GEAR OIL".into();
        state.filters.viscosity = "80W90".into();
        let ticket = state.begin_search();
        state.complete(ticket.token, Ok(vec![row("1")]));
        let ticket = state.begin_search();
        state.complete(ticket.token, Err("boom".into()));

        state.reset();
        assert_eq!(state.filters, SkuSearchFilters::default());
        assert!(state.rows.is_empty());
        assert_eq!(state.error, None);
        assert!(!state.loading);
        assert_eq!(state.results_view(), ResultsView::Empty);
    }

    #[test]
    fn test_reset_discards_in_flight_response() {
        let mut state = SearchState::default();
        let ticket = state.begin_search();
        state.reset();
        assert!(!state.complete(ticket.token, Ok(vec![row("1")])));
        assert!(state.rows.is_empty());
    }

    #[test]
    fn test_sample_query_does_not_search() {
        let mut state = SearchState::default();
        state.reset();
        state.use_sample_query();
        assert_eq!(state.filters.text, "Mak");
        assert!(!state.loading);
    }
}
