//! Paginated Recipe Feed
//!
//! `refresh` replaces the list from offset zero; `load_more` appends the next
//! page and is a no-op while a load is running or once the server reports
//! there is nothing more.

use super::{LoadOutcome, StateCell};
use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::models::{Page, Recipe, RecipeFilters};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    Replace,
    Append,
}

/// Which page to fetch and how to merge it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub generation: u64,
    pub mode: PageMode,
    pub skip: u32,
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T> {
    items: Vec<T>,
    total: u64,
    has_more: bool,
    loading: bool,
    error: Option<String>,
    generation: u64,
    limit: u32,
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            has_more: false,
            loading: false,
            error: None,
            generation: 0,
            limit: crate::config::DEFAULT_PAGE_LIMIT,
        }
    }
}

impl<T> PagedList<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Position the next page starts at
    pub fn offset(&self) -> u32 {
        u32::try_from(self.items.len()).unwrap_or(u32::MAX)
    }

    /// Begin reloading from offset zero. Supersedes any load in flight.
    pub fn begin_reload(&mut self, limit: u32) -> PageRequest {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.limit = limit;
        PageRequest {
            generation: self.generation,
            mode: PageMode::Replace,
            skip: 0,
            limit,
        }
    }

    /// Begin fetching the next page, unless one is pointless or already running
    pub fn begin_next_page(&mut self) -> Option<PageRequest> {
        if !self.has_more || self.loading {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(PageRequest {
            generation: self.generation,
            mode: PageMode::Append,
            skip: self.offset(),
            limit: self.limit,
        })
    }

    pub fn settle(&mut self, request: &PageRequest, result: ApiResult<Page<T>>) -> LoadOutcome {
        if request.generation != self.generation {
            log::debug!("[FEED] Dropping stale page (gen {} < {})", request.generation, self.generation);
            return LoadOutcome::Discarded;
        }
        self.loading = false;

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                self.error = Some(e.to_string());
                return LoadOutcome::Applied;
            }
        };

        let received = page.items.len();
        match request.mode {
            PageMode::Replace => self.items = page.items,
            PageMode::Append => self.items.extend(page.items),
        }
        self.total = page.total;
        // An empty follow-up page means the server miscounted; stop paging.
        self.has_more = page.has_more && !(request.mode == PageMode::Append && received == 0);
        LoadOutcome::Applied
    }
}

/// Reload the feed for `filters` from the first page
pub async fn refresh<C>(cell: &C, api: &ApiClient, filters: &RecipeFilters) -> LoadOutcome
where
    C: StateCell<PagedList<Recipe>>,
{
    let Some(request) = cell.update_with(|s| s.begin_reload(filters.page_limit())) else {
        return LoadOutcome::Skipped;
    };
    fetch(cell, api, filters, request).await
}

/// Append the next page for `filters`; `Skipped` means no request was sent
pub async fn load_more<C>(cell: &C, api: &ApiClient, filters: &RecipeFilters) -> LoadOutcome
where
    C: StateCell<PagedList<Recipe>>,
{
    let Some(request) = cell.update_with(PagedList::begin_next_page).flatten() else {
        return LoadOutcome::Skipped;
    };
    fetch(cell, api, filters, request).await
}

async fn fetch<C>(cell: &C, api: &ApiClient, filters: &RecipeFilters, request: PageRequest) -> LoadOutcome
where
    C: StateCell<PagedList<Recipe>>,
{
    let result = api.list_recipes(&filters.at(request.skip, request.limit)).await;
    cell.update_with(|s| s.settle(&request, result))
        .unwrap_or(LoadOutcome::Discarded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::test_support::*;
    use std::cell::RefCell;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn page(ids: std::ops::Range<u64>, total: u64, has_more: bool) -> Page<Recipe> {
        Page {
            items: recipes(ids),
            total,
            skip: 0,
            limit: 20,
            has_more,
        }
    }

    #[test]
    fn test_load_more_is_noop_without_more_pages() {
        let mut list = PagedList::<Recipe>::default();
        let request = list.begin_reload(20);
        list.settle(&request, Ok(page(0..5, 5, false)));

        assert_eq!(list.begin_next_page(), None);
        assert!(!list.is_loading());
    }

    #[test]
    fn test_load_more_is_noop_while_loading() {
        let mut list = PagedList::<Recipe>::default();
        let request = list.begin_reload(20);
        list.settle(&request, Ok(page(0..20, 60, true)));

        assert!(list.begin_next_page().is_some());
        assert_eq!(list.begin_next_page(), None);
    }

    #[test]
    fn test_refresh_replaces_contents() {
        let mut list = PagedList::<Recipe>::default();
        let first = list.begin_reload(20);
        list.settle(&first, Ok(page(0..20, 40, true)));
        let next = list.begin_next_page().unwrap();
        list.settle(&next, Ok(page(20..40, 40, false)));
        assert_eq!(list.items().len(), 40);

        let again = list.begin_reload(20);
        list.settle(&again, Ok(page(100..103, 3, false)));
        let ids: Vec<u64> = list.items().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![100, 101, 102]);
        assert_eq!(list.total(), 3);
    }

    #[test]
    fn test_error_keeps_items_and_reports_message() {
        let mut list = PagedList::<Recipe>::default();
        let first = list.begin_reload(20);
        list.settle(&first, Ok(page(0..20, 40, true)));

        let next = list.begin_next_page().unwrap();
        list.settle(&next, Err(ApiError::Network));
        assert_eq!(list.items().len(), 20);
        assert!(list.has_more());
        assert!(!list.is_loading());
        assert!(list.error().is_some());
    }

    #[test]
    fn test_reload_supersedes_pending_page() {
        let mut list = PagedList::<Recipe>::default();
        let first = list.begin_reload(20);
        list.settle(&first, Ok(page(0..20, 40, true)));

        let next = list.begin_next_page().unwrap();
        let reload = list.begin_reload(20);
        assert_eq!(list.settle(&next, Ok(page(20..40, 40, false))), LoadOutcome::Discarded);
        assert_eq!(list.settle(&reload, Ok(page(0..20, 40, true))), LoadOutcome::Applied);
        assert_eq!(list.items().len(), 20);
    }

    #[test]
    fn test_empty_follow_up_page_stops_paging() {
        let mut list = PagedList::<Recipe>::default();
        let first = list.begin_reload(20);
        list.settle(&first, Ok(page(0..20, 40, true)));
        let next = list.begin_next_page().unwrap();
        list.settle(&next, Ok(page(0..0, 40, true)));
        assert!(!list.has_more());
    }

    #[tokio::test]
    async fn test_dessert_feed_second_page_appends() {
        let server = MockServer::start().await;
        let (api, _) = client_for(&server);

        Mock::given(method("GET"))
            .and(path("/recipes"))
            .and(query_param("category", "dessert"))
            .and(query_param("limit", "20"))
            .and(query_param_is_missing("skip"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(0..20, 45, 0, 20, true)))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/recipes"))
            .and(query_param("category", "dessert"))
            .and(query_param("skip", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(20..40, 45, 20, 20, true)))
            .expect(1)
            .mount(&server)
            .await;

        let filters = RecipeFilters::category("dessert").with_limit(20);
        let cell = RefCell::new(PagedList::default());

        assert_eq!(refresh(&cell, &api, &filters).await, LoadOutcome::Applied);
        assert_eq!(cell.borrow().items().len(), 20);
        assert_eq!(cell.borrow().offset(), 20);
        assert!(cell.borrow().has_more());

        assert_eq!(load_more(&cell, &api, &filters).await, LoadOutcome::Applied);
        assert_eq!(cell.borrow().items().len(), 40);
        assert_eq!(cell.borrow().offset(), 40);
        assert_eq!(cell.borrow().items()[39].id, 39);
    }

    #[tokio::test]
    async fn test_load_more_sends_nothing_when_exhausted() {
        let server = MockServer::start().await;
        let (api, _) = client_for(&server);

        Mock::given(method("GET"))
            .and(path("/recipes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(0..3, 3, 0, 12, false)))
            .expect(1)
            .mount(&server)
            .await;

        let filters = RecipeFilters::default();
        let cell = RefCell::new(PagedList::default());
        refresh(&cell, &api, &filters).await;

        assert_eq!(load_more(&cell, &api, &filters).await, LoadOutcome::Skipped);
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_slow_superseded_response_is_dropped() {
        let server = MockServer::start().await;
        let (api, _) = client_for(&server);

        Mock::given(method("GET"))
            .and(path("/recipes"))
            .and(query_param("search", "slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(page_json(0..5, 5, 0, 12, false))
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/recipes"))
            .and(query_param("search", "fast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(50..52, 2, 0, 12, false)))
            .mount(&server)
            .await;

        let cell = RefCell::new(PagedList::default());
        let slow = RecipeFilters::search("slow");
        let fast = RecipeFilters::search("fast");

        let (first, second) = tokio::join!(refresh(&cell, &api, &slow), async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            refresh(&cell, &api, &fast).await
        });

        assert_eq!(first, LoadOutcome::Discarded);
        assert_eq!(second, LoadOutcome::Applied);
        let ids: Vec<u64> = cell.borrow().items().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![50, 51]);
        assert!(!cell.borrow().is_loading());
    }
}
