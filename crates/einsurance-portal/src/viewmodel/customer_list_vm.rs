//! Customer List ViewModel
//!
//! Mediates between three mutually exclusive search modes and the
//! paginated default listing. Initiating any search installs it as the
//! active mode (last action wins) and discards the other filters' state;
//! page and size changes reload through whatever mode is active.

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::warn;

use einsurance_client::InsuranceApi;
use einsurance_core::{Customer, Page, PageSize};

use crate::events::AppEvent;

/// Status selector state: empty means "no filter selected" and must not
/// trigger a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Unset,
    Active,
    Inactive,
}

impl StatusFilter {
    fn as_bool(self) -> Option<bool> {
        match self {
            StatusFilter::Unset => None,
            StatusFilter::Active => Some(true),
            StatusFilter::Inactive => Some(false),
        }
    }
}

/// The search mode the page/size controls reload through.
#[derive(Debug, Clone, PartialEq)]
enum SearchMode {
    All,
    Name(String),
    Active(bool),
}

pub struct CustomerListViewModel {
    pub customers: Vec<Customer>,
    pub error: Option<String>,
    pub page: u32,
    pub size: PageSize,
    pub total_pages: u32,
    pub search_id: String,
    pub search_name: String,
    pub search_active: StatusFilter,
    pub is_loading: bool,
    mode: SearchMode,
    generation: u64,
    api: Arc<dyn InsuranceApi>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl CustomerListViewModel {
    pub fn new(api: Arc<dyn InsuranceApi>, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            customers: Vec::new(),
            error: None,
            page: 0,
            size: PageSize::default(),
            total_pages: 0,
            search_id: String::new(),
            search_name: String::new(),
            search_active: StatusFilter::default(),
            is_loading: false,
            mode: SearchMode::All,
            generation: 0,
            api,
            event_tx,
        }
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Load the current page through the active mode.
    pub fn load_page(&mut self) {
        let generation = self.next_generation();
        self.is_loading = true;

        let api = Arc::clone(&self.api);
        let tx = self.event_tx.clone();
        let mode = self.mode.clone();
        let page = self.page;
        let size = self.size;

        tokio::spawn(async move {
            let result = match mode {
                SearchMode::All => api.fetch_customers(page, size).await,
                SearchMode::Name(name) => api.search_by_name(&name, page, size).await,
                SearchMode::Active(active) => api.search_by_active(active, page, size).await,
            };
            let event = match result {
                Ok(page) => AppEvent::CustomersLoaded { generation, page },
                Err(e) => AppEvent::CustomersFailed {
                    generation,
                    message: e.to_string(),
                },
            };
            let _ = tx.send(event);
        });
    }

    /// One-shot id lookup. Success replaces the result set with a
    /// singleton page; failure leaves it untouched.
    pub fn search_by_id(&mut self) {
        let id = match self.search_id.trim().parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                self.error = Some("Search id must be a number".to_string());
                return;
            }
        };

        let generation = self.next_generation();
        self.is_loading = true;

        let api = Arc::clone(&self.api);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let event = match api.fetch_customer(id).await {
                Ok(customer) => AppEvent::CustomerFound {
                    generation,
                    customer,
                },
                Err(e) => AppEvent::CustomersFailed {
                    generation,
                    message: e.to_string(),
                },
            };
            let _ = tx.send(event);
        });
    }

    /// Paginated partial-match search; installs Name as the active mode.
    pub fn search_by_name(&mut self) {
        self.mode = SearchMode::Name(self.search_name.clone());
        self.page = 0;
        self.load_page();
    }

    /// Paginated status filter. An empty selection is a no-op.
    pub fn search_by_active_status(&mut self) {
        let Some(active) = self.search_active.as_bool() else {
            return;
        };
        self.mode = SearchMode::Active(active);
        self.page = 0;
        self.load_page();
    }

    /// Clear all search fields and reload the unfiltered first page at the
    /// current size.
    pub fn reset(&mut self) {
        self.search_id.clear();
        self.search_name.clear();
        self.search_active = StatusFilter::Unset;
        self.mode = SearchMode::All;
        self.page = 0;
        self.load_page();
    }

    /// Guarded page move: no-op when the target falls outside
    /// `[0, total_pages)`.
    pub fn change_page(&mut self, delta: i64) {
        let target = self.page as i64 + delta;
        if target < 0 || target >= self.total_pages as i64 {
            return;
        }
        self.page = target as u32;
        self.load_page();
    }

    /// Size change always resets to the first page before reloading.
    pub fn change_size(&mut self, size: PageSize) {
        self.size = size;
        self.page = 0;
        self.load_page();
    }

    pub fn page_indicator(&self) -> String {
        format!("Page {} of {}", self.page + 1, self.total_pages)
    }

    pub fn can_go_previous(&self) -> bool {
        self.page > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    pub fn on_customers_loaded(&mut self, generation: u64, page: Page<Customer>) {
        if generation != self.generation {
            warn!(generation, latest = self.generation, "discarding stale customer page");
            return;
        }
        self.is_loading = false;
        self.error = None;
        self.page = page.page;
        self.total_pages = page.total_pages;
        self.customers = page.content;
    }

    pub fn on_customer_found(&mut self, generation: u64, customer: Customer) {
        if generation != self.generation {
            return;
        }
        let page = Page::singleton(customer);
        self.is_loading = false;
        self.error = None;
        self.page = page.page;
        self.total_pages = page.total_pages;
        self.customers = page.content;
    }

    pub fn on_customers_failed(&mut self, generation: u64, message: String) {
        if generation != self.generation {
            return;
        }
        // Result set is deliberately left as it was.
        self.is_loading = false;
        self.error = Some(message);
    }
}
