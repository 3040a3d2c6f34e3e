//! Application Events
//!
//! Event enum for async → UI-thread communication. Variants that answer a
//! network call carry the generation they were issued with; a view model
//! applies them only when the generation still matches its latest request,
//! so a slow response can never overwrite a newer one.

use einsurance_core::{City, Customer, Page};

/// Events sent from background tasks to the UI thread
#[derive(Debug)]
pub enum AppEvent {
    /// Customer page loaded (default listing or an active search mode)
    CustomersLoaded { generation: u64, page: Page<Customer> },
    /// Customer page load or id lookup failed with a page-level message
    CustomersFailed { generation: u64, message: String },
    /// Single customer found by id
    CustomerFound { generation: u64, customer: Customer },
    /// City reference list loaded for the registration selector
    CitiesLoaded(Vec<City>),
    /// City fetch failed; the selector stays empty, no retry
    CitiesFailed(String),
    /// Registration submission finished with the backend's real outcome
    RegistrationFinished {
        generation: u64,
        result: Result<(), String>,
    },
    /// Current payment tax rate (percent) arrived
    TaxRateLoaded { generation: u64, rate: f64 },
    /// Tax rate fetch failed
    TaxRateFailed { generation: u64, message: String },
    /// Two-phase payment confirmed by the processor
    PaymentSucceeded { generation: u64 },
    /// Payment attempt failed (tokenization, intent creation or confirm)
    PaymentFailed { generation: u64, message: String },
}
