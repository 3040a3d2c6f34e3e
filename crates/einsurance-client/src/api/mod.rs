//! Insurance backend API
//!
//! Trait seam over the backend REST endpoints plus the request/response
//! DTOs that cross the wire.

mod http;

pub use http::HttpInsuranceApi;

use async_trait::async_trait;
use einsurance_core::{City, Customer, Page, PageSize, PaymentType, RegistrationForm};
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Payment-intent creation body. All monetary fields are integer units;
/// one rounding policy applies to all of them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentRequest {
    pub amount: i64,
    pub payment_method_id: String,
    pub policy_id: i64,
    pub payment_type: PaymentType,
    pub tax: i64,
    pub total_payment: i64,
}

/// Server-issued handle for confirming an intent with the processor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSecret {
    pub client_secret: String,
}

/// The backend REST API as this client consumes it. The exact contract is
/// owned by the backend; this trait is the seam view models and tests
/// program against.
#[async_trait]
pub trait InsuranceApi: Send + Sync {
    /// `GET /customers?page&size` — one page of the unfiltered listing.
    async fn fetch_customers(&self, page: u32, size: PageSize)
        -> Result<Page<Customer>, ClientError>;

    /// `GET /customers/{id}` — a single customer; 404 maps to `NotFound`.
    async fn fetch_customer(&self, id: i64) -> Result<Customer, ClientError>;

    /// `GET /customers/search?name&page&size` — paginated partial match.
    async fn search_by_name(
        &self,
        name: &str,
        page: u32,
        size: PageSize,
    ) -> Result<Page<Customer>, ClientError>;

    /// `GET /customers/search?active&page&size` — paginated status filter.
    async fn search_by_active(
        &self,
        active: bool,
        page: u32,
        size: PageSize,
    ) -> Result<Page<Customer>, ClientError>;

    /// `GET /cities` — reference data for the registration selector.
    async fn fetch_cities(&self) -> Result<Vec<City>, ClientError>;

    /// `POST /auth/register` — submit a completed registration form.
    async fn register(&self, form: &RegistrationForm) -> Result<(), ClientError>;

    /// `GET /payment-tax` — current tax rate in percent.
    async fn fetch_payment_tax(&self) -> Result<f64, ClientError>;

    /// `POST /customer/create-payment-intent` — bearer-authenticated.
    async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
        bearer: &str,
    ) -> Result<ClientSecret, ClientError>;
}
