//! HTTP clients for the E-Insurance portal.
//!
//! Two external collaborators: the insurance backend REST API and the
//! card-payment processor. Both sit behind async traits so the view
//! models and their tests can swap the transport.

pub mod api;
pub mod auth;
pub mod error;
pub mod processor;

pub use api::{ClientSecret, HttpInsuranceApi, InsuranceApi, PaymentIntentRequest};
pub use auth::TokenStore;
pub use error::ClientError;
pub use processor::{CardDetails, PaymentMethodId, PaymentProcessor, StripeGateway};
