//! Domain layer for the E-Insurance customer portal.
//!
//! Entities, pagination, form state and payment math. No I/O lives here;
//! the HTTP clients are in `einsurance-client` and the view models in the
//! portal binary.

pub mod domain;
pub mod error;

pub use domain::customer::{City, Customer};
pub use domain::page::{Page, PageSize};
pub use domain::payment::{PaymentComputation, PaymentContext, PaymentType};
pub use domain::registration::{FieldErrors, FormField, RegistrationForm, CUSTOMER_ROLE};
pub use error::DomainError;
