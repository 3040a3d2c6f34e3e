//! Card-payment processor
//!
//! Opaque external collaborator: it owns card-data capture and exposes
//! tokenize/confirm operations keyed by a publishable key and a
//! server-issued client secret. Card details never touch this system's
//! own storage.

mod stripe;

pub use stripe::StripeGateway;

use async_trait::async_trait;

use crate::error::ClientError;

/// Raw card input handed straight to the processor.
#[derive(Debug, Clone)]
pub struct CardDetails {
    pub number: String,
    pub exp_month: u8,
    pub exp_year: u16,
    pub cvc: String,
}

/// Opaque, single-use payment-method reference issued by the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentMethodId(pub String);

#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Convert raw card details into a payment-method reference. Failure
    /// carries the processor's message verbatim.
    async fn tokenize(&self, card: &CardDetails) -> Result<PaymentMethodId, ClientError>;

    /// Confirm a previously created intent using its client secret.
    async fn confirm(
        &self,
        client_secret: &str,
        method: &PaymentMethodId,
    ) -> Result<(), ClientError>;
}
