//! Payment ViewModel
//!
//! Drives the payment page: derive the breakdown from the fetched tax
//! rate, then run the two-phase confirmation — tokenize the card with the
//! processor, create an intent on the backend, confirm the intent with
//! the processor. The first failing step short-circuits the attempt;
//! resubmission is manual.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

use einsurance_client::{
    CardDetails, ClientError, InsuranceApi, PaymentIntentRequest, PaymentProcessor, TokenStore,
};
use einsurance_core::{PaymentComputation, PaymentContext, PaymentType};

use crate::events::AppEvent;

/// How long the success acknowledgment stays up before the app navigates
/// back to the landing view.
pub const SUCCESS_REDIRECT_DELAY: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq)]
pub enum PaymentPhase {
    /// Waiting for the tax rate.
    Idle,
    /// Breakdown derived; card details may be submitted.
    Computed,
    /// Tokenize/intent/confirm pipeline in flight.
    Submitting,
    /// Confirmed by the processor.
    Success,
    /// Attempt failed; the message is shown and resubmission is allowed.
    Error(String),
}

pub struct PaymentViewModel {
    pub context: PaymentContext,
    pub computation: Option<PaymentComputation>,
    pub payment_type: PaymentType,
    pub phase: PaymentPhase,
    generation: u64,
    api: Arc<dyn InsuranceApi>,
    processor: Arc<dyn PaymentProcessor>,
    tokens: Arc<TokenStore>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl PaymentViewModel {
    pub fn new(
        context: PaymentContext,
        api: Arc<dyn InsuranceApi>,
        processor: Arc<dyn PaymentProcessor>,
        tokens: Arc<TokenStore>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            context,
            computation: None,
            payment_type: PaymentType::default(),
            phase: PaymentPhase::Idle,
            generation: 0,
            api,
            processor,
            tokens,
            event_tx,
        }
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Fetch the current tax rate; called once when the page mounts.
    pub fn start(&mut self) {
        let generation = self.next_generation();
        let api = Arc::clone(&self.api);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let event = match api.fetch_payment_tax().await {
                Ok(rate) => AppEvent::TaxRateLoaded { generation, rate },
                Err(e) => AppEvent::TaxRateFailed {
                    generation,
                    message: e.to_string(),
                },
            };
            let _ = tx.send(event);
        });
    }

    pub fn set_payment_type(&mut self, payment_type: PaymentType) {
        self.payment_type = payment_type;
    }

    /// Run the two-phase payment. No-op unless the breakdown is computed
    /// and no attempt is already in flight.
    pub fn submit(&mut self, card: CardDetails) {
        let Some(computation) = self.computation else {
            return;
        };
        if !matches!(self.phase, PaymentPhase::Computed | PaymentPhase::Error(_)) {
            return;
        }

        let generation = self.next_generation();
        self.phase = PaymentPhase::Submitting;

        let (amount, tax, total_payment) = computation.rounded();
        let policy_id = self.context.policy_id;
        let payment_type = self.payment_type;

        let api = Arc::clone(&self.api);
        let processor = Arc::clone(&self.processor);
        let tokens = Arc::clone(&self.tokens);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let outcome: Result<(), ClientError> = async {
                let method = processor.tokenize(&card).await?;
                let bearer = tokens.load()?;
                let request = PaymentIntentRequest {
                    amount,
                    payment_method_id: method.0.clone(),
                    policy_id,
                    payment_type,
                    tax,
                    total_payment,
                };
                let secret = api.create_payment_intent(&request, &bearer).await?;
                processor.confirm(&secret.client_secret, &method).await?;
                Ok(())
            }
            .await;

            let event = match outcome {
                Ok(()) => AppEvent::PaymentSucceeded { generation },
                Err(e) => AppEvent::PaymentFailed {
                    generation,
                    message: e.to_string(),
                },
            };
            let _ = tx.send(event);
        });
    }

    pub fn on_tax_rate_loaded(&mut self, generation: u64, rate: f64) {
        if generation != self.generation {
            return;
        }
        self.computation = Some(PaymentComputation::derive(
            self.context.installment_amount,
            rate,
        ));
        self.phase = PaymentPhase::Computed;
    }

    pub fn on_tax_rate_failed(&mut self, generation: u64, message: String) {
        if generation != self.generation {
            return;
        }
        self.phase = PaymentPhase::Error(message);
    }

    pub fn on_payment_succeeded(&mut self, generation: u64) {
        if generation != self.generation {
            return;
        }
        info!(policy_id = self.context.policy_id, "payment confirmed");
        self.phase = PaymentPhase::Success;
    }

    pub fn on_payment_failed(&mut self, generation: u64, message: String) {
        if generation != self.generation {
            return;
        }
        self.phase = PaymentPhase::Error(message);
    }
}
