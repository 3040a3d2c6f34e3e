use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{CardDetails, PaymentMethodId, PaymentProcessor};
use crate::error::ClientError;

#[derive(Debug, Deserialize)]
struct PaymentMethodResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ProcessorErrorBody {
    error: ProcessorErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ProcessorErrorDetail {
    message: String,
}

/// Stripe-style gateway authenticated with the publishable key. Only the
/// two client-side operations the payment page needs: tokenize and
/// confirm.
pub struct StripeGateway {
    client: Client,
    base_url: String,
    publishable_key: String,
}

impl StripeGateway {
    pub fn new(
        base_url: &str,
        publishable_key: &str,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            publishable_key: publishable_key.to_string(),
        })
    }

    /// Client secrets look like `pi_123_secret_456`; the confirm endpoint
    /// is addressed by the intent id in front of the `_secret_` marker.
    fn intent_id(client_secret: &str) -> Result<&str, ClientError> {
        client_secret
            .split_once("_secret_")
            .map(|(id, _)| id)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ClientError::Processor("Malformed client secret".to_string()))
    }

    async fn processor_error(response: Response) -> ClientError {
        let fallback = format!("Payment processor error ({})", response.status());
        match response.json::<ProcessorErrorBody>().await {
            Ok(body) => ClientError::Processor(body.error.message),
            Err(_) => ClientError::Processor(fallback),
        }
    }
}

#[async_trait]
impl PaymentProcessor for StripeGateway {
    async fn tokenize(&self, card: &CardDetails) -> Result<PaymentMethodId, ClientError> {
        let form = [
            ("type", "card".to_string()),
            ("card[number]", card.number.clone()),
            ("card[exp_month]", card.exp_month.to_string()),
            ("card[exp_year]", card.exp_year.to_string()),
            ("card[cvc]", card.cvc.clone()),
        ];

        let response = self
            .client
            .post(format!("{}/v1/payment_methods", self.base_url))
            .bearer_auth(&self.publishable_key)
            .form(&form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::processor_error(response).await);
        }

        let body: PaymentMethodResponse = response.json().await?;
        debug!(method_id = %body.id, "card tokenized");
        Ok(PaymentMethodId(body.id))
    }

    async fn confirm(
        &self,
        client_secret: &str,
        method: &PaymentMethodId,
    ) -> Result<(), ClientError> {
        let intent_id = Self::intent_id(client_secret)?;
        let form = [
            ("payment_method", method.0.clone()),
            ("client_secret", client_secret.to_string()),
        ];

        let response = self
            .client
            .post(format!(
                "{}/v1/payment_intents/{}/confirm",
                self.base_url, intent_id
            ))
            .bearer_auth(&self.publishable_key)
            .form(&form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::processor_error(response).await);
        }

        debug!(intent_id, "payment confirmed");
        Ok(())
    }
}
