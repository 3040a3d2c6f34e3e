//! Payment context and computation
//!
//! The payment page receives its context from navigation state, fetches
//! the current tax rate, and derives the breakdown from the installment
//! amount. Derived values are recomputed whenever the inputs change and
//! never stored anywhere else.

use crate::error::DomainError;
use serde::Serialize;

/// Payment instrument selector, exactly one of the two. Credit is the
/// page's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentType {
    Credit,
    Debit,
}

impl Default for PaymentType {
    fn default() -> Self {
        PaymentType::Credit
    }
}

/// In-flight policy/installment context handed over by navigation state.
/// Not persisted.
#[derive(Debug, Clone)]
pub struct PaymentContext {
    pub scheme_id: i64,
    pub investment_amount: f64,
    pub installment_amount: f64,
    pub policy_id: i64,
}

impl PaymentContext {
    /// Build the context from navigation state; the policy id arrives as a
    /// route string and must parse as an integer.
    pub fn from_navigation(
        scheme_id: i64,
        investment_amount: f64,
        installment_amount: f64,
        policy_id: &str,
    ) -> Result<Self, DomainError> {
        let policy_id = policy_id
            .trim()
            .parse::<i64>()
            .map_err(|_| DomainError::InvalidPolicyId(policy_id.to_string()))?;
        Ok(Self {
            scheme_id,
            investment_amount,
            installment_amount,
            policy_id,
        })
    }
}

/// Derived payment breakdown: `tax = installment × rate/100`,
/// `total = installment + tax`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentComputation {
    pub amount: f64,
    pub tax: f64,
    pub total_payment: f64,
}

impl PaymentComputation {
    pub fn derive(installment_amount: f64, tax_rate: f64) -> Self {
        let tax = installment_amount * tax_rate / 100.0;
        Self {
            amount: installment_amount,
            tax,
            total_payment: installment_amount + tax,
        }
    }

    /// Monetary values as sent to the backend. One rounding policy for all
    /// three fields: nearest integer unit.
    pub fn rounded(&self) -> (i64, i64, i64) {
        (
            self.amount.round() as i64,
            self.tax.round() as i64,
            self.total_payment.round() as i64,
        )
    }
}
