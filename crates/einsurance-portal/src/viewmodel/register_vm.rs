//! Registration ViewModel
//!
//! Collects, validates and submits a customer self-registration, and
//! fetches the city reference list once on mount. Submission is blocked
//! while any field fails validation; the backend's real outcome is what
//! gets surfaced.

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::warn;

use einsurance_client::InsuranceApi;
use einsurance_core::{City, FieldErrors, FormField, RegistrationForm};

use crate::events::AppEvent;

pub struct RegisterViewModel {
    pub form: RegistrationForm,
    pub errors: FieldErrors,
    pub cities: Vec<City>,
    /// True until the city fetch resolves; the selector shows a loading
    /// placeholder meanwhile.
    pub cities_loading: bool,
    /// Success acknowledgment, set only on an Ok response.
    pub notice: Option<String>,
    /// Page-level failure message from the backend.
    pub submit_error: Option<String>,
    pub is_submitting: bool,
    generation: u64,
    api: Arc<dyn InsuranceApi>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl RegisterViewModel {
    pub fn new(api: Arc<dyn InsuranceApi>, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            form: RegistrationForm::default(),
            errors: FieldErrors::default(),
            cities: Vec::new(),
            cities_loading: true,
            notice: None,
            submit_error: None,
            is_submitting: false,
            generation: 0,
            api,
            event_tx,
        }
    }

    /// Fetch the city reference list; called once when the form mounts.
    pub fn load_cities(&mut self) {
        self.cities_loading = true;
        let api = Arc::clone(&self.api);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let event = match api.fetch_cities().await {
                Ok(cities) => AppEvent::CitiesLoaded(cities),
                Err(e) => AppEvent::CitiesFailed(e.to_string()),
            };
            let _ = tx.send(event);
        });
    }

    /// Reducer entry point: update one field and clear its error.
    pub fn set_field(&mut self, field: FormField, value: String) {
        self.form.apply(field, value);
        self.errors.clear(field);
    }

    /// Cheap pre-check gating the submit control; full validation still
    /// runs on submit.
    pub fn can_submit(&self) -> bool {
        self.form.is_complete() && !self.is_submitting
    }

    /// Validate everything; any failure blocks the network call and
    /// populates the per-field messages.
    pub fn submit(&mut self) {
        if self.is_submitting {
            return;
        }

        let today = chrono::Local::now().date_naive();
        let errors = self.form.validate(&self.cities, today);
        if !errors.is_empty() {
            self.errors = errors;
            return;
        }

        self.errors = FieldErrors::default();
        self.notice = None;
        self.submit_error = None;
        self.is_submitting = true;
        self.generation += 1;
        let generation = self.generation;

        let api = Arc::clone(&self.api);
        let tx = self.event_tx.clone();
        let form = self.form.clone();

        tokio::spawn(async move {
            let result = api.register(&form).await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::RegistrationFinished { generation, result });
        });
    }

    pub fn on_cities_loaded(&mut self, cities: Vec<City>) {
        self.cities_loading = false;
        self.cities = cities;
    }

    pub fn on_cities_failed(&mut self, message: String) {
        // Selector stays empty; there is no retry.
        self.cities_loading = false;
        warn!(%message, "city reference fetch failed");
    }

    pub fn on_registration_finished(&mut self, generation: u64, result: Result<(), String>) {
        if generation != self.generation {
            return;
        }
        self.is_submitting = false;
        match result {
            Ok(()) => {
                self.notice = Some("Registered successfully!".to_string());
                self.submit_error = None;
            }
            Err(message) => {
                self.notice = None;
                self.submit_error = Some(message);
            }
        }
    }
}
