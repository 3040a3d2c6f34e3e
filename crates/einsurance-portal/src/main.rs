//! Portal entry point
//!
//! Wires the configured clients into the customer list view model and
//! drives the first page, logging the rows and the pagination indicator.
//! A real front end would route the same events into its render loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{error, info};

use einsurance_client::HttpInsuranceApi;
use einsurance_portal::config::Settings;
use einsurance_portal::events::AppEvent;
use einsurance_portal::telemetry;
use einsurance_portal::viewmodel::CustomerListViewModel;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_logger()?;

    let settings = Settings::load()?;
    info!(backend = %settings.backend.base_url, "starting E-Insurance customer portal");

    let api = Arc::new(HttpInsuranceApi::new(
        &settings.backend.base_url,
        Duration::from_secs(settings.backend.timeout_seconds),
    )?);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut list = CustomerListViewModel::new(api, tx);
    list.load_page();

    match rx.recv().await {
        Some(AppEvent::CustomersLoaded { generation, page }) => {
            list.on_customers_loaded(generation, page);
            for customer in &list.customers {
                info!(
                    id = customer.customer_id,
                    name = %customer.full_name(),
                    city = %customer.city_name,
                    active = customer.active,
                    verified = customer.verified,
                    "customer"
                );
            }
            info!("{}", list.page_indicator());
        }
        Some(AppEvent::CustomersFailed { generation, message }) => {
            list.on_customers_failed(generation, message.clone());
            error!(%message, "failed to load the customer listing");
        }
        _ => {}
    }

    Ok(())
}
