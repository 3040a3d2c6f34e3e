use async_trait::async_trait;
use einsurance_core::{City, Customer, Page, PageSize, RegistrationForm};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{ClientSecret, InsuranceApi, PaymentIntentRequest};
use crate::error::ClientError;

/// Paged listing body: the backend sends content and the page count, the
/// client stamps the index it asked for.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageResponse {
    content: Vec<Customer>,
    total_pages: u32,
}

#[derive(Debug, Deserialize)]
struct CitiesResponse {
    content: Vec<City>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaxResponse {
    payment_tax: Option<f64>,
}

/// `reqwest`-backed implementation of [`InsuranceApi`].
pub struct HttpInsuranceApi {
    client: Client,
    base_url: String,
}

impl HttpInsuranceApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn api_error(response: Response) -> ClientError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        ClientError::Api { status, message }
    }

    async fn get_page(
        &self,
        path: &str,
        query: &[(&str, String)],
        page: u32,
    ) -> Result<Page<Customer>, ClientError> {
        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let body: PageResponse = response.json().await?;
        debug!(
            page,
            total_pages = body.total_pages,
            rows = body.content.len(),
            "customer page loaded"
        );
        Ok(Page::new(body.content, page, body.total_pages))
    }
}

#[async_trait]
impl InsuranceApi for HttpInsuranceApi {
    async fn fetch_customers(
        &self,
        page: u32,
        size: PageSize,
    ) -> Result<Page<Customer>, ClientError> {
        let query = [
            ("page", page.to_string()),
            ("size", size.as_u32().to_string()),
        ];
        self.get_page("/customers", &query, page).await
    }

    async fn fetch_customer(&self, id: i64) -> Result<Customer, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/customers/{}", id)))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(format!("customer {}", id)));
        }
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        Ok(response.json().await?)
    }

    async fn search_by_name(
        &self,
        name: &str,
        page: u32,
        size: PageSize,
    ) -> Result<Page<Customer>, ClientError> {
        let query = [
            ("name", name.to_string()),
            ("page", page.to_string()),
            ("size", size.as_u32().to_string()),
        ];
        self.get_page("/customers/search", &query, page).await
    }

    async fn search_by_active(
        &self,
        active: bool,
        page: u32,
        size: PageSize,
    ) -> Result<Page<Customer>, ClientError> {
        let query = [
            ("active", active.to_string()),
            ("page", page.to_string()),
            ("size", size.as_u32().to_string()),
        ];
        self.get_page("/customers/search", &query, page).await
    }

    async fn fetch_cities(&self) -> Result<Vec<City>, ClientError> {
        let response = self.client.get(self.url("/cities")).send().await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let body: CitiesResponse = response.json().await?;
        Ok(body.content)
    }

    async fn register(&self, form: &RegistrationForm) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.url("/auth/register"))
            .json(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        Ok(())
    }

    async fn fetch_payment_tax(&self) -> Result<f64, ClientError> {
        let response = self.client.get(self.url("/payment-tax")).send().await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let body: TaxResponse = response.json().await?;
        // Backend may omit the rate; treat that as zero tax.
        Ok(body.payment_tax.unwrap_or(0.0))
    }

    async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
        bearer: &str,
    ) -> Result<ClientSecret, ClientError> {
        let response = self
            .client
            .post(self.url("/customer/create-payment-intent"))
            .header("Authorization", format!("Bearer {}", bearer))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use einsurance_core::PaymentType;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn customer_json(id: i64, first: &str, active: bool) -> serde_json::Value {
        json!({
            "customerId": id,
            "firstName": first,
            "lastName": "Kumar",
            "dob": "1995-04-12",
            "active": active,
            "phoneNumber": "9876543210",
            "cityName": "Chennai",
            "registrationDate": "2024-01-15",
            "verified": true
        })
    }

    async fn api_for(server: &MockServer) -> HttpInsuranceApi {
        HttpInsuranceApi::new(&server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn fetch_customers_sends_page_and_size() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customers"))
            .and(query_param("page", "2"))
            .and(query_param("size", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [customer_json(7, "Ravi", true)],
                "totalPages": 4
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = api_for(&server).await;
        let page = api.fetch_customers(2, PageSize::Five).await.unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.content[0].customer_id, 7);
    }

    #[tokio::test]
    async fn active_filter_builds_the_documented_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customers/search"))
            .and(query_param("active", "false"))
            .and(query_param("page", "0"))
            .and(query_param("size", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [customer_json(1, "Anita", false)],
                "totalPages": 3
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = api_for(&server).await;
        let page = api
            .search_by_active(false, 0, PageSize::Ten)
            .await
            .unwrap();
        assert_eq!(page.total_pages, 3);
        assert!(!page.content[0].active);
    }

    #[tokio::test]
    async fn name_search_passes_the_name_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customers/search"))
            .and(query_param("name", "kumar"))
            .and(query_param("page", "1"))
            .and(query_param("size", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [],
                "totalPages": 2
            })))
            .mount(&server)
            .await;

        let api = api_for(&server).await;
        let page = api.search_by_name("kumar", 1, PageSize::Twenty).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(page.page, 1);
    }

    #[tokio::test]
    async fn missing_customer_maps_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/customers/999"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let api = api_for(&server).await;
        let err = api.fetch_customer(999).await.unwrap_err();
        assert!(matches!(err, ClientError::NotFound(_)));
    }

    #[tokio::test]
    async fn register_posts_the_wire_body_and_surfaces_failure() {
        let server = MockServer::start().await;
        let mut form = RegistrationForm::default();
        form.username = "ravi_kumar".to_string();
        form.email = "ravi@example.com".to_string();
        form.password = "s3cret99".to_string();
        form.first_name = "Ravi".to_string();
        form.last_name = "Kumar".to_string();
        form.phone_number = "9876543210".to_string();
        form.dob = "1995-04-12".to_string();
        form.city_id = "1".to_string();

        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .and(body_json(json!({
                "username": "ravi_kumar",
                "email": "ravi@example.com",
                "password": "s3cret99",
                "firstName": "Ravi",
                "lastName": "Kumar",
                "phone_number": "9876543210",
                "dob": "1995-04-12",
                "cityId": "1",
                "roles": ["ROLE_CUSTOMER"]
            })))
            .respond_with(ResponseTemplate::new(409).set_body_string("username taken"))
            .expect(1)
            .mount(&server)
            .await;

        let api = api_for(&server).await;
        let err = api.register(&form).await.unwrap_err();
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "username taken");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn payment_tax_defaults_to_zero_when_omitted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/payment-tax"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let api = api_for(&server).await;
        assert_eq!(api.fetch_payment_tax().await.unwrap(), 0.0);
    }

    #[tokio::test]
    async fn intent_creation_carries_the_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/customer/create-payment-intent"))
            .and(header("Authorization", "Bearer tok-123"))
            .and(body_json(json!({
                "amount": 1000,
                "paymentMethodId": "pm_42",
                "policyId": 57,
                "paymentType": "CREDIT",
                "tax": 50,
                "totalPayment": 1050
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "clientSecret": "pi_9_secret_abc"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = api_for(&server).await;
        let request = PaymentIntentRequest {
            amount: 1000,
            payment_method_id: "pm_42".to_string(),
            policy_id: 57,
            payment_type: PaymentType::Credit,
            tax: 50,
            total_payment: 1050,
        };
        let secret = api.create_payment_intent(&request, "tok-123").await.unwrap();
        assert_eq!(secret.client_secret, "pi_9_secret_abc");
    }
}
