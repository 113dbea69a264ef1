use crate::core::{ConfigProvider, PurchaseService, RateService, ReferenceData, Result};
use crate::domain::model::{CarrierMessage, PurchaseRequest, Rate, Shipment};
use crate::utils::error::LabelError;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use std::collections::HashMap;

/// REST client for a Karrio-style shipping API, backing the rate-quoting,
/// purchase, and reference-data ports.
#[derive(Debug, Clone)]
pub struct RestApiClient {
    base_url: String,
    token: Option<String>,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct RatesPayload {
    #[serde(default)]
    rates: Vec<Rate>,
}

#[derive(Debug, Deserialize)]
struct PurchasePayload {
    shipment: Shipment,
}

#[derive(Debug, Deserialize)]
struct ReferencesPayload {
    #[serde(default)]
    countries: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
    details: Option<ErrorDetails>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetails {
    #[serde(default)]
    messages: Vec<CarrierMessage>,
}

impl RestApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            client: Client::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.api_endpoint(), config.api_token().map(str::to_string))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", format!("Token {}", token)),
            None => builder,
        }
    }

    /// Decodes a non-2xx response into the crate error taxonomy: per-carrier
    /// messages when the structured detail carries any, otherwise the body's
    /// top-level message, otherwise the bare status.
    async fn decode_failure(response: Response) -> LabelError {
        let status = response.status();
        let fallback = || LabelError::Service {
            message: format!("request failed with status {}", status),
        };

        let body = match response.json::<ErrorBody>().await {
            Ok(body) => body,
            Err(_) => return fallback(),
        };

        if let Some(error) = body.error {
            if let Some(details) = error.details {
                if !details.messages.is_empty() {
                    return LabelError::Carrier(details.messages);
                }
            }
            if let Some(message) = error.message {
                return LabelError::Service { message };
            }
        }
        if let Some(message) = body.message {
            return LabelError::Service { message };
        }
        fallback()
    }
}

#[async_trait]
impl RateService for RestApiClient {
    async fn fetch_rates(&self, shipment: &Shipment) -> Result<Vec<Rate>> {
        let url = format!("{}/v1/proxy/rates", self.base_url);
        tracing::debug!(%url, "requesting rate quotes");

        let response = self
            .authorize(self.client.post(&url).json(shipment))
            .send()
            .await?;

        tracing::debug!(status = %response.status(), "rate quote response");
        if !response.status().is_success() {
            return Err(Self::decode_failure(response).await);
        }

        let payload: RatesPayload = response.json().await?;
        Ok(payload.rates)
    }
}

#[async_trait]
impl PurchaseService for RestApiClient {
    async fn buy_label(&self, request: &PurchaseRequest) -> Result<Shipment> {
        let url = format!("{}/v1/shipping", self.base_url);
        tracing::debug!(%url, "purchasing label");

        let response = self
            .authorize(self.client.post(&url).json(request))
            .send()
            .await?;

        tracing::debug!(status = %response.status(), "purchase response");
        if !response.status().is_success() {
            return Err(Self::decode_failure(response).await);
        }

        let payload: PurchasePayload = response.json().await?;
        Ok(payload.shipment)
    }
}

#[async_trait]
impl ReferenceData for RestApiClient {
    async fn countries(&self) -> Result<HashMap<String, String>> {
        let url = format!("{}/v1/references", self.base_url);
        let response = self.authorize(self.client.get(&url)).send().await?;

        if !response.status().is_success() {
            return Err(Self::decode_failure(response).await);
        }

        let payload: ReferencesPayload = response.json().await?;
        Ok(payload.countries)
    }
}
