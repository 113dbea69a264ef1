use crate::core::ConfigProvider;
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "live-rates")]
#[command(about = "Fetch live shipping rates for a shipment and buy a label")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:5002")]
    pub api_endpoint: String,

    #[arg(long, help = "API token sent as `Authorization: Token <key>`")]
    pub api_token: Option<String>,

    #[arg(long, help = "Path to the shipment JSON file")]
    pub shipment: String,

    #[arg(
        long,
        help = "Preferred service code; defaults to the cheapest quote when omitted"
    )]
    pub service: Option<String>,

    #[arg(long, help = "Purchase the label for the selected rate")]
    pub buy: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_path("shipment", &self.shipment)?;
        if let Some(token) = &self.api_token {
            validate_non_empty_string("api_token", token)?;
        }
        Ok(())
    }
}
