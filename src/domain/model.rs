use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fallback payment currency when the shipment options carry none.
pub const DEFAULT_CURRENCY: &str = "CAD";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub person_name: Option<String>,
    pub company_name: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state_code: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    pub weight: Option<f64>,
    pub weight_unit: Option<String>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub dimension_unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    pub currency: Option<String>,
}

/// A rate quote as returned by the rate-quoting service. The server decides
/// the ordering of the quote list; it is never reordered on this side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    pub id: String,
    pub carrier_name: Option<String>,
    pub service: String,
    pub total_charge: Decimal,
    pub currency: String,
    pub transit_days: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub shipper: Address,
    pub recipient: Address,
    pub parcels: Vec<Parcel>,
    pub options: Option<Options>,
    pub rates: Option<Vec<Rate>>,
    pub selected_rate_id: Option<String>,
}

impl Shipment {
    /// Loads a shipment from a JSON file, the CLI input format.
    pub fn from_json_file(path: &str) -> crate::utils::error::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Host-side merge of a workflow update. Updates always replace whole
    /// values, never edit fields in place.
    pub fn apply(&mut self, update: ShipmentUpdate) {
        match update {
            ShipmentUpdate::Replace(shipment) => *self = shipment,
            ShipmentUpdate::Rates {
                rates,
                selected_rate_id,
            } => {
                self.rates = rates;
                self.selected_rate_id = selected_rate_id;
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaidBy {
    Sender,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub paid_by: PaidBy,
    pub currency: String,
}

/// Purchase request sent to the purchase service: the full shipment with its
/// rate list and selection filled in, plus the payment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    #[serde(flatten)]
    pub shipment: Shipment,
    pub payment: Payment,
}

/// One per-carrier failure line from a structured error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierMessage {
    pub carrier_name: String,
    pub message: String,
}

/// Update event published to the owning shipment state.
#[derive(Debug, Clone, PartialEq)]
pub enum ShipmentUpdate {
    Replace(Shipment),
    Rates {
        rates: Option<Vec<Rate>>,
        selected_rate_id: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
}

impl Route {
    pub fn as_path(&self) -> &'static str {
        match self {
            Route::Home => "/",
        }
    }
}
