use crate::domain::model::{Notification, PurchaseRequest, Rate, Route, Shipment, ShipmentUpdate};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Rate-quoting service: returns the server-ordered quote list for a shipment.
#[async_trait]
pub trait RateService: Send + Sync {
    async fn fetch_rates(&self, shipment: &Shipment) -> Result<Vec<Rate>>;
}

/// Purchase service: converts a shipment with a selected rate into a
/// purchased label, returning the final shipment.
#[async_trait]
pub trait PurchaseService: Send + Sync {
    async fn buy_label(&self, request: &PurchaseRequest) -> Result<Shipment>;
}

/// Fire-and-forget notification sink; no return value is consumed.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Fire-and-forget navigation trigger.
pub trait Navigator: Send + Sync {
    fn go_to(&self, route: Route);
}

/// The workflow's only channel for publishing shipment state upward.
pub trait ShipmentUpdater: Send + Sync {
    fn update(&self, update: ShipmentUpdate);
}

/// Reference data used by display formatting only (country code lookups).
#[async_trait]
pub trait ReferenceData: Send + Sync {
    async fn countries(&self) -> Result<HashMap<String, String>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_token(&self) -> Option<&str>;
}
