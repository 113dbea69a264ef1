pub mod workflow;

pub use crate::domain::model::{
    Notification, NotificationKind, Payment, PurchaseRequest, Rate, Route, Shipment,
    ShipmentUpdate,
};
pub use crate::domain::ports::{
    ConfigProvider, Navigator, NotificationSink, PurchaseService, RateService, ReferenceData,
    ShipmentUpdater,
};
pub use crate::utils::error::Result;
