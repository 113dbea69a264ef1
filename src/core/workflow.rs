use crate::core::{
    Navigator, NotificationSink, PurchaseService, RateService, ShipmentUpdater,
};
use crate::domain::model::{
    Notification, PaidBy, Payment, PurchaseRequest, Route, Shipment, ShipmentUpdate,
    DEFAULT_CURRENCY,
};

/// Which operation the workflow currently has in flight. Guards entry to
/// both async operations so headless callers get the same mutual exclusion
/// a UI gets from disabled buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Fetching,
    Purchasing,
}

/// The rate-acquisition and purchase state machine.
///
/// Owns the transient workflow state (phase, last-fetched snapshot, rate
/// selection); the shipment itself is owned by the host, which receives
/// every state transition as a [`ShipmentUpdate`] through the updater port.
pub struct RateWorkflow<R, P, N, V, U> {
    rate_service: R,
    purchase_service: P,
    notifier: N,
    navigator: V,
    updater: U,
    phase: Phase,
    last_snapshot: Option<Shipment>,
    selected_rate_id: Option<String>,
}

impl<R, P, N, V, U> RateWorkflow<R, P, N, V, U>
where
    R: RateService,
    P: PurchaseService,
    N: NotificationSink,
    V: Navigator,
    U: ShipmentUpdater,
{
    pub fn new(rate_service: R, purchase_service: P, notifier: N, navigator: V, updater: U) -> Self {
        Self {
            rate_service,
            purchase_service,
            notifier,
            navigator,
            updater,
            phase: Phase::Idle,
            last_snapshot: None,
            selected_rate_id: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn selected_rate_id(&self) -> Option<&str> {
        self.selected_rate_id.as_deref()
    }

    /// Readiness gate for rate fetching: both address lines present, at
    /// least one parcel, and the shipment changed since the last fetch.
    /// Snapshot equality is the only de-duplication mechanism.
    pub fn can_fetch(&self, current: &Shipment) -> bool {
        current.shipper.address_line1.is_some()
            && current.recipient.address_line1.is_some()
            && !current.parcels.is_empty()
            && self.last_snapshot.as_ref() != Some(current)
    }

    /// Fetches rate quotes for the shipment and publishes the outcome.
    ///
    /// Whatever the outcome, any previous rate selection is invalidated and
    /// a `Rates` update is published; on failure the payload carries no
    /// rates, clearing stale quotes. Failures are reported through the
    /// notification sink, never returned.
    pub async fn fetch_rates(&mut self, shipment: &Shipment) {
        if self.phase != Phase::Idle {
            tracing::debug!(phase = ?self.phase, "rate fetch ignored: operation in flight");
            return;
        }
        if !self.can_fetch(shipment) {
            tracing::debug!("rate fetch skipped: shipment incomplete or unchanged");
            return;
        }

        self.phase = Phase::Fetching;
        // Snapshot committed before the call resolves, so an identical
        // re-submission is rejected even while this fetch is in flight.
        self.last_snapshot = Some(shipment.clone());

        let mut rates = None;
        match self.rate_service.fetch_rates(shipment).await {
            Ok(fetched) => {
                tracing::info!(count = fetched.len(), "rate quotes received");
                rates = Some(fetched);
            }
            Err(err) => {
                tracing::warn!("rate fetch failed: {}", err);
                self.notifier
                    .notify(Notification::error(err.user_message()));
            }
        }

        self.phase = Phase::Idle;
        self.selected_rate_id = None;
        self.updater.update(ShipmentUpdate::Rates {
            rates,
            selected_rate_id: None,
        });
    }

    /// Selects a rate by id. The id must name a rate in the shipment's
    /// current quote list; unknown ids are ignored and reported as `false`.
    /// Selecting the same id twice is a no-op.
    pub fn select_rate(&mut self, shipment: &Shipment, id: &str) -> bool {
        let known = shipment
            .rates
            .as_ref()
            .is_some_and(|rates| rates.iter().any(|rate| rate.id == id));
        if !known {
            tracing::debug!(rate_id = id, "selection ignored: rate not in current list");
            return false;
        }
        self.selected_rate_id = Some(id.to_string());
        true
    }

    /// Purchases the label for the currently selected rate.
    ///
    /// No-op unless the workflow is idle, the shipment carries a rate list,
    /// and a rate is selected. On success the purchased shipment replaces
    /// the owned state, a success notification fires, and navigation to home
    /// fires exactly once. On failure only an error notification fires and
    /// the owned state is untouched.
    pub async fn buy_shipment(&mut self, shipment: &Shipment) {
        if self.phase != Phase::Idle {
            tracing::debug!(phase = ?self.phase, "purchase ignored: operation in flight");
            return;
        }
        let Some(rates) = shipment.rates.clone() else {
            tracing::debug!("purchase skipped: no rate list");
            return;
        };
        let Some(selected_rate_id) = self.selected_rate_id.clone() else {
            tracing::debug!("purchase skipped: no rate selected");
            return;
        };

        self.phase = Phase::Purchasing;

        let currency = shipment
            .options
            .as_ref()
            .and_then(|options| options.currency.clone())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        let request = PurchaseRequest {
            shipment: Shipment {
                rates: Some(rates),
                selected_rate_id: Some(selected_rate_id),
                ..shipment.clone()
            },
            payment: Payment {
                paid_by: PaidBy::Sender,
                currency,
            },
        };

        match self.purchase_service.buy_label(&request).await {
            Ok(purchased) => {
                tracing::info!("label purchased");
                self.updater.update(ShipmentUpdate::Replace(purchased));
                self.notifier
                    .notify(Notification::success("Label successfully purchased!"));
                self.navigator.go_to(Route::Home);
            }
            Err(err) => {
                tracing::warn!("label purchase failed: {}", err);
                self.notifier
                    .notify(Notification::error(err.user_message()));
            }
        }

        self.phase = Phase::Idle;
    }
}
