use crate::core::{Navigator, NotificationSink, ShipmentUpdater};
use crate::domain::model::{Notification, NotificationKind, Route, ShipmentUpdate};
use tokio::sync::mpsc;

/// Notification sink for headless runs: banners become log lines.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => tracing::info!("{}", notification.message),
            NotificationKind::Error => tracing::error!("{}", notification.message),
        }
    }
}

/// Navigation trigger for headless runs; there is no router to drive, so the
/// requested route is only logged.
#[derive(Debug, Clone, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn go_to(&self, route: Route) {
        tracing::info!(path = route.as_path(), "navigation requested");
    }
}

/// Shipment updater backed by an unbounded channel: the workflow publishes
/// update events, the owning side drains them and applies each to its
/// shipment.
#[derive(Debug, Clone)]
pub struct ChannelUpdater {
    sender: mpsc::UnboundedSender<ShipmentUpdate>,
}

impl ChannelUpdater {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ShipmentUpdate>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl ShipmentUpdater for ChannelUpdater {
    fn update(&self, update: ShipmentUpdate) {
        // The updater is fire-and-forget; a dropped receiver means the owner
        // is gone and the update has nowhere to land.
        let _ = self.sender.send(update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn channel_updater_delivers_updates_in_order() {
        let (updater, mut receiver) = ChannelUpdater::channel();

        updater.update(ShipmentUpdate::Rates {
            rates: None,
            selected_rate_id: None,
        });
        updater.update(ShipmentUpdate::Replace(Default::default()));

        assert_eq!(
            receiver.recv().await,
            Some(ShipmentUpdate::Rates {
                rates: None,
                selected_rate_id: None,
            })
        );
        assert!(matches!(
            receiver.recv().await,
            Some(ShipmentUpdate::Replace(_))
        ));
    }

    #[test]
    fn updater_ignores_a_dropped_receiver() {
        let (updater, receiver) = ChannelUpdater::channel();
        drop(receiver);

        updater.update(ShipmentUpdate::Rates {
            rates: None,
            selected_rate_id: None,
        });
    }
}
