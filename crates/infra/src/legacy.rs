use std::sync::{Mutex, PoisonError};

use fulfilment_stores::{LegacyStoreManager, OperationType, Store, StoreChangeEvent};

/// Legacy gateway that writes the sync call to the log.
///
/// Stands in for the real legacy store manager; the integration is
/// fire-and-forget, so logging is all the reference implementation does.
#[derive(Debug, Default)]
pub struct LoggingLegacyStoreManager;

impl LoggingLegacyStoreManager {
    pub fn new() -> Self {
        Self
    }
}

impl LegacyStoreManager for LoggingLegacyStoreManager {
    fn create_store_on_legacy_system(&self, store: &Store) {
        tracing::info!(store_id = %store.id, name = %store.name, "store created on legacy system");
    }

    fn update_store_on_legacy_system(&self, store: &Store) {
        tracing::info!(store_id = %store.id, name = %store.name, "store updated on legacy system");
    }
}

/// Post-commit outbox for store change notifications.
///
/// Events enqueued during a unit of work are held back until [`commit`] is
/// called after the mutation has been applied; a unit of work that fails
/// calls [`discard`] instead and nothing reaches the legacy system.
/// Delivery is at-least-once: an event is dropped from the queue only after
/// the gateway call for it returned.
///
/// [`commit`]: StoreChangeOutbox::commit
/// [`discard`]: StoreChangeOutbox::discard
#[derive(Debug)]
pub struct StoreChangeOutbox<G> {
    gateway: G,
    pending: Mutex<Vec<StoreChangeEvent>>,
}

impl<G> StoreChangeOutbox<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            pending: Mutex::new(Vec::new()),
        }
    }

    pub fn enqueue(&self, event: StoreChangeEvent) {
        self.lock().push(event);
    }

    pub fn discard(&self) {
        self.lock().clear();
    }

    pub fn pending(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<StoreChangeEvent>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<G> StoreChangeOutbox<G>
where
    G: LegacyStoreManager,
{
    /// Deliver every pending event in enqueue order. Call only after the
    /// enclosing unit of work has committed.
    pub fn commit(&self) {
        loop {
            let event = match self.lock().first().cloned() {
                Some(event) => event,
                None => break,
            };

            match event.operation_type {
                OperationType::Create => self.gateway.create_store_on_legacy_system(&event.store),
                OperationType::Update => self.gateway.update_store_on_legacy_system(&event.store),
            }

            // Dequeue only after the gateway call returned: a crash mid-commit
            // redelivers rather than drops (at-least-once).
            let mut pending = self.lock();
            if !pending.is_empty() {
                pending.remove(0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingGateway {
        calls: Mutex<Vec<(String, String)>>,
    }

    impl RecordingGateway {
        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl LegacyStoreManager for RecordingGateway {
        fn create_store_on_legacy_system(&self, store: &Store) {
            self.calls
                .lock()
                .unwrap()
                .push(("create".into(), store.name.clone()));
        }

        fn update_store_on_legacy_system(&self, store: &Store) {
            self.calls
                .lock()
                .unwrap()
                .push(("update".into(), store.name.clone()));
        }
    }

    #[test]
    fn nothing_is_delivered_before_commit() {
        let outbox = StoreChangeOutbox::new(RecordingGateway::default());
        let store = Store::new("New Store", 10).unwrap();
        outbox.enqueue(StoreChangeEvent::created(store));

        assert_eq!(outbox.pending(), 1);
        assert!(outbox.gateway.calls().is_empty());
    }

    #[test]
    fn commit_delivers_in_enqueue_order_and_drains() {
        let outbox = StoreChangeOutbox::new(RecordingGateway::default());
        let store = Store::new("New Store", 10).unwrap();
        outbox.enqueue(StoreChangeEvent::created(store.clone()));
        outbox.enqueue(StoreChangeEvent::updated(store));

        outbox.commit();

        assert_eq!(
            outbox.gateway.calls(),
            vec![
                ("create".to_string(), "New Store".to_string()),
                ("update".to_string(), "New Store".to_string()),
            ]
        );
        assert_eq!(outbox.pending(), 0);
    }

    #[test]
    fn discard_drops_pending_events() {
        let outbox = StoreChangeOutbox::new(RecordingGateway::default());
        outbox.enqueue(StoreChangeEvent::created(Store::new("Doomed", 1).unwrap()));

        outbox.discard();
        outbox.commit();

        assert!(outbox.gateway.calls().is_empty());
    }

    #[test]
    fn commit_with_empty_queue_is_benign() {
        let outbox = StoreChangeOutbox::new(RecordingGateway::default());
        outbox.commit();
        assert!(outbox.gateway.calls().is_empty());
    }
}
