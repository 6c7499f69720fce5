//! Post-commit notification dispatcher
//!
//! Committed transfers are handed to a bounded queue consumed by a single
//! worker task, keeping the remote call entirely off the transfer's critical
//! path. Delivery is at-most-once: a full queue drops the notification and
//! every client failure is logged and swallowed. The worker drains and stops
//! once every dispatcher handle has been dropped.

use crate::clients::notification::NotificationClient;
use crate::transfer::Transfer;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;

#[derive(Clone)]
pub struct NotificationDispatcher {
    tx: mpsc::Sender<Transfer>,
}

impl NotificationDispatcher {
    /// Start the worker task and return the dispatch handle alongside it
    pub fn spawn(
        client: Arc<dyn NotificationClient>,
        capacity: usize,
    ) -> (Self, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::channel::<Transfer>(capacity);

        let worker = tokio::spawn(async move {
            while let Some(transfer) = rx.recv().await {
                if let Err(e) = client.notify(&transfer).await {
                    tracing::error!(
                        transfer_id = %transfer.transfer_id,
                        "Failed to send transfer notification: {}",
                        e
                    );
                }
            }
            tracing::info!("Notification worker stopped");
        });

        (Self { tx }, worker)
    }

    /// Enqueue a committed transfer for notification. Never blocks and never
    /// fails the caller.
    pub fn dispatch(&self, transfer: Transfer) {
        match self.tx.try_send(transfer) {
            Ok(()) => {}
            Err(TrySendError::Full(t)) => {
                tracing::warn!(
                    transfer_id = %t.transfer_id,
                    "Notification queue full, dropping notification"
                );
            }
            Err(TrySendError::Closed(t)) => {
                tracing::warn!(
                    transfer_id = %t.transfer_id,
                    "Notification worker stopped, dropping notification"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::notification::NotificationError;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use uuid::Uuid;

    struct RecordingClient {
        seen: Mutex<Vec<Uuid>>,
    }

    #[async_trait]
    impl NotificationClient for RecordingClient {
        async fn notify(&self, transfer: &Transfer) -> Result<(), NotificationError> {
            self.seen.lock().unwrap().push(transfer.transfer_id);
            Ok(())
        }
    }

    struct FailingClient;

    #[async_trait]
    impl NotificationClient for FailingClient {
        async fn notify(&self, _transfer: &Transfer) -> Result<(), NotificationError> {
            Err(NotificationError::Status(
                reqwest::StatusCode::SERVICE_UNAVAILABLE,
            ))
        }
    }

    fn sample_transfer() -> Transfer {
        Transfer {
            transfer_id: Uuid::new_v4(),
            payer_id: 1,
            payee_id: 2,
            amount: "40.00".parse().unwrap(),
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_dispatched_transfers_reach_the_client() {
        let client = Arc::new(RecordingClient {
            seen: Mutex::new(Vec::new()),
        });
        let (dispatcher, worker) = NotificationDispatcher::spawn(client.clone(), 16);

        let transfer = sample_transfer();
        dispatcher.dispatch(transfer.clone());

        // Dropping the handle closes the queue; the worker drains it first
        drop(dispatcher);
        worker.await.unwrap();

        assert_eq!(*client.seen.lock().unwrap(), vec![transfer.transfer_id]);
    }

    #[tokio::test]
    async fn test_client_failures_are_swallowed() {
        let (dispatcher, worker) = NotificationDispatcher::spawn(Arc::new(FailingClient), 16);

        dispatcher.dispatch(sample_transfer());
        dispatcher.dispatch(sample_transfer());

        drop(dispatcher);
        // The worker must exit cleanly even when every delivery fails
        worker.await.unwrap();
    }

    #[tokio::test]
    async fn test_full_queue_drops_instead_of_blocking() {
        // A failing slow path is not needed: capacity 1 with an un-started
        // worker is enough to fill the queue synchronously.
        let (tx, rx) = mpsc::channel::<Transfer>(1);
        let dispatcher = NotificationDispatcher { tx };

        dispatcher.dispatch(sample_transfer());
        dispatcher.dispatch(sample_transfer()); // dropped, must not panic or block

        drop(rx);
        dispatcher.dispatch(sample_transfer()); // closed, must not panic
    }
}
