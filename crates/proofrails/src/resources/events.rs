//! Live receipt updates over server-sent events

use super::Resource;
use crate::types::ReceiptUpdate;
use eventsource_stream::Eventsource;
use futures::StreamExt;
use proofrails_transport::{HttpTransport, observability::StreamContext};
use tokio::task::JoinHandle;
use tracing::debug;

/// Events resource.
#[derive(Clone)]
pub struct Events {
    transport: HttpTransport,
}

/// Handle to a running subscription.
///
/// Dropping the handle leaves the subscription running; call
/// [`EventListener::stop`] to end it.
#[derive(Debug)]
pub struct EventListener {
    handle: JoinHandle<()>,
}

impl EventListener {
    /// End the subscription. No updates are delivered after this returns.
    pub fn stop(&self) {
        self.handle.abort();
    }

    /// Whether the subscription is still running.
    pub fn is_active(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Events {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Subscribe to status changes of one receipt.
    ///
    /// Each update is passed to `consumer` as it arrives, on a background
    /// task. Payloads that fail to parse are logged and skipped. A
    /// connection error is logged and ends the subscription; there is no
    /// reconnect.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use proofrails::ProofRails;
    /// # async fn example(client: ProofRails) {
    /// let listener = client.events().listen("receipt-id", |update| {
    ///     println!("{} is now {}", update.id, update.status);
    /// });
    ///
    /// // later
    /// listener.stop();
    /// # }
    /// ```
    pub fn listen<F>(&self, receipt_id: &str, mut consumer: F) -> EventListener
    where
        F: FnMut(ReceiptUpdate) + Send + 'static,
    {
        let transport = self.transport.clone();
        let receipt_id = receipt_id.to_string();
        let path = format!("/v1/iso/events/{}", receipt_id);

        let handle = tokio::spawn(async move {
            let mut context = StreamContext::open(path.as_str());

            let bytes = match transport.open_event_stream(&path).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    context.log_error(&e.to_string());
                    return;
                }
            };

            let mut events = bytes.eventsource();
            while let Some(event) = events.next().await {
                let event = match event {
                    Ok(event) => event,
                    Err(e) => {
                        context.log_error(&e.to_string());
                        return;
                    }
                };

                // Named events other than "message" carry no receipt updates.
                if !event.event.is_empty() && event.event != "message" {
                    debug!(event_type = %event.event, "Ignoring stream event");
                    continue;
                }

                match ReceiptUpdate::from_event(&receipt_id, &event.data) {
                    Ok(update) => {
                        context.log_event("message");
                        consumer(update);
                    }
                    Err(e) => context.log_skipped(&e.to_string()),
                }
            }

            context.log_complete();
        });

        EventListener { handle }
    }
}

impl Resource for Events {
    fn transport(&self) -> &HttpTransport {
        &self.transport
    }
}
