//! Async event stream for the app loop.

use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::Stream;
use tokio::sync::mpsc;

use super::{Event, EventDispatcher};

/// Stream of terminal events fed by a background polling task.
pub struct EventHandler {
    event_rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Spawn the polling task. Must be called inside a tokio runtime.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let dispatcher = EventDispatcher::new().with_tick_rate(tick_rate);
            loop {
                // crossterm polling blocks, keep it off the async workers
                let polled = tokio::task::block_in_place(|| dispatcher.next());
                match polled {
                    Ok(event) => {
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        tracing::warn!(%err, "failed to read terminal event");
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    }
                }
            }
        });

        Self { event_rx: rx }
    }

    /// Stream over an existing channel, for driving the app without a terminal.
    pub fn from_channel(event_rx: mpsc::UnboundedReceiver<Event>) -> Self {
        Self { event_rx }
    }
}

impl Stream for EventHandler {
    type Item = Event;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.event_rx).poll_recv(cx)
    }
}
