//! Observable state handed to the shell.
//!
//! - [`LiveSlot`] holds the latest value and replays it to every new observer.
//!   It starts out unset.
//! - [`Event`] is a value delivered exactly once by a background task.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::{oneshot, watch};
use tracing::debug;

#[derive(Debug)]
pub struct LiveSlot<T> {
    tx: watch::Sender<Option<T>>,
}

impl<T: Clone> LiveSlot<T> {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    pub fn with_value(value: T) -> Self {
        let (tx, _rx) = watch::channel(Some(value));
        Self { tx }
    }

    /// Replace the held value and notify every observer.
    pub fn set(&self, value: T) {
        self.tx.send_replace(Some(value));
        debug!(observers = self.tx.receiver_count(), "slot published");
    }

    pub fn get(&self) -> Option<T> {
        self.tx.borrow().clone()
    }

    pub fn observe(&self) -> Observer<T> {
        Observer {
            rx: self.tx.subscribe(),
        }
    }
}

impl<T: Clone> Default for LiveSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct Observer<T> {
    rx: watch::Receiver<Option<T>>,
}

impl<T: Clone> Observer<T> {
    pub fn current(&self) -> Option<T> {
        self.rx.borrow().clone()
    }

    /// Wait until the slot holds a value and return it. Returns `None` if the
    /// slot was dropped while still unset.
    pub async fn value(&mut self) -> Option<T> {
        match self.rx.wait_for(Option::is_some).await {
            Ok(v) => v.clone(),
            Err(_) => None,
        }
    }

    /// Wait for the next publish after the last one this observer has seen.
    pub async fn changed(&mut self) -> Option<T> {
        self.rx.changed().await.ok()?;
        self.rx.borrow_and_update().clone()
    }
}

/// One-shot result of a background operation.
#[derive(Debug)]
pub struct Event<T> {
    rx: oneshot::Receiver<T>,
}

impl<T> Future for Event<T> {
    type Output = Option<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx).map(Result::ok)
    }
}

impl<T: Send + 'static> Event<T> {
    /// Run `work` on the runtime and deliver its output once.
    pub fn spawn<F>(work: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let _ = tx.send(work.await);
        });
        Self { rx }
    }

    /// An event that is already resolved.
    pub fn ready(value: T) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(value);
        Self { rx }
    }
}
