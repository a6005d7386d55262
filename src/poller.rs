use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, error};

use crate::error::{Error, Result};

/// A screen that keeps its own copy of server state.
pub trait LiveView: Send {
    /// Everything the screen fetches when it is first shown.
    fn load(&mut self);

    /// What the timer re-fetches.
    fn refresh(&mut self);
}

/// Re-runs `refresh` on a fixed interval until stopped or dropped.
pub struct Poller {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Poller {
    pub fn spawn<V>(view: Arc<Mutex<V>>, interval: Duration) -> Self
    where
        V: LiveView + 'static,
    {
        let (stop, ticks) = mpsc::channel::<()>();

        let handle = thread::spawn(move || loop {
            match ticks.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => match view.lock() {
                    Ok(mut view) => view.refresh(),
                    Err(_) => {
                        error!("view lock poisoned, stopping poller");
                        break;
                    }
                },
                // Stop requested or the poller was dropped
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        debug!(?interval, "poller started");

        Poller {
            stop: Some(stop),
            handle: Some(handle),
        }
    }

    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
            debug!("poller stopped");
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// A loaded view with its refresh timer running. Dropping it unmounts the
/// view and cancels the timer.
pub struct Mounted<V: LiveView + 'static> {
    view: Arc<Mutex<V>>,
    poller: Poller,
}

impl<V: LiveView + 'static> Mounted<V> {
    pub fn new(mut view: V, interval: Duration) -> Self {
        view.load();
        let view = Arc::new(Mutex::new(view));
        let poller = Poller::spawn(Arc::clone(&view), interval);

        Mounted { view, poller }
    }

    /// Runs `f` against the view, holding off the timer meanwhile.
    pub fn with<R>(&self, f: impl FnOnce(&mut V) -> R) -> Result<R> {
        let mut view = self.view.lock().map_err(|_| Error::Poisoned)?;
        Ok(f(&mut view))
    }

    pub fn unmount(self) {
        self.poller.stop();
    }
}
