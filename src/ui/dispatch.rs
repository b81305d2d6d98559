//! Posting work onto the thread that owns the display

use std::{
    io,
    thread::{self, JoinHandle},
};

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// A unit of work that must run on the UI owner
pub type UiJob = Box<dyn FnOnce() + Send + 'static>;

/// "Post to UI owner" capability. Jobs posted from one thread run in the
/// order they were posted.
pub trait Dispatcher: Send + Sync {
    fn post(&self, job: UiJob);
}

/// Runs jobs immediately on the calling thread. For hosts whose caller is
/// already the UI owner, and for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineDispatcher;

impl Dispatcher for InlineDispatcher {
    fn post(&self, job: UiJob) {
        job();
    }
}

enum Envelope {
    Run(UiJob),
    Quit,
}

/// Handle for posting onto a [`UiThread`]
#[derive(Clone)]
pub struct UiDispatcher {
    tx: mpsc::UnboundedSender<Envelope>,
}

impl Dispatcher for UiDispatcher {
    fn post(&self, job: UiJob) {
        if self.tx.send(Envelope::Run(job)).is_err() {
            debug!("UI thread has stopped, dropping job");
        }
    }
}

/// A dedicated OS thread that owns every display sink and runs posted jobs
/// one at a time
pub struct UiThread {
    dispatcher: UiDispatcher,
    handle: JoinHandle<()>,
}

impl UiThread {
    pub fn spawn(name: &str) -> io::Result<Self> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Envelope>();

        let handle = thread::Builder::new().name(name.to_string()).spawn(move || {
            info!("UI thread started");
            while let Some(envelope) = rx.blocking_recv() {
                match envelope {
                    Envelope::Run(job) => job(),
                    Envelope::Quit => break,
                }
            }
            info!("UI thread stopped");
        })?;

        Ok(Self {
            dispatcher: UiDispatcher { tx },
            handle,
        })
    }

    pub fn dispatcher(&self) -> UiDispatcher {
        self.dispatcher.clone()
    }

    /// Run every job posted so far, then stop the thread. Blocks until it
    /// exits.
    pub fn shutdown(self) {
        if self.dispatcher.tx.send(Envelope::Quit).is_err() {
            warn!("UI thread already gone");
        }
        if self.handle.join().is_err() {
            warn!("UI thread panicked");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn runs_jobs_in_post_order_on_the_ui_thread() {
        let ui = UiThread::spawn("ui-test").unwrap();
        let dispatcher = ui.dispatcher();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for i in 0..5 {
            let seen = Arc::clone(&seen);
            dispatcher.post(Box::new(move || {
                let name = thread::current().name().map(str::to_string);
                seen.lock().unwrap().push((i, name));
            }));
        }
        ui.shutdown();

        let seen = seen.lock().unwrap();
        let order: Vec<_> = seen.iter().map(|(i, _)| *i).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
        assert!(seen.iter().all(|(_, name)| name.as_deref() == Some("ui-test")));
    }

    #[test]
    fn posting_after_shutdown_is_ignored() {
        let ui = UiThread::spawn("ui-test").unwrap();
        let dispatcher = ui.dispatcher();
        ui.shutdown();

        dispatcher.post(Box::new(|| panic!("must not run")));
    }

    #[test]
    fn inline_runs_on_caller() {
        let ran = Arc::new(Mutex::new(false));
        let flag = Arc::clone(&ran);
        InlineDispatcher.post(Box::new(move || *flag.lock().unwrap() = true));
        assert!(*ran.lock().unwrap());
    }
}
