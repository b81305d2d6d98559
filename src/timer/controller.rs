//! Countdown controller: one cancellable run at a time, display updates
//! marshaled onto the UI owner

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use tokio::{runtime::Handle, task::JoinHandle, time::sleep};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::{
    error::TimerError,
    ui::{DisplaySink, Dispatcher},
};

use super::{
    format_countdown, ActivationMode, Color, Phase, RunId, RunSeq, TimerConfig, TimerState,
};

/// Time between two ticks of a run
pub const TICK: Duration = Duration::from_secs(1);

/// The in-flight run. Only the controller holds it.
struct RunHandle {
    id: RunId,
    cancel: CancellationToken,
    // Detached on drop; the token is what stops the loop.
    _task: JoinHandle<()>,
}

struct Inner {
    state: TimerState,
    seq: RunSeq,
    current: Option<RunHandle>,
    /// The only run whose updates may still reach the sink. `None` before
    /// the first run. A cancelled run keeps it, so ticks it posted before the
    /// cancel still land; only the next run takes it over.
    writer: Option<RunId>,
    sink: Box<dyn DisplaySink>,
}

impl Inner {
    /// Cancel the in-flight run, if any. The phase only changes when a run
    /// was actually ticking.
    fn stop(&mut self, phase: Phase) -> Option<RunId> {
        let run = self.current.take()?;
        run.cancel.cancel();
        if self.state.is_running() {
            self.state.phase = phase;
        }
        Some(run.id)
    }
}

struct Shared {
    name: String,
    config: TimerConfig,
    mode: ActivationMode,
    dispatcher: Arc<dyn Dispatcher>,
    inner: Mutex<Inner>,
}

impl Shared {
    fn lock(&self) -> Result<MutexGuard<'_, Inner>, TimerError> {
        self.inner.lock().map_err(|_| TimerError::Poisoned)
    }

    /// Hand a text/color pair to the UI owner. The write is dropped there if
    /// `run` has been superseded by the time the job executes.
    fn post_display(self: &Arc<Self>, run: Option<RunId>, text: String, color: Color) {
        let shared = Arc::clone(self);
        self.dispatcher.post(Box::new(move || {
            let mut inner = match shared.lock() {
                Ok(inner) => inner,
                Err(e) => {
                    error!("{}: dropping display update: {}", shared.name, e);
                    return;
                }
            };
            if inner.writer != run {
                debug!("{}: dropping stale update {:?}", shared.name, text);
                return;
            }
            inner.sink.set_text(&text);
            inner.sink.set_text_color(color);
        }));
    }

    /// Record a tick. Returns false when the run was cancelled or no longer
    /// owns the timer. Cancellation happens under the same lock.
    fn tick(&self, run: RunId, cancel: &CancellationToken, timer: u32) -> bool {
        match self.lock() {
            Ok(mut inner) if inner.writer == Some(run) && !cancel.is_cancelled() => {
                inner.state.remaining_seconds = timer;
                true
            }
            Ok(_) => false,
            Err(e) => {
                error!("{}: failed to record tick: {}", self.name, e);
                false
            }
        }
    }

    fn complete(&self, run: RunId, cancel: &CancellationToken) -> bool {
        match self.lock() {
            Ok(mut inner) if inner.writer == Some(run) && !cancel.is_cancelled() => {
                inner.state.phase = Phase::Completed;
                inner.state.remaining_seconds = 0;
                inner.current = None;
                true
            }
            Ok(_) => false,
            Err(e) => {
                error!("{}: failed to complete run: {}", self.name, e);
                false
            }
        }
    }
}

/// Drives one label through tap-to-start countdowns.
///
/// The controller owns the remaining time, the phase, and at most one
/// background run. Every sink write is posted through the injected
/// [`Dispatcher`]; the run loop never touches the sink directly.
///
/// Runs are spawned on the caller's tokio runtime; activating from outside
/// one fails with [`TimerError::NoRuntime`].
pub struct CountdownController {
    shared: Arc<Shared>,
}

impl CountdownController {
    /// Bind a controller to its sink. The start text and color are posted
    /// right away.
    pub fn new(
        name: impl Into<String>,
        config: TimerConfig,
        mode: ActivationMode,
        sink: impl DisplaySink + 'static,
        dispatcher: Arc<dyn Dispatcher>,
    ) -> Self {
        let inner = Inner {
            state: TimerState::idle(config.total_seconds()),
            seq: RunSeq::default(),
            current: None,
            writer: None,
            sink: Box::new(sink),
        };
        let start_text = config.start_text().to_string();
        let start_color = config.start_text_color();

        let shared = Arc::new(Shared {
            name: name.into(),
            config,
            mode,
            dispatcher,
            inner: Mutex::new(inner),
        });
        shared.post_display(None, start_text, start_color);

        Self { shared }
    }

    pub fn name(&self) -> &str {
        &self.shared.name
    }

    pub fn config(&self) -> &TimerConfig {
        &self.shared.config
    }

    pub fn mode(&self) -> ActivationMode {
        self.shared.mode
    }

    pub fn state(&self) -> Result<TimerState, TimerError> {
        Ok(self.shared.lock()?.state)
    }

    /// Handle a tap. Starts a fresh run unless one is in flight, in which
    /// case the activation mode decides between restarting and pausing.
    pub fn on_activate(&self) -> Result<TimerState, TimerError> {
        let mut inner = self.shared.lock()?;

        if inner.state.is_running() {
            match self.shared.mode {
                ActivationMode::Restart => {
                    info!("{}: restarting countdown", self.shared.name);
                }
                ActivationMode::Toggle => {
                    if let Some(run) = inner.stop(Phase::Idle) {
                        info!(
                            "{}: run {} paused at {}s",
                            self.shared.name, run.0, inner.state.remaining_seconds
                        );
                    }
                    return Ok(inner.state);
                }
            }
        }

        let runtime = Handle::try_current().map_err(|_| TimerError::NoRuntime)?;
        self.start_run(&mut inner, &runtime);
        Ok(inner.state)
    }

    /// Cancel any in-flight run. Safe to call when idle and more than once.
    pub fn shutdown(&self) -> Result<(), TimerError> {
        let mut inner = self.shared.lock()?;
        if let Some(run) = inner.stop(Phase::Cancelled) {
            info!("{}: run {} cancelled by shutdown", self.shared.name, run.0);
        }
        Ok(())
    }

    /// Cancel the previous run and start a new one while holding the lock,
    /// so no two runs are ever eligible to write at once.
    fn start_run(&self, inner: &mut Inner, runtime: &Handle) {
        if let Some(old) = inner.stop(Phase::Cancelled) {
            debug!("{}: superseded run {}", self.shared.name, old.0);
        }

        let id = inner.seq.next_id();
        let cancel = CancellationToken::new();
        inner.writer = Some(id);
        inner.state = TimerState::running(self.shared.config.total_seconds());

        let task = runtime.spawn(run_countdown(
            Arc::clone(&self.shared),
            id,
            cancel.clone(),
        ));
        inner.current = Some(RunHandle {
            id,
            cancel,
            _task: task,
        });

        info!(
            "{}: run {} started from {}s",
            self.shared.name,
            id.0,
            self.shared.config.total_seconds()
        );
    }
}

impl Drop for CountdownController {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            error!("{}: shutdown on drop failed: {}", self.shared.name, e);
        }
    }
}

/// One run: `total + 1` ticks from `total` down to zero, then the end text
async fn run_countdown(shared: Arc<Shared>, id: RunId, cancel: CancellationToken) {
    let config = &shared.config;

    for timer in (0..=config.total_seconds()).rev() {
        if !shared.tick(id, &cancel, timer) {
            debug!("{}: run {} stopped before {}s", shared.name, id.0, timer);
            return;
        }

        let text = format_countdown(timer);
        debug!("{}: run {} tick {}", shared.name, id.0, text);
        shared.post_display(Some(id), text, config.color_for(timer));

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("{}: run {} cancelled after {}s", shared.name, id.0, timer);
                return;
            }
            _ = sleep(TICK) => {}
        }
    }

    if !shared.complete(id, &cancel) {
        return;
    }
    shared.post_display(
        Some(id),
        config.end_text().to_string(),
        config.end_text_color(),
    );
    info!("{}: run {} completed", shared.name, id.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::InlineDispatcher;

    struct Discard;

    impl DisplaySink for Discard {
        fn set_text(&mut self, _text: &str) {}
        fn set_text_color(&mut self, _color: Color) {}
    }

    fn controller(total: i64, mode: ActivationMode) -> CountdownController {
        CountdownController::new(
            "test",
            TimerConfig::new(total).unwrap(),
            mode,
            Discard,
            Arc::new(InlineDispatcher),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn starts_idle_at_full_length() {
        let timer = controller(30, ActivationMode::Restart);
        assert_eq!(timer.state().unwrap(), TimerState::idle(30));
    }

    #[test]
    fn activation_outside_a_runtime_is_an_error() {
        let timer = controller(30, ActivationMode::Restart);
        assert_eq!(timer.on_activate(), Err(TimerError::NoRuntime));
        assert_eq!(timer.state().unwrap(), TimerState::idle(30));
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_when_idle_is_a_no_op() {
        let timer = controller(30, ActivationMode::Restart);
        timer.shutdown().unwrap();
        timer.shutdown().unwrap();
        assert_eq!(timer.state().unwrap().phase, Phase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_cancels_running_countdown() {
        let timer = controller(30, ActivationMode::Restart);
        timer.on_activate().unwrap();
        sleep(Duration::from_millis(2500)).await;

        timer.shutdown().unwrap();
        let state = timer.state().unwrap();
        assert_eq!(state.phase, Phase::Cancelled);
        assert_eq!(state.remaining_seconds, 28);

        sleep(Duration::from_secs(10)).await;
        assert_eq!(timer.state().unwrap().remaining_seconds, 28);
    }

    #[tokio::test(start_paused = true)]
    async fn completes_after_total_plus_one_ticks() {
        let timer = controller(3, ActivationMode::Restart);
        timer.on_activate().unwrap();

        sleep(Duration::from_millis(3500)).await;
        assert!(timer.state().unwrap().is_running());

        sleep(Duration::from_secs(1)).await;
        assert_eq!(
            timer.state().unwrap(),
            TimerState {
                phase: Phase::Completed,
                remaining_seconds: 0,
            }
        );
    }
}
