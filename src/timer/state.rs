//! Timer state structure and run bookkeeping

use serde::{Deserialize, Serialize};

/// Where a controller is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Not ticking. Either never started or paused by a toggle.
    Idle,
    Running,
    /// Stopped by `shutdown()` while a run was in flight
    Cancelled,
    Completed,
}

/// What an activation does while a run is already in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationMode {
    /// Cancel the current run and start over from the full length
    Restart,
    /// Cancel the current run and stay idle at the last value
    Toggle,
}

/// Snapshot of a controller's countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub phase: Phase,
    pub remaining_seconds: u32,
}

impl TimerState {
    /// Create an idle state showing the full length
    pub fn idle(total_seconds: u32) -> Self {
        Self {
            phase: Phase::Idle,
            remaining_seconds: total_seconds,
        }
    }

    /// Create a running state at the start of a run
    pub fn running(total_seconds: u32) -> Self {
        Self {
            phase: Phase::Running,
            remaining_seconds: total_seconds,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}

/// Identifies one run of the countdown loop. Ids only grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RunId(pub u64);

#[derive(Debug, Default)]
pub struct RunSeq {
    next: u64,
}

impl RunSeq {
    pub fn next_id(&mut self) -> RunId {
        self.next += 1;
        RunId(self.next)
    }
}
