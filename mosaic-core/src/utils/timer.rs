//! One-shot deadlines driven by the event loop.
use tokio::time::{Duration, Instant};

/// Identifies one arming of a [`Timer`]. Handles from an earlier arming never fire again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Default)]
pub struct Timer {
    armed: Option<(TimerHandle, Instant)>,
    generation: u64,
}

impl Timer {
    /// Arms the timer with a fresh handle, replacing whatever was armed before.
    pub fn arm(&mut self, delay: Duration) -> TimerHandle {
        self.generation += 1;
        let handle = TimerHandle(self.generation);
        self.armed = Some((handle, Instant::now() + delay));
        handle
    }

    /// Arms the timer again under the same handle. Refused once a newer handle was issued.
    pub fn rearm(&mut self, handle: TimerHandle, delay: Duration) -> bool {
        if handle.0 != self.generation {
            return false;
        }
        self.armed = Some((handle, Instant::now() + delay));
        true
    }

    pub fn cancel(&mut self) {
        self.armed = None;
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.armed.map(|(_, deadline)| deadline)
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Disarms and returns the handle if the deadline has passed at `now`.
    pub fn fire(&mut self, now: Instant) -> Option<TimerHandle> {
        match self.armed {
            Some((handle, deadline)) if deadline <= now => {
                self.armed = None;
                Some(handle)
            }
            _ => None,
        }
    }
}

/// Resolves at `deadline`, or never when there is none.
pub async fn wait(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
