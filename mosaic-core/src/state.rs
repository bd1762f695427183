//! Everything the engine remembers between events.
use crate::models::{DragState, MaskRegistry, MonitorId, SwapLedger, WindowId, WorkspaceId};
use crate::utils::timer::Timer;
use tokio::time::{Duration, Instant};

/// A relocated window waiting to be tiled on its new workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settle {
    pub window: WindowId,
    pub workspace: WorkspaceId,
    /// Workspace the window was evicted from.
    pub origin: WorkspaceId,
    pub monitor: MonitorId,
    /// Focus the window once it is placed.
    pub focus: bool,
}

#[derive(Debug, Default)]
pub struct State {
    pub ledger: SwapLedger,
    pub masks: MaskRegistry,
    pub drag: DragState,
    pub(crate) drag_timer: Timer,
    settles: Vec<(Instant, Settle)>,
}

impl State {
    pub(crate) fn schedule_settle(&mut self, settle: Settle, delay: Duration) {
        self.settles.push((Instant::now() + delay, settle));
    }

    #[must_use]
    pub fn next_settle(&self) -> Option<Instant> {
        self.settles.iter().map(|(deadline, _)| *deadline).min()
    }

    /// Removes and returns every settle step due at `now`, oldest first.
    pub(crate) fn take_due_settles(&mut self, now: Instant) -> Vec<Settle> {
        let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.settles)
            .into_iter()
            .partition(|(deadline, _)| *deadline <= now);
        self.settles = waiting;
        due.into_iter().map(|(_, settle)| settle).collect()
    }

    #[cfg(test)]
    pub(crate) fn pending_settles(&self) -> impl Iterator<Item = &Settle> {
        self.settles.iter().map(|(_, settle)| settle)
    }

    /// Drops every timer and every piece of per-drag state.
    pub(crate) fn cancel_timers(&mut self) {
        self.drag_timer.cancel();
        self.drag = DragState::Idle;
        self.settles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(window: u64) -> Settle {
        Settle {
            window: WindowId(window),
            workspace: 1,
            origin: 0,
            monitor: 0,
            focus: false,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn settles_come_due_in_order() {
        let mut state = State::default();
        state.schedule_settle(settle(1), Duration::from_millis(50));
        state.schedule_settle(settle(2), Duration::from_millis(80));
        assert_eq!(state.take_due_settles(Instant::now()), vec![]);

        tokio::time::advance(Duration::from_millis(60)).await;
        assert_eq!(state.take_due_settles(Instant::now()), vec![settle(1)]);
        assert_eq!(state.pending_settles().count(), 1);

        tokio::time::advance(Duration::from_millis(60)).await;
        assert_eq!(state.take_due_settles(Instant::now()), vec![settle(2)]);
        assert_eq!(state.next_settle(), None);
    }

    #[test]
    fn cancelling_clears_every_timer() {
        let mut state = State::default();
        state.schedule_settle(settle(1), Duration::from_millis(50));
        state.drag_timer.arm(Duration::from_millis(50));
        state.cancel_timers();
        assert_eq!(state.next_settle(), None);
        assert!(!state.drag_timer.is_armed());
    }
}
