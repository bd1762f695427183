use crate::config::Config;
use crate::display_servers::{Drawing, WindowSystem};
use crate::state::State;

/// Owns the engine state and the host seams. All handlers run on it, one at a time.
#[derive(Debug)]
pub struct Manager<C, W, D> {
    pub config: C,
    pub state: State,
    pub window_system: W,
    pub drawing: D,
    pub(crate) disabled: bool,
}

impl<C, W, D> Manager<C, W, D>
where
    C: Config,
    W: WindowSystem,
    D: Drawing,
{
    pub fn new(config: C, window_system: W, drawing: D) -> Self {
        tracing::info!("Starting mosaic layout manager");
        Self {
            config,
            state: State::default(),
            window_system,
            drawing,
            disabled: false,
        }
    }

    /// Cancels every timer, drops masks and placeholders, and stops the event loop.
    pub fn disable(&mut self) {
        tracing::info!("Disabling mosaic layout manager");
        self.state.cancel_timers();
        self.state.ledger.clear_pending();
        self.state.masks.unmask_all(&mut self.drawing);
        self.disabled = true;
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }
}

#[cfg(test)]
pub(crate) type TestManager = Manager<
    crate::config::tests::TestConfig,
    crate::display_servers::MockWindowSystem,
    crate::display_servers::MockDrawing,
>;

#[cfg(test)]
impl TestManager {
    pub fn new_test(window_system: crate::display_servers::MockWindowSystem) -> Self {
        Self::new(
            crate::config::tests::TestConfig::default(),
            window_system,
            crate::display_servers::MockDrawing::default(),
        )
    }
}
