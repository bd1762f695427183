use std::time::Duration;

/// Tunables the engine reads from whoever embeds it.
///
/// Every method has the stock value as its default, so an implementor only overrides what the
/// user actually configured.
pub trait Config {
    /// Gap in pixels between neighbouring windows and between rows.
    fn window_spacing(&self) -> i32 {
        8
    }

    /// Period of the re-layout tick while a window is dragged.
    fn drag_tick(&self) -> Duration {
        Duration::from_millis(50)
    }

    /// Delay before a relocated window is tiled on its new workspace.
    fn settle_delay(&self) -> Duration {
        Duration::from_millis(50)
    }

    /// Delay before the first full sweep after start.
    fn startup_delay(&self) -> Duration {
        Duration::from_millis(300)
    }

    /// Period of the full re-tile sweep (covers suspend/resume and missed events).
    fn sweep_interval(&self) -> Duration {
        Duration::from_secs(5 * 60)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::Config;

    #[allow(clippy::module_name_repetitions)]
    #[derive(Debug, Clone)]
    pub struct TestConfig {
        pub spacing: i32,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self { spacing: 20 }
        }
    }

    impl Config for TestConfig {
        fn window_spacing(&self) -> i32 {
            self.spacing
        }
    }

    #[test]
    fn defaults_match_the_stock_tunables() {
        struct Stock;
        impl Config for Stock {}
        assert_eq!(Stock.window_spacing(), 8);
        assert_eq!(Stock.drag_tick().as_millis(), 50);
        assert_eq!(Stock.sweep_interval().as_secs(), 300);
    }
}
