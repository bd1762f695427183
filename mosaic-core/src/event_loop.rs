use crate::config::Config;
use crate::display_event::TilingEvent;
use crate::display_servers::{Drawing, WindowSystem};
use crate::models::Manager;
use crate::utils::timer;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{Instant, MissedTickBehavior};

impl<C: Config, W: WindowSystem, D: Drawing> Manager<C, W, D> {
    /// Runs the engine until it is disabled or the host hangs up.
    ///
    /// This task is the only owner of the engine state: host events, drag ticks, settle steps
    /// and the periodic sweep are handled one at a time, each to completion. The manager is
    /// handed back once the loop ends.
    pub async fn event_loop(mut self, mut events: UnboundedReceiver<TilingEvent>) -> Self {
        let start = Instant::now();
        let mut startup = Some(start + self.config.startup_delay());
        let period = self.config.sweep_interval();
        let mut sweep = tokio::time::interval_at(start + period, period);
        sweep.set_missed_tick_behavior(MissedTickBehavior::Delay);

        while !self.disabled {
            let drag_deadline = self.state.drag_timer.deadline();
            let settle_deadline = self.state.next_settle();

            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => {
                        self.display_event_handler(event);
                    }
                    None => {
                        tracing::debug!("Event channel closed");
                        self.disable();
                    }
                },
                () = timer::wait(drag_deadline) => {
                    if let Some(handle) = self.state.drag_timer.fire(Instant::now()) {
                        self.on_drag_timer(handle);
                    }
                }
                () = timer::wait(settle_deadline) => {
                    for settle in self.state.take_due_settles(Instant::now()) {
                        self.settle(settle);
                    }
                }
                () = timer::wait(startup) => {
                    startup = None;
                    self.tile_all_workspaces();
                }
                _ = sweep.tick() => self.tile_all_workspaces(),
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::display_event::{GrabOp, TilingEvent};
    use crate::display_servers::MockWindowSystem;
    use crate::models::{Manager, Point, Rect, WindowId};
    use tokio::sync::mpsc;
    use tokio::time::{sleep, Duration};

    #[tokio::test(start_paused = true)]
    async fn startup_sweep_tiles_existing_windows() {
        let mut windows = MockWindowSystem::default();
        windows.add(1, Rect::new(0, 0, 400, 200));
        windows.add(2, Rect::new(0, 0, 400, 200));
        let (tx, rx) = mpsc::unbounded_channel();
        let manager = tokio::spawn(Manager::new_test(windows).event_loop(rx));

        sleep(Duration::from_millis(200)).await;
        tx.send(TilingEvent::Disable).unwrap();
        let manager = manager.await.unwrap();
        assert!(manager.window_system.moves.is_empty());

        let mut windows = MockWindowSystem::default();
        windows.add(1, Rect::new(0, 0, 400, 200));
        windows.add(2, Rect::new(0, 0, 400, 200));
        let (tx, rx) = mpsc::unbounded_channel();
        let manager = tokio::spawn(Manager::new_test(windows).event_loop(rx));

        sleep(Duration::from_millis(350)).await;
        tx.send(TilingEvent::Disable).unwrap();
        let manager = manager.await.unwrap();
        assert_eq!(manager.window_system.frame(WindowId(1)), Rect::new(90, 150, 400, 200));
        assert_eq!(manager.window_system.frame(WindowId(2)), Rect::new(510, 150, 400, 200));
    }

    #[tokio::test(start_paused = true)]
    async fn drag_keeps_ticking_until_the_grab_ends() {
        let mut windows = MockWindowSystem::default();
        windows.add(1, Rect::new(90, 150, 400, 200));
        windows.add(2, Rect::new(510, 150, 400, 200));
        windows.pointer = Point::new(290, 250);
        let (tx, rx) = mpsc::unbounded_channel();
        let manager = tokio::spawn(Manager::new_test(windows).event_loop(rx));

        tx.send(TilingEvent::GrabBegin(WindowId(1), GrabOp::Moving))
            .unwrap();
        sleep(Duration::from_millis(120)).await;
        tx.send(TilingEvent::GrabEnd(WindowId(1), GrabOp::Moving))
            .unwrap();
        tx.send(TilingEvent::Disable).unwrap();
        let manager = manager.await.unwrap();

        // the first tick runs on grab, then one every 50ms: three passes moving window 2
        let passes = manager
            .window_system
            .moves
            .iter()
            .filter(|(id, _, _)| *id == WindowId(2))
            .count();
        assert!(passes >= 3, "only {passes} layout passes while dragging");
        assert!(!manager.state.drag.is_dragging());
        assert!(!manager.state.drag_timer.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn evicted_window_settles_on_its_new_workspace() {
        let mut windows = MockWindowSystem::default();
        windows.add(1, Rect::new(0, 0, 600, 300));
        windows.add(2, Rect::new(0, 0, 600, 300));
        let (tx, rx) = mpsc::unbounded_channel();
        let manager = tokio::spawn(Manager::new_test(windows).event_loop(rx));

        tx.send(TilingEvent::WindowCreated(WindowId(2))).unwrap();
        sleep(Duration::from_millis(100)).await;
        tx.send(TilingEvent::Disable).unwrap();
        let manager = manager.await.unwrap();

        assert_eq!(manager.window_system.frame(WindowId(2)), Rect::new(200, 100, 600, 300));
        assert_eq!(manager.window_system.focused, Some(WindowId(2)));
    }

    #[tokio::test(start_paused = true)]
    async fn closed_channel_ends_the_loop() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(tx);
        let manager = Manager::new_test(MockWindowSystem::default())
            .event_loop(rx)
            .await;
        assert!(manager.is_disabled());
    }
}
