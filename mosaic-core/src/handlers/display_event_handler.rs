use super::{Config, Drawing, Manager, WindowSystem};
use crate::display_event::TilingEvent;

impl<C: Config, W: WindowSystem, D: Drawing> Manager<C, W, D> {
    /// Applies one host event to the manager.
    /// Returns true if the event changed the layout or the drag state.
    pub fn display_event_handler(&mut self, event: TilingEvent) -> bool {
        tracing::trace!("Handling {:?}", event);
        match event {
            TilingEvent::WindowCreated(id) => self.window_created_handler(id),
            TilingEvent::WindowDestroyed(window) => self.window_destroyed_handler(&window),
            TilingEvent::SizeChange(id, change) => self.size_change_handler(id, change),
            TilingEvent::SizeChanged(id) => self.size_changed_handler(id),
            TilingEvent::GrabBegin(id, op) => self.grab_begin_handler(id, op),
            TilingEvent::GrabEnd(id, op) => self.grab_end_handler(id, op),
            TilingEvent::Disable => {
                self.disable();
                false
            }
        }
    }
}
