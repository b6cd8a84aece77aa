use ratatui::Frame;
use ratatui::layout::Rect;

/// A stateful UI component.
///
/// `render` takes `&mut self` so a component can update internal
/// presentation state (scroll offsets, last-known widths) during the
/// pass. Stateless display pieces use transient wrapper structs with
/// inherent `render` methods instead.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
