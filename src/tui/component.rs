use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// Anything the board draws: the board itself, a column's list, the help bar.
///
/// Data comes in as fields set by the owner; the component never reaches
/// for shared state. `render` takes `&mut self` because lists keep their
/// `ListState` scroll offset in step with what was last drawn.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that reacts to input.
///
/// `Board` turns key presses into focus changes or a quit request, and
/// `ColumnList` turns them into cursor and filter updates. Both report
/// back through their own `Event` type; `None` means nothing to report.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
