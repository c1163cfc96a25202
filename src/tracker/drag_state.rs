/// Drag interaction lifecycle for the tracked sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No pointer captured, input is ignored
    #[default]
    Idle,
    /// Pointer captured, move events feed the motion estimate
    Dragging,
}
