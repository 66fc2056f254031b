pub mod drag;
pub mod touch;
pub mod wheel;

pub use drag::DragState;
pub use touch::{TouchState, average_distance, centroid};
pub use wheel::WheelState;
