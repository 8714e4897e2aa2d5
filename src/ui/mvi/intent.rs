/// Marker for anything a reducer accepts: key presses translated by
/// `App`, finished requests, expired timers.
pub trait Intent: Send + 'static {}
