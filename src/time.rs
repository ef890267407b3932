use core::fmt::Debug;

/// Generic abstraction for the time source driving a countdown. Should be cheap to call.
///
/// Readings are seconds as [f64] against an arbitrary but fixed epoch. Implementations are
/// expected to be monotonically non-decreasing for the countdown arithmetic to be meaningful,
/// but ordinary wall clocks which can jump backward are accepted without validation.
pub trait ClockProvider: Debug {
    /// Current instant in seconds.
    fn now(&self) -> f64;

    /// Whether this clock is the crate's default wall-clock source. Only consulted when
    /// formatting a countdown for debug output, where the default clock is elided.
    fn is_default(&self) -> bool {
        false
    }
}
