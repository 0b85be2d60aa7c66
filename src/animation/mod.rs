/// Easing curves for time-based transitions.
pub mod ease;
