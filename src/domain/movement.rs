//! Classification of a price move relative to the previous observation.

/// Dead band inside which a move counts as unchanged.
const DEAD_BAND: f64 = 0.0001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Unchanged,
}

impl Direction {
    /// Classify a fractional change. Exactly ±0.0001 is `Unchanged`.
    pub fn classify(change: f64) -> Self {
        if change > DEAD_BAND {
            Direction::Up
        } else if change < -DEAD_BAND {
            Direction::Down
        } else {
            Direction::Unchanged
        }
    }
}

/// Fractional change from `last` to `current`.
pub fn change_fraction(last: f64, current: f64) -> f64 {
    (current - last) / last
}

/// An alert fires when the absolute fractional change reaches the threshold.
pub fn exceeds_alert_threshold(change: f64, threshold: f64) -> bool {
    change.abs() >= threshold
}
