//! Heading-change classification.
//!
//! # Bands
//!
//! With `d` the signed change from [`angle_delta`]:
//!
//! | magnitude of `d` | `d > 0`            | `d <= 0`          |
//! |------------------|--------------------|-------------------|
//! | `< 10`           | Continue           | Continue          |
//! | `[10, 60)`       | Turn slight right  | Turn slight left  |
//! | `[60, 120)`      | Turn right         | Turn left         |
//! | `[120, 179)`     | Turn sharp right   | Turn sharp left   |
//! | `>= 179`         | U-turn             | U-turn            |
//!
//! Each band is closed at its lower edge, so exactly 10° is already
//! "slight" and exactly 60° is already a plain turn.

use std::fmt;

/// Below this magnitude the change is not worth mentioning.
pub const CONTINUE_BELOW: f64 = 10.0;
pub const SLIGHT_BELOW:   f64 = 60.0;
pub const TURN_BELOW:     f64 = 120.0;
pub const SHARP_BELOW:    f64 = 179.0;

/// One of the eight turn instructions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    Continue,
    SlightRight,
    Right,
    SharpRight,
    SlightLeft,
    Left,
    SharpLeft,
    UTurn,
}

impl Turn {
    /// The English instruction, as it appears at the start of a directions line.
    pub fn as_str(self) -> &'static str {
        match self {
            Turn::Continue    => "Continue",
            Turn::SlightRight => "Turn slight right",
            Turn::Right       => "Turn right",
            Turn::SharpRight  => "Turn sharp right",
            Turn::SlightLeft  => "Turn slight left",
            Turn::Left        => "Turn left",
            Turn::SharpLeft   => "Turn sharp left",
            Turn::UTurn       => "U-turn",
        }
    }

    /// The same magnitude turned the other way.  `Continue` and `UTurn` are
    /// their own mirrors.
    pub fn mirror(self) -> Turn {
        match self {
            Turn::SlightRight => Turn::SlightLeft,
            Turn::Right       => Turn::Left,
            Turn::SharpRight  => Turn::SharpLeft,
            Turn::SlightLeft  => Turn::SlightRight,
            Turn::Left        => Turn::Right,
            Turn::SharpLeft   => Turn::SharpRight,
            other             => other,
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signed change from `old_heading` to `new_heading`, in `(-180, 180]`.
///
/// Both inputs are compass headings in `[0, 360)`.  Positive means turning
/// clockwise (right).  An exact reversal always reports `+180`, so
/// `angle_delta(180.0, 0.0)` is `180.0`, never `-180.0`.
pub fn angle_delta(old_heading: f64, new_heading: f64) -> f64 {
    let d = new_heading - old_heading;
    if d <= -180.0 {
        d + 360.0
    } else if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

/// Map a signed delta from [`angle_delta`] onto a [`Turn`].
///
/// Zero and negative deltas take the left column; both sides agree on
/// `Continue` and `UTurn`, so the tie only matters inside those bands.
pub fn classify(delta: f64) -> Turn {
    let magnitude = delta.abs();
    let right = delta > 0.0;
    if magnitude < CONTINUE_BELOW {
        Turn::Continue
    } else if magnitude < SLIGHT_BELOW {
        if right { Turn::SlightRight } else { Turn::SlightLeft }
    } else if magnitude < TURN_BELOW {
        if right { Turn::Right } else { Turn::Left }
    } else if magnitude < SHARP_BELOW {
        if right { Turn::SharpRight } else { Turn::SharpLeft }
    } else {
        Turn::UTurn
    }
}

/// The instruction for changing from `old_heading` to `new_heading`.
///
/// ```
/// use gr_directions::{compute_turn_instruction, Turn};
///
/// assert_eq!(compute_turn_instruction(0.0, 45.0), Turn::SlightRight);
/// assert_eq!(compute_turn_instruction(10.0, 350.0), Turn::SlightLeft);
/// assert_eq!(compute_turn_instruction(0.0, 180.0).to_string(), "U-turn");
/// ```
pub fn compute_turn_instruction(old_heading: f64, new_heading: f64) -> Turn {
    classify(angle_delta(old_heading, new_heading))
}
