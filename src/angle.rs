//! Hand and tick mark angles, in degrees.
//!
//! 0° is the 3 o'clock direction and angles grow clockwise on screen, so every
//! angle carries a −90° offset to start counting from 12 o'clock.

use crate::time::ClockTime;

pub const HOUR_TICKS: usize = 12;
pub const MINUTE_TICKS: usize = 48;

const TWELVE_O_CLOCK: f32 = -90.0;

pub fn hour_angle(hours: u32, minutes: u32) -> f32 {
    hours as f32 * 30.0 + minutes as f32 * 0.5 + TWELVE_O_CLOCK
}

pub fn minute_angle(minutes: u32) -> f32 {
    minutes as f32 * 6.0 + TWELVE_O_CLOCK
}

pub fn second_angle(seconds: u32) -> f32 {
    seconds as f32 * 6.0 + TWELVE_O_CLOCK
}

/// One tick per hour, starting at 1 o'clock.
pub fn hour_ticks() -> impl Iterator<Item = f32> {
    (1..=12u32).map(|i| i as f32 * 30.0 + TWELVE_O_CLOCK)
}

/// Minute ticks that don't overlap an hour tick.
pub fn minute_ticks() -> impl Iterator<Item = f32> {
    (1..=60u32)
        .filter(|i| i % 5 != 0)
        .map(|i| i as f32 * 6.0 + TWELVE_O_CLOCK)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl From<ClockTime> for HandAngles {
    fn from(time: ClockTime) -> Self {
        Self {
            hour: hour_angle(time.hour(), time.minute()),
            minute: minute_angle(time.minute()),
            second: second_angle(time.second()),
        }
    }
}
