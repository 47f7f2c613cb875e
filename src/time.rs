use chrono::{DateTime, FixedOffset, Local, Timelike};

/// Position of the hands: a 12 hour dial, so `hour` is always in `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
    second: u32,
}

impl ClockTime {
    pub const fn new(hour: u32, minute: u32, second: u32) -> Option<Self> {
        if hour < 12 && minute < 60 && second < 60 {
            Some(Self {
                hour,
                minute,
                second,
            })
        } else {
            None
        }
    }

    pub fn from_timelike<T: Timelike>(time: &T) -> Self {
        Self {
            hour: time.hour() % 12,
            minute: time.minute(),
            // leap seconds are reported as 59 + 1000ms by chrono
            second: time.second().min(59),
        }
    }

    pub const fn hour(&self) -> u32 {
        self.hour
    }

    pub const fn minute(&self) -> u32 {
        self.minute
    }

    pub const fn second(&self) -> u32 {
        self.second
    }
}

pub trait TimeSource {
    fn now(&mut self) -> DateTime<FixedOffset>;
}

/// Wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&mut self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn afternoon_hours_fold_onto_the_dial() {
        let t = NaiveTime::from_hms_opt(15, 30, 45).unwrap();
        assert_eq!(ClockTime::from_timelike(&t), ClockTime::new(3, 30, 45).unwrap());

        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        assert_eq!(ClockTime::from_timelike(&noon).hour(), 0);
    }

    #[test]
    fn leap_second_stays_on_the_dial() {
        let t = NaiveTime::from_hms_milli_opt(23, 59, 59, 1500).unwrap();
        assert_eq!(ClockTime::from_timelike(&t).second(), 59);
    }

    #[test]
    fn out_of_range_components_are_rejected() {
        assert!(ClockTime::new(11, 59, 59).is_some());
        assert!(ClockTime::new(12, 0, 0).is_none());
        assert!(ClockTime::new(0, 60, 0).is_none());
        assert!(ClockTime::new(0, 0, 60).is_none());
    }
}
