use chrono::{DateTime, FixedOffset};
use std::time::Duration;

use crate::time::{ClockTime, TimeSource};

pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cadence {
    /// Sleep exactly one interval between ticks.
    #[default]
    Fixed,
    /// Sleep until the next wall-clock second boundary.
    Aligned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub at: DateTime<FixedOffset>,
    pub time: ClockTime,
}

impl Snapshot {
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        Self {
            at,
            time: ClockTime::from_timelike(&at),
        }
    }
}

/// Captures the time once per tick and holds it until the next redraw.
pub struct Ticker<S> {
    source: S,
    cadence: Cadence,
    latest: Option<Snapshot>,
    fresh: bool,
    ticks: u64,
}

impl<S: TimeSource> Ticker<S> {
    pub fn new(source: S, cadence: Cadence) -> Self {
        Self {
            source,
            cadence,
            latest: None,
            fresh: false,
            ticks: 0,
        }
    }

    /// Captures and publishes the current time, returning how long to suspend
    /// before the next tick.
    pub fn tick(&mut self) -> Duration {
        let snapshot = Snapshot::new(self.source.now());
        log::trace!("tick {} at {}", self.ticks, snapshot.at);

        self.latest = Some(snapshot);
        self.fresh = true;
        self.ticks += 1;

        match self.cadence {
            Cadence::Fixed => TICK_INTERVAL,
            Cadence::Aligned => until_next_second(&snapshot.at),
        }
    }

    pub fn latest(&self) -> Option<&Snapshot> {
        self.latest.as_ref()
    }

    /// The snapshot published since the last call, if any.
    pub fn take_fresh(&mut self) -> Option<Snapshot> {
        if std::mem::take(&mut self.fresh) {
            self.latest
        } else {
            None
        }
    }

    /// Forces the latest snapshot to be handed out again.
    pub fn republish(&mut self) {
        self.fresh = self.latest.is_some();
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }
}

fn until_next_second(at: &DateTime<FixedOffset>) -> Duration {
    let ms_since_last_sec = at.timestamp_subsec_millis().min(999);
    Duration::from_millis((1000 - ms_since_last_sec) as u64)
}
