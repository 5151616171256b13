use chrono::{DateTime, Utc};

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeLeft {
    /// Breakdown of the time from `now` until `target`, floored to whole
    /// seconds. `None` once the target has been reached.
    pub fn between(target: DateTime<Utc>, now: DateTime<Utc>) -> Option<Self> {
        let difference_ms = (target - now).num_milliseconds();
        if difference_ms <= 0 {
            return None;
        }
        let total = difference_ms / 1000;
        Some(Self {
            days: (total / SECONDS_PER_DAY) as u32,
            hours: ((total % SECONDS_PER_DAY) / SECONDS_PER_HOUR) as u32,
            minutes: ((total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u32,
            seconds: (total % SECONDS_PER_MINUTE) as u32,
        })
    }

    pub fn total_seconds(&self) -> i64 {
        self.days as i64 * SECONDS_PER_DAY
            + self.hours as i64 * SECONDS_PER_HOUR
            + self.minutes as i64 * SECONDS_PER_MINUTE
            + self.seconds as i64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Running(TimeLeft),
    Finished,
}

/// Recomputes the remaining time from scratch on every tick and latches
/// once the target is reached.
#[derive(Debug)]
pub struct LaunchClock {
    target: DateTime<Utc>,
    time_left: TimeLeft,
    finished: bool,
}

impl LaunchClock {
    pub fn new(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let mut clock = Self {
            target,
            time_left: TimeLeft::default(),
            finished: false,
        };
        clock.tick(now);
        clock
    }

    pub fn tick(&mut self, now: DateTime<Utc>) -> Tick {
        if self.finished {
            return Tick::Finished;
        }
        match TimeLeft::between(self.target, now) {
            Some(left) => {
                self.time_left = left;
                Tick::Running(left)
            }
            None => {
                self.time_left = TimeLeft::default();
                self.finished = true;
                Tick::Finished
            }
        }
    }

    pub fn time_left(&self) -> TimeLeft {
        self.time_left
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn launch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 10, 0, 0, 0).unwrap()
    }

    #[test]
    fn breakdown_matches_floored_difference() {
        let now = launch() - Duration::milliseconds(3 * 86_400_000 + 4 * 3_600_000 + 5 * 60_000 + 6_789);
        let left = TimeLeft::between(launch(), now).unwrap();
        assert_eq!(left, TimeLeft { days: 3, hours: 4, minutes: 5, seconds: 6 });
        assert_eq!(left.total_seconds(), (launch() - now).num_milliseconds() / 1000);
    }

    #[test]
    fn sub_second_remainder_is_still_running() {
        let now = launch() - Duration::milliseconds(400);
        assert_eq!(TimeLeft::between(launch(), now), Some(TimeLeft::default()));
    }

    #[test]
    fn reached_target_has_no_breakdown() {
        assert_eq!(TimeLeft::between(launch(), launch()), None);
        assert_eq!(TimeLeft::between(launch(), launch() + Duration::days(400)), None);
    }

    #[test]
    fn clock_counts_down_each_tick() {
        let start = launch() - Duration::seconds(90);
        let mut clock = LaunchClock::new(launch(), start);
        assert_eq!(clock.time_left(), TimeLeft { days: 0, hours: 0, minutes: 1, seconds: 30 });

        let tick = clock.tick(start + Duration::seconds(31));
        assert_eq!(tick, Tick::Running(TimeLeft { days: 0, hours: 0, minutes: 0, seconds: 59 }));
        assert!(!clock.is_finished());
    }

    #[test]
    fn clock_recomputes_after_clock_jumps_backwards() {
        let start = launch() - Duration::seconds(10);
        let mut clock = LaunchClock::new(launch(), start);
        clock.tick(start + Duration::seconds(5));
        let tick = clock.tick(start - Duration::hours(1));
        assert_eq!(tick, Tick::Running(TimeLeft { days: 0, hours: 1, minutes: 0, seconds: 10 }));
    }

    #[test]
    fn clock_pins_to_zero_and_stops_after_target() {
        let mut clock = LaunchClock::new(launch(), launch() - Duration::seconds(2));
        assert_eq!(clock.tick(launch() + Duration::seconds(1)), Tick::Finished);
        assert_eq!(clock.time_left(), TimeLeft::default());
        assert!(clock.is_finished());

        // A clock moved back past the target must not revive the countdown.
        assert_eq!(clock.tick(launch() - Duration::days(1)), Tick::Finished);
        assert_eq!(clock.time_left(), TimeLeft::default());
    }

    #[test]
    fn clock_created_after_target_is_finished() {
        let clock = LaunchClock::new(launch(), launch() + Duration::minutes(1));
        assert!(clock.is_finished());
        assert_eq!(clock.time_left(), TimeLeft::default());
    }
}
