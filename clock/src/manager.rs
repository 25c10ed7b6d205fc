use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace};
use rtc_datetime::RtcDateTime;

use crate::alarm::{Alarm, Recurrence};
use crate::monotonic::Monotonic;

/// Slot index returned by [`AlarmManager::add_alarm`]
pub type AlarmId = usize;

/// Shortest period accepted by [`AlarmPeriod::Seconds`].
pub const MIN_PERIOD_SECONDS: u32 = 60;

/// Requested repetition of an alarm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmPeriod {
    /// Fires once and then frees its slot.
    SingleFire,
    /// Same date and time every year. February 29th falls back to the 28th
    /// in years without one.
    Yearly,
    /// Same day every month. Days 29 to 31 clamp to the end of shorter
    /// months and come back when the month is long enough.
    Monthly,
    /// Last day of every month, starting from the month of `when`.
    MonthlyLastDay,
    Weekly,
    Daily,
    Hourly,
    /// Fixed interval of at least [`MIN_PERIOD_SECONDS`].
    Seconds(u32),
}

/// Reasons [`AlarmManager::add_alarm`] refuses an alarm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmError {
    /// `Seconds` period shorter than [`MIN_PERIOD_SECONDS`].
    PeriodInvalid,
    /// A single fire alarm whose time has already passed.
    TimePast,
    /// `when` is not a valid calendar date and time.
    TimeInvalid,
    /// Every slot holds an active alarm.
    CountExceeded,
}

impl AlarmError {
    /// Negative status code used on the wire and in logs.
    pub fn code(&self) -> i8 {
        match self {
            AlarmError::PeriodInvalid => -4,
            AlarmError::TimePast => -3,
            AlarmError::TimeInvalid => -2,
            AlarmError::CountExceeded => -1,
        }
    }
}

impl fmt::Display for AlarmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            AlarmError::PeriodInvalid => "alarm period shorter than a minute",
            AlarmError::TimePast => "alarm time already passed",
            AlarmError::TimeInvalid => "alarm time is not a valid date",
            AlarmError::CountExceeded => "no free alarm slot",
        };
        write!(f, "{} ({})", text, self.code())
    }
}

impl core::error::Error for AlarmError {}

/// Fixed table of alarms over a software clock
///
/// The clock counts whole seconds since 2000 from the elapsed milliseconds
/// of `M`. Call [`sync`](Self::sync) now and then with a trusted time to
/// remove drift, and [`process_alarms`](Self::process_alarms) from the
/// control loop at least once a second.
pub struct AlarmManager<M> {
    monotonic: M,
    alarms: Vec<Alarm>,
    /// Tick at which `seconds` was last exact.
    ms_last: u32,
    seconds: u64,
}

impl<M: Monotonic> AlarmManager<M> {
    /// Create a manager with `capacity` free slots and the clock at 2000-01-01T00:00:00.
    pub fn new(monotonic: M, capacity: usize) -> Self {
        let ms_last = monotonic.millis();
        AlarmManager {
            monotonic,
            alarms: vec![Alarm::default(); capacity],
            ms_last,
            seconds: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.alarms.len()
    }

    /// Grow the table to `count` slots. Existing ids stay valid; the table never shrinks.
    pub fn expand(&mut self, count: usize) {
        if count > self.alarms.len() {
            debug!("alarm table grows from {} to {} slots", self.alarms.len(), count);
            self.alarms.resize(count, Alarm::default());
        }
    }

    /// Adopt `now` as the current time.
    ///
    /// Returns how far `now` is ahead of the software clock in seconds,
    /// negative when the software clock ran fast.
    pub fn sync(&mut self, now: RtcDateTime) -> i32 {
        let ms_now = self.monotonic.millis();
        let seconds_now = now.total_seconds64();
        let seconds_old = self.seconds + u64::from(ms_now.wrapping_sub(self.ms_last) / 1000);

        self.ms_last = ms_now;
        self.seconds = seconds_now;

        let drift = (seconds_now as i64 - seconds_old as i64)
            .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        debug!("clock synced to {}, drift {}s", now, drift);
        drift
    }

    /// Current time of the software clock.
    pub fn now(&self) -> RtcDateTime {
        let elapsed = self.monotonic.millis().wrapping_sub(self.ms_last) / 1000;
        RtcDateTime::from_seconds64(self.seconds + u64::from(elapsed))
    }

    /// Schedule an alarm first firing at `when`.
    ///
    /// A `when` at or before the last processed second is moved one period
    /// ahead, which rejects a single fire alarm with [`AlarmError::TimePast`].
    pub fn add_alarm(&mut self, when: RtcDateTime, period: AlarmPeriod) -> Result<AlarmId, AlarmError> {
        if !when.is_valid() {
            return Err(AlarmError::TimeInvalid);
        }

        let mut when = when;
        let recurrence = match period {
            AlarmPeriod::Seconds(seconds) if seconds < MIN_PERIOD_SECONDS => {
                return Err(AlarmError::PeriodInvalid)
            }
            AlarmPeriod::Seconds(seconds) => Recurrence::Seconds(seconds),
            AlarmPeriod::SingleFire => Recurrence::SingleFire,
            AlarmPeriod::Yearly if when.month() == 2 && when.day() == 29 => Recurrence::YearlyFeb29th,
            AlarmPeriod::Yearly => Recurrence::Yearly,
            AlarmPeriod::Monthly => match when.day() {
                29 => Recurrence::Monthly29th,
                30 => Recurrence::Monthly30th,
                31 => Recurrence::Monthly31st,
                _ => Recurrence::Monthly,
            },
            AlarmPeriod::MonthlyLastDay => {
                let last = RtcDateTime::days_in_month(when.year(), when.month());
                if when.day() < last {
                    when = RtcDateTime::new(
                        when.year(),
                        when.month(),
                        last,
                        when.hour(),
                        when.minute(),
                        when.second(),
                    );
                }
                Recurrence::Monthly31st
            }
            AlarmPeriod::Weekly => Recurrence::Weekly,
            AlarmPeriod::Daily => Recurrence::Daily,
            AlarmPeriod::Hourly => Recurrence::Hourly,
        };

        let mut alarm = Alarm::new(when.total_seconds64(), recurrence);
        if alarm.when <= self.seconds {
            alarm.increment();
        }
        if !alarm.is_active() {
            return Err(AlarmError::TimePast);
        }

        let id = self
            .alarms
            .iter()
            .position(|slot| !slot.is_active())
            .ok_or(AlarmError::CountExceeded)?;
        self.alarms[id] = alarm;
        debug!(
            "alarm {} set for {} ({:?})",
            id,
            RtcDateTime::from_seconds64(alarm.when),
            recurrence
        );
        Ok(id)
    }

    /// Free the slot. Unknown ids are ignored.
    pub fn remove_alarm(&mut self, id: AlarmId) {
        if let Some(alarm) = self.alarms.get_mut(id) {
            alarm.expire();
        }
    }

    pub fn is_alarm_active(&self, id: AlarmId) -> bool {
        self.alarms.get(id).is_some_and(Alarm::is_active)
    }

    /// Next fire time of an active alarm.
    pub fn alarm_when(&self, id: AlarmId) -> Option<RtcDateTime> {
        self.alarms
            .get(id)
            .filter(|alarm| alarm.is_active())
            .map(|alarm| RtcDateTime::from_seconds64(alarm.when))
    }

    /// Advance the clock and fire every due alarm, in slot order.
    ///
    /// Nothing happens until a full second has elapsed since the last
    /// update; the leftover milliseconds carry over. Each due alarm fires at
    /// most once per call, with the instant it was scheduled for. The
    /// callback may add, remove or expand alarms, which does not change the
    /// second the remaining slots are compared against.
    pub fn process_alarms<F>(&mut self, mut callback: F)
    where
        F: FnMut(&mut Self, AlarmId, RtcDateTime),
    {
        let ms_now = self.monotonic.millis();
        let elapsed = ms_now.wrapping_sub(self.ms_last);
        if elapsed < 1000 {
            return;
        }

        self.seconds += u64::from(elapsed / 1000);
        self.ms_last = ms_now.wrapping_sub(elapsed % 1000);
        let seconds = self.seconds;

        let mut id = 0;
        while id < self.alarms.len() {
            let alarm = &mut self.alarms[id];
            if alarm.is_active() && alarm.when <= seconds {
                let fired_at = RtcDateTime::from_seconds64(alarm.when);
                alarm.increment();
                trace!("alarm {} fired for {}", id, fired_at);
                callback(self, id, fired_at);
            }
            id += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[derive(Default)]
    struct FakeMillis(Cell<u32>);

    impl FakeMillis {
        fn advance(&self, ms: u32) {
            self.0.set(self.0.get().wrapping_add(ms));
        }
    }

    impl Monotonic for FakeMillis {
        fn millis(&self) -> u32 {
            self.0.get()
        }
    }

    #[test]
    fn starts_at_origin_with_free_slots() {
        let millis = FakeMillis::default();
        let manager = AlarmManager::new(&millis, 3);
        assert_eq!(manager.capacity(), 3);
        assert_eq!(manager.now(), RtcDateTime::default());
        assert!((0..3).all(|id| !manager.is_alarm_active(id)));
    }

    #[test]
    fn now_extrapolates_whole_seconds() {
        let millis = FakeMillis::default();
        let mut manager = AlarmManager::new(&millis, 1);
        let start = RtcDateTime::new(2024, 6, 30, 12, 0, 0);
        manager.sync(start);

        millis.advance(2_999);
        assert_eq!(manager.now(), start + 2);
    }

    #[test]
    fn sync_reports_signed_drift() {
        let millis = FakeMillis::default();
        let mut manager = AlarmManager::new(&millis, 1);
        let start = RtcDateTime::new(2024, 6, 30, 12, 0, 0);
        assert!(manager.sync(start) > 0);

        millis.advance(10_000);
        assert_eq!(manager.sync(start + 12), 2);
        millis.advance(10_000);
        assert_eq!(manager.sync(start + 20), -2);
        assert_eq!(manager.now(), start + 20);
    }

    #[test]
    fn tick_counter_wraps() {
        let millis = FakeMillis(Cell::new(u32::MAX - 500));
        let mut manager = AlarmManager::new(&millis, 1);
        let start = RtcDateTime::new(2030, 1, 1, 0, 0, 0);
        manager.sync(start);

        millis.advance(1_500);
        assert_eq!(manager.now(), start + 1);
    }

    #[test]
    fn add_rejects_invalid_time_and_short_periods() {
        let millis = FakeMillis::default();
        let mut manager = AlarmManager::new(&millis, 2);
        assert_eq!(
            manager.add_alarm(RtcDateTime::new(2024, 2, 30, 0, 0, 0), AlarmPeriod::Daily),
            Err(AlarmError::TimeInvalid)
        );
        assert_eq!(
            manager.add_alarm(RtcDateTime::new(2024, 2, 1, 0, 0, 0), AlarmPeriod::Seconds(59)),
            Err(AlarmError::PeriodInvalid)
        );
        assert_eq!(
            manager.add_alarm(RtcDateTime::new(2024, 2, 1, 0, 0, 0), AlarmPeriod::Seconds(60)),
            Ok(0)
        );
    }

    #[test]
    fn past_single_fire_is_rejected_and_past_repeat_moves_on() {
        let millis = FakeMillis::default();
        let mut manager = AlarmManager::new(&millis, 2);
        let now = RtcDateTime::new(2024, 6, 30, 12, 0, 0);
        manager.sync(now);

        assert_eq!(
            manager.add_alarm(now, AlarmPeriod::SingleFire),
            Err(AlarmError::TimePast)
        );
        let id = manager.add_alarm(now - 60, AlarmPeriod::Hourly).unwrap();
        assert_eq!(manager.alarm_when(id), Some(now + 3_540));
    }

    #[test]
    fn last_day_of_month_moves_to_the_end() {
        let millis = FakeMillis::default();
        let mut manager = AlarmManager::new(&millis, 1);
        let id = manager
            .add_alarm(RtcDateTime::new(2024, 2, 10, 8, 0, 0), AlarmPeriod::MonthlyLastDay)
            .unwrap();
        assert_eq!(manager.alarm_when(id), Some(RtcDateTime::new(2024, 2, 29, 8, 0, 0)));
    }

    #[test]
    fn remove_ignores_unknown_ids() {
        let millis = FakeMillis::default();
        let mut manager = AlarmManager::new(&millis, 1);
        manager.remove_alarm(7);
        assert!(!manager.is_alarm_active(7));
        assert_eq!(manager.alarm_when(7), None);
    }

    #[test]
    fn nothing_happens_below_a_second() {
        let millis = FakeMillis::default();
        let mut manager = AlarmManager::new(&millis, 1);
        manager.sync(RtcDateTime::new(2024, 1, 1, 0, 0, 0));
        manager
            .add_alarm(RtcDateTime::new(2024, 1, 1, 0, 0, 1), AlarmPeriod::SingleFire)
            .unwrap();

        let mut fired = 0;
        millis.advance(999);
        manager.process_alarms(|_, _, _| fired += 1);
        assert_eq!(fired, 0);

        millis.advance(1);
        manager.process_alarms(|_, _, _| fired += 1);
        assert_eq!(fired, 1);
    }

    #[test]
    fn expand_keeps_existing_alarms() {
        let millis = FakeMillis::default();
        let mut manager = AlarmManager::new(&millis, 1);
        let when = RtcDateTime::new(2024, 1, 1, 0, 0, 0);
        assert_eq!(manager.add_alarm(when, AlarmPeriod::Daily), Ok(0));
        assert_eq!(manager.add_alarm(when, AlarmPeriod::Daily), Err(AlarmError::CountExceeded));

        manager.expand(0);
        assert_eq!(manager.capacity(), 1);
        manager.expand(3);
        assert_eq!(manager.capacity(), 3);
        assert!(manager.is_alarm_active(0));
        assert_eq!(manager.add_alarm(when, AlarmPeriod::Daily), Ok(1));
    }

    #[test]
    fn error_codes() {
        assert_eq!(AlarmError::PeriodInvalid.code(), -4);
        assert_eq!(AlarmError::TimePast.code(), -3);
        assert_eq!(AlarmError::TimeInvalid.code(), -2);
        assert_eq!(AlarmError::CountExceeded.code(), -1);
        assert_eq!(AlarmError::CountExceeded.to_string(), "no free alarm slot (-1)");
    }
}
