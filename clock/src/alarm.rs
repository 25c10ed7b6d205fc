use log::trace;
use rtc_datetime::{
    RtcDateTime, DAY_AS_SECONDS, HOUR_AS_SECONDS, MAX_SECONDS, MAX_YEAR, WEEK_AS_SECONDS,
};

/// How a stored alarm moves on after firing
///
/// The day-specific variants remember the requested day of month so that a
/// short month clamps only that one occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Recurrence {
    Expired,
    SingleFire,
    Yearly,
    YearlyFeb29th,
    Monthly,
    Monthly29th,
    Monthly30th,
    Monthly31st,
    Weekly,
    Daily,
    Hourly,
    Seconds(u32),
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Alarm {
    /// Next fire instant in seconds since 2000.
    pub when: u64,
    pub recurrence: Recurrence,
}

impl Default for Alarm {
    fn default() -> Self {
        Alarm {
            when: 0,
            recurrence: Recurrence::Expired,
        }
    }
}

impl Alarm {
    pub fn new(when: u64, recurrence: Recurrence) -> Self {
        Alarm { when, recurrence }
    }

    pub fn is_active(&self) -> bool {
        self.recurrence != Recurrence::Expired
    }

    pub fn expire(&mut self) {
        self.recurrence = Recurrence::Expired;
    }

    /// Advance `when` by one recurrence step.
    ///
    /// Single fire alarms expire, and so does any alarm whose next
    /// occurrence falls after 2255.
    pub fn increment(&mut self) {
        let next = match self.recurrence {
            Recurrence::Expired => return,
            Recurrence::SingleFire => None,
            Recurrence::Yearly => next_year(self.when, false),
            Recurrence::YearlyFeb29th => next_year(self.when, true),
            Recurrence::Monthly => next_month(self.when, None),
            Recurrence::Monthly29th => next_month(self.when, Some(29)),
            Recurrence::Monthly30th => next_month(self.when, Some(30)),
            Recurrence::Monthly31st => next_month(self.when, Some(31)),
            Recurrence::Weekly => Some(self.when + u64::from(WEEK_AS_SECONDS)),
            Recurrence::Daily => Some(self.when + u64::from(DAY_AS_SECONDS)),
            Recurrence::Hourly => Some(self.when + u64::from(HOUR_AS_SECONDS)),
            Recurrence::Seconds(period) => Some(self.when + u64::from(period)),
        };

        match next.filter(|&when| when <= MAX_SECONDS) {
            Some(when) => self.when = when,
            None => {
                trace!("{:?} alarm at {} expired", self.recurrence, self.when);
                self.expire();
            }
        }
    }
}

fn next_year(when: u64, feb29: bool) -> Option<u64> {
    let current = RtcDateTime::from_seconds64(when);
    let year = current.year() + 1;
    if year > MAX_YEAR {
        return None;
    }
    let day = match feb29 {
        true if RtcDateTime::is_leap_year(year) => 29,
        true => 28,
        false => current.day(),
    };
    Some(compose(&current, year, current.month(), day))
}

/// `day` is the requested day of month, or the current one when `None`.
fn next_month(when: u64, day: Option<u8>) -> Option<u64> {
    let current = RtcDateTime::from_seconds64(when);
    let (year, month) = match current.month() {
        12 => (current.year() + 1, 1),
        month => (current.year(), month + 1),
    };
    if year > MAX_YEAR {
        return None;
    }
    let day = day
        .unwrap_or(current.day())
        .min(RtcDateTime::days_in_month(year, month));
    Some(compose(&current, year, month, day))
}

fn compose(time_of_day: &RtcDateTime, year: u16, month: u8, day: u8) -> u64 {
    RtcDateTime::new(
        year,
        month,
        day,
        time_of_day.hour(),
        time_of_day.minute(),
        time_of_day.second(),
    )
    .total_seconds64()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(year: u16, month: u8, day: u8) -> u64 {
        RtcDateTime::new(year, month, day, 6, 30, 0).total_seconds64()
    }

    fn step(alarm: &mut Alarm) -> (u16, u8, u8) {
        alarm.increment();
        let when = RtcDateTime::from_seconds64(alarm.when);
        assert_eq!((when.hour(), when.minute(), when.second()), (6, 30, 0));
        (when.year(), when.month(), when.day())
    }

    #[test]
    fn single_fire_expires() {
        let mut alarm = Alarm::new(at(2024, 1, 1), Recurrence::SingleFire);
        alarm.increment();
        assert!(!alarm.is_active());
    }

    #[test]
    fn expired_alarm_stays_put() {
        let mut alarm = Alarm::default();
        alarm.increment();
        assert!(!alarm.is_active());
        assert_eq!(alarm.when, 0);
    }

    #[test]
    fn monthly_keeps_the_day() {
        let mut alarm = Alarm::new(at(2024, 11, 15), Recurrence::Monthly);
        assert_eq!(step(&mut alarm), (2024, 12, 15));
        assert_eq!(step(&mut alarm), (2025, 1, 15));
    }

    #[test]
    fn monthly_31st_clamps_and_recovers() {
        let mut alarm = Alarm::new(at(2024, 1, 31), Recurrence::Monthly31st);
        assert_eq!(step(&mut alarm), (2024, 2, 29));
        assert_eq!(step(&mut alarm), (2024, 3, 31));
        assert_eq!(step(&mut alarm), (2024, 4, 30));
        assert_eq!(step(&mut alarm), (2024, 5, 31));
    }

    #[test]
    fn monthly_29th_in_february() {
        let mut alarm = Alarm::new(at(2025, 1, 29), Recurrence::Monthly29th);
        assert_eq!(step(&mut alarm), (2025, 2, 28));
        assert_eq!(step(&mut alarm), (2025, 3, 29));
    }

    #[test]
    fn monthly_30th() {
        let mut alarm = Alarm::new(at(2025, 1, 30), Recurrence::Monthly30th);
        assert_eq!(step(&mut alarm), (2025, 2, 28));
        assert_eq!(step(&mut alarm), (2025, 3, 30));
    }

    #[test]
    fn yearly_and_feb29() {
        let mut alarm = Alarm::new(at(2024, 7, 4), Recurrence::Yearly);
        assert_eq!(step(&mut alarm), (2025, 7, 4));

        let mut alarm = Alarm::new(at(2024, 2, 29), Recurrence::YearlyFeb29th);
        assert_eq!(step(&mut alarm), (2025, 2, 28));
        assert_eq!(step(&mut alarm), (2026, 2, 28));
        assert_eq!(step(&mut alarm), (2027, 2, 28));
        assert_eq!(step(&mut alarm), (2028, 2, 29));
    }

    #[test]
    fn linear_periods() {
        let start = at(2024, 12, 31);
        for (recurrence, seconds) in [
            (Recurrence::Weekly, 604_800),
            (Recurrence::Daily, 86_400),
            (Recurrence::Hourly, 3_600),
            (Recurrence::Seconds(90), 90),
        ] {
            let mut alarm = Alarm::new(start, recurrence);
            alarm.increment();
            assert_eq!(alarm.when, start + seconds);
            assert!(alarm.is_active());
        }
    }

    #[test]
    fn expires_past_the_last_year() {
        let mut alarm = Alarm::new(at(2255, 6, 1), Recurrence::Yearly);
        alarm.increment();
        assert!(!alarm.is_active());

        let mut alarm = Alarm::new(at(2255, 12, 1), Recurrence::Monthly);
        alarm.increment();
        assert!(!alarm.is_active());

        let mut alarm = Alarm::new(MAX_SECONDS - 10, Recurrence::Hourly);
        alarm.increment();
        assert!(!alarm.is_active());
    }
}
