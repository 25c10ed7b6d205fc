//! Software clock and recurring alarms for a polling control loop.
//!
//! An [`AlarmManager`] counts seconds from a free running millisecond
//! [`Monotonic`] source. It is periodically corrected with
//! [`AlarmManager::sync`] from an RTC read, and fires alarms from
//! [`AlarmManager::process_alarms`].
#![deny(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod alarm;
mod manager;

pub mod monotonic {
    /// Free running millisecond counter, allowed to wrap.
    pub trait Monotonic {
        fn millis(&self) -> u32;
    }

    impl<T: Monotonic + ?Sized> Monotonic for &T {
        fn millis(&self) -> u32 {
            (**self).millis()
        }
    }
}

pub use manager::{AlarmError, AlarmId, AlarmManager, AlarmPeriod, MIN_PERIOD_SECONDS};
pub use monotonic::Monotonic;
pub use rtc_datetime::RtcDateTime;
