//! Where the alarm clock takes its trusted time from

use anyhow::Context;
use chrono::Utc;
use rtc_datetime::RtcDateTime;

use crate::config::{RtcConfig, SourceConfig};

pub enum TimeSource {
    System,
    #[cfg(feature = "ds3231")]
    Ds3231(ds323x::Ds323x<rppal::i2c::I2c>),
}

impl TimeSource {
    pub fn open(config: &RtcConfig) -> anyhow::Result<Self> {
        match config.source {
            SourceConfig::System => Ok(TimeSource::System),
            #[cfg(feature = "ds3231")]
            SourceConfig::Ds3231 => {
                let i2c = rppal::i2c::I2c::with_bus(config.i2c_bus)
                    .with_context(|| format!("opening I2C bus {}", config.i2c_bus))?;
                let mut rtc = ds323x::Ds323x::new_ds3231(i2c);
                if rtc.has_been_stopped()? {
                    let now = system_time()?;
                    log::warn!("DS3231 oscillator was stopped, setting it to {}", now);
                    rtc.set_datetime(&now)?;
                }
                log::info!("DS3231 at {}, {:.2}°C", rtc.datetime()?, rtc.temperature()?.as_deg_c());
                Ok(TimeSource::Ds3231(rtc))
            }
            #[cfg(not(feature = "ds3231"))]
            SourceConfig::Ds3231 => anyhow::bail!("built without the ds3231 feature"),
        }
    }

    pub fn now(&mut self) -> anyhow::Result<RtcDateTime> {
        match self {
            TimeSource::System => system_time(),
            #[cfg(feature = "ds3231")]
            TimeSource::Ds3231(rtc) => Ok(rtc.datetime()?),
        }
    }
}

fn system_time() -> anyhow::Result<RtcDateTime> {
    RtcDateTime::try_from(Utc::now().naive_utc()).context("system clock is outside 2000-2255")
}
