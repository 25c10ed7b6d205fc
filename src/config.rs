use anyhow::{bail, Context};
use clock::AlarmPeriod;
use rtc_datetime::{LocaleEn, RtcDateTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_PATH: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub clock: ClockConfig,
    #[serde(default)]
    pub rtc: RtcConfig,
    #[serde(default, rename = "alarm")]
    pub alarms: Vec<AlarmConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    pub capacity: usize,
    pub poll_interval_ms: u64,
    pub sync_interval_secs: u64,
    #[serde(default)]
    pub run_for_secs: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceConfig {
    System,
    Ds3231,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RtcConfig {
    pub source: SourceConfig,
    #[serde(default = "default_i2c_bus")]
    pub i2c_bus: u8,
}

impl Default for RtcConfig {
    fn default() -> Self {
        RtcConfig {
            source: SourceConfig::System,
            i2c_bus: default_i2c_bus(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodConfig {
    SingleFire,
    Yearly,
    Monthly,
    MonthlyLastDay,
    Weekly,
    Daily,
    Hourly,
    Seconds,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlarmConfig {
    pub name: String,
    pub when: String,
    #[serde(default = "default_format")]
    pub format: String,
    pub period: PeriodConfig,
    /// Interval for `period = "seconds"`.
    #[serde(default)]
    pub seconds: Option<u32>,
}

fn default_i2c_bus() -> u8 {
    1
}

fn default_format() -> String {
    "YYYY-MM-DD hh:mm:ss".to_string()
}

impl Config {
    /// Read `path`, or `config.toml` when no path is given.
    ///
    /// A missing `config.toml` falls back to the embedded example; a missing
    /// explicit path is an error.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        let explicit = path.is_some();
        let path = path.unwrap_or(DEFAULT_PATH);

        if explicit || Path::new(path).exists() {
            let config_content =
                fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
            let config = Self::parse(&config_content).with_context(|| format!("parsing {}", path))?;
            log::info!("Loaded configuration from {}", path);
            Ok(config)
        } else {
            // Fallback to embedded defaults
            let config = Self::parse(include_str!("../config.toml.example"))?;
            log::warn!("{} not found, using embedded default configuration", path);
            Ok(config)
        }
    }

    pub fn parse(config_content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(config_content)?;
        if config.clock.poll_interval_ms == 0 {
            bail!("clock.poll_interval_ms must be above zero");
        }
        Ok(config)
    }
}

impl AlarmConfig {
    /// First fire time and repetition for the alarm manager.
    pub fn schedule(&self) -> anyhow::Result<(RtcDateTime, AlarmPeriod)> {
        let when = RtcDateTime::from_format_str(&self.format, &self.when, &LocaleEn)
            .with_context(|| {
                format!(
                    "alarm '{}': {:?} does not match {:?}",
                    self.name, self.when, self.format
                )
            })?;

        let period = match self.period {
            PeriodConfig::SingleFire => AlarmPeriod::SingleFire,
            PeriodConfig::Yearly => AlarmPeriod::Yearly,
            PeriodConfig::Monthly => AlarmPeriod::Monthly,
            PeriodConfig::MonthlyLastDay => AlarmPeriod::MonthlyLastDay,
            PeriodConfig::Weekly => AlarmPeriod::Weekly,
            PeriodConfig::Daily => AlarmPeriod::Daily,
            PeriodConfig::Hourly => AlarmPeriod::Hourly,
            PeriodConfig::Seconds => {
                let seconds = self
                    .seconds
                    .with_context(|| format!("alarm '{}': period \"seconds\" needs `seconds`", self.name))?;
                AlarmPeriod::Seconds(seconds)
            }
        };
        Ok((when, period))
    }
}
