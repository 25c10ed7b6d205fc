mod config;
mod source;

use std::collections::HashMap;
use std::env;
use std::thread;
use std::time::{Duration, Instant};

use clock::{AlarmId, AlarmManager, Monotonic};
use log::*;

use crate::config::Config;
use crate::source::TimeSource;

/// Milliseconds since start-up, wrapping like a firmware tick counter.
struct HostMillis {
    start: Instant,
}

impl Monotonic for HostMillis {
    fn millis(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = env::args().nth(1);
    let config = Config::load(path.as_deref())?;
    let mut source = TimeSource::open(&config.rtc)?;

    // ======== Alarm clock: Initialization ========
    let millis = HostMillis {
        start: Instant::now(),
    };
    let mut manager = AlarmManager::new(&millis, config.clock.capacity);
    if config.alarms.len() > manager.capacity() {
        warn!(
            "{} alarms configured for {} slots, growing the table",
            config.alarms.len(),
            manager.capacity()
        );
        manager.expand(config.alarms.len());
    }
    manager.sync(source.now()?);
    info!("Clock set to {}", manager.now().to_iso8601());

    let mut names: HashMap<AlarmId, &str> = HashMap::new();
    for alarm in &config.alarms {
        let (when, period) = match alarm.schedule() {
            Ok(schedule) => schedule,
            Err(err) => {
                error!("{:#}", err);
                continue;
            }
        };
        match manager.add_alarm(when, period) {
            Ok(id) => {
                if let Some(first) = manager.alarm_when(id) {
                    info!("Alarm {} '{}' first fires at {}", id, alarm.name, first);
                }
                names.insert(id, &alarm.name);
            }
            Err(err) => warn!("Alarm '{}' not scheduled: {}", alarm.name, err),
        }
    }

    // ======== Main loop ========
    let poll = Duration::from_millis(config.clock.poll_interval_ms);
    let sync_every = Duration::from_secs(config.clock.sync_interval_secs);
    let run_for = config.clock.run_for_secs.map(Duration::from_secs);
    let started = Instant::now();
    let mut last_sync = Instant::now();

    loop {
        manager.process_alarms(|manager, id, fired_at| {
            let name = names.get(&id).copied().unwrap_or("unnamed");
            match manager.alarm_when(id) {
                Some(next) => info!("Alarm {} '{}' for {}, next at {}", id, name, fired_at, next),
                None => info!("Alarm {} '{}' for {}, done", id, name, fired_at),
            }
        });

        if last_sync.elapsed() >= sync_every {
            match source.now() {
                Ok(now) => {
                    let drift = manager.sync(now);
                    if drift.abs() > 1 {
                        warn!("Clock drifted {}s since the last sync", drift);
                    } else {
                        debug!("Clock drift {}s", drift);
                    }
                }
                Err(err) => error!("Time sync failed: {:#}", err),
            }
            last_sync = Instant::now();
        }

        if run_for.is_some_and(|limit| started.elapsed() >= limit) {
            break;
        }
        thread::sleep(poll);
    }

    info!("Stopping at {}", manager.now());
    Ok(())
}
