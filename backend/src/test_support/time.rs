//! Clock and sleeper doubles for the replication worker.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;
use tokio::sync::watch;
use tracing::debug;

use crate::domain::ReplicationSleeper;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Clock that only moves when told to.
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    /// Clock frozen at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    /// Move the clock forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        let delta = match TimeDelta::from_std(delta) {
            Ok(delta) => delta,
            Err(error) => {
                panic!("failed to convert Duration to TimeDelta: {error}; delta={delta:?}")
            }
        };
        *lock(&self.0) += delta;
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *lock(&self.0)
    }
}

/// Sleeper that returns immediately and remembers what it was asked.
#[derive(Default)]
pub struct RecordingSleeper(Mutex<Vec<Duration>>);

impl RecordingSleeper {
    /// Durations requested so far, in call order.
    pub fn recorded(&self) -> Vec<Duration> {
        lock(&self.0).clone()
    }
}

#[async_trait]
impl ReplicationSleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        lock(&self.0).push(duration);
    }
}

/// Sleeper that parks every caller until [`GatedSleeper::release`] runs.
///
/// Stands in for "the delay has elapsed" in end-to-end tests.
pub struct GatedSleeper {
    open: watch::Sender<bool>,
}

impl Default for GatedSleeper {
    fn default() -> Self {
        let (open, _) = watch::channel(false);
        Self { open }
    }
}

impl GatedSleeper {
    /// Closed gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Let current and future sleepers through.
    pub fn release(&self) {
        self.open.send_replace(true);
    }
}

#[async_trait]
impl ReplicationSleeper for GatedSleeper {
    async fn sleep(&self, _duration: Duration) {
        let mut open = self.open.subscribe();
        if let Err(err) = open.wait_for(|released| *released).await {
            debug!(error = %err, "sleep gate dropped before release");
        }
    }
}
