/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::constants::{EAT_OFFSET_SECONDS, TIMESTAMP_FORMAT};
use chrono::{DateTime, FixedOffset, Offset, Utc};
use std::sync::Mutex;

/// Source of the current time.
///
/// The client reads the clock for token expiry checks and for the
/// `Timestamp` field of STK push requests, so tests can pin both.
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Creates a clock frozen at `now`
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Moves the clock to `now`
    pub fn set(&self, now: DateTime<Utc>) {
        if let Ok(mut guard) = self.now.lock() {
            *guard = now;
        }
    }

    /// Moves the clock forward by `delta`
    pub fn advance(&self, delta: chrono::Duration) {
        if let Ok(mut guard) = self.now.lock() {
            *guard += delta;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        match self.now.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

/// Formats `instant` as the `YYYYMMDDHHmmss` timestamp M-Pesa expects, in East Africa Time
#[must_use]
pub fn mpesa_timestamp(instant: DateTime<Utc>) -> String {
    let eat = FixedOffset::east_opt(EAT_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix());
    instant.with_timezone(&eat).format(TIMESTAMP_FORMAT).to_string()
}
