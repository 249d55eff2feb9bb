//! Live "time alive" counter.
//!
//! [`elapsed_totals`] is a pure snapshot. [`run_live`] is the repeating
//! timer around it: the caller supplies the clock, the sink that displays
//! each snapshot and the future that cancels the loop.

use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;

use chrono::NaiveDateTime;
use serde::Serialize;
use tokio::time::{MissedTickBehavior, interval};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElapsedTotals {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Whole units elapsed from `birth` to `now`, floored.
pub fn elapsed_totals(birth: NaiveDateTime, now: NaiveDateTime) -> ElapsedTotals {
    let seconds = (now - birth).num_milliseconds().div_euclid(1000);
    let minutes = seconds.div_euclid(60);
    let hours = minutes.div_euclid(60);

    ElapsedTotals {
        days: hours.div_euclid(24),
        hours,
        minutes,
        seconds,
    }
}

/// Emits one snapshot immediately and then one per `period` until `stop`
/// resolves, the sink breaks, or `max_ticks` snapshots have been emitted.
/// Returns the number of snapshots handed to the sink, counting the one it
/// broke on. An error from `stop` ends the loop and is returned.
pub async fn run_live<C, S, F, E>(
    birth: NaiveDateTime,
    period: Duration,
    max_ticks: Option<u64>,
    mut clock: C,
    mut sink: S,
    stop: F,
) -> Result<u64, E>
where
    C: FnMut() -> NaiveDateTime,
    S: FnMut(&ElapsedTotals) -> ControlFlow<()>,
    F: Future<Output = Result<(), E>>,
{
    let mut ticker = interval(period.max(Duration::from_millis(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(stop);

    let mut emitted = 0u64;
    loop {
        if max_ticks.is_some_and(|max| emitted >= max) {
            break;
        }

        tokio::select! {
            result = &mut stop => {
                result?;
                tracing::debug!(emitted, "live counter cancelled");
                break;
            }
            _ = ticker.tick() => {
                emitted += 1;
                if sink(&elapsed_totals(birth, clock())).is_break() {
                    tracing::debug!(emitted, "live counter sink closed");
                    break;
                }
            }
        }
    }
    Ok(emitted)
}
