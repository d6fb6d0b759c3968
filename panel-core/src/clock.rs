//! The simulated clock: parsing and formatting of the server's naive
//! local time, and the repeating ticker that advances it.
//!
//! The displayed clock is only an approximation after the first tick. It is
//! seeded from the snapshot's localtime and advanced locally by
//! [`TICK_STEP_SECS`] once per [`TICK_PERIOD`]; it is never re-synchronized
//! with the server except on the next successful fetch.

use std::time::Duration;

use chrono::{NaiveDateTime, Timelike};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Real-time interval between ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(60);

/// Simulated seconds added per tick (1:1 with real time).
pub const TICK_STEP_SECS: i64 = 60;

/// Parse the provider's `"YYYY-MM-DD HH:MM"` localtime string. Seconds are
/// tolerated when present.
pub fn parse_localtime(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
}

/// One simulated tick forward.
pub fn advance(dt: NaiveDateTime) -> NaiveDateTime {
    dt + chrono::Duration::seconds(TICK_STEP_SECS)
}

/// 12-hour clock text like `"2:37 PM"`. Hour 0 displays as 12, minutes are
/// zero-padded.
pub fn format_clock(dt: &NaiveDateTime) -> String {
    let hour = dt.hour();
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour}:{:02} {meridiem}", dt.minute())
}

/// The composed date/time line, e.g.
/// `"2:37 PM – Sunday, 23 November 2025"`.
pub fn format_date_line(dt: &NaiveDateTime) -> String {
    format!("{} – {}", format_clock(dt), dt.format("%A, %-d %B %Y"))
}

/// A cancellable repeating task that emits one message per [`TICK_PERIOD`].
///
/// Replacing or dropping the ticker aborts its task, so restarting the clock
/// is an explicit cancel-then-start transition. The first message arrives a
/// full period after start, never immediately.
#[derive(Debug)]
pub struct ClockTicker {
    handle: JoinHandle<()>,
}

impl ClockTicker {
    pub fn start(tx: mpsc::Sender<()>) -> Self {
        Self::with_period(tx, TICK_PERIOD)
    }

    pub fn with_period(tx: mpsc::Sender<()>, period: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // interval fires once immediately; the first tick must wait a
            // full period.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
