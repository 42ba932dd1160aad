//! Daily quiz prompt scheduler.
//!
//! [`next_fire_after`] computes the next wall-clock fire instant
//! (today at the configured time, or tomorrow if that has already
//! passed).  [`run_daily`] sleeps until then, sends a
//! [`QuizCommand::Start`] for the `"all"` pool, and loops.
//!
//! The caller only spawns this task when the daily prompt is enabled
//! and a destination is configured; an unset destination means the
//! feature is off and no loop exists.

use chrono::{DateTime, Duration as ChronoDuration, Local, NaiveTime};
use tokio::sync::mpsc;

use crate::quiz::QuizCommand;

/// User id the scheduler acts as when starting a quiz.
pub const SCHEDULER_USER: &str = "daily-prompt";

// ---------------------------------------------------------------------------
// next_fire_after
// ---------------------------------------------------------------------------

/// The next instant at wall-clock time `at`, strictly after `now`.
///
/// If today's `at` has already passed (or is exactly `now`), the fire
/// moves to tomorrow.
pub fn next_fire_after(now: DateTime<Local>, at: NaiveTime) -> DateTime<Local> {
    let mut candidate = now
        .date_naive()
        .and_time(at)
        .and_local_timezone(Local)
        .earliest()
        .unwrap_or(now);
    if candidate <= now {
        candidate += ChronoDuration::days(1);
    }
    candidate
}

// ---------------------------------------------------------------------------
// run_daily
// ---------------------------------------------------------------------------

/// Fire a `Start { level: "all" }` once a day at `at`, forever.
///
/// Ends when the command channel closes (engine gone).
pub async fn run_daily(at: NaiveTime, command_tx: mpsc::Sender<QuizCommand>) {
    loop {
        let now = Local::now();
        let fire_at = next_fire_after(now, at);
        let wait = (fire_at - now)
            .to_std()
            .unwrap_or(std::time::Duration::ZERO);
        log::info!("next daily quiz at {fire_at} (in {}s)", wait.as_secs());

        tokio::time::sleep(wait).await;

        let command = QuizCommand::Start {
            level: "all".to_string(),
            user: SCHEDULER_USER.to_string(),
        };
        if command_tx.send(command).await.is_err() {
            log::warn!("engine gone — stopping daily scheduler");
            return;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn fires_later_today_when_time_not_yet_passed() {
        let now = local(2026, 8, 26, 6, 30, 0);
        let at = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let fire = next_fire_after(now, at);
        assert_eq!(fire, local(2026, 8, 26, 8, 0, 0));
    }

    #[test]
    fn fires_tomorrow_when_time_already_passed() {
        let now = local(2026, 8, 26, 9, 15, 0);
        let at = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let fire = next_fire_after(now, at);
        assert_eq!(fire, local(2026, 8, 27, 8, 0, 0));
    }

    #[test]
    fn exact_boundary_moves_to_tomorrow() {
        let now = local(2026, 8, 26, 8, 0, 0);
        let at = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let fire = next_fire_after(now, at);
        assert_eq!(fire, local(2026, 8, 27, 8, 0, 0));
    }

    #[test]
    fn fire_is_always_strictly_in_the_future() {
        let at = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        let now = Local::now();
        assert!(next_fire_after(now, at) > now);
    }
}
