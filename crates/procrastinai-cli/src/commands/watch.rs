//! Live loop: tick the state on a fixed period and stream events.

use std::time::Duration;

use procrastinai_core::{deadline_label, format_duration, SystemClock, Ticker};
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::{print_json, CliResult, Session};

/// Drive `AppState::tick` until Ctrl-C or `max_ticks` ticks.
///
/// State is saved after every tick so a killed process loses at most one
/// period of accumulated time.
pub fn run(max_ticks: Option<u64>) -> CliResult {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(watch(max_ticks))
}

async fn watch(max_ticks: Option<u64>) -> CliResult {
    let mut session = Session::open()?;
    let clock = SystemClock;
    let period = Duration::from_millis(session.config.ticker.period_ms.max(1));

    let (tx, mut rx) = mpsc::unbounded_channel();
    let ticker = Ticker::spawn(period, move |n| {
        // Receiver gone means the loop below has exited.
        let _ = tx.send(n);
    });
    info!(period_ms = period.as_millis() as u64, "watching");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                debug!("interrupted");
                break;
            }
            tick = rx.recv() => {
                let Some(n) = tick else { break };
                for event in session.state.tick(&clock) {
                    print_json(&event)?;
                }
                let remaining = session.state.nearest_deadline(&clock);
                let elapsed = i64::try_from(session.state.timer.total_ms()).unwrap_or(i64::MAX);
                println!(
                    "[{n}] {} | {} | procrastinated {}",
                    session.state.mode(&clock),
                    deadline_label(remaining),
                    format_duration(chrono::Duration::milliseconds(elapsed)),
                );
                session.save()?;
                if max_ticks.is_some_and(|max| n >= max) {
                    break;
                }
            }
        }
    }

    ticker.stop();
    session.save()
}
