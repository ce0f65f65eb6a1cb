//! Loading screen animation timers.
//!
//! Two independent tickers run while the loading screen is shown:
//! - message tick (every `message_interval_ms`, min [`TICK_MIN_MS`]) rotates
//!   the status message;
//! - dots tick (every `dots_interval_ms`, min [`TICK_MIN_MS`]) advances the
//!   ellipsis.
//!
//! Both are cosmetic and unrelated to request progress. They stop when the
//! shutdown channel flips to `true` (the screen's `LoadingTimers` guard was
//! dropped) or when the message channel closes.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

use crate::message::Message;

/// Lower bound for both tick periods
pub(super) const TICK_MIN_MS: u64 = 50;

pub(super) fn spawn_loading_timers(
    generation: u64,
    message_interval_ms: u64,
    dots_interval_ms: u64,
    shutdown_rx: watch::Receiver<bool>,
    msg_tx: mpsc::Sender<Message>,
) {
    spawn_ticker(
        "message",
        Duration::from_millis(message_interval_ms.max(TICK_MIN_MS)),
        shutdown_rx.clone(),
        msg_tx.clone(),
        move || Message::LoadingMessageTick { generation },
    );
    spawn_ticker(
        "dots",
        Duration::from_millis(dots_interval_ms.max(TICK_MIN_MS)),
        shutdown_rx,
        msg_tx,
        move || Message::LoadingDotsTick { generation },
    );
}

fn spawn_ticker<F>(
    name: &'static str,
    period: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
    msg_tx: mpsc::Sender<Message>,
    make_msg: F,
) where
    F: Fn() -> Message + Send + 'static,
{
    tokio::spawn(async move {
        // First tick one full period after entering the loading screen
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if msg_tx.send(make_msg()).await.is_err() {
                        break;
                    }
                }
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
            }
        }

        debug!("Loading {} timer stopped", name);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LoadingTimers;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_at_configured_periods() {
        let (timers, shutdown_rx) = LoadingTimers::new();
        let (tx, mut rx) = mpsc::channel(64);
        spawn_loading_timers(5, 3000, 500, shutdown_rx, tx);

        tokio::time::sleep(Duration::from_millis(3100)).await;
        drop(timers);

        let mut message_ticks = 0;
        let mut dots_ticks = 0;
        while let Ok(msg) = rx.try_recv() {
            match msg {
                Message::LoadingMessageTick { generation } => {
                    assert_eq!(generation, 5);
                    message_ticks += 1;
                }
                Message::LoadingDotsTick { generation } => {
                    assert_eq!(generation, 5);
                    dots_ticks += 1;
                }
                other => panic!("unexpected message {:?}", other),
            }
        }
        assert_eq!(message_ticks, 1);
        assert_eq!(dots_ticks, 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timers_stop_when_guard_dropped() {
        let (timers, shutdown_rx) = LoadingTimers::new();
        let (tx, mut rx) = mpsc::channel(64);
        spawn_loading_timers(1, 3000, 500, shutdown_rx, tx);

        drop(timers);
        tokio::time::sleep(Duration::from_millis(10_000)).await;

        // Both tasks exited and dropped their senders
        assert!(rx.recv().await.is_none());
    }

    #[test]
    fn test_tick_min_is_reasonable() {
        assert_eq!(TICK_MIN_MS, 50);
    }
}
