//! Injectable delay abstraction for simulated typing.
//!
//! The widget paces replies with fixed delays. Hiding the timer behind
//! a trait lets tests resolve delays instantly and assert on the
//! requested durations.

use std::sync::Mutex;
use std::time::Duration;

use futures::future::BoxFuture;

/// Sleep provider used to pace widget replies.
///
/// Sleeps are never cancelled; every pending reply completes.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()>;
}

/// Real clock backed by tokio.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// Test sleeper: resolves immediately and records each requested
/// duration so tests can assert pacing deterministically.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    slept: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Durations requested so far, in call order.
    pub fn slept(&self) -> Vec<Duration> {
        self.slept
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()> {
        self.slept
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(duration);
        Box::pin(futures::future::ready(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sleeper_records_in_order() {
        let sleeper = RecordingSleeper::new();
        tokio_test::block_on(sleeper.sleep(Duration::from_millis(1200)));
        tokio_test::block_on(sleeper.sleep(Duration::from_millis(1000)));

        assert_eq!(
            sleeper.slept(),
            vec![Duration::from_millis(1200), Duration::from_millis(1000)]
        );
    }

    #[test]
    fn test_tokio_sleeper_completes() {
        tokio_test::block_on(async {
            TokioSleeper.sleep(Duration::from_millis(1)).await;
        });
    }
}
