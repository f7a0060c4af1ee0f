//! Server-side print trigger.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;

use super::PrintAction;
use crate::error::ReceiptError;

const IDLE: u8 = 0;
const SCHEDULED: u8 = 1;
const TRIGGERED: u8 = 2;
const CANCELLED: u8 = 3;

/// Where a trigger is in its one-way lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    Idle,
    Scheduled,
    Triggered,
    Cancelled,
}

impl TriggerState {
    fn from_u8(value: u8) -> Self {
        match value {
            IDLE => TriggerState::Idle,
            SCHEDULED => TriggerState::Scheduled,
            TRIGGERED => TriggerState::Triggered,
            _ => TriggerState::Cancelled,
        }
    }
}

/// A print request waiting to be scheduled.
///
/// `schedule` consumes the trigger, so one trigger fires at most once.
///
/// ## Example
///
/// ```no_run
/// use advisory_receipt::print::{CommandAction, PrintTrigger, TriggerState};
///
/// # async fn example() -> Result<(), advisory_receipt::ReceiptError> {
/// let action = CommandAction::new("lp").arg("/tmp/ADV-1.html");
/// let mut handle = PrintTrigger::default().schedule(action);
///
/// assert_eq!(handle.finished().await?, TriggerState::Triggered);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PrintTrigger {
    delay: Duration,
    state: Arc<AtomicU8>,
}

impl PrintTrigger {
    /// Time between render and print.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(800);

    /// Create an idle trigger with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: Arc::new(AtomicU8::new(IDLE)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn state(&self) -> TriggerState {
        TriggerState::from_u8(self.state.load(Ordering::SeqCst))
    }

    /// Schedule `action` to fire after the delay.
    ///
    /// Must be called from within a Tokio runtime. Dropping the returned
    /// handle before the timer fires cancels the print.
    pub fn schedule<A: PrintAction>(self, action: A) -> PrintHandle {
        self.state.store(SCHEDULED, Ordering::SeqCst);
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "print scheduled");

        let state = self.state.clone();
        let delay = self.delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            if state
                .compare_exchange(SCHEDULED, TRIGGERED, Ordering::SeqCst, Ordering::SeqCst)
                .is_err()
            {
                return Ok(());
            }

            tracing::info!("print triggered");
            action.fire().await
        });

        PrintHandle {
            state: self.state,
            task: Some(task),
        }
    }
}

impl Default for PrintTrigger {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

/// Handle to a scheduled print, tied to the lifetime of the view.
#[derive(Debug)]
pub struct PrintHandle {
    state: Arc<AtomicU8>,
    task: Option<JoinHandle<Result<(), ReceiptError>>>,
}

impl PrintHandle {
    pub fn state(&self) -> TriggerState {
        TriggerState::from_u8(self.state.load(Ordering::SeqCst))
    }

    /// Cancel the print if it has not fired yet.
    ///
    /// Returns `true` if this call prevented the print. Once the action has
    /// started it runs to completion.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self
            .state
            .compare_exchange(SCHEDULED, CANCELLED, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok();

        if cancelled {
            if let Some(task) = self.task.take() {
                task.abort();
            }
            tracing::debug!("print cancelled before firing");
        }

        cancelled
    }

    /// Wait for the trigger to settle.
    ///
    /// Returns the final state, or the action's error if it fired and failed.
    pub async fn finished(&mut self) -> Result<TriggerState, ReceiptError> {
        let Some(task) = self.task.as_mut() else {
            return Ok(self.state());
        };

        let joined = task.await;
        self.task = None;

        match joined {
            Ok(result) => result.map(|()| self.state()),
            Err(e) if e.is_cancelled() => Ok(self.state()),
            Err(e) => Err(ReceiptError::Print(format!("Print task failed: {}", e))),
        }
    }
}

impl Drop for PrintHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;

    #[derive(Clone, Default)]
    struct Counter(Arc<AtomicUsize>);

    impl Counter {
        fn count(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PrintAction for Counter {
        async fn fire(&self) -> Result<(), ReceiptError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct Failing;

    #[async_trait]
    impl PrintAction for Failing {
        async fn fire(&self) -> Result<(), ReceiptError> {
            Err(ReceiptError::Print("printer offline".into()))
        }
    }

    #[test]
    fn test_new_trigger_is_idle() {
        let trigger = PrintTrigger::default();
        assert_eq!(trigger.state(), TriggerState::Idle);
        assert_eq!(trigger.delay(), Duration::from_millis(800));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_after_delay() {
        let counter = Counter::default();
        let mut handle = PrintTrigger::default().schedule(counter.clone());
        assert_eq!(handle.state(), TriggerState::Scheduled);

        tokio::time::sleep(Duration::from_millis(799)).await;
        assert_eq!(counter.count(), 0);

        assert_eq!(handle.finished().await.unwrap(), TriggerState::Triggered);
        assert_eq!(counter.count(), 1);

        // Settled handles stay settled
        assert_eq!(handle.finished().await.unwrap(), TriggerState::Triggered);
        assert!(!handle.cancel());
        assert_eq!(counter.count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_delay() {
        let counter = Counter::default();
        let mut handle = PrintTrigger::default().schedule(counter.clone());

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(handle.cancel());
        assert_eq!(handle.state(), TriggerState::Cancelled);
        assert!(!handle.cancel());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(counter.count(), 0);
        assert_eq!(handle.finished().await.unwrap(), TriggerState::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let counter = Counter::default();
        let handle = PrintTrigger::default().schedule(counter.clone());
        drop(handle);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(counter.count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_action_error_is_reported() {
        let mut handle = PrintTrigger::new(Duration::from_millis(10)).schedule(Failing);
        let err = handle.finished().await.unwrap_err();
        assert!(err.to_string().contains("printer offline"));
        assert_eq!(handle.state(), TriggerState::Triggered);
    }
}
