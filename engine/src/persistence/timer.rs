use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Trailing-edge debounce timer.
///
/// Each `schedule` cancels the previously armed job, so at most one job is outstanding and
/// only the last one scheduled within a quiet window runs. Must be used inside a tokio
/// runtime.
#[derive(Debug)]
pub struct CoalescingTimer {
    window: Duration,
    armed: Option<CancellationToken>,
}

impl CoalescingTimer {
    pub const DEFAULT_WINDOW: Duration = Duration::from_millis(1000);

    pub fn new(window: Duration) -> Self {
        Self {
            window,
            armed: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn schedule<F>(&mut self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.cancel() {
            log::trace!("Coalescing pending job into a new {:?} window", self.window);
        }

        let token = CancellationToken::new();
        let guard = token.clone();
        let window = self.window;

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = guard.cancelled() => {}
                _ = tokio::time::sleep(window) => {
                    job();
                    guard.cancel();
                }
            }
        });

        self.armed = Some(token);
    }

    /// Cancels the armed job, if any. Returns whether a job was still pending.
    pub fn cancel(&mut self) -> bool {
        match self.armed.take() {
            Some(token) if !token.is_cancelled() => {
                token.cancel();
                true
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
            .as_ref()
            .is_some_and(|token| !token.is_cancelled())
    }
}

impl Default for CoalescingTimer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}

impl Drop for CoalescingTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl Fn() -> Box<dyn FnOnce() + Send>) {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = count.clone();
        let make = move || {
            let count = handle.clone();
            Box::new(move || {
                count.fetch_add(1, Ordering::SeqCst);
            }) as Box<dyn FnOnce() + Send>
        };
        (count, make)
    }

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_quiet_window() {
        let (count, job) = counter();
        let mut timer = CoalescingTimer::new(Duration::from_millis(100));

        timer.schedule(job());
        assert!(timer.is_armed());

        tokio::time::sleep(Duration::from_millis(99)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!timer.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn rescheduling_restarts_the_window() {
        let (count, job) = counter();
        let mut timer = CoalescingTimer::new(Duration::from_millis(100));

        for _ in 0..5 {
            timer.schedule(job());
            tokio::time::sleep(Duration::from_millis(60)).await;
        }
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_the_job() {
        let (count, job) = counter();
        let mut timer = CoalescingTimer::new(Duration::from_millis(100));

        timer.schedule(job());
        assert!(timer.cancel());
        assert!(!timer.cancel());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
