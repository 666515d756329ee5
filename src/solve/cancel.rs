use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A flag shared between a solve and its owner that asks the solve to stop.
///
/// Clones share the same flag, so a token can be cancelled from any thread.
/// Once cancelled, a token stays cancelled.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Wall-clock time allowed for a solve, measured from when it started
#[derive(Clone, Copy, Debug)]
pub(crate) struct Deadline {
    start: Instant,
    timeout: Option<Duration>,
}

impl Deadline {
    pub fn start(timeout: Option<Duration>) -> Self {
        Self {
            start: Instant::now(),
            timeout,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// A zero timeout is always expired
    pub fn is_expired(&self) -> bool {
        match self.timeout {
            Some(timeout) => self.elapsed() >= timeout,
            None => false,
        }
    }
}

/// Combines the caller's token with the deadline. Exceeding the deadline cancels the token,
/// so every worker sharing the token stops as well.
#[derive(Clone, Copy)]
pub(crate) struct StopSignal<'a> {
    token: &'a CancellationToken,
    deadline: &'a Deadline,
}

impl<'a> StopSignal<'a> {
    pub fn new(token: &'a CancellationToken, deadline: &'a Deadline) -> Self {
        Self { token, deadline }
    }

    pub fn should_stop(&self) -> bool {
        if self.token.is_cancelled() {
            return true;
        }
        if self.deadline.is_expired() {
            debug!("Deadline exceeded after {:?}", self.deadline.elapsed());
            self.token.cancel();
            return true;
        }
        false
    }

    pub fn check(&self) -> ControlFlow<()> {
        if self.should_stop() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}
