//! Cooperative cancellation for long-running pricing requests.
//!
//! A Heston sweep at 10,000 paths × 100 steps per strike can run for
//! seconds. Engines poll a [`CancellationToken`] between strikes and between
//! path batches and bail out with [`PricingError::Cancelled`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::error::PricingError;

/// Shared, clonable cancellation flag.
///
/// Clones observe the same flag, so the caller keeps one handle and passes
/// another into the engine.
///
/// # Examples
///
/// ```
/// use pricer_core::types::CancellationToken;
///
/// let token = CancellationToken::new();
/// let engine_handle = token.clone();
/// assert!(engine_handle.check().is_ok());
///
/// token.cancel();
/// assert!(engine_handle.is_cancelled());
/// assert!(engine_handle.check().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Returns `true` once cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Returns `Err(PricingError::Cancelled)` once cancellation has been requested.
    #[inline]
    pub fn check(&self) -> Result<(), PricingError> {
        if self.is_cancelled() {
            Err(PricingError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_is_not_cancelled() {
        let token = CancellationToken::new();
        assert!(!token.is_cancelled());
        assert_eq!(token.check(), Ok(()));
    }

    #[test]
    fn test_clones_share_state() {
        let token = CancellationToken::new();
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
        assert_eq!(token.check(), Err(PricingError::Cancelled));
    }

    #[test]
    fn test_cancel_across_threads() {
        let token = CancellationToken::new();
        let handle = token.clone();
        std::thread::spawn(move || handle.cancel())
            .join()
            .unwrap();
        assert!(token.is_cancelled());
    }
}
