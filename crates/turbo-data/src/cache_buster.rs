//! Cache-busting tokens for outbound requests.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;

/// Source of per-request tokens that defeat intermediary caches.
pub trait CacheBuster: Send + Sync {
    /// Produce the next token. Consecutive calls never repeat.
    fn next_token(&self) -> String;
}

/// Random 64-bit hex tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomBuster;

impl CacheBuster for RandomBuster {
    fn next_token(&self) -> String {
        format!("{:016x}", rand::thread_rng().gen::<u64>())
    }
}

/// Monotonic counter tokens, starting at a seed.
#[derive(Debug, Default)]
pub struct SequenceBuster {
    next: AtomicU64,
}

impl SequenceBuster {
    /// Create a counter whose first token is `seed`.
    pub fn starting_at(seed: u64) -> Self {
        Self {
            next: AtomicU64::new(seed),
        }
    }
}

impl CacheBuster for SequenceBuster {
    fn next_token(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}
