//! Reuse pool for response envelopes
//!
//! Envelopes are checked out with [`EnvelopePool::acquire`] and come back on
//! their own when the [`PooledEnvelope`] guard drops, including during a
//! panic unwind. A returned envelope is always reset first, so a borrower
//! never sees another request's fields.

use crate::Envelope;
use parking_lot::Mutex;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Pool of idle envelopes
///
/// Starts empty and only allocates when no idle envelope is available.
/// At most `max_idle` envelopes are retained; extras are dropped on return.
#[derive(Debug)]
pub struct EnvelopePool {
    idle: Mutex<Vec<Envelope>>,
    max_idle: usize,
    created: AtomicUsize,
}

impl EnvelopePool {
    /// Default retention bound
    pub const DEFAULT_MAX_IDLE: usize = 1024;

    /// Create an empty pool retaining at most `max_idle` envelopes
    pub fn new(max_idle: usize) -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
            max_idle,
            created: AtomicUsize::new(0),
        }
    }

    /// Check out an envelope, allocating a fresh one if none is idle
    pub fn acquire(&self) -> PooledEnvelope<'_> {
        let reused = self.idle.lock().pop();
        let envelope = match reused {
            Some(envelope) => envelope,
            None => {
                let total = self.created.fetch_add(1, Ordering::Relaxed) + 1;
                tracing::trace!(total, "envelope pool grew");
                Envelope::default()
            }
        };
        PooledEnvelope {
            pool: self,
            envelope,
        }
    }

    fn release(&self, mut envelope: Envelope) {
        envelope.reset();
        let mut idle = self.idle.lock();
        if idle.len() < self.max_idle {
            idle.push(envelope);
        }
    }

    /// Number of envelopes currently idle in the pool
    pub fn idle(&self) -> usize {
        self.idle.lock().len()
    }

    /// Number of envelopes allocated over the pool's lifetime
    pub fn created(&self) -> usize {
        self.created.load(Ordering::Relaxed)
    }

    pub fn max_idle(&self) -> usize {
        self.max_idle
    }

    /// Run `f` over every idle envelope (diagnostics and tests)
    pub fn inspect_idle<F: FnMut(&Envelope)>(&self, f: F) {
        self.idle.lock().iter().for_each(f);
    }
}

impl Default for EnvelopePool {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_IDLE)
    }
}

/// Checked-out envelope; resets and returns itself to the pool on drop
#[derive(Debug)]
pub struct PooledEnvelope<'a> {
    pool: &'a EnvelopePool,
    envelope: Envelope,
}

impl Deref for PooledEnvelope<'_> {
    type Target = Envelope;

    fn deref(&self) -> &Envelope {
        &self.envelope
    }
}

impl DerefMut for PooledEnvelope<'_> {
    fn deref_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }
}

impl Drop for PooledEnvelope<'_> {
    fn drop(&mut self) {
        let envelope = std::mem::take(&mut self.envelope);
        self.pool.release(envelope);
    }
}
