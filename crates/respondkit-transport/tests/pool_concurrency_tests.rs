//! Concurrency tests for the envelope pool
//!
//! These tests verify that concurrent checkouts never hand the same envelope
//! to two borrowers and that every returned envelope is reset.

use respondkit_transport::EnvelopePool;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_concurrent_acquire_release_keeps_envelopes_reset() {
    let pool = Arc::new(EnvelopePool::new(64));
    let num_threads = 16;
    let iterations = 500;
    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads)
        .map(|t| {
            let pool = pool.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                for i in 0..iterations {
                    let mut envelope = pool.acquire();
                    assert!(envelope.is_reset(), "borrowed a dirty envelope");
                    let code = (t * 1_000_000 + i) as u32;
                    envelope.code = code;
                    envelope.set_msg(&format!("thread-{t}-{i}"));
                    envelope.set_data(&code).unwrap();
                    thread::yield_now();
                    assert_eq!(envelope.code, code, "envelope shared between borrowers");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread should complete");
    }

    let mut all_reset = true;
    pool.inspect_idle(|e| all_reset &= e.is_reset());
    assert!(all_reset);
    assert!(pool.created() <= num_threads, "pool grew past peak concurrency");
    assert_eq!(pool.idle(), pool.created());
}

#[test]
fn test_pool_growth_bounded_by_max_idle() {
    let pool = Arc::new(EnvelopePool::new(4));
    let num_threads = 12;
    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads)
        .map(|_| {
            let pool = pool.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                let envelope = pool.acquire();
                // Everyone holds a checkout at the same time
                barrier.wait();
                drop(envelope);
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread should complete");
    }

    assert_eq!(pool.created(), num_threads);
    assert_eq!(pool.idle(), 4);
}
