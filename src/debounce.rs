// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyed debouncing: one pending action per key, latest call wins.
//!
//! Each key owns at most one slot. Scheduling into an occupied slot aborts the
//! old timer and replaces it. When a timer wakes it fires only if its slot is
//! still the one it was created for, and it empties the slot before running the
//! action. So a superseded action never runs, even if its timer had already
//! elapsed when the replacement arrived.
//!
//! ```text
//!   schedule(k, 200ms, A)      schedule(k, 200ms, B)
//!   ──────────┬──────────────────────┬─────────────────────────▶ time
//!             │ slot[k] = gen 1 (A)  │ abort gen 1
//!             │                      │ slot[k] = gen 2 (B) ──200ms──▶ B fires, slot[k] emptied
//! ```
//!
//! Timers are tokio tasks, so `schedule` must be called from inside a tokio
//! runtime. Dropping the scheduler aborts everything still pending.

use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

struct Slot {
    generation: u64,
    deadline: Instant,
    handle: JoinHandle<()>,
}

struct Slots<K> {
    next_generation: u64,
    pending: HashMap<K, Slot>,
}

/// Cancellable timers, at most one per key.
pub struct DebounceScheduler<K> {
    slots: Arc<Mutex<Slots<K>>>,
}

impl<K> Default for DebounceScheduler<K>
where
    K: Eq + Hash + Clone + Debug + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> DebounceScheduler<K>
where
    K: Eq + Hash + Clone + Debug + Send + 'static,
{
    pub fn new() -> Self {
        DebounceScheduler {
            slots: Arc::new(Mutex::new(Slots {
                next_generation: 0,
                pending: HashMap::new(),
            })),
        }
    }

    /// Run `action` once after `delay`, unless `key` is rescheduled or
    /// cancelled first. Any action already pending for `key` is cancelled.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn schedule<F>(&self, key: K, delay: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.schedule_async(key, delay, move || async move { action() });
    }

    /// Like [`schedule`](Self::schedule), but the action is a future, e.g. the
    /// remote lookup itself. Once started, the future runs to completion: a
    /// later schedule for the same key only cancels actions that have not
    /// started yet.
    pub fn schedule_async<F, Fut>(&self, key: K, delay: Duration, action: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let deadline = Instant::now() + delay;

        // Held across spawn + insert so the new timer cannot observe the table
        // before its own slot is in it.
        let mut slots = self.slots.lock();
        slots.next_generation += 1;
        let generation = slots.next_generation;

        if let Some(previous) = slots.pending.remove(&key) {
            previous.handle.abort();
            debug!(target: "debounce", ?key, superseded = previous.generation, "cancelled pending action");
        }

        let table = Arc::clone(&self.slots);
        let task_key = key.clone();
        let handle = tokio::spawn(async move {
            sleep_until(deadline).await;

            let current = {
                let mut slots = table.lock();
                match slots.pending.get(&task_key) {
                    Some(slot) if slot.generation == generation => {
                        slots.pending.remove(&task_key);
                        true
                    }
                    _ => false,
                }
            };

            if current {
                debug!(target: "debounce", key = ?task_key, generation, "firing action");
                action().await;
            }
        });

        debug!(target: "debounce", ?key, generation, delay_ms = delay.as_millis() as u64, "scheduled action");
        slots.pending.insert(
            key,
            Slot {
                generation,
                deadline,
                handle,
            },
        );
    }

    /// Cancel the pending action for `key`. Returns whether one was pending;
    /// cancelling an empty key is a no-op.
    pub fn cancel(&self, key: &K) -> bool {
        match self.slots.lock().pending.remove(key) {
            Some(slot) => {
                slot.handle.abort();
                debug!(target: "debounce", ?key, generation = slot.generation, "cancelled");
                true
            }
            None => false,
        }
    }

    /// Cancel everything. Used when the owning fields go away.
    pub fn cancel_all(&self) {
        let drained: Vec<Slot> = self.slots.lock().pending.drain().map(|(_, s)| s).collect();
        for slot in drained {
            slot.handle.abort();
        }
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.slots.lock().pending.contains_key(key)
    }

    pub fn pending_count(&self) -> usize {
        self.slots.lock().pending.len()
    }

    /// When the pending action for `key` is due, if there is one.
    pub fn deadline(&self, key: &K) -> Option<Instant> {
        self.slots.lock().pending.get(key).map(|slot| slot.deadline)
    }
}

impl<K> Drop for DebounceScheduler<K> {
    fn drop(&mut self) {
        for (_, slot) in self.slots.lock().pending.drain() {
            slot.handle.abort();
        }
    }
}
