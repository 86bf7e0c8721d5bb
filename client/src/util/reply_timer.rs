//! Timer driver for the simulated chat reply.
//!
//! The chat state machine (`state::chat`) only knows transitions. This module
//! owns the two browser timers that fire them: a one-shot "thinking" delay
//! followed by a per-character reveal interval. Both live inside a single
//! `ReplyTimer` handle; cancelling (or dropping the last clone) clears
//! whichever timer is pending.
//!
//! Bookkeeping lives in `TimerSlot`, which is independent of the browser:
//! each run gets a generation number, and a callback from an older run can
//! neither install nor release a handle.

#[cfg(test)]
#[path = "reply_timer_test.rs"]
mod reply_timer_test;

use leptos::prelude::*;

use crate::state::chat::ChatState;
#[cfg(feature = "hydrate")]
use crate::state::chat::{REVEAL_INTERVAL_MS, THINKING_DELAY_MS};

#[cfg(feature = "hydrate")]
use gloo_timers::callback::{Interval, Timeout};
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

/// Generation-checked holder for the one pending timer handle.
#[derive(Debug)]
pub struct TimerSlot<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self { generation: 0, pending: None }
    }
}

impl<T> TimerSlot<T> {
    /// Open a new run. Returns its generation and whatever the previous run
    /// left pending.
    pub fn begin(&mut self) -> (u64, Option<T>) {
        self.generation += 1;
        (self.generation, self.pending.take())
    }

    /// Store `handle` for `generation`.
    ///
    /// Returns the handle leaving the slot: the displaced one when
    /// `generation` is current, or `handle` itself when the run is stale.
    pub fn install(&mut self, generation: u64, handle: T) -> Option<T> {
        if self.is_current(generation) {
            self.pending.replace(handle)
        } else {
            Some(handle)
        }
    }

    /// Take the pending handle if `generation` still owns it.
    pub fn release(&mut self, generation: u64) -> Option<T> {
        if self.is_current(generation) { self.pending.take() } else { None }
    }

    /// Invalidate every outstanding generation and take the pending handle.
    pub fn cancel(&mut self) -> Option<T> {
        self.generation += 1;
        self.pending.take()
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Held only so dropping it clears the browser timer.
#[cfg(feature = "hydrate")]
enum Pending {
    Thinking { _timeout: Timeout },
    Revealing { _interval: Interval },
}

/// Drop a timer on the next turn of the event loop, never inside its own tick.
#[cfg(feature = "hydrate")]
fn drop_later(pending: Option<Pending>) {
    if let Some(pending) = pending {
        Timeout::new(0, move || drop(pending)).forget();
    }
}

/// Cancellable handle over the in-flight reply sequence.
#[derive(Clone, Default)]
pub struct ReplyTimer {
    #[cfg(feature = "hydrate")]
    slot: Rc<RefCell<TimerSlot<Pending>>>,
}

impl ReplyTimer {
    /// Schedule the reply for a submission `chat` has just accepted.
    pub fn start(&self, chat: RwSignal<ChatState>) {
        #[cfg(feature = "hydrate")]
        {
            let (generation, stale) = self.slot.borrow_mut().begin();
            drop(stale);

            let handle = self.clone();
            let thinking = Timeout::new(THINKING_DELAY_MS, move || {
                if chat.try_update(ChatState::begin_reply) != Some(true) {
                    drop_later(handle.slot.borrow_mut().release(generation));
                    return;
                }
                let tick_handle = handle.clone();
                let reveal = Interval::new(REVEAL_INTERVAL_MS, move || {
                    if chat.try_update(ChatState::reveal_next) != Some(true) {
                        drop_later(tick_handle.slot.borrow_mut().release(generation));
                    }
                });
                // Displaces this very timeout.
                drop_later(handle.slot.borrow_mut().install(generation, Pending::Revealing { _interval: reveal }));
            });
            drop(self.slot.borrow_mut().install(generation, Pending::Thinking { _timeout: thinking }));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = chat;
        }
    }

    /// Drop any pending timer.
    pub fn cancel(&self) {
        #[cfg(feature = "hydrate")]
        {
            drop(self.slot.borrow_mut().cancel());
        }
    }
}
