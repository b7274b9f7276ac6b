//! Repeating tick sources.
//!
//! A [`Clock`] hands out a subscription object; dropping it cancels the
//! subscription so no further callbacks fire.

use gloo_timers::callback::Interval;

/// Period between timer ticks in milliseconds.
pub const TICK_PERIOD_MS: u32 = 1_000;

pub trait Clock {
    /// Live subscription. Dropping it stops the ticks.
    type Subscription;

    fn subscribe(&self, period_ms: u32, on_tick: Box<dyn FnMut()>) -> Self::Subscription;
}

/// Browser clock backed by `setInterval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalClock;

impl Clock for IntervalClock {
    type Subscription = Interval;

    fn subscribe(&self, period_ms: u32, on_tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, on_tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingSink;
    use crate::{TimerConfig, TimerEngine};
    use std::cell::{Cell, RefCell};
    use std::rc::{Rc, Weak};

    /// Clock driven by hand: `advance` fires every live subscription once.
    #[derive(Default)]
    struct ManualClock {
        subscribers: RefCell<Vec<Weak<RefCell<Box<dyn FnMut()>>>>>,
    }

    struct ManualSubscription {
        _callback: Rc<RefCell<Box<dyn FnMut()>>>,
    }

    impl ManualClock {
        fn advance(&self) {
            let live: Vec<_> = self
                .subscribers
                .borrow()
                .iter()
                .filter_map(Weak::upgrade)
                .collect();
            for callback in live {
                let mut on_tick = callback.borrow_mut();
                (*on_tick)();
            }
        }

        fn live_count(&self) -> usize {
            self.subscribers
                .borrow()
                .iter()
                .filter(|w| w.strong_count() > 0)
                .count()
        }
    }

    impl Clock for ManualClock {
        type Subscription = ManualSubscription;

        fn subscribe(&self, _period_ms: u32, on_tick: Box<dyn FnMut()>) -> ManualSubscription {
            let callback = Rc::new(RefCell::new(on_tick));
            self.subscribers.borrow_mut().push(Rc::downgrade(&callback));
            ManualSubscription {
                _callback: callback,
            }
        }
    }

    #[test]
    fn test_dropping_subscription_cancels_ticks() {
        let clock = ManualClock::default();
        let fired = Rc::new(Cell::new(0));

        let sub = {
            let fired = Rc::clone(&fired);
            clock.subscribe(TICK_PERIOD_MS, Box::new(move || fired.set(fired.get() + 1)))
        };
        clock.advance();
        clock.advance();
        assert_eq!(fired.get(), 2);
        assert_eq!(clock.live_count(), 1);

        drop(sub);
        clock.advance();
        assert_eq!(fired.get(), 2);
        assert_eq!(clock.live_count(), 0);
    }

    #[test]
    fn test_engine_driven_by_clock_until_stop() {
        let clock = ManualClock::default();
        let engine = Rc::new(RefCell::new(TimerEngine::with_config(
            TimerConfig::new(0, 5, 0, 1, 0),
            Rc::new(RecordingSink::default()),
        )));
        engine.borrow_mut().start();

        let sub = {
            let engine = Rc::clone(&engine);
            clock.subscribe(
                TICK_PERIOD_MS,
                Box::new(move || {
                    engine.borrow_mut().tick();
                }),
            )
        };
        for _ in 0..3 {
            clock.advance();
        }
        assert_eq!(engine.borrow().time_left(), 2);

        engine.borrow_mut().stop();
        drop(sub);
        clock.advance();
        assert_eq!(engine.borrow().time_left(), 2);
        assert_eq!(engine.borrow().total_elapsed(), 3);

        // A fresh subscription after restart drives a fresh session.
        engine.borrow_mut().start();
        let _sub = {
            let engine = Rc::clone(&engine);
            clock.subscribe(
                TICK_PERIOD_MS,
                Box::new(move || {
                    engine.borrow_mut().tick();
                }),
            )
        };
        clock.advance();
        assert_eq!(engine.borrow().time_left(), 4);
        assert_eq!(engine.borrow().total_elapsed(), 1);
    }
}
