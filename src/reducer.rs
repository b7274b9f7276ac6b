//! Yew reducer around [`TimerEngine`].
//!
//! Every mutation of the timer goes through [`TimerAction`], so button
//! presses, input edits and clock ticks are applied one at a time in
//! dispatch order.

use crate::{AlertSink, ConfigField, TickOutcome, TimerConfig, TimerEngine, TimerSnapshot};
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerAction {
    Configure(TimerConfig),
    SetField(ConfigField, u32),
    Start,
    Stop,
    Reset,
    Tick,
}

#[derive(Clone)]
pub struct TimerModel<A> {
    pub engine: TimerEngine<A>,
    /// Transition taken by the most recent tick, if any since the last command.
    pub last_outcome: Option<TickOutcome>,
}

impl<A: AlertSink> TimerModel<A> {
    pub fn new(sink: A) -> Self {
        Self {
            engine: TimerEngine::new(sink),
            last_outcome: None,
        }
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        self.engine.snapshot()
    }
}

impl<A: AlertSink + Clone + 'static> Reducible for TimerModel<A> {
    type Action = TimerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = Rc::unwrap_or_clone(self);
        next.last_outcome = None;
        match action {
            TimerAction::Configure(config) => next.engine.configure(config),
            TimerAction::SetField(field, value) => next.engine.set_field(field, value),
            TimerAction::Start => next.engine.start(),
            TimerAction::Stop => next.engine.stop(),
            TimerAction::Reset => next.engine.reset(),
            TimerAction::Tick => next.last_outcome = Some(next.engine.tick()),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingSink;

    type Model = TimerModel<Rc<RecordingSink>>;

    fn model() -> Rc<Model> {
        Rc::new(TimerModel::new(Rc::new(RecordingSink::default())))
    }

    fn apply(state: Rc<Model>, actions: &[TimerAction]) -> Rc<Model> {
        actions.iter().fold(state, |s, a| s.reduce(*a))
    }

    #[test]
    fn test_field_edits_accumulate() {
        let state = apply(
            model(),
            &[
                TimerAction::SetField(ConfigField::StartMin, 1),
                TimerAction::SetField(ConfigField::StartSec, 15),
                TimerAction::SetField(ConfigField::RepeatHour, 1),
            ],
        );
        let cfg = state.engine.config();
        assert_eq!(cfg.start_timer_seconds(), 75);
        assert_eq!(cfg.repeat_total_seconds(), 3660);
        assert_eq!(cfg.pause_sec, 5);
    }

    #[test]
    fn test_tick_records_outcome() {
        let state = apply(model(), &[TimerAction::Start, TimerAction::Tick]);
        assert_eq!(state.last_outcome, Some(TickOutcome::Countdown { time_left: 9 }));
        assert!(state.snapshot().is_running);

        let state = state.reduce(TimerAction::Stop);
        assert_eq!(state.last_outcome, None);
        assert!(!state.snapshot().is_running);
        assert_eq!(state.snapshot().time_left, 9);
    }

    #[test]
    fn test_start_blocked_by_zero_cycle() {
        let state = apply(
            model(),
            &[
                TimerAction::Configure(TimerConfig::new(0, 0, 0, 1, 5)),
                TimerAction::Start,
                TimerAction::Tick,
            ],
        );
        assert_eq!(state.last_outcome, Some(TickOutcome::Idle));
        assert!(!state.snapshot().is_running);
    }

    #[test]
    fn test_reset_after_pause() {
        let mut actions = vec![TimerAction::Start];
        actions.extend(std::iter::repeat(TimerAction::Tick).take(11));
        let state = apply(model(), &actions);
        assert!(state.snapshot().is_paused);
        assert_eq!(state.engine.sink().count(), 1);

        let state = state.reduce(TimerAction::Reset);
        let s = state.snapshot();
        assert!(!s.is_running && !s.is_paused);
        assert_eq!((s.time_left, s.total_elapsed, s.pause_left), (0, 0, 0));
    }

    #[test]
    fn test_previous_state_is_not_mutated() {
        let before = apply(model(), &[TimerAction::Start]);
        let after = Rc::clone(&before).reduce(TimerAction::Tick);
        assert_eq!(before.snapshot().time_left, 10);
        assert_eq!(after.snapshot().time_left, 9);
    }
}
