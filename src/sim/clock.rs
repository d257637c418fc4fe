//! Virtual game clock
//!
//! One-shot and repeating timers multiplexed onto a single ordered queue.
//! Nothing here reads wall-clock time: the owner advances the clock and pops
//! due timers one at a time, so a handler that cancels another timer takes
//! effect before that timer could fire in the same advance.

/// Microseconds per second
const MICROS: f64 = 1_000_000.0;

/// Convert seconds to clock units, rounding to the nearest microsecond
#[inline]
pub fn secs_to_micros(secs: f32) -> u64 {
    (secs.max(0.0) as f64 * MICROS).round() as u64
}

/// Handle returned when arming a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// What a timer means to the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Once per second: decrement the remaining time
    Countdown,
    /// Periodic: move the hazard
    HazardRelocation,
    /// One-shot: remove the explosion effect
    ExplosionClear,
}

#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    kind: TimerKind,
    due: u64,
    /// Re-arm period for repeating timers
    period: Option<u64>,
}

/// Ordered virtual-time timer queue
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now: u64,
    next_id: u64,
    timers: Vec<Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in microseconds
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Number of armed timers
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn is_armed(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    fn arm(&mut self, delay: u64, kind: TimerKind, period: Option<u64>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            kind,
            due: self.now + delay,
            period,
        });
        id
    }

    /// Fire `kind` once after `delay` seconds
    pub fn after(&mut self, delay: f32, kind: TimerKind) -> TimerId {
        self.arm(secs_to_micros(delay), kind, None)
    }

    /// Fire `kind` every `period` seconds, first after one period
    pub fn every(&mut self, period: f32, kind: TimerKind) -> TimerId {
        // A zero period would fire forever within one advance
        let period = secs_to_micros(period).max(1);
        self.arm(period, kind, Some(period))
    }

    /// Cancel a timer; cancelling twice (or after it fired) is harmless
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    /// Drop every armed timer
    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to its due time
    ///
    /// Ties fire in arming order. Repeating timers are re-armed before returning.
    pub fn pop_due(&mut self, until: u64) -> Option<(TimerId, TimerKind)> {
        let idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(i, _)| i)?;

        let timer = &mut self.timers[idx];
        let fired = (timer.id, timer.kind);
        self.now = self.now.max(timer.due);

        match timer.period {
            Some(period) => timer.due += period,
            None => {
                self.timers.swap_remove(idx);
            }
        }
        Some(fired)
    }

    /// Move the clock forward to `until` once no more timers are due
    pub fn settle(&mut self, until: u64) {
        self.now = self.now.max(until);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(scheduler: &mut Scheduler, dt: f32) -> Vec<TimerKind> {
        let until = scheduler.now() + secs_to_micros(dt);
        let mut fired = Vec::new();
        while let Some((_, kind)) = scheduler.pop_due(until) {
            fired.push(kind);
        }
        scheduler.settle(until);
        fired
    }

    #[test]
    fn test_one_shot_fires_once() {
        let mut s = Scheduler::new();
        s.after(0.3, TimerKind::ExplosionClear);
        assert!(drain(&mut s, 0.2).is_empty());
        assert_eq!(drain(&mut s, 0.1), vec![TimerKind::ExplosionClear]);
        assert!(drain(&mut s, 1.0).is_empty());
        assert_eq!(s.pending(), 0);
    }

    #[test]
    fn test_repeating_catches_up_in_order() {
        let mut s = Scheduler::new();
        s.every(1.0, TimerKind::Countdown);
        s.every(5.0, TimerKind::HazardRelocation);

        let fired = drain(&mut s, 5.0);
        assert_eq!(
            fired,
            vec![
                TimerKind::Countdown,
                TimerKind::Countdown,
                TimerKind::Countdown,
                TimerKind::Countdown,
                TimerKind::Countdown,
                TimerKind::HazardRelocation,
            ]
        );
        assert_eq!(s.now(), 5_000_000);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut s = Scheduler::new();
        let id = s.after(0.3, TimerKind::ExplosionClear);
        assert!(s.is_armed(id));
        assert!(s.cancel(id));
        assert!(!s.cancel(id));
        assert!(drain(&mut s, 1.0).is_empty());
    }

    #[test]
    fn test_cancel_during_drain_prevents_later_fire() {
        let mut s = Scheduler::new();
        s.every(1.0, TimerKind::Countdown);
        let relocation = s.every(1.0, TimerKind::HazardRelocation);

        let until = s.now() + secs_to_micros(1.0);
        let (_, first) = s.pop_due(until).expect("countdown due");
        assert_eq!(first, TimerKind::Countdown);
        s.cancel(relocation);
        assert!(s.pop_due(until).is_none());
    }

    #[test]
    fn test_cancel_all() {
        let mut s = Scheduler::new();
        s.every(1.0, TimerKind::Countdown);
        s.after(0.3, TimerKind::ExplosionClear);
        s.cancel_all();
        assert_eq!(s.pending(), 0);
        assert!(drain(&mut s, 10.0).is_empty());
    }
}
