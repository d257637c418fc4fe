//! Tilt sensor contract
//!
//! The game never talks to device hardware. A sensor delivers gyroscope
//! readings to subscribed listeners at a requested interval; dropping or
//! releasing the returned [`Subscription`] stops delivery.
//!
//! [`ScriptedSensor`] is an in-process sensor fed by the caller, used by the
//! headless runner, the demos and tests.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::sim::TiltSample;

/// Callback receiving each reading
pub type Listener = Box<dyn FnMut(TiltSample)>;

/// Source of gyroscope readings
pub trait Sensor {
    /// Requested time between readings
    fn set_sample_interval(&mut self, interval_ms: u32);

    /// Start delivering readings to `listener`
    fn subscribe(&mut self, listener: Listener) -> Subscription;
}

/// Live listener registration
///
/// Unsubscribes exactly once: either through [`Subscription::unsubscribe`] or on drop.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Stop receiving readings
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

#[derive(Default)]
struct Hub {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    interval_ms: Option<u32>,
    interval_calls: u32,
    unsubscribes: u32,
}

/// Sensor driven by explicit [`ScriptedSensor::emit`] calls
///
/// Clones share the same listeners, so a test can keep a handle while a
/// session owns another.
#[derive(Clone, Default)]
pub struct ScriptedSensor {
    hub: Rc<RefCell<Hub>>,
}

impl ScriptedSensor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver one reading to every listener
    pub fn emit(&self, sample: TiltSample) {
        // Listeners run outside the borrow so they may subscribe re-entrantly
        let mut listeners = std::mem::take(&mut self.hub.borrow_mut().listeners);
        for (_, listener) in listeners.iter_mut() {
            listener(sample);
        }
        let mut hub = self.hub.borrow_mut();
        listeners.append(&mut hub.listeners);
        hub.listeners = listeners;
    }

    /// Deliver a sequence of readings
    pub fn play(&self, samples: impl IntoIterator<Item = TiltSample>) {
        for sample in samples {
            self.emit(sample);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.hub.borrow().listeners.len()
    }

    /// Last interval requested, if any
    pub fn sample_interval_ms(&self) -> Option<u32> {
        self.hub.borrow().interval_ms
    }

    /// How many times an interval was requested
    pub fn interval_calls(&self) -> u32 {
        self.hub.borrow().interval_calls
    }

    /// How many subscriptions have been released
    pub fn unsubscribe_count(&self) -> u32 {
        self.hub.borrow().unsubscribes
    }
}

impl Sensor for ScriptedSensor {
    fn set_sample_interval(&mut self, interval_ms: u32) {
        let mut hub = self.hub.borrow_mut();
        hub.interval_ms = Some(interval_ms);
        hub.interval_calls += 1;
    }

    fn subscribe(&mut self, listener: Listener) -> Subscription {
        let id = {
            let mut hub = self.hub.borrow_mut();
            let id = hub.next_id;
            hub.next_id += 1;
            hub.listeners.push((id, listener));
            id
        };

        let hub: Weak<RefCell<Hub>> = Rc::downgrade(&self.hub);
        Subscription::new(move || {
            if let Some(hub) = hub.upgrade() {
                let mut hub = hub.borrow_mut();
                hub.listeners.retain(|(lid, _)| *lid != id);
                hub.unsubscribes += 1;
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_emit_reaches_listener() {
        let mut sensor = ScriptedSensor::new();
        let seen = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&seen);
        let _sub = sensor.subscribe(Box::new(move |_| counter.set(counter.get() + 1)));

        sensor.play([TiltSample::default(), TiltSample::new(1.0, 0.0, 0.0)]);
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn test_unsubscribe_exactly_once() {
        let mut sensor = ScriptedSensor::new();
        let sub = sensor.subscribe(Box::new(|_| {}));
        assert_eq!(sensor.listener_count(), 1);

        sub.unsubscribe();
        assert_eq!(sensor.listener_count(), 0);
        assert_eq!(sensor.unsubscribe_count(), 1);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let mut sensor = ScriptedSensor::new();
        {
            let _sub = sensor.subscribe(Box::new(|_| {}));
        }
        assert_eq!(sensor.listener_count(), 0);
        assert_eq!(sensor.unsubscribe_count(), 1);
        // No listeners: emitting is a no-op
        sensor.emit(TiltSample::default());
    }

    #[test]
    fn test_interval_recorded() {
        let mut sensor = ScriptedSensor::new();
        assert_eq!(sensor.sample_interval_ms(), None);
        sensor.set_sample_interval(16);
        assert_eq!(sensor.sample_interval_ms(), Some(16));
        assert_eq!(sensor.interval_calls(), 1);
    }
}
