//! Live game session
//!
//! Connects a [`Sensor`] to the simulation. Readings are queued by the sensor
//! callback and drained by the next [`GameSession::advance`], so the state is
//! only ever touched from the tick.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::sensor::{Sensor, Subscription};
use crate::settings::GameConfig;
use crate::sim::{GameState, TickInput, TiltSample, tick};
use crate::snapshot::Snapshot;

/// One mounted game: sensor subscription plus simulation state
pub struct GameSession<S: Sensor> {
    sensor: S,
    state: GameState,
    samples: Rc<RefCell<VecDeque<TiltSample>>>,
    subscription: Option<Subscription>,
    reset_requested: bool,
}

impl<S: Sensor> GameSession<S> {
    /// Configure the sensor, subscribe and set up a fresh game
    pub fn start(mut sensor: S, config: GameConfig, seed: u64) -> Self {
        sensor.set_sample_interval(config.sample_interval_ms);

        let samples = Rc::new(RefCell::new(VecDeque::new()));
        let queue = Rc::clone(&samples);
        let subscription = sensor.subscribe(Box::new(move |sample| {
            queue.borrow_mut().push_back(sample);
        }));

        Self {
            sensor,
            state: GameState::new(config, seed),
            samples,
            subscription: Some(subscription),
            reset_requested: false,
        }
    }

    /// Run one tick with every reading received since the last one
    pub fn advance(&mut self, dt: f32) {
        let input = TickInput {
            samples: self.samples.borrow_mut().drain(..).collect(),
            reset: std::mem::take(&mut self.reset_requested),
        };
        tick(&mut self.state, &input, dt);
    }

    /// Restart button; applied on the next tick, ignored unless the game is over
    pub fn request_reset(&mut self) {
        self.reset_requested = true;
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Unmount: stop the sensor and cancel every timer
    pub fn teardown(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            log::debug!("Sensor unsubscribed");
        }
        self.state.teardown();
        self.samples.borrow_mut().clear();
    }
}

impl<S: Sensor> Drop for GameSession<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
