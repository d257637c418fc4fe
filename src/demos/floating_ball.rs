//! Tilt-controlled floating ball
//!
//! Unlike the game player there is no dead zone and the ball moves against
//! the rotation, so tipping the phone "rolls" it downhill.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use crate::sensor::{Sensor, Subscription};
use crate::sim::TiltSample;
use crate::sim::geometry::clamp_to_screen;

pub const BALL_SIZE: f32 = 40.0;
/// Pixels per unit of rotation rate
pub const BALL_SENSITIVITY: f32 = 10.0;
pub const SAMPLE_INTERVAL_MS: u32 = 16;

/// Ball position state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingBall {
    pub pos: Vec2,
    screen: Vec2,
}

impl FloatingBall {
    /// Ball anchored at the middle of the screen
    pub fn new(screen: Vec2) -> Self {
        Self {
            pos: screen / 2.0,
            screen,
        }
    }

    /// Move for one reading and keep the ball on screen
    pub fn apply(&mut self, sample: TiltSample) {
        let delta = Vec2::new(sample.y, sample.x) * BALL_SENSITIVITY;
        self.pos = clamp_to_screen(self.pos - delta, BALL_SIZE, self.screen);
    }
}

/// Floating ball wired to a sensor
pub struct FloatingBallDemo {
    ball: Rc<RefCell<FloatingBall>>,
    subscription: Option<Subscription>,
}

impl FloatingBallDemo {
    pub fn start<S: Sensor>(sensor: &mut S, screen: Vec2) -> Self {
        sensor.set_sample_interval(SAMPLE_INTERVAL_MS);
        let ball = Rc::new(RefCell::new(FloatingBall::new(screen)));
        let target = Rc::clone(&ball);
        let subscription = sensor.subscribe(Box::new(move |sample| {
            target.borrow_mut().apply(sample);
        }));
        Self {
            ball,
            subscription: Some(subscription),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.ball.borrow().pos
    }

    pub fn caption(&self) -> &'static str {
        "Move the phone!"
    }

    pub fn stop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}
