//! Raw gyroscope readout

use std::cell::Cell;
use std::rc::Rc;

use crate::sensor::{Sensor, Subscription};
use crate::sim::TiltSample;

/// Twice a second is plenty for reading numbers
pub const SAMPLE_INTERVAL_MS: u32 = 500;

/// Latest reading formatted for display
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GyroReadout {
    pub sample: TiltSample,
}

impl GyroReadout {
    pub fn title(&self) -> &'static str {
        "Gyroscope:"
    }

    /// One line per axis, two decimals
    pub fn lines(&self) -> [String; 3] {
        [
            format!("x: {:.2}", self.sample.x),
            format!("y: {:.2}", self.sample.y),
            format!("z: {:.2}", self.sample.z),
        ]
    }
}

/// Readout wired to a sensor
pub struct GyroReadoutDemo {
    latest: Rc<Cell<TiltSample>>,
    subscription: Option<Subscription>,
}

impl GyroReadoutDemo {
    pub fn start<S: Sensor>(sensor: &mut S) -> Self {
        sensor.set_sample_interval(SAMPLE_INTERVAL_MS);
        let latest = Rc::new(Cell::new(TiltSample::default()));
        let target = Rc::clone(&latest);
        let subscription = sensor.subscribe(Box::new(move |sample| target.set(sample)));
        Self {
            latest,
            subscription: Some(subscription),
        }
    }

    pub fn readout(&self) -> GyroReadout {
        GyroReadout {
            sample: self.latest.get(),
        }
    }

    pub fn stop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}
