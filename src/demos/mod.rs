//! Small tilt demos that share the sensor contract with the game
//!
//! - `floating_ball`: a ball rolled around the screen by tilting
//! - `gyro_readout`: the latest raw gyroscope values as text

pub mod floating_ball;
pub mod gyro_readout;

pub use floating_ball::{FloatingBall, FloatingBallDemo};
pub use gyro_readout::{GyroReadout, GyroReadoutDemo};
