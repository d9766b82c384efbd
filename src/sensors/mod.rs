//! Sensor subsystem.
//!
//! The dispenser has exactly one sensor, the tank level switch. The raw pin
//! is read through [`LevelSensor`](crate::app::ports::LevelSensor); this
//! module turns that level into domain meaning.

pub mod water_level;
