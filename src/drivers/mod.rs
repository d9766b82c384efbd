//! Actuator drivers: edge-triggered relays and the indicator blinker.

pub mod indicator;
pub mod relay;
