//! Dispenser controller firmware library.
//!
//! Everything the control loop needs lives here so it can be exercised on
//! the host. Only the binary (`src/main.rs`, `espidf` feature) and a few
//! `target_os = "espidf"` branches in the adapters touch ESP-IDF.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod diagnostics;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod scheduler;
pub mod sensors;
pub mod time;

pub mod adapters;
