//! Polls a one-wire temperature sensor through the kernel's w1 device tree
//! and publishes each reading as JSON on `fishcam/temperature`.

pub mod app;
pub mod config;
pub mod externals;
pub mod internals;
pub mod models;

#[cfg(test)]
mod testing;
