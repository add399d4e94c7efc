//! Simulation utilities and program loading.
//!
//! Provides utilities for loading binaries into guest RAM, setting up
//! the initial CPU state, and driving the CPU until the guest exits.

pub mod loader;
pub mod simulator;

pub use self::simulator::Simulator;
