//! Test utilities for wizard tests.
//!
//! Deterministic fakes for every collaborator, with call counters and
//! scripted failures.

pub mod mock_services;

#[allow(unused_imports)]
pub use mock_services::{MockBehavior, MockServices, fast_options, ready_for_step, wizard_with};
