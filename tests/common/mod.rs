//! Common test utilities for shapesync CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus helpers to run the binary
//! - Assertion macros: `assert_output_contains!`, `assert_exit_code!`
//! - Fixtures: the sample Django project and its interface files

pub mod assertions;
pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
