//! vkreg - Vulkan registry code generator
//!
//! This crate reads the Vulkan API registry (`vk.xml`), works out under which
//! core versions and extensions each device-level command and structure type
//! exists, and renders preprocessor-guarded C/C++ dispatch code from it.

pub mod config;
pub mod emit;
pub mod ops;
pub mod registry;
pub mod resolve;
pub mod util;

/// Test utilities for vkreg unit tests.
///
/// This module is only available when compiling with `--cfg test`. It
/// provides a builder for small registry documents.
#[cfg(test)]
pub mod test_support;

pub use config::Conventions;
pub use ops::{generate, GenerateOptions, Pass};
pub use registry::Registry;
pub use resolve::{GuardExpr, RefKind};
