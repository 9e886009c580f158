//! High-level operations.
//!
//! This module contains the implementation of vkreg commands.

pub mod generate;
pub mod inspect;

pub use generate::{
    generate, render, render_context_dispatcher, render_dispatch_table, render_structure_types,
    GenerateOptions, GenerateResult, Pass,
};
pub use inspect::{guards_json, inspect};
