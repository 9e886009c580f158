//! Command implementations

pub mod context_dispatcher;
pub mod dispatch_table;
pub mod inspect;
pub mod stype;

use anyhow::Result;

use vkreg::ops::{generate, GenerateOptions, Pass};

/// Run a generator pass with the default conventions and report the outcome.
fn run_pass(pass: Pass, opts: GenerateOptions) -> Result<()> {
    let result = generate(pass, &opts)?;
    tracing::debug!(
        %pass,
        entries = result.entries,
        written = result.written.len(),
        unchanged = result.unchanged.len(),
        "pass finished"
    );
    Ok(())
}
