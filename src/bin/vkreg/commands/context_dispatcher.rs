//! `vkreg context-dispatcher` command

use anyhow::Result;

use super::run_pass;
use crate::cli::HeaderArgs;
use vkreg::ops::{GenerateOptions, Pass};

pub fn execute(args: HeaderArgs) -> Result<()> {
    run_pass(
        Pass::ContextDispatcher,
        GenerateOptions::new(args.registry, vec![args.header]),
    )
}
