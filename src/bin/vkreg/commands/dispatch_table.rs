//! `vkreg dispatch-table` command

use anyhow::Result;

use super::run_pass;
use crate::cli::DispatchTableArgs;
use vkreg::ops::{GenerateOptions, Pass};

pub fn execute(args: DispatchTableArgs) -> Result<()> {
    let opts = GenerateOptions::new(args.registry, vec![args.header, args.source]);
    run_pass(Pass::DispatchTable, opts)
}
