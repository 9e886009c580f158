//! `vkreg stype` command

use anyhow::Result;

use super::run_pass;
use crate::cli::HeaderArgs;
use vkreg::ops::{GenerateOptions, Pass};

pub fn execute(args: HeaderArgs) -> Result<()> {
    run_pass(
        Pass::StructureType,
        GenerateOptions::new(args.registry, vec![args.header]),
    )
}
