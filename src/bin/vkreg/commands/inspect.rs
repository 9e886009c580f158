//! `vkreg inspect` command

use anyhow::Result;

use crate::cli::InspectArgs;
use vkreg::ops::inspect;

pub fn execute(args: InspectArgs) -> Result<()> {
    let json = inspect(&args.registry, args.kind.into())?;
    println!("{}", json);
    Ok(())
}
