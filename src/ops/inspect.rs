//! Implementation of `vkreg inspect`.

use std::path::Path;

use anyhow::{Context, Result};

use crate::registry::{self, Registry};
use crate::resolve::{resolve_guards, RefKind};

/// Resolved guards of every command or type name, as pretty JSON.
///
/// Keys keep first-reference order; each value lists the conjunctions as
/// arrays of availability symbols.
pub fn inspect(registry_path: &Path, kind: RefKind) -> Result<String> {
    let registry = registry::parse_file(registry_path)?;
    guards_json(&registry, kind)
}

pub fn guards_json(registry: &Registry, kind: RefKind) -> Result<String> {
    let guards = resolve_guards(registry, kind);
    serde_json::to_string_pretty(&guards).context("failed to serialize guards")
}
