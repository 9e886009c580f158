//! Implementation of the generator passes.
//!
//! A pass reads the registry, resolves it and renders every artifact in
//! memory. Changed artifacts are then staged next to their destinations and
//! renamed into place only once every one of them has been staged, so a
//! failing run leaves no partial output.

use std::fmt;
use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::config::Conventions;
use crate::emit::{ContextDispatcherEmitter, DispatchTableEmitter, Emitter, StructureTypeEmitter};
use crate::registry::{self, Registry};
use crate::resolve::{
    classify_device_commands, join_in_guard_order, join_in_payload_order, resolve_guards,
    resolve_structure_types, RefKind,
};
use crate::util::fs;

/// The three generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Dispatch table header and loader source
    DispatchTable,
    /// Forwarding mixin header
    ContextDispatcher,
    /// Structure type lookup header
    StructureType,
}

impl Pass {
    /// Number of output paths the pass writes.
    pub fn output_count(self) -> usize {
        match self {
            Pass::DispatchTable => 2,
            Pass::ContextDispatcher | Pass::StructureType => 1,
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pass::DispatchTable => write!(f, "dispatch-table"),
            Pass::ContextDispatcher => write!(f, "context-dispatcher"),
            Pass::StructureType => write!(f, "stype"),
        }
    }
}

/// Options for running a pass.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Registry document to read
    pub registry: PathBuf,

    /// Output paths, in the order the pass renders them
    pub outputs: Vec<PathBuf>,

    /// Naming conventions
    pub conventions: Conventions,
}

impl GenerateOptions {
    pub fn new(registry: impl Into<PathBuf>, outputs: Vec<PathBuf>) -> Self {
        GenerateOptions {
            registry: registry.into(),
            outputs,
            conventions: Conventions::default(),
        }
    }

    /// Set the naming conventions.
    pub fn with_conventions(mut self, conventions: Conventions) -> Self {
        self.conventions = conventions;
        self
    }
}

/// Outcome of a pass.
#[derive(Debug, Clone, Default)]
pub struct GenerateResult {
    /// Number of guarded entries emitted
    pub entries: usize,

    /// Files written
    pub written: Vec<PathBuf>,

    /// Files already holding the rendered content
    pub unchanged: Vec<PathBuf>,
}

/// Run a pass end to end.
pub fn generate(pass: Pass, opts: &GenerateOptions) -> Result<GenerateResult> {
    if opts.outputs.len() != pass.output_count() {
        bail!(
            "`{}` writes {} file(s), got {} output path(s)",
            pass,
            pass.output_count(),
            opts.outputs.len()
        );
    }

    let registry = registry::parse_file(&opts.registry)?;
    let (entries, artifacts) = render(pass, &registry, &opts.conventions, &opts.outputs)?;

    let mut result = GenerateResult {
        entries,
        ..Default::default()
    };
    let mut staged = Vec::new();
    for (path, contents) in opts.outputs.iter().zip(&artifacts) {
        if fs::is_unchanged(path, contents) {
            tracing::info!("unchanged {}", path.display());
            result.unchanged.push(path.clone());
        } else {
            staged.push(fs::stage(path, contents)?);
        }
    }
    for file in staged {
        let path = file.commit()?;
        tracing::info!("wrote {}", path.display());
        result.written.push(path);
    }

    Ok(result)
}

/// Render a pass's artifacts without touching the filesystem.
///
/// Returns the number of emitted entries and the artifact contents, in
/// output order.
pub fn render(
    pass: Pass,
    registry: &Registry,
    conventions: &Conventions,
    outputs: &[PathBuf],
) -> Result<(usize, Vec<String>)> {
    let rendered = match pass {
        Pass::DispatchTable => {
            let header = outputs
                .first()
                .map(|path| fs::file_name(path))
                .transpose()?
                .unwrap_or_default();
            render_dispatch_table(registry, conventions, &header)
        }
        Pass::ContextDispatcher => render_context_dispatcher(registry, conventions),
        Pass::StructureType => render_structure_types(registry, conventions),
    };
    tracing::debug!(%pass, entries = rendered.0, "rendered artifacts");
    Ok(rendered)
}

/// Dispatch table header and source, in first-reference order.
pub fn render_dispatch_table(
    registry: &Registry,
    conventions: &Conventions,
    header_name: &str,
) -> (usize, Vec<String>) {
    let guards = resolve_guards(registry, RefKind::Command);
    let commands = classify_device_commands(registry, conventions);
    let entries = join_in_guard_order(&guards, &commands);

    let emitter = DispatchTableEmitter::new(conventions, header_name);
    (entries.len(), emitter.render(&entries))
}

/// Context dispatcher header, in classification order.
pub fn render_context_dispatcher(
    registry: &Registry,
    conventions: &Conventions,
) -> (usize, Vec<String>) {
    let guards = resolve_guards(registry, RefKind::Command);
    let commands = classify_device_commands(registry, conventions);
    let entries = join_in_payload_order(&commands, &guards);

    let emitter = ContextDispatcherEmitter::new(conventions);
    (entries.len(), emitter.render(&entries))
}

/// Structure type lookup header, in first-reference order.
pub fn render_structure_types(
    registry: &Registry,
    conventions: &Conventions,
) -> (usize, Vec<String>) {
    let guards = resolve_guards(registry, RefKind::Type);
    let constants = resolve_structure_types(registry, conventions);
    let entries = join_in_guard_order(&guards, &constants);

    let emitter = StructureTypeEmitter::new(conventions);
    (entries.len(), emitter.render(&entries))
}
