//! Artifact emitters.
//!
//! Every emitter renders one preprocessor-guarded block per joined entry, in
//! the entry order it is given, and wraps the blocks in a fixed frame. Output
//! depends on nothing but its input, so unchanged registries give
//! byte-identical files.

pub mod context_dispatcher;
pub mod dispatch_table;
pub mod structure_type;

pub use context_dispatcher::ContextDispatcherEmitter;
pub use dispatch_table::DispatchTableEmitter;
pub use structure_type::StructureTypeEmitter;

use crate::resolve::{GuardExpr, Joined};

/// Renders the text artifacts of one generator pass.
pub trait Emitter {
    /// Per-entry data the artifacts are rendered from.
    type Payload;

    /// Render all artifacts, in the order their output paths are given.
    fn render(&self, entries: &Joined<Self::Payload>) -> Vec<String>;
}

/// Wrap `body` in `#if <guard>` / `#endif // <guard>`.
pub(crate) fn guarded_block(guard: &GuardExpr, body: &str) -> String {
    format!("#if {guard}\n{body}\n#endif // {guard}")
}

/// Render each entry with `block` and join them line by line.
pub(crate) fn render_blocks<P, F>(entries: &Joined<P>, mut block: F) -> String
where
    F: FnMut(&str, &P) -> String,
{
    entries
        .iter()
        .map(|(name, entry)| guarded_block(&entry.guard, &block(name, &entry.payload)))
        .collect::<Vec<_>>()
        .join("\n")
}
