//! Availability ("guard") expressions.
//!
//! Every name referenced by a feature or extension gets one conjunction per
//! referencing `require` block, in scan order: core features first, then
//! extensions, each in document order. Nothing is deduplicated or evaluated;
//! the expression is only rendered as preprocessor text.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::registry::{Registry, Requirement};

/// Which kind of reference a resolver pass collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    Command,
    Type,
}

impl RefKind {
    fn names(self, req: &Requirement) -> &[String] {
        match self {
            RefKind::Command => &req.commands,
            RefKind::Type => &req.types,
        }
    }
}

/// Availability symbols that must all be defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Conjunction(Vec<String>);

impl Conjunction {
    /// Conjunction for a `require` block: defining scope, then nested
    /// feature, then nested extension.
    fn for_requirement(scope: &str, req: &Requirement) -> Self {
        let mut atoms = vec![scope.to_string()];
        atoms.extend(req.feature.iter().cloned());
        atoms.extend(req.extension.iter().cloned());
        Conjunction(atoms)
    }

    pub fn atoms(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for Conjunction {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Conjunction(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" && "))
    }
}

/// A disjunction of conjunctions, e.g. `VK_VERSION_1_1 || VK_KHR_x && VK_VERSION_1_0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GuardExpr(Vec<Conjunction>);

impl GuardExpr {
    pub fn conjunctions(&self) -> &[Conjunction] {
        &self.0
    }

    fn push(&mut self, conjunction: Conjunction) {
        self.0.push(conjunction);
    }
}

impl FromIterator<Conjunction> for GuardExpr {
    fn from_iter<I: IntoIterator<Item = Conjunction>>(iter: I) -> Self {
        GuardExpr(iter.into_iter().collect())
    }
}

impl fmt::Display for GuardExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, conjunction) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" || ")?;
            }
            write!(f, "{}", conjunction)?;
        }
        Ok(())
    }
}

/// Name -> guard expression, in order of first reference.
pub type GuardMap = IndexMap<String, GuardExpr>;

/// Collect the guard expression of every name of `kind` the registry references.
pub fn resolve_guards(registry: &Registry, kind: RefKind) -> GuardMap {
    let mut guards = GuardMap::new();

    for feature in &registry.features {
        for req in &feature.requires {
            for name in kind.names(req) {
                guards
                    .entry(name.clone())
                    .or_default()
                    .push(Conjunction(vec![feature.name.clone()]));
            }
        }
    }

    for ext in &registry.extensions {
        // Platform-specific declarations would change the ABI of the output.
        if ext.is_platform_specific() {
            tracing::debug!(extension = %ext.name, "skipping platform extension");
            continue;
        }
        for req in &ext.requires {
            let conjunction = Conjunction::for_requirement(&ext.name, req);
            for name in kind.names(req) {
                guards
                    .entry(name.clone())
                    .or_default()
                    .push(conjunction.clone());
            }
        }
    }

    tracing::debug!(?kind, names = guards.len(), "resolved guards");
    guards
}
