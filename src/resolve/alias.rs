//! One-hop alias resolution.
//!
//! Aliases are propagated in a single pass in document order. An alias whose
//! target has no resolved payload at that point (a forward reference, or an
//! alias of an alias defined later) stays unresolved and is dropped.

use indexmap::IndexMap;

use crate::config::Conventions;
use crate::registry::{Registry, StructDef, TagSet};

/// Alias name -> target name, document order.
pub type AliasMap = IndexMap<String, String>;

/// Copy each alias target's payload to the alias, rewritten by `derive`.
///
/// Targets are looked up in `resolved` as it grows, so an alias declared
/// after the alias it points at is picked up, but not the other way round.
pub fn propagate_aliases<V, F>(aliases: &AliasMap, resolved: &mut IndexMap<String, V>, derive: F)
where
    F: Fn(&str, &V) -> V,
{
    for (alias, target) in aliases {
        match resolved.get(target) {
            Some(payload) => {
                let payload = derive(alias, payload);
                resolved.insert(alias.clone(), payload);
            }
            None => tracing::debug!(%alias, %target, "alias target unresolved"),
        }
    }
}

/// Structure type constant for an alias of a tagged structure.
///
/// `VK_STRUCTURE_TYPE_FOO_2_KHR` aliased as `VkFoo2EXT` becomes
/// `VK_STRUCTURE_TYPE_FOO_2_EXT`: the target's tag is stripped, then the
/// alias name's tag appended.
pub fn alias_structure_type(target_constant: &str, alias_name: &str, tags: &TagSet) -> String {
    let mut constant = match tags.suffix_of(target_constant) {
        Some(tag) => {
            let suffix = format!("_{}", tag);
            target_constant
                .strip_suffix(suffix.as_str())
                .unwrap_or(target_constant)
                .to_string()
        }
        None => target_constant.to_string(),
    };
    if let Some(tag) = tags.suffix_of(alias_name) {
        constant.push('_');
        constant.push_str(tag);
    }
    constant
}

/// Structure name -> `sType` constant, aliases included, document order.
pub fn resolve_structure_types(
    registry: &Registry,
    conventions: &Conventions,
) -> IndexMap<String, String> {
    let mut aliases = AliasMap::new();
    let mut constants = IndexMap::new();

    for ty in &registry.types {
        match &ty.definition {
            StructDef::Alias(target) => {
                aliases.insert(ty.name.clone(), target.clone());
            }
            StructDef::Members {
                first_member_type,
                structure_type,
            } => {
                if first_member_type.as_deref() != Some(conventions.structure_type_kind.as_str()) {
                    continue;
                }
                if let Some(constant) = structure_type {
                    constants.insert(ty.name.clone(), constant.clone());
                }
            }
        }
    }

    propagate_aliases(&aliases, &mut constants, |alias, target_constant| {
        alias_structure_type(target_constant, alias, &registry.tags)
    });

    tracing::debug!(structs = constants.len(), "resolved structure types");
    constants
}
