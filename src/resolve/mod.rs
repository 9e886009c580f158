//! Resolution passes over a parsed registry.
//!
//! Each generator joins a payload mapping (signatures, structure type
//! constants) with the guard mapping of the same names. Names missing from
//! either side are dropped.

pub mod alias;
pub mod device;
pub mod guard;

use indexmap::IndexMap;

pub use alias::{alias_structure_type, propagate_aliases, resolve_structure_types, AliasMap};
pub use device::{classify_device_commands, DeviceCommands};
pub use guard::{resolve_guards, Conjunction, GuardExpr, GuardMap, RefKind};

/// A payload together with the condition under which it exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guarded<P> {
    pub payload: P,
    pub guard: GuardExpr,
}

/// Name -> guarded payload, in emission order.
pub type Joined<P> = IndexMap<String, Guarded<P>>;

/// Join in guard order: names appear in the order they were first referenced.
pub fn join_in_guard_order<P: Clone>(guards: &GuardMap, payloads: &IndexMap<String, P>) -> Joined<P> {
    guards
        .iter()
        .filter_map(|(name, guard)| {
            let payload = payloads.get(name)?;
            Some((
                name.clone(),
                Guarded {
                    payload: payload.clone(),
                    guard: guard.clone(),
                },
            ))
        })
        .collect()
}

/// Join in payload order: names appear in the order they were classified.
pub fn join_in_payload_order<P: Clone>(
    payloads: &IndexMap<String, P>,
    guards: &GuardMap,
) -> Joined<P> {
    payloads
        .iter()
        .filter_map(|(name, payload)| {
            let guard = guards.get(name)?;
            Some((
                name.clone(),
                Guarded {
                    payload: payload.clone(),
                    guard: guard.clone(),
                },
            ))
        })
        .collect()
}
