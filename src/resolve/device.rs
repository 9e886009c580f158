//! Device-scope classification of commands.

use indexmap::IndexMap;

use super::alias::{propagate_aliases, AliasMap};
use crate::config::Conventions;
use crate::registry::{CommandDef, Registry, Signature};

/// Device-scoped command name -> signature.
///
/// Non-alias commands come first in document order, then the aliases whose
/// target was classified.
pub type DeviceCommands = IndexMap<String, Signature>;

/// Collect the commands dispatched through a device, queue or command buffer.
///
/// The device proc-addr command is left out: it is what fills the dispatch
/// table in the first place.
pub fn classify_device_commands(registry: &Registry, conventions: &Conventions) -> DeviceCommands {
    let mut aliases = AliasMap::new();
    let mut commands = DeviceCommands::new();

    for command in &registry.commands {
        let signature = match &command.definition {
            CommandDef::Alias(target) => {
                aliases.insert(command.name.clone(), target.clone());
                continue;
            }
            CommandDef::Signature(signature) => signature,
        };

        let scoped = signature
            .first_param_type()
            .is_some_and(|handle| conventions.is_device_scoped(handle));
        if !scoped || command.name == conventions.device_proc_addr {
            continue;
        }
        commands.insert(command.name.clone(), signature.clone());
    }

    // TODO: an alias may name a type the installed vulkan.h predates when the
    // registry is newer than the headers; gate aliases on the header version.
    propagate_aliases(&aliases, &mut commands, |_, signature| signature.clone());

    tracing::debug!(commands = commands.len(), "classified device commands");
    commands
}
