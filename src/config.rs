//! Naming conventions shared by the generator passes.
//!
//! The defaults describe Vulkan and the abstraction layer that consumes the
//! generated code. Nothing is read from disk or the environment.

/// API and consumer names the passes assume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conventions {
    /// Namespace prefix stripped from command names for fields and methods
    pub command_prefix: String,

    /// Handle kinds whose commands dispatch through a device
    pub device_scoped_handles: Vec<String>,

    /// Handle kind the context dispatcher supplies itself
    pub device_handle: String,

    /// Command used to fill the dispatch table; never part of it
    pub device_proc_addr: String,

    /// Type of the `sType` discriminator member
    pub structure_type_kind: String,

    /// Header providing the API declarations
    pub api_header: String,

    /// Emitted dispatch table struct
    pub dispatch_table_type: String,

    /// Emitted dispatch table loader
    pub dispatch_table_loader: String,

    /// Emitted context dispatcher mixin
    pub dispatcher_type: String,

    /// Accessor the mixin's derived type provides for its dispatch table
    pub dispatch_table_accessor: String,

    /// Accessor the mixin's derived type provides for its device handle
    pub device_accessor: String,

    /// Emitted structure type lookup
    pub structure_type_function: String,
}

impl Default for Conventions {
    fn default() -> Self {
        Conventions {
            command_prefix: "vk".to_string(),
            device_scoped_handles: vec![
                "VkDevice".to_string(),
                "VkQueue".to_string(),
                "VkCommandBuffer".to_string(),
            ],
            device_handle: "VkDevice".to_string(),
            device_proc_addr: "vkGetDeviceProcAddr".to_string(),
            structure_type_kind: "VkStructureType".to_string(),
            api_header: "vulkan/vulkan.h".to_string(),
            dispatch_table_type: "VulkanDeviceDispatchTable".to_string(),
            dispatch_table_loader: "LoadVulkanDeviceDispatchTable".to_string(),
            dispatcher_type: "VulkanContextDispatcher".to_string(),
            dispatch_table_accessor: "GetDispatchTable".to_string(),
            device_accessor: "GetDevice".to_string(),
            structure_type_function: "SType".to_string(),
        }
    }
}

impl Conventions {
    /// Vulkan conventions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix stripped from command names.
    pub fn with_command_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.command_prefix = prefix.into();
        self
    }

    /// Set the device-scoped handle kinds.
    pub fn with_device_scoped_handles(mut self, handles: Vec<String>) -> Self {
        self.device_scoped_handles = handles;
        self
    }

    /// Set the command excluded from the dispatch table.
    pub fn with_device_proc_addr(mut self, name: impl Into<String>) -> Self {
        self.device_proc_addr = name.into();
        self
    }

    /// Set the emitted dispatch table and loader names.
    pub fn with_dispatch_table_names(
        mut self,
        table: impl Into<String>,
        loader: impl Into<String>,
    ) -> Self {
        self.dispatch_table_type = table.into();
        self.dispatch_table_loader = loader.into();
        self
    }

    /// Whether a handle kind makes a command device-scoped.
    pub fn is_device_scoped(&self, handle: &str) -> bool {
        self.device_scoped_handles.iter().any(|h| h == handle)
    }

    /// Field/method name for a command: `vkCmdDraw` -> `CmdDraw`.
    ///
    /// Only a matching prefix is removed; a name without it is returned as is
    /// rather than losing its first characters.
    pub fn member_name<'a>(&self, command: &'a str) -> &'a str {
        command
            .strip_prefix(self.command_prefix.as_str())
            .unwrap_or(command)
    }
}
