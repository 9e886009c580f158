//! Structural model of an API registry document.
//!
//! Everything here is derived once from the document and read-only afterwards.

/// The parts of a registry the generators care about.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Core API versions, document order
    pub features: Vec<Feature>,

    /// Extensions, document order
    pub extensions: Vec<Extension>,

    /// Command definitions, document order (API variants may repeat a name)
    pub commands: Vec<Command>,

    /// Structure type definitions, document order
    pub types: Vec<StructType>,

    /// Recognized author/vendor tags
    pub tags: TagSet,
}

/// A core API version such as `VK_VERSION_1_0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub name: String,
    pub requires: Vec<Requirement>,
}

/// An optional extension bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    pub name: String,

    /// Window-system platform this extension is restricted to
    pub platform: Option<String>,

    pub requires: Vec<Requirement>,
}

impl Extension {
    /// Whether this extension is restricted to a platform.
    pub fn is_platform_specific(&self) -> bool {
        self.platform.is_some()
    }
}

/// A `require` block inside a feature or extension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requirement {
    /// Nested core version dependency
    pub feature: Option<String>,

    /// Nested extension dependency
    pub extension: Option<String>,

    /// Referenced command names
    pub commands: Vec<String>,

    /// Referenced type names
    pub types: Vec<String>,
}

/// A command entry, either a full definition or an alias of another command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub definition: CommandDef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandDef {
    Signature(Signature),
    Alias(String),
}

impl Command {
    pub fn signature(&self) -> Option<&Signature> {
        match &self.definition {
            CommandDef::Signature(sig) => Some(sig),
            CommandDef::Alias(_) => None,
        }
    }

    pub fn alias_target(&self) -> Option<&str> {
        match &self.definition {
            CommandDef::Signature(_) => None,
            CommandDef::Alias(target) => Some(target),
        }
    }
}

/// Return type and parameters of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub return_type: String,
    pub params: Vec<Param>,
}

impl Signature {
    /// Type of the first parameter, which decides the dispatch scope.
    pub fn first_param_type(&self) -> Option<&str> {
        self.params.first().map(|p| p.param_type.as_str())
    }
}

/// A command parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Whitespace-normalized C type, e.g. `const VkAllocationCallbacks*`
    pub param_type: String,

    pub name: String,

    /// Array declarator following the name, e.g. `[4]`
    pub array: Option<String>,
}

impl Param {
    /// Create a plain (non-array) parameter.
    pub fn new(param_type: impl Into<String>, name: impl Into<String>) -> Self {
        Param {
            param_type: param_type.into(),
            name: name.into(),
            array: None,
        }
    }

    /// C declaration of this parameter, e.g. `const float blendConstants[4]`.
    pub fn declaration(&self) -> String {
        format!(
            "{} {}{}",
            self.param_type,
            self.name,
            self.array.as_deref().unwrap_or("")
        )
    }
}

/// A `category="struct"` type entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructType {
    pub name: String,
    pub definition: StructDef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructDef {
    Members {
        /// Type of the first member
        first_member_type: Option<String>,

        /// Fixed value of the first member, e.g. `VK_STRUCTURE_TYPE_SUBMIT_INFO`
        structure_type: Option<String>,
    },
    Alias(String),
}

impl StructType {
    pub fn alias_target(&self) -> Option<&str> {
        match &self.definition {
            StructDef::Members { .. } => None,
            StructDef::Alias(target) => Some(target),
        }
    }
}

/// The catalog of recognized tags (`KHR`, `EXT`, vendor ids).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TagSet {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// The recognized tag `name` ends with.
    ///
    /// When several tags match (`NV` and `NVX` both end `...NVX`) the longest wins.
    pub fn suffix_of(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .filter(|tag| !tag.is_empty() && name.ends_with(tag.as_str()))
            .max_by_key(|tag| tag.len())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_of_prefers_longest_tag() {
        let tags = TagSet::new(["KHR", "NV", "NVX", "EXT"]);
        assert_eq!(tags.suffix_of("VkFooNVX"), Some("NVX"));
        assert_eq!(tags.suffix_of("VK_STRUCTURE_TYPE_FOO_NV"), Some("NV"));
        assert_eq!(tags.suffix_of("VkFoo2KHR"), Some("KHR"));
        assert_eq!(tags.suffix_of("VkFoo2"), None);
    }

    #[test]
    fn test_param_declaration() {
        let param = Param::new("const VkAllocationCallbacks*", "pAllocator");
        assert_eq!(param.declaration(), "const VkAllocationCallbacks* pAllocator");

        let array = Param {
            array: Some("[4]".to_string()),
            ..Param::new("const float", "blendConstants")
        };
        assert_eq!(array.declaration(), "const float blendConstants[4]");
    }

    #[test]
    fn test_command_accessors() {
        let alias = Command {
            name: "vkFooKHR".to_string(),
            definition: CommandDef::Alias("vkFoo".to_string()),
        };
        assert_eq!(alias.alias_target(), Some("vkFoo"));
        assert!(alias.signature().is_none());
    }
}
