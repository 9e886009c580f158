//! Registry document fixtures.
//!
//! Builds small registry documents shaped like `vk.xml` so tests can state
//! only the entries they care about.

use std::fmt::Write;

#[derive(Debug, Clone, Default)]
struct RequireFixture {
    feature: Option<String>,
    extension: Option<String>,
    commands: Vec<String>,
    types: Vec<String>,
}

#[derive(Debug, Clone)]
struct ExtensionFixture {
    name: String,
    platform: Option<String>,
    requires: Vec<RequireFixture>,
}

/// Fixture for a registry document.
#[derive(Debug, Clone, Default)]
pub struct RegistryFixture {
    tags: Vec<String>,
    types: Vec<String>,
    commands: Vec<String>,
    features: Vec<(String, RequireFixture)>,
    extensions: Vec<ExtensionFixture>,
}

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl RegistryFixture {
    /// Create an empty registry fixture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a recognized tag.
    pub fn tag(mut self, name: &str) -> Self {
        self.tags.push(name.to_string());
        self
    }

    /// Add a core feature with one require block.
    pub fn feature(mut self, name: &str, commands: &[&str], types: &[&str]) -> Self {
        self.features.push((
            name.to_string(),
            RequireFixture {
                commands: names(commands),
                types: names(types),
                ..Default::default()
            },
        ));
        self
    }

    /// Add a require block to extension `name`, creating the extension if needed.
    pub fn extension(self, name: &str, commands: &[&str], types: &[&str]) -> Self {
        self.extension_requirement(name, None, None, commands, types)
    }

    /// Add a require block with nested dependencies to extension `name`.
    pub fn extension_requirement(
        mut self,
        name: &str,
        feature: Option<&str>,
        extension: Option<&str>,
        commands: &[&str],
        types: &[&str],
    ) -> Self {
        let require = RequireFixture {
            feature: feature.map(str::to_string),
            extension: extension.map(str::to_string),
            commands: names(commands),
            types: names(types),
        };
        match self.extensions.iter_mut().find(|e| e.name == name) {
            Some(ext) => ext.requires.push(require),
            None => self.extensions.push(ExtensionFixture {
                name: name.to_string(),
                platform: None,
                requires: vec![require],
            }),
        }
        self
    }

    /// Add a platform-restricted extension with one require block.
    pub fn platform_extension(
        mut self,
        name: &str,
        platform: &str,
        commands: &[&str],
        types: &[&str],
    ) -> Self {
        self.extensions.push(ExtensionFixture {
            name: name.to_string(),
            platform: Some(platform.to_string()),
            requires: vec![RequireFixture {
                commands: names(commands),
                types: names(types),
                ..Default::default()
            }],
        });
        self
    }

    /// Add a command definition. Parameters are C declarations such as
    /// `"const VkAllocationCallbacks* pAllocator"`.
    pub fn command(mut self, name: &str, return_type: &str, params: &[&str]) -> Self {
        let mut xml = format!(
            "    <command>\n      <proto><type>{}</type> <name>{}</name></proto>\n",
            return_type, name
        );
        for param in params.iter().copied() {
            let (decl, param_name) = param.rsplit_once(' ').unwrap_or(("", param));
            let (constness, decl) = match decl.strip_prefix("const ") {
                Some(rest) => ("const ", rest),
                None => ("", decl),
            };
            let core = decl.trim_end_matches('*');
            let pointers = &decl[core.len()..];
            writeln!(
                xml,
                "      <param>{}<type>{}</type>{} <name>{}</name></param>",
                constness, core, pointers, param_name
            )
            .unwrap();
        }
        xml.push_str("    </command>");
        self.commands.push(xml);
        self
    }

    /// Add a command alias.
    pub fn command_alias(mut self, name: &str, target: &str) -> Self {
        self.commands.push(format!(
            "    <command name=\"{}\" alias=\"{}\"/>",
            name, target
        ));
        self
    }

    /// Add a tagged structure whose first member is the `sType` discriminator.
    pub fn structure(mut self, name: &str, structure_type: &str) -> Self {
        self.types.push(format!(
            "    <type category=\"struct\" name=\"{name}\">\n      \
             <member values=\"{structure_type}\"><type>VkStructureType</type> <name>sType</name></member>\n      \
             <member optional=\"true\">const <type>void</type>* <name>pNext</name></member>\n    \
             </type>"
        ));
        self
    }

    /// Add a structure without an `sType` discriminator.
    pub fn plain_structure(mut self, name: &str) -> Self {
        self.types.push(format!(
            "    <type category=\"struct\" name=\"{name}\">\n      \
             <member><type>uint32_t</type> <name>width</name></member>\n    \
             </type>"
        ));
        self
    }

    /// Add a structure alias.
    pub fn struct_alias(mut self, name: &str, target: &str) -> Self {
        self.types.push(format!(
            "    <type category=\"struct\" name=\"{}\" alias=\"{}\"/>",
            name, target
        ));
        self
    }

    /// Render the fixture as a registry document.
    pub fn to_xml(&self) -> String {
        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<registry>\n");

        xml.push_str("  <tags>\n");
        for tag in &self.tags {
            writeln!(xml, "    <tag name=\"{}\" author=\"fixture\" contact=\"none\"/>", tag).unwrap();
        }
        xml.push_str("  </tags>\n");

        xml.push_str("  <types>\n    <comment>fixture types</comment>\n");
        for ty in &self.types {
            writeln!(xml, "{}", ty).unwrap();
        }
        xml.push_str("  </types>\n");

        xml.push_str("  <commands>\n");
        for command in &self.commands {
            writeln!(xml, "{}", command).unwrap();
        }
        xml.push_str("  </commands>\n");

        for (name, require) in &self.features {
            writeln!(xml, "  <feature api=\"vulkan\" name=\"{}\">", name).unwrap();
            write_require(&mut xml, require);
            xml.push_str("  </feature>\n");
        }

        xml.push_str("  <extensions>\n");
        for ext in &self.extensions {
            write!(xml, "    <extension name=\"{}\"", ext.name).unwrap();
            if let Some(platform) = &ext.platform {
                write!(xml, " platform=\"{}\"", platform).unwrap();
            }
            xml.push_str(">\n");
            for require in &ext.requires {
                write_require(&mut xml, require);
            }
            xml.push_str("    </extension>\n");
        }
        xml.push_str("  </extensions>\n");

        xml.push_str("</registry>\n");
        xml
    }
}

fn write_require(xml: &mut String, require: &RequireFixture) {
    xml.push_str("      <require");
    if let Some(feature) = &require.feature {
        write!(xml, " feature=\"{}\"", feature).unwrap();
    }
    if let Some(extension) = &require.extension {
        write!(xml, " extension=\"{}\"", extension).unwrap();
    }
    xml.push_str(">\n");
    for ty in &require.types {
        writeln!(xml, "        <type name=\"{}\"/>", ty).unwrap();
    }
    for command in &require.commands {
        writeln!(xml, "        <command name=\"{}\"/>", command).unwrap();
    }
    xml.push_str("      </require>\n");
}
