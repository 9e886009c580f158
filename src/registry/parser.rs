//! Registry document parser.
//!
//! Turns the element tree into the [`Registry`] model. Only structural
//! presence is checked; the registry's semantics are taken at face value.

use std::path::Path;

use anyhow::{Context, Result};

use super::errors::RegistryError;
use super::types::{
    Command, CommandDef, Extension, Feature, Param, Registry, Requirement, Signature, StructDef,
    StructType, TagSet,
};
use super::xml::{self, Element, Node};

/// Type category of the entries the structure-type pass looks at.
const STRUCT_CATEGORY: &str = "struct";

/// Read and parse a registry document from disk.
pub fn parse_file(path: &Path) -> Result<Registry> {
    let content = crate::util::fs::read_to_string(path)?;
    parse_str(&content).with_context(|| format!("failed to parse registry: {}", path.display()))
}

/// Parse registry document content.
pub fn parse_str(content: &str) -> Result<Registry, RegistryError> {
    let root = xml::parse_document(content)?;
    if root.name != "registry" {
        return Err(RegistryError::UnexpectedRoot { found: root.name });
    }

    let commands = root.require_child("commands")?;
    let types = root.require_child("types")?;
    let extensions = root.require_child("extensions")?;
    let tags = root.require_child("tags")?;

    let registry = Registry {
        features: root
            .elements_named("feature")
            .map(parse_feature)
            .collect::<Result<_, _>>()?,
        extensions: parse_extensions(extensions)?,
        commands: commands
            .elements_named("command")
            .map(parse_command)
            .collect::<Result<_, _>>()?,
        types: types
            .elements_named("type")
            .filter(|t| t.attr("category") == Some(STRUCT_CATEGORY))
            .map(parse_struct)
            .collect::<Result<_, _>>()?,
        tags: TagSet::new(
            tags.elements_named("tag")
                .map(|tag| tag.require_attr("name").map(str::to_string))
                .collect::<Result<Vec<_>, _>>()?,
        ),
    };

    tracing::debug!(
        features = registry.features.len(),
        extensions = registry.extensions.len(),
        commands = registry.commands.len(),
        structs = registry.types.len(),
        tags = registry.tags.len(),
        "parsed registry"
    );

    Ok(registry)
}

fn parse_feature(node: &Element) -> Result<Feature, RegistryError> {
    Ok(Feature {
        name: node.require_attr("name")?.to_string(),
        requires: parse_requirements(node)?,
    })
}

fn parse_extensions(node: &Element) -> Result<Vec<Extension>, RegistryError> {
    let mut extensions = Vec::new();

    for ext in node.elements_named("extension") {
        let Some(name) = ext.attr("name") else {
            tracing::debug!("skipping extension without a name");
            continue;
        };
        extensions.push(Extension {
            name: name.to_string(),
            platform: ext.attr("platform").map(str::to_string),
            requires: parse_requirements(ext)?,
        });
    }

    Ok(extensions)
}

// `remove` and `deprecate` blocks never make a name available.
fn parse_requirements(node: &Element) -> Result<Vec<Requirement>, RegistryError> {
    node.elements_named("require")
        .map(|req| {
            Ok(Requirement {
                feature: req.attr("feature").map(str::to_string),
                extension: req.attr("extension").map(str::to_string),
                commands: referenced_names(req, "command")?,
                types: referenced_names(req, "type")?,
            })
        })
        .collect()
}

fn referenced_names(req: &Element, kind: &str) -> Result<Vec<String>, RegistryError> {
    req.elements_named(kind)
        .map(|e| e.require_attr("name").map(str::to_string))
        .collect()
}

fn parse_command(node: &Element) -> Result<Command, RegistryError> {
    if let Some(target) = node.attr("alias") {
        return Ok(Command {
            name: node.require_attr("name")?.to_string(),
            definition: CommandDef::Alias(target.to_string()),
        });
    }

    let proto = node.require_child("proto")?;
    let return_type = proto.require_child("type")?.require_text()?;
    let name = proto.require_child("name")?.require_text()?;
    let params = node
        .elements_named("param")
        .map(parse_param)
        .collect::<Result<_, _>>()?;

    Ok(Command {
        name,
        definition: CommandDef::Signature(Signature {
            return_type,
            params,
        }),
    })
}

/// Split `const <type>T</type>* <name>p</name>[N]` into type, name and array suffix.
fn parse_param(node: &Element) -> Result<Param, RegistryError> {
    node.require_child("type")?;

    let mut decl = String::new();
    let mut name: Option<String> = None;
    let mut array = String::new();

    for child in &node.children {
        let target = if name.is_some() { &mut array } else { &mut decl };
        match child {
            Node::Text(text) => target.push_str(text),
            Node::Element(e) if e.name == "name" && name.is_none() => {
                name = Some(e.require_text()?);
            }
            Node::Element(e) if e.name == "comment" => {}
            Node::Element(e) => target.push_str(&e.text()),
        }
    }

    let name = name.ok_or_else(|| RegistryError::MissingElement {
        parent: node.name.clone(),
        child: "name".to_string(),
    })?;
    let array: String = array.split_whitespace().collect();

    Ok(Param {
        param_type: decl.split_whitespace().collect::<Vec<_>>().join(" "),
        name,
        array: (!array.is_empty()).then_some(array),
    })
}

fn parse_struct(node: &Element) -> Result<StructType, RegistryError> {
    let name = node.require_attr("name")?.to_string();

    if let Some(target) = node.attr("alias") {
        return Ok(StructType {
            name,
            definition: StructDef::Alias(target.to_string()),
        });
    }

    let first = node.child("member");
    let first_member_type = first
        .and_then(|m| m.child("type"))
        .map(|t| t.text().trim().to_string());
    let structure_type = first.and_then(|m| m.attr("values")).map(str::to_string);

    Ok(StructType {
        name,
        definition: StructDef::Members {
            first_member_type,
            structure_type,
        },
    })
}
