//! API registry document model.
//!
//! This module reads the registry (`vk.xml`) into the features, extensions,
//! commands and structure types the generators resolve against.

pub mod errors;
pub mod parser;
pub mod types;
pub mod xml;

pub use errors::RegistryError;
pub use parser::{parse_file, parse_str};
pub use types::{
    Command, CommandDef, Extension, Feature, Param, Registry, Requirement, Signature, StructDef,
    StructType, TagSet,
};
