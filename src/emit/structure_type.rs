//! Compile-time `sType` lookup by structure type.

use super::{render_blocks, Emitter};
use crate::config::Conventions;
use crate::resolve::Joined;

/// Template parameter the lookup compares against.
const TYPE_PARAM: &str = "T";

/// Emits the structure type lookup header.
pub struct StructureTypeEmitter<'a> {
    conventions: &'a Conventions,
}

impl<'a> StructureTypeEmitter<'a> {
    pub fn new(conventions: &'a Conventions) -> Self {
        StructureTypeEmitter { conventions }
    }

    pub fn render_header(&self, entries: &Joined<String>) -> String {
        let branches = render_blocks(entries, |name, constant| {
            format!(
                "   if constexpr(std::same_as<{TYPE_PARAM}, {name}>) {{\n       \
                 return {constant};\n   \
                 }}"
            )
        });

        // The trailing throw is only reached for an unknown type, which makes
        // the consteval call ill-formed at compile time.
        format!(
            r#"#pragma once
#include <concepts>

#include <{api_header}>

template<typename S>
consteval {kind} {function}() {{
   using {TYPE_PARAM} = std::remove_cvref_t<S>;
{branches}
   throw "Unknown sType!";
}}

template<typename S>
constexpr {kind} {function}(S&&) {{
   return {function}<S>();
}}
"#,
            api_header = self.conventions.api_header,
            kind = self.conventions.structure_type_kind,
            function = self.conventions.structure_type_function,
        )
    }
}

impl Emitter for StructureTypeEmitter<'_> {
    type Payload = String;

    fn render(&self, entries: &Joined<String>) -> Vec<String> {
        vec![self.render_header(entries)]
    }
}
