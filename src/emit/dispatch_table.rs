//! Device dispatch table: a C header declaring the table struct and a C
//! source filling it through an injected loader callback.

use super::{render_blocks, Emitter};
use crate::config::Conventions;
use crate::registry::Signature;
use crate::resolve::Joined;

/// Emits the dispatch table header and its loader source.
pub struct DispatchTableEmitter<'a> {
    conventions: &'a Conventions,
    /// File name the source uses to include the header
    header_name: String,
}

impl<'a> DispatchTableEmitter<'a> {
    pub fn new(conventions: &'a Conventions, header_name: impl Into<String>) -> Self {
        DispatchTableEmitter {
            conventions,
            header_name: header_name.into(),
        }
    }

    /// Table definition: one function pointer field per command.
    pub fn render_header(&self, entries: &Joined<Signature>) -> String {
        let c = self.conventions;
        let fields = render_blocks(entries, |name, _| {
            format!("   PFN_{} {};", name, c.member_name(name))
        });

        format!(
            r#"#pragma once
#include <{api_header}>

#if __cplusplus
extern "C" {{
#endif

typedef struct {{
{fields}
}} {table};

void {loader}({table}* table, {device} device);
#if __cplusplus
}}
#endif
"#,
            api_header = c.api_header,
            table = c.dispatch_table_type,
            loader = c.dispatch_table_loader,
            device = c.device_handle,
        )
    }

    /// Loader: looks every command up by its full name and stores it.
    pub fn render_source(&self, entries: &Joined<Signature>) -> String {
        let c = self.conventions;
        let assignments = render_blocks(entries, |name, _| {
            format!(
                "   table->{} = (PFN_{}) load(context, \"{}\");",
                c.member_name(name),
                name,
                name
            )
        });

        format!(
            r#"#include "{header}"
typedef void* (*load_func_t)(void* context, const char* func_name);

static void {loader}Impl({table}* table, void* context, load_func_t load) {{
{assignments}
}}

void {loader}({table}* table, {device} device) {{
   {loader}Impl(table, device, (load_func_t) {proc_addr});
}}
"#,
            header = self.header_name,
            table = c.dispatch_table_type,
            loader = c.dispatch_table_loader,
            device = c.device_handle,
            proc_addr = c.device_proc_addr,
        )
    }
}

impl Emitter for DispatchTableEmitter<'_> {
    type Payload = Signature;

    fn render(&self, entries: &Joined<Signature>) -> Vec<String> {
        vec![self.render_header(entries), self.render_source(entries)]
    }
}
