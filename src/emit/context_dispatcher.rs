//! Context dispatcher: a CRTP mixin with one forwarding method per command.
//!
//! The derived type supplies `GetDispatchTable()` and `GetDevice()`. Methods
//! of commands taking the device handle first drop that parameter and pass
//! the derived type's device instead.

use super::{render_blocks, Emitter};
use crate::config::Conventions;
use crate::registry::Signature;
use crate::resolve::Joined;

/// Name of the upcast derived pointer inside generated methods.
const IMPL: &str = "impl";

/// Emits the context dispatcher header.
pub struct ContextDispatcherEmitter<'a> {
    conventions: &'a Conventions,
}

impl<'a> ContextDispatcherEmitter<'a> {
    pub fn new(conventions: &'a Conventions) -> Self {
        ContextDispatcherEmitter { conventions }
    }

    fn render_method(&self, name: &str, signature: &Signature) -> String {
        let c = self.conventions;
        let method = c.member_name(name);
        let takes_device = signature.first_param_type() == Some(c.device_handle.as_str());

        let (params, args) = if takes_device {
            let rest = &signature.params[1..];
            let args = std::iter::once(format!("{}->{}()", IMPL, c.device_accessor))
                .chain(rest.iter().map(|p| p.name.clone()))
                .collect::<Vec<_>>();
            (rest, args)
        } else {
            let args = signature.params.iter().map(|p| p.name.clone()).collect();
            (&signature.params[..], args)
        };
        let params = params
            .iter()
            .map(|p| p.declaration())
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "    {ret} {method} ({params}) noexcept {{\n        \
             auto {IMPL} = static_cast<Derived*>(this);\n        \
             return {IMPL}->{accessor}().{method}({args});\n    \
             }}",
            ret = signature.return_type,
            accessor = c.dispatch_table_accessor,
            args = args.join(", "),
        )
    }

    pub fn render_header(&self, entries: &Joined<Signature>) -> String {
        let methods = render_blocks(entries, |name, signature| {
            self.render_method(name, signature)
        });

        format!(
            "#pragma once\n\
             #include <{api_header}>\n\
             \n\
             template<typename Derived>\n\
             struct {dispatcher} {{\n\
             {methods}\n\
             }};\n",
            api_header = self.conventions.api_header,
            dispatcher = self.conventions.dispatcher_type,
        )
    }
}

impl Emitter for ContextDispatcherEmitter<'_> {
    type Payload = Signature;

    fn render(&self, entries: &Joined<Signature>) -> Vec<String> {
        vec![self.render_header(entries)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Param;
    use crate::resolve::{Conjunction, GuardExpr, Guarded};

    fn guarded(signature: Signature, symbol: &str) -> Guarded<Signature> {
        Guarded {
            payload: signature,
            guard: GuardExpr::from_iter([Conjunction::from_iter([symbol])]),
        }
    }

    #[test]
    fn test_device_parameter_is_supplied_by_derived() {
        let mut entries = Joined::new();
        entries.insert(
            "vkDestroyFence".to_string(),
            guarded(
                Signature {
                    return_type: "void".to_string(),
                    params: vec![
                        Param::new("VkDevice", "device"),
                        Param::new("VkFence", "fence"),
                        Param::new("const VkAllocationCallbacks*", "pAllocator"),
                    ],
                },
                "VK_VERSION_1_0",
            ),
        );

        let conventions = Conventions::default();
        let header = ContextDispatcherEmitter::new(&conventions).render_header(&entries);

        assert_eq!(
            header,
            r#"#pragma once
#include <vulkan/vulkan.h>

template<typename Derived>
struct VulkanContextDispatcher {
#if VK_VERSION_1_0
    void DestroyFence (VkFence fence, const VkAllocationCallbacks* pAllocator) noexcept {
        auto impl = static_cast<Derived*>(this);
        return impl->GetDispatchTable().DestroyFence(impl->GetDevice(), fence, pAllocator);
    }
#endif // VK_VERSION_1_0
};
"#
        );
    }

    #[test]
    fn test_other_handles_forward_unchanged() {
        let mut entries = Joined::new();
        entries.insert(
            "vkCmdSetBlendConstants".to_string(),
            guarded(
                Signature {
                    return_type: "void".to_string(),
                    params: vec![
                        Param::new("VkCommandBuffer", "commandBuffer"),
                        Param {
                            array: Some("[4]".to_string()),
                            ..Param::new("const float", "blendConstants")
                        },
                    ],
                },
                "VK_VERSION_1_0",
            ),
        );

        let conventions = Conventions::default();
        let header = ContextDispatcherEmitter::new(&conventions).render_header(&entries);

        assert!(header.contains(
            "    void CmdSetBlendConstants (VkCommandBuffer commandBuffer, const float blendConstants[4]) noexcept {\n"
        ));
        assert!(header.contains(
            "        return impl->GetDispatchTable().CmdSetBlendConstants(commandBuffer, blendConstants);\n"
        ));
    }

    #[test]
    fn test_device_only_command_has_empty_parameter_list() {
        let mut entries = Joined::new();
        entries.insert(
            "vkDeviceWaitIdle".to_string(),
            guarded(
                Signature {
                    return_type: "VkResult".to_string(),
                    params: vec![Param::new("VkDevice", "device")],
                },
                "VK_VERSION_1_0",
            ),
        );

        let conventions = Conventions::default();
        let header = ContextDispatcherEmitter::new(&conventions).render_header(&entries);

        assert!(header.contains("    VkResult DeviceWaitIdle () noexcept {\n"));
        assert!(header.contains(".DeviceWaitIdle(impl->GetDevice());\n"));
    }
}
