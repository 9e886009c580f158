//! Test utilities for vkreg unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use vkreg::test_support::RegistryFixture;
//!
//! let xml = RegistryFixture::new()
//!     .feature("VK_VERSION_1_0", &["vkCreateX"], &[])
//!     .command("vkCreateX", "VkResult", &["VkDevice device"])
//!     .to_xml();
//! ```

pub mod fixtures;

// Re-export fixtures for convenience
pub use fixtures::*;
