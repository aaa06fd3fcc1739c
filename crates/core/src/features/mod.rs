//! Built-in discovery extensions.

pub mod standard;
pub mod test_tool;

pub use standard::StandardDiscovery;
pub use test_tool::TestToolDiscovery;
