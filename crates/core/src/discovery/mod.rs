//! The discovery engine: worklist state, traversal loop and the freeze
//! into a deployment descriptor.

pub mod assembler;
pub mod context;
pub mod driver;
pub mod graph;

pub use assembler::{DeploymentAssembler, DiscoveryReport};
pub use context::{DiscoveryOutcome, DiscoveryState};
pub use driver::{DiscoveryDriver, DiscoveryStats};
pub use graph::DiscoveryGraph;
