//! Optional discovery integrations.
//!
//! Each integration probes for its library once and stays inert when the
//! library is not on the classpath.

pub mod deltaspike;
pub mod mock;
pub mod scopes;

pub use deltaspike::DeltaspikeProxyDiscovery;
pub use mock::{MockExtension, MockFrameworkDiscovery};
pub use scopes::{
    ProducerConfigDiscovery, ProducerConfigExtension, TestScopeDiscovery, TestScopeExtension,
    ViewScopeDiscovery, ViewScopeExtension,
};
