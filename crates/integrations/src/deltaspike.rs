//! DeltaSpike partial-bean proxy support.
//!
//! Processing the [`SUPPORT_DELTASPIKE_PROXY`] marker pulls in the bean
//! archives holding the DeltaSpike proxy machinery. Both the older and the
//! newer proxy layouts are probed.

use beanscope_api::{ClassInfo, ClassName, Result};
use beanscope_plugin::{ClassRef, DiscoveryContext, DiscoveryExtension, LibraryProbe};
use tracing::debug;

pub const SUPPORT_DELTASPIKE_PROXY: ClassName =
    ClassName::from_static("io.github.beanscope.deltaspike.SupportDeltaspikeProxy");

#[derive(Debug)]
pub struct DeltaspikeProxyDiscovery {
    sentinels: [LibraryProbe; 2],
}

impl Default for DeltaspikeProxyDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl DeltaspikeProxyDiscovery {
    pub fn new() -> Self {
        Self {
            sentinels: [
                LibraryProbe::new("org.apache.deltaspike.proxy.impl.invocation.InterceptorLookup"),
                LibraryProbe::new(
                    "org.apache.deltaspike.proxy.spi.invocation.DeltaSpikeProxyInvocationHandler",
                ),
            ],
        }
    }
}

impl DiscoveryExtension for DeltaspikeProxyDiscovery {
    fn name(&self) -> &str {
        "deltaspike-proxy"
    }

    fn process(&self, ctx: &mut dyn DiscoveryContext, class: &ClassInfo) -> Result<()> {
        if class.name != SUPPORT_DELTASPIKE_PROXY {
            return Ok(());
        }
        for probe in &self.sentinels {
            if !probe.is_present(ctx.resolver()) {
                continue;
            }
            let base = ClassName::new(probe.sentinel());
            let found = ctx.scan_bean_archives(std::slice::from_ref(&base));
            debug!("DeltaSpike proxy support via {}: {} classes", base, found.len());
            for name in &found {
                ctx.process_bean(ClassRef::Class(name));
            }
        }
        Ok(())
    }
}
