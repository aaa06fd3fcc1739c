use beanscope_api::TypeResolver;
use once_cell::sync::OnceCell;
use tracing::debug;

/// Detects an optional library by looking up one of its types.
///
/// The answer is computed on first use and kept for the lifetime of the
/// probe, so an absent library is never probed again.
#[derive(Debug)]
pub struct LibraryProbe {
    sentinel: &'static str,
    present: OnceCell<bool>,
}

impl LibraryProbe {
    pub const fn new(sentinel: &'static str) -> Self {
        Self {
            sentinel,
            present: OnceCell::new(),
        }
    }

    pub fn sentinel(&self) -> &'static str {
        self.sentinel
    }

    pub fn is_present(&self, resolver: &dyn TypeResolver) -> bool {
        *self.present.get_or_init(|| {
            let present = resolver.is_present(self.sentinel);
            debug!("Library probe {}: present={}", self.sentinel, present);
            present
        })
    }
}
