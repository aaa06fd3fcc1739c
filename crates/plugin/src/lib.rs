pub mod context;
pub mod extension;
pub mod probe;
pub mod registration;
pub mod scanner;

pub use context::{ClassRef, DiscoveryContext};
pub use extension::DiscoveryExtension;
pub use probe::LibraryProbe;
pub use registration::DiscoveryExtensions;
pub use scanner::ClasspathScanner;
