use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::fmt;

/// Fully-qualified binary class name, e.g. `com.example.Outer$Inner`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassName(Cow<'static, str>);

impl ClassName {
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Package portion of the name, empty for the default package.
    pub fn package(&self) -> &str {
        match self.0.rfind('.') {
            Some(idx) => &self.0[..idx],
            None => "",
        }
    }

    pub fn simple_name(&self) -> &str {
        match self.0.rfind('.') {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ClassName {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

impl From<String> for ClassName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&ClassName> for ClassName {
    fn from(name: &ClassName) -> Self {
        name.clone()
    }
}

impl Borrow<str> for ClassName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ClassName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_and_simple_name() {
        let name = ClassName::from("com.example.Outer$Inner");
        assert_eq!(name.package(), "com.example");
        assert_eq!(name.simple_name(), "Outer$Inner");

        let default_pkg = ClassName::from("Foo");
        assert_eq!(default_pkg.package(), "");
        assert_eq!(default_pkg.simple_name(), "Foo");
    }

    #[test]
    fn test_static_and_owned_names_compare_equal() {
        const STATIC: ClassName = ClassName::from_static("java.lang.Object");
        assert_eq!(STATIC, ClassName::from("java.lang.Object".to_string()));
    }
}
