use super::name::ClassName;
use serde::{Deserialize, Serialize};

/// Identity of the test being bootstrapped, handed over by a lifecycle adapter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TestConfiguration {
    test_class: ClassName,
    test_method: Option<String>,
    #[serde(default)]
    additional_classes: Vec<ClassName>,
}

impl TestConfiguration {
    pub fn new(test_class: impl Into<ClassName>) -> Self {
        Self {
            test_class: test_class.into(),
            test_method: None,
            additional_classes: Vec::new(),
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.test_method = Some(method.into());
        self
    }

    /// Extra classes the adapter wants deployed alongside the test class.
    pub fn with_additional_class(mut self, class: impl Into<ClassName>) -> Self {
        self.additional_classes.push(class.into());
        self
    }

    pub fn test_class(&self) -> &ClassName {
        &self.test_class
    }

    pub fn test_method(&self) -> Option<&str> {
        self.test_method.as_deref()
    }

    pub fn additional_classes(&self) -> &[ClassName] {
        &self.additional_classes
    }
}
