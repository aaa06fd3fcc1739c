use super::markers;
use super::name::ClassName;
use super::types::TypeRef;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Enum,
    /// A marker definition (annotation type).
    Annotation,
    Primitive,
}

/// One declarative marker attached to a type or member.
///
/// Markers carry at most two attributes: `value` holds direct class
/// references, `late` holds class names resolved only when needed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MarkerUse {
    pub name: ClassName,
    #[serde(default)]
    pub value: Vec<ClassName>,
    #[serde(default)]
    pub late: Vec<String>,
}

impl MarkerUse {
    pub fn new(name: impl Into<ClassName>) -> Self {
        Self {
            name: name.into(),
            value: Vec::new(),
            late: Vec::new(),
        }
    }

    pub fn with_value(mut self, class: impl Into<ClassName>) -> Self {
        self.value.push(class.into());
        self
    }

    pub fn with_late(mut self, class_name: impl Into<String>) -> Self {
        self.late.push(class_name.into());
        self
    }
}

fn find_marker<'a>(markers: &'a [MarkerUse], name: &ClassName) -> Option<&'a MarkerUse> {
    markers.iter().find(|m| &m.name == name)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: String,
    pub declared: TypeRef,
    #[serde(default)]
    pub markers: Vec<MarkerUse>,
}

impl FieldInfo {
    pub fn new(name: impl Into<String>, declared: TypeRef) -> Self {
        Self {
            name: name.into(),
            declared,
            markers: Vec::new(),
        }
    }

    pub fn with_marker(mut self, marker: impl Into<MarkerUse>) -> Self {
        self.markers.push(marker.into());
        self
    }

    pub fn marker(&self, name: &ClassName) -> Option<&MarkerUse> {
        find_marker(&self.markers, name)
    }

    pub fn has_marker(&self, name: &ClassName) -> bool {
        self.marker(name).is_some()
    }

    /// The erased declared type.
    pub fn raw_type(&self) -> Option<&ClassName> {
        self.declared.raw()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MethodInfo {
    pub name: String,
    #[serde(default)]
    pub params: Vec<TypeRef>,
    /// `None` for `void` methods.
    pub returns: Option<TypeRef>,
    #[serde(default)]
    pub markers: Vec<MarkerUse>,
}

impl MethodInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns: None,
            markers: Vec::new(),
        }
    }

    pub fn param(mut self, ty: TypeRef) -> Self {
        self.params.push(ty);
        self
    }

    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.returns = Some(ty);
        self
    }

    pub fn with_marker(mut self, marker: impl Into<MarkerUse>) -> Self {
        self.markers.push(marker.into());
        self
    }

    pub fn marker(&self, name: &ClassName) -> Option<&MarkerUse> {
        find_marker(&self.markers, name)
    }

    pub fn has_marker(&self, name: &ClassName) -> bool {
        self.marker(name).is_some()
    }
}

impl From<ClassName> for MarkerUse {
    fn from(name: ClassName) -> Self {
        MarkerUse::new(name)
    }
}

impl From<&str> for MarkerUse {
    fn from(name: &str) -> Self {
        MarkerUse::new(name)
    }
}

/// Reflective view of a loadable class: everything discovery needs to know.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClassInfo {
    pub name: ClassName,
    #[serde(default)]
    pub kind: ClassKind,
    #[serde(default)]
    pub is_abstract: bool,
    /// Classpath root the class was loaded from.
    pub location: Option<Url>,
    /// Generic superclass, absent for interfaces, primitives and the root type.
    pub superclass: Option<TypeRef>,
    #[serde(default)]
    pub interfaces: Vec<ClassName>,
    #[serde(default)]
    pub markers: Vec<MarkerUse>,
    #[serde(default)]
    pub fields: Vec<FieldInfo>,
    #[serde(default)]
    pub methods: Vec<MethodInfo>,
}

impl ClassInfo {
    pub fn builder(name: impl Into<ClassName>) -> ClassInfoBuilder {
        ClassInfoBuilder::new(name.into())
    }

    pub fn primitive(name: &'static str) -> Self {
        ClassInfoBuilder::new(ClassName::from_static(name))
            .kind(ClassKind::Primitive)
            .build()
    }

    pub fn marker(&self, name: &ClassName) -> Option<&MarkerUse> {
        find_marker(&self.markers, name)
    }

    pub fn has_marker(&self, name: &ClassName) -> bool {
        self.marker(name).is_some()
    }

    pub fn is_primitive(&self) -> bool {
        self.kind == ClassKind::Primitive
    }

    pub fn is_marker_definition(&self) -> bool {
        self.kind == ClassKind::Annotation
    }

    pub fn implements(&self, interface: &ClassName) -> bool {
        self.interfaces.iter().any(|i| i == interface)
    }

    /// A stereotype that is itself an alternative.
    pub fn is_alternative_stereotype(&self) -> bool {
        self.has_marker(&markers::STEREOTYPE) && self.has_marker(&markers::ALTERNATIVE)
    }
}

pub struct ClassInfoBuilder {
    info: ClassInfo,
}

impl ClassInfoBuilder {
    fn new(name: ClassName) -> Self {
        Self {
            info: ClassInfo {
                name,
                kind: ClassKind::Class,
                is_abstract: false,
                location: None,
                superclass: Some(TypeRef::Class(markers::OBJECT)),
                interfaces: Vec::new(),
                markers: Vec::new(),
                fields: Vec::new(),
                methods: Vec::new(),
            },
        }
    }

    pub fn kind(mut self, kind: ClassKind) -> Self {
        if kind != ClassKind::Class && kind != ClassKind::Enum {
            self.info.superclass = None;
        }
        self.info.kind = kind;
        self
    }

    pub fn abstract_class(mut self) -> Self {
        self.info.is_abstract = true;
        self
    }

    pub fn located_at(mut self, root: Url) -> Self {
        self.info.location = Some(root);
        self
    }

    pub fn extends(mut self, superclass: TypeRef) -> Self {
        self.info.superclass = Some(superclass);
        self
    }

    pub fn implements(mut self, interface: impl Into<ClassName>) -> Self {
        self.info.interfaces.push(interface.into());
        self
    }

    pub fn marker(mut self, marker: impl Into<MarkerUse>) -> Self {
        self.info.markers.push(marker.into());
        self
    }

    pub fn field(mut self, field: FieldInfo) -> Self {
        self.info.fields.push(field);
        self
    }

    pub fn method(mut self, method: MethodInfo) -> Self {
        self.info.methods.push(method);
        self
    }

    pub fn build(self) -> ClassInfo {
        self.info
    }
}
