use super::name::ClassName;
use serde::{Deserialize, Serialize};

/// A possibly generic type reference as it appears on a field, method or superclass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeRef {
    Class(ClassName),
    Parameterized { raw: ClassName, args: Vec<TypeRef> },
    /// Type variable or wildcard. Carries no class identity.
    Variable(String),
    Array(Box<TypeRef>),
}

impl TypeRef {
    pub fn class(name: impl Into<ClassName>) -> Self {
        TypeRef::Class(name.into())
    }

    pub fn parameterized(raw: impl Into<ClassName>, args: Vec<TypeRef>) -> Self {
        TypeRef::Parameterized {
            raw: raw.into(),
            args,
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        TypeRef::Variable(name.into())
    }

    pub fn array(component: TypeRef) -> Self {
        TypeRef::Array(Box::new(component))
    }

    /// The erased class of this reference, if it has one.
    pub fn raw(&self) -> Option<&ClassName> {
        match self {
            TypeRef::Class(name) => Some(name),
            TypeRef::Parameterized { raw, .. } => Some(raw),
            TypeRef::Variable(_) => None,
            TypeRef::Array(component) => component.raw(),
        }
    }

    /// Flattens the reference into raw identities: the raw type first, then
    /// every type argument depth-first.
    pub fn raw_identities(&self) -> Vec<ClassName> {
        let mut out = Vec::new();
        self.collect_identities(&mut out);
        out
    }

    fn collect_identities(&self, out: &mut Vec<ClassName>) {
        match self {
            TypeRef::Class(name) => out.push(name.clone()),
            TypeRef::Parameterized { raw, args } => {
                out.push(raw.clone());
                for arg in args {
                    arg.collect_identities(out);
                }
            }
            TypeRef::Variable(_) => {}
            TypeRef::Array(component) => component.collect_identities(out),
        }
    }
}

impl From<ClassName> for TypeRef {
    fn from(name: ClassName) -> Self {
        TypeRef::Class(name)
    }
}

impl From<&ClassName> for TypeRef {
    fn from(name: &ClassName) -> Self {
        TypeRef::Class(name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_identities_of_nested_generic() {
        // Map<String, List<Foo>>
        let ty = TypeRef::parameterized(
            "java.util.Map",
            vec![
                TypeRef::class("java.lang.String"),
                TypeRef::parameterized("java.util.List", vec![TypeRef::class("com.example.Foo")]),
            ],
        );

        let ids: Vec<String> = ty
            .raw_identities()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(
            ids,
            vec![
                "java.util.Map",
                "java.lang.String",
                "java.util.List",
                "com.example.Foo"
            ]
        );
    }

    #[test]
    fn test_type_variables_have_no_identity() {
        let ty = TypeRef::parameterized("java.util.List", vec![TypeRef::variable("T")]);
        assert_eq!(ty.raw_identities(), vec![ClassName::from("java.util.List")]);
        assert!(TypeRef::variable("?").raw().is_none());
    }

    #[test]
    fn test_array_contributes_its_component() {
        let ty = TypeRef::array(TypeRef::class("com.example.Foo"));
        assert_eq!(ty.raw(), Some(&ClassName::from("com.example.Foo")));
        assert_eq!(ty.raw_identities(), vec![ClassName::from("com.example.Foo")]);
    }
}
