use std::sync::Arc;

use hashbrown::HashMap;

use super::{Signature, Type};

/// Shape of a host structured type: a name plus its fields and methods.
///
/// Field and method names share one namespace; declaring a member replaces
/// any earlier member with the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructType {
    name: String,
    fields: HashMap<String, Type>,
    methods: HashMap<String, Arc<Signature>>,
}

/// A member found on a structured type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Member<'a> {
    Field(&'a Type),
    Method(&'a Arc<Signature>),
}

impl Member<'_> {
    /// Type of the selector expression naming this member.
    pub fn ty(&self) -> Type {
        match self {
            Member::Field(ty) => (*ty).clone(),
            Member::Method(signature) => Type::Callable(Arc::clone(signature)),
        }
    }
}

impl StructType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: HashMap::new(),
            methods: HashMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, ty: Type) -> Self {
        let name = name.into();
        self.methods.remove(&name);
        self.fields.insert(name, ty);
        self
    }

    pub fn with_method(mut self, name: impl Into<String>, signature: Signature) -> Self {
        let name = name.into();
        self.fields.remove(&name);
        self.methods.insert(name, Arc::new(signature));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field(&self, name: &str) -> Option<&Type> {
        self.fields.get(name)
    }

    pub fn method(&self, name: &str) -> Option<&Arc<Signature>> {
        self.methods.get(name)
    }

    pub fn member(&self, name: &str) -> Option<Member<'_>> {
        self.field(name)
            .map(Member::Field)
            .or_else(|| self.method(name).map(Member::Method))
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Type)> {
        self.fields.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    pub fn methods(&self) -> impl Iterator<Item = (&str, &Arc<Signature>)> {
        self.methods.iter().map(|(name, sig)| (name.as_str(), sig))
    }
}
