//! Host structured values.

use std::sync::Arc;

use hashbrown::HashMap;

use super::{Function, dynamic::Value};
use crate::types::StructType;

/// Trait for structured host values reachable through selectors.
///
/// An object must provide every field and method its [`StructType`] declares;
/// a missing or differently typed member is reported as `UnboundMember` when an
/// expression reaches it.
pub trait Object: Send + Sync {
    fn ty(&self) -> &Arc<StructType>;

    fn field(&self, name: &str) -> Option<Value>;

    /// The method `name`, bound to this object.
    fn method(&self, _name: &str) -> Option<Arc<dyn Function>> {
        None
    }
}

/// A ready-made [`Object`] holding its members in maps.
///
/// # Example
///
/// ```
/// use gavel_core::types::{StructType, Type};
/// use gavel_core::values::{Record, Value};
///
/// let ty = StructType::new("Request").with_field("Method", Type::String);
/// let request = Record::new(ty).with_field("Method", "GET");
/// let value = Value::object(request);
/// ```
pub struct Record {
    ty: Arc<StructType>,
    fields: HashMap<String, Value>,
    methods: HashMap<String, Arc<dyn Function>>,
}

impl Record {
    pub fn new(ty: impl Into<Arc<StructType>>) -> Self {
        Self {
            ty: ty.into(),
            fields: HashMap::new(),
            methods: HashMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn with_method(mut self, name: impl Into<String>, method: impl Function + 'static) -> Self {
        self.methods.insert(name.into(), Arc::new(method));
        self
    }
}

impl Object for Record {
    fn ty(&self) -> &Arc<StructType> {
        &self.ty
    }

    fn field(&self, name: &str) -> Option<Value> {
        self.fields.get(name).cloned()
    }

    fn method(&self, name: &str) -> Option<Arc<dyn Function>> {
        self.methods.get(name).cloned()
    }
}
