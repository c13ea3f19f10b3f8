#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use gavel::{
    Function, FunctionError, NativeFunction, Object, Record, Returns, Signature, StructType, Type,
    Value, ValueTable,
};
use once_cell::sync::Lazy;

/// Declares one end-to-end test: parse, build against the fixture's types,
/// then run against the fixture's values.
///
/// The fixture defaults to [`GLOBALS`]; pass `values: &TABLE` to use another.
#[macro_export]
macro_rules! test_case {
    ($name:ident, input: $input:expr, $(values: $values:expr,)? $(ty: $ty:expr,)? value: $value:expr $(,)?) => {
        #[test]
        fn $name() {
            let values: &gavel::ValueTable = $crate::test_case!(@values $($values)?);
            let compiled = gavel::compile($input, &values.types())
                .unwrap_or_else(|e| panic!("{} failed to compile: {}", $input, e));
            $( pretty_assertions::assert_eq!(compiled.ty(), &$ty, "type of {}", $input); )?
            let result = compiled
                .run(values)
                .unwrap_or_else(|e| panic!("{} failed to run: {}", $input, e));
            pretty_assertions::assert_eq!(result, $value, "value of {}", $input);
        }
    };
    ($name:ident, input: $input:expr, $(values: $values:expr,)? approx: $value:expr $(,)?) => {
        #[test]
        fn $name() {
            let values: &gavel::ValueTable = $crate::test_case!(@values $($values)?);
            let result = gavel::evaluate($input, values)
                .unwrap_or_else(|e| panic!("{} failed: {}", $input, e));
            let Some(actual) = result.as_double() else {
                panic!("{} produced {}, expected a double", $input, result);
            };
            let expected: f64 = $value;
            assert!(
                (actual - expected).abs() < 0.0001,
                "{} produced {}, expected {}",
                $input,
                actual,
                expected
            );
        }
    };
    ($name:ident, input: $input:expr, parse_error: $message:expr $(,)?) => {
        #[test]
        fn $name() {
            match gavel::parse($input) {
                Ok(expr) => panic!("expected {} to fail parsing, got {:?}", $input, expr),
                Err(err) => pretty_assertions::assert_eq!(err.to_string(), $message),
            }
        }
    };
    ($name:ident, input: $input:expr, $(values: $values:expr,)? build_error: $message:expr $(,)?) => {
        #[test]
        fn $name() {
            let values: &gavel::ValueTable = $crate::test_case!(@values $($values)?);
            match gavel::compile($input, &values.types()) {
                Ok(compiled) => panic!("expected {} to fail building, got {:?}", $input, compiled),
                Err(gavel::Error::Build(err)) => pretty_assertions::assert_eq!(err.to_string(), $message),
                Err(err) => panic!("expected a build error for {}, got {}", $input, err),
            }
        }
    };
    ($name:ident, input: $input:expr, $(values: $values:expr,)? run_error: $message:expr $(,)?) => {
        #[test]
        fn $name() {
            let values: &gavel::ValueTable = $crate::test_case!(@values $($values)?);
            let compiled = gavel::compile($input, &values.types())
                .unwrap_or_else(|e| panic!("{} failed to compile: {}", $input, e));
            match compiled.run(values) {
                Ok(value) => panic!("expected {} to fail running, got {}", $input, value),
                Err(err) => pretty_assertions::assert_eq!(err.to_string(), $message),
            }
        }
    };
    (@values) => {
        &*$crate::cases::GLOBALS
    };
    (@values $values:expr) => {
        $values
    };
}

// ============================================================================
// Fixtures
// ============================================================================

/// An HTTP-style header map, exposed as an object with a `Get` method.
pub struct Header {
    ty: Arc<StructType>,
    entries: HashMap<String, Vec<String>>,
}

impl Header {
    pub fn new(entries: impl IntoIterator<Item = (&'static str, &'static str)>) -> Self {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in entries {
            map.entry(key.to_string()).or_default().push(value.to_string());
        }
        Self {
            ty: Arc::clone(&*HEADER_TYPE),
            entries: map,
        }
    }
}

impl Object for Header {
    fn ty(&self) -> &Arc<StructType> {
        &self.ty
    }

    fn field(&self, _name: &str) -> Option<Value> {
        None
    }

    fn method(&self, name: &str) -> Option<Arc<dyn Function>> {
        if name != "Get" {
            return None;
        }
        let entries = self.entries.clone();
        Some(Arc::new(NativeFunction::new(header_get_signature(), move |args| {
            let [Value::Str(key)] = args else {
                return Err(FunctionError::message("Get expects one string"));
            };
            let value = entries
                .get(&**key)
                .and_then(|values| values.first())
                .map_or("", String::as_str);
            Ok(Value::str(value))
        })))
    }
}

fn header_get_signature() -> Signature {
    Signature::new([Type::String], Returns::Single(Type::String))
}

pub static HEADER_TYPE: Lazy<Arc<StructType>> =
    Lazy::new(|| Arc::new(StructType::new("Header").with_method("Get", header_get_signature())));

pub static REQUEST_TYPE: Lazy<Arc<StructType>> = Lazy::new(|| {
    Arc::new(
        StructType::new("Request")
            .with_field("Method", Type::String)
            .with_field("URL", Type::String)
            .with_field("Header", Type::Structured(Arc::clone(&*HEADER_TYPE))),
    )
});

pub fn request() -> Value {
    let header = Header::new([("Content-Type", "application/json")]);
    Value::object(
        Record::new(Arc::clone(&*REQUEST_TYPE))
            .with_field("Method", "GET")
            .with_field("URL", "http://localhost/foobar")
            .with_field("Header", Value::object(header)),
    )
}

/// `matches(regex, x string) (bool, error)`
pub fn matches() -> Value {
    Value::function(NativeFunction::new(
        Signature::new(
            [Type::String, Type::String],
            Returns::ValueWithFailure(Type::Bool),
        ),
        |args| match args {
            [Value::Str(pattern), Value::Str(text)] => {
                let regex = regex::Regex::new(pattern).map_err(FunctionError::new)?;
                Ok(Value::Bool(regex.is_match(text)))
            }
            _ => Err(FunctionError::message("matches expects two strings")),
        },
    ))
}

/// `returnsError() (int, error)`, which always fails.
pub fn returns_error() -> Value {
    Value::function(NativeFunction::new(
        Signature::new([], Returns::ValueWithFailure(Type::Int)),
        |_| Err(FunctionError::message("Boo!")),
    ))
}

/// `f(values ...int) int`
pub fn variadic_sum() -> Value {
    Value::function(NativeFunction::new(
        Signature::variadic([Type::Int], Returns::Single(Type::Int)),
        |args| Ok(Value::Int(args.iter().filter_map(Value::as_int).sum())),
    ))
}

/// `sum(x, y int) int`
pub fn sum() -> Value {
    Value::function(NativeFunction::new(
        Signature::new([Type::Int, Type::Int], Returns::Single(Type::Int)),
        |args| match args {
            [Value::Int(x), Value::Int(y)] => Ok(Value::Int(x + y)),
            _ => Err(FunctionError::message("sum expects two ints")),
        },
    ))
}

/// The default fixture: integers `x` and `y`, the string `s`, a request and
/// a handful of functions.
pub static GLOBALS: Lazy<ValueTable> = Lazy::new(|| {
    ValueTable::from_entries([
        ("x", Value::Int(2)),
        ("y", Value::Int(5)),
        ("s", Value::str("321")),
        ("req", request()),
        ("matches", matches()),
        ("returnsError", returns_error()),
        ("f", variadic_sum()),
        ("sum", sum()),
    ])
    .unwrap_or_else(|e| panic!("invalid fixture: {}", e))
});

/// A fixture with no symbols at all.
pub static EMPTY: Lazy<ValueTable> = Lazy::new(ValueTable::new);
