use std::sync::Arc;

use super::*;

fn header_type() -> StructType {
    StructType::new("Header").with_method(
        "Get",
        Signature::new([Type::String], Returns::Single(Type::String)),
    )
}

#[test]
fn test_primitive_display() {
    assert_eq!(Type::Bool.to_string(), "bool");
    assert_eq!(Type::Int.to_string(), "int");
    assert_eq!(Type::Double.to_string(), "double");
    assert_eq!(Type::String.to_string(), "string");
}

#[test]
fn test_signature_display() {
    let sig = Signature::new(
        [Type::String, Type::String],
        Returns::ValueWithFailure(Type::Bool),
    );
    assert_eq!(sig.to_string(), "func(string, string) (bool, error)");

    let sig = Signature::variadic([Type::Int], Returns::Single(Type::Int));
    assert_eq!(sig.to_string(), "func(...int) int");

    let sig = Signature::new([], Returns::Single(Type::Double));
    assert_eq!(sig.to_string(), "func() double");
}

#[test]
fn test_structured_display_uses_name() {
    assert_eq!(Type::structured(header_type()).to_string(), "Header");
}

#[test]
fn test_no_numeric_promotion() {
    assert!(Type::Int.is_assignable_to(&Type::Int));
    assert!(!Type::Int.is_assignable_to(&Type::Double));
    assert!(!Type::Double.is_assignable_to(&Type::Int));
}

#[test]
fn test_structured_assignability_is_structural() {
    let a = Type::structured(header_type());
    let b = Type::structured(header_type());
    assert!(a.is_assignable_to(&b));

    let other = Type::structured(StructType::new("Header").with_field("Get", Type::String));
    assert!(!a.is_assignable_to(&other));
}

#[test]
fn test_callable_assignability_includes_return_convention() {
    let single = Type::callable(Signature::new([], Returns::Single(Type::Int)));
    let fallible = Type::callable(Signature::new([], Returns::ValueWithFailure(Type::Int)));
    assert!(single.is_assignable_to(&single.clone()));
    assert!(!single.is_assignable_to(&fallible));
}

#[test]
fn test_member_lookup() {
    let request = StructType::new("Request")
        .with_field("Method", Type::String)
        .with_field("Header", Type::structured(header_type()));

    assert_eq!(request.member("Method"), Some(Member::Field(&Type::String)));
    assert!(matches!(request.member("Header"), Some(Member::Field(Type::Structured(_)))));
    assert_eq!(request.member("Body"), None);

    let header = header_type();
    let Some(member @ Member::Method(sig)) = header.member("Get") else {
        panic!("expected a method");
    };
    assert_eq!(sig.params(), &[Type::String]);
    assert_eq!(member.ty(), Type::Callable(Arc::clone(sig)));
}

#[test]
fn test_member_redeclaration_replaces() {
    let ty = StructType::new("T")
        .with_field("x", Type::Int)
        .with_method("x", Signature::new([], Returns::Single(Type::Int)));
    assert!(ty.field("x").is_none());
    assert!(ty.method("x").is_some());
}
