mod cases;

use gavel::{Type, Value};

// ============================================================================
// Unary operators
// ============================================================================

test_case!(
    negation_type_mismatch,
    input: r#"-"5.7""#,
    build_error: "1: unsupported unary operator: -",
);

test_case!(
    bitwise_complement,
    input: "^5",
    build_error: "1: unsupported unary operator: ^",
);

test_case!(
    address_of,
    input: "&x",
    build_error: "1: unsupported unary operator: &",
);

test_case!(
    channel_receive,
    input: "<-c",
    build_error: "1: unsupported unary operator: <-",
);

test_case!(
    unary_plus,
    input: "+x",
    build_error: "1: unsupported unary operator: +",
);

test_case!(
    not_on_int,
    input: "!5",
    build_error: "1: unsupported unary operator: !",
);

// ============================================================================
// Unsupported binary operators
// ============================================================================

test_case!(xor, input: "5 ^ 2", build_error: "3: unsupported binary operation ^");
test_case!(less_than, input: "5 < 2", build_error: "3: unsupported binary operation <");
test_case!(less_or_equal, input: "5 <= 2", build_error: "3: unsupported binary operation <=");
test_case!(greater_than, input: "5 > 2", build_error: "3: unsupported binary operation >");
test_case!(greater_or_equal, input: "5 >= 2", build_error: "3: unsupported binary operation >=");
test_case!(bitwise_or, input: "5 | 2", build_error: "3: unsupported binary operation |");
test_case!(modulo, input: "5 % 2", build_error: "3: unsupported binary operation %");
test_case!(shift_left, input: "5 << 2", build_error: "3: unsupported binary operation <<");
test_case!(shift_right, input: "5 >> 2", build_error: "3: unsupported binary operation >>");
test_case!(bitwise_and, input: "5 & 2", build_error: "3: unsupported binary operation &");
test_case!(bit_clear, input: "5 &^ 2", build_error: "3: unsupported binary operation &^");

// The operator is rejected before its operands are looked at.
test_case!(
    unsupported_operator_with_unknown_operands,
    input: "a < b",
    values: &cases::EMPTY,
    build_error: "3: unsupported binary operation <",
);

// ============================================================================
// Type mismatches
// ============================================================================

test_case!(char_plus_int, input: "'f' + 2", build_error: "5: type mismatch in binary expression");
test_case!(double_minus_int, input: "3.14 - 2", build_error: "6: type mismatch in binary expression");
test_case!(double_times_int, input: "6.7 * 2", build_error: "5: type mismatch in binary expression");
test_case!(double_div_int, input: "3.5 / 2", build_error: "5: type mismatch in binary expression");
test_case!(char_minus_int, input: "'f' - 2", build_error: "5: type mismatch in binary expression");
test_case!(char_times_int, input: "'f' * 2", build_error: "5: type mismatch in binary expression");
test_case!(char_div_int, input: "'f' / 2", build_error: "5: type mismatch in binary expression");
test_case!(string_minus_string, input: r#""a" - "b""#, build_error: "5: type mismatch in binary expression");
test_case!(and_on_ints, input: "1 && 2", build_error: "3: type mismatch in binary expression");

// ============================================================================
// Arithmetic
// ============================================================================

test_case!(
    int_addition,
    input: "5 + 2",
    ty: Type::Int,
    value: Value::Int(7),
);

test_case!(
    string_concatenation,
    input: r#""foo" + "bar""#,
    ty: Type::String,
    value: Value::str("foobar"),
);

test_case!(double_subtraction, input: "5.3 - 2.7", approx: 2.6);
test_case!(double_multiplication, input: "5.3 * 2.7", approx: 14.31);
test_case!(double_division, input: "5.3 / 2.7", approx: 1.962962);

test_case!(
    parenthesized,
    input: "(5 + 2) * 3",
    value: Value::Int(21),
);

test_case!(
    precedence_without_parens,
    input: "5 + 2 * 3",
    value: Value::Int(11),
);

test_case!(
    integer_division_truncates,
    input: "7 / 2",
    value: Value::Int(3),
);

test_case!(
    integer_division_by_zero,
    input: "7 / (x - 2)",
    run_error: "integer division by zero",
);

// ============================================================================
// Comparisons and logic
// ============================================================================

test_case!(int_equality, input: "5 == 5", ty: Type::Bool, value: Value::Bool(true));
test_case!(int_inequality, input: "5 != 3", value: Value::Bool(true));
test_case!(int_equality_false, input: "5 == 3", value: Value::Bool(false));
test_case!(int_inequality_false, input: "5 != 5", value: Value::Bool(false));
test_case!(string_equality, input: r#""foo" == "foo""#, value: Value::Bool(true));
test_case!(string_inequality, input: r#""foo" != "bar""#, value: Value::Bool(true));
test_case!(string_equality_false, input: r#""foo" == "bar""#, value: Value::Bool(false));
test_case!(string_inequality_false, input: r#""foo" != "foo""#, value: Value::Bool(false));
test_case!(bool_equality, input: "true == !false", value: Value::Bool(true));

test_case!(logical_and_true, input: r#"5 == 5 && "foo" != "bar""#, value: Value::Bool(true));
test_case!(logical_and_false, input: r#"5 == 5 && "foo" != "foo""#, value: Value::Bool(false));
test_case!(logical_or_true, input: r#"5 == 5 || "foo" == "bar""#, value: Value::Bool(true));
test_case!(logical_or_false, input: r#"5 == 4 || "foo" != "foo""#, value: Value::Bool(false));

// The right operand is never reached, so its failure does not surface.
test_case!(
    and_short_circuits,
    input: "false && returnsError() == 1",
    value: Value::Bool(false),
);

test_case!(
    or_short_circuits,
    input: "true || returnsError() == 1",
    value: Value::Bool(true),
);

test_case!(
    and_evaluates_right_operand,
    input: "true && returnsError() == 1",
    run_error: "Boo!",
);
