//! The compiler proper: one pass over the tree, checking types and emitting
//! evaluator closures.

use tracing::trace;

use crate::{
    api::CompilationOptions,
    builder::{BuildError, BuildErrorKind, resolve},
    evaluator::{Evaluator, eval, operators},
    symbols::TypeTable,
    syntax::{BinaryOp, Expr, Literal, Position, UnaryOp, UnsupportedKind},
    types::Type,
    values::Value,
};

/// A built node: its static type and the closure computing it.
pub(crate) struct Built {
    pub ty: Type,
    pub eval: Evaluator,
}

/// Builder for a single expression.
pub(crate) struct Builder<'a> {
    types: &'a TypeTable,
    options: CompilationOptions,
    depth: usize,
}

impl<'a> Builder<'a> {
    pub fn new(types: &'a TypeTable, options: CompilationOptions) -> Self {
        Self {
            types,
            options,
            depth: 0,
        }
    }

    fn error<T>(&self, kind: BuildErrorKind, position: Position) -> Result<T, BuildError> {
        Err(BuildError::new(kind, position))
    }

    /// Build an expression node.
    pub fn build(&mut self, expr: &Expr) -> Result<Built, BuildError> {
        // Check depth before recursing
        if self.depth >= self.options.max_depth {
            return self.error(
                BuildErrorKind::ExpressionTooDeep {
                    max_depth: self.options.max_depth,
                },
                expr.position(),
            );
        }

        self.depth += 1;
        let result = self.build_inner(expr);
        self.depth -= 1;

        if let Ok(built) = &result {
            trace!(position = %expr.position(), ty = %built.ty, "built node");
        }
        result
    }

    fn build_inner(&mut self, expr: &Expr) -> Result<Built, BuildError> {
        match expr {
            Expr::Literal { value, .. } => Ok(self.build_literal(value)),
            Expr::Unary {
                op,
                operand,
                position,
            } => self.build_unary(*op, operand, *position),
            Expr::Binary {
                op,
                left,
                right,
                position,
            } => self.build_binary(*op, left, right, *position),
            Expr::Paren { inner, .. } => self.build(inner),
            Expr::Ident { name, position } => self.build_ident(name, *position),
            Expr::Selector {
                target,
                name,
                position,
            } => self.build_selector(target, name, *position),
            Expr::Call {
                callee,
                args,
                position,
            } => self.build_call(callee, args, *position),
            Expr::Unsupported { kind, position } => self.build_unsupported(*kind, *position),
        }
    }

    fn build_literal(&self, literal: &Literal) -> Built {
        let (ty, value) = match literal {
            Literal::Bool(b) => (Type::Bool, Value::Bool(*b)),
            Literal::Int(i) => (Type::Int, Value::Int(*i)),
            Literal::Double(d) => (Type::Double, Value::Double(*d)),
            Literal::Str(s) => (Type::String, Value::str(s.as_str())),
            Literal::Char(c) => (Type::String, Value::str(c.to_string())),
        };
        Built {
            ty,
            eval: eval::constant(value),
        }
    }

    fn build_unary(&mut self, op: UnaryOp, operand: &Expr, position: Position) -> Result<Built, BuildError> {
        // The operator is rejected before the operand is looked at.
        if !operators::is_unary_supported(op) {
            return self.error(BuildErrorKind::UnsupportedUnaryOperator { op }, position);
        }

        let operand = self.build(operand)?;
        let Some(rule) = operators::unary_rule(op, &operand.ty) else {
            return self.error(BuildErrorKind::UnsupportedUnaryOperator { op }, position);
        };
        Ok(Built {
            ty: operand.ty,
            eval: eval::unary(rule, operand.eval, position),
        })
    }

    fn build_binary(
        &mut self,
        op: BinaryOp,
        left: &Expr,
        right: &Expr,
        position: Position,
    ) -> Result<Built, BuildError> {
        // The operator is rejected before either operand is looked at.
        if !operators::is_binary_supported(op) {
            return self.error(BuildErrorKind::UnsupportedBinaryOperation { op }, position);
        }

        let left = self.build(left)?;
        let right = self.build(right)?;
        let Some(rule) = operators::binary_rule(op, &left.ty, &right.ty) else {
            return self.error(BuildErrorKind::TypeMismatchInBinaryExpression, position);
        };
        Ok(Built {
            ty: rule.result.ty(),
            eval: eval::binary(rule, left.eval, right.eval, position),
        })
    }

    fn build_ident(&self, name: &str, position: Position) -> Result<Built, BuildError> {
        let Some(ty) = self.types.get(name) else {
            return self.error(
                BuildErrorKind::UnknownIdentifier {
                    name: name.to_string(),
                },
                position,
            );
        };
        Ok(Built {
            ty: ty.clone(),
            eval: eval::lookup(name.to_string(), ty.clone(), position),
        })
    }

    fn build_selector(&mut self, target: &Expr, name: &str, position: Position) -> Result<Built, BuildError> {
        let target = self.build(target)?;
        let Some(access) = resolve::member(&target.ty, name) else {
            return self.error(
                BuildErrorKind::UnknownSelector {
                    name: name.to_string(),
                    type_name: target.ty.to_string(),
                },
                position,
            );
        };
        Ok(Built {
            ty: access.ty(),
            eval: eval::select(target.eval, name.to_string(), access, position),
        })
    }

    fn build_call(&mut self, callee: &Expr, args: &[Expr], position: Position) -> Result<Built, BuildError> {
        let name = callee.to_string();
        let unknown = || BuildErrorKind::UnknownFunction { name: name.clone() };

        // A bare name missing from the table is reported as a function, not an
        // identifier (this covers conversions such as `float64(x)`).
        if matches!(callee, Expr::Ident { name, .. } if !self.types.contains(name)) {
            return self.error(unknown(), position);
        }

        let callee = self.build(callee)?;
        let Some(signature) = resolve::callable(&callee.ty).cloned() else {
            return self.error(unknown(), position);
        };
        if signature.is_variadic() {
            return self.error(
                BuildErrorKind::VariadicFunctionsNotSupported { name: name.clone() },
                position,
            );
        }
        if signature.params().len() != args.len() {
            return self.error(
                BuildErrorKind::ArgumentCountMismatch {
                    name: name.clone(),
                    expected: signature.params().len(),
                    found: args.len(),
                },
                position,
            );
        }

        let mut evals = Vec::with_capacity(args.len());
        for (index, (arg, param)) in args.iter().zip(signature.params()).enumerate() {
            let built = self.build(arg)?;
            if !built.ty.is_assignable_to(param) {
                return self.error(
                    BuildErrorKind::TypeMismatchInArgument { index: index + 1 },
                    arg.position(),
                );
            }
            evals.push(built.eval);
        }

        Ok(Built {
            ty: signature.returns().ty().clone(),
            eval: eval::call(callee.eval, name, signature, evals, position),
        })
    }

    fn build_unsupported(&self, kind: UnsupportedKind, position: Position) -> Result<Built, BuildError> {
        self.error(
            BuildErrorKind::UnknownExpressionType {
                kind: kind.description(),
            },
            position,
        )
    }
}
