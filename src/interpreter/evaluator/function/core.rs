use std::f64::consts;

use crate::interpreter::evaluator::function::builtin;

/// Name of the identifier that reads the last-result register.
pub const LAST_RESULT: &str = "last";

/// Named constants. None of them take a parameter list.
pub const CONSTANTS: &[(&str, f64)] = &[("pi", consts::PI), ("e", consts::E)];

/// How a builtin is called, together with its implementation.
///
/// - `Nullary` requires an explicit empty parameter list: `random()`.
/// - `Unary` requires exactly one parenthesized argument: `sqrt(x)`.
/// - `Binary` requires two comma-separated arguments: `atan2(y, x)`.
#[derive(Clone, Copy, Debug)]
pub enum Arity {
    Nullary(fn() -> f64),
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry maps a string name to an [`Arity`] carrying the function
/// pointer. The macro produces `BUILTIN_TABLE` (static table for lookup) and
/// `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $arity:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "abs"    => Arity::Unary(f64::abs),
    "acos"   => Arity::Unary(f64::acos),
    "acosh"  => Arity::Unary(f64::acosh),
    "asin"   => Arity::Unary(f64::asin),
    "asinh"  => Arity::Unary(f64::asinh),
    "atan"   => Arity::Unary(f64::atan),
    "atan2"  => Arity::Binary(f64::atan2),
    "atanh"  => Arity::Unary(f64::atanh),
    "cbrt"   => Arity::Unary(f64::cbrt),
    "ceil"   => Arity::Unary(f64::ceil),
    "cos"    => Arity::Unary(f64::cos),
    "cosh"   => Arity::Unary(f64::cosh),
    "exp"    => Arity::Unary(f64::exp),
    "floor"  => Arity::Unary(f64::floor),
    "log"    => Arity::Unary(f64::ln),
    "ln"     => Arity::Unary(f64::ln),
    "random" => Arity::Nullary(builtin::random),
    "round"  => Arity::Unary(builtin::round_half_up),
    "sin"    => Arity::Unary(f64::sin),
    "sinh"   => Arity::Unary(f64::sinh),
    "sqrt"   => Arity::Unary(f64::sqrt),
    "tan"    => Arity::Unary(f64::tan),
    "tanh"   => Arity::Unary(f64::tanh),
    "trunc"  => Arity::Unary(f64::trunc),
}

/// Looks up a builtin function by its exact, case-sensitive name.
#[must_use]
pub fn lookup_function(name: &str) -> Option<Arity> {
    BUILTIN_TABLE.iter().find(|b| b.name == name).map(|b| b.arity)
}

/// Looks up a named constant. `last` is not a constant and is not found here.
#[must_use]
pub fn lookup_constant(name: &str) -> Option<f64> {
    CONSTANTS.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
}

/// Names that resolve without a parameter list: the constants, then `last`.
pub fn constant_names() -> impl Iterator<Item = &'static str> {
    CONSTANTS.iter().map(|(name, _)| *name).chain([LAST_RESULT])
}
