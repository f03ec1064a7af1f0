/// Math primitives that need more than a plain `f64` method.
///
/// Half-up rounding, NaN-propagating exponentiation and the random source.
pub mod builtin;
/// The fixed table of constants and functions.
///
/// Maps identifier text to an arity and an implementation; the parser decides
/// which parameter list to consume from the arity.
pub mod core;
