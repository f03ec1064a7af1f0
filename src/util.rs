/// Result formatting.
///
/// Turns evaluation results into the text shown to the user, including the
/// non-finite values that evaluations are allowed to produce.
pub mod format;
