//! Parameter type inference from `param` documentation tags.
//!
//! Methods without declared parameter types often carry the information in
//! their documentation instead, one `param` tag value per parameter in
//! declaration order:
//!
//! ```text
//! param: ["string $title the post title", "int $views"]
//! ```
//!
//! [`infer_param_type`] extracts the type token for one parameter position
//! from such a value list. It is a pure function with no cache involvement,
//! so the annotation grammar can be tested in isolation; the descriptor
//! assembly in [`crate::metadata::descriptor`] is its only caller inside the
//! crate.

/// Name of the documentation tag that describes method parameters.
pub const PARAM_TAG: &str = "param";

/// Infers a parameter's type from the `param` tag values of its method.
///
/// The value at `position` is split on whitespace. A well-formed entry has at
/// least two tokens (`<type> $<name> ...`), and the first token is the type.
/// Anything else infers nothing: a missing entry, a bare type with no
/// parameter name, or an empty string all yield `None` rather than an error,
/// since documentation text is untrusted input.
///
/// # Arguments
///
/// * `values` - The `param` tag values in parameter declaration order
/// * `position` - Zero-based position of the parameter in question
///
/// # Returns
///
/// The type token for the parameter, or `None` when no well-formed entry
/// exists at that position.
///
/// # Examples
///
/// ```rust
/// use typescope::metadata::inference::infer_param_type;
///
/// let values = vec![
///     "string $title the post title".to_string(),
///     "int $views".to_string(),
/// ];
///
/// assert_eq!(infer_param_type(&values, 0), Some("string".to_string()));
/// assert_eq!(infer_param_type(&values, 1), Some("int".to_string()));
/// assert_eq!(infer_param_type(&values, 2), None);
/// ```
#[must_use]
pub fn infer_param_type(values: &[String], position: usize) -> Option<String> {
    let entry = values.get(position)?;
    let mut tokens = entry.split_whitespace();
    let first = tokens.next()?;
    // A lone token is a type with no parameter name, which is ambiguous.
    if tokens.next().is_none() {
        return None;
    }
    Some(first.to_string())
}
