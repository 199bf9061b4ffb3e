//! Text formatting for floats and value lists

use crate::f;

/// Extends float primitives with fixed-precision formatting
pub trait FixedExt {
    /// Fixed number of decimal places
    ///
    /// Time values in particular must be consistent so that every frame in a
    /// series has the same textual width.
    ///
    /// ```rust
    /// # use xdmfgen_utils::FixedExt;
    /// assert_eq!(0.5.fixed(3), "0.500".to_string());
    /// assert_eq!((1.0 / 3.0).fixed(3), "0.333".to_string());
    /// assert_eq!((-2.0).fixed(1), "-2.0".to_string());
    /// ```
    fn fixed(&self, precision: usize) -> String;
}

impl FixedExt for f64 {
    fn fixed(&self, precision: usize) -> String {
        let text = f!("{:.precision$}", self, precision = precision);
        // avoid "-0.000" for tiny negative values rounding to zero
        match text.strip_prefix('-') {
            Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
            _ => text,
        }
    }
}

/// Join any displayable values with single spaces
///
/// ```rust
/// # use xdmfgen_utils::join_values;
/// assert_eq!(join_values(&[256, 128, 64]), "256 128 64");
/// assert_eq!(join_values(&[-128.0, 0.5, 1.0]), "-128 0.5 1");
/// assert_eq!(join_values::<u32>(&[]), "");
/// ```
pub fn join_values<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| f!("{v}"))
        .collect::<Vec<String>>()
        .join(" ")
}
