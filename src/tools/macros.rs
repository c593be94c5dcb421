/// Creates a collection from a map-like (`key => value`) or set-like list of expressions.
/// The target type is inferred, so it works for `HashMap`, `HashSet`, `Vec`, ...
///
/// ```
/// use std::collections::HashMap;
///
/// let masses: HashMap<char, f64> = molweight::collection! { 'G' => 57.05132, 'A' => 71.0779 };
/// assert_eq!(masses.len(), 2);
/// ```
///
// Copied from https://stackoverflow.com/a/27582993
#[macro_export]
macro_rules! collection {
    // map-like
    ($($k:expr => $v:expr),* $(,)?) => {
        std::iter::Iterator::collect(std::iter::IntoIterator::into_iter([$(($k, $v),)*]))
    };
    // set-like
    ($($v:expr),* $(,)?) => {
        std::iter::Iterator::collect(std::iter::IntoIterator::into_iter([$($v,)*]))
    };
}
