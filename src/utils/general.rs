use std::cmp::Ordering;

/// Returns an [`Ordering`] between two [`PartialOrd`]s.
///
/// Incomparable values (e.g. NaN) are treated as equal.
#[inline]
pub(crate) fn partial_ordering<T: PartialOrd>(a: T, b: T) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Parses a cell as a number, the way a browser would decide that a cell "is a number".
///
/// Surrounding whitespace is ignored. Empty cells and NaN are not numbers.
#[inline]
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|value| !value.is_nan())
}
