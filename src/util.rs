//! Small numeric and sequence helpers.

/// Whether `n` is a power of two, ignoring the sign. Zero is not.
///
/// Piece sizes are validated with this.
///
/// ```
/// use tormeta::util::is_power_of_2;
///
/// assert!(is_power_of_2(16384));
/// assert!(is_power_of_2(-8));
/// assert!(!is_power_of_2(0));
/// assert!(!is_power_of_2(12));
/// ```
pub fn is_power_of_2(n: i64) -> bool {
    n != 0 && n.unsigned_abs().is_power_of_two()
}

/// Whether the sequence `a` begins with all items of `b`, in order.
///
/// An empty `b` is a prefix of everything.
pub fn iter_starts_with<A, B>(a: A, b: B) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: PartialEq<B::Item>,
{
    let mut a = a.into_iter();
    b.into_iter()
        .all(|expected| a.next().is_some_and(|item| item == expected))
}

#[cfg(test)]
mod tests;
