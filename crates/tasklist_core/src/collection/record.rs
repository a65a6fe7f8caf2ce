//! Entity capability consumed by `UniqueList`.

/// Record stored in a `UniqueList`.
///
/// The list never inspects fields directly. It only asks whether two
/// records are equivalent and copies one record's data into another.
///
/// # Invariants
/// - `is_equivalent` must be reflexive, symmetric and transitive.
/// - `is_equivalent` is independent from `PartialEq` and from any stable id
///   the record carries.
/// - After `a.reset_from(b)`, `a.is_equivalent(b)` holds.
pub trait Record: Clone {
    /// Returns whether `self` and `other` describe the same domain entry.
    fn is_equivalent(&self, other: &Self) -> bool;

    /// Overwrites this record's domain data with `other`'s, in place.
    ///
    /// Implementations keep whatever gives the record its positional
    /// identity (for example a stable id).
    fn reset_from(&mut self, other: &Self);
}
