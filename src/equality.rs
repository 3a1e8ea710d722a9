use std::{
    any::Any,
    hash::{DefaultHasher, Hash, Hasher},
};

/// Equality and hashing reachable through a type-erased value.
///
/// Blanket-implemented on top of `PartialEq` and `Hash`, so comparing two
/// values through this trait gives the same answer as comparing them
/// directly or through a generic parameter. Both sides are trait objects,
/// so a boxed value is compared by its contents rather than by the box.
pub trait ValueEquality: Any {
    /// The concrete value behind this trait object.
    fn as_any(&self) -> &dyn Any;

    /// `true` if `other` holds the same type as `self` and compares equal.
    fn value_eq(&self, other: &dyn ValueEquality) -> bool;

    /// Hash of `self` under fixed hasher keys.
    fn value_hash(&self) -> u64;
}

impl<T> ValueEquality for T
where
    T: PartialEq + Hash + Any,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn value_eq(&self, other: &dyn ValueEquality) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn value_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// Compare two values of the same static type through `PartialEq`.
#[inline]
#[must_use]
pub fn equals<T: PartialEq + ?Sized>(x: &T, y: &T) -> bool {
    x == y
}

/// Compare two type-erased values.
#[must_use]
pub fn equals_opaque(x: &dyn ValueEquality, y: &dyn ValueEquality) -> bool {
    x.value_eq(y)
}
