//! Comparator implementations for index keys.
//!
//! Every ordered index is declared with an explicit comparator object, so the
//! key order of an index is visible where the index is built rather than
//! implied by a type's `Ord`.

use core::cmp::Ordering;

/// Sort order for one key component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Ascending order (smallest first)
    Asc,
    /// Descending order (largest first)
    Desc,
}

impl Order {
    /// Applies this order to a comparison result.
    #[inline]
    pub fn apply(&self, ord: Ordering) -> Ordering {
        match self {
            Order::Asc => ord,
            Order::Desc => ord.reverse(),
        }
    }
}

/// Trait for comparing index keys.
pub trait Comparator<K> {
    /// Compares two keys according to the comparator's ordering.
    fn compare(&self, a: &K, b: &K) -> Ordering;

    /// Returns true if a < b according to this comparator.
    fn is_less(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Returns true if a == b according to this comparator.
    fn is_equal(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

/// A comparator for single keys that implement Ord.
#[derive(Clone, Debug)]
pub struct SimpleComparator {
    order: Order,
}

impl SimpleComparator {
    /// Creates a new simple comparator with the given order.
    pub fn new(order: Order) -> Self {
        Self { order }
    }

    /// Creates an ascending comparator.
    pub fn asc() -> Self {
        Self::new(Order::Asc)
    }
}

impl Default for SimpleComparator {
    fn default() -> Self {
        Self::asc()
    }
}

impl<K: Ord> Comparator<K> for SimpleComparator {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self.order.apply(a.cmp(b))
    }
}

/// A comparator for `(primary, secondary)` composite keys.
///
/// The primary component is compared first; the secondary only breaks ties.
/// Each component carries its own order, so e.g. a feed index can group by
/// account ascending while listing entries newest (highest id) first.
#[derive(Clone, Debug)]
pub struct CompositeComparator {
    primary: Order,
    secondary: Order,
}

impl CompositeComparator {
    /// Creates a composite comparator with the given per-component orders.
    pub fn new(primary: Order, secondary: Order) -> Self {
        Self { primary, secondary }
    }

    /// Both components ascending.
    pub fn asc() -> Self {
        Self::new(Order::Asc, Order::Asc)
    }

    /// Returns the orders of this comparator as `(primary, secondary)`.
    pub fn orders(&self) -> (Order, Order) {
        (self.primary, self.secondary)
    }
}

impl Default for CompositeComparator {
    fn default() -> Self {
        Self::asc()
    }
}

impl<A: Ord, B: Ord> Comparator<(A, B)> for CompositeComparator {
    fn compare(&self, a: &(A, B), b: &(A, B)) -> Ordering {
        self.primary
            .apply(a.0.cmp(&b.0))
            .then_with(|| self.secondary.apply(a.1.cmp(&b.1)))
    }
}
