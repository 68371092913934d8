// Structural equality for battery checks
//
// List-like operands compare position by position; everything else compares
// strictly, with no coercion. For runtime values that is `===`, so NaN is
// unequal to itself and objects compare by identity.

use runtime::{RealType, TypeTag, Value};

pub trait StructuralEq {
    fn structurally_eq(&self, other: &Self) -> bool;
}

macro_rules! strict_structural_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StructuralEq for $ty {
                fn structurally_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

strict_structural_eq!(bool, usize, str, String, TypeTag, RealType);

impl<T: StructuralEq> StructuralEq for [T] {
    fn structurally_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.structurally_eq(b))
    }
}

impl<T: StructuralEq> StructuralEq for Vec<T> {
    fn structurally_eq(&self, other: &Self) -> bool {
        self.as_slice().structurally_eq(other.as_slice())
    }
}

// Pairs are two-element lists
impl<A: StructuralEq, B: StructuralEq> StructuralEq for (A, B) {
    fn structurally_eq(&self, other: &Self) -> bool {
        self.0.structurally_eq(&other.0) && self.1.structurally_eq(&other.1)
    }
}

impl StructuralEq for Value {
    fn structurally_eq(&self, other: &Self) -> bool {
        match (self.as_array(), other.as_array()) {
            (Some(a), Some(b)) => a.structurally_eq(b),
            _ => self.strict_equals(other),
        }
    }
}
