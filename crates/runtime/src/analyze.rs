// List analyzers built on the classifier

use std::collections::{BTreeMap, HashSet};

use crate::classify::{RealType, TypeTag, coarse_type, real_type};
use crate::value::Value;

/// True when every element has the same coarse type (vacuously true for `[]`)
pub fn all_same_type(values: &[Value]) -> bool {
    let tags: HashSet<TypeTag> = values.iter().map(coarse_type).collect();
    tags.len() <= 1
}

/// True when no two elements share a real type (vacuously true for `[]`)
pub fn all_unique_real_type(values: &[Value]) -> bool {
    let tags: HashSet<RealType> = values.iter().map(real_type).collect();
    tags.len() == values.len()
}

/// Occurrences of each real type, sorted by label.
///
/// `None` stands for an absent list and, like an empty one, yields `[]`.
pub fn count_real_types(values: Option<&[Value]>) -> Vec<(RealType, usize)> {
    let mut counts: BTreeMap<RealType, usize> = BTreeMap::new();
    for value in values.unwrap_or_default() {
        *counts.entry(real_type(value)).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}
