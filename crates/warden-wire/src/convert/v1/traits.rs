use warden_core::traits::Traits;

use crate::traits::Trait;

/// Encode a trait map as a key-ordered trait list.
#[must_use]
pub fn to_traits_wire(traits: &Traits) -> Vec<Trait> {
    traits
        .iter()
        .map(|(key, values)| Trait {
            key: key.clone(),
            values: values.clone(),
        })
        .collect()
}

/// Decode a trait list. If a key repeats, the last entry wins.
#[must_use]
pub fn from_traits_wire(traits: &[Trait]) -> Traits {
    traits
        .iter()
        .map(|t| (t.key.clone(), t.values.clone()))
        .collect()
}
