//! Field helpers shared by the record types
//!
//! The orchestrator omits empty fields and may send `null` for any of them;
//! both read back as the field's default, and defaults are left out again
//! when writing.

use serde::{Deserialize, Deserializer};

/// Deserialize a field, reading `null` as its default value
///
/// # Errors
/// Returns the deserializer's error when the value is neither `null` nor a `T`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Whether a value equals its type's default, for `skip_serializing_if`
pub fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}
