use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Names of the primitive types. These are consulted after the keyword table,
/// so a word is only a primitive type if it is not also a keyword.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumString,
    Display,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    /// Fixed-size array, `[T; N]`.
    Array,
    Bool,
    Char,
    F32,
    F64,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    /// Raw pointers, `*const T` and `*mut T`.
    Pointer,
    /// Shared and mutable references.
    Reference,
    /// Dynamically-sized view into a contiguous sequence, `[T]`.
    Slice,
    Str,
    /// Finite heterogeneous sequence, `(T, U, ..)`.
    Tuple,
    U8,
    U16,
    U32,
    U64,
    U128,
    /// The `()` type.
    Unit,
    Usize,
}

lazy_static! {
    static ref PRIMITIVE_TYPES: HashMap<&'static str, PrimitiveType> = PrimitiveType::iter()
        .map(|ty| (<&'static str>::from(ty), ty))
        .collect();
}

impl PrimitiveType {
    pub fn lookup(word: &str) -> Option<PrimitiveType> {
        PRIMITIVE_TYPES.get(word).copied()
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_all_types() {
        assert_eq!(PrimitiveType::iter().count(), 23);
        for ty in PrimitiveType::iter() {
            let spelling = ty.to_string();
            assert_eq!(PrimitiveType::lookup(&spelling), Some(ty));
            assert_eq!(PrimitiveType::from_str(&spelling).unwrap(), ty);
        }
    }

    #[test]
    fn test_numeric_spellings() {
        assert_eq!(PrimitiveType::I128.as_str(), "i128");
        assert_eq!(PrimitiveType::F64.as_str(), "f64");
        assert_eq!(PrimitiveType::Usize.as_str(), "usize");
        assert_eq!(PrimitiveType::lookup("U8"), None);
        assert_eq!(PrimitiveType::lookup("i256"), None);
    }
}
