//! Tagged unions for Avro unions with several non-null branches.
//!
//! `UnionN` has one variant per branch, named `A` to `H` in branch order.
//! Decoding tries the branches in order and keeps the first that accepts the
//! datum.

use super::convert::{FromDatum, ToDatum};
use super::datum::Datum;
use super::error::{CoreError, Result};

macro_rules! union_type {
    ($(#[$meta:meta])* $name:ident { $($variant:ident($param:ident)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name<$($param),+> {
            $($variant($param),)+
        }

        impl<$($param: ToDatum),+> ToDatum for $name<$($param),+> {
            fn to_datum(&self) -> Datum {
                match self {
                    $(Self::$variant(value) => value.to_datum(),)+
                }
            }
        }

        impl<$($param: FromDatum),+> FromDatum for $name<$($param),+> {
            fn from_datum(datum: Datum) -> Result<Self> {
                let kind = datum.kind();
                $(
                    if let Ok(value) = $param::from_datum(datum.clone()) {
                        return Ok(Self::$variant(value));
                    }
                )+
                Err(CoreError::unexpected(stringify!($name), "a union branch", kind))
            }
        }
    };
}

union_type! {
    /// Union of two branches.
    Union2 { A(T0), B(T1) }
}

union_type! {
    /// Union of three branches.
    Union3 { A(T0), B(T1), C(T2) }
}

union_type! {
    /// Union of four branches.
    Union4 { A(T0), B(T1), C(T2), D(T3) }
}

union_type! {
    /// Union of five branches.
    Union5 { A(T0), B(T1), C(T2), D(T3), E(T4) }
}

union_type! {
    /// Union of six branches.
    Union6 { A(T0), B(T1), C(T2), D(T3), E(T4), F(T5) }
}

union_type! {
    /// Union of seven branches.
    Union7 { A(T0), B(T1), C(T2), D(T3), E(T4), F(T5), G(T6) }
}

union_type! {
    /// Union of eight branches.
    Union8 { A(T0), B(T1), C(T2), D(T3), E(T4), F(T5), G(T6), H(T7) }
}

/// Largest number of non-null branches a generated union may have.
pub const MAX_UNION_BRANCHES: usize = 8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_accepting_branch_wins() {
        let value = Union2::<bool, String>::from_datum(Datum::String("x".into()))
            .expect("Failed to decode");
        assert_eq!(value, Union2::B("x".to_string()));
        let value =
            Union2::<bool, String>::from_datum(Datum::Boolean(true)).expect("Failed to decode");
        assert_eq!(value, Union2::A(true));
    }

    #[test]
    fn test_encode_delegates_to_branch() {
        let value: Union3<i32, i64, String> = Union3::C("s".into());
        assert_eq!(value.to_datum(), Datum::String("s".into()));
    }

    #[test]
    fn test_optional_union() {
        let absent = Option::<Union2<bool, String>>::from_datum(Datum::Null).expect("Failed to decode");
        assert_eq!(absent, None);
        assert!(Union2::<bool, String>::from_datum(Datum::Double(1.0)).is_err());
    }
}
