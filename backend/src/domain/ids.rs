//! Database-issued identifiers for the translator aggregate.

use std::fmt;

/// Rejected identifier value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} id must be a positive integer, got {value}")]
pub struct InvalidIdError {
    kind: &'static str,
    value: i64,
}

macro_rules! define_entity_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(try_from = "i64", into = "i64")]
        pub struct $name(i64);

        impl $name {
            /// Validate and construct the identifier.
            pub fn new(value: i64) -> Result<Self, InvalidIdError> {
                if value <= 0 {
                    return Err(InvalidIdError { kind: $kind, value });
                }
                Ok(Self(value))
            }

            /// Access the raw identifier.
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<i64> for $name {
            type Error = InvalidIdError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

define_entity_id!(
    /// Identifier of a persisted address.
    AddressId,
    "address"
);

define_entity_id!(
    /// Identifier of a persisted translator.
    ///
    /// # Examples
    /// ```
    /// use translator_backend::domain::TranslatorId;
    ///
    /// let id = TranslatorId::new(3).expect("positive id");
    /// assert_eq!(id.to_string(), "3");
    /// assert!(TranslatorId::new(-1).is_err());
    /// ```
    TranslatorId,
    "translator"
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn error_names_the_entity_kind() {
        let err = AddressId::new(0).expect_err("zero is rejected");
        assert_eq!(err.to_string(), "address id must be a positive integer, got 0");
    }

    #[rstest]
    fn ids_round_trip_through_json_integers() {
        let id = TranslatorId::new(12).expect("valid id");
        let json = serde_json::to_string(&id).expect("serialise id");
        assert_eq!(json, "12");
        let parsed: TranslatorId = serde_json::from_str(&json).expect("deserialise id");
        assert_eq!(parsed, id);
    }
}
