//! Helper macro for declaring repository error enums.
//!
//! Every variant carries named fields. Each gets a `thiserror` message and a
//! snake_case constructor whose parameters accept anything convertible into
//! the field type.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),+ $(,)? } => $message:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),+ },
            )+
        }

        ::paste::paste! {
            impl $name {
                $(
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                        Self::$variant { $($field: $field.into()),+ }
                    }
                )+
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SampleStoreError {
            Conflict { table: String, id: i64 } => "{table} row {id} conflicts",
            Query { message: String } => "query failed: {message}",
            Missing { id: i64 } => "record {id} not found",
        }
    }

    #[test]
    fn constructor_takes_every_field_in_order() {
        let err = SampleStoreError::conflict("addresses", 9_i64);
        assert_eq!(
            err,
            SampleStoreError::Conflict {
                table: "addresses".to_owned(),
                id: 9,
            }
        );
        assert_eq!(err.to_string(), "addresses row 9 conflicts");
    }

    #[test]
    fn string_fields_accept_str() {
        let err = SampleStoreError::query("syntax error");
        assert_eq!(err.to_string(), "query failed: syntax error");
    }

    #[test]
    fn non_string_fields_keep_their_type() {
        let err = SampleStoreError::missing(42_i64);
        assert_eq!(err, SampleStoreError::Missing { id: 42 });
        assert_eq!(err.to_string(), "record 42 not found");
    }
}
