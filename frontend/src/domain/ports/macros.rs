//! Helper macro for declaring port error enums.
//!
//! Every variant carries named fields and a display message. Each variant
//! gets a snake_case constructor whose parameters take `impl Into<_>`, so
//! `DirectoryApiError::status(404_u16, "Employee not found")` builds a
//! `Status` error from a string slice.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),+ $(,)? } => $message:literal
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

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = "Build a [`" $name "::" $variant "`] error."]
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                        Self::$variant { $($field: $field.into()),+ }
                    }
                }
            )+
        }
    };
}

pub(crate) use define_port_error;
