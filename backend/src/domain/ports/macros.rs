//! Defines helper macros for generating domain port error enums.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum StoragePortError {
            Unavailable => "storage unavailable",
            Rejected { reason: String } => "rejected: {reason}",
            Exhausted { limit: u64 } => "exhausted after {limit}",
            Collision { key: String, attempts: u32 } => "collision on {key} after {attempts}",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(StoragePortError::unavailable().to_string(), "storage unavailable");
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = StoragePortError::rejected("constraint");
        assert_eq!(err.to_string(), "rejected: constraint");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = StoragePortError::exhausted(9_u64);
        assert_eq!(err.to_string(), "exhausted after 9");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = StoragePortError::collision("TCK-2025-000001", 2_u32);
        assert_eq!(err.to_string(), "collision on TCK-2025-000001 after 2");
    }
}
