//! Macros that generate port error enums and their domain mapping.

/// Declare a port error enum with one snake_case constructor per variant.
///
/// String-like fields accept anything `Into<String>`, so adapters can write
/// `OrderRepositoryError::query(err.to_string())` or pass a `&str`.
macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Build [`Self::", stringify!($variant), "`].")]
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
            #[doc = concat!("Build [`Self::", stringify!($variant), "`].")]
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

/// Declare the connection/query error pair shared by record repositories,
/// together with its mapping onto the domain [`Error`](crate::domain::Error).
///
/// Connection failures become `service_unavailable`; query failures become
/// `internal`. `$noun` names the repository in messages, e.g. `"job"`.
macro_rules! define_repository_error {
    ($(#[$outer:meta])* $name:ident, $noun:literal) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            /// Repository connection could not be established.
            #[error("{} repository connection failed: {message}", $noun)]
            Connection {
                /// Driver or pool message.
                message: String,
            },
            /// Query or mutation failed during execution.
            #[error("{} repository query failed: {message}", $noun)]
            Query {
                /// Driver message.
                message: String,
            },
        }

        impl $name {
            /// Build [`Self::Connection`].
            pub fn connection(message: impl Into<String>) -> Self {
                Self::Connection {
                    message: message.into(),
                }
            }

            /// Build [`Self::Query`].
            pub fn query(message: impl Into<String>) -> Self {
                Self::Query {
                    message: message.into(),
                }
            }
        }

        impl From<$name> for $crate::domain::Error {
            fn from(error: $name) -> Self {
                match error {
                    $name::Connection { message } => Self::service_unavailable(format!(
                        concat!($noun, " repository unavailable: {}"),
                        message
                    )),
                    $name::Query { message } => Self::internal(format!(
                        concat!($noun, " repository error: {}"),
                        message
                    )),
                }
            }
        }
    };
}

pub(crate) use define_port_error;
pub(crate) use define_repository_error;
