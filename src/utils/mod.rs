//! Shared helpers

pub mod source;
pub mod string;

/// Generate a `Builder` with `with_*` setters for a configuration struct
///
/// Every field is required; [`ConfigBuilder::build`] reports the first unset
/// one as a configuration error.
///
/// [`ConfigBuilder::build`]: crate::common::ConfigBuilder::build
#[macro_export]
macro_rules! impl_builder {
    ($config:ident, $builder:ident { $($setter:ident => $field:ident : $ty:ty),* $(,)? }) => {
        impl $config {
            pub fn builder() -> $builder {
                $builder::new()
            }
        }

        #[derive(Default)]
        pub struct $builder {
            $($field: Option<$ty>,)*
        }

        impl $builder {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $setter(mut self, $field: $ty) -> Self {
                    self.$field = Some($field);
                    self
                }
            )*
        }

        impl $crate::common::ConfigBuilder for $builder {
            type Config = $config;

            fn build(self) -> Result<Self::Config, $crate::error::GrandError> {
                Ok($config {
                    $(
                        $field: self.$field.ok_or_else(|| {
                            $crate::error::GrandError::ConfigurationError {
                                message: concat!("Missing required field: ", stringify!($field))
                                    .to_string(),
                            }
                        })?,
                    )*
                })
            }
        }
    };
}
