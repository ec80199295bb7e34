//! Macros for reducing boilerplate when defining list items
//!
//! These macros generate the field enums and trait implementations needed
//! for each item type to take part in searching and sorting.

/// Declare the field enum of a list item
///
/// Generates the enum, an `ALL` constant, `as_str()`, `Display`, `FromStr`
/// (failing with [`ConfigError::UnknownField`](crate::core::error::ConfigError))
/// and the [`FieldName`](crate::core::item::FieldName) implementation.
///
/// # Example
/// ```rust,ignore
/// list_fields! {
///     /// Searchable and sortable fields of a product
///     pub enum ProductField {
///         Name => "name",
///         Price => "price",
///     }
/// }
///
/// assert_eq!("price".parse::<ProductField>()?, ProductField::Price);
/// assert_eq!(ProductField::Name.as_str(), "name");
/// ```
#[macro_export]
macro_rules! list_fields {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $key:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $name {
            /// Every field, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire name of the field
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::error::ConfigError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($key => Ok($name::$variant),)+
                    other => Err($crate::core::error::ConfigError::UnknownField {
                        item: stringify!($name).to_string(),
                        field: other.to_string(),
                    }),
                }
            }
        }

        impl $crate::core::item::FieldName for $name {
            fn name(&self) -> &'static str {
                self.as_str()
            }

            fn all() -> &'static [Self] {
                $name::ALL
            }
        }
    };
}
