/// Defines a newtype identifier around a `String` and generates:
/// - derives (Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)
/// - `Display`
/// - `From<String>`, `From<&str>` and `From<$name> for String`
/// - `new`, `as_str` and `is_blank`
///
/// Identifiers are serialized transparently, so `RouterId("MK-001")` travels as `"MK-001"`.
///
/// Usage:
///   define_id_type!(RouterId);
#[macro_export]
macro_rules! define_id_type {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Default,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub ::std::string::String);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(v: ::std::string::String) -> Self {
                $name(v)
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(v: &str) -> Self {
                $name(v.to_string())
            }
        }

        impl ::std::convert::From<$name> for ::std::string::String {
            fn from(v: $name) -> Self {
                v.0
            }
        }

        impl $name {
            pub fn new(value: impl Into<::std::string::String>) -> Self {
                $name(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// True when the identifier is empty or whitespace only.
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }
    };
}
