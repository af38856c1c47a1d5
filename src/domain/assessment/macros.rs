//! DRY macro for questionnaire catalogs.
//!
//! Every multiple-choice question draws its answers from a fixed catalog of
//! display labels. **`catalog!`** generates the enum for one catalog together
//! with label parsing, display and string-based serde.
//!
//! # Usage
//!
//! ```ignore
//! catalog! {
//!     /// Compliance standards.
//!     pub enum ComplianceStandard {
//!         Gdpr => "GDPR",
//!         PciDss => "PCI DSS" | "PCI-DSS",
//!     }
//! }
//! ```
//!
//! Each variant maps to its canonical label; extra labels after `|` are
//! historical aliases that parse to the same variant. Any other string becomes
//! `Unrecognized(String)` and round-trips unchanged.

/// Generates a catalog enum with an `Unrecognized(String)` fallback variant.
///
/// The generated type provides:
/// - `label()` - canonical display label (or the raw string if unrecognized)
/// - `from_label()` - lenient parse that never fails
/// - `all()` - every recognized entry in declaration order
/// - `is_recognized()`
/// - `Display`, `FromStr`, `From<&str>`, `From<String>`, `Into<String>`
/// - serde as a plain string
macro_rules! catalog {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $label:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(from = "String", into = "String")]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value outside the catalog. Tolerated, never matched by a rule.
            Unrecognized(String),
        }

        impl $name {
            /// Parses a label, accepting historical aliases.
            pub fn from_label(label: &str) -> Self {
                match label {
                    $( $label $(| $alias)* => $name::$variant, )+
                    other => $name::Unrecognized(other.to_string()),
                }
            }

            /// Returns the canonical display label.
            pub fn label(&self) -> &str {
                match self {
                    $( $name::$variant => $label, )+
                    $name::Unrecognized(raw) => raw.as_str(),
                }
            }

            /// Returns every recognized catalog entry, in declaration order.
            pub fn all() -> Vec<Self> {
                vec![ $( $name::$variant ),+ ]
            }

            /// Returns true if this value belongs to the catalog.
            pub fn is_recognized(&self) -> bool {
                !matches!(self, $name::Unrecognized(_))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from_label(s))
            }
        }

        impl From<&str> for $name {
            fn from(label: &str) -> Self {
                Self::from_label(label)
            }
        }

        impl From<String> for $name {
            fn from(label: String) -> Self {
                Self::from_label(&label)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Unrecognized(raw) => raw,
                    known => known.label().to_string(),
                }
            }
        }
    };
}
