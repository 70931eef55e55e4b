/// Declares a closed set of style keywords.
///
/// Each variant serializes as its keyword, so the JSON document, the CSS projection and the
/// command line all agree on one spelling.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident => $keyword:literal ),+ $(,)?
        }
        default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                #[serde(rename = $keyword)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $keyword, )+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $keyword => Ok($name::$variant), )+
                    _ => Err(format!(
                        "unknown {} '{}' (expected one of: {})",
                        stringify!($name),
                        s,
                        [$($keyword),+].join(", ")
                    )),
                }
            }
        }
    };
}

/// Declares a state section together with its partial-update type.
///
/// The section gets a hard-coded `Default`, camelCase serde names and `#[serde(default)]`
/// so that older documents missing a field still load. The patch type mirrors every field
/// as an `Option`; `merge` copies the present fields and leaves the rest untouched. A field
/// that is present in the payload is always `Some`, so an explicit `null` clears a nullable
/// field instead of being read as absent.
macro_rules! section {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident / $patch:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty = $default:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )+
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $default, )+
                }
            }
        }

        #[doc = concat!("Partial update for [`", stringify!($name), "`]. Absent fields are preserved.")]
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        $vis struct $patch {
            $(
                $(#[$fmeta])*
                #[serde(
                    default,
                    deserialize_with = "crate::schema::macros::present",
                    skip_serializing_if = "Option::is_none"
                )]
                pub $field: Option<$ty>,
            )+
        }

        impl $name {
            /// One-level merge: every field present in `patch` replaces the current value.
            pub fn merge(&mut self, patch: $patch) {
                $(
                    if let Some(value) = patch.$field {
                        self.$field = value;
                    }
                )+
            }
        }

        impl $patch {
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )+
            }
        }
    };
}

/// Deserializes a patch field that is present in the payload, `null` included.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

pub(crate) use keyword_enum;
pub(crate) use section;
