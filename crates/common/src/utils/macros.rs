//! Macros for reducing boilerplate code
//!
//! String-backed enums (PII categories, redaction modes) share the same
//! `Display`/`FromStr` shape; this module generates it in one place.

/// Implements `Display`, `FromStr` and `as_str` for string-backed enums
///
/// This macro generates:
/// - `as_str()`: the canonical lowercase name of each variant
/// - `Display`: writes `as_str()`
/// - `FromStr`: case-insensitive, whitespace-trimmed parsing; unknown names
///   are turned into an error by the supplied constructor
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$err_ty` - The `FromStr::Err` type
/// * `$err_ctor` - A function or tuple-variant taking the rejected `String`
/// * `$variant => $str` - Mapping of enum variants to their names
///
/// # Example
///
/// ```rust
/// use piiguard_common::impl_str_conversions;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// pub enum Stage {
///     Scan,
///     Render,
/// }
///
/// impl_str_conversions!(Stage, String, String::from {
///     Scan => "scan",
///     Render => "render",
/// });
///
/// assert_eq!(Stage::Render.to_string(), "render");
/// assert_eq!("SCAN".parse::<Stage>(), Ok(Stage::Scan));
/// ```
#[macro_export]
macro_rules! impl_str_conversions {
    ($enum_name:ident, $err_ty:ty, $err_ctor:path { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical lowercase name
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $err_ty;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err($err_ctor(s.to_string())),
                }
            }
        }
    };
}
