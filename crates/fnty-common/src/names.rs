//! Well-known built-in names.
//!
//! The function family lives in fixed packages and is recognized purely by
//! qualified name, so every crate that builds or inspects those names reads
//! them from here.

/// Package holding the plain `Function<N>` family and the marker annotations.
pub const BUILTINS_PACKAGE: &str = "core";

/// Package holding the `SuspendFunction<N>` family.
pub const COROUTINES_PACKAGE: &str = "core.coroutines";

/// Package holding the reflective `KFunction<N>` / `KSuspendFunction<N>` families.
pub const REFLECT_PACKAGE: &str = "core.reflect";

pub const FUNCTION_PREFIX: &str = "Function";
pub const SUSPEND_FUNCTION_PREFIX: &str = "SuspendFunction";
pub const K_FUNCTION_PREFIX: &str = "KFunction";
pub const K_SUSPEND_FUNCTION_PREFIX: &str = "KSuspendFunction";

/// Annotation marking a function type whose first argument is a receiver.
pub const EXTENSION_FUNCTION_TYPE: &str = "core.ExtensionFunctionType";

/// Annotation carrying the source-level name of a function type parameter.
pub const PARAMETER_NAME: &str = "core.ParameterName";

/// Key of the string payload on [`PARAMETER_NAME`].
pub const PARAMETER_NAME_ARGUMENT: &str = "name";

/// Split `a.b.C` into `("a.b", "C")`. Names without a dot live in the root package.
pub fn split_qualified_name(qualified: &str) -> (&str, &str) {
    match qualified.rfind('.') {
        Some(dot) => (&qualified[..dot], &qualified[dot + 1..]),
        None => ("", qualified),
    }
}

/// Join a package and a short name into a qualified name.
pub fn qualify(package: &str, short_name: &str) -> String {
    if package.is_empty() {
        short_name.to_string()
    } else {
        format!("{package}.{short_name}")
    }
}

/// Whether `name` is a plain identifier (letter or `_`, then letters, digits or `_`).
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Parse the arity suffix of a family member's short name.
///
/// Only the canonical decimal spelling is accepted: no sign, no leading
/// zeros (other than `0` itself), and the value must fit in a `u32`.
pub fn parse_arity_suffix(suffix: &str) -> Option<u32> {
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if suffix.len() > 1 && suffix.starts_with('0') {
        return None;
    }
    suffix.parse().ok()
}

#[cfg(test)]
#[path = "../tests/names_tests.rs"]
mod tests;
