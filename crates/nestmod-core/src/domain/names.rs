//! Name derivation: one raw identifier, three canonical casing variants.
//!
//! # Design
//!
//! [`ModuleNames`] is a pure value type. The three variants are derived once
//! at construction and never diverge afterwards — the fields are private so
//! the only way to obtain a `ModuleNames` is through [`ModuleNames::derive`],
//! which validates the raw input first.
//!
//! The deriver does **not** re-tokenize multi-word input. The caller supplies
//! one word (`media`) or an already-cased compound (`MediaUser`); kebab-case
//! is recovered from the lowercase→uppercase transitions alone.

use crate::domain::error::DomainError;
use serde::Serialize;
use std::fmt;

/// The three casing variants used throughout generation.
///
/// | Variant | Example      | Used for                         |
/// |---------|--------------|----------------------------------|
/// | pascal  | `MediaUser`  | class names (`MediaUserService`) |
/// | camel   | `mediaUser`  | fields, Prisma client accessors  |
/// | kebab   | `media-user` | file names, directories, routes  |
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleNames {
    pascal: String,
    camel: String,
    kebab: String,
}

impl ModuleNames {
    /// Derive all casing variants from a raw module name.
    ///
    /// Fails when the input is empty, does not start with an ASCII letter, or
    /// contains characters that cannot appear in both an identifier and a
    /// route segment.
    pub fn derive(raw: &str) -> Result<Self, DomainError> {
        validate_raw(raw)?;

        let pascal = to_pascal(raw);
        let camel = to_camel(&pascal);
        let kebab = to_kebab(raw);

        Ok(Self {
            pascal,
            camel,
            kebab,
        })
    }

    /// PascalCase identifier, e.g. `MediaUser`.
    pub fn pascal(&self) -> &str {
        &self.pascal
    }

    /// camelCase identifier, e.g. `mediaUser`.
    pub fn camel(&self) -> &str {
        &self.camel
    }

    /// kebab-case segment, e.g. `media-user`.
    pub fn kebab(&self) -> &str {
        &self.kebab
    }
}

impl fmt::Display for ModuleNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pascal)
    }
}

// ── Derivation helpers ────────────────────────────────────────────────────────

fn validate_raw(raw: &str) -> Result<(), DomainError> {
    if raw.is_empty() {
        return Err(DomainError::InvalidName {
            name: raw.into(),
            reason: "name cannot be empty".into(),
        });
    }

    if !raw.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Err(DomainError::InvalidName {
            name: raw.into(),
            reason: "name must start with an ASCII letter".into(),
        });
    }
    if let Some(bad) = raw.chars().find(|c| !c.is_ascii_alphanumeric()) {
        return Err(DomainError::InvalidName {
            name: raw.into(),
            reason: format!("character '{bad}' is not allowed"),
        });
    }
    Ok(())
}

/// Uppercase the first character; the remainder keeps the caller's casing.
fn to_pascal(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Lowercase the first character of the PascalCase form.
fn to_camel(pascal: &str) -> String {
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Hyphen at every lowercase→uppercase transition, then lowercase everything.
///
/// Only that one transition splits words: `MediaUser` → `media-user`, but
/// `HTTPServer` stays `httpserver` (consecutive capitals are not a boundary).
fn to_kebab(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 4);
    let mut prev_lower = false;
    for c in raw.chars() {
        if c.is_ascii_uppercase() && prev_lower {
            out.push('-');
        }
        prev_lower = c.is_ascii_lowercase();
        out.push(c.to_ascii_lowercase());
    }
    out
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word_derivation() {
        let n = ModuleNames::derive("media").unwrap();
        assert_eq!(n.pascal(), "Media");
        assert_eq!(n.camel(), "media");
        assert_eq!(n.kebab(), "media");
    }

    #[test]
    fn compound_word_derivation() {
        let n = ModuleNames::derive("MediaUser").unwrap();
        assert_eq!(n.pascal(), "MediaUser");
        assert_eq!(n.camel(), "mediaUser");
        assert_eq!(n.kebab(), "media-user");
    }

    #[test]
    fn camel_input_is_equivalent_to_pascal_input() {
        let a = ModuleNames::derive("mediaUser").unwrap();
        let b = ModuleNames::derive("MediaUser").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(
            ModuleNames::derive("InvoiceLine").unwrap(),
            ModuleNames::derive("InvoiceLine").unwrap()
        );
    }

    #[test]
    fn consecutive_capitals_are_not_a_word_boundary() {
        let n = ModuleNames::derive("HTTPServer").unwrap();
        assert_eq!(n.kebab(), "httpserver");
    }

    #[test]
    fn digits_are_allowed_after_the_first_character() {
        let n = ModuleNames::derive("oauth2Client").unwrap();
        assert_eq!(n.pascal(), "Oauth2Client");
        assert_eq!(n.kebab(), "oauth2-client");
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(
            ModuleNames::derive(""),
            Err(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn leading_digit_is_rejected() {
        assert!(ModuleNames::derive("2fa").is_err());
    }

    #[test]
    fn separator_characters_are_rejected() {
        for raw in ["media-user", "media_user", "media user", "media/user", "média"] {
            assert!(ModuleNames::derive(raw).is_err(), "accepted: {raw}");
        }
    }

    #[test]
    fn display_is_pascal() {
        let n = ModuleNames::derive("mediaUser").unwrap();
        assert_eq!(n.to_string(), "MediaUser");
    }
}
