//! Aggregator patching: idempotent registration of a module in the
//! application's central module file (`app.module.ts`).
//!
//! # Design
//!
//! The only edit ever required is "add one import line, add one entry to one
//! list", so the patcher deliberately does **not** parse the aggregator's
//! grammar. A single non-greedy scan locates the first `imports: [ ... ]`
//! block; everything outside the two insertion points is preserved
//! byte-for-byte. Known assumptions about the target file:
//!
//! - it contains at most one relevant `imports:` list;
//! - entries are identifiers, one per line by convention.
//!
//! The algorithm here is pure (`&str` in, `String` out). Reading, writing and
//! the absent-file `Skipped` case live in
//! [`crate::application::GenerateService::register`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::ModuleNames;

/// First `imports: [ ... ]` block, non-greedy so the capture stops at the
/// first closing bracket.
static IMPORTS_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)imports\s*:\s*\[(.*?)\]").expect("imports-list pattern is valid")
});

// ── Outcome ───────────────────────────────────────────────────────────────────

/// What one patch invocation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatchOutcome {
    /// The aggregator file does not exist; nothing to do and nothing wrong.
    Skipped,
    /// Import and list entry were both already present; output byte-identical.
    AlreadyPresent,
    /// The import line, the list entry, or both were newly added.
    Inserted,
    /// No `imports: [ ... ]` marker was found. The import line may still have
    /// been inserted; the list edit was not attempted. Surfaced as a warning,
    /// never silently swallowed.
    ListNotFound,
}

impl PatchOutcome {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Skipped => "skipped",
            Self::AlreadyPresent => "already-present",
            Self::Inserted => "inserted",
            Self::ListNotFound => "list-not-found",
        }
    }
}

impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of patching one aggregator document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchedAggregator {
    /// The (possibly rewritten) document text.
    pub content: String,
    /// What changed. Never [`PatchOutcome::Skipped`] — the pure algorithm
    /// always has a document to work on.
    pub outcome: PatchOutcome,
}

// ── Algorithm ─────────────────────────────────────────────────────────────────

/// The exact import statement expected for a module.
pub fn import_line(names: &ModuleNames) -> String {
    format!(
        "import {{ {pascal}Module }} from './{kebab}/{kebab}.module';",
        pascal = names.pascal(),
        kebab = names.kebab(),
    )
}

/// Idempotently register `names` in an aggregator document.
///
/// 1. Prepend the import line unless the exact statement is already present.
/// 2. Locate the first `imports: [ ... ]` list; if absent, stop with
///    [`PatchOutcome::ListNotFound`].
/// 3. Append `<Pascal>Module,` to the list unless the identifier already
///    appears in it as a whole token, adding a separating comma only when the
///    existing content needs one.
///
/// Pre-existing entries are never reordered or rewritten. Applying the
/// function twice yields the same text as applying it once.
pub fn register_module(source: &str, names: &ModuleNames) -> PatchedAggregator {
    let import = import_line(names);
    let token = format!("{}Module", names.pascal());

    let import_added = !source.contains(&import);
    let content = if import_added {
        format!("{import}\n{source}")
    } else {
        source.to_owned()
    };

    let Some(list) = IMPORTS_LIST.captures(&content).and_then(|caps| caps.get(1)) else {
        return PatchedAggregator {
            content,
            outcome: PatchOutcome::ListNotFound,
        };
    };

    if contains_identifier(list.as_str(), &token) {
        let outcome = if import_added {
            PatchOutcome::Inserted
        } else {
            PatchOutcome::AlreadyPresent
        };
        return PatchedAggregator { content, outcome };
    }

    let existing = list.as_str().trim();
    let needs_comma = !existing.is_empty() && !existing.ends_with(',');

    let mut patched = String::with_capacity(content.len() + token.len() + 8);
    patched.push_str(&content[..list.end()]);
    if needs_comma {
        patched.push(',');
    }
    patched.push_str("\n    ");
    patched.push_str(&token);
    patched.push(',');
    patched.push_str(&content[list.end()..]);

    PatchedAggregator {
        content: patched,
        outcome: PatchOutcome::Inserted,
    }
}

/// Whole-token search: `UserModule` must not be satisfied by `EndUserModule`.
fn contains_identifier(haystack: &str, ident: &str) -> bool {
    haystack.match_indices(ident).any(|(at, _)| {
        let before = haystack[..at].chars().next_back();
        let after = haystack[at + ident.len()..].chars().next();
        !before.is_some_and(is_ident_char) && !after.is_some_and(is_ident_char)
    })
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

// ── tests ─────────────────────────────────────────────────────────────────────
