//! Authority labels and their canonical claim form.

use std::borrow::Cow;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Authority label granted to an identity (e.g. a role name).
///
/// Authorities are intentionally opaque strings at this layer; mapping them
/// to concrete permissions is the resource server's concern.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Authority(Cow<'static, str>);

impl Authority {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Authority {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Authority {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collapse a collection of authorities into a single reproducible claim value.
///
/// - Deduplicates by exact (case-sensitive) string equality.
/// - Sorts lexicographically, so the output is deterministic regardless of
///   the input collection's iteration order (signatures stay golden-testable).
/// - Joins with a single comma, no surrounding whitespace.
/// - Empty input yields the empty string; this function never errors. The
///   policy decision to reject zero-authority identities belongs to the
///   registration workflow, not here.
pub fn canonicalize<I, A>(authorities: I) -> String
where
    I: IntoIterator<Item = A>,
    A: AsRef<str>,
{
    let distinct: BTreeSet<String> = authorities
        .into_iter()
        .map(|a| a.as_ref().to_string())
        .collect();

    distinct.into_iter().collect::<Vec<_>>().join(",")
}
