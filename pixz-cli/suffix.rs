//! Filename suffix rules used to pick an output name when none is given.

use crate::config::OperationMode;

/// Maps a recognized filename ending to its counterpart for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    /// Mode the rule applies to
    pub mode: OperationMode,
    /// Ending the known name must have
    pub from: &'static str,
    /// Ending that replaces `from`
    pub to: &'static str,
}

impl SuffixRule {
    const fn new(mode: OperationMode, from: &'static str, to: &'static str) -> Self {
        Self { mode, from, to }
    }

    /// Applies the rule to `name`, or returns `None` if the ending does not match.
    pub fn apply(&self, name: &str) -> Option<String> {
        let stem = name.strip_suffix(self.from)?;
        Some(format!("{stem}{}", self.to))
    }
}

/// Suffix rules in evaluation order.
///
/// Tar-specific endings come before the generic ones so a tarball keeps its
/// `.tar`/`.tpxz` convention.
pub const SUFFIX_RULES: &[SuffixRule] = &[
    SuffixRule::new(OperationMode::Decompress, ".tar.xz", ".tar"),
    SuffixRule::new(OperationMode::Decompress, ".tpxz", ".tar"),
    SuffixRule::new(OperationMode::Decompress, ".xz", ""),
    SuffixRule::new(OperationMode::Compress, ".tar", ".tpxz"),
    SuffixRule::new(OperationMode::Compress, "", ".xz"),
];

/// Derives the counterpart of `name` for `mode` from [`SUFFIX_RULES`].
///
/// Returns `None` when no rule of this mode matches, or when the result would
/// have an empty file name.
pub fn derive_path(mode: OperationMode, name: &str) -> Option<String> {
    derive_path_with(SUFFIX_RULES, mode, name)
}

/// Like [`derive_path`] but over an arbitrary rule table.
pub fn derive_path_with(rules: &[SuffixRule], mode: OperationMode, name: &str) -> Option<String> {
    let derived = rules
        .iter()
        .filter(|rule| rule.mode == mode)
        .find_map(|rule| rule.apply(name))?;

    // "dir/.xz" would decompress to "dir/"
    if derived.is_empty() || derived.ends_with(std::path::is_separator) {
        return None;
    }
    Some(derived)
}
