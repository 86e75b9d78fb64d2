//! Path helpers shared by the selector and the walker

use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern};

/// Shell-glob options: `*` crosses `/`, matching is case sensitive and a
/// leading dot needs no literal match.
const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Lexically normalize a user-supplied rule: drop `.` segments, repeated and
/// trailing separators, and fold `..` into its parent where possible.
///
/// Both `/` and `\` count as separators. The result always uses `/`, and an
/// empty result becomes `"."`.
pub fn normalize_rule(rule: &str) -> String {
    let absolute = rule.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for segment in rule.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                _ if absolute => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Canonicalize a path, returning `None` when it cannot be resolved
/// (missing target, broken symlink, permission denied).
pub fn resolve(path: &Path) -> Option<PathBuf> {
    dunce::canonicalize(path).ok()
}

/// Path of `path` relative to `root`, using `/` separators.
///
/// Returns `None` when `path` is not under `root`. The root itself maps to
/// an empty string.
pub fn relative_posix(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    Some(posix_string(rel))
}

/// Render a relative path with `/` separators.
pub fn posix_string(rel: &Path) -> String {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Lower-cased final extension with its leading dot, e.g. `".rs"`.
///
/// Dotfiles such as `.bashrc` have no extension.
pub fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}

/// Rewrite a shell glob so the `glob` crate reads it with `fnmatch` rules.
///
/// Runs of `*` collapse to one `*` (there is no recursive `**`, and a single
/// `*` already crosses `/`). A `[` with no closing `]` becomes the literal
/// class `[[]`. Bracket expressions are copied untouched.
pub fn shell_pattern(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                out.push('*');
                while chars.get(i + 1) == Some(&'*') {
                    i += 1;
                }
            }
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.extend(&chars[i..=end]);
                    i = end;
                }
                None => out.push_str("[[]"),
            },
            c => out.push(c),
        }
        i += 1;
    }

    out
}

/// Index of the `]` closing the bracket expression opened at `start`.
/// A `]` directly after `[` or `[!` is a member, not the terminator.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut first = start + 1;
    if chars.get(first) == Some(&'!') {
        first += 1;
    }
    chars
        .iter()
        .enumerate()
        .skip(first + 1)
        .find(|(_, c)| **c == ']')
        .map(|(idx, _)| idx)
}

/// Compile a shell glob rule.
pub fn compile_glob(raw: &str) -> Result<Pattern, glob::PatternError> {
    Pattern::new(&shell_pattern(raw))
}

/// Match a compiled glob pattern against a root-relative path.
pub fn glob_matches(pattern: &Pattern, rel: &str) -> bool {
    pattern.matches_with(rel, GLOB_OPTIONS)
}
