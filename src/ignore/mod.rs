//! Exclusion rules for directory loading (`.helmignore`)
//!
//! Rules are line-oriented glob patterns:
//! - `#` starts a comment line, blank lines are skipped
//! - `!pattern` negates a rule
//! - `pattern/` only applies to directories
//! - `/pattern` and `dir/pattern` match the full relative path
//! - a pattern without `/` matches the last path segment only
//!
//! Patterns use `filepath.Match` syntax (`*`, `?`, `[...]` with `^`
//! negation, `\` escapes). They are rewritten into wax globs once, when
//! parsed, and matched against slash-normalized paths.

use std::fs;
use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;

use tracing::trace;
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{self, Result};
use crate::path_utils;

/// Default name of the rule file at the chart root
pub const HELM_IGNORE: &str = ".helmignore";

/// Rules that are always in effect
const DEFAULT_RULES: &[&str] = &["templates/.?*"];

/// What part of a path a rule is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// Full relative path
    Path,
    /// Last path segment
    BaseName,
}

#[derive(Debug, Clone)]
struct Rule {
    raw: String,
    glob: Glob<'static>,
    scope: Scope,
    negate: bool,
    must_dir: bool,
}

impl Rule {
    fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        if line.contains("**") {
            return Err(error::format_error(format!(
                "invalid ignore rule '{line}': double-star (**) syntax is not supported"
            )));
        }

        let (negate, pattern) = match line.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, line),
        };
        let must_dir = pattern.ends_with('/');
        let pattern = pattern.trim_end_matches('/');

        let scope = if pattern.contains('/') {
            Scope::Path
        } else {
            Scope::BaseName
        };
        let pattern = pattern.trim_start_matches('/');

        if pattern.is_empty() {
            return Err(error::format_error(format!(
                "invalid ignore rule '{line}': empty pattern"
            )));
        }
        let expression = translate(pattern).map_err(|reason| {
            error::format_error(format!("invalid ignore rule '{line}': {reason}"))
        })?;
        let glob = Glob::new(&expression)
            .map_err(|e| error::format_error(format!("invalid ignore rule '{line}': {e}")))?
            .into_owned();

        Ok(Some(Self {
            raw: line.to_string(),
            glob,
            scope,
            negate,
            must_dir,
        }))
    }

    fn matches(&self, path: &str) -> bool {
        let subject = match self.scope {
            Scope::Path => path,
            Scope::BaseName => path_utils::base_name(path),
        };
        self.glob.matched(&CandidatePath::from(subject)).is_some()
    }
}

/// Rewrite a `filepath.Match` pattern as a wax glob expression
///
/// Characters that wax reserves for alternations, repetitions and captures
/// are literals here and get escaped.
fn translate(pattern: &str) -> std::result::Result<String, &'static str> {
    let mut expression = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' | '?' | '/' => expression.push(c),
            '\\' => {
                let escaped = chars.next().ok_or("trailing escape character")?;
                push_literal(&mut expression, escaped);
            }
            '[' => translate_class(&mut chars, &mut expression)?,
            _ => push_literal(&mut expression, c),
        }
    }
    Ok(expression)
}

fn push_literal(expression: &mut String, c: char) {
    match c {
        // Candidate paths only ever contain '/'
        '\\' => expression.push('/'),
        c if wax::is_meta_character(c) => {
            expression.push('\\');
            expression.push(c);
        }
        c => expression.push(c),
    }
}

/// Translate a character class; the opening `[` is already consumed
fn translate_class(
    chars: &mut Peekable<Chars<'_>>,
    expression: &mut String,
) -> std::result::Result<(), &'static str> {
    let negate = chars.next_if_eq(&'^').is_some();
    let mut members = String::new();
    loop {
        let c = chars.next().ok_or("unterminated character class")?;
        match c {
            ']' if !members.is_empty() => break,
            '\\' => {
                let escaped = chars.next().ok_or("unterminated character class")?;
                push_class_member(&mut members, escaped);
            }
            '-' => members.push('-'),
            c => push_class_member(&mut members, c),
        }
    }

    // A leading '!' is a literal here but negation in wax
    if !negate && members.starts_with('!') {
        if members.starts_with("!-") {
            return Err("character range starting at '!' is not supported");
        }
        members.remove(0);
        if members.is_empty() {
            push_literal(expression, '!');
            return Ok(());
        }
        members.push('!');
    }

    expression.push('[');
    if negate {
        expression.push('!');
    }
    expression.push_str(&members);
    expression.push(']');
    Ok(())
}

fn push_class_member(members: &mut String, c: char) {
    match c {
        '[' | ']' | '-' => {
            members.push('\\');
            members.push(c);
        }
        '\\' => members.push('/'),
        c => members.push(c),
    }
}

/// An ordered set of exclusion rules
#[derive(Debug, Clone, Default)]
pub struct Rules {
    rules: Vec<Rule>,
}

impl Rules {
    /// Rules that ignore nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Only the built-in default rules
    pub fn with_defaults() -> Result<Self> {
        let mut rules = Self::empty();
        rules.add_defaults()?;
        Ok(rules)
    }

    /// Parse rules from the contents of a rule file
    pub fn parse(content: &str) -> Result<Self> {
        let mut rules = Vec::new();
        for line in content.lines() {
            if let Some(rule) = Rule::parse(line)? {
                rules.push(rule);
            }
        }
        Ok(Self { rules })
    }

    /// Read and parse a rule file
    pub fn parse_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| error::io_error(path.display().to_string(), e))?;
        Self::parse(&content)
    }

    /// Append the built-in default rules
    pub fn add_defaults(&mut self) -> Result<()> {
        for line in DEFAULT_RULES {
            if let Some(rule) = Rule::parse(line)? {
                self.rules.push(rule);
            }
        }
        Ok(())
    }

    /// Number of active rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are active
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Decide whether a root-relative path should be skipped
    ///
    /// A matching rule ignores the path. A negated rule ignores every path it
    /// does *not* match, and lets matching paths fall through to later rules.
    pub fn ignore(&self, path: &str, is_dir: bool) -> bool {
        if path.is_empty() || path == "." || path == "./" {
            return false;
        }
        let path = path_utils::normalize_separators(path);

        for rule in &self.rules {
            if rule.negate {
                if rule.must_dir && !is_dir {
                    trace!(path = %path, rule = %rule.raw, "ignored by directory-only negation");
                    return true;
                }
                if !rule.matches(&path) {
                    trace!(path = %path, rule = %rule.raw, "ignored by negated rule");
                    return true;
                }
                continue;
            }

            if rule.must_dir && !is_dir {
                continue;
            }
            if rule.matches(&path) {
                trace!(path = %path, rule = %rule.raw, "ignored");
                return true;
            }
        }
        false
    }
}
