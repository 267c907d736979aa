//! Substitution rules
//!
//! A [`Rule`] is a compiled pattern plus a replacement template. A [`RuleSet`] applies its
//! rules strictly in order, each rule seeing the output of the one before it. There is no
//! first-match-wins: every rule is tried against the current text of the block.
//!
//! # The standard rule set
//!
//! | #  | name                 | markdown         | html                          |
//! |----|----------------------|------------------|-------------------------------|
//! | 1  | `fenced-code`        | ```` ```lang ```` | `<pre><code>…</code></pre>`  |
//! | 2  | `heading-3`          | `### x`          | `<h3>x</h3>`                  |
//! | 3  | `heading-2`          | `## x`           | `<h2>x</h2>`                  |
//! | 4  | `heading-1`          | `# x`            | `<h1>x</h1>`                  |
//! | 5  | `strong-asterisk`    | `**x**`          | `<strong>x</strong>`          |
//! | 6  | `strong-underscore`  | `__x__`          | `<strong>x</strong>`          |
//! | 7  | `em-asterisk`        | `*x*`            | `<em>x</em>`                  |
//! | 8  | `em-underscore`      | `_x_`            | `<em>x</em>`                  |
//! | 9  | `strikethrough`      | `~~x~~`          | `<del>x</del>`                |
//! | 10 | `inline-code`        | `` `x` ``        | `<code>x</code>`              |
//! | 11 | `image`              | `![a](u)`        | `<img src="u" alt="a" />`     |
//! | 12 | `link`               | `[t](u)`         | `<a href="u">t</a>`           |
//! | 13 | `list-item-asterisk` | `* x`            | `<li>x</li>`                  |
//! | 14 | `list-item-dash`     | `- x`            | `<li>x</li>`                  |
//! | 15 | `list-wrap`          | `<li>…</li>` run | `<ul>…</ul>` (first run only) |
//!
//! The order is part of the contract:
//! - fenced code runs before inline code and emphasis so its body is claimed first
//! - headings go from the most specific prefix (`###`) to the least (`#`)
//! - double markers run before single ones, which is also why `***x***` renders as
//!   `<strong><em>x</strong></em>`
//! - images run before links, otherwise the link rule eats `[a](u)` and leaves the `!`
//! - list items are tagged before the wrap rule looks for them
//!
//! Line terminators are `\n`, `\r`, U+2028 and U+2029. A heading or list marker counts as
//! being at the start of a line after any of them, and no single-line capture crosses one.
//! `\r\n` is one terminator, so a trailing carriage return never ends up inside a tag.

use crate::error::FormatError;
use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::trace;

/// How many matches a rule replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    /// Every non-overlapping match in the block.
    All,
    /// Only the leftmost match.
    First,
}

/// A named pattern and its replacement template.
///
/// Templates reference capture groups as `${1}`, `${2}`, and the whole match as `${0}`.
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    regex: Regex,
    replacement: String,
    scope: Scope,
}

impl Rule {
    /// Compile a rule. Fails only when `pattern` is not a valid regex.
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
        scope: Scope,
    ) -> Result<Self, FormatError> {
        let name = name.into();
        let regex = Regex::new(pattern).map_err(|source| FormatError::InvalidRule {
            name: name.clone(),
            source,
        })?;
        Ok(Self {
            name,
            regex,
            replacement: replacement.into(),
            scope,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Apply the rule to `text`.
    ///
    /// Returns [`Cow::Borrowed`] when the pattern did not match anywhere.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.scope {
            Scope::All => self.regex.replace_all(text, self.replacement.as_str()),
            Scope::First => self.regex.replace(text, self.replacement.as_str()),
        }
    }
}

/// One rule's effect on a block, as recorded by [`RuleSet::apply_traced`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleStep {
    pub rule: String,
    /// Whether the pattern matched at least once.
    pub matched: bool,
    /// Block text after this rule ran.
    pub output: String,
}

/// An ordered list of rules.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

// Any character except a line terminator.
macro_rules! line_char {
    () => {
        r"[^\r\n\x{2028}\x{2029}]"
    };
}

// Line start: `^` in CRLF multi-line mode, or just after U+2028 / U+2029, which the
// replacement puts back as `${1}`.
macro_rules! line_start {
    () => {
        r"(?imR)(^|[\x{2028}\x{2029}])"
    };
}

// (name, pattern, replacement, scope)
const STANDARD_RULES: &[(&str, &str, &str, Scope)] = &[
    (
        "fenced-code",
        r"(?s)```([0-9A-Za-z_]+)?\n(.*?)```",
        "<pre><code>${2}</code></pre>",
        Scope::All,
    ),
    (
        "heading-3",
        concat!(line_start!(), "### (", line_char!(), "*)"),
        "${1}<h3>${2}</h3>",
        Scope::All,
    ),
    (
        "heading-2",
        concat!(line_start!(), "## (", line_char!(), "*)"),
        "${1}<h2>${2}</h2>",
        Scope::All,
    ),
    (
        "heading-1",
        concat!(line_start!(), "# (", line_char!(), "*)"),
        "${1}<h1>${2}</h1>",
        Scope::All,
    ),
    (
        "strong-asterisk",
        concat!(r"\*\*(", line_char!(), r"+?)\*\*"),
        "<strong>${1}</strong>",
        Scope::All,
    ),
    (
        "strong-underscore",
        concat!("__(", line_char!(), "+?)__"),
        "<strong>${1}</strong>",
        Scope::All,
    ),
    (
        "em-asterisk",
        concat!(r"\*(", line_char!(), r"+?)\*"),
        "<em>${1}</em>",
        Scope::All,
    ),
    (
        "em-underscore",
        concat!("_(", line_char!(), "+?)_"),
        "<em>${1}</em>",
        Scope::All,
    ),
    (
        "strikethrough",
        concat!("~~(", line_char!(), "+?)~~"),
        "<del>${1}</del>",
        Scope::All,
    ),
    (
        "inline-code",
        concat!("`(", line_char!(), "+?)`"),
        "<code>${1}</code>",
        Scope::All,
    ),
    (
        "image",
        r"!\[([^\]]*)\]\(([^)]+)\)",
        r#"<img src="${2}" alt="${1}" />"#,
        Scope::All,
    ),
    (
        "link",
        r"\[([^\]]+)\]\(([^)]+)\)",
        r#"<a href="${2}">${1}</a>"#,
        Scope::All,
    ),
    (
        "list-item-asterisk",
        concat!(line_start!(), r"\* (", line_char!(), "+)"),
        "${1}<li>${2}</li>",
        Scope::All,
    ),
    (
        "list-item-dash",
        concat!(line_start!(), "- (", line_char!(), "+)"),
        "${1}<li>${2}</li>",
        Scope::All,
    ),
    (
        "list-wrap",
        r"(?s)<li>.*?</li>(?:\s*<li>.*?</li>)*",
        "<ul>${0}</ul>",
        Scope::First,
    ),
];

static STANDARD: LazyLock<RuleSet> = LazyLock::new(|| {
    let rules = STANDARD_RULES
        .iter()
        .map(|&(name, pattern, replacement, scope)| {
            Rule::new(name, pattern, replacement, scope).expect("standard rule patterns compile")
        })
        .collect();
    RuleSet::new(rules)
});

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The built-in Markdown subset, compiled once per process.
    pub fn standard() -> &'static RuleSet {
        &STANDARD
    }

    /// Append a rule, to run after all existing ones.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name() == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule over `block`, feeding each output into the next rule.
    pub fn apply(&self, block: &str) -> String {
        let mut html = block.to_string();
        for rule in &self.rules {
            let next = match rule.apply(&html) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(next) => next,
            };
            trace!(rule = rule.name(), "rule matched");
            html = next;
        }
        html
    }

    /// Like [`RuleSet::apply`], also recording what each rule did.
    pub fn apply_traced(&self, block: &str) -> (String, Vec<RuleStep>) {
        let mut html = block.to_string();
        let mut steps = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let next = match rule.apply(&html) {
                Cow::Borrowed(_) => None,
                Cow::Owned(next) => Some(next),
            };
            let matched = next.is_some();
            if let Some(next) = next {
                html = next;
            }
            steps.push(RuleStep {
                rule: rule.name().to_string(),
                matched,
                output: html.clone(),
            });
        }
        (html, steps)
    }
}
