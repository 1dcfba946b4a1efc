//! A minimal CSS document model and its two printers.
//!
//! [`Stylesheet`] holds style rules and `@media` rules, which is everything
//! the generated files contain. It prints in two styles:
//!
//! - [`to_pretty`](Stylesheet::to_pretty): two-space indentation, one
//!   declaration per line, a blank line between sibling rules, trailing
//!   newline.
//! - [`to_minified`](Stylesheet::to_minified): no optional whitespace, no
//!   final `;` in a block, no trailing newline.
//!
//! Selectors and media conditions are stored in their pretty form
//! (`a, b`, `(prefers-color-scheme: dark)`), so a parsed pretty file and
//! a parsed minified file compare equal.

use crate::css_map::{CssMap, Declarations};

/// A selector and its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub selector: String,
    pub declarations: Declarations,
}

/// An `@media` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRule {
    pub condition: String,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Style(StyleRule),
    Media(MediaRule),
}

impl Rule {
    pub fn style(selector: &str, declarations: Declarations) -> Self {
        Rule::Style(StyleRule {
            selector: normalize_selector(selector, false),
            declarations,
        })
    }

    pub fn media(condition: &str, rules: Vec<Rule>) -> Self {
        Rule::Media(MediaRule {
            condition: normalize_condition(condition, false),
            rules,
        })
    }
}

/// An ordered list of rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Total number of declarations, including those nested in media rules.
    pub fn declaration_count(&self) -> usize {
        fn count(rules: &[Rule]) -> usize {
            rules
                .iter()
                .map(|rule| match rule {
                    Rule::Style(style) => style.declarations.len(),
                    Rule::Media(media) => count(&media.rules),
                })
                .sum()
        }
        count(&self.rules)
    }

    pub fn to_pretty(&self) -> String {
        let mut out = String::new();
        write_pretty(&mut out, &self.rules, 0);
        out
    }

    pub fn to_minified(&self) -> String {
        let mut out = String::new();
        write_minified(&mut out, &self.rules);
        out
    }
}

impl From<&CssMap> for Stylesheet {
    fn from(map: &CssMap) -> Self {
        Stylesheet {
            rules: map
                .iter()
                .map(|(selector, declarations)| Rule::style(selector, declarations.clone()))
                .collect(),
        }
    }
}

fn write_pretty(out: &mut String, rules: &[Rule], depth: usize) {
    let indent = "  ".repeat(depth);
    for (i, rule) in rules.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match rule {
            Rule::Style(style) => {
                out.push_str(&indent);
                out.push_str(&style.selector);
                out.push_str(" {\n");
                for (property, value) in style.declarations.iter() {
                    out.push_str(&indent);
                    out.push_str("  ");
                    out.push_str(property);
                    out.push_str(": ");
                    out.push_str(value);
                    out.push_str(";\n");
                }
                out.push_str(&indent);
                out.push_str("}\n");
            }
            Rule::Media(media) => {
                out.push_str(&indent);
                out.push_str("@media ");
                out.push_str(&media.condition);
                out.push_str(" {\n");
                write_pretty(out, &media.rules, depth + 1);
                out.push_str(&indent);
                out.push_str("}\n");
            }
        }
    }
}

fn write_minified(out: &mut String, rules: &[Rule]) {
    for rule in rules {
        match rule {
            Rule::Style(style) => {
                out.push_str(&normalize_selector(&style.selector, true));
                out.push('{');
                let body = style
                    .declarations
                    .iter()
                    .map(|(property, value)| format!("{}:{}", property, value))
                    .collect::<Vec<_>>()
                    .join(";");
                out.push_str(&body);
                out.push('}');
            }
            Rule::Media(media) => {
                out.push_str("@media ");
                out.push_str(&normalize_condition(&media.condition, true));
                out.push('{');
                write_minified(out, &media.rules);
                out.push('}');
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Gap {
    /// `a, b` / `a,b`
    After,
    /// `a > b` / `a>b`
    Around,
}

/// Collapses whitespace and rewrites spacing around separators.
fn respace(text: &str, compact: bool, separator: impl Fn(char, usize) -> Option<Gap>) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut out = String::with_capacity(collapsed.len());
    let mut depth = 0usize;
    let mut chars = collapsed.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            _ => {}
        }
        match separator(c, depth) {
            Some(gap) => {
                while out.ends_with(' ') {
                    out.pop();
                }
                if !compact && gap == Gap::Around {
                    out.push(' ');
                }
                out.push(c);
                if !compact {
                    out.push(' ');
                }
                while chars.peek() == Some(&' ') {
                    chars.next();
                }
            }
            None => out.push(c),
        }
    }
    out
}

/// Canonical spacing for a selector list.
pub(crate) fn normalize_selector(selector: &str, compact: bool) -> String {
    respace(selector, compact, |c, depth| match (c, depth) {
        (',', 0) => Some(Gap::After),
        ('>' | '+' | '~', 0) => Some(Gap::Around),
        _ => None,
    })
}

/// Canonical spacing for a media condition.
pub(crate) fn normalize_condition(condition: &str, compact: bool) -> String {
    respace(condition, compact, |c, _| match c {
        ':' | ',' => Some(Gap::After),
        _ => None,
    })
}

/// Collapses whitespace runs in a declaration value.
pub(crate) fn normalize_value(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css_map::ROOT;

    fn sample() -> Stylesheet {
        let root: Declarations = [("--a", "#fbf1c7"), ("--b", "var(--a)")].into_iter().collect();
        let dark: Declarations = [("--b", "var(--c)")].into_iter().collect();
        Stylesheet {
            rules: vec![
                Rule::style(ROOT, root),
                Rule::media(
                    "(prefers-color-scheme:dark)",
                    vec![Rule::style(ROOT, dark)],
                ),
            ],
        }
    }

    #[test]
    fn test_pretty_output() {
        let expected = "\
:root {
  --a: #fbf1c7;
  --b: var(--a);
}

@media (prefers-color-scheme: dark) {
  :root {
    --b: var(--c);
  }
}
";
        assert_eq!(sample().to_pretty(), expected);
    }

    #[test]
    fn test_minified_output() {
        assert_eq!(
            sample().to_minified(),
            ":root{--a:#fbf1c7;--b:var(--a)}@media (prefers-color-scheme:dark){:root{--b:var(--c)}}"
        );
    }

    #[test]
    fn test_empty_rule() {
        let sheet = Stylesheet {
            rules: vec![Rule::style(".x", Declarations::new())],
        };
        assert_eq!(sheet.to_pretty(), ".x {\n}\n");
        assert_eq!(sheet.to_minified(), ".x{}");
    }

    #[test]
    fn test_selector_spacing() {
        assert_eq!(normalize_selector(".a ,.b", false), ".a, .b");
        assert_eq!(normalize_selector(".a , .b", true), ".a,.b");
        assert_eq!(normalize_selector("ul>li", false), "ul > li");
        assert_eq!(normalize_selector("ul  >  li", true), "ul>li");
        assert_eq!(normalize_selector(":root", false), ":root");
        assert_eq!(normalize_selector("li:nth-child(2n+1)", false), "li:nth-child(2n+1)");
    }

    #[test]
    fn test_condition_spacing() {
        assert_eq!(
            normalize_condition("( prefers-color-scheme :dark )", false),
            "( prefers-color-scheme: dark )"
        );
        assert_eq!(
            normalize_condition("(prefers-color-scheme: dark)", true),
            "(prefers-color-scheme:dark)"
        );
    }

    #[test]
    fn test_declaration_count() {
        assert_eq!(sample().declaration_count(), 3);
    }

    #[test]
    fn test_from_css_map() {
        let mut map = CssMap::new();
        map.push(ROOT, "--a", "1");
        map.push(".gruvbox-dark", "--a", "2");
        let sheet = Stylesheet::from(&map);
        assert_eq!(sheet.rules.len(), 2);
        assert_eq!(sheet.to_minified(), ":root{--a:1}.gruvbox-dark{--a:2}");
    }
}
