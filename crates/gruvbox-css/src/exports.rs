//! JS/TS constant modules.
//!
//! Each exported constant holds a custom-property name, not a color, so a
//! consumer resolving `var(MODE_FG0)` keeps following the active mode.

use std::collections::HashMap;

use crate::assemble::Namespace;
use crate::error::BuildError;
use crate::naming::constant_name;
use crate::render::EOL;

/// Ordered `CONSTANT_NAME` → `--custom-property` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constants {
    entries: Vec<(String, String)>,
}

impl Constants {
    /// Derives constant names for `properties`.
    ///
    /// `--<ns>-abs-dark0-hard` becomes `ABS_DARK0_HARD`. Properties outside
    /// the namespace keep their full name minus the leading dashes. Two
    /// properties deriving the same name is an error.
    pub fn from_properties<'a>(
        namespace: &Namespace,
        properties: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, BuildError> {
        let mut seen: HashMap<String, &'a str> = HashMap::new();
        let mut entries = Vec::new();

        for property in properties {
            let suffix = namespace
                .strip(property)
                .unwrap_or_else(|| property.trim_start_matches('-'));
            let name = constant_name(suffix);
            if let Some(first) = seen.insert(name.clone(), property) {
                return Err(BuildError::ConstantCollision {
                    name,
                    first: first.to_string(),
                    second: property.to_string(),
                });
            }
            entries.push((name, property.to_string()));
        }

        Ok(Self { entries })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, p)| (n.as_str(), p.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `export const NAME = "--ns-...";` per constant.
    pub fn to_esm(&self) -> String {
        self.lines(|name, property| format!("export const {} = {};", name, quote(property)))
    }

    /// `exports.NAME = "--ns-...";` per constant.
    pub fn to_commonjs(&self) -> String {
        self.lines(|name, property| format!("exports.{} = {};", name, quote(property)))
    }

    /// `export const NAME: string;` per constant.
    pub fn to_type_declarations(&self) -> String {
        self.lines(|name, _| format!("export const {}: string;", name))
    }

    /// A single `var GLOBAL={NAME:"--ns-...",...}` statement.
    pub fn to_global_object(&self, global: &str) -> String {
        let fields = self
            .iter()
            .map(|(name, property)| format!("{}:{}", name, quote(property)))
            .collect::<Vec<_>>()
            .join(",");
        format!("var {}={{{}}}", global, fields)
    }

    fn lines(&self, line: impl Fn(&str, &str) -> String) -> String {
        self.iter()
            .map(|(name, property)| line(name, property))
            .collect::<Vec<_>>()
            .join(EOL)
    }
}

/// A double-quoted JS string literal.
fn quote(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Constants {
        Constants::from_properties(
            &Namespace::new("gruvbox"),
            ["--gruvbox-abs-dark0-hard", "--gruvbox-mode-bg0"],
        )
        .unwrap()
    }

    #[test]
    fn test_constant_names() {
        let constants = sample();
        assert_eq!(constants.get("ABS_DARK0_HARD"), Some("--gruvbox-abs-dark0-hard"));
        assert_eq!(constants.get("MODE_BG0"), Some("--gruvbox-mode-bg0"));
        assert_eq!(constants.len(), 2);
    }

    #[test]
    fn test_esm() {
        assert_eq!(
            sample().to_esm(),
            "export const ABS_DARK0_HARD = \"--gruvbox-abs-dark0-hard\";\n\
             export const MODE_BG0 = \"--gruvbox-mode-bg0\";"
        );
    }

    #[test]
    fn test_commonjs() {
        assert_eq!(
            sample().to_commonjs(),
            "exports.ABS_DARK0_HARD = \"--gruvbox-abs-dark0-hard\";\n\
             exports.MODE_BG0 = \"--gruvbox-mode-bg0\";"
        );
    }

    #[test]
    fn test_type_declarations() {
        assert_eq!(
            sample().to_type_declarations(),
            "export const ABS_DARK0_HARD: string;\nexport const MODE_BG0: string;"
        );
    }

    #[test]
    fn test_global_object() {
        assert_eq!(
            sample().to_global_object("GRUVBOX"),
            "var GRUVBOX={ABS_DARK0_HARD:\"--gruvbox-abs-dark0-hard\",\
             MODE_BG0:\"--gruvbox-mode-bg0\"}"
        );
    }

    #[test]
    fn test_collision_is_reported() {
        let err = Constants::from_properties(
            &Namespace::new("gruvbox"),
            ["--gruvbox-abs-a-b", "--gruvbox-abs-a_b"],
        )
        .unwrap_err();
        match err {
            BuildError::ConstantCollision {
                name,
                first,
                second,
            } => {
                assert_eq!(name, "ABS_A_B");
                assert_eq!(first, "--gruvbox-abs-a-b");
                assert_eq!(second, "--gruvbox-abs-a_b");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_foreign_property_keeps_full_name() {
        let constants =
            Constants::from_properties(&Namespace::new("gruvbox"), ["--other-x"]).unwrap();
        assert_eq!(constants.get("OTHER_X"), Some("--other-x"));
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
    }
}
