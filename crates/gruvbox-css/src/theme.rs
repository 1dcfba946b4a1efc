//! The full generation pipeline.
//!
//! A [`ThemeBuild`] holds validated tables and produces every document from
//! them:
//!
//! ```text
//! palette ──► abs variables (:root) ─┐
//! light   ──► mode variables (:root) ─┼─► class document ──► gruvbox.css
//! dark    ──► mode variables (.dark) ─┘
//!
//! palette + light (:root) + @media (prefers-color-scheme: dark) { dark (:root) }
//!                                                      ──► gruvbox-pcs.css
//! class document :root keys ──► constants ──► .js / .cjs / .d.ts / .min.js
//! ```

use gruvbox_palette::{Appearance, ModeTable, Palette, GRUVBOX};
use tracing::debug;

use crate::artifact::Artifact;
use crate::assemble::{mode_css_map, palette_css_map, Namespace};
use crate::config::BuildConfig;
use crate::css_map::{CssMap, ROOT};
use crate::error::BuildError;
use crate::exports::Constants;
use crate::render::{format, media_block, minify, to_css_string, DARK_SCHEME_QUERY, EOL};

/// Validated tables plus the configuration to render them with.
#[derive(Debug, Clone)]
pub struct ThemeBuild {
    config: BuildConfig,
    namespace: Namespace,
    palette: Palette,
    authored: ModeTable,
    derived: ModeTable,
}

impl ThemeBuild {
    /// The gruvbox palette and its light mode.
    pub fn new(config: BuildConfig) -> Result<Self, BuildError> {
        Self::with_tables(config, GRUVBOX, ModeTable::gruvbox_light())
    }

    /// Validates `palette` and `authored`, then derives the opposite mode.
    pub fn with_tables(
        config: BuildConfig,
        palette: Palette,
        authored: ModeTable,
    ) -> Result<Self, BuildError> {
        palette.validate()?;
        authored.validate(&palette)?;
        let derived = authored.invert(&palette, config.inversion())?;
        debug!(
            authored = authored.appearance().name(),
            inversion = ?config.inversion(),
            roles = authored.len(),
            "derived opposite mode"
        );

        Ok(Self {
            namespace: config.namespace(),
            config,
            palette,
            authored,
            derived,
        })
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// The table for one appearance, authored or derived.
    pub fn mode(&self, appearance: Appearance) -> &ModeTable {
        if self.authored.appearance() == appearance {
            &self.authored
        } else {
            &self.derived
        }
    }

    pub fn palette_map(&self) -> CssMap {
        palette_css_map(&self.palette, &self.namespace)
    }

    /// Mode variables for `appearance` under `selector`.
    pub fn mode_map(&self, appearance: Appearance, selector: &str) -> CssMap {
        mode_css_map(self.mode(appearance), &self.namespace, selector)
    }

    /// Palette and light variables under `:root`, dark variables under the
    /// dark class.
    pub fn class_document(&self) -> CssMap {
        CssMap::merge_all([
            &self.palette_map(),
            &self.mode_map(Appearance::Light, self.config.selector_for(Appearance::Light)),
            &self.mode_map(Appearance::Dark, self.config.selector_for(Appearance::Dark)),
        ])
    }

    /// Palette and light variables, with dark variables split out under
    /// `:root` for the `prefers-color-scheme` block.
    pub fn scheme_document(&self) -> (CssMap, CssMap) {
        let base = CssMap::merge_all([
            &self.palette_map(),
            &self.mode_map(Appearance::Light, ROOT),
        ]);
        (base, self.mode_map(Appearance::Dark, ROOT))
    }

    /// Unformatted CSS of the class variant.
    pub fn class_css(&self) -> String {
        to_css_string(&self.class_document())
    }

    /// Unformatted CSS of the `prefers-color-scheme` variant.
    pub fn scheme_css(&self) -> String {
        let (base, dark) = self.scheme_document();
        format!(
            "{}{EOL}{EOL}{}",
            to_css_string(&base),
            media_block(DARK_SCHEME_QUERY, &dark)
        )
    }

    /// Export names for every `:root` property of the class document.
    pub fn constants(&self) -> Result<Constants, BuildError> {
        let document = self.class_document();
        let properties = document
            .get(ROOT)
            .map(|root| root.properties().collect::<Vec<_>>())
            .unwrap_or_default();
        Constants::from_properties(&self.namespace, properties)
    }

    /// Renders all eight artifacts.
    pub fn artifacts(&self) -> Result<Vec<Artifact>, BuildError> {
        let stem = self.config.file_stem();

        let class_css = format(&self.class_css())?;
        let class_min = minify(&class_css)?;
        let scheme_css = format(&self.scheme_css())?;
        let scheme_min = minify(&scheme_css)?;
        let constants = self.constants()?;

        let artifacts = vec![
            Artifact::new(format!("{stem}.css"), class_css),
            Artifact::new(format!("{stem}.min.css"), class_min),
            Artifact::new(format!("{stem}-pcs.css"), scheme_css),
            Artifact::new(format!("{stem}-pcs.min.css"), scheme_min),
            Artifact::new(format!("{stem}.js"), constants.to_esm()),
            Artifact::new(format!("{stem}.cjs"), constants.to_commonjs()),
            Artifact::new(format!("{stem}.d.ts"), constants.to_type_declarations()),
            Artifact::new(
                format!("{stem}.min.js"),
                constants.to_global_object(&self.config.global_name()),
            ),
        ];
        debug!(count = artifacts.len(), constants = constants.len(), "rendered artifacts");
        Ok(artifacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gruvbox_palette::{Inversion, PaletteError};

    fn build() -> ThemeBuild {
        ThemeBuild::new(BuildConfig::default()).unwrap()
    }

    #[test]
    fn test_mode_selection() {
        let build = build();
        assert_eq!(build.mode(Appearance::Light).token_for("bg0"), Some("light0"));
        assert_eq!(build.mode(Appearance::Dark).token_for("bg0"), Some("dark0"));
    }

    #[test]
    fn test_class_document_layout() {
        let doc = build().class_document();
        assert_eq!(
            doc.selectors().collect::<Vec<_>>(),
            vec![ROOT, ".gruvbox-dark"]
        );
        // 39 swatches + 21 light roles
        assert_eq!(doc.get(ROOT).unwrap().len(), 60);
        assert_eq!(doc.get(".gruvbox-dark").unwrap().len(), 21);
    }

    #[test]
    fn test_scheme_css_has_media_block() {
        let css = build().scheme_css();
        assert!(css.contains("\n\n@media (prefers-color-scheme: dark) { :root { "));
        assert!(!css.contains(".gruvbox-dark"));
    }

    #[test]
    fn test_constants_cover_root() {
        let constants = build().constants().unwrap();
        assert_eq!(constants.len(), 60);
        assert_eq!(constants.get("ABS_DARK0_HARD"), Some("--gruvbox-abs-dark0-hard"));
        assert_eq!(constants.get("MODE_FG4_256"), Some("--gruvbox-mode-fg4-256"));
    }

    #[test]
    fn test_artifact_names() {
        let names: Vec<_> = build()
            .artifacts()
            .unwrap()
            .iter()
            .map(|a| a.file_name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "gruvbox.css",
                "gruvbox.min.css",
                "gruvbox-pcs.css",
                "gruvbox-pcs.min.css",
                "gruvbox.js",
                "gruvbox.cjs",
                "gruvbox.d.ts",
                "gruvbox.min.js",
            ]
        );
    }

    #[test]
    fn test_custom_stem() {
        let build = ThemeBuild::new(BuildConfig::default().with_file_stem("theme")).unwrap();
        let artifacts = build.artifacts().unwrap();
        assert_eq!(artifacts[2].file_name(), "theme-pcs.css");
    }

    #[test]
    fn test_missing_reference_aborts() {
        let table = ModeTable::new(Appearance::Light, [("bg0", "light9")]);
        let err = ThemeBuild::with_tables(BuildConfig::default(), GRUVBOX, table).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Palette(PaletteError::MissingToken { .. })
        ));
    }

    #[test]
    fn test_default_build_keeps_faded_accents() {
        let doc = build().class_document();
        assert_eq!(
            doc.get(".gruvbox-dark").unwrap().get("--gruvbox-mode-red"),
            Some("var(--gruvbox-abs-faded-red)")
        );
    }

    #[test]
    fn test_symmetric_inversion_brightens_accents() {
        let build =
            ThemeBuild::new(BuildConfig::default().with_inversion(Inversion::Symmetric)).unwrap();
        let doc = build.class_document();
        assert_eq!(
            doc.get(".gruvbox-dark").unwrap().get("--gruvbox-mode-red"),
            Some("var(--gruvbox-abs-bright-red)")
        );
    }
}
