//! Style presets and configuration
//!
//! Two presets ship with the builder:
//!
//! | Preset   | input class    | surround                         | button class      | always close form |
//! |----------|----------------|----------------------------------|-------------------|-------------------|
//! | `plain`  | `""`           | none                             | `""`              | yes               |
//! | `styled` | `form-control` | `<div class="form-group"></div>` | `btn btn-primary` | no                |
//!
//! Settings can also be loaded from TOML:
//!
//! ```
//! use reinhardt_form_builder::StyleSettings;
//!
//! let settings = StyleSettings::from_toml_str(r#"
//!     preset = "styled"
//!     button_class = "btn btn-dark"
//! "#).unwrap();
//! let config = settings.into_config();
//!
//! assert_eq!(config.input_class, "form-control");
//! assert_eq!(config.button_class, "btn btn-dark");
//! ```

use crate::error::FormBuilderResult;
use crate::surround::Surround;
use serde::{Deserialize, Serialize};

/// Named style presets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StylePreset {
	#[default]
	Plain,
	/// Bootstrap-flavoured defaults
	#[serde(alias = "bootstrap")]
	Styled,
}

/// Rendering configuration owned by a single assembler.
///
/// Changing a value only affects fields rendered afterwards; fragments
/// already stored are never re-rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleConfig {
	/// Default `class` for text and password inputs
	pub input_class: String,
	/// Default `class` for buttons
	pub button_class: String,
	/// Wrapper placed around every input fragment
	pub surround: Surround,
	/// Emit `</form>` for every section, or only for sections holding an
	/// opening tag
	pub always_close_form: bool,
}

impl StyleConfig {
	/// Configuration for a preset
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_form_builder::{StyleConfig, StylePreset};
	///
	/// let plain = StyleConfig::preset(StylePreset::Plain);
	/// assert!(plain.input_class.is_empty());
	/// assert!(plain.always_close_form);
	///
	/// let styled = StyleConfig::preset(StylePreset::Styled);
	/// assert_eq!(styled.button_class, "btn btn-primary");
	/// assert!(!styled.always_close_form);
	/// ```
	pub fn preset(preset: StylePreset) -> Self {
		match preset {
			StylePreset::Plain => Self {
				input_class: String::new(),
				button_class: String::new(),
				surround: Surround::default(),
				always_close_form: true,
			},
			StylePreset::Styled => Self {
				input_class: "form-control".to_string(),
				button_class: "btn btn-primary".to_string(),
				surround: Surround::parse(r#"<div class="form-group"></div>"#),
				always_close_form: false,
			},
		}
	}

	pub fn plain() -> Self {
		Self::preset(StylePreset::Plain)
	}

	pub fn styled() -> Self {
		Self::preset(StylePreset::Styled)
	}
}

impl Default for StyleConfig {
	fn default() -> Self {
		Self::plain()
	}
}

impl From<StylePreset> for StyleConfig {
	fn from(preset: StylePreset) -> Self {
		Self::preset(preset)
	}
}

/// Style settings as written in a configuration file.
///
/// Every field except `preset` is optional and overrides the preset value
/// when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleSettings {
	pub preset: StylePreset,
	pub input_class: Option<String>,
	pub button_class: Option<String>,
	pub surround: Option<String>,
	pub always_close_form: Option<bool>,
}

impl StyleSettings {
	/// Parse settings from a TOML document
	pub fn from_toml_str(source: &str) -> FormBuilderResult<Self> {
		let settings: Self = toml::from_str(source)?;
		tracing::debug!(preset = ?settings.preset, "Loaded form style settings");
		Ok(settings)
	}

	/// Resolve the overrides over the preset
	pub fn into_config(self) -> StyleConfig {
		let mut config = StyleConfig::preset(self.preset);
		if let Some(input_class) = self.input_class {
			config.input_class = input_class;
		}
		if let Some(button_class) = self.button_class {
			config.button_class = button_class;
		}
		if let Some(surround) = self.surround {
			config.surround = Surround::parse(surround);
		}
		if let Some(always_close_form) = self.always_close_form {
			config.always_close_form = always_close_form;
		}
		config
	}
}

impl From<StyleSettings> for StyleConfig {
	fn from(settings: StyleSettings) -> Self {
		settings.into_config()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::FormBuilderError;
	use rstest::rstest;

	#[rstest]
	fn test_default_is_plain() {
		assert_eq!(StyleConfig::default(), StyleConfig::plain());
	}

	#[rstest]
	fn test_styled_surround() {
		let config = StyleConfig::styled();

		assert_eq!(
			config.surround.wrap("X"),
			r#"<div class="form-group">X</div>"#
		);
	}

	#[rstest]
	fn test_empty_settings_resolve_to_plain() {
		let settings = StyleSettings::from_toml_str("").unwrap();

		assert_eq!(settings.into_config(), StyleConfig::plain());
	}

	#[rstest]
	#[case("styled")]
	#[case("bootstrap")]
	fn test_styled_preset_names(#[case] name: &str) {
		let settings = StyleSettings::from_toml_str(&format!("preset = \"{name}\"")).unwrap();

		assert_eq!(settings.preset, StylePreset::Styled);
	}

	#[rstest]
	fn test_overrides_apply_over_preset() {
		let settings = StyleSettings::from_toml_str(
			r#"
			preset = "plain"
			input_class = "field"
			surround = "<p>"
			always_close_form = false
			"#,
		)
		.unwrap();
		let config = settings.into_config();

		assert_eq!(config.input_class, "field");
		assert_eq!(config.button_class, "");
		assert_eq!(config.surround.wrap("X"), "<p>X</p>");
		assert!(!config.always_close_form);
	}

	#[rstest]
	fn test_unknown_key_is_rejected() {
		let result = StyleSettings::from_toml_str("colour = \"red\"");

		assert!(matches!(result, Err(FormBuilderError::InvalidConfig(_))));
	}

	#[rstest]
	fn test_unknown_preset_is_rejected() {
		let result = StyleSettings::from_toml_str("preset = \"material\"");

		assert!(result.is_err());
	}
}
