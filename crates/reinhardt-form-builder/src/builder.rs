//! Fluent form assembler
//!
//! [`FormAssembler`] accumulates form sections from a chain of calls and
//! renders them to a single HTML fragment. Fields added before any explicit
//! [`create`](FormAssembler::create) open an implicit form with default
//! attributes.
//!
//! ```
//! use reinhardt_form_builder::{Attributes, FormAssembler, FormBuilder};
//!
//! let html = FormAssembler::with_prefill([("username", "jean")])
//!     .create_with(Attributes::from([("action", "/login")]))
//!     .input("username")
//!     .password("password")
//!     .button("submit", "Sign in")
//!     .render();
//!
//! assert_eq!(
//!     html,
//!     concat!(
//!         r#"<form action="/login" method="POST">"#,
//!         r#"<input type="text" name="username" value="jean" id="username">"#,
//!         r#"<input type="password" name="password" id="password">"#,
//!         r#"<button type="submit">Sign in</button>"#,
//!         "</form>",
//!     )
//! );
//! ```

use crate::attributes::{AttributeOverrides, Attributes, escape_attribute};
use crate::error::{FormBuilderError, FormBuilderResult};
use crate::section::{FormState, Slot};
use crate::style::StyleConfig;
use crate::surround::Surround;
use indexmap::IndexMap;
use std::fmt;

/// Field name used by [`FormAssembler::password_field`]
pub const DEFAULT_PASSWORD_NAME: &str = "password";

/// Operations shared by every form builder.
///
/// Each operation consumes the builder and returns it, so calls chain.
pub trait FormBuilder: Sized {
	/// Open a new form. `attributes` are merged over
	/// `{action: "", method: "POST"}`.
	fn create_with(self, attributes: Attributes) -> Self;

	/// Add a text input to the current form.
	fn input_with(self, name: &str, label: &str, attributes: AttributeOverrides) -> Self;

	/// Add a password input to the current form.
	fn password_with(self, name: &str, label: &str, attributes: AttributeOverrides) -> Self;

	/// Add a button of type `kind`. The button is keyed by its type, so a
	/// second button of the same type in one form replaces the first.
	fn button_with_class(self, kind: &str, text: &str, class: &str) -> Self;

	fn set_input_class(self, class: &str) -> Self;

	fn set_button_class(self, class: &str) -> Self;

	/// Set the wrapper template for inputs rendered from now on.
	fn set_surround(self, template: &str) -> Self;

	/// Set the heading shown before the current form, replacing any earlier one.
	fn title(self, html: &str) -> Self;

	/// Render every form in creation order.
	fn render(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputKind {
	Text,
	Password,
}

impl InputKind {
	fn as_str(self) -> &'static str {
		match self {
			InputKind::Text => "text",
			InputKind::Password => "password",
		}
	}
}

/// Builds the markup of one or more HTML forms.
///
/// Each assembler owns its prefill values, its accumulated sections and its
/// style configuration. It is meant to be built, rendered and dropped by a
/// single caller.
#[derive(Debug, Clone, Default)]
pub struct FormAssembler {
	prefill: IndexMap<String, String>,
	state: FormState,
	style: StyleConfig,
}

impl FormAssembler {
	/// Create an assembler with the plain preset and no prefill values
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_form_builder::FormAssembler;
	///
	/// let form = FormAssembler::new();
	/// assert!(form.is_empty());
	/// assert_eq!(form.to_string(), "");
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an assembler with the styled preset and no prefill values
	pub fn styled() -> Self {
		Self::with_style(Vec::<(String, String)>::new(), StyleConfig::styled())
	}

	/// Create a plain assembler whose fields are pre-filled from `values`
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_form_builder::FormAssembler;
	///
	/// let form = FormAssembler::with_prefill([("city", "Paris")]);
	/// assert_eq!(form.prefill("city"), Some("Paris"));
	/// assert_eq!(form.prefill("zip"), None);
	/// ```
	pub fn with_prefill<I, K, V>(values: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self::with_style(values, StyleConfig::plain())
	}

	/// Create an assembler from prefill values and any style configuration
	pub fn with_style<I, K, V>(values: I, style: StyleConfig) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			prefill: values
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
			state: FormState::new(),
			style,
		}
	}

	/// Open a new form with the default attributes
	pub fn create(self) -> Self {
		self.create_with(Attributes::new())
	}

	/// Add a text input with no label and the default attributes
	pub fn input(self, name: &str) -> Self {
		self.input_with(name, "", AttributeOverrides::default())
	}

	/// Add a password input with no label and the default attributes
	pub fn password(self, name: &str) -> Self {
		self.password_with(name, "", AttributeOverrides::default())
	}

	/// Add a password input named `password`
	pub fn password_field(self) -> Self {
		self.password(DEFAULT_PASSWORD_NAME)
	}

	/// Add a button using the configured button class
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_form_builder::{FormAssembler, FormBuilder};
	///
	/// let html = FormAssembler::styled().button("submit", "Go").render();
	/// assert_eq!(
	///     html,
	///     r#"<form method="POST"><button type="submit" class="btn btn-primary">Go</button></form>"#
	/// );
	/// ```
	pub fn button(self, kind: &str, text: &str) -> Self {
		let class = self.style.button_class.clone();
		self.button_with_class(kind, text, &class)
	}

	/// Like [`FormBuilder::input_with`], but rejects an empty field name.
	///
	/// The assembler is consumed on error.
	pub fn try_input(
		self,
		name: &str,
		label: &str,
		attributes: AttributeOverrides,
	) -> FormBuilderResult<Self> {
		validate_name(name)?;
		Ok(self.input_with(name, label, attributes))
	}

	/// Like [`FormBuilder::password_with`], but rejects an empty field name.
	///
	/// The assembler is consumed on error.
	pub fn try_password(
		self,
		name: &str,
		label: &str,
		attributes: AttributeOverrides,
	) -> FormBuilderResult<Self> {
		validate_name(name)?;
		Ok(self.password_with(name, label, attributes))
	}

	/// Prefill value for a field, if one was supplied
	pub fn prefill(&self, name: &str) -> Option<&str> {
		self.prefill.get(name).map(String::as_str)
	}

	pub fn style(&self) -> &StyleConfig {
		&self.style
	}

	pub fn state(&self) -> &FormState {
		&self.state
	}

	/// Index of the current form, 0 while no form has been opened
	pub fn form_index(&self) -> usize {
		self.state.form_index()
	}

	pub fn section_count(&self) -> usize {
		self.state.sections().len()
	}

	pub fn is_empty(&self) -> bool {
		self.state.is_empty()
	}

	fn open_section(&mut self, attributes: &Attributes) {
		let defaults = Attributes::new().with("action", "").with("method", "POST");
		let opening = start_tag("form", &defaults.merge(attributes));
		let index = self.state.open(opening);
		tracing::debug!(form_index = index, "Opened form section");
	}

	/// Make sure a current section exists, opening one with default
	/// attributes if none does.
	fn ensure_open(&mut self) {
		if self.state.is_empty() {
			tracing::debug!("No form opened yet, creating one implicitly");
			self.open_section(&Attributes::new());
		}
	}

	fn store(&mut self, slot: Slot, fragment: String) {
		self.ensure_open();
		tracing::trace!(slot = ?slot, form_index = self.state.form_index(), "Storing fragment");
		if let Some(section) = self.state.current_mut() {
			section.set(slot, fragment);
		}
	}

	fn render_input(
		&self,
		kind: InputKind,
		name: &str,
		label: &str,
		overrides: &AttributeOverrides,
	) -> String {
		if name.is_empty() {
			tracing::warn!(kind = kind.as_str(), "Rendering input with an empty name");
		}

		let mut defaults = Attributes::new().with("name", name);
		defaults.insert_optional("value", self.prefill(name).map(str::to_string));
		defaults.insert("id", name);
		defaults.insert("class", self.style.input_class.as_str());
		let attrs = overrides.apply(defaults);

		// A caller-supplied `type` replaces the input kind
		let input = start_tag("input", &Attributes::new().with("type", kind.as_str()).merge(&attrs));

		let content = if label.is_empty() {
			input
		} else {
			let target = escape_attribute(attrs.get("id").unwrap_or_default());
			format!("<label for=\"{target}\">{label}</label>{input}")
		};

		self.style.surround.wrap(&content)
	}

	fn add_input(
		mut self,
		kind: InputKind,
		name: &str,
		label: &str,
		attributes: AttributeOverrides,
	) -> Self {
		let fragment = self.render_input(kind, name, label, &attributes);
		self.store(Slot::field(name), fragment);
		self
	}
}

impl FormBuilder for FormAssembler {
	fn create_with(mut self, attributes: Attributes) -> Self {
		self.open_section(&attributes);
		self
	}

	fn input_with(self, name: &str, label: &str, attributes: AttributeOverrides) -> Self {
		self.add_input(InputKind::Text, name, label, attributes)
	}

	fn password_with(self, name: &str, label: &str, attributes: AttributeOverrides) -> Self {
		self.add_input(InputKind::Password, name, label, attributes)
	}

	fn button_with_class(mut self, kind: &str, text: &str, class: &str) -> Self {
		let attrs = Attributes::new().with("type", kind).with("class", class);
		let fragment = format!("{}{}</button>", start_tag("button", &attrs), text);
		self.store(Slot::field(kind), fragment);
		self
	}

	fn set_input_class(mut self, class: &str) -> Self {
		self.style.input_class = class.to_string();
		self
	}

	fn set_button_class(mut self, class: &str) -> Self {
		self.style.button_class = class.to_string();
		self
	}

	fn set_surround(mut self, template: &str) -> Self {
		self.style.surround = Surround::parse(template);
		self
	}

	fn title(mut self, html: &str) -> Self {
		self.store(Slot::Title, html.to_string());
		self
	}

	fn render(&self) -> String {
		tracing::trace!(sections = self.section_count(), "Rendering forms");
		self.state.render(self.style.always_close_form)
	}
}

impl fmt::Display for FormAssembler {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&FormBuilder::render(self))
	}
}

fn start_tag(tag: &str, attrs: &Attributes) -> String {
	let rendered = attrs.render();
	if rendered.is_empty() {
		format!("<{tag}>")
	} else {
		format!("<{tag} {rendered}>")
	}
}

fn validate_name(name: &str) -> FormBuilderResult<()> {
	if name.is_empty() {
		return Err(FormBuilderError::InvalidArgument(
			"field name must not be empty".to_string(),
		));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_field_before_create_opens_implicit_form() {
		let form = FormAssembler::new().input("username");

		assert_eq!(form.form_index(), 1);
		assert_eq!(
			form.render(),
			r#"<form method="POST"><input type="text" name="username" id="username"></form>"#
		);
	}

	#[rstest]
	fn test_create_only_advances_index() {
		let form = FormAssembler::new().input("a").input("b").title("<h1>T</h1>");
		assert_eq!(form.form_index(), 1);

		let form = form.create().create();
		assert_eq!(form.form_index(), 3);
	}

	#[rstest]
	fn test_title_before_any_field_opens_form() {
		let form = FormAssembler::new().title("<h1>T</h1>");

		assert_eq!(form.render(), r#"<h1>T</h1><form method="POST"></form>"#);
	}

	#[rstest]
	fn test_prefill_value_sits_between_name_and_id() {
		let form = FormAssembler::with_prefill([("name", "Jean")]).input("name");

		assert_eq!(
			form.render(),
			r#"<form method="POST"><input type="text" name="name" value="Jean" id="name"></form>"#
		);
	}

	#[rstest]
	fn test_defaults_only_ignores_caller_attributes() {
		let form = FormAssembler::new().set_input_class("wide").input_with(
			"city",
			"City",
			AttributeOverrides::DefaultsOnly,
		);

		assert_eq!(
			form.render(),
			concat!(
				r#"<form method="POST">"#,
				r#"<label for="city">City</label>"#,
				r#"<input type="text" name="city" id="city" class="wide">"#,
				"</form>"
			)
		);
	}

	#[rstest]
	fn test_label_targets_overridden_id() {
		let form = FormAssembler::new().input_with(
			"username",
			"Pseudo",
			Attributes::from([("id", "login-user")]).into(),
		);

		assert_eq!(
			form.render(),
			concat!(
				r#"<form method="POST">"#,
				r#"<label for="login-user">Pseudo</label>"#,
				r#"<input type="text" name="username" id="login-user">"#,
				"</form>"
			)
		);
	}

	#[rstest]
	fn test_caller_type_overrides_input_kind() {
		let form = FormAssembler::new().input_with(
			"mail",
			"",
			Attributes::from([("type", "email")]).into(),
		);

		assert_eq!(
			form.render(),
			r#"<form method="POST"><input type="email" name="mail" id="mail"></form>"#
		);
	}

	#[rstest]
	fn test_empty_name_is_rendered_permissively() {
		let form = FormAssembler::new().input("");

		assert_eq!(form.render(), r#"<form method="POST"><input type="text"></form>"#);
	}

	#[rstest]
	fn test_try_input_rejects_empty_name() {
		let result = FormAssembler::new().try_input("", "", AttributeOverrides::default());

		assert!(matches!(result, Err(FormBuilderError::InvalidArgument(_))));
	}

	#[rstest]
	fn test_try_password_accepts_name() {
		let form = FormAssembler::new()
			.try_password("secret", "", AttributeOverrides::default())
			.unwrap();

		assert_eq!(
			form.render(),
			r#"<form method="POST"><input type="password" name="secret" id="secret"></form>"#
		);
	}

	#[rstest]
	fn test_password_field_uses_default_name() {
		let form = FormAssembler::with_prefill([("password", "azeaze")]).password_field();

		assert_eq!(
			form.render(),
			r#"<form method="POST"><input type="password" name="password" value="azeaze" id="password"></form>"#
		);
	}

	#[rstest]
	fn test_setters_only_affect_later_fields() {
		let form = FormAssembler::new()
			.input("first")
			.set_input_class("late")
			.set_surround("<p>")
			.input("second");

		assert_eq!(
			form.render(),
			concat!(
				r#"<form method="POST">"#,
				r#"<input type="text" name="first" id="first">"#,
				r#"<p><input type="text" name="second" id="second" class="late"></p>"#,
				"</form>"
			)
		);
	}

	#[rstest]
	fn test_display_matches_render() {
		let form = FormAssembler::new().input("a").button("submit", "Go");

		assert_eq!(form.to_string(), form.render());
	}

	#[rstest]
	fn test_button_with_empty_class_omits_class() {
		let form = FormAssembler::styled().button_with_class("reset", "Clear", "");

		assert_eq!(
			form.render(),
			r#"<form method="POST"><button type="reset">Clear</button></form>"#
		);
	}
}
