//! Ordered HTML attribute mappings
//!
//! Attributes keep the order in which keys were first inserted. Merging
//! overrides into a set of defaults replaces values in place, so a default
//! key keeps its position and caller-only keys are appended at the end.
//!
//! ```
//! use reinhardt_form_builder::Attributes;
//!
//! let defaults = Attributes::new().with("name", "email").with("id", "email");
//! let merged = defaults.merge(&Attributes::from([("id", "contact"), ("size", "40")]));
//!
//! assert_eq!(merged.render(), r#"name="email" id="contact" size="40""#);
//! ```

use indexmap::IndexMap;

/// An insertion-ordered mapping of attribute name to optional value.
///
/// A value of `None` marks an attribute that is known but absent (for example
/// a `value` with no prefill); it is skipped when rendered, exactly like an
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
	entries: IndexMap<String, Option<String>>,
}

impl Attributes {
	/// Create an empty attribute mapping
	pub fn new() -> Self {
		Self::default()
	}

	/// Add or replace an attribute, returning the mapping for chaining
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_form_builder::Attributes;
	///
	/// let attrs = Attributes::new().with("class", "wide").with("class", "narrow");
	/// assert_eq!(attrs.get("class"), Some("narrow"));
	/// assert_eq!(attrs.len(), 1);
	/// ```
	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(key, value);
		self
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.entries.insert(key.into(), Some(value.into()));
	}

	/// Insert an attribute whose value may be absent.
	pub fn insert_optional(&mut self, key: impl Into<String>, value: Option<String>) {
		self.entries.insert(key.into(), value);
	}

	/// Value of an attribute, `None` when missing or absent.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(key).and_then(|v| v.as_deref())
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
	}

	/// Merge `overrides` over `self`, the override winning on every key.
	///
	/// Keys already present keep their position; new keys are appended in
	/// the order they appear in `overrides`.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_form_builder::Attributes;
	///
	/// let defaults = Attributes::new().with("action", "").with("method", "POST");
	/// let merged = defaults.merge(&Attributes::new().with("method", "GET").with("action", "/s"));
	///
	/// assert_eq!(merged.render(), r#"action="/s" method="GET""#);
	/// ```
	pub fn merge(mut self, overrides: &Attributes) -> Self {
		for (key, value) in &overrides.entries {
			self.entries.insert(key.clone(), value.clone());
		}
		self
	}

	/// Render as `key="value"` pairs separated by single spaces.
	///
	/// Pairs whose value is empty or absent are omitted. Values are escaped
	/// for use inside a double-quoted attribute.
	pub fn render(&self) -> String {
		render_attributes(self)
	}
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attrs = Self::new();
		for (key, value) in iter {
			attrs.insert(key, value);
		}
		attrs
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
	K: Into<String>,
	V: Into<String>,
{
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

/// How caller-supplied attributes combine with a field's defaults.
///
/// `Merge` lays the given attributes over the defaults (caller wins per key).
/// `DefaultsOnly` ignores caller attributes entirely and renders the
/// defaults unmerged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeOverrides {
	Merge(Attributes),
	DefaultsOnly,
}

impl AttributeOverrides {
	/// Resolve the final attribute set for a field.
	pub fn apply(&self, defaults: Attributes) -> Attributes {
		match self {
			AttributeOverrides::Merge(overrides) => defaults.merge(overrides),
			AttributeOverrides::DefaultsOnly => defaults,
		}
	}
}

impl Default for AttributeOverrides {
	fn default() -> Self {
		AttributeOverrides::Merge(Attributes::new())
	}
}

impl From<Attributes> for AttributeOverrides {
	fn from(attrs: Attributes) -> Self {
		AttributeOverrides::Merge(attrs)
	}
}

/// Format an attribute mapping as an HTML attribute string.
///
/// # Examples
///
/// ```
/// use reinhardt_form_builder::{Attributes, render_attributes};
///
/// let mut attrs = Attributes::new().with("name", "q");
/// attrs.insert_optional("value", None);
/// attrs.insert("class", "");
///
/// assert_eq!(render_attributes(&attrs), r#"name="q""#);
/// ```
pub fn render_attributes(attrs: &Attributes) -> String {
	attrs
		.iter()
		.filter_map(|(key, value)| match value {
			Some(v) if !v.is_empty() => Some(format!("{}=\"{}\"", key, escape_attribute(v))),
			_ => None,
		})
		.collect::<Vec<_>>()
		.join(" ")
}

/// Escape a value for a double-quoted HTML attribute
///
/// Escaped characters:
/// - `&` → `&amp;`
/// - `<` → `&lt;`
/// - `>` → `&gt;`
/// - `"` → `&quot;`
/// - `'` → `&#x27;`
///
/// # Examples
///
/// ```
/// use reinhardt_form_builder::escape_attribute;
///
/// assert_eq!(escape_attribute(r#"say "hi" & go"#), "say &quot;hi&quot; &amp; go");
/// ```
pub fn escape_attribute(s: &str) -> String {
	let mut escaped = String::with_capacity(s.len());
	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	escaped
}
