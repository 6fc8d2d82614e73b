//! Wrapper markup placed around every rendered field
//!
//! A surround template holds one or two HTML tags, such as
//! `<div class="form-group"></div>` or just `<div class="form-group">`.
//! With a single tag the closing tag is derived from the element name.
//! With two tags the second one is inserted literally after the content,
//! whatever it contains.
//!
//! ```
//! use reinhardt_form_builder::Surround;
//!
//! let surround = Surround::parse(r#"<p class="t">"#);
//! assert_eq!(surround.wrap("Y"), r#"<p class="t">Y</p>"#);
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Tags {
	#[default]
	Empty,
	OpenOnly {
		open: String,
		close_name: String,
	},
	Pair {
		open: String,
		close: String,
	},
}

/// A parsed surround template.
///
/// Serializes as the original template string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Surround {
	template: String,
	tags: Tags,
}

impl Surround {
	/// Parse a surround template. Never fails; malformed input is kept
	/// and substituted literally.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_form_builder::Surround;
	///
	/// assert!(Surround::parse("").is_empty());
	/// assert_eq!(
	///     Surround::parse(r#"<div class="c"></div>"#).wrap("Y"),
	///     r#"<div class="c">Y</div>"#
	/// );
	/// ```
	pub fn parse(template: impl Into<String>) -> Self {
		let template = template.into();
		let tags = if template.is_empty() {
			Tags::Empty
		} else {
			let mut tokens = template
				.splitn(2, "><")
				.map(|token| token.trim_matches(&['<', '>'][..]));
			let open = tokens.next().unwrap_or_default().to_string();
			match tokens.next() {
				Some(close) => Tags::Pair {
					open,
					close: close.to_string(),
				},
				None => {
					let close_name = open.split_whitespace().next().unwrap_or_default().to_string();
					Tags::OpenOnly { open, close_name }
				}
			}
		};

		Self { template, tags }
	}

	/// The template this surround was parsed from
	pub fn template(&self) -> &str {
		&self.template
	}

	pub fn is_empty(&self) -> bool {
		matches!(self.tags, Tags::Empty)
	}

	/// Nest `content` inside the surround tags.
	pub fn wrap(&self, content: &str) -> String {
		match &self.tags {
			Tags::Empty => content.to_string(),
			Tags::OpenOnly { open, close_name } => format!("<{open}>{content}</{close_name}>"),
			Tags::Pair { open, close } => format!("<{open}>{content}<{close}>"),
		}
	}
}

impl From<String> for Surround {
	fn from(template: String) -> Self {
		Self::parse(template)
	}
}

impl From<&str> for Surround {
	fn from(template: &str) -> Self {
		Self::parse(template)
	}
}

impl From<Surround> for String {
	fn from(surround: Surround) -> Self {
		surround.template
	}
}
