//! Fluent HTML form markup builder for Reinhardt
//!
//! This crate assembles the markup of web forms from a chain of calls:
//! - Open one or more forms with [`FormBuilder::create_with`]
//! - Add text and password inputs, optionally labelled and pre-filled
//! - Add buttons and per-form titles
//! - Render everything to a single HTML fragment
//!
//! Styling comes from a [`StyleConfig`], either one of the two presets
//! (`plain` and the bootstrap-flavoured `styled`) or settings loaded from TOML.
//!
//! ```
//! use reinhardt_form_builder::{FormAssembler, FormBuilder};
//!
//! let html = FormAssembler::styled()
//!     .input_with("email", "Email", Default::default())
//!     .button("submit", "Send")
//!     .render();
//!
//! assert!(html.starts_with(r#"<form method="POST"><div class="form-group">"#));
//! assert!(html.ends_with(r#"<button type="submit" class="btn btn-primary">Send</button></form>"#));
//! ```

pub mod attributes;
pub mod builder;
pub mod error;
pub mod section;
pub mod style;
pub mod surround;

pub use attributes::{AttributeOverrides, Attributes, escape_attribute, render_attributes};
pub use builder::{DEFAULT_PASSWORD_NAME, FormAssembler, FormBuilder};
pub use error::{FormBuilderError, FormBuilderResult};
pub use section::{FormSection, FormState, Slot};
pub use style::{StyleConfig, StylePreset, StyleSettings};
pub use surround::Surround;
