//! Accumulated form sections and their serialization

use indexmap::IndexMap;

/// Key of a fragment within a section.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Slot {
	/// The `<form ...>` opening tag
	Opening,
	/// Heading emitted before the opening tag
	Title,
	/// An input or button, keyed by its name (or button type)
	Field(String),
}

impl Slot {
	pub fn field(name: impl Into<String>) -> Self {
		Slot::Field(name.into())
	}
}

/// Ordered fragments belonging to one form.
///
/// Storing under an existing slot replaces the fragment but keeps the slot's
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSection {
	slots: IndexMap<Slot, String>,
}

impl FormSection {
	pub fn new() -> Self {
		Self::default()
	}

	/// Store a fragment, returning the one it replaced
	pub fn set(&mut self, slot: Slot, fragment: String) -> Option<String> {
		self.slots.insert(slot, fragment)
	}

	pub fn get(&self, slot: &Slot) -> Option<&str> {
		self.slots.get(slot).map(String::as_str)
	}

	pub fn title(&self) -> Option<&str> {
		self.get(&Slot::Title)
	}

	pub fn has_opening(&self) -> bool {
		self.slots.contains_key(&Slot::Opening)
	}

	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	/// Fragments in insertion order, title excluded
	pub fn body(&self) -> impl Iterator<Item = (&Slot, &str)> {
		self.slots
			.iter()
			.filter(|(slot, _)| **slot != Slot::Title)
			.map(|(slot, fragment)| (slot, fragment.as_str()))
	}

	/// Append this section's markup: title, body fragments, closing tag.
	pub fn render_into(&self, out: &mut String, always_close_form: bool) {
		if let Some(title) = self.title() {
			out.push_str(title);
		}
		for (_, fragment) in self.body() {
			out.push_str(fragment);
		}
		if always_close_form || self.has_opening() {
			out.push_str("</form>");
		}
	}
}

/// All sections of an assembler, in creation order.
///
/// Form indices are 1-based; index 0 means no section has been opened yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
	sections: Vec<FormSection>,
}

impl FormState {
	pub fn new() -> Self {
		Self::default()
	}

	/// Index of the current section, 0 before the first one is opened
	pub fn form_index(&self) -> usize {
		self.sections.len()
	}

	/// Open a new section whose first slot is `opening`, returning its index
	pub fn open(&mut self, opening: String) -> usize {
		let mut section = FormSection::new();
		section.set(Slot::Opening, opening);
		self.sections.push(section);
		self.form_index()
	}

	pub fn current(&self) -> Option<&FormSection> {
		self.sections.last()
	}

	pub fn current_mut(&mut self) -> Option<&mut FormSection> {
		self.sections.last_mut()
	}

	/// Section by its 1-based form index
	pub fn section(&self, index: usize) -> Option<&FormSection> {
		index.checked_sub(1).and_then(|i| self.sections.get(i))
	}

	pub fn sections(&self) -> &[FormSection] {
		&self.sections
	}

	pub fn is_empty(&self) -> bool {
		self.sections.is_empty()
	}

	pub fn render(&self, always_close_form: bool) -> String {
		let mut out = String::new();
		for section in &self.sections {
			section.render_into(&mut out, always_close_form);
		}
		out
	}
}
