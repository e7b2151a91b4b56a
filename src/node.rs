use std::collections::BTreeMap;
use std::fmt::Write;

// Element attributes. Omitting the value produces an attribute with no
// value.
pub type Attrs = BTreeMap<String, Option<String>>;

// Node of a markup tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	Element(Element),
	Text(String),
}

// Represents an HTML element and its subtree
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
	// HTML tag of the element
	pub tag: String,

	// Element attributes. The map keeps attribute render order deterministic.
	pub attrs: Attrs,

	// Child nodes in document order
	pub children: Vec<Node>,
}

// Tags that never have closing tags or children
const VOID_TAGS: [&str; 13] = [
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link",
	"meta", "source", "track", "wbr",
];

impl Element {
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			..Default::default()
		}
	}

	// Set an attribute on the element
	pub fn attr(mut self, key: impl Into<String>, val: impl Into<String>) -> Self {
		self.attrs.insert(key.into(), Some(val.into()));
		self
	}

	// Append a child element
	pub fn child(mut self, ch: Element) -> Self {
		self.children.push(Node::Element(ch));
		self
	}

	// Append a text child
	pub fn text(mut self, text: impl Into<String>) -> Self {
		self.children.push(Node::Text(text.into()));
		self
	}

	// Write the element and its subtree as HTML
	pub fn render(&self, w: &mut String) {
		write!(w, "<{}", self.tag).unwrap();
		for (key, val) in self.attrs.iter() {
			write!(w, " {}", key).unwrap();
			if let Some(val) = val {
				w.push_str("=\"");
				escape_into(w, val);
				w.push('"');
			}
		}
		w.push('>');

		if VOID_TAGS.contains(&self.tag.as_str()) {
			return;
		}

		for ch in self.children.iter() {
			match ch {
				Node::Element(el) => el.render(w),
				Node::Text(text) => escape_into(w, text),
			}
		}
		write!(w, "</{}>", self.tag).unwrap();
	}

	// Render the subtree into a freshly allocated string
	pub fn html(&self) -> String {
		let mut w = String::with_capacity(1 << 10);
		self.render(&mut w);
		w
	}
}

// Escape text for inclusion in HTML content and attribute values
fn escape_into(w: &mut String, s: &str) {
	for ch in s.chars() {
		match ch {
			'&' => w.push_str("&amp;"),
			'<' => w.push_str("&lt;"),
			'>' => w.push_str("&gt;"),
			'"' => w.push_str("&quot;"),
			_ => w.push(ch),
		}
	}
}
