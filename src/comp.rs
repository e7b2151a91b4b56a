use crate::node::Element;

// A shared page component, rendered into every matching custom element on
// attachment
pub trait View {
	// Custom element tag name the component upgrades
	const TAG: &'static str;

	// Build the component's content tree
	fn content(&self) -> Element;

	// Render the content tree as HTML
	fn render_html(&self) -> String {
		self.content().html()
	}
}
