use crate::comp::View;
use crate::node::Element;
use crate::util;
use std::cell::RefCell;
use std::collections::HashMap;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// Renders a component's content tree. Thunked to erase the component type.
type RenderFn = Box<dyn Fn() -> Element>;

// Maps registered custom element tags to component render functions
#[derive(Default)]
pub struct Registry {
	components: HashMap<&'static str, RenderFn>,

	// Attach observer already installed
	observing: bool,
}

impl Registry {
	// Record a component under its tag.
	// Taking an occupied tag is an error, mirroring the host element
	// registry's duplicate-registration semantics. Not handled internally.
	fn insert(&mut self, tag: &'static str, render: RenderFn) -> util::Result {
		validate_tag(tag)?;
		if self.components.contains_key(tag) {
			return Err(format!("tag already registered: {}", tag).into());
		}
		self.components.insert(tag, render);
		Ok(())
	}

	// Render the content of a registered tag, if any
	fn render_tag(&self, tag: &str) -> Option<String> {
		self.components.get(tag).map(|render| render().html())
	}

	// Snapshot of all registered tags
	fn tags(&self) -> Vec<&'static str> {
		self.components.keys().copied().collect()
	}
}

thread_local! {
	static REGISTRY: RefCell<Registry> = RefCell::new(Default::default());
}

// Open the global registry for reading
fn read<F, R>(cb: F) -> R
where
	F: FnOnce(&Registry) -> R,
{
	REGISTRY.with(|r| cb(&*r.borrow()))
}

// Open the global registry for writing
fn write<F, R>(cb: F) -> R
where
	F: FnOnce(&mut Registry) -> R,
{
	REGISTRY.with(|r| cb(&mut *r.borrow_mut()))
}

// Custom element tags must be ASCII lowercase, start with a letter and
// contain a hyphen
fn validate_tag(tag: &str) -> util::Result {
	let valid = tag.starts_with(|ch: char| ch.is_ascii_lowercase())
		&& tag.contains('-')
		&& tag
			.chars()
			.all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-');
	if valid {
		Ok(())
	} else {
		Err(format!("invalid custom element tag: {}", tag).into())
	}
}

// Register a component under its tag for subsequent document upgrades
pub fn register<V>() -> util::Result
where
	V: View + Default + 'static,
{
	write(|r| r.insert(V::TAG, Box::new(|| V::default().content())))?;
	log::info!("registered component <{}>", V::TAG);
	Ok(())
}

// Render all matching elements already attached to the document
pub fn upgrade_document() -> util::Result {
	let doc = util::document();
	for tag in read(|r| r.tags()) {
		for el in collect(&doc.get_elements_by_tag_name(tag)) {
			upgrade(&el);
		}
	}
	Ok(())
}

// Install the document-wide attach observer. Elements inserted from now on,
// including reattached ones, render on attachment. Repeated calls are
// no-ops.
pub fn observe() -> util::Result {
	if read(|r| r.observing) {
		return Ok(());
	}

	let cb = Closure::wrap(Box::new(
		|records: js_sys::Array, _: web_sys::MutationObserver| {
			for rec in records.iter() {
				let added = rec.unchecked_into::<web_sys::MutationRecord>().added_nodes();
				for i in 0..added.length() {
					if let Some(node) = added.item(i) {
						upgrade_subtree(&node);
					}
				}
			}
		},
	)
		as Box<dyn FnMut(js_sys::Array, web_sys::MutationObserver)>);

	web_sys::MutationObserver::new(cb.as_ref().unchecked_ref())?
		.observe_with_options(&util::document(), &{
			let mut opts = web_sys::MutationObserverInit::new();
			opts.child_list(true);
			opts.subtree(true);
			opts
		})?;

	// Never drop the closure as this observer is static
	cb.forget();

	write(|r| r.observing = true);
	Ok(())
}

// Render a single element, if its tag has a registered component
fn upgrade(el: &web_sys::Element) {
	let tag = el.tag_name().to_ascii_lowercase();
	if let Some(html) = read(|r| r.render_tag(&tag)) {
		el.set_inner_html(&html);
		log::debug!("upgraded <{}>", tag);
	}
}

// Render an attached node and any matching descendants
fn upgrade_subtree(node: &web_sys::Node) {
	let el = match node.dyn_ref::<web_sys::Element>() {
		Some(el) => el,
		None => return,
	};
	upgrade(el);
	for tag in read(|r| r.tags()) {
		for ch in collect(&el.get_elements_by_tag_name(tag)) {
			upgrade(&ch);
		}
	}
}

// Snapshot a live element collection before mutating document content
fn collect(els: &web_sys::HtmlCollection) -> Vec<web_sys::Element> {
	(0..els.length()).filter_map(|i| els.item(i)).collect()
}
