// Browser-driven checks of component upgrade on attachment

use guide_components::comp::View;
use guide_components::header::PageHeader;
use guide_components::{config, registry, util};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

// Ensure the header component is registered and the attach observer runs.
// Module start may have already done both.
fn setup() {
	registry::register::<PageHeader>().ok();
	registry::observe().unwrap();
}

// Let queued observer callbacks run
async fn flush() {
	wasm_bindgen_futures::JsFuture::from(js_sys::Promise::resolve(
		&wasm_bindgen::JsValue::NULL,
	))
	.await
	.unwrap();
}

#[wasm_bindgen_test]
fn missing_config_block_yields_defaults() {
	assert!(!config::load().debug);
}

#[wasm_bindgen_test]
fn second_registration_errors() {
	setup();
	assert!(registry::register::<PageHeader>().is_err());
}

#[wasm_bindgen_test]
fn upgrades_elements_already_in_document() {
	setup();
	let doc = util::document();
	let el = doc.create_element(PageHeader::TAG).unwrap();
	doc.body().unwrap().append_child(&el).unwrap();

	registry::upgrade_document().unwrap();

	assert!(el.query_selector("header#header").unwrap().is_some());
	el.remove();
}

#[wasm_bindgen_test]
async fn renders_on_attach() {
	setup();
	let doc = util::document();
	let el = doc.create_element(PageHeader::TAG).unwrap();
	doc.body().unwrap().append_child(&el).unwrap();
	flush().await;

	let header = el.query_selector("header#header").unwrap().unwrap();
	assert_eq!(
		header
			.query_selector_all("nav > ul > li")
			.unwrap()
			.length(),
		1,
	);

	let link = header.query_selector("nav ul li a").unwrap().unwrap();
	assert_eq!(link.get_attribute("href").unwrap(), "#menu");
	assert_eq!(link.text_content().unwrap(), "Menu");

	let img = header.query_selector("a.logo img").unwrap().unwrap();
	assert_eq!(
		img.get_attribute("src").unwrap(),
		"../../images/pinnacle_point_logo.png",
	);
	assert_eq!(img.get_attribute("alt").unwrap(), "");

	let logo = header.query_selector("a.logo").unwrap().unwrap();
	assert_eq!(logo.get_attribute("href").unwrap(), "../../index.html");

	el.remove();
}

#[wasm_bindgen_test]
async fn renders_inside_attached_subtree() {
	setup();
	let doc = util::document();
	let wrap = doc.create_element("div").unwrap();
	wrap.set_inner_html("<page-header></page-header>");
	doc.body().unwrap().append_child(&wrap).unwrap();
	flush().await;

	assert!(wrap
		.query_selector("page-header header#header")
		.unwrap()
		.is_some());
	wrap.remove();
}

#[wasm_bindgen_test]
async fn reattach_renders_identical_content() {
	setup();
	let doc = util::document();
	let body = doc.body().unwrap();
	let el = doc.create_element(PageHeader::TAG).unwrap();
	body.append_child(&el).unwrap();
	flush().await;

	let first = el.inner_html();
	assert!(!first.is_empty());

	body.remove_child(&el).unwrap();
	body.append_child(&el).unwrap();
	flush().await;

	assert_eq!(el.inner_html(), first);
	el.remove();
}
