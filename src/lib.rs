pub mod comp;
pub mod config;
pub mod header;
pub mod node;
pub mod registry;
pub mod util;

use wasm_bindgen::prelude::*;

// Wire the components into the page: logging first, then registration, then
// upgrade of everything already attached, then the attach observer for
// everything after
#[wasm_bindgen(start)]
pub fn main_js() -> util::Result {
	console_error_panic_hook::set_once();

	wasm_logger::init(wasm_logger::Config::new(if config::load().debug {
		log::Level::Debug
	} else {
		log::Level::Warn
	}));

	registry::register::<header::PageHeader>()?;
	registry::upgrade_document()?;
	registry::observe()?;

	Ok(())
}
