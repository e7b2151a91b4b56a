use crate::util;
use serde::Deserialize;

// Page-embedded settings for the component runtime. Only tunes ambient
// behavior; rendered markup never depends on it.
#[derive(Deserialize, Default, Clone)]
#[serde(default)]
pub struct Configs {
	// Enable debug logging
	pub debug: bool,
}

// Id of the optional inline JSON configuration block
const CONFIG_ID: &str = "component-config";

// Read configs from JSON embedded in the HTML. Pages without the block, or
// with a block that does not parse, get defaults.
pub fn load() -> Configs {
	let el = match util::document().get_element_by_id(CONFIG_ID) {
		Some(el) => el,
		None => return Default::default(),
	};
	match parse(&el.inner_html()) {
		Ok(conf) => conf,
		Err(err) => {
			util::log_error(format!("invalid component config: {}", err));
			Default::default()
		}
	}
}

// Parse a configuration block
fn parse(src: &str) -> util::Result<Configs> {
	Ok(serde_json::from_str(src)?)
}
