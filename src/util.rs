use wasm_bindgen::prelude::JsValue;

// Simple string error type for passing between subsystems and FFI
#[derive(Debug)]
pub struct Error(String);

impl Error {
	pub fn new(msg: impl Into<String>) -> Self {
		Self(msg.into())
	}
}

impl Into<JsValue> for Error {
	fn into(self) -> JsValue {
		JsValue::from(&self.0)
	}
}

impl From<JsValue> for Error {
	fn from(v: JsValue) -> Error {
		Error(format!("{:?}", v))
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

macro_rules! from_display {
	($($type:ty),+) => {
		$(
			impl From<$type> for Error {
				fn from(err: $type) -> Error {
					Error(err.to_string())
				}
			}
		)+
	};
}
from_display! {
	String,
	&str,
	serde_json::error::Error,
	anyhow::Error
}

// Shorthand for most commonly used Result type
pub type Result<T = ()> = std::result::Result<T, Error>;

// Get JS window global
pub fn window() -> web_sys::Window {
	web_sys::window().expect("window undefined")
}

// Get page document
pub fn document() -> web_sys::Document {
	window().document().expect("document undefined")
}

// Log error to console
pub fn log_error<T: std::fmt::Display>(err: T) {
	web_sys::console::error_1(&JsValue::from(err.to_string()));
}
