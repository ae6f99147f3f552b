pub mod reporter_api;

pub use reporter_api::WasmReporter;
