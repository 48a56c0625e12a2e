#![deny(warnings)]
pub mod knowledge;
pub mod model;

pub struct EngineInfo;

impl EngineInfo {
    pub const fn name() -> &'static str {
        "hanabi-core"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
