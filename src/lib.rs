pub mod api;
pub mod complete;
pub mod highlight;
pub mod html;
pub mod render;

pub const USER_AGENT: &str = concat!("searchbox/", env!("CARGO_PKG_VERSION"));
