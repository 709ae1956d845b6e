mod config;
mod fhe_uint;
mod module;
mod uint;

pub use config::*;
pub use fhe_uint::*;
pub use module::*;
pub use uint::*;
