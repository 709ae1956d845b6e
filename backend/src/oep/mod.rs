mod arithmetic;
mod cast;
mod compare;
mod encryption;
mod module;
mod random;

pub use arithmetic::*;
pub use cast::*;
pub use compare::*;
pub use encryption::*;
pub use module::*;
pub use random::*;
