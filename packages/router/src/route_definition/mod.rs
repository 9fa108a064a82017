//! Route templates, the parameters they declare and the arguments that instantiate them.

mod binding;
mod parameter;
mod segment;
mod template;

pub use binding::*;
pub use parameter::*;
pub use segment::*;
pub use template::*;
