// Domain value objects
#[macro_use]
mod code_enum;

pub mod classifier;
pub mod event_type;
pub mod type_codes;

pub use classifier::*;
pub use event_type::*;
pub use type_codes::*;
