#[macro_use]
extern crate tracing;

pub mod animation;
pub mod layout;
