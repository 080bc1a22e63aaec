//! Data models for Huddle

mod user;
mod hangout;
mod participant;
mod join_request;

pub use user::*;
pub use hangout::*;
pub use participant::*;
pub use join_request::*;
