//! Data Transfer Objects for the Web API.

pub mod request;
pub mod response;
pub mod validation;

pub use request::*;
pub use response::*;
pub use validation::{PageParam, PathParam, ValidatedJson};
