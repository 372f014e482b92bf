//! Project domain entities.

pub mod member;
pub mod model;

pub use member::{Member, MemberType};
pub use model::Project;
