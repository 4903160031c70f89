pub mod career;
pub mod college;
pub mod quiz;
pub mod recommendation;
pub mod user;
