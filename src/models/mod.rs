pub mod response;
pub mod user;

pub use response::*;
pub use user::*;
