pub mod application;
pub mod error;
pub mod session;
pub mod staff;

pub use application::*;
pub use error::*;
pub use session::*;
pub use staff::*;
