mod config;
mod message;
mod session;

pub use self::config::*;
pub use self::message::*;
pub use self::session::*;
