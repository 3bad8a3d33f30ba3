pub mod config;
pub mod dispatcher;
pub mod error;

pub mod kafka;

pub use config::Config;
pub use dispatcher::{Dispatcher, KeyedMessage, MessageSink};
pub use error::{Error, Result};
