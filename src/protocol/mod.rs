//! Line-oriented text protocol for driving matches from another process.

pub mod command_parser;
pub mod response_formatter;
pub mod session;

pub use command_parser::SimCommand;
pub use response_formatter::SimResponseFormatter;
pub use session::SimSession;
