//! MCP stdio server
//!
//! Manual implementation of the Model Context Protocol over stdin/stdout.
//! No async runtime — the whole server is a blocking read loop.

pub mod server;
pub mod tools;
pub mod types;
