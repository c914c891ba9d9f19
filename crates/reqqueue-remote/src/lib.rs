//! reqqueue remote - running the command set over TCP
//!
//! Provides:
//! - The request/response protocol and its length-prefixed JSON framing
//! - `Server`, which answers requests against a local `CommandRunner`
//! - The `Connection` trait with a TCP and an in-process implementation
//! - `RemoteRunner`, a client whose commands and argument shape come from
//!   the server at startup
//!
//! ## Logging Ownership
//!
//! Each served request and each client round trip is one op boundary
//! (`serve_request`, `fetch_response`). Framing only logs at debug level.

pub mod catalog;
pub mod connection;
pub mod errors;
pub mod frame;
pub mod protocol;
pub mod server;

pub use catalog::{fetch_commands, fetch_schema, RemoteCommand, RemoteRunner};
pub use connection::{Connection, LocalConnection, TcpConnection};
pub use protocol::{Request, RequestBody, Response, ResponseBody, WireCommand};
pub use server::{Handler, Server};
