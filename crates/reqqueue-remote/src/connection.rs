//! Client side of a request/response exchange

use crate::errors::{protocol_error, transport_error, Result};
use crate::frame;
use crate::protocol::{Request, Response};
use crate::server::Handler;
use reqqueue_core::Record;
use std::net::{TcpStream, ToSocketAddrs};

/// One request in, one response out
pub trait Connection {
    /// # Errors
    ///
    /// `ERR_TRANSPORT` if the exchange fails, `ERR_PROTOCOL` if the answer
    /// cannot be decoded.
    fn fetch(&mut self, request: &Request) -> Result<Response>;
}

/// Session-long TCP connection to a server
pub struct TcpConnection {
    stream: TcpStream,
}

impl TcpConnection {
    /// # Errors
    ///
    /// `ERR_TRANSPORT` if no connection can be established.
    pub fn connect(addr: impl ToSocketAddrs) -> Result<Self> {
        let stream = TcpStream::connect(addr).map_err(|e| transport_error("connect", e))?;
        stream
            .set_nodelay(true)
            .map_err(|e| transport_error("connect", e))?;
        Ok(Self { stream })
    }
}

impl Connection for TcpConnection {
    fn fetch(&mut self, request: &Request) -> Result<Response> {
        frame::send(&mut self.stream, request)?;
        frame::receive(&mut self.stream)?
            .ok_or_else(|| protocol_error("fetch_response", "connection closed by server"))
    }
}

/// In-process connection that still goes through JSON encoding
pub struct LocalConnection<T> {
    handler: Handler<T>,
}

impl<T: Record> LocalConnection<T> {
    pub fn new(handler: Handler<T>) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &Handler<T> {
        &self.handler
    }
}

impl<T: Record> Connection for LocalConnection<T> {
    fn fetch(&mut self, request: &Request) -> Result<Response> {
        let encoded = serde_json::to_vec(request)
            .map_err(|e| protocol_error("encode_message", e.to_string()))?;
        let decoded: Request = serde_json::from_slice(&encoded)
            .map_err(|e| protocol_error("decode_message", e.to_string()))?;

        let response = self.handler.handle(decoded);

        let encoded = serde_json::to_vec(&response)
            .map_err(|e| protocol_error("encode_message", e.to_string()))?;
        serde_json::from_slice(&encoded)
            .map_err(|e| protocol_error("decode_message", e.to_string()))
    }
}
