//! Command server
//!
//! Connections are served one at a time on the calling thread, so the
//! queue has a single writer. A broken connection ends that connection
//! only; the accept loop carries on.

use crate::errors::{transport_error, Result};
use crate::frame;
use crate::protocol::{Request, RequestBody, Response, ResponseBody, WireCommand};
use reqqueue_core::{log_op_end, log_op_error, log_op_start};
use reqqueue_core::{CommandRunner, Evaluator, ExErrorKind, PriorityQueue, Record};
use reqqueue_core_types::RequestId;
use serde::Deserialize;
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::time::Instant;

/// Answers protocol requests against a local command runner
pub struct Handler<T> {
    runner: CommandRunner<T>,
}

impl<T: Record> Handler<T> {
    pub fn new(runner: CommandRunner<T>) -> Self {
        Self { runner }
    }

    pub fn queue(&self) -> &PriorityQueue<T> {
        self.runner.queue()
    }

    /// Answer one request
    pub fn handle(&mut self, request: Request) -> Response {
        log_op_start!(
            "serve_request",
            request_id = request.request_id.as_str(),
            request_kind = request.kind()
        );
        let start = Instant::now();

        let body = match &request.body {
            RequestBody::ListCommands => ResponseBody::Commands {
                commands: self
                    .runner
                    .descriptors()
                    .iter()
                    .map(WireCommand::from)
                    .collect(),
            },
            RequestBody::ArgumentSchema => ResponseBody::Schema {
                schema: T::argument_schema(),
            },
            RequestBody::Execute { name, argument } => ResponseBody::Status {
                status: self.runner.execute(name, argument),
            },
        };

        log_op_end!(
            "serve_request",
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = request.request_id.as_str()
        );
        Response::to(&request, body)
    }

    /// Serve requests from one stream until the peer closes it
    ///
    /// # Errors
    ///
    /// Transport failures and malformed frames end the connection.
    /// Undecodable JSON is answered with a `failure` response instead.
    pub fn serve_connection(&mut self, stream: &TcpStream) -> Result<()> {
        let mut stream = stream;
        while let Some(payload) = frame::read_frame(&mut stream)? {
            let response = match serde_json::from_slice::<Request>(&payload) {
                Ok(request) => self.handle(request),
                Err(e) => Response {
                    request_id: salvage_request_id(&payload),
                    body: ResponseBody::Failure {
                        message: format!("malformed request: {}", e),
                    },
                },
            };
            frame::send(&mut stream, &response)?;
        }
        Ok(())
    }
}

/// Id of an undecodable request, if it still carries a readable one
fn salvage_request_id(payload: &[u8]) -> RequestId {
    #[derive(Deserialize)]
    struct Envelope {
        request_id: RequestId,
    }

    serde_json::from_slice::<Envelope>(payload)
        .map(|envelope| envelope.request_id)
        .unwrap_or_default()
}

/// TCP listener bound to a command runner
pub struct Server<T> {
    listener: TcpListener,
    handler: Handler<T>,
}

impl<T: Record> Server<T> {
    /// Bind `addr`; port 0 picks a free port
    ///
    /// # Errors
    ///
    /// `ERR_TRANSPORT` if the address cannot be bound.
    pub fn bind(addr: impl ToSocketAddrs, runner: CommandRunner<T>) -> Result<Self> {
        let listener = TcpListener::bind(addr).map_err(|e| transport_error("bind", e))?;
        Ok(Self {
            listener,
            handler: Handler::new(runner),
        })
    }

    /// # Errors
    ///
    /// `ERR_TRANSPORT` if the socket address cannot be read.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener
            .local_addr()
            .map_err(|e| transport_error("local_addr", e))
    }

    pub fn handle(&mut self, request: Request) -> Response {
        self.handler.handle(request)
    }

    /// Accept and serve connections forever
    ///
    /// # Errors
    ///
    /// Only a failing listener stops the loop.
    pub fn serve(&mut self) -> Result<()> {
        tracing::info!(addr = ?self.listener.local_addr().ok(), "serving");
        loop {
            self.serve_one()?;
        }
    }

    /// Accept one connection and serve it to completion
    ///
    /// # Errors
    ///
    /// `ERR_TRANSPORT` if accepting fails. Errors on the accepted
    /// connection are logged and swallowed.
    pub fn serve_one(&mut self) -> Result<()> {
        let (stream, peer) = self
            .listener
            .accept()
            .map_err(|e| transport_error("accept", e))?;
        tracing::debug!(%peer, "connection accepted");

        let start = Instant::now();
        match self.handler.serve_connection(&stream) {
            Ok(()) => tracing::debug!(%peer, "connection closed"),
            Err(e) if e.kind() == ExErrorKind::Transport => {
                tracing::debug!(%peer, error = %e, "connection dropped");
            }
            Err(e) => {
                log_op_error!(
                    "serve_connection",
                    e,
                    duration_ms = start.elapsed().as_millis() as u64
                );
            }
        }
        Ok(())
    }
}
