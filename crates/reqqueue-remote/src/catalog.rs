//! Remote command catalog
//!
//! The client knows no commands of its own. At startup it asks the server
//! for the command list and the structured-argument schema; afterwards
//! every command is forwarded as an `execute` request. The two startup
//! fetches are fatal on failure. Failures while executing a command become
//! `Error` statuses.

use crate::connection::Connection;
use crate::errors::{protocol_error, Result};
use crate::protocol::{Request, RequestBody, ResponseBody};
use reqqueue_core::runner::split_line;
use reqqueue_core::{log_op_end, log_op_error, log_op_start};
use reqqueue_core::{
    ArgumentKind, ArgumentSchema, CommandDescriptor, CommandStatus, Evaluator, ExError,
    ReqQueueError,
};
use std::time::Instant;

/// Send `body` and return the answer, checking the echoed request id
///
/// A `failure` answer is returned as a transport error whatever its id,
/// since the server cannot always read the id of a request it rejects.
fn round_trip(connection: &mut dyn Connection, body: RequestBody) -> Result<ResponseBody> {
    let request = Request::new(body);
    log_op_start!(
        "fetch_response",
        request_id = request.request_id.as_str(),
        request_kind = request.kind()
    );
    let start = Instant::now();

    let result = connection
        .fetch(&request)
        .and_then(|response| match response.body {
            ResponseBody::Failure { message } => {
                Err(ExError::from(ReqQueueError::Transport { reason: message }))
            }
            _ if response.request_id != request.request_id => Err(protocol_error(
                "fetch_response",
                format!(
                    "response {} does not answer request {}",
                    response.request_id, request.request_id
                ),
            )),
            body => Ok(body),
        });

    match result {
        Ok(body) => {
            log_op_end!(
                "fetch_response",
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = request.request_id.as_str()
            );
            Ok(body)
        }
        Err(e) => {
            let e = e.with_request_id(request.request_id.clone());
            log_op_error!(
                "fetch_response",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = request.request_id.as_str()
            );
            Err(e)
        }
    }
}

fn unexpected(expected: &str) -> ExError {
    protocol_error(
        "fetch_response",
        format!("expected a {} response", expected),
    )
}

/// A command that runs on the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCommand {
    descriptor: CommandDescriptor,
}

impl RemoteCommand {
    pub fn new(descriptor: CommandDescriptor) -> Self {
        Self { descriptor }
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    pub fn argument(&self) -> ArgumentKind {
        self.descriptor.argument
    }

    pub fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    /// Forward to the server and return its status
    ///
    /// Never fails: transport and protocol errors come back as `Error`.
    pub fn exec(&self, argument: &str, connection: &mut dyn Connection) -> CommandStatus {
        let body = RequestBody::Execute {
            name: self.descriptor.name.clone(),
            argument: argument.to_string(),
        };
        match round_trip(connection, body) {
            Ok(ResponseBody::Status { status }) => status,
            Ok(_) => CommandStatus::Error(unexpected("status").message().to_string()),
            Err(e) => CommandStatus::Error(e.message().to_string()),
        }
    }
}

/// Ask the server for its commands, in help order
///
/// # Errors
///
/// `ERR_TRANSPORT` or `ERR_PROTOCOL` if the list cannot be obtained.
pub fn fetch_commands(connection: &mut dyn Connection) -> Result<Vec<RemoteCommand>> {
    match round_trip(connection, RequestBody::ListCommands)? {
        ResponseBody::Commands { commands } => Ok(commands
            .into_iter()
            .map(|wire| RemoteCommand::new(wire.into()))
            .collect()),
        _ => Err(unexpected("commands")),
    }
}

/// Ask the server for the structured-argument shape
///
/// # Errors
///
/// `ERR_TRANSPORT` or `ERR_PROTOCOL` if the schema cannot be obtained.
pub fn fetch_schema(connection: &mut dyn Connection) -> Result<ArgumentSchema> {
    match round_trip(connection, RequestBody::ArgumentSchema)? {
        ResponseBody::Schema { schema } => Ok(schema),
        _ => Err(unexpected("schema")),
    }
}

/// Evaluator whose command set lives on a server
pub struct RemoteRunner<C> {
    commands: Vec<RemoteCommand>,
    schema: ArgumentSchema,
    connection: C,
}

impl<C: Connection> RemoteRunner<C> {
    /// Fetch the catalog over `connection` and keep it for the session
    ///
    /// # Errors
    ///
    /// Any failure of the two startup fetches.
    pub fn connect(mut connection: C) -> Result<Self> {
        let commands = fetch_commands(&mut connection)?;
        let schema = fetch_schema(&mut connection)?;
        tracing::debug!(commands = commands.len(), schema = %schema.title, "catalog fetched");
        Ok(Self {
            commands,
            schema,
            connection,
        })
    }

    pub fn commands(&self) -> &[RemoteCommand] {
        &self.commands
    }

    pub fn schema(&self) -> &ArgumentSchema {
        &self.schema
    }
}

impl<C: Connection> Evaluator for RemoteRunner<C> {
    fn descriptors(&self) -> Vec<CommandDescriptor> {
        self.commands.iter().map(|c| c.descriptor().clone()).collect()
    }

    fn eval(&mut self, line: &str) -> CommandStatus {
        let (name, argument) = split_line(line);
        match self.commands.iter().find(|c| c.name() == name) {
            Some(command) => command.exec(argument, &mut self.connection),
            None => CommandStatus::Error(
                ReqQueueError::UnknownCommand {
                    name: name.to_string(),
                }
                .to_string(),
            ),
        }
    }
}
