//! Request and response messages
//!
//! Every message carries a `request_id`; a response echoes the id of the
//! request it answers.
//!
//! ```json
//! {"request_id":"...","request":"execute","name":"add","argument":"{...}"}
//! {"request_id":"...","response":"status","status":{"status":"success","message":"..."}}
//! ```

use reqqueue_core::{ArgumentKind, ArgumentSchema, CommandDescriptor, CommandStatus};
use reqqueue_core_types::RequestId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub request_id: RequestId,
    #[serde(flatten)]
    pub body: RequestBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "request", rename_all = "snake_case")]
pub enum RequestBody {
    /// Ordered command names and argument kinds
    ListCommands,
    /// Shape of structured arguments, for completion hints
    ArgumentSchema,
    /// Run one command with its raw argument text
    Execute { name: String, argument: String },
}

impl Request {
    /// A request with a fresh id
    pub fn new(body: RequestBody) -> Self {
        Self {
            request_id: RequestId::new(),
            body,
        }
    }

    /// Short kind name for logs
    pub fn kind(&self) -> &'static str {
        match self.body {
            RequestBody::ListCommands => "list_commands",
            RequestBody::ArgumentSchema => "argument_schema",
            RequestBody::Execute { .. } => "execute",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub request_id: RequestId,
    #[serde(flatten)]
    pub body: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "response", rename_all = "snake_case")]
pub enum ResponseBody {
    Commands { commands: Vec<WireCommand> },
    Schema { schema: ArgumentSchema },
    Status { status: CommandStatus },
    /// The server could not process the request at all
    Failure { message: String },
}

impl Response {
    /// Answer `request` with `body`
    pub fn to(request: &Request, body: ResponseBody) -> Self {
        Self {
            request_id: request.request_id.clone(),
            body,
        }
    }
}

/// Command list entry as sent over the wire
///
/// The argument kind travels as its tag so that a tag this client does not
/// know still decodes; it is read as "no argument".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireCommand {
    pub name: String,
    pub argument: String,
}

impl From<&CommandDescriptor> for WireCommand {
    fn from(descriptor: &CommandDescriptor) -> Self {
        Self {
            name: descriptor.name.clone(),
            argument: descriptor.argument.tag().to_string(),
        }
    }
}

impl From<WireCommand> for CommandDescriptor {
    fn from(wire: WireCommand) -> Self {
        CommandDescriptor::new(wire.name, ArgumentKind::from_tag(&wire.argument))
    }
}
