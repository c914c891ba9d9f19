//! Queue record model

pub mod employment_request;

pub use employment_request::{EmploymentRequest, Status};

use crate::argument_schema::ArgumentSchema;
use crate::queue::Prioritized;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// A record the command set can queue, print, persist and parse
pub trait Record:
    Prioritized + Clone + PartialEq + fmt::Display + fmt::Debug + Serialize + DeserializeOwned
{
    /// Shape of the JSON text that parses into this record
    fn argument_schema() -> ArgumentSchema;
}
