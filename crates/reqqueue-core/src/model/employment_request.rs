//! Employment request record
//!
//! Requests are served by status first (scheduled interviews, then pending
//! requests, then rejected ones) and by submission date within a status,
//! earliest first. The applicant name takes no part in priority.

use crate::argument_schema::{ArgumentSchema, PropertyKind, SchemaProperty};
use crate::model::Record;
use crate::queue::Prioritized;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Processing state of a request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "Pending")]
    Pending,
    #[serde(rename = "Interview scheduled", alias = "InterviewScheduled")]
    InterviewScheduled,
    #[serde(rename = "Rejected")]
    Rejected,
}

impl Status {
    pub const ALL: [Status; 3] = [
        Status::Pending,
        Status::InterviewScheduled,
        Status::Rejected,
    ];

    /// JSON spelling
    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InterviewScheduled => "Interview scheduled",
            Status::Rejected => "Rejected",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Status::InterviewScheduled => 2,
            Status::Pending => 1,
            Status::Rejected => 0,
        }
    }
}

/// A request for employment waiting to be processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentRequest {
    pub applicant: String,
    /// Submission time; defaults to now when omitted from input
    #[serde(default = "now")]
    pub date: NaiveDateTime,
    #[serde(default)]
    pub status: Status,
}

fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

impl EmploymentRequest {
    pub fn new(applicant: impl Into<String>, date: NaiveDateTime) -> Self {
        Self {
            applicant: applicant.into(),
            date,
            status: Status::default(),
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}

impl Prioritized for EmploymentRequest {
    fn priority_cmp(&self, other: &Self) -> Ordering {
        self.status
            .rank()
            .cmp(&other.status.rank())
            .then_with(|| other.date.cmp(&self.date))
    }
}

impl fmt::Display for EmploymentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.applicant,
            self.status.label(),
            self.date.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

impl Record for EmploymentRequest {
    fn argument_schema() -> ArgumentSchema {
        ArgumentSchema {
            title: "EmploymentRequest".to_string(),
            properties: vec![
                SchemaProperty {
                    name: "applicant".to_string(),
                    kind: PropertyKind::String,
                    required: true,
                },
                SchemaProperty {
                    name: "date".to_string(),
                    kind: PropertyKind::DateTime,
                    required: false,
                },
                SchemaProperty {
                    name: "status".to_string(),
                    kind: PropertyKind::Enum {
                        values: Status::ALL.iter().map(|s| s.label().to_string()).collect(),
                    },
                    required: false,
                },
            ],
        }
    }
}
