//! The `info` command

use chrono::{DateTime, Local};
use reqqueue_core::{ArgumentKind, CommandStatus, PriorityQueue, QueueCommand, Record, Result};
use std::fmt::Write;

/// Describe the queue: type, instantiation time, sorted contents
pub struct Info {
    init_date: DateTime<Local>,
}

impl Info {
    pub fn new(init_date: DateTime<Local>) -> Self {
        Self { init_date }
    }
}

impl<T: Record> QueueCommand<T> for Info {
    fn name(&self) -> &str {
        "info"
    }

    fn argument(&self) -> ArgumentKind {
        ArgumentKind::None
    }

    fn run(&self, _args: &str, queue: &mut PriorityQueue<T>) -> Result<CommandStatus> {
        Ok(CommandStatus::Neutral(render(queue, &self.init_date)))
    }
}

fn render<T: Record>(queue: &PriorityQueue<T>, init_date: &DateTime<Local>) -> String {
    let mut out = String::new();
    out.push_str("=== Queue information\n");
    out.push_str("Type:\n");
    let _ = writeln!(out, "  {}", std::any::type_name::<PriorityQueue<T>>());
    out.push_str("Instantiated on:\n");
    let _ = writeln!(out, "  {}", init_date.format("%Y-%m-%d %H:%M:%S"));
    out.push_str("Elements:\n");

    let elements = queue.to_sorted_vec();
    if elements.is_empty() {
        out.push_str("  (none)\n");
    }
    for (i, record) in elements.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, record);
    }

    out.push_str("===");
    out
}
