use std::collections::VecDeque;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

use time::OffsetDateTime;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// One captured tracing event, kept around for the in-app log panel.
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: Level,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    pub fn format_line(&self) -> String {
        if self.fields.is_empty() {
            format!("{} {:<5} {}", self.timestamp, self.level, self.message)
        } else {
            let extras: Vec<String> = self
                .fields
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect();
            format!(
                "{} {:<5} {} | {}",
                self.timestamp,
                self.level,
                self.message,
                extras.join(" ")
            )
        }
    }
}

/// Bounded ring of recent log entries shared between the subscriber layer
/// and the TUI.
#[derive(Clone)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
    max_entries: usize,
}

impl LogBuffer {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::new())),
            max_entries,
        }
    }

    pub fn tail(&self, count: usize) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| {
                entries
                    .iter()
                    .skip(entries.len().saturating_sub(count))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn push(&self, entry: LogEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push_back(entry);
            while entries.len() > self.max_entries {
                entries.pop_front();
            }
        }
    }
}

#[derive(Clone)]
pub struct LogLayer {
    buffer: LogBuffer,
}

impl LogLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<S> Layer<S> for LogLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = LogVisitor::default();
        event.record(&mut visitor);
        let entry = LogEntry {
            timestamp: format_timestamp(OffsetDateTime::now_utc()),
            level: *event.metadata().level(),
            message: visitor.message,
            fields: visitor.fields,
        };
        self.buffer.push(entry);
    }
}

#[derive(Default)]
struct LogVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl LogVisitor {
    fn push(&mut self, field: &tracing::field::Field, value: String) {
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }
}

impl tracing::field::Visit for LogVisitor {
    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.push(field, value.to_string());
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.push(field, value.to_string());
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.push(field, value.to_string());
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.push(field, value.to_string());
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn Debug) {
        self.push(field, format!("{value:?}"));
    }
}

fn format_timestamp(timestamp: OffsetDateTime) -> String {
    let format = time::format_description::parse("[hour repr:24]:[minute]:[second]")
        .unwrap_or_else(|_| time::format_description::parse("[second]").unwrap());
    timestamp
        .format(&format)
        .unwrap_or_else(|_| timestamp.unix_timestamp().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_line_includes_extras() {
        let entry = LogEntry {
            timestamp: "12:34:56".to_string(),
            level: Level::INFO,
            message: "login succeeded".to_string(),
            fields: vec![("view".to_string(), "dashboard".to_string())],
        };
        let line = entry.format_line();
        assert!(line.contains("12:34:56"));
        assert!(line.contains("INFO"));
        assert!(line.contains("login succeeded"));
        assert!(line.contains("view=dashboard"));
    }

    #[test]
    fn buffer_drops_oldest_past_capacity() {
        let buffer = LogBuffer::new(2);
        for n in 0..3 {
            buffer.push(LogEntry {
                timestamp: String::new(),
                level: Level::INFO,
                message: n.to_string(),
                fields: Vec::new(),
            });
        }
        let tail = buffer.tail(10);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].message, "1");
        assert_eq!(tail[1].message, "2");
    }
}
