use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a logging entry. Unrecognized kinds deserialize as
/// [`LogType::Other`] and print without a level prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogType {
    Error,
    Warn,
    Info,
    Log,
    Debug,
    Trace,
    Status,
    Profile,
    ProfileEnd,
    Time,
    Cache,
    Group,
    GroupCollapsed,
    GroupEnd,
    Clear,
    #[serde(other)]
    Other,
}

impl LogType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LogType::Error => "error",
            LogType::Warn => "warn",
            LogType::Info => "info",
            LogType::Log => "log",
            LogType::Debug => "debug",
            LogType::Trace => "trace",
            LogType::Status => "status",
            LogType::Profile => "profile",
            LogType::ProfileEnd => "profileEnd",
            LogType::Time => "time",
            LogType::Cache => "cache",
            LogType::Group => "group",
            LogType::GroupCollapsed => "groupCollapsed",
            LogType::GroupEnd => "groupEnd",
            LogType::Clear => "clear",
            LogType::Other => "other",
        }
    }
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    #[serde(default)]
    pub entries: Vec<LoggingEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtered_entries: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingEntry {
    #[serde(rename = "type")]
    pub kind: LogType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<LoggingEntry>>,
}

impl LoggingEntry {
    #[must_use]
    pub fn new(kind: LogType, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            trace: None,
            children: None,
        }
    }
}
