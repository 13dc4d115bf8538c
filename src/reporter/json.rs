//! JSON reporter for machine-readable output

use crate::tools::ToolName;
use crate::ToolResult;
use serde::Serialize;
use serde_json::{Map, Value};

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// `{success, data}` or `{success: false, error}`
    pub fn report(&self, result: &ToolResult) -> String {
        self.encode(&Envelope::new(None, None, result))
    }

    /// One entry per input source, in the given order
    pub fn report_many(&self, tool: ToolName, results: &[(String, ToolResult)]) -> String {
        let entries: Vec<Envelope> = results
            .iter()
            .map(|(source, result)| Envelope::new(Some(source), Some(tool), result))
            .collect();
        self.encode(&entries)
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> String {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        encoded.unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct Envelope<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool: Option<ToolName>,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl<'a> Envelope<'a> {
    fn new(source: Option<&'a String>, tool: Option<ToolName>, result: &'a ToolResult) -> Self {
        let success = result.is_success();
        Self {
            source: source.map(String::as_str),
            tool,
            success,
            data: success.then(|| result.data()),
            error: result.error(),
        }
    }
}
