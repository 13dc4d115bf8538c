//! MCP (Model Context Protocol) server over stdio.
//!
//! Line-delimited JSON-RPC 2.0. Every catalog tool is exposed under its own
//! identifier; `tools/call` output is the text report of the result.

use crate::registry::ToolRegistry;
use crate::reporter::TextReporter;
use crate::tools::{ToolName, ToolDescriptor};
use crate::ToolArgs;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::io::{BufRead, BufReader, Write};

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "anti-slop";

const PARSE_ERROR: i32 = -32700;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;

/// MCP JSON-RPC request
#[derive(Debug, Deserialize, Serialize)]
pub struct JsonRpcRequest {
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,
    pub id: Option<Value>,
    pub method: String,
    pub params: Option<Value>,
}

/// MCP JSON-RPC response
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcResponse {
    fn ok(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    fn err(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

/// Tool definition for MCP tools/list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolDef {
    name: ToolName,
    description: &'static str,
    input_schema: InputSchema,
}

#[derive(Debug, Serialize)]
struct InputSchema {
    #[serde(rename = "type")]
    typ: &'static str,
    properties: Map<String, Value>,
    required: Vec<&'static str>,
}

impl From<ToolDescriptor> for ToolDef {
    fn from(descriptor: ToolDescriptor) -> Self {
        let mut properties = Map::new();
        properties.insert(
            "content".to_string(),
            json!({ "type": "string", "description": "The text to process" }),
        );
        for param in descriptor.identifier.parameters() {
            properties.insert(
                param.name.to_string(),
                json!({ "type": param.kind.json_type(), "description": param.description }),
            );
        }
        Self {
            name: descriptor.identifier,
            description: descriptor.description,
            input_schema: InputSchema {
                typ: "object",
                properties,
                required: vec!["content"],
            },
        }
    }
}

/// Handle a single JSON-RPC message.
///
/// Returns `None` for notifications (no `id`), which get no reply.
pub fn handle_request(registry: &ToolRegistry, req: &JsonRpcRequest) -> Option<JsonRpcResponse> {
    let Some(id) = req.id.clone() else {
        tracing::debug!(method = %req.method, "notification received");
        return None;
    };

    let response = match req.method.as_str() {
        "initialize" => JsonRpcResponse::ok(
            Some(id),
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "tools": {} },
                "serverInfo": { "name": SERVER_NAME, "version": env!("CARGO_PKG_VERSION") }
            }),
        ),
        "ping" => JsonRpcResponse::ok(Some(id), json!({})),
        "tools/list" => {
            let tools: Vec<ToolDef> = registry.list_tools().into_iter().map(ToolDef::from).collect();
            JsonRpcResponse::ok(Some(id), json!({ "tools": tools }))
        }
        "tools/call" => call_tool(registry, Some(id), req.params.as_ref()),
        other => JsonRpcResponse::err(Some(id), METHOD_NOT_FOUND, format!("Method not found: {}", other)),
    };
    Some(response)
}

fn call_tool(registry: &ToolRegistry, id: Option<Value>, params: Option<&Value>) -> JsonRpcResponse {
    // Some MCP clients wrap params inside a "params" key
    let params = params.map(|p| p.get("params").unwrap_or(p));
    let Some(name) = params.and_then(|p| p.get("name")).and_then(Value::as_str) else {
        return JsonRpcResponse::err(id, INVALID_PARAMS, "tools/call requires a string 'name'");
    };
    let arguments = match params.and_then(|p| p.get("arguments")) {
        None | Some(Value::Null) => Map::new(),
        Some(Value::Object(map)) => map.clone(),
        Some(_) => {
            return JsonRpcResponse::err(id, INVALID_PARAMS, "'arguments' must be an object");
        }
    };

    let result = registry.invoke(name, &ToolArgs::from_map(arguments));
    let text = match name.parse::<ToolName>() {
        Ok(tool) => TextReporter::new().format(tool, &result),
        Err(_) => format!("Error: {}", result.error().unwrap_or("unknown tool")),
    };

    let mut body = json!({ "content": [{ "type": "text", "text": text }] });
    if !result.is_success() {
        body["isError"] = Value::Bool(true);
    }
    JsonRpcResponse::ok(id, body)
}

/// Run the MCP server loop (stdin / stdout).
pub fn run_mcp_server(registry: &ToolRegistry) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let reader = BufReader::new(stdin.lock());

    tracing::info!(tools = ToolName::ALL.len(), "MCP server listening on stdio");

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = match serde_json::from_str::<JsonRpcRequest>(&line) {
            Ok(req) => handle_request(registry, &req),
            Err(e) => {
                tracing::warn!(error = %e, "unparseable message");
                Some(JsonRpcResponse::err(None, PARSE_ERROR, format!("Parse error: {}", e)))
            }
        };

        if let Some(response) = response {
            writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
            stdout.flush()?;
        }
    }

    tracing::info!("stdin closed, MCP server exiting");
    Ok(())
}
