//! MCP stdio server
//!
//! Reads JSON-RPC requests from stdin, dispatches to tool handlers, writes
//! responses to stdout. Blocking loop on the main thread; diagnostics go to
//! stderr only, since stdout is the protocol channel.

use std::io::{self, BufRead, Write};

use serde_json::{json, Value};
use tracing::{debug, error};

use super::tools::{self, Toolbox};
use super::types::{
    JsonRpcRequest, JsonRpcResponse, ToolCallParams, INVALID_PARAMS, METHOD_NOT_FOUND, PARSE_ERROR,
};

const SERVER_NAME: &str = "dugout";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
const PROTOCOL_VERSION: &str = "2024-11-05";

/// Run the MCP stdio server until stdin closes (blocking)
pub fn run(toolbox: &Toolbox) {
    let stdin = io::stdin();
    let stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break, // stdin closed
        };

        if line.trim().is_empty() {
            continue;
        }

        let request: JsonRpcRequest = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                let resp = JsonRpcResponse::error(None, PARSE_ERROR, e.to_string());
                write_response(&stdout, &resp);
                continue;
            }
        };

        debug!(method = %request.method, "handling request");
        let response = handle_request(&request, toolbox);
        write_response(&stdout, &response);
    }
}

fn handle_request(req: &JsonRpcRequest, toolbox: &Toolbox) -> JsonRpcResponse {
    match req.method.as_str() {
        "initialize" => handle_initialize(req.id.clone()),
        "initialized" => {
            // Notification — only answer when the client attached an id
            JsonRpcResponse::success(req.id.clone(), json!({}))
        }
        "tools/list" => handle_tools_list(req.id.clone()),
        "tools/call" => handle_tools_call(req.id.clone(), &req.params, toolbox),
        "ping" => JsonRpcResponse::success(req.id.clone(), json!({})),
        _ => JsonRpcResponse::error(
            req.id.clone(),
            METHOD_NOT_FOUND,
            format!("Unknown method: {}", req.method),
        ),
    }
}

fn handle_initialize(id: Option<Value>) -> JsonRpcResponse {
    JsonRpcResponse::success(
        id,
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": SERVER_VERSION
            }
        }),
    )
}

fn handle_tools_list(id: Option<Value>) -> JsonRpcResponse {
    JsonRpcResponse::success(id, json!({ "tools": tools::list_tools() }))
}

fn handle_tools_call(id: Option<Value>, params: &Value, toolbox: &Toolbox) -> JsonRpcResponse {
    let call_params: ToolCallParams = match serde_json::from_value(params.clone()) {
        Ok(p) => p,
        Err(e) => {
            return JsonRpcResponse::error(id, INVALID_PARAMS, e.to_string());
        }
    };

    let result = tools::call_tool(&call_params.name, &call_params.arguments, toolbox);

    JsonRpcResponse::success(
        id,
        serde_json::to_value(result).unwrap_or_else(|_| json!({"error": "serialization failed"})),
    )
}

fn write_response(stdout: &io::Stdout, response: &JsonRpcResponse) {
    // Notifications (no id, no error) get no response line
    if response.id.is_none() && response.error.is_none() {
        return;
    }

    let mut out = stdout.lock();
    if let Err(e) = serde_json::to_writer(&mut out, response) {
        error!("failed to write MCP response: {e}");
        return;
    }
    let _ = writeln!(out);
    let _ = out.flush();
}
