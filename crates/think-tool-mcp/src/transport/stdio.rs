//! Stdio transport: reads JSON-RPC from stdin, writes to stdout.

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::protocol::ProtocolHandler;
use crate::types::{
    JsonRpcError, JsonRpcErrorObject, McpError, McpResult, RequestId, JSONRPC_VERSION,
};

use super::framing;

/// Hard limit for framed stdio payloads (8 MiB).
const MAX_CONTENT_LENGTH_BYTES: usize = 8 * 1024 * 1024;

/// Stdio transport for desktop MCP clients.
pub struct StdioTransport {
    handler: ProtocolHandler,
}

impl StdioTransport {
    /// Create a new stdio transport with the given handler.
    pub fn new(handler: ProtocolHandler) -> Self {
        Self { handler }
    }

    /// The handler messages are dispatched to.
    pub fn handler(&self) -> &ProtocolHandler {
        &self.handler
    }

    /// Run the transport loop on the process stdin and stdout.
    pub async fn run(&self) -> McpResult<()> {
        self.run_with(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Run the transport loop over arbitrary byte streams.
    ///
    /// Accepts newline-delimited JSON and `Content-Length` framed messages;
    /// replies use the framing the client used. Ends on EOF or after a
    /// `shutdown` request has been answered.
    pub async fn run_with<R, W>(&self, input: R, mut output: W) -> McpResult<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut reader = BufReader::new(input);
        let mut raw = Vec::new();
        let mut content_length: Option<usize> = None;
        let mut framed_output = false;

        tracing::info!("Stdio transport started");

        loop {
            raw.clear();
            let bytes_read = reader
                .read_until(b'\n', &mut raw)
                .await
                .map_err(McpError::Io)?;

            if bytes_read == 0 {
                tracing::info!("EOF on stdin, shutting down");
                break;
            }

            let line = match std::str::from_utf8(&raw) {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!("Discarding line that is not valid UTF-8: {e}");
                    let err = McpError::ParseError(format!("Invalid UTF-8: {e}"));
                    write_parse_error(&mut output, &err, framed_output).await?;
                    continue;
                }
            };
            let trimmed = line.trim_end_matches(['\r', '\n']);

            let lower = trimmed.to_ascii_lowercase();
            if lower.starts_with("content-length:") {
                let rest = trimmed.split_once(':').map(|(_, rhs)| rhs).unwrap_or("");
                match rest.trim().parse::<usize>() {
                    Ok(n) if n <= MAX_CONTENT_LENGTH_BYTES => {
                        content_length = Some(n);
                        framed_output = true;
                    }
                    Ok(n) => {
                        tracing::warn!(
                            "Content-Length {n} exceeds max frame size of {MAX_CONTENT_LENGTH_BYTES} bytes"
                        );
                        return Err(McpError::ContentTooLarge {
                            size: n,
                            max: MAX_CONTENT_LENGTH_BYTES,
                        });
                    }
                    Err(_) => {
                        tracing::warn!("Invalid Content-Length header: {trimmed}");
                        return Err(McpError::ParseError(
                            "Invalid Content-Length header".to_string(),
                        ));
                    }
                }
                continue;
            }

            if let Some(n) = content_length {
                // Blank line ends the header block.
                if trimmed.is_empty() {
                    let mut body = vec![0u8; n];
                    reader.read_exact(&mut body).await.map_err(McpError::Io)?;
                    let payload = String::from_utf8_lossy(&body).to_string();

                    if self
                        .process_message(&payload, framed_output, &mut output)
                        .await?
                    {
                        break;
                    }
                    content_length = None;
                    continue;
                }

                // Ignore any remaining header lines (e.g. Content-Type).
                continue;
            }

            if trimmed.is_empty() {
                continue;
            }

            if self
                .process_message(trimmed, framed_output, &mut output)
                .await?
            {
                break;
            }
        }

        self.handler.cleanup().await;
        Ok(())
    }

    async fn process_message<W: AsyncWrite + Unpin>(
        &self,
        input: &str,
        framed_output: bool,
        output: &mut W,
    ) -> McpResult<bool> {
        match framing::parse_message(input.trim()) {
            Ok(msg) => {
                if let Some(response) = self.handler.handle_message(msg).await {
                    write_response(output, &response, framed_output).await?;
                }
                if self.handler.shutdown_requested() {
                    tracing::info!("Shutdown acknowledged, exiting stdio transport loop");
                    return Ok(true);
                }
            }
            Err(e) => {
                tracing::warn!("Parse error: {e}");
                write_parse_error(output, &e, framed_output).await?;
            }
        }
        Ok(false)
    }
}

/// Report an unreadable message. Its id is unknown, so the reply carries null.
async fn write_parse_error<W: AsyncWrite + Unpin>(
    output: &mut W,
    error: &McpError,
    framed_output: bool,
) -> McpResult<()> {
    let error_response = JsonRpcError {
        jsonrpc: JSONRPC_VERSION.to_string(),
        id: RequestId::Null,
        error: JsonRpcErrorObject {
            code: error.code(),
            message: error.to_string(),
            data: None,
        },
    };
    let value = serde_json::to_value(error_response)
        .map_err(|err| McpError::InternalError(err.to_string()))?;
    write_response(output, &value, framed_output).await
}

async fn write_response<W: AsyncWrite + Unpin>(
    output: &mut W,
    response: &serde_json::Value,
    framed_output: bool,
) -> McpResult<()> {
    let framed = if framed_output {
        framing::frame_with_header(response)?
    } else {
        framing::frame_message(response)?
    };
    output
        .write_all(framed.as_bytes())
        .await
        .map_err(McpError::Io)?;
    output.flush().await.map_err(McpError::Io)?;
    Ok(())
}
