//! Newline-delimited JSON-RPC over a byte stream (stdin/stdout in production).

use std::sync::Arc;

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::handler::McpHandler;
use super::protocol::{JsonRpcError, JsonRpcResponse, PARSE_ERROR, parse_message};
use crate::error::{Result, RulesError};

/// Serve on the process's stdin/stdout until stdin closes.
pub async fn serve_stdio(handler: Arc<McpHandler>) -> Result<()> {
    serve(handler, tokio::io::stdin(), tokio::io::stdout()).await
}

/// Read one JSON-RPC message per line from `reader` and write one response per
/// line to `writer`.
///
/// Each request runs in its own task. Responses go through a single writer
/// task so lines never interleave; they are written in completion order.
/// Returns after input ends and every in-flight request has been answered.
/// A line that is not valid UTF-8 or JSON gets a parse-error response and
/// reading continues. If the writer fails, reading stops and its error is
/// returned.
pub async fn serve<R, W>(handler: Arc<McpHandler>, reader: R, writer: W) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel::<JsonRpcResponse>();
    let writer_task = tokio::spawn(write_responses(rx, writer));

    info!("Serving MCP over stdio");
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = tokio::select! {
            read = reader.read_until(b'\n', &mut buf) => read?,
            _ = tx.closed() => {
                warn!("Output closed, no longer reading input");
                break;
            }
        };
        if read == 0 {
            debug!("Input closed, draining in-flight requests");
            break;
        }

        let response = match decode_line(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => parse_message(line),
            Err(response) => Err(response),
        };

        let sent = match response {
            Ok(request) => {
                let handler = Arc::clone(&handler);
                let tx = tx.clone();
                tokio::spawn(async move {
                    if let Some(response) = handler.handle(request).await {
                        let _ = tx.send(response);
                    }
                });
                Ok(())
            }
            Err(response) => {
                warn!("Rejected malformed message");
                tx.send(response)
            }
        };
        if sent.is_err() {
            warn!("Output closed, no longer reading input");
            break;
        }
    }

    drop(tx);
    writer_task
        .await
        .map_err(|e| RulesError::Io(std::io::Error::other(e)))??;
    Ok(())
}

/// One input line without its `\n` or `\r\n` terminator. Bytes that are not
/// UTF-8 yield a parse-error response for that line only.
fn decode_line(buf: &[u8]) -> std::result::Result<&str, JsonRpcResponse> {
    let line = std::str::from_utf8(buf).map_err(|e| {
        JsonRpcResponse::failure(Value::Null, JsonRpcError::new(PARSE_ERROR, e.to_string()))
    })?;
    Ok(line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line))
}

async fn write_responses<W>(
    mut rx: mpsc::UnboundedReceiver<JsonRpcResponse>,
    mut writer: W,
) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        let mut line = serde_json::to_string(&response)?;
        line.push('\n');
        writer.write_all(line.as_bytes()).await?;
        writer.flush().await?;
    }
    Ok(())
}
