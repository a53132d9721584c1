use quill_http::protocol::HttpResponse;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error};

use crate::dispatch::TextKind;
use crate::responder::{HeaderStyle, not_found};
use crate::static_files::StaticFiles;

/// Serves a text file from the static root, line by line.
///
/// Every line is re-terminated with `\n`. Bytes that are not UTF-8 are replaced
/// with `U+FFFD`. A read error ends the body early with whatever was read so far.
pub(crate) async fn respond(static_files: &StaticFiles, file: &str, kind: TextKind, style: HeaderStyle) -> HttpResponse {
    let Some(path) = static_files.resolve(file) else {
        return not_found::respond(file);
    };

    let is_file = tokio::fs::metadata(&path).await.is_ok_and(|m| m.is_file());
    let opened = if is_file { File::open(&path).await.ok() } else { None };
    let Some(opened) = opened else {
        return not_found::respond(file);
    };

    let mut lines = BufReader::new(opened).split(b'\n');
    let mut body = String::new();
    loop {
        match lines.next_segment().await {
            Ok(Some(mut line)) => {
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
                body.push_str(&String::from_utf8_lossy(&line));
                body.push('\n');
            }
            Ok(None) => break,
            Err(e) => {
                error!(cause = %e, path = %path.display(), "read text file error, sending what was read");
                break;
            }
        }
    }

    debug!(path = %path.display(), bytes = body.len(), "serving text file");
    HttpResponse::new(style.ok_head(kind.content_type()), body)
}
