use http::StatusCode;
use quill_http::protocol::{HttpResponse, ResponseBody, ResponseHead};
use tokio::fs::File;
use tokio_util::io::ReaderStream;
use tracing::debug;

use crate::responder::not_found;
use crate::static_files::StaticFiles;

const IMAGES_DIR: &str = "/images/";
const CHUNK_SIZE: usize = 4096;

/// Streams an image from the static root.
///
/// Paths outside `/images/` are looked up inside the root's `images` directory.
pub(crate) async fn respond(static_files: &StaticFiles, path: &str) -> HttpResponse {
    let lookup = if path.starts_with(IMAGES_DIR) { path.to_owned() } else { format!("{IMAGES_DIR}{}", path.trim_start_matches('/')) };
    let Some(file_path) = static_files.resolve(&lookup) else {
        return not_found::respond(path);
    };

    let opened = match File::open(&file_path).await {
        Ok(file) => file,
        Err(_) => return not_found::respond(path),
    };
    let length = match opened.metadata().await {
        Ok(metadata) if metadata.is_file() => metadata.len(),
        _ => return not_found::respond(path),
    };

    let head = ResponseHead::new(StatusCode::OK)
        .header("Content-Type", format!("image/{}", extension(path)))
        .header("Content-Length", length.to_string());

    debug!(path = %file_path.display(), length, "streaming image");
    HttpResponse::new(head, ResponseBody::stream(ReaderStream::with_capacity(opened, CHUNK_SIZE)))
}

fn extension(path: &str) -> String {
    path.rsplit_once('.').map_or("", |(_, ext)| ext).to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_http::protocol::LineEnding;
    use std::fs;
    use tempfile::tempdir;

    fn root_with_image(name: &str, bytes: &[u8]) -> tempfile::TempDir {
        let root = tempdir().unwrap();
        fs::create_dir_all(root.path().join("images")).unwrap();
        fs::write(root.path().join("images").join(name), bytes).unwrap();
        root
    }

    #[tokio::test]
    async fn streams_exact_bytes() {
        let bytes: Vec<u8> = (0..10_000u32).map(|i| u8::try_from(i % 251).unwrap()).collect();
        let root = root_with_image("logo.png", &bytes);
        let files = StaticFiles::new(root.path());

        let (head, body) = respond(&files, "/images/logo.png").await.into_parts();

        assert_eq!(head.status(), StatusCode::OK);
        assert_eq!(head.line_ending(), LineEnding::Crlf);
        assert_eq!(head.get("Content-Type"), Some("image/png"));
        assert_eq!(head.get("Content-Length"), Some("10000"));
        assert_eq!(body.collect().await.unwrap(), bytes);
    }

    #[tokio::test]
    async fn bare_path_looks_in_images_dir() {
        let root = root_with_image("favicon.ico", b"ico");
        let files = StaticFiles::new(root.path());

        let (head, body) = respond(&files, "/favicon.ico").await.into_parts();

        assert_eq!(head.get("Content-Type"), Some("image/ico"));
        assert_eq!(body.collect().await.unwrap(), &b"ico"[..]);
    }

    #[tokio::test]
    async fn missing_image_is_404() {
        let root = tempdir().unwrap();
        let files = StaticFiles::new(root.path());

        assert_eq!(respond(&files, "/images/nope.jpg").await.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(extension("/images/Photo.JPG"), "jpg");
        assert_eq!(extension("/a.b/c.png"), "png");
    }
}
