//! The static file root and the bootstrap mirroring of bundled assets.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, error, info};
use walkdir::WalkDir;

/// Root used when no static location is configured.
pub const DEFAULT_ROOT: &str = "src/main/java/resorces/";

/// Where the bundled assets live in a source checkout.
pub const DEFAULT_ASSETS: &str = "src/main/java/resorces";

/// Build output directory that mirrored static roots are placed under.
pub const BUILD_OUT: &str = "target/classes";

/// The directory static files are served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFiles {
    root: PathBuf,
}

impl Default for StaticFiles {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Mirrors the bundled asset tree at `source` into the build output location
    /// named by `spec` and returns a root pointing at it.
    ///
    /// `spec` is placed under [`BUILD_OUT`] whether or not it starts with `/`.
    pub fn mirror_from(source: impl AsRef<Path>, spec: &str) -> Self {
        Self::mirror(source, BUILD_OUT, spec)
    }

    /// Same as [`StaticFiles::mirror_from`] with an explicit build output directory.
    ///
    /// Failures are logged and skipped; the returned root may be partially populated.
    pub fn mirror(source: impl AsRef<Path>, build_out: impl AsRef<Path>, spec: &str) -> Self {
        let target = target_dir(build_out.as_ref(), spec);
        let source = source.as_ref();

        if let Err(e) = fs::create_dir_all(&target) {
            error!(cause = %e, target = %target.display(), "can't create static files directory");
        }

        info!(source = %source.display(), target = %target.display(), "mirroring static files");
        copy_tree(source, &target);

        Self::new(target)
    }

    /// Maps a request path to a file under the root.
    ///
    /// Returns `None` when the path has a `..` segment or is otherwise not a plain
    /// relative path once its leading `/` is removed.
    pub fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let relative = Path::new(request_path.trim_start_matches('/'));
        if !relative.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir)) {
            debug!(path = request_path, "rejecting path outside the static root");
            return None;
        }
        Some(self.root.join(relative))
    }
}

fn target_dir(build_out: &Path, spec: &str) -> PathBuf {
    let build_out = build_out.to_string_lossy();
    if spec.starts_with('/') {
        PathBuf::from(format!("{build_out}{spec}/"))
    } else {
        PathBuf::from(format!("{build_out}/{spec}/"))
    }
}

fn copy_tree(source: &Path, target: &Path) {
    for entry in WalkDir::new(source) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                error!(cause = %e, "can't read bundled assets");
                continue;
            }
        };

        let Ok(relative) = entry.path().strip_prefix(source) else {
            continue;
        };
        let dest = target.join(relative);

        let result = if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)
        } else {
            fs::copy(entry.path(), &dest).map(|_| ())
        };

        match result {
            Ok(()) => debug!(from = %entry.path().display(), to = %dest.display(), "mirrored"),
            Err(e) => error!(cause = %e, from = %entry.path().display(), to = %dest.display(), "can't mirror asset"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn assets() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("styles")).unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();
        fs::write(dir.path().join("index.html"), "<h1>hi</h1>\n").unwrap();
        fs::write(dir.path().join("styles/style.css"), "body {}\n").unwrap();
        fs::write(dir.path().join("images/dot.png"), [0x89, b'P', b'N', b'G']).unwrap();
        dir
    }

    #[test]
    fn default_root() {
        assert_eq!(StaticFiles::default().root(), Path::new("src/main/java/resorces/"));
    }

    #[test]
    fn target_dir_normalizes_leading_slash() {
        let out = Path::new("target/classes");
        assert_eq!(target_dir(out, "/webroot/public"), PathBuf::from("target/classes/webroot/public/"));
        assert_eq!(target_dir(out, "webroot/public"), PathBuf::from("target/classes/webroot/public/"));
    }

    #[test]
    fn mirrors_tree() {
        let source = assets();
        let out = tempdir().unwrap();

        let files = StaticFiles::mirror(source.path(), out.path(), "/webroot/public");

        assert_eq!(files.root(), out.path().join("webroot/public"));
        assert_eq!(fs::read_to_string(files.root().join("index.html")).unwrap(), "<h1>hi</h1>\n");
        assert_eq!(fs::read_to_string(files.root().join("styles/style.css")).unwrap(), "body {}\n");
        assert_eq!(fs::read(files.root().join("images/dot.png")).unwrap(), [0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn mirror_overwrites_existing_files() {
        let source = assets();
        let out = tempdir().unwrap();
        let stale = out.path().join("public/index.html");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "old").unwrap();

        StaticFiles::mirror(source.path(), out.path(), "public");

        assert_eq!(fs::read_to_string(stale).unwrap(), "<h1>hi</h1>\n");
    }

    #[test]
    fn missing_source_still_creates_root() {
        let out = tempdir().unwrap();
        let files = StaticFiles::mirror(out.path().join("nope"), out.path(), "public");

        assert!(files.root().is_dir());
        assert_eq!(fs::read_dir(files.root()).unwrap().count(), 0);
    }

    #[test]
    fn resolve_joins_under_root() {
        let files = StaticFiles::new("/srv/www/");
        assert_eq!(files.resolve("/index.html"), Some(PathBuf::from("/srv/www/index.html")));
        assert_eq!(files.resolve("/scripts/script.js"), Some(PathBuf::from("/srv/www/scripts/script.js")));
    }

    #[test]
    fn resolve_rejects_parent_segments() {
        let files = StaticFiles::new("/srv/www/");
        assert_eq!(files.resolve("/../etc/passwd.html"), None);
        assert_eq!(files.resolve("/styles/../../secret.css"), None);
    }
}
