//! Request path classification.
//!
//! The first matching rule wins:
//!
//! | path                              | target          |
//! |-----------------------------------|-----------------|
//! | ends with `.js`                   | JavaScript text |
//! | ends with `.css`                  | CSS text        |
//! | ends with `.html`, or is `/`      | HTML text       |
//! | starts with `/app`                | `/app` route    |
//! | ends with `.png`, `.jpg`, `.ico`  | image           |
//! | anything else                     | not found       |
//!
//! So `/app/page.html` is served as a file, not routed.

/// Kind of text file, which decides its content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    JavaScript,
    Css,
    Html,
}

impl TextKind {
    pub fn content_type(self) -> String {
        match self {
            TextKind::JavaScript => mime::TEXT_JAVASCRIPT,
            TextKind::Css => mime::TEXT_CSS,
            TextKind::Html => mime::TEXT_HTML,
        }
        .to_string()
    }
}

/// Where a request path is dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// A text file, `file` being the path to look up under the static root.
    Text { kind: TextKind, file: &'a str },
    /// An `/app` route, `route` being the path with `/app` removed.
    Dynamic { route: &'a str },
    Image,
    NotFound,
}

const INDEX: &str = "index.html";
const APP_PREFIX: &str = "/app";
const IMAGE_SUFFIXES: [&str; 3] = [".png", ".jpg", ".ico"];

impl<'a> Target<'a> {
    pub fn classify(path: &'a str) -> Self {
        if path.ends_with(".js") {
            Target::Text { kind: TextKind::JavaScript, file: path }
        } else if path.ends_with(".css") {
            Target::Text { kind: TextKind::Css, file: path }
        } else if path.ends_with(".html") {
            Target::Text { kind: TextKind::Html, file: path }
        } else if path == "/" {
            Target::Text { kind: TextKind::Html, file: INDEX }
        } else if let Some(route) = path.strip_prefix(APP_PREFIX) {
            Target::Dynamic { route }
        } else if IMAGE_SUFFIXES.iter().any(|suffix| path.ends_with(suffix)) {
            Target::Image
        } else {
            Target::NotFound
        }
    }
}
