use crate::{
    file::File,
    listing::Listing,
    mime::{self, MimeStrategy},
};
use percent_encoding::percent_decode_str;
use std::path::PathBuf;
use tiny_http::{Header, Method, Response, ResponseBox};

static INDEX_FILES: [&str; 2] = ["index.html", "index.htm"];

/// Maps request URLs onto files below a root directory.
pub struct StaticFiles {
    root: PathBuf,
    mime: MimeStrategy,
}

impl StaticFiles {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            mime: mime::guess,
        }
    }

    pub fn with_mime(mut self, mime: MimeStrategy) -> Self {
        self.mime = mime;
        self
    }

    pub fn respond(&self, method: &Method, url: &str) -> ResponseBox {
        if !matches!(method, Method::Get | Method::Head) {
            return error_response(501, "Unsupported method");
        }

        let (path, query) = split_url(url);
        let decoded = percent_decode_str(path).decode_utf8_lossy();
        let fs_path = self.translate(&decoded);

        if fs_path.is_dir() {
            if !path.ends_with('/') {
                return match query {
                    Some(query) => redirect(format!("{path}/?{query}")),
                    None => redirect(format!("{path}/")),
                };
            }

            if let Some(index) = INDEX_FILES
                .iter()
                .map(|index| fs_path.join(index))
                .find(|index| index.is_file())
            {
                return self.serve_file(index);
            }

            return match Listing::new(&fs_path, &decoded) {
                Ok(listing) => Response::from(listing).boxed(),
                Err(_) => error_response(404, "No permission to list directory"),
            };
        }

        // A trailing slash only ever names a directory.
        if path.ends_with('/') {
            return error_response(404, "File not found");
        }

        self.serve_file(fs_path)
    }

    /// Normalizes the URL path against the root. `..` pops a segment but never climbs above the root.
    fn translate(&self, path: &str) -> PathBuf {
        let mut segments = vec![];

        for segment in path.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                segment if segment.contains('\\') => {}
                segment => segments.push(segment),
            }
        }

        segments
            .into_iter()
            .fold(self.root.clone(), |fs_path, segment| fs_path.join(segment))
    }

    fn serve_file(&self, path: PathBuf) -> ResponseBox {
        let decision = (self.mime)(&path.to_string_lossy());

        match File::new(path, decision).and_then(|file| file.get_response()) {
            Ok(response) => response.boxed(),
            Err(_) => error_response(404, "File not found"),
        }
    }
}

/// Splits off the query and drops any fragment.
fn split_url(url: &str) -> (&str, Option<&str>) {
    let url = url.split('#').next().unwrap_or_default();

    match url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url, None),
    }
}

fn redirect(location: String) -> ResponseBox {
    match Header::from_bytes("Location", location) {
        Ok(header) => Response::empty(301).with_header(header).boxed(),
        Err(_) => error_response(404, "File not found"),
    }
}

pub fn error_response(status: u16, message: &str) -> ResponseBox {
    let html = format!(
        r#"<!DOCTYPE HTML>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Error response</title>
</head>
<body>
<h1>Error response</h1>
<p>Error code: {status}</p>
<p>Message: {message}.</p>
</body>
</html>
"#
    );

    let mut response = Response::from_data(html.into_bytes()).with_status_code(status);

    if let Ok(header) = Header::from_bytes("Content-Type", "text/html;charset=utf-8") {
        response.add_header(header);
    }

    response.boxed()
}
