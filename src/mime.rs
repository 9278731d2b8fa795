use mime_guess::{Mime, from_path, mime};

/// Suffixes that describe a transfer encoding rather than a content type.
static ENCODINGS: [(&str, &str); 5] = [
    (".gz", "gzip"),
    (".Z", "compress"),
    (".bz2", "bzip2"),
    (".xz", "xz"),
    (".br", "br"),
];

/// Strategy used to turn a request path into a [`MimeDecision`].
pub type MimeStrategy = fn(&str) -> MimeDecision;

#[derive(Clone, Debug, PartialEq)]
pub struct MimeDecision {
    pub mime: Option<Mime>,
    pub encoding: Option<&'static str>,
}

impl MimeDecision {
    pub fn undetermined(encoding: Option<&'static str>) -> Self {
        Self {
            mime: None,
            encoding,
        }
    }

    /// The value sent as `content-type`.
    pub fn content_type(&self) -> &str {
        self.mime
            .as_ref()
            .map_or("application/octet-stream", |mime| mime.essence_str())
    }
}

/// Standard lookup followed by the fallback table.
pub fn guess(path: &str) -> MimeDecision {
    with_fallback(standard(path), path)
}

/// Extension lookup through `mime_guess`, after peeling off a compression suffix.
pub fn standard(path: &str) -> MimeDecision {
    let (stem, encoding) = ENCODINGS
        .iter()
        .find_map(|(suffix, encoding)| {
            path.strip_suffix(*suffix)
                .filter(|stem| !stem.is_empty())
                .map(|stem| (stem, Some(*encoding)))
        })
        .unwrap_or((path, None));

    MimeDecision {
        mime: from_path(stem).first(),
        encoding,
    }
}

/// Fills in an undetermined type for `.js`, `.css` and `.html` paths, in that order.
pub fn with_fallback(decision: MimeDecision, path: &str) -> MimeDecision {
    if decision.mime.is_some() {
        return decision;
    }

    let mime = if path.ends_with(".js") {
        Some(mime::APPLICATION_JAVASCRIPT)
    } else if path.ends_with(".css") {
        Some(mime::TEXT_CSS)
    } else if path.ends_with(".html") {
        Some(mime::TEXT_HTML)
    } else {
        None
    };

    MimeDecision {
        mime,
        encoding: decision.encoding,
    }
}
