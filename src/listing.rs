use anyhow::Result;
use html_escape::encode_text;
use natord::compare_ignore_case;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::{fs::read_dir, io::Cursor, path::Path};
use tiny_http::{Header, Response};

/// Characters left readable in listing links.
const LINK: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

pub struct Entry {
    pub name: String,
    pub is_dir: bool,
    pub is_symlink: bool,
}

pub struct Listing {
    display_path: String,
    entries: Vec<Entry>,
}

impl Listing {
    pub fn new(directory: &Path, display_path: &str) -> Result<Self> {
        let mut entries = vec![];

        for entry in read_dir(directory)? {
            let Ok(entry) = entry else { continue };
            let Ok(file_type) = entry.file_type() else {
                continue;
            };

            entries.push(Entry {
                name: entry.file_name().to_string_lossy().into_owned(),
                // Follows symlinks, so a link to a directory is linked with a trailing slash.
                is_dir: entry.path().is_dir(),
                is_symlink: file_type.is_symlink(),
            });
        }

        entries.sort_by(|a, b| compare_ignore_case(&a.name, &b.name));

        Ok(Self {
            display_path: display_path.to_string(),
            entries,
        })
    }

    pub fn to_html(&self) -> String {
        let title = format!("Directory listing for {}", encode_text(&self.display_path));

        let mut entry_elements = String::new();

        for entry in &self.entries {
            let link = if entry.is_dir {
                format!("{}/", entry.name)
            } else {
                entry.name.clone()
            };
            // Symlinks are marked even when they point at a directory.
            let display = if entry.is_symlink {
                format!("{}@", entry.name)
            } else {
                link.clone()
            };

            entry_elements += &format!(
                r#"<li><a href="{}">{}</a></li>"#,
                utf8_percent_encode(&link, LINK),
                encode_text(&display),
            );
        }

        format!(
            r#"<!DOCTYPE HTML>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<h1>{title}</h1>
<hr>
<ul>
{entry_elements}
</ul>
<hr>
</body>
</html>
"#
        )
    }
}

impl From<Listing> for Response<Cursor<Vec<u8>>> {
    fn from(value: Listing) -> Self {
        let mut response = Response::from_data(value.to_html().into_bytes());

        if let Ok(header) = Header::from_bytes("Content-Type", "text/html; charset=utf-8") {
            response = response.with_header(header);
        }

        response
    }
}
