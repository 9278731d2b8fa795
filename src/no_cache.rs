use std::io::Read;
use tiny_http::{Header, Response};

pub static NO_CACHE_HEADERS: [(&str, &str); 3] = [
    ("Cache-Control", "no-cache, no-store, must-revalidate"),
    ("Pragma", "no-cache"),
    ("Expires", "0"),
];

/// Appends the no-cache trio after whatever headers the response already carries.
pub fn append<R: Read>(mut response: Response<R>) -> Response<R> {
    for (field, value) in NO_CACHE_HEADERS {
        if let Ok(header) = Header::from_bytes(field, value) {
            response.add_header(header);
        }
    }

    response
}
