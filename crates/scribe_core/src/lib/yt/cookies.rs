//! Netscape cookie jar support for authenticated caption fetches.

use std::path::Path;

/// Reads a Netscape-format cookies file into a `Cookie` header value.
/// Returns `None` when the file is missing, unreadable, or holds no
/// usable entries — a missing jar is never an error.
pub fn load_cookie_header(path: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(path).ok()?;

    let pairs: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let fields: Vec<&str> = line.split('\t').collect();
            // domain, flag, path, secure, expiry, name, value
            if fields.len() == 7 {
                Some(format!("{}={}", fields[5], fields[6]))
            } else {
                None
            }
        })
        .collect();

    if pairs.is_empty() {
        None
    } else {
        Some(pairs.join("; "))
    }
}
