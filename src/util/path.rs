//! Path concatenation

const SEPARATOR: char = '/';

/// Join path chunks with `/`.
///
/// - Returns `None` when no chunks are given.
/// - Empty chunks are skipped. If the last chunk is empty, the result gets a
///   trailing separator.
/// - Leading separators are stripped from every chunk but the first, and
///   trailing separators from every chunk.
/// - If nothing is left after stripping, the first chunk is returned as-is.
///
/// ```
/// use librepo::util::pathconcat;
///
/// assert_eq!(pathconcat(&["/tmp/", "/foo/", "bar"]).unwrap(), "/tmp/foo/bar");
/// assert_eq!(pathconcat(&["foo", "bar", ""]).unwrap(), "foo/bar/");
/// ```
pub fn pathconcat(chunks: &[&str]) -> Option<String> {
    let (first, _) = chunks.split_first()?;

    let total_len: usize = chunks.iter().map(|c| c.len()).sum();
    if total_len == 0 {
        return Some(String::new());
    }

    let mut result = String::with_capacity(total_len + chunks.len());
    let mut is_first = true;
    let mut previous_was_empty = false;

    for chunk in chunks {
        if chunk.is_empty() {
            previous_was_empty = true;
            continue;
        }
        previous_was_empty = false;

        let mut part: &str = chunk;
        if !is_first {
            part = part.trim_start_matches(SEPARATOR);
        }
        part = part.trim_end_matches(SEPARATOR);

        if part.is_empty() {
            // Only separators: keeps a leading "/" of the first chunk
            is_first = false;
            continue;
        }

        if is_first {
            is_first = false;
        } else {
            result.push(SEPARATOR);
        }
        result.push_str(part);
    }

    if result.is_empty() {
        return Some(first.to_string());
    }

    if previous_was_empty && !is_first {
        result.push(SEPARATOR);
    }

    Some(result)
}
