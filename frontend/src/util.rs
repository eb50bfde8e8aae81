use rand::Rng;
use std::path::Path;

/// Upper bound on joined path length, terminator included.
///
/// `join_paths` truncates silently at this size, so an overlong path ends up
/// naming a different (usually missing) file rather than producing an error.
pub const MAX_PATH_BYTES: usize = 4096;

/// Copies `value`, mapping the empty string to `None`.
pub fn copy_string(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Removes one pair of double quotes enclosing a path, since SDL can't open
/// quoted paths.
pub fn clean_path(path: &mut String) {
    if path.len() >= 3 && path.starts_with('"') && path.ends_with('"') {
        path.pop();
        path.remove(0);
    }
}

/// [`copy_string`] followed by [`clean_path`].
pub fn copy_path(value: &str) -> Option<String> {
    copy_string(value).map(|mut p| {
        clean_path(&mut p);
        p
    })
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

fn push_bounded(out: &mut String, s: &str, limit: usize) {
    let room = limit.saturating_sub(out.len());
    if s.len() <= room {
        out.push_str(s);
        return;
    }
    let mut end = room;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    out.push_str(&s[..end]);
}

/// Joins path segments with exactly one `/` between them.
///
/// A separator already leading a later segment is dropped, and no separator
/// is added after the last one. Output is capped at `MAX_PATH_BYTES - 1`.
pub fn join_paths(segments: &[&str]) -> String {
    let limit = MAX_PATH_BYTES - 1;
    let last = segments.len().saturating_sub(1);
    let mut out = String::new();
    for (i, &segment) in segments.iter().enumerate() {
        if out.len() >= limit {
            break;
        }
        let segment = if i == 0 {
            segment
        } else {
            segment.strip_prefix(is_separator).unwrap_or(segment)
        };
        push_bounded(&mut out, segment, limit);
        if i != last && !out.ends_with(is_separator) {
            push_bounded(&mut out, "/", limit);
        }
    }
    out
}

/// Returns the first `prefix/file` that exists, skipping `None` prefixes.
pub fn find_file(file: &str, prefixes: &[Option<&str>]) -> Option<String> {
    prefixes
        .iter()
        .flatten()
        .map(|prefix| join_paths(&[prefix, file]))
        .find(|path| Path::new(path).exists())
}

/// Number of code points in `text`, read off the UTF-8 leading bytes.
pub fn utf8_length(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut i = 0;
    let mut length = 0;
    while i < bytes.len() {
        let b = bytes[i];
        i += if b & 0x80 == 0 {
            1
        } else if b & 0xe0 == 0xc0 {
            2
        } else if b & 0xf0 == 0xe0 {
            3
        } else if b & 0xf8 == 0xf0 {
            4
        } else {
            1
        };
        length += 1;
    }
    length
}

/// Shortens `text` so that, once rendered, it fits in `max_width` pixels,
/// ending it with `...`.
///
/// `width` is the rendered width of the whole string. Every glyph is assumed
/// to be `width / length` pixels wide, so proportional fonts may still
/// overshoot or undershoot slightly.
pub fn utf8_truncate(text: &mut String, width: i32, max_width: i32) {
    if width <= max_width {
        return;
    }
    let length = utf8_length(text) as i32;
    if length == 0 {
        return;
    }
    let avg_width = width / length;
    if avg_width <= 0 {
        return;
    }
    let num_chars = max_width.max(0) / avg_width;
    // chars to drop, plus room for the ellipsis
    let spaces = (length - num_chars + 3).max(1) as usize;
    let cut = text
        .char_indices()
        .rev()
        .nth(spaces - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    if text.len() - cut > 2 {
        text.truncate(cut);
        text.push_str("...");
    }
}

/// Fills `array` with `0..len` in a uniformly random order.
pub fn random_array(array: &mut [usize]) {
    random_array_with(array, &mut rand::rng());
}

/// Fisher-Yates shuffle of `0..array.len()` drawing from `rng`.
pub fn random_array_with<R: Rng>(array: &mut [usize], rng: &mut R) {
    for (i, slot) in array.iter_mut().enumerate() {
        *slot = i;
    }
    let n = array.len();
    for i in 0..n.saturating_sub(1) {
        let j = rng.random_range(i..n);
        array.swap(i, j);
    }
}
