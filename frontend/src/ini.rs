//! Streaming INI reader.
//!
//! Unlike a map-based INI loader this never merges anything: every
//! `key = value` line is handed to the callback in file order, so repeated
//! keys and repeated sections reach the caller as-is.

use std::io::BufRead;

/// Section header tracking shared by the string and reader front ends.
#[derive(Default)]
struct LineReader {
    section: Option<String>,
}

impl LineReader {
    fn feed<F>(&mut self, number: usize, line: &str, handler: &mut F)
    where
        F: FnMut(&str, &str, &str),
    {
        let line = if number == 1 {
            line.strip_prefix('\u{feff}').unwrap_or(line)
        } else {
            line
        };
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#') {
            return;
        }

        if let Some(rest) = trimmed.strip_prefix('[') {
            match rest.find(']') {
                Some(end) => self.section = Some(rest[..end].trim().to_string()),
                None => log::warn!("Config line {}: missing ']' in section header", number),
            }
            return;
        }

        let Some(pos) = trimmed.find(&['=', ':'][..]) else {
            log::warn!("Config line {}: expected \"key = value\"", number);
            return;
        };
        let key = trimmed[..pos].trim();
        let value = trimmed[pos + 1..].trim();

        match self.section.as_deref() {
            Some(section) => handler(section, key, value),
            None => log::warn!("Config line {}: \"{}\" is outside of any section", number, key),
        }
    }
}

/// Feeds every `(section, key, value)` in `text` to `handler`.
pub fn parse_str<F>(text: &str, mut handler: F)
where
    F: FnMut(&str, &str, &str),
{
    let mut reader = LineReader::default();
    for (i, line) in text.lines().enumerate() {
        reader.feed(i + 1, line, &mut handler);
    }
}

/// Like [`parse_str`], reading one line at a time. Stops at the first I/O error.
pub fn parse_reader<R, F>(source: R, mut handler: F) -> std::io::Result<()>
where
    R: BufRead,
    F: FnMut(&str, &str, &str),
{
    let mut reader = LineReader::default();
    for (i, line) in source.lines().enumerate() {
        reader.feed(i + 1, &line?, &mut handler);
    }
    Ok(())
}
