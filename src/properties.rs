//! Reader for the `.properties` key/value format that Gradle uses for
//! `gradle.properties`.
//!
//! Files are decoded as ISO-8859-1; anything outside of it has to be written
//! as a `\uXXXX` escape.

use indexmap::IndexMap;
use std::{fs, io, path::Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PropertiesError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("malformed \\uxxxx encoding on line {line}")]
    MalformedEscape { line: usize },
}

/// Ordered key/value pairs, a later definition of a key replaces an earlier one
pub type Properties = IndexMap<String, String>;

pub fn from_path(path: impl AsRef<Path>) -> Result<Properties, PropertiesError> {
    let bytes = fs::read(path)?;
    let contents: String = bytes.iter().map(|&b| char::from(b)).collect();
    parse(&contents)
}

pub fn parse(contents: &str) -> Result<Properties, PropertiesError> {
    let mut properties = Properties::new();
    for (line, logical) in logical_lines(contents) {
        let (key, value) = split_key_value(&logical);
        properties.insert(unescape(key, line)?, unescape(value, line)?);
    }
    Ok(properties)
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Join natural lines ending in an unescaped backslash, dropping blanks and
/// comments. Each logical line carries the number of its first natural line.
fn logical_lines(contents: &str) -> Vec<(usize, String)> {
    let contents = contents.replace("\r\n", "\n");
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut start = 0;
    let mut continuing = false;

    for (index, raw) in contents.split(['\n', '\r']).enumerate() {
        let trimmed = raw.trim_start_matches(is_blank);
        if !continuing {
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }
            start = index + 1;
        }

        let trailing = trimmed.chars().rev().take_while(|&c| c == '\\').count();
        continuing = trailing % 2 == 1;
        if continuing {
            current.push_str(&trimmed[..trimmed.len() - 1]);
        } else {
            current.push_str(trimmed);
            lines.push((start, std::mem::take(&mut current)));
        }
    }
    if continuing {
        lines.push((start, current));
    }
    lines
}

fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    let mut separator = None;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || is_blank(c) {
            key_end = i;
            separator = Some(c);
            break;
        }
    }

    let mut rest = match separator {
        Some(c) => &line[key_end + c.len_utf8()..],
        None => "",
    };
    rest = rest.trim_start_matches(is_blank);
    if separator.is_some_and(is_blank) {
        if let Some(stripped) = rest.strip_prefix(['=', ':']) {
            rest = stripped.trim_start_matches(is_blank);
        }
    }
    (&line[..key_end], rest)
}

/// Resolve backslash escapes. Consecutive `\uXXXX` escapes are UTF-16 code
/// units, so a surrogate pair yields one character.
fn unescape(raw: &str, line: usize) -> Result<String, PropertiesError> {
    let mut out = String::with_capacity(raw.len());
    let mut units: Vec<u16> = Vec::new();
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        let escaped = match c {
            '\\' => chars.next(),
            other => {
                flush_units(&mut units, &mut out, line)?;
                out.push(other);
                continue;
            }
        };
        if escaped == Some('u') {
            let hex: String = chars.by_ref().take(4).collect();
            let unit = (hex.len() == 4)
                .then(|| u16::from_str_radix(&hex, 16).ok())
                .flatten()
                .ok_or(PropertiesError::MalformedEscape { line })?;
            units.push(unit);
            continue;
        }

        flush_units(&mut units, &mut out, line)?;
        match escaped {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    flush_units(&mut units, &mut out, line)?;
    Ok(out)
}

/// Decode pending `\u` code units, a lone surrogate is malformed
fn flush_units(units: &mut Vec<u16>, out: &mut String, line: usize) -> Result<(), PropertiesError> {
    for decoded in char::decode_utf16(units.drain(..)) {
        out.push(decoded.map_err(|_| PropertiesError::MalformedEscape { line })?);
    }
    Ok(())
}
