use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldPathSegment {
    Key(String),
    Index(usize),
}

/// Location of a value inside a document, rendered as `$.nodes[0].position[1]`.
///
/// Keys that are not plain identifiers (node names used as `connections` keys
/// routinely contain spaces) render in bracket form: `$.connections["Send Mail"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldPath {
    segments: Vec<FieldPathSegment>,
}

impl FieldPath {
    pub fn root() -> Self {
        Self { segments: Vec::new() }
    }

    pub fn from_segments(segments: Vec<FieldPathSegment>) -> Self {
        Self { segments }
    }

    pub fn push_key(&mut self, key: impl Into<String>) {
        self.segments.push(FieldPathSegment::Key(key.into()));
    }

    pub fn push_index(&mut self, index: usize) {
        self.segments.push(FieldPathSegment::Index(index));
    }

    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut child = self.clone();
        child.push_key(key);
        child
    }

    pub fn index(&self, index: usize) -> Self {
        let mut child = self.clone();
        child.push_index(index);
        child
    }

    pub fn segments(&self) -> &[FieldPathSegment] {
        &self.segments
    }

    pub fn last(&self) -> Option<&FieldPathSegment> {
        self.segments.last()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl Default for FieldPath {
    fn default() -> Self {
        Self::root()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FieldPathParseError {
    #[error("field path must start with '$' or an identifier")]
    InvalidStart,
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("invalid index segment")]
    InvalidIndex,
    #[error("unterminated quoted key")]
    UnterminatedQuote,
    #[error("expected '.' before key segment")]
    MissingDot,
    #[error("invalid key segment")]
    InvalidKey,
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn is_plain_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(is_identifier_char)
}

fn take_identifier(input: &str, position: &mut usize) -> Option<String> {
    let start = *position;
    let rest = &input[start..];
    let len = rest
        .char_indices()
        .find(|(_, c)| !is_identifier_char(*c))
        .map_or(rest.len(), |(offset, _)| offset);
    if len == 0 {
        return None;
    }
    *position += len;
    Some(input[start..*position].to_string())
}

fn take_quoted(input: &str, position: &mut usize) -> Result<String, FieldPathParseError> {
    // `position` points just past the opening quote.
    let mut key = String::new();
    let mut chars = input[*position..].char_indices();
    while let Some((offset, c)) = chars.next() {
        match c {
            '"' => {
                *position += offset + 1;
                return Ok(key);
            }
            '\\' => match chars.next() {
                Some((_, escaped)) => key.push(escaped),
                None => return Err(FieldPathParseError::UnterminatedQuote),
            },
            other => key.push(other),
        }
    }
    Err(FieldPathParseError::UnterminatedQuote)
}

impl std::str::FromStr for FieldPath {
    type Err = FieldPathParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.is_empty() {
            return Err(FieldPathParseError::InvalidStart);
        }

        let mut position = 0;
        let mut segments = Vec::new();
        if let Some(rest) = input.strip_prefix('$') {
            position = 1;
            match rest.chars().next() {
                None => return Ok(FieldPath::root()),
                Some('.') | Some('[') => {}
                Some(other) => return Err(FieldPathParseError::UnexpectedChar(other)),
            }
        } else {
            let key = take_identifier(input, &mut position).ok_or(FieldPathParseError::InvalidStart)?;
            segments.push(FieldPathSegment::Key(key));
        }

        while let Some(c) = input[position..].chars().next() {
            match c {
                '.' => {
                    position += 1;
                    if position >= input.len() {
                        return Err(FieldPathParseError::UnexpectedEnd);
                    }
                    let key =
                        take_identifier(input, &mut position).ok_or(FieldPathParseError::InvalidKey)?;
                    segments.push(FieldPathSegment::Key(key));
                }
                '[' => {
                    position += 1;
                    if input[position..].starts_with('"') {
                        position += 1;
                        let key = take_quoted(input, &mut position)?;
                        if !input[position..].starts_with(']') {
                            return Err(FieldPathParseError::InvalidKey);
                        }
                        position += 1;
                        segments.push(FieldPathSegment::Key(key));
                        continue;
                    }
                    let digits = input[position..]
                        .chars()
                        .take_while(char::is_ascii_digit)
                        .count();
                    if digits == 0 || !input[position + digits..].starts_with(']') {
                        return Err(FieldPathParseError::InvalidIndex);
                    }
                    let index = input[position..position + digits]
                        .parse::<usize>()
                        .map_err(|_| FieldPathParseError::InvalidIndex)?;
                    position += digits + 1;
                    segments.push(FieldPathSegment::Index(index));
                }
                _ => return Err(FieldPathParseError::MissingDot),
            }
        }

        Ok(FieldPath::from_segments(segments))
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "$")?;
        for segment in &self.segments {
            match segment {
                FieldPathSegment::Key(key) if is_plain_key(key) => write!(f, ".{key}")?,
                FieldPathSegment::Key(key) => {
                    let escaped = key.replace('\\', "\\\\").replace('"', "\\\"");
                    write!(f, "[\"{escaped}\"]")?
                }
                FieldPathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "field_path_test.rs"]
mod tests;
