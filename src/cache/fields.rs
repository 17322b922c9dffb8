//! Field tokenizer for cache option strings
//!
//! Splits `key=value;key=value` input into ordered fields. A field may be
//! wrapped in double quotes to carry a literal `;`, with `""` standing for
//! a literal quote inside the quoted section. Input is a single record: an
//! unquoted line break ends it and anything after is ignored.

use crate::error::{CacheOptError, CacheOptResult};
use std::borrow::Cow;

/// Separator between fields
pub const FIELD_SEPARATOR: char = ';';

const QUOTE: char = '"';

const LINE_END: char = '\n';

/// One `key=value` pair, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub key: String,
    pub value: String,
}

impl Field {
    /// Split a token on its first `=`
    fn from_token(token: &str) -> CacheOptResult<Self> {
        let (key, value) = token
            .split_once('=')
            .ok_or_else(|| CacheOptError::MalformedField(token.to_string()))?;
        Ok(Self {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

/// Tokenize a raw option string into fields.
///
/// The empty string yields no fields. Any token without `=` (including the
/// empty token left by a trailing `;`) aborts the whole tokenization.
pub fn tokenize(raw: &str) -> CacheOptResult<Vec<Field>> {
    let mut fields = Vec::new();
    if raw.is_empty() {
        return Ok(fields);
    }

    let mut rest = Some(raw);
    while let Some(input) = rest {
        let (token, next) = next_token(input)?;
        fields.push(Field::from_token(&token)?);
        rest = next;
    }

    Ok(fields)
}

/// Read one token from the front of `input`, returning it unquoted along
/// with whatever follows its separator (`None` at end of input).
fn next_token(input: &str) -> CacheOptResult<(Cow<'_, str>, Option<&str>)> {
    let Some(quoted) = input.strip_prefix(QUOTE) else {
        let (token, rest) = match input.find([FIELD_SEPARATOR, LINE_END]) {
            Some(i) if input[i..].starts_with(FIELD_SEPARATOR) => {
                (&input[..i], Some(&input[i + 1..]))
            }
            // Line break ends the record
            Some(i) => {
                let line = &input[..i];
                (line.strip_suffix('\r').unwrap_or(line), None)
            }
            None => (input, None),
        };
        if token.contains(QUOTE) {
            return Err(CacheOptError::MalformedQuote(token.to_string()));
        }
        return Ok((Cow::Borrowed(token), rest));
    };

    let mut token = String::new();
    let mut chars = quoted.char_indices();
    while let Some((i, c)) = chars.next() {
        if c != QUOTE {
            token.push(c);
            continue;
        }

        let after = &quoted[i + 1..];
        if after.starts_with(QUOTE) {
            token.push(QUOTE);
            chars.next();
            continue;
        }

        if after.is_empty() || after.starts_with(LINE_END) || after.starts_with("\r\n") {
            return Ok((Cow::Owned(token), None));
        }
        if let Some(rest) = after.strip_prefix(FIELD_SEPARATOR) {
            return Ok((Cow::Owned(token), Some(rest)));
        }

        // Closing quote followed by stray characters
        let end = i + 2 + after.find([FIELD_SEPARATOR, LINE_END]).unwrap_or(after.len());
        return Err(CacheOptError::MalformedQuote(input[..end].to_string()));
    }

    Err(CacheOptError::MalformedQuote(input.to_string()))
}

/// Render a `key=value` field, quoting it when the value would not survive
/// tokenization as-is.
pub fn render_field(key: &str, value: &str) -> String {
    let field = format!("{}={}", key, value);
    if field.contains([FIELD_SEPARATOR, QUOTE, LINE_END, '\r']) {
        format!("{QUOTE}{}{QUOTE}", field.replace(QUOTE, "\"\""))
    } else {
        field
    }
}
