// ─────────────────────────────────────────────────────────────────────
// Dielectric Lab — Console Input
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Whitespace-separated token input over any `BufRead`.
//!
//! Tokens left on a line after a successful read stay queued for the next
//! prompt. A token that fails to parse drops the rest of its line. Bytes
//! that are not UTF-8 decode to U+FFFD, so they surface as unparsable tokens.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use dielectric_types::error::LabResult;

/// Result of reading one typed token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<T> {
    Value(T),
    /// Raw text that did not parse as `T`.
    Invalid(String),
    /// Input exhausted.
    End,
}

pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        TokenReader {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next raw token, reading further lines as needed. `None` at end of input.
    pub fn next_token(&mut self) -> LabResult<Option<String>> {
        while self.pending.is_empty() {
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            let line = String::from_utf8_lossy(&line);
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Next token parsed as `T`; an unparsable token also discards its line.
    pub fn read<T: FromStr>(&mut self) -> LabResult<Token<T>> {
        let Some(raw) = self.next_token()? else {
            return Ok(Token::End);
        };
        match raw.parse::<T>() {
            Ok(value) => Ok(Token::Value(value)),
            Err(_) => {
                self.discard_line();
                Ok(Token::Invalid(raw))
            }
        }
    }

    /// Drop whatever is left of the current input line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}

/// Optional sign followed by decimal digits, whether or not it fits an integer type.
pub fn is_integer_token(token: &str) -> bool {
    let digits = token.strip_prefix(&['+', '-'][..]).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Write a prompt without a newline and flush it before blocking on input.
pub fn prompt<W: Write>(out: &mut W, text: &str) -> LabResult<()> {
    write!(out, "{text}")?;
    out.flush()?;
    Ok(())
}
