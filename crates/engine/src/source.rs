// crates/engine/src/source.rs
//! Line Source: lazily yields decoded text lines from a file or stdin.
//!
//! Lines are split on `\n`, `\r\n` and a lone `\r`; every terminated line is
//! handed out with a single `\n`. Invalid UTF-8 is replaced with U+FFFD.

use crate::error::{EngineError, Result};
use memchr::memchr2;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    #[default]
    Stdin,
}

impl InputSource {
    /// A missing or empty path selects standard input.
    #[must_use]
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) if !p.as_os_str().is_empty() => Self::File(p),
            _ => Self::Stdin,
        }
    }

    /// Reading from a terminal-attached stdin (the caller prompts for EOF).
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Stdin) && atty::is(atty::Stream::Stdin)
    }

    /// Open the source. The returned iterator owns the handle.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::FileOpen`] when the file cannot be opened.
    pub fn open(&self) -> Result<Lines<Box<dyn BufRead>>> {
        let reader: Box<dyn BufRead> = match self {
            Self::File(path) => {
                let file = File::open(path).map_err(|e| EngineError::FileOpen {
                    path: path.clone(),
                    source: e,
                })?;
                Box::new(BufReader::new(file))
            }
            Self::Stdin => Box::new(io::stdin().lock()),
        };
        Ok(Lines::new(reader, self.to_string()))
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(p) => write!(f, "{}", p.display()),
            Self::Stdin => f.write_str("<stdin>"),
        }
    }
}

/// Iterator over the lines of a reader. Stops for good after the first error.
pub struct Lines<R> {
    reader: R,
    input: String,
    buf: Vec<u8>,
    // 直前の行が '\r' で終わった場合、続く '\n' を読み飛ばす
    skip_lf: bool,
    at_eof: bool,
    done: bool,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R, input: impl Into<String>) -> Self {
        Self {
            reader,
            input: input.into(),
            buf: Vec::new(),
            skip_lf: false,
            at_eof: false,
            done: false,
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();

        // A zero-length read ends the input for good.
        let mut terminated = false;
        while !self.at_eof {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                self.at_eof = true;
                break;
            }
            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }
            match memchr2(b'\n', b'\r', available) {
                Some(pos) => {
                    let is_cr = available[pos] == b'\r';
                    self.buf.extend_from_slice(&available[..pos]);
                    self.reader.consume(pos + 1);
                    self.skip_lf = is_cr;
                    terminated = true;
                    break;
                }
                None => {
                    let len = available.len();
                    self.buf.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }

        if !terminated && self.buf.is_empty() {
            return Ok(None);
        }

        // Terminators are ASCII, so a multi-byte sequence never spans two lines.
        let mut line = String::from_utf8_lossy(&self.buf).into_owned();
        if terminated {
            line.push('\n');
        }
        Ok(Some(line))
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(source) => {
                self.done = true;
                Some(Err(EngineError::Read {
                    input: self.input.clone(),
                    source,
                }))
            }
        }
    }
}

impl<R: BufRead> FusedIterator for Lines<R> {}
