//! Collapsing physical input lines into one logical command line.
//!
//! A line ending in `\` continues onto the next one. Whitespace before the
//! `\` survives as a single separating space:
//!
//! ```text
//! >   foo \
//! > bar          =>  "foo bar"
//!
//! >   foo\
//! >bar           =>  "foobar"
//! ```

/// Line continuation marker.
pub const CONTINUATION: char = '\\';

/// Sink for entered lines, e.g. a line editor's history.
pub trait History {
    fn append(&mut self, entry: &str);
}

impl History for Vec<String> {
    fn append(&mut self, entry: &str) {
        self.push(entry.to_string());
    }
}

/// Source of physical input lines.
pub trait LineSource: History {
    type Error;

    /// Read one line with the given prompt. `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, Self::Error>;
}

/// Non-interactive line source over any buffered reader. Keeps no history.
pub struct Lines<R> {
    reader: R,
}

impl<R: std::io::BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R> History for Lines<R> {
    fn append(&mut self, _entry: &str) {}
}

impl<R: std::io::BufRead> LineSource for Lines<R> {
    type Error = std::io::Error;

    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, Self::Error> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Remove trailing whitespace and, if present, one continuation marker.
pub fn strip_continuation(line: &str) -> &str {
    let line = line.trim_end();
    line.strip_suffix(CONTINUATION).unwrap_or(line)
}

/// Strip continuation and surrounding whitespace, keeping one trailing space
/// if the text before the marker ended in whitespace.
pub fn minimize(line: &str) -> String {
    let stripped = strip_continuation(line);
    let trimmed = stripped.trim();
    if stripped.ends_with(char::is_whitespace) {
        format!("{trimmed} ")
    } else {
        trimmed.to_string()
    }
}

/// Whether a line asks for another one.
pub fn continues(line: &str) -> bool {
    line.trim_end().ends_with(CONTINUATION)
}

/// Accumulates physical lines until one ends without continuation.
#[derive(Debug, Default)]
pub struct Assembler {
    lines: Vec<String>,
    pending: bool,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a physical line. Returns true if another line is needed.
    pub fn push(&mut self, line: &str) -> bool {
        self.lines.push(minimize(line));
        self.pending = continues(line);
        self.pending
    }

    /// True if nothing has been pushed since the last `finish`.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Join everything pushed so far into one logical line and reset.
    pub fn finish(&mut self) -> String {
        self.pending = false;
        let joined: String = self.lines.drain(..).collect();
        joined.trim_end().to_string()
    }
}

/// Prompts used while reading one logical line.
#[derive(Debug, Clone, Copy)]
pub struct Prompts<'a> {
    pub primary: &'a str,
    pub continuation: &'a str,
}

/// Read physical lines from `source` until a logical line is complete.
///
/// Every non-empty physical line is appended to the source's history.
/// Returns `Ok(None)` when input ends before any line was read; input that
/// ends mid-continuation yields what was collected.
pub fn read_logical<S: LineSource>(
    source: &mut S,
    prompts: Prompts<'_>,
) -> Result<Option<String>, S::Error> {
    let mut assembler = Assembler::new();
    loop {
        let prompt = if assembler.is_empty() {
            prompts.primary
        } else {
            prompts.continuation
        };
        let Some(line) = source.read_line(prompt)? else {
            if assembler.is_empty() {
                return Ok(None);
            }
            break;
        };

        let line = line.trim_end();
        if !line.is_empty() {
            source.append(line);
        }
        if !assembler.push(line) {
            break;
        }
    }
    Ok(Some(assembler.finish()))
}
