//! Run-length encoded pattern text.
//!
//! ```text
//! #N Glider
//! x = 3, y = 3, rule = B3/S23
//! bo$2bo$3o!
//! ```
//!
//! Comment lines start with `#` and may only precede the header. The body is
//! a run of `[count]b` (dead), `[count]o` (alive) and `[count]$` (end of row,
//! skipping `count - 1` blank rows) tokens, terminated by `!`.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::domain::{Board, CellMatrix, RuleSet};
use crate::error::{LifeError, Result};

/// Rule written when a header carries none
pub const DEFAULT_RULE: &str = "B3/S23";

/// Longest body line the encoder emits
pub const MAX_LINE_LEN: usize = 70;

/// Largest `x * y` a header may declare
pub const MAX_PATTERN_CELLS: usize = 1 << 26;

/// A decoded pattern: cells, the rule string as written, and comment lines.
///
/// The rule string is kept verbatim; it is only validated when turned into a
/// [`RuleSet`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RlePattern {
    matrix: CellMatrix,
    rule: String,
    comments: Vec<String>,
}

impl RlePattern {
    /// Pair a matrix with a rule string. The rule must not be blank.
    pub fn new(matrix: CellMatrix, rule: impl Into<String>) -> Result<Self> {
        let rule = rule.into().trim().to_string();
        if rule.is_empty() {
            return Err(LifeError::validation("rule must be defined"));
        }
        Ok(Self {
            matrix,
            rule,
            comments: Vec::new(),
        })
    }

    /// Live content of `board` trimmed to its bounding box, with its rule
    pub fn from_board(board: &Board) -> Self {
        Self {
            matrix: board.extract_pattern(),
            rule: board.rule_set().rule_string().to_string(),
            comments: Vec::new(),
        }
    }

    /// Attach comment lines; a missing leading `#` is added
    pub fn with_comments<I, S>(mut self, comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comments = comments
            .into_iter()
            .map(|c| {
                let c: String = c.into();
                if c.starts_with('#') { c } else { format!("#C {c}") }
            })
            .collect();
        self
    }

    pub fn matrix(&self) -> &CellMatrix {
        &self.matrix
    }

    /// Rule string exactly as stored
    pub fn rule(&self) -> &str {
        &self.rule
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Pattern name from a `#N` comment line
    pub fn name(&self) -> Option<&str> {
        self.comments
            .iter()
            .find_map(|c| c.strip_prefix("#N"))
            .map(str::trim)
    }

    /// Parse the stored rule string
    pub fn rule_set(&self) -> Result<RuleSet> {
        self.rule.parse()
    }
}

/// Parse one `key = value` header field list
fn parse_header(line: &str) -> Result<(usize, usize, String)> {
    let (mut x, mut y, mut rule) = (None, None, None);
    for field in line.split(',') {
        let Some((key, value)) = field.split_once('=') else {
            return Err(LifeError::parse(format!("malformed header field '{}'", field.trim())));
        };
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "x" => x = Some(parse_axis("x", value)?),
            "y" => y = Some(parse_axis("y", value)?),
            "rule" => rule = Some(value.to_string()),
            other => debug!(key = other, "ignoring unknown header field"),
        }
    }
    let x = x.ok_or_else(|| LifeError::parse("header is missing the x axis"))?;
    let y = y.ok_or_else(|| LifeError::parse("header is missing the y axis"))?;
    Ok((x, y, rule.unwrap_or_else(|| DEFAULT_RULE.to_string())))
}

/// Move a cursor `by` cells, failing once it passes `limit`
fn step_cursor(at: usize, by: usize, limit: usize) -> Result<usize> {
    at.checked_add(by)
        .filter(|&next| next <= limit)
        .ok_or_else(|| LifeError::parse("run exceeds pattern bounds"))
}

fn parse_axis(axis: &str, value: &str) -> Result<usize> {
    value
        .parse()
        .map_err(|_| LifeError::parse(format!("{axis} axis '{value}' is not a size")))
}

/// Decode pattern text
pub fn decode(text: &str) -> Result<RlePattern> {
    let mut comments = Vec::new();
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    let header = loop {
        match lines.next() {
            Some(line) if line.starts_with('#') => comments.push(line.to_string()),
            Some(line) => break line,
            None => return Err(LifeError::parse("missing header line")),
        }
    };
    let (cols, rows, rule) = parse_header(header)?;
    if rows.checked_mul(cols).is_none_or(|cells| cells > MAX_PATTERN_CELLS) {
        return Err(LifeError::parse(format!(
            "{cols}x{rows} pattern exceeds {MAX_PATTERN_CELLS} cells"
        )));
    }
    let mut matrix = CellMatrix::new(rows, cols);

    let (mut row, mut col) = (0usize, 0usize);
    let mut count: Option<usize> = None;
    let mut terminated = false;
    'body: for line in lines {
        for ch in line.chars() {
            match ch {
                '0'..='9' => {
                    let digit = ch as usize - '0' as usize;
                    let next = count
                        .unwrap_or(0)
                        .checked_mul(10)
                        .and_then(|n| n.checked_add(digit))
                        .ok_or_else(|| LifeError::parse("run count overflows"))?;
                    count = Some(next);
                }
                'b' | 'o' => {
                    let run = count.take().unwrap_or(1);
                    let end = step_cursor(col, run, cols)?;
                    if ch == 'o' {
                        if row >= rows {
                            return Err(LifeError::parse(format!(
                                "live run at row {row} exceeds the {cols}x{rows} header"
                            )));
                        }
                        for c in col..end {
                            matrix.set(row, c, true);
                        }
                    }
                    col = end;
                }
                '$' => {
                    // One past the last row is allowed for a trailing `$`
                    row = step_cursor(row, count.take().unwrap_or(1), rows)?;
                    col = 0;
                }
                '!' => {
                    terminated = true;
                    break 'body;
                }
                c if c.is_whitespace() => {}
                other => {
                    return Err(LifeError::parse(format!("unexpected '{other}' in pattern body")));
                }
            }
        }
    }
    if !terminated {
        return Err(LifeError::parse("pattern body is missing the '!' terminator"));
    }

    debug!(rows, cols, alive = matrix.count_alive(), %rule, "decoded pattern");
    Ok(RlePattern::new(matrix, rule)?.with_comments(comments))
}

fn push_run(tokens: &mut Vec<String>, run: usize, tag: char) {
    tokens.push(if run == 1 { tag.to_string() } else { format!("{run}{tag}") });
}

/// Body tokens: runs up to the last live cell of each row, merged row ends,
/// and the terminator
fn body_tokens(matrix: &CellMatrix) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut pending_ends = 0;
    for (r, row) in matrix.iter_rows().enumerate() {
        if r > 0 {
            pending_ends += 1;
        }
        let Some(last) = row.iter().rposition(|&alive| alive) else {
            continue;
        };
        if pending_ends > 0 {
            push_run(&mut tokens, pending_ends, '$');
            pending_ends = 0;
        }
        let mut cells = row[..=last].iter().peekable();
        while let Some(&alive) = cells.next() {
            let mut run = 1;
            while cells.next_if(|&&next| next == alive).is_some() {
                run += 1;
            }
            push_run(&mut tokens, run, if alive { 'o' } else { 'b' });
        }
    }
    tokens.push("!".to_string());
    tokens
}

/// Encode a pattern, wrapping body lines at [`MAX_LINE_LEN`]
pub fn encode(pattern: &RlePattern) -> String {
    let matrix = &pattern.matrix;
    let mut out = String::new();
    for comment in &pattern.comments {
        out.push_str(comment);
        out.push('\n');
    }
    out.push_str(&format!(
        "x = {}, y = {}, rule = {}\n",
        matrix.cols(),
        matrix.rows(),
        pattern.rule
    ));

    let mut line = String::new();
    for token in body_tokens(matrix) {
        if !line.is_empty() && line.len() + token.len() > MAX_LINE_LEN {
            out.push_str(&line);
            out.push('\n');
            line.clear();
        }
        line.push_str(&token);
    }
    out.push_str(&line);
    out.push('\n');
    out
}

impl FromStr for RlePattern {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}

impl fmt::Display for RlePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}
