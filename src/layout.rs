//! Greedy line flowing for `UnicodeDocument::write`.
//!
//! Text is broken at spaces; a word wider than a whole line is split between
//! characters; `\n` always ends a line and `\r` is dropped. The first line may
//! start behind content already on the current line, so it gets its own width.

/// One line produced by [`flow_text`].
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub text: String,
    /// Measured width of `text`, in the units returned by the measure function.
    pub width: f32,
    /// The cursor moves to the start of the next line after this one. Only the
    /// final fragment of a text that does not end in `\n` leaves this unset.
    pub breaks: bool,
}

impl Line {
    fn broken(chars: &[char], width: f32) -> Self {
        Self {
            text: chars.iter().collect(),
            width,
            breaks: true,
        }
    }

    fn trailing(chars: &[char], width: f32) -> Self {
        Self {
            text: chars.iter().collect(),
            width,
            breaks: false,
        }
    }
}

/// Splits `text` into lines no wider than `full_width`, the first no wider than
/// `first_width`. `measure` returns the advance of a single character.
///
/// When the first line is narrower than a full line and its first word does not
/// fit, an empty breaking line is emitted and the word moves to the next line.
pub fn flow_text<F>(text: &str, first_width: f32, full_width: f32, measure: F) -> Vec<Line>
where
    F: Fn(char) -> f32,
{
    let chars: Vec<char> = text.chars().filter(|&c| c != '\r').collect();
    let span_width = |from: usize, to: usize| chars[from..to].iter().map(|&c| measure(c)).sum::<f32>();

    let mut lines = Vec::new();
    let mut available = first_width;
    let mut indented = first_width < full_width;
    let mut start = 0;
    let mut i = 0;
    let mut run = 0.0_f32;
    let mut last_space: Option<usize> = None;

    while i < chars.len() {
        let ch = chars[i];
        if ch == '\n' {
            lines.push(Line::broken(&chars[start..i], run));
            i += 1;
        } else {
            if ch == ' ' {
                last_space = Some(i);
            }
            run += measure(ch);
            if run <= available {
                i += 1;
                continue;
            }
            match last_space {
                Some(space) => {
                    lines.push(Line::broken(&chars[start..space], span_width(start, space)));
                    i = space + 1;
                }
                None if indented => {
                    lines.push(Line::broken(&[], 0.0));
                    i = start;
                }
                None => {
                    // At least one character per line, however narrow the line.
                    let end = if i == start { i + 1 } else { i };
                    lines.push(Line::broken(&chars[start..end], span_width(start, end)));
                    i = end;
                }
            }
        }
        start = i;
        run = 0.0;
        last_space = None;
        available = full_width;
        indented = false;
    }

    if start < chars.len() {
        lines.push(Line::trailing(&chars[start..], run));
    }
    lines
}
