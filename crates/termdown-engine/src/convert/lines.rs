/// A single input line after normalisation.
///
/// `text` keeps its leading whitespace; predicates work on [`SourceLine::trimmed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub text: &'a str,
}

impl<'a> SourceLine<'a> {
    /// The line without its leading whitespace.
    pub fn trimmed(&self) -> &'a str {
        self.text.trim_start()
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// The input buffer split into lines.
///
/// `\r\n`, lone `\r` and `\n` all end a line, and trailing whitespace is
/// stripped from every line.
#[derive(Debug, Clone)]
pub struct SourceLines<'a> {
    lines: Vec<SourceLine<'a>>,
}

impl<'a> SourceLines<'a> {
    pub fn split(input: &'a str) -> Self {
        let mut lines = Vec::new();
        let mut rest = input;

        loop {
            match rest.find(['\r', '\n']) {
                Some(pos) => {
                    lines.push(SourceLine {
                        text: rest[..pos].trim_end(),
                    });
                    let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                    rest = &rest[pos + skip..];
                }
                None => {
                    lines.push(SourceLine {
                        text: rest.trim_end(),
                    });
                    break;
                }
            }
        }

        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SourceLine<'a>> {
        self.lines.get(index)
    }

    /// Blank, or outside the buffer. Used for the header isolation check.
    pub fn is_blank_or_edge(&self, index: Option<usize>) -> bool {
        match index.and_then(|i| self.lines.get(i)) {
            Some(line) => line.is_blank(),
            None => true,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceLine<'a>> {
        self.lines.iter()
    }
}
