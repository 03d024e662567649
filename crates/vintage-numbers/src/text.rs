/// Maps byte offsets reported by `regex` onto character columns.
#[derive(Debug)]
pub(crate) struct CharIndex {
    /// `None` when the text is pure ASCII, so bytes and characters coincide.
    char_to_byte: Option<Vec<usize>>,
    text_len: usize,
}

impl CharIndex {
    pub(crate) fn new(text: &str) -> Self {
        let char_to_byte = if text.is_ascii() {
            None
        } else {
            let mut offsets: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
            offsets.push(text.len());
            Some(offsets)
        };
        Self {
            char_to_byte,
            text_len: text.len(),
        }
    }

    pub(crate) fn byte_to_char(&self, byte_offset: usize) -> usize {
        let clamped = byte_offset.min(self.text_len);
        match &self.char_to_byte {
            None => clamped,
            Some(offsets) => match offsets.binary_search(&clamped) {
                Ok(idx) => idx,
                Err(idx) => idx,
            },
        }
    }
}

/// Strip a single trailing line terminator (`\n`, `\r\n` or a lone `\r`).
pub(crate) fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
