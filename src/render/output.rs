//! Indented line buffer.

/// Text sink that prefixes every line, including the inner lines of
/// multi-line text, with the current indentation.
#[derive(Debug, Clone)]
pub struct Output {
    buf: String,
    level: usize,
    width: usize,
    tab: String,
}

impl Output {
    pub fn new(indent_width: usize) -> Self {
        Self {
            buf: String::new(),
            level: 0,
            width: indent_width,
            tab: String::new(),
        }
    }

    pub fn indent(&mut self) {
        self.level += 1;
        self.tab = " ".repeat(self.level * self.width);
    }

    pub fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
        self.tab = " ".repeat(self.level * self.width);
    }

    pub fn println(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        self.buf.push_str(&self.tab);
        if self.tab.is_empty() {
            self.buf.push_str(text);
        } else {
            let newline = format!("\n{}", self.tab);
            self.buf.push_str(&text.replace('\n', &newline));
        }
        self.buf.push('\n');
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Return the accumulated text and clear the buffer.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }
}
