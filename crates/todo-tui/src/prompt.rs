/// Single-line text input for the add and edit popups.
///
/// The cursor is a char index, not a byte offset, so multi-byte input
/// moves one visible character at a time.
#[derive(Debug, Clone, Default)]
pub struct Prompt {
    chars: Vec<char>,
    cursor: usize,
}

impl Prompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Column of the cursor, counted in chars from the start.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert(&mut self, c: char) {
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.chars.len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.chars.len();
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_text() {
        let mut prompt = Prompt::new();
        for c in "milk".chars() {
            prompt.insert(c);
        }
        assert_eq!(prompt.text(), "milk");
        assert_eq!(prompt.cursor(), 4);
    }

    #[test]
    fn test_edit_in_middle() {
        let mut prompt = Prompt::with_text("ac");
        prompt.left();
        prompt.insert('b');
        assert_eq!(prompt.text(), "abc");

        prompt.home();
        prompt.delete();
        assert_eq!(prompt.text(), "bc");

        prompt.end();
        prompt.backspace();
        assert_eq!(prompt.text(), "b");
    }

    #[test]
    fn test_bounds_are_noops() {
        let mut prompt = Prompt::new();
        prompt.backspace();
        prompt.delete();
        prompt.left();
        prompt.right();
        assert_eq!(prompt.text(), "");
        assert_eq!(prompt.cursor(), 0);
    }

    #[test]
    fn test_multibyte_moves_by_char() {
        let mut prompt = Prompt::with_text("h\u{00e9}\u{1f600}");
        assert_eq!(prompt.cursor(), 3);
        prompt.left();
        prompt.backspace();
        assert_eq!(prompt.text(), "h\u{1f600}");
    }
}
