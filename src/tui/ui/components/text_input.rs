use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// A single-line text input that tracks a cursor in characters, not bytes.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    text: String,
    cursor_position: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Set the text and move cursor to the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor_position = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor_position = 0;
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.text
            .chars()
            .take(char_pos)
            .map(|c| c.len_utf8())
            .sum::<usize>()
    }

    /// Find the previous word boundary from the given position
    fn find_prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = from;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| c.is_whitespace()) {
            pos -= 1;
        }
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !c.is_whitespace()) {
            pos -= 1;
        }

        pos
    }

    /// Delete from start position to end position and return if text changed
    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.text.chars().count() {
            return false;
        }

        let byte_start = self.byte_offset(start);
        let byte_end = self.byte_offset(end);
        self.text.drain(byte_start..byte_end);
        self.cursor_position = start;
        true
    }

    /// Render the text with cursor as styled spans
    pub fn render_cursor_spans(&self) -> Vec<Span<'_>> {
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
        let len = self.text.chars().count();

        if self.cursor_position >= len {
            return vec![Span::raw(self.text.as_str()), Span::styled(" ", cursor_style)];
        }

        let split = self.byte_offset(self.cursor_position);
        let (before, after) = self.text.split_at(split);
        let mut rest = after.chars();
        let under_cursor = rest.next().map(String::from).unwrap_or_default();

        let mut spans = Vec::new();
        if !before.is_empty() {
            spans.push(Span::raw(before));
        }
        spans.push(Span::styled(under_cursor, cursor_style));
        let remaining = rest.as_str();
        if !remaining.is_empty() {
            spans.push(Span::raw(remaining));
        }
        spans
    }

    /// Handle a key event and return true if the text changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let len = self.text.chars().count();

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    false
                }
                KeyCode::Char('e') => {
                    self.cursor_position = len;
                    false
                }
                // Ctrl+W - Delete word before cursor
                KeyCode::Char('w') => {
                    let start = self.find_prev_word_boundary(self.cursor_position);
                    self.delete_range(start, self.cursor_position)
                }
                // Ctrl+U - Delete to beginning of line
                KeyCode::Char('u') => self.delete_range(0, self.cursor_position),
                // Ctrl+K - Delete to end of line
                KeyCode::Char('k') => self.delete_range(self.cursor_position, len),
                _ => false,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let at = self.byte_offset(self.cursor_position);
                self.text.insert(at, c);
                self.cursor_position += 1;
                true
            }
            KeyCode::Backspace if self.cursor_position > 0 => {
                self.delete_range(self.cursor_position - 1, self.cursor_position)
            }
            KeyCode::Delete => self.delete_range(self.cursor_position, self.cursor_position + 1),
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(len);
                false
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                false
            }
            KeyCode::End => {
                self.cursor_position = len;
                false
            }
            _ => false,
        }
    }
}
