//! Label/content input for adding and editing snippets.

use crate::models::{Snippet, SnippetId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Label,
    Content,
}

/// Text typed into the add/edit form.
///
/// `editing` is the id being edited, or `None` when the form creates a new
/// snippet. The cursor counts characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetForm {
    pub editing: Option<SnippetId>,
    pub label: String,
    pub content: String,
    pub field: FormField,
    cursor: usize,
}

impl SnippetForm {
    pub fn new_entry() -> Self {
        Self {
            editing: None,
            label: String::new(),
            content: String::new(),
            field: FormField::Label,
            cursor: 0,
        }
    }

    pub fn edit(snippet: &Snippet) -> Self {
        Self {
            editing: Some(snippet.id),
            label: snippet.label.clone(),
            content: snippet.content.clone(),
            field: FormField::Label,
            cursor: snippet.label.chars().count(),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            " Edit memo "
        } else {
            " New memo "
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn current(&self) -> &String {
        match self.field {
            FormField::Label => &self.label,
            FormField::Content => &self.content,
        }
    }

    fn current_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Label => &mut self.label,
            FormField::Content => &mut self.content,
        }
    }

    fn current_len(&self) -> usize {
        self.current().chars().count()
    }

    /// Switch to the other field, cursor at its end
    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            FormField::Label => FormField::Content,
            FormField::Content => FormField::Label,
        };
        self.cursor = self.current_len();
    }

    pub fn focus(&mut self, field: FormField) {
        self.field = field;
        self.cursor = self.current_len();
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index();
        self.current_mut().insert(at, c);
        self.cursor += 1;
    }

    /// Break the content onto a new line. Labels stay single-line.
    pub fn insert_newline(&mut self) {
        if self.field == FormField::Content {
            self.insert_char('\n');
        }
    }

    /// Line and column of the cursor inside the focused field
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before: String = self.current().chars().take(self.cursor).collect();
        let line = before.matches('\n').count();
        let col = before
            .rsplit('\n')
            .next()
            .map(|tail| tail.chars().count())
            .unwrap_or(0);
        (line, col)
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index();
        self.current_mut().remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.current_len() {
            return;
        }
        let at = self.byte_index();
        self.current_mut().remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.current_len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.current_len();
    }

    fn byte_index(&self) -> usize {
        let text = self.current();
        text.char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(text.len())
    }
}
