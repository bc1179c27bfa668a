//! State and key handling for the interactive list.
//!
//! Nothing in here touches the terminal, so every interaction can be driven
//! from tests with synthetic key events.

use crate::clipboard::ClipboardWriter;
use crate::error::ClipmemoError;
use crate::form::{FormField, SnippetForm};
use crate::models::{Snippet, SnippetId};
use crate::storage::KeyValueStorage;
use crate::store::SnippetStore;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};
use tracing::error;

pub const NOTICE_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    pub expires_at: Instant,
}

/// A delete waiting for a yes/no answer
#[derive(Debug, Clone)]
pub struct PendingDelete {
    pub id: SnippetId,
    pub label: String,
    /// Form to go back to if the delete is declined
    pub from_form: Option<SnippetForm>,
}

#[derive(Debug, Clone)]
pub enum Mode {
    List,
    Form(SnippetForm),
    Confirm(PendingDelete),
}

pub struct App<S: KeyValueStorage, C: ClipboardWriter> {
    store: SnippetStore<S>,
    clipboard: C,
    selected: usize,
    mode: Mode,
    notice: Option<Notice>,
    should_quit: bool,
}

impl<S: KeyValueStorage, C: ClipboardWriter> App<S, C> {
    pub fn new(store: SnippetStore<S>, clipboard: C) -> Self {
        Self {
            store,
            clipboard,
            selected: 0,
            mode: Mode::List,
            notice: None,
            should_quit: false,
        }
    }

    pub fn snippets(&self) -> &[Snippet] {
        self.store.snippets()
    }

    pub fn store(&self) -> &SnippetStore<S> {
        &self.store
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn selected(&self) -> Option<usize> {
        if self.store.is_empty() {
            None
        } else {
            Some(self.selected)
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Drop the notice once its time is up
    pub fn expire_notice(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| now >= n.expires_at) {
            self.notice = None;
        }
    }

    fn show_notice(&mut self, text: impl Into<String>, kind: NoticeKind) {
        self.notice = Some(Notice {
            text: text.into(),
            kind,
            expires_at: Instant::now() + NOTICE_DURATION,
        });
    }

    fn report(&mut self, err: ClipmemoError) {
        error!("{}", err);
        self.show_notice(err.to_string(), NoticeKind::Error);
    }

    fn selected_snippet(&self) -> Option<&Snippet> {
        self.selected().and_then(|i| self.store.snippets().get(i))
    }

    fn clamp_selection(&mut self) {
        let len = self.store.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    fn select_id(&mut self, id: SnippetId) {
        if let Some(pos) = self.store.position(id) {
            self.selected = pos;
        }
        self.clamp_selection();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let mode = std::mem::replace(&mut self.mode, Mode::List);
        self.mode = match mode {
            Mode::List => self.handle_list_key(key),
            Mode::Form(form) => self.handle_form_key(form, key),
            Mode::Confirm(pending) => self.handle_confirm_key(pending, key),
        };
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Mode {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Up if shift => self.move_selected(true),
            KeyCode::Down if shift => self.move_selected(false),
            KeyCode::Char('K') => self.move_selected(true),
            KeyCode::Char('J') => self.move_selected(false),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.store.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Enter => self.copy_selected(),
            KeyCode::Char('a') | KeyCode::Char('n') => {
                return Mode::Form(SnippetForm::new_entry());
            }
            KeyCode::Char('e') => {
                if let Some(snippet) = self.selected_snippet() {
                    return Mode::Form(SnippetForm::edit(snippet));
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(snippet) = self.selected_snippet() {
                    return Mode::Confirm(PendingDelete {
                        id: snippet.id,
                        label: snippet.label.clone(),
                        from_form: None,
                    });
                }
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            _ => {}
        }
        Mode::List
    }

    fn handle_form_key(&mut self, mut form: SnippetForm, key: KeyEvent) -> Mode {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Esc => return Mode::List,
            KeyCode::Enter if alt => form.insert_newline(),
            KeyCode::Char('j') if ctrl => form.insert_newline(),
            KeyCode::Char('s') if ctrl => return self.save_form(form),
            KeyCode::Char('d') if ctrl => {
                if let Some(id) = form.editing {
                    let label = self
                        .store
                        .get(id)
                        .map(|s| s.label.clone())
                        .unwrap_or_else(|| form.label.clone());
                    return Mode::Confirm(PendingDelete {
                        id,
                        label,
                        from_form: Some(form),
                    });
                }
            }
            KeyCode::Enter => match form.field {
                FormField::Label => form.focus(FormField::Content),
                FormField::Content => return self.save_form(form),
            },
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => form.toggle_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Delete => form.delete(),
            KeyCode::Left => form.move_left(),
            KeyCode::Right => form.move_right(),
            KeyCode::Home => form.move_home(),
            KeyCode::End => form.move_end(),
            KeyCode::Char(c) if !ctrl => form.insert_char(c),
            _ => {}
        }
        Mode::Form(form)
    }

    fn handle_confirm_key(&mut self, pending: PendingDelete, key: KeyEvent) -> Mode {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.store.delete(pending.id) {
                    Ok(true) => self.show_notice("Deleted", NoticeKind::Info),
                    Ok(false) => {}
                    Err(e) => self.report(e),
                }
                self.clamp_selection();
                Mode::List
            }
            _ => match pending.from_form {
                Some(form) => Mode::Form(form),
                None => Mode::List,
            },
        }
    }

    fn save_form(&mut self, form: SnippetForm) -> Mode {
        let result = match form.editing {
            Some(id) => self.store.update(id, &form.label, &form.content).map(|_| id),
            None => self
                .store
                .create(&form.label, &form.content)
                .map(|list| list[0].id),
        };

        match result {
            Ok(id) => {
                self.select_id(id);
                Mode::List
            }
            Err(ClipmemoError::Validation) => {
                self.show_notice(ClipmemoError::Validation.to_string(), NoticeKind::Error);
                Mode::Form(form)
            }
            Err(e) => {
                self.report(e);
                Mode::Form(form)
            }
        }
    }

    fn copy_selected(&mut self) {
        let Some(content) = self.selected_snippet().map(|s| s.content.clone()) else {
            return;
        };
        match self.clipboard.write_text(&content) {
            Ok(()) => self.show_notice("Copied!", NoticeKind::Info),
            Err(e) => self.show_notice(format!("Copy failed: {}", e), NoticeKind::Error),
        }
    }

    fn move_selected(&mut self, up: bool) {
        let Some(id) = self.selected_snippet().map(|s| s.id) else {
            return;
        };
        let moved = if up {
            self.store.move_up(id)
        } else {
            self.store.move_down(id)
        };
        match moved {
            Ok(_) => self.select_id(id),
            Err(e) => self.report(e),
        }
    }
}
