use crate::app::{App, Mode, NoticeKind, PendingDelete};
use crate::clipboard::ClipboardWriter;
use crate::error::Result;
use crate::form::{FormField, SnippetForm};
use crate::storage::KeyValueStorage;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::{self, stdout};
use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_millis(250);

/// Run the interactive snippet list until the user quits
pub fn display_snippet_manager<S, C>(app: &mut App<S, C>) -> Result<()>
where
    S: KeyValueStorage,
    C: ClipboardWriter,
{
    enable_raw_mode()?;
    let mut terminal = setup_or_restore(
        || {
            execute!(stdout(), EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout()))
        },
        restore_terminal,
    )?;
    let result = run_ui(&mut terminal, app);

    // Clean up terminal
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Run `setup`, calling `restore` before handing back any error
fn setup_or_restore<T>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> Result<T> {
    setup().map_err(|e| {
        restore();
        e.into()
    })
}

/// Best-effort reset used when setup fails halfway
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(stdout(), LeaveAlternateScreen);
}

/// Main UI loop
fn run_ui<S, C>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S, C>,
) -> Result<()>
where
    S: KeyValueStorage,
    C: ClipboardWriter,
{
    while !app.should_quit() {
        terminal.draw(|f| draw(f, app))?;

        // Poll with a timeout so the copy notice can disappear on its own
        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
        app.expire_notice(Instant::now());
    }
    Ok(())
}

pub fn draw<B, S, C>(f: &mut Frame<B>, app: &App<S, C>)
where
    B: Backend,
    S: KeyValueStorage,
    C: ClipboardWriter,
{
    let size = f.size();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)].as_ref())
        .split(size);

    draw_list(f, app, layout[0]);
    draw_footer(f, app, layout[1]);

    match app.mode() {
        Mode::List => {}
        Mode::Form(form) => draw_form(f, form, size),
        Mode::Confirm(pending) => draw_confirm(f, pending, size),
    }
}

fn draw_list<B, S, C>(f: &mut Frame<B>, app: &App<S, C>, area: Rect)
where
    B: Backend,
    S: KeyValueStorage,
    C: ClipboardWriter,
{
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" clipmemo ")
        .style(Style::default().bg(Color::Black).fg(Color::White));

    if app.snippets().is_empty() {
        let message = Paragraph::new(Line::from(vec![
            Span::raw("No memos yet. Press "),
            Span::styled("a", Style::default().fg(Color::Yellow)),
            Span::raw(" to add one."),
        ]))
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(message, area);
        return;
    }

    let preview_width = area.width.saturating_sub(6) as usize;
    let items: Vec<ListItem> = app
        .snippets()
        .iter()
        .map(|snippet| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    snippet.label.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    snippet.preview(preview_width),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(app.selected());
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_footer<B, S, C>(f: &mut Frame<B>, app: &App<S, C>, area: Rect)
where
    B: Backend,
    S: KeyValueStorage,
    C: ClipboardWriter,
{
    let line = match app.notice() {
        Some(notice) => {
            let color = match notice.kind {
                NoticeKind::Info => Color::Green,
                NoticeKind::Error => Color::Red,
            };
            Line::from(Span::styled(
                notice.text.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        }
        None => help_line(app.mode()),
    };

    let footer = Paragraph::new(line)
        .block(Block::default().borders(Borders::TOP))
        .style(Style::default().bg(Color::Black));
    f.render_widget(footer, area);
}

fn help_line(mode: &Mode) -> Line<'static> {
    let keys: &[(&'static str, &'static str)] = match mode {
        Mode::List => &[
            ("↑/↓", "Navigate"),
            ("Enter", "Copy"),
            ("a", "Add"),
            ("e", "Edit"),
            ("d", "Delete"),
            ("Shift+↑/↓", "Move"),
            ("q", "Quit"),
        ],
        Mode::Form(form) if form.editing.is_some() => &[
            ("Tab", "Switch field"),
            ("Alt+Enter", "New line"),
            ("Ctrl+S", "Save"),
            ("Ctrl+D", "Delete"),
            ("Esc", "Cancel"),
        ],
        Mode::Form(_) => &[
            ("Tab", "Switch field"),
            ("Alt+Enter", "New line"),
            ("Ctrl+S", "Save"),
            ("Esc", "Cancel"),
        ],
        Mode::Confirm(_) => &[("y", "Delete"), ("any key", "Cancel")],
    };

    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (key, action) in keys {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!(": {}  ", action)));
    }
    Line::from(spans)
}

fn draw_form<B: Backend>(f: &mut Frame<B>, form: &SnippetForm, size: Rect) {
    let area = centered_rect(70, 50, size);
    f.render_widget(Clear, area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .title(form.title())
        .style(Style::default().bg(Color::Black).fg(Color::White));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)].as_ref())
        .split(inner);

    let field_style = |field: FormField| {
        if form.field == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let label = Paragraph::new(form.label.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Label ")
            .border_style(field_style(FormField::Label)),
    );
    f.render_widget(label, rows[0]);

    let content = Paragraph::new(form.content.as_str())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Content ")
                .border_style(field_style(FormField::Content)),
        );
    f.render_widget(content, rows[1]);

    let target = match form.field {
        FormField::Label => rows[0],
        FormField::Content => rows[1],
    };
    let (x, y) = cursor_cell(target, form.cursor_line_col());
    f.set_cursor(x, y);
}

fn draw_confirm<B: Backend>(f: &mut Frame<B>, pending: &PendingDelete, size: Rect) {
    let area = centered_rect(50, 20, size);
    f.render_widget(Clear, area);

    let text = vec![
        Line::from(format!("Delete \"{}\"?", pending.label)),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(Color::Red)),
            Span::raw(": delete   any other key: cancel"),
        ]),
    ];
    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Confirm ")
                .style(Style::default().bg(Color::Black).fg(Color::White)),
        );
    f.render_widget(dialog, area);
}

/// Screen cell for a (line, column) cursor inside a bordered field.
///
/// Columns past the right edge park on the last cell; soft-wrapped lines are
/// not accounted for.
fn cursor_cell(field: Rect, (line, col): (usize, usize)) -> (u16, u16) {
    let max_col = field.width.saturating_sub(3);
    let max_line = field.height.saturating_sub(3);
    let col = (col.min(u16::MAX as usize) as u16).min(max_col);
    let line = (line.min(u16::MAX as usize) as u16).min(max_line);
    (field.x + 1 + col, field.y + 1 + line)
}

/// Rect of `percent_x` by `percent_y` centered in `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
