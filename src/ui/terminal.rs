use std::io::{self, Stdout};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::{Frame, Terminal};
use thiserror::Error;

use crate::actions::album_actions::AlbumApi;
use crate::models::album::Album;
use crate::models::form::AlbumForm;
use crate::ui::cards::{album_cards, AlbumCard};
use crate::ui::controller::AlbumController;
use crate::ui::AlbumView;

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("Terminal error: {0}")]
    Io(io::Error),
}

impl From<io::Error> for TerminalError {
    fn from(err: io::Error) -> Self {
        TerminalError::Io(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Title,
    Artist,
    Price,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Title,
            Focus::Title => Focus::Artist,
            Focus::Artist => Focus::Price,
            Focus::Price => Focus::Search,
        }
    }

    fn previous(self) -> Self {
        match self {
            Focus::Search => Focus::Price,
            Focus::Title => Focus::Search,
            Focus::Artist => Focus::Title,
            Focus::Price => Focus::Artist,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Search,
    Submit,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListContent {
    Cards(Vec<AlbumCard>),
    Message(String),
}

/// Everything the terminal page shows, independent of the terminal itself.
#[derive(Debug)]
pub struct Screen {
    search_input: String,
    form: AlbumForm,
    focus: Focus,
    list: ListContent,
    scroll: u16,
    prompt: Option<String>,
}

impl Default for Screen {
    fn default() -> Self {
        Screen {
            search_input: String::new(),
            form: AlbumForm::default(),
            focus: Focus::Search,
            list: ListContent::Cards(Vec::new()),
            scroll: 0,
            prompt: None,
        }
    }
}

impl Screen {
    fn focused_field(&mut self) -> &mut String {
        match self.focus {
            Focus::Search => &mut self.search_input,
            Focus::Title => &mut self.form.title,
            Focus::Artist => &mut self.form.artist,
            Focus::Price => &mut self.form.price,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }
        match key.code {
            KeyCode::Esc => Action::Quit,
            KeyCode::Enter if self.focus == Focus::Search => Action::Search,
            KeyCode::Enter => Action::Submit,
            KeyCode::Tab => {
                self.focus = self.focus.next();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                Action::None
            }
            KeyCode::Backspace => {
                self.focused_field().pop();
                Action::None
            }
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            KeyCode::Char(c) => {
                self.focused_field().push(c);
                Action::None
            }
            _ => Action::None,
        }
    }
}

/// Keys that dismiss a prompt.
fn acknowledges(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter | KeyCode::Esc)
}

fn input<'a>(title: &'a str, value: &'a str, focused: bool) -> Paragraph<'a> {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Paragraph::new(value).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    )
}

fn card_lines(list: &ListContent) -> Vec<Line<'_>> {
    match list {
        ListContent::Message(message) => vec![Line::from(message.as_str())],
        ListContent::Cards(cards) => cards
            .iter()
            .flat_map(|card| {
                [
                    Line::from(Span::styled(
                        card.title.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(format!("Artist: {}", card.artist)),
                    Line::from(format!("Price: {}", card.price)),
                    Line::from(""),
                ]
            })
            .collect(),
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Column just past the typed text, clamped to the inside of the field border.
fn cursor_column(area: Rect, value: &str) -> u16 {
    let offset = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
    area.x
        .saturating_add(1)
        .saturating_add(offset)
        .min(area.right().saturating_sub(2))
}

pub fn draw(frame: &mut Frame, screen: &Screen) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.size());
    let form_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(40),
            Constraint::Percentage(20),
        ])
        .split(rows[1]);

    let fields = [
        (Focus::Search, "Search by ID", screen.search_input.as_str(), rows[0]),
        (Focus::Title, "Title", screen.form.title.as_str(), form_row[0]),
        (Focus::Artist, "Artist", screen.form.artist.as_str(), form_row[1]),
        (Focus::Price, "Price", screen.form.price.as_str(), form_row[2]),
    ];
    for (focus, title, value, area) in fields {
        let focused = focus == screen.focus;
        frame.render_widget(input(title, value, focused), area);
        if focused && screen.prompt.is_none() {
            frame.set_cursor(cursor_column(area, value), area.y.saturating_add(1));
        }
    }

    let albums = Paragraph::new(card_lines(&screen.list))
        .block(Block::default().borders(Borders::ALL).title("Albums"))
        .wrap(Wrap { trim: false })
        .scroll((screen.scroll, 0));
    frame.render_widget(albums, rows[2]);

    frame.render_widget(
        Paragraph::new("Tab: next field  Enter: search / add album  Up/Down: scroll  Esc: quit")
            .style(Style::default().fg(Color::DarkGray)),
        rows[3],
    );

    if let Some(prompt) = &screen.prompt {
        let area = centered_rect(50, 5, frame.size());
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(vec![Line::from(prompt.as_str()), Line::from(""), Line::from("[ OK ]")])
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Notice")),
            area,
        );
    }
}

/// The album page drawn into the user's terminal.
pub struct TerminalView {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    screen: Screen,
}

impl TerminalView {
    pub fn enter() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(TerminalView {
            terminal,
            screen: Screen::default(),
        })
    }

    pub fn draw(&mut self) -> Result<(), TerminalError> {
        let screen = &self.screen;
        self.terminal.draw(|frame| draw(frame, screen))?;
        Ok(())
    }

    fn next_key(&mut self) -> Result<KeyEvent, TerminalError> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }

    pub fn next_action(&mut self) -> Result<Action, TerminalError> {
        let key = self.next_key()?;
        Ok(self.screen.handle_key(key))
    }

    fn wait_for_acknowledgement(&mut self) -> Result<(), TerminalError> {
        self.draw()?;
        while !acknowledges(&self.next_key()?) {}
        Ok(())
    }
}

impl Drop for TerminalView {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

impl AlbumView for TerminalView {
    fn search_input(&self) -> String {
        self.screen.search_input.clone()
    }

    fn album_form(&self) -> AlbumForm {
        self.screen.form.clone()
    }

    fn reset_form(&mut self) {
        self.screen.form.clear();
    }

    fn render_albums(&mut self, albums: &[Album]) {
        self.screen.list = ListContent::Cards(album_cards(albums));
        self.screen.scroll = 0;
    }

    fn render_message(&mut self, message: &str) {
        self.screen.list = ListContent::Message(message.to_string());
        self.screen.scroll = 0;
    }

    fn alert(&mut self, message: &str) {
        self.screen.prompt = Some(message.to_string());
        if let Err(err) = self.wait_for_acknowledgement() {
            tracing::warn!("Could not show prompt {:?}: {}", message, err);
        }
        self.screen.prompt = None;
    }
}

pub async fn run<A: AlbumApi>(api: A) -> Result<(), TerminalError> {
    let mut controller = AlbumController::new(api, TerminalView::enter()?);
    controller.view_mut().draw()?;
    controller.list_all().await;
    loop {
        controller.view_mut().draw()?;
        match controller.view_mut().next_action()? {
            Action::Search => {
                controller.search().await;
            }
            Action::Submit => {
                controller.create().await;
            }
            Action::Quit => break,
            Action::None => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::actions::testing::sample_albums;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut Screen, text: &str) {
        for c in text.chars() {
            assert_eq!(screen.handle_key(press(KeyCode::Char(c))), Action::None);
        }
    }

    fn rendered(screen: &Screen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| draw(frame, screen)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol.as_str())
            .collect()
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let mut screen = Screen::default();
        type_text(&mut screen, "42");
        assert_eq!(screen.search_input, "42");

        screen.handle_key(press(KeyCode::Backspace));
        assert_eq!(screen.search_input, "4");
    }

    #[test]
    fn tab_walks_through_the_form() {
        let mut screen = Screen::default();
        screen.handle_key(press(KeyCode::Tab));
        type_text(&mut screen, "A");
        screen.handle_key(press(KeyCode::Tab));
        type_text(&mut screen, "B");
        screen.handle_key(press(KeyCode::Tab));
        type_text(&mut screen, "12.5");
        assert_eq!(screen.form, AlbumForm::new("A", "B", "12.5"));

        screen.handle_key(press(KeyCode::Tab));
        assert_eq!(screen.focus, Focus::Search);
        screen.handle_key(press(KeyCode::BackTab));
        assert_eq!(screen.focus, Focus::Price);
    }

    #[test]
    fn enter_searches_or_submits_by_focus() {
        let mut screen = Screen::default();
        assert_eq!(screen.handle_key(press(KeyCode::Enter)), Action::Search);
        screen.handle_key(press(KeyCode::Tab));
        assert_eq!(screen.handle_key(press(KeyCode::Enter)), Action::Submit);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut screen = Screen::default();
        assert_eq!(screen.handle_key(press(KeyCode::Esc)), Action::Quit);
        assert_eq!(
            screen.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(screen.search_input, "");
    }

    #[test]
    fn prompts_are_acknowledged_with_enter_or_escape() {
        assert!(acknowledges(&press(KeyCode::Enter)));
        assert!(acknowledges(&press(KeyCode::Esc)));
        assert!(!acknowledges(&press(KeyCode::Char('x'))));
    }

    #[test]
    fn draws_album_cards() {
        let screen = Screen {
            list: ListContent::Cards(album_cards(&sample_albums())),
            ..Screen::default()
        };
        let text = rendered(&screen);
        assert!(text.contains("Blue Train"));
        assert!(text.contains("Artist: Gerry Mulligan"));
        assert!(text.contains("Price: $39.99"));
    }

    #[test]
    fn cursor_stays_inside_field_for_huge_input() {
        let area = Rect::new(10, 0, 20, 3);
        assert_eq!(cursor_column(area, ""), 11);
        assert_eq!(cursor_column(area, "42"), 13);
        assert_eq!(cursor_column(area, &"x".repeat(70_000)), 28);
    }

    #[test]
    fn draws_screen_with_huge_search_input() {
        let screen = Screen {
            search_input: "9".repeat(70_000),
            ..Screen::default()
        };
        assert!(rendered(&screen).contains("Search by ID"));
    }

    #[test]
    fn draws_prompt_over_the_page() {
        let screen = Screen {
            list: ListContent::Message("Album not found. Please try another ID.".to_string()),
            prompt: Some("Album added successfully!".to_string()),
            ..Screen::default()
        };
        let text = rendered(&screen);
        assert!(text.contains("Notice"));
        assert!(text.contains("Album added successfully!"));
    }
}
