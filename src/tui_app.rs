use crate::api_client::DirectoryClient;
use crate::models::User;
use crate::query_view::{project, QueryEvent, QueryState, PAGE_SIZE};
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::io;
use tui_input::{backend::crossterm::EventHandler, Input};

#[derive(Clone, PartialEq)]
enum AppMode {
    Search,
    Results,
    Detail,
}

/// Where the directory load stands. The fetch happens exactly once
/// per session; until it completes the query view sees no records.
enum LoadState {
    Loading,
    Ready(Vec<User>),
    Failed(String),
}

pub struct DirectoryApp {
    client: DirectoryClient,
    input: Input,
    mode: AppMode,
    load_state: LoadState,
    query: QueryState,
    table_state: TableState,
    detail: Option<User>,
    show_help: bool,
    status_message: String,
}

impl DirectoryApp {
    pub fn new(client: DirectoryClient) -> Self {
        Self {
            client,
            input: Input::default(),
            mode: AppMode::Search,
            load_state: LoadState::Loading,
            query: QueryState::default(),
            table_state: TableState::default(),
            detail: None,
            show_help: false,
            status_message: "Loading users...".to_string(),
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        // Paint the loading screen once before the blocking fetch so
        // the user is not staring at a blank terminal.
        terminal.draw(|f| self.ui(f))?;
        self.load_directory();

        loop {
            terminal.draw(|f| self.ui(f))?;

            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc => {
                        if self.show_help {
                            self.show_help = false;
                        } else if self.mode == AppMode::Detail {
                            self.mode = AppMode::Results;
                            self.detail = None;
                        } else if self.mode == AppMode::Results {
                            self.mode = AppMode::Search;
                        } else {
                            break; // Exit app
                        }
                    }
                    KeyCode::F(1) => {
                        self.show_help = !self.show_help;
                    }
                    KeyCode::Enter => match self.mode {
                        AppMode::Search => self.submit_search(),
                        AppMode::Results => self.open_detail(),
                        AppMode::Detail => {}
                    },
                    KeyCode::Char('/') if self.mode == AppMode::Results => {
                        self.mode = AppMode::Search;
                    }
                    KeyCode::Char('q') if self.mode != AppMode::Search => {
                        break;
                    }
                    KeyCode::Backspace if self.mode == AppMode::Detail => {
                        self.mode = AppMode::Results;
                        self.detail = None;
                    }
                    KeyCode::Up | KeyCode::Down => match self.mode {
                        AppMode::Results => self.handle_navigation(key.code),
                        AppMode::Search => {
                            if key.code == KeyCode::Down && self.has_records() {
                                self.mode = AppMode::Results;
                                self.ensure_selection();
                            }
                        }
                        AppMode::Detail => {}
                    },
                    KeyCode::Left | KeyCode::PageUp => {
                        if self.mode == AppMode::Results {
                            self.previous_page();
                        }
                    }
                    KeyCode::Right | KeyCode::PageDown => {
                        if self.mode == AppMode::Results {
                            self.next_page();
                        }
                    }
                    _ => {
                        if self.mode == AppMode::Search {
                            self.input.handle_event(&Event::Key(key));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Single fetch per session; a failure is terminal for the data
    /// but the UI stays up to show it.
    fn load_directory(&mut self) {
        match self.client.fetch_users() {
            Ok(users) => {
                self.status_message = format!(
                    "{} users loaded - type to search, Enter to filter",
                    users.len()
                );
                self.load_state = LoadState::Ready(users);
            }
            Err(e) => {
                tracing::error!(target: "api", "Directory load failed: {}", e);
                self.status_message = format!("Load failed: {}", e);
                self.load_state = LoadState::Failed(e.to_string());
            }
        }
    }

    fn has_records(&self) -> bool {
        matches!(self.load_state, LoadState::Ready(_))
    }

    fn records(&self) -> &[User] {
        match &self.load_state {
            LoadState::Ready(users) => users,
            _ => &[],
        }
    }

    fn submit_search(&mut self) {
        let term = self.input.value().to_string();
        self.query.apply(QueryEvent::SearchSubmitted(term));

        let page = project(self.records(), &self.query.term, self.query.page);
        self.status_message = if self.query.term.is_empty() {
            format!("Showing all {} users", page.matching)
        } else {
            format!("{} users match '{}'", page.matching, self.query.term)
        };

        if self.has_records() {
            self.mode = AppMode::Results;
            self.ensure_selection();
        }
    }

    fn current_page_len(&self) -> usize {
        project(self.records(), &self.query.term, self.query.page)
            .users
            .len()
    }

    fn ensure_selection(&mut self) {
        if self.current_page_len() > 0 {
            self.table_state.select(Some(0));
        } else {
            self.table_state.select(None);
        }
    }

    fn handle_navigation(&mut self, key: KeyCode) {
        let num_rows = self.current_page_len();
        if num_rows == 0 {
            return;
        }

        let current = self.table_state.selected().unwrap_or(0);
        let new_selection = match key {
            KeyCode::Up => {
                if current > 0 {
                    current - 1
                } else {
                    num_rows - 1
                }
            }
            KeyCode::Down => {
                if current < num_rows - 1 {
                    current + 1
                } else {
                    0
                }
            }
            _ => current,
        };
        self.table_state.select(Some(new_selection));
    }

    fn next_page(&mut self) {
        let total_pages = project(self.records(), &self.query.term, self.query.page).total_pages;
        if self.query.page < total_pages {
            let next = self.query.page + 1;
            self.query.apply(QueryEvent::PageSelected(next));
            self.ensure_selection();
        }
    }

    fn previous_page(&mut self) {
        if self.query.page > 1 {
            let prev = self.query.page - 1;
            self.query.apply(QueryEvent::PageSelected(prev));
            self.ensure_selection();
        }
    }

    /// Fetch the selected record's detail. The detail endpoint is hit
    /// fresh rather than reusing the loaded list.
    fn open_detail(&mut self) {
        let selected = match self.table_state.selected() {
            Some(idx) => idx,
            None => return,
        };

        let page = project(self.records(), &self.query.term, self.query.page);
        let id = match page.users.get(selected) {
            Some(user) => user.id,
            None => return,
        };

        match self.client.fetch_user(id) {
            Ok(user) => {
                self.status_message = format!("Viewing {}", user.name);
                self.detail = Some(user);
                self.mode = AppMode::Detail;
            }
            Err(e) => {
                tracing::error!(target: "api", "Detail fetch failed for {}: {}", id, e);
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    fn ui(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search input
                Constraint::Min(5),    // Results / detail area
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());

        // Search input area
        let input_block = Block::default()
            .borders(Borders::ALL)
            .title("Search by name or email");

        let input_style = if self.mode == AppMode::Search {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };

        let input_paragraph = Paragraph::new(self.input.value())
            .block(input_block)
            .style(input_style);
        f.render_widget(input_paragraph, chunks[0]);

        if self.mode == AppMode::Search {
            f.set_cursor_position((
                chunks[0].x + self.input.visual_cursor() as u16 + 1,
                chunks[0].y + 1,
            ));
        }

        // Main area
        match &self.load_state {
            LoadState::Loading => {
                let loading = Paragraph::new("Loading users...")
                    .block(Block::default().borders(Borders::ALL).title("Users"))
                    .style(Style::default().fg(Color::Yellow));
                f.render_widget(loading, chunks[1]);
            }
            LoadState::Failed(err) => {
                let lines = vec![
                    Line::from(Span::styled(
                        "Could not load the user directory",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(err.as_str()),
                    Line::from(""),
                    Line::from("Check the endpoint or USER_API_URL, then restart."),
                ];
                let error = Paragraph::new(lines)
                    .block(Block::default().borders(Borders::ALL).title("Error"))
                    .wrap(Wrap { trim: true });
                f.render_widget(error, chunks[1]);
            }
            LoadState::Ready(users) => {
                if self.mode == AppMode::Detail {
                    if let Some(user) = &self.detail {
                        self.render_detail(f, chunks[1], user);
                    }
                } else {
                    self.render_results(f, chunks[1], users);
                }
            }
        }

        // Status bar
        let status_line = Line::from(vec![
            Span::styled(&self.status_message, Style::default().fg(Color::White)),
            Span::raw(" | "),
            Span::styled(
                match self.mode {
                    AppMode::Search => "SEARCH",
                    AppMode::Results => "LIST",
                    AppMode::Detail => "DETAIL",
                },
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | F1=Help | Esc=Back/Exit"),
        ]);

        let status = Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray));
        f.render_widget(status, chunks[2]);

        if self.show_help {
            self.render_help_popup(f);
        }
    }

    fn render_results(&self, f: &mut Frame, area: Rect, users: &[User]) {
        let page = project(users, &self.query.term, self.query.page);

        if page.users.is_empty() {
            let message = if self.query.term.is_empty() {
                "No users in the directory".to_string()
            } else {
                format!("No users match '{}'", self.query.term)
            };
            let empty = Paragraph::new(message)
                .block(Block::default().borders(Borders::ALL).title("Users"))
                .style(Style::default().fg(Color::Gray));
            f.render_widget(empty, area);
            return;
        }

        let headers = ["Name", "Username", "Email", "Phone", "Company"];
        let header_cells: Vec<ratatui::widgets::Cell> = headers
            .iter()
            .map(|h| ratatui::widgets::Cell::from(*h).style(Style::default().fg(Color::Yellow)))
            .collect();
        let header = Row::new(header_cells).height(1).bottom_margin(1);

        let rows: Vec<Row> = page
            .users
            .iter()
            .map(|user| {
                Row::new(vec![
                    ratatui::widgets::Cell::from(user.name.as_str()),
                    ratatui::widgets::Cell::from(format!("@{}", user.username)),
                    ratatui::widgets::Cell::from(user.email.as_str()),
                    ratatui::widgets::Cell::from(user.phone.as_str()),
                    ratatui::widgets::Cell::from(user.company.name.as_str()),
                ])
                .height(1)
            })
            .collect();

        let num_cols = headers.len();
        let col_width = (area.width.saturating_sub(2)) / num_cols as u16;
        let widths: Vec<Constraint> = (0..num_cols)
            .map(|_| Constraint::Length(col_width))
            .collect();

        let title = format!(
            "Users (page {} of {}, showing {} of {} matching)",
            self.query.page,
            page.total_pages,
            page.users.len(),
            page.matching
        );

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(title))
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol(">> ");

        f.render_stateful_widget(table, area, &mut self.table_state.clone());
    }

    fn render_detail(&self, f: &mut Frame, area: Rect, user: &User) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7),
                Constraint::Length(7),
                Constraint::Length(5),
                Constraint::Min(0),
            ])
            .split(area);

        let personal = Paragraph::new(vec![
            Line::from(format!("Name:     {}", user.name)),
            Line::from(format!("Username: @{}", user.username)),
            Line::from(format!("Email:    {}", user.email)),
            Line::from(format!("Phone:    {}", user.phone)),
            Line::from(format!("Website:  {}", user.website)),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Personal Information"),
        );
        f.render_widget(personal, chunks[0]);

        let address = Paragraph::new(vec![
            Line::from(format!("Street:  {}", user.address.street)),
            Line::from(format!("Suite:   {}", user.address.suite)),
            Line::from(format!("City:    {}", user.address.city)),
            Line::from(format!("Zipcode: {}", user.address.zipcode)),
            Line::from(format!(
                "Geo:     {}, {}",
                user.address.geo.lat, user.address.geo.lng
            )),
        ])
        .block(Block::default().borders(Borders::ALL).title("Address"));
        f.render_widget(address, chunks[1]);

        let company = Paragraph::new(vec![
            Line::from(format!("Name:         {}", user.company.name)),
            Line::from(format!("Catch Phrase: {}", user.company.catch_phrase)),
            Line::from(format!("Business:     {}", user.company.bs)),
        ])
        .block(Block::default().borders(Borders::ALL).title("Company"));
        f.render_widget(company, chunks[2]);
    }

    fn render_help_popup(&self, f: &mut Frame) {
        let area = centered_rect(70, 60, f.area());
        f.render_widget(Clear, area);

        let help_text = vec![
            Line::from(vec![Span::styled(
                "User Directory Help",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from("Search Mode:"),
            Line::from("  Enter     - Apply the search (resets to page 1)"),
            Line::from("  Down      - Jump to the results table"),
            Line::from("  Esc       - Exit application"),
            Line::from(""),
            Line::from("List Mode:"),
            Line::from("  Up/Down       - Select a user"),
            Line::from("  Left/Right    - Previous / next page"),
            Line::from("  Enter         - Open user details"),
            Line::from("  /             - Back to the search box"),
            Line::from("  q             - Quit"),
            Line::from(""),
            Line::from("Detail Mode:"),
            Line::from("  Esc/Backspace - Back to the list"),
            Line::from(""),
            Line::from("Matching is a case-insensitive substring of name or email."),
        ];

        let help_popup = Paragraph::new(help_text)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .wrap(Wrap { trim: true });

        f.render_widget(help_popup, area);
    }
}

// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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

pub fn run_directory_tui(client: DirectoryClient) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = DirectoryApp::new(client);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}
