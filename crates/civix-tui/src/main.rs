//! civix-tui - Terminal dashboard for civic issue triage
//!
//! Tabs for issues, completed records, citizen feedback and the staff
//! profile. Issue mutations go through the core lifecycle controller;
//! everything but the profile lives for the session.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap},
};
use std::io;
use std::time::{Duration, Instant};

use civix_core::{
    Config, DateWindow, Session, Status, StatusCounts, UpdateOutcome, filter, policy,
};

#[derive(Parser)]
#[command(name = "civix-tui")]
#[command(about = "Terminal dashboard for civic issue triage")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a JSON snapshot instead of running the interactive UI
    Snapshot {
        #[command(subcommand)]
        mode: SnapshotMode,
    },
}

#[derive(Subcommand)]
enum SnapshotMode {
    /// Per-status issue counts
    Counts,
    /// All seeded issues
    Issues,
    /// Completed records, most recent first
    Records,
    /// Feedback ranked by rating
    Feedback,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Snapshot { mode }) => run_snapshot_mode(mode),
        None => run_tui(),
    }
}

fn run_snapshot_mode(mode: SnapshotMode) -> Result<()> {
    let config = Config::load_default()?;
    let session = Session::open(config)?;
    let today = chrono::Local::now().date_naive();

    match mode {
        SnapshotMode::Counts => {
            let counts = StatusCounts::tally(session.lifecycle.store().all());
            let snapshot = serde_json::json!({
                "new": counts.new,
                "in_progress": counts.in_progress,
                "completed": counts.completed,
                "rejected": counts.rejected,
                "total": counts.total,
            });
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        SnapshotMode::Issues => {
            println!(
                "{}",
                serde_json::to_string_pretty(session.lifecycle.store().all())?
            );
        }
        SnapshotMode::Records => {
            let records =
                filter::completed_records(session.lifecycle.store().all(), DateWindow::AllTime, today);
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        SnapshotMode::Feedback => {
            let entries = civix_core::feedback::filter_feedback(
                session.feedback.all(),
                DateWindow::AllTime,
                None,
                today,
            );
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }
    Ok(())
}

fn run_tui() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let config = Config::load_default()?;
    let session = Session::open(config)?;
    let mut app = App::new(session);

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let mut last_tick = Instant::now();
    const TICK_RATE: Duration = Duration::from_millis(250);

    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = TICK_RATE
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            let action = parse_key_action(key);
            if app.handle_key_action(action)? {
                return Ok(());
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Issues,
    Records,
    Feedback,
    Profile,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Issues, Tab::Records, Tab::Feedback, Tab::Profile];

    fn title(&self) -> &'static str {
        match self {
            Tab::Issues => "Issues",
            Tab::Records => "Records",
            Tab::Feedback => "Feedback",
            Tab::Profile => "Profile",
        }
    }

    fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppMode {
    Normal,
    Details,
    RejectReason,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
enum KeyAction {
    Quit,
    Up,
    Down,
    Enter,
    Tab,
    Escape,
    Backspace,
    Char(char),
    Noop,
}

fn parse_key_action(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Up => KeyAction::Up,
        KeyCode::Down => KeyAction::Down,
        KeyCode::Enter => KeyAction::Enter,
        KeyCode::Tab => KeyAction::Tab,
        KeyCode::Esc => KeyAction::Escape,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Char(c) => KeyAction::Char(c),
        _ => KeyAction::Noop,
    }
}

/// Transient status line message, cleared after a few ticks
struct StatusMessage {
    text: String,
    is_error: bool,
    shown_at: Instant,
}

struct App {
    session: Session,
    tab: Tab,
    mode: AppMode,

    // Issues tab
    issue_index: usize,
    status_filter: Option<Status>,
    category_index: usize, // 0 = All, then categories() + 1

    // Records tab
    records_window: DateWindow,
    // Feedback tab
    feedback_window: DateWindow,
    area_index: usize, // 0 = All

    reason_input: String,
    status_message: Option<StatusMessage>,
}

impl App {
    fn new(session: Session) -> Self {
        Self {
            session,
            tab: Tab::Issues,
            mode: AppMode::Normal,
            issue_index: 0,
            status_filter: None,
            category_index: 0,
            records_window: DateWindow::AllTime,
            feedback_window: DateWindow::AllTime,
            area_index: 0,
            reason_input: String::new(),
            status_message: None,
        }
    }

    fn today() -> NaiveDate {
        chrono::Local::now().date_naive()
    }

    fn category_filter(&self) -> Option<String> {
        if self.category_index == 0 {
            return None;
        }
        filter::categories(self.session.lifecycle.store().all())
            .get(self.category_index - 1)
            .map(|c| c.to_string())
    }

    fn filtered_issue_ids(&self) -> Vec<String> {
        let category = self.category_filter();
        filter::filter_issues(
            self.session.lifecycle.store().all(),
            self.status_filter,
            category.as_deref(),
        )
        .iter()
        .map(|i| i.id.clone())
        .collect()
    }

    fn selected_issue_id(&self) -> Option<String> {
        self.filtered_issue_ids().get(self.issue_index).cloned()
    }

    fn area_filter(&self) -> Option<String> {
        if self.area_index == 0 {
            return None;
        }
        civix_core::feedback::areas(self.session.feedback.all())
            .get(self.area_index - 1)
            .map(|a| a.to_string())
    }

    fn notify(&mut self, text: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            is_error: false,
            shown_at: Instant::now(),
        });
    }

    fn notify_error(&mut self, text: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            is_error: true,
            shown_at: Instant::now(),
        });
    }

    fn on_tick(&mut self) {
        if let Some(msg) = &self.status_message
            && msg.shown_at.elapsed() > Duration::from_secs(3)
        {
            self.status_message = None;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.filtered_issue_ids().len();
        if len == 0 {
            self.issue_index = 0;
        } else if self.issue_index >= len {
            self.issue_index = len - 1;
        }
    }

    /// Returns true when the app should quit
    fn handle_key_action(&mut self, action: KeyAction) -> Result<bool> {
        match self.mode {
            AppMode::RejectReason => self.handle_reject_reason_key(action),
            AppMode::Details => self.handle_details_key(action),
            AppMode::Help => {
                if matches!(action, KeyAction::Escape | KeyAction::Char('?') | KeyAction::Quit) {
                    self.mode = AppMode::Normal;
                }
                Ok(false)
            }
            AppMode::Normal => self.handle_normal_key(action),
        }
    }

    fn handle_normal_key(&mut self, action: KeyAction) -> Result<bool> {
        match action {
            KeyAction::Quit | KeyAction::Char('q') => return Ok(true),
            KeyAction::Tab => {
                self.tab = self.tab.next();
            }
            KeyAction::Char('1') => self.tab = Tab::Issues,
            KeyAction::Char('2') => self.tab = Tab::Records,
            KeyAction::Char('3') => self.tab = Tab::Feedback,
            KeyAction::Char('4') => self.tab = Tab::Profile,
            KeyAction::Char('?') => self.mode = AppMode::Help,
            KeyAction::Up | KeyAction::Char('k') => {
                if self.tab == Tab::Issues {
                    self.issue_index = self.issue_index.saturating_sub(1);
                }
            }
            KeyAction::Down | KeyAction::Char('j') => {
                if self.tab == Tab::Issues {
                    let len = self.filtered_issue_ids().len();
                    if len > 0 {
                        self.issue_index = (self.issue_index + 1).min(len - 1);
                    }
                }
            }
            KeyAction::Enter => {
                if self.tab == Tab::Issues
                    && let Some(id) = self.selected_issue_id()
                {
                    self.session.lifecycle.select(&id);
                    self.mode = AppMode::Details;
                }
            }
            KeyAction::Char('s') if self.tab == Tab::Issues => {
                self.status_filter = match self.status_filter {
                    None => Some(Status::New),
                    Some(Status::New) => Some(Status::InProgress),
                    Some(Status::InProgress) => Some(Status::Completed),
                    Some(Status::Completed) => Some(Status::Rejected),
                    Some(Status::Rejected) => None,
                };
                self.clamp_selection();
            }
            KeyAction::Char('c') if self.tab == Tab::Issues => {
                let count = filter::categories(self.session.lifecycle.store().all()).len();
                self.category_index = (self.category_index + 1) % (count + 1);
                self.clamp_selection();
            }
            KeyAction::Char('a') if self.tab == Tab::Issues => self.acknowledge_selected(),
            KeyAction::Char('i') if self.tab == Tab::Issues => self.implement_selected(),
            KeyAction::Char('r') if self.tab == Tab::Issues => self.start_reject_selected(),
            KeyAction::Char('d') if self.tab == Tab::Records => {
                self.records_window = next_window(self.records_window);
            }
            KeyAction::Char('d') if self.tab == Tab::Feedback => {
                self.feedback_window = next_window(self.feedback_window);
            }
            KeyAction::Char('f') if self.tab == Tab::Feedback => {
                let count = civix_core::feedback::areas(self.session.feedback.all()).len();
                self.area_index = (self.area_index + 1) % (count + 1);
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_details_key(&mut self, action: KeyAction) -> Result<bool> {
        match action {
            KeyAction::Quit => return Ok(true),
            KeyAction::Escape | KeyAction::Enter | KeyAction::Char('q') => {
                self.session.lifecycle.clear_selection();
                self.mode = AppMode::Normal;
            }
            KeyAction::Char('a') => self.acknowledge_selected(),
            KeyAction::Char('i') => self.implement_selected(),
            KeyAction::Char('r') => self.start_reject_selected(),
            _ => {}
        }
        Ok(false)
    }

    fn handle_reject_reason_key(&mut self, action: KeyAction) -> Result<bool> {
        match action {
            KeyAction::Quit => return Ok(true),
            KeyAction::Escape => {
                self.session.lifecycle.cancel_rejection();
                self.reason_input.clear();
                self.mode = AppMode::Normal;
            }
            KeyAction::Backspace => {
                self.reason_input.pop();
            }
            KeyAction::Char(c) => {
                self.reason_input.push(c);
            }
            KeyAction::Enter => match self.session.lifecycle.submit_rejection(&self.reason_input) {
                Ok(_) => {
                    self.reason_input.clear();
                    self.mode = AppMode::Normal;
                    self.clamp_selection();
                    self.notify("Issue has been rejected.");
                }
                Err(err) => self.notify_error(err.to_string()),
            },
            _ => {}
        }
        Ok(false)
    }

    fn acknowledge_selected(&mut self) {
        let Some(id) = self.current_issue_id() else {
            return;
        };
        match self.session.lifecycle.acknowledge(&id) {
            Ok(_) => self.notify("Issue acknowledged."),
            Err(err) => self.notify_error(err.to_string()),
        }
        self.clamp_selection();
    }

    fn implement_selected(&mut self) {
        let Some(id) = self.current_issue_id() else {
            return;
        };
        match self.session.lifecycle.implement(&id) {
            Ok(issue) => self.notify(format!(
                "Issue is now In Progress (assigned to {}).",
                issue.assigned_to
            )),
            Err(err) => self.notify_error(err.to_string()),
        }
        self.clamp_selection();
    }

    fn start_reject_selected(&mut self) {
        let Some(id) = self.current_issue_id() else {
            return;
        };
        let Some(current) = self.session.lifecycle.store().get(&id).cloned() else {
            return;
        };
        let mut staged = current.clone();
        staged.status = Status::Rejected;
        if self.session.lifecycle.update_issue(staged, true) == UpdateOutcome::RejectionPending {
            self.reason_input.clear();
            self.mode = AppMode::RejectReason;
        }
    }

    /// Issue targeted by quick actions: the details subject when the
    /// details view is open, otherwise the list selection
    fn current_issue_id(&self) -> Option<String> {
        if self.mode == AppMode::Details {
            self.session.lifecycle.selected().map(|i| i.id.clone())
        } else {
            self.selected_issue_id()
        }
    }
}

fn next_window(window: DateWindow) -> DateWindow {
    let idx = DateWindow::ALL
        .iter()
        .position(|w| *w == window)
        .unwrap_or(0);
    DateWindow::ALL[(idx + 1) % DateWindow::ALL.len()]
}

fn status_style(status: Status) -> Style {
    match status {
        Status::New => Style::default().fg(Color::Red),
        Status::InProgress => Style::default().fg(Color::Yellow),
        Status::Completed => Style::default().fg(Color::Green),
        Status::Rejected => Style::default().fg(Color::DarkGray),
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.tab {
        Tab::Issues => draw_issues(f, app, chunks[1]),
        Tab::Records => draw_records(f, app, chunks[1]),
        Tab::Feedback => draw_feedback(f, app, chunks[1]),
        Tab::Profile => draw_profile(f, app, chunks[1]),
    }

    draw_status_line(f, app, chunks[2]);

    match app.mode {
        AppMode::Details => draw_details_popup(f, app),
        AppMode::RejectReason => draw_reject_popup(f, app),
        AppMode::Help => draw_help_popup(f),
        AppMode::Normal => {}
    }
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::ALL.iter().map(|t| Line::from(t.title())).collect();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title(" civix "));
    f.render_widget(tabs, area);
}

fn draw_issues(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let counts = StatusCounts::tally(app.session.lifecycle.store().all());
    let stats = Line::from(vec![
        Span::raw(format!("New: {}  ", counts.new)),
        Span::raw(format!("Total: {}  ", counts.total)),
        Span::styled(
            format!("In Progress: {}  ", counts.in_progress),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!("Completed: {}  ", counts.completed),
            Style::default().fg(Color::Green),
        ),
        Span::styled(
            format!("Rejected: {}", counts.rejected),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(
        Paragraph::new(stats).block(Block::default().borders(Borders::ALL).title(" Overview ")),
        chunks[0],
    );

    let status_label = match app.status_filter {
        None => "All".to_string(),
        Some(s) => s.to_string(),
    };
    let category_label = app.category_filter().unwrap_or_else(|| "All".to_string());
    let title = format!(" Issues  [s]tatus: {status_label}  [c]ategory: {category_label} ");

    let category = app.category_filter();
    let filtered = filter::filter_issues(
        app.session.lifecycle.store().all(),
        app.status_filter,
        category.as_deref(),
    );

    let items: Vec<ListItem> = filtered
        .iter()
        .enumerate()
        .map(|(idx, issue)| {
            let marker = if idx == app.issue_index { "> " } else { "  " };
            let line = Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{:<3}", issue.id), Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("{:<12}", issue.status.to_string()),
                    status_style(issue.status),
                ),
                Span::raw(format!("{:<12}", issue.category)),
                Span::raw(issue.title.clone()),
            ]);
            let item = ListItem::new(line);
            if idx == app.issue_index {
                item.style(Style::default().add_modifier(Modifier::BOLD))
            } else {
                item
            }
        })
        .collect();

    let list = if items.is_empty() {
        List::new([ListItem::new("No issues match the current filters.")])
    } else {
        List::new(items)
    };
    f.render_widget(
        list.block(Block::default().borders(Borders::ALL).title(title)),
        chunks[1],
    );
}

fn draw_records(f: &mut Frame, app: &App, area: Rect) {
    let records = filter::completed_records(
        app.session.lifecycle.store().all(),
        app.records_window,
        App::today(),
    );

    let items: Vec<ListItem> = records
        .iter()
        .map(|issue| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<12}", issue.date.to_string()),
                    Style::default().fg(Color::Green),
                ),
                Span::raw(format!("{:<12}", issue.category)),
                Span::raw(issue.title.clone()),
            ]))
        })
        .collect();

    let list = if items.is_empty() {
        List::new([ListItem::new("No completed issues match the current filters.")])
    } else {
        List::new(items)
    };
    let title = format!(" Completed Records  [d]ate: {} ", app.records_window);
    f.render_widget(
        list.block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}

fn draw_feedback(f: &mut Frame, app: &App, area: Rect) {
    let area_filter = app.area_filter();
    let entries = civix_core::feedback::filter_feedback(
        app.session.feedback.all(),
        app.feedback_window,
        area_filter.as_deref(),
        App::today(),
    );

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let stars: String = (0..5)
                .map(|i| if i < entry.rating { '★' } else { '☆' })
                .collect();
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(stars, Style::default().fg(Color::Yellow)),
                    Span::raw(format!("  {} ({}, {})", entry.name, entry.area, entry.date)),
                ]),
                Line::from(Span::styled(
                    format!("  {}", entry.comment),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();

    let list = if items.is_empty() {
        List::new([ListItem::new("No feedback matches the current filters.")])
    } else {
        List::new(items)
    };
    let area_label = app.area_filter().unwrap_or_else(|| "All".to_string());
    let title = format!(
        " Citizen Feedback  [d]ate: {}  [f] area: {} ",
        app.feedback_window, area_label
    );
    f.render_widget(
        list.block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}

fn draw_profile(f: &mut Frame, app: &App, area: Rect) {
    let profile = app.session.profile.get();
    let lines = vec![
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Email:      {}", profile.email)),
        Line::from(format!("Age:        {}", profile.age)),
        Line::from(format!("Department: {}", profile.department)),
        Line::from(format!("Gender:     {}", profile.gender)),
        Line::from(format!("State:      {}", profile.state)),
        Line::from(format!("Country:    {}", profile.country)),
        Line::from(""),
        Line::from(Span::styled(
            "Edit with: civix profile set --name ...",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Profile ")),
        area,
    );
}

fn draw_status_line(f: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status_message {
        Some(msg) => {
            let style = if msg.is_error {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            Line::from(Span::styled(msg.text.clone(), style))
        }
        None => Line::from(Span::styled(
            "q quit  Tab switch  j/k move  Enter details  a ack  i implement  r reject  ? help",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

fn draw_details_popup(f: &mut Frame, app: &App) {
    let Some(issue) = app.session.lifecycle.selected() else {
        return;
    };
    let area = centered_rect(70, 70, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                issue.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(issue.status.to_string(), status_style(issue.status)),
        ]),
        Line::from(format!(
            "Submitted by {} on {}",
            issue.submitted_by, issue.date
        )),
        Line::from(""),
        Line::from(format!("Category:  {}", issue.category)),
        Line::from(format!("Location:  {}", issue.location)),
        Line::from(format!("Assigned:  {}", issue.assigned_to)),
        Line::from(format!("Image:     {}", issue.image_url)),
        Line::from(""),
        Line::from(Span::styled(
            "Description",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(issue.description.clone()),
    ];
    if !issue.notes.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Official Notes",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for note_line in issue.notes.lines() {
            lines.push(Line::from(note_line.to_string()));
        }
    }
    if !policy::quick_actions(issue.status).is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[a] acknowledge  [i] implement  [r] reject",
            Style::default().fg(Color::Cyan),
        )));
    }

    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Issue Details "));
    f.render_widget(popup, area);
}

fn draw_reject_popup(f: &mut Frame, app: &App) {
    let area = centered_rect(60, 30, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from("Please provide a reason for rejecting this issue."),
        Line::from("The reason will be sent to the citizen."),
        Line::from(""),
        Line::from(vec![
            Span::styled("Reason: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(app.reason_input.clone()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter submit  Esc cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Reject Issue "));
    f.render_widget(popup, area);
}

fn draw_help_popup(f: &mut Frame) {
    let area = centered_rect(50, 50, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from("Tab / 1-4   switch tab"),
        Line::from("j/k, arrows move selection"),
        Line::from("Enter       open issue details"),
        Line::from("s           cycle status filter"),
        Line::from("c           cycle category filter"),
        Line::from("a           acknowledge issue"),
        Line::from("i           implement issue"),
        Line::from("r           reject issue (asks for a reason)"),
        Line::from("d           cycle date window (records/feedback)"),
        Line::from("f           cycle area filter (feedback)"),
        Line::from("q           quit"),
    ];
    let popup = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL).title(" Help "));
    f.render_widget(popup, area);
}
