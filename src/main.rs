use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row as TableRow, Table, TableState};

use gridiron_terminal::feed;
use gridiron_terminal::remap::AliasTable;
use gridiron_terminal::sort::SortDirection;
use gridiron_terminal::state::{
    AppState, Delta, ProviderCommand, Screen, Slot, apply_delta,
};
use gridiron_terminal::store::{Row, cell};

struct App {
    state: AppState,
    should_quit: bool,
    cmd_tx: mpsc::Sender<ProviderCommand>,
}

impl App {
    fn new(cmd_tx: mpsc::Sender<ProviderCommand>) -> Self {
        let mut state = AppState::new();
        state.alias_table = AliasTable::load_env();
        Self {
            state,
            should_quit: false,
            cmd_tx,
        }
    }

    fn send(&mut self, commands: Vec<ProviderCommand>) {
        for command in commands {
            if self.cmd_tx.send(command).is_err() {
                self.state.push_log("[WARN] Provider unavailable");
            }
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.state.search_input {
            self.on_search_key(key);
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            KeyCode::Char('B') => {
                let commands = self.state.back_to_league();
                self.send(commands);
            }
            KeyCode::Esc | KeyCode::Char('b') => {
                let commands = self.state.back();
                self.send(commands);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.visible_row_count();
                self.state.select_next(count);
            }
            KeyCode::Up | KeyCode::Char('k') => self.state.select_prev(),
            KeyCode::Right | KeyCode::Char('l') => {
                let count = self.state.visible_fields().len();
                self.state.column_next(count);
            }
            KeyCode::Left | KeyCode::Char('h') => self.state.column_prev(),
            KeyCode::Char('s') => self.state.sort_by_cursor(),
            _ => self.on_screen_key(key),
        }
    }

    fn on_screen_key(&mut self, key: KeyEvent) {
        match self.state.screen {
            Screen::League => match key.code {
                KeyCode::Tab | KeyCode::Char('c') => {
                    let commands = self.state.cycle_category();
                    self.send(commands);
                }
                KeyCode::Char('r') => {
                    let category = self.state.category;
                    let commands = self.state.set_category(category);
                    self.send(commands);
                }
                KeyCode::Char('/') => {
                    if self.state.category.has_players() {
                        self.state.search_input = true;
                    }
                }
                KeyCode::Char('f') => self.state.next_facet(),
                KeyCode::Char('v') => self.state.cycle_facet_value(),
                KeyCode::Char('V') => self.state.clear_facet_value(),
                KeyCode::Enter | KeyCode::Char('d') => {
                    let commands = self.state.select_player();
                    self.send(commands);
                }
                _ => {}
            },
            Screen::PlayerWeekly => match key.code {
                KeyCode::Char('t') => self.state.toggle_player_tab(),
                KeyCode::Char('y') => {
                    let commands = self.state.cycle_season();
                    self.send(commands);
                }
                KeyCode::Enter | KeyCode::Char('d') => self.state.open_game(),
                _ => {}
            },
            Screen::PlayerCareer => match key.code {
                KeyCode::Char('t') => self.state.toggle_player_tab(),
                KeyCode::Tab => self.state.cycle_career_tab(),
                _ => {}
            },
            Screen::GameDetail => {}
        }
    }

    fn on_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.state.search_input = false,
            KeyCode::Backspace => {
                // Clearing search must not disturb active facet filters;
                // the view re-derives from the full store each draw.
                self.state.search.pop();
                self.state.selected = 0;
            }
            KeyCode::Char(c) => {
                self.state.search.push(c);
                self.state.selected = 0;
            }
            _ => {}
        }
    }

    fn visible_row_count(&self) -> usize {
        match self.state.screen {
            Screen::League => self.state.league_rows().len(),
            Screen::PlayerWeekly => self.state.weekly_display_rows().len(),
            Screen::PlayerCareer => self.state.career_rows().len(),
            Screen::GameDetail => 0,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter alternate screen")?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend).context("failed to build terminal")?;

    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    feed::spawn_provider(tx, cmd_rx);

    let mut app = App::new(cmd_tx);
    let initial = app.state.initial_commands();
    app.send(initial);
    let res = run_app(&mut terminal, &mut app, rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<Delta>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(&app.state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match app.state.screen {
        Screen::League => render_league(frame, chunks[1], &app.state),
        Screen::PlayerWeekly => render_weekly(frame, chunks[1], &app.state),
        Screen::PlayerCareer => render_career(frame, chunks[1], &app.state),
        Screen::GameDetail => render_game(frame, chunks[1], &app.state),
    }

    let footer =
        Paragraph::new(footer_text(&app.state)).block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[2]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let title = match state.screen {
        Screen::League => state.category.label().to_string(),
        Screen::PlayerWeekly => match &state.player {
            Some(p) => format!("{} | Weekly {} ({})", p.display_name, state.season, p.position),
            None => "Weekly Stats".to_string(),
        },
        Screen::PlayerCareer => match &state.player {
            Some(p) => {
                let stat = state
                    .careers
                    .get(state.career_tab)
                    .map(|(st, _)| st.label())
                    .unwrap_or("Career");
                format!("{} | Career {}", p.display_name, stat)
            }
            None => "Career Stats".to_string(),
        },
        Screen::GameDetail => match (&state.player, &state.game) {
            (Some(p), Some(g)) => {
                format!("{} | {} @ {}", p.display_name, g.away_team, g.home_team)
            }
            _ => "Game Detail".to_string(),
        },
    };
    let sort = match &state.sort.column {
        Some(column) => {
            let arrow = match state.sort.direction {
                SortDirection::Ascending => "^",
                SortDirection::Descending => "v",
            };
            format!(" | Sort: {column} {arrow}")
        }
        None => String::new(),
    };
    let search = if state.search.is_empty() && !state.search_input {
        String::new()
    } else {
        format!(" | Search: {}_", state.search)
    };
    format!("GRIDIRON TERMINAL | {title}{sort}{search}")
}

fn footer_text(state: &AppState) -> String {
    let hints = match state.screen {
        Screen::League => {
            "Tab Category | / Search | f/v/V Facets | j/k Row | h/l Col | s Sort | Enter Player | q Quit"
        }
        Screen::PlayerWeekly => {
            "t Career | y Season | j/k Row | h/l Col | s Sort | Enter Game | Esc Back | q Quit"
        }
        Screen::PlayerCareer => {
            "t Weekly | Tab Stat Type | j/k Row | h/l Col | s Sort | Esc Back | q Quit"
        }
        Screen::GameDetail => "Esc Back | B Top | q Quit",
    };
    match state.log.last() {
        Some(line) => format!("{hints}\n{line}"),
        None => hints.to_string(),
    }
}

fn render_league(frame: &mut Frame, area: Rect, state: &AppState) {
    let facet_columns = state.facet_columns();
    let (facet_area, table_area) = if facet_columns.is_empty() {
        (None, area)
    } else {
        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(area);
        (Some(sections[0]), sections[1])
    };

    if let Some(facet_area) = facet_area {
        let parts: Vec<String> = facet_columns
            .iter()
            .enumerate()
            .map(|(i, facet)| {
                let marker = if i == state.active_facet { ">" } else { " " };
                let value = state.selection.get(facet).unwrap_or("All");
                format!("{marker}{facet}: {value}")
            })
            .collect();
        let line = Paragraph::new(parts.join("  |  ")).style(Style::default().fg(Color::Cyan));
        frame.render_widget(line, facet_area);
    }

    let rows = state.league_rows();
    if state.league.fields.is_empty() || rows.is_empty() {
        render_empty(frame, table_area, state, Slot::League);
        return;
    }
    render_table(frame, table_area, state, &state.league.fields, &rows, true);
}

fn render_weekly(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    if let Some(player) = &state.player {
        let profile = format!(
            "{} | {} #{} | Team: {} | Experience: {} | Record: {}",
            player.display_name,
            player.position,
            if player.number.is_empty() { "?" } else { &player.number },
            player.team_abbr,
            player.experience,
            state.player_record(),
        );
        let line = Paragraph::new(profile)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(line, sections[0]);
    }

    let groups = state.weekly_groups();
    if groups.is_empty() {
        render_empty(frame, sections[1], state, Slot::Weekly);
        return;
    }

    let fields = state.weekly_fields();
    let mut constraints: Vec<Constraint> = groups
        .iter()
        .map(|(_, rows)| Constraint::Length(rows.len() as u16 + 3))
        .collect();
    constraints.push(Constraint::Min(0));
    let group_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(sections[1]);

    let mut offset = 0usize;
    for (i, (game_type, rows)) in groups.iter().enumerate() {
        let inner = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(group_areas[i]);
        let title = Paragraph::new(game_type.as_str())
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        frame.render_widget(title, inner[0]);

        let selected = state
            .selected
            .checked_sub(offset)
            .filter(|rel| *rel < rows.len());
        render_table_with_selection(frame, inner[1], state, &fields, rows, selected);
        offset += rows.len();
    }
}

fn render_career(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let tabs: Vec<String> = state
        .careers
        .iter()
        .enumerate()
        .map(|(i, (stat_type, _))| {
            if i == state.career_tab {
                format!("[{}]", stat_type.label())
            } else {
                format!(" {} ", stat_type.label())
            }
        })
        .collect();
    let tab_line = Paragraph::new(tabs.join(" ")).style(Style::default().fg(Color::Cyan));
    frame.render_widget(tab_line, sections[0]);

    let rows = state.career_rows();
    let fields = state.visible_fields();
    if fields.is_empty() || rows.is_empty() {
        let slot = state
            .careers
            .get(state.career_tab)
            .map(|(st, _)| Slot::Career(*st))
            .unwrap_or(Slot::Weekly);
        render_empty(frame, sections[1], state, slot);
        return;
    }
    render_table(frame, sections[1], state, &fields, &rows, true);
}

fn render_game(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(detail) = &state.game else {
        let empty = Paragraph::new("No game selected").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    };

    let mut lines = vec![
        format!(
            "{} ({})  @  {} ({})",
            detail.away_team, detail.away_record, detail.home_team, detail.home_record
        ),
        format!(
            "Score: {} - {}  |  Week {}  |  {}  |  Season {}",
            detail.game.away_score(),
            detail.game.home_score(),
            detail.game.week,
            detail.game.date,
            detail.season
        ),
        String::new(),
    ];
    let fields = state.weekly_fields();
    for field in &fields {
        let value = cell(&detail.row, field);
        if !value.is_empty() {
            lines.push(format!("{field}: {value}"));
        }
    }

    let block = Block::default().borders(Borders::ALL).title("Game");
    let paragraph = Paragraph::new(lines.join("\n")).block(block);
    frame.render_widget(paragraph, area);
}

fn render_empty(frame: &mut Frame, area: Rect, state: &AppState, slot: Slot) {
    let message = match state.load_error(slot) {
        Some(error) => format!("No data available ({error})"),
        None => "No data available".to_string(),
    };
    let empty = Paragraph::new(message).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(empty, area);
}

fn render_table(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    fields: &[String],
    rows: &[Row],
    follow_cursor: bool,
) {
    let selected = follow_cursor.then_some(state.selected.min(rows.len().saturating_sub(1)));
    render_table_with_selection(frame, area, state, fields, rows, selected);
}

fn render_table_with_selection(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    fields: &[String],
    rows: &[Row],
    selected: Option<usize>,
) {
    let header_cells = fields.iter().enumerate().map(|(i, field)| {
        let mut label = field.clone();
        if state.sort.column.as_deref() == Some(field) {
            label.push_str(match state.sort.direction {
                SortDirection::Ascending => " ^",
                SortDirection::Descending => " v",
            });
        }
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if i == state.column_cursor {
            style = style.fg(Color::Black).bg(Color::Cyan);
        }
        Cell::from(label).style(style)
    });
    let header = TableRow::new(header_cells).height(1);

    let body = rows.iter().map(|row| {
        TableRow::new(
            fields
                .iter()
                .map(|field| Cell::from(cell(row, field).to_string())),
        )
    });

    let widths: Vec<Constraint> = fields
        .iter()
        .map(|field| Constraint::Length((field.len().clamp(4, 18) + 2) as u16))
        .collect();

    let table = Table::new(body, widths)
        .header(header)
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Green));

    let mut table_state = TableState::default();
    table_state.select(selected);
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let width = area.width.min(64);
    let height = area.height.min(16);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let text = "League: Tab cycles category, / searches players,\n\
                f picks a facet, v cycles its value, V clears it.\n\
                Enter opens the selected player.\n\
                \n\
                Player: t toggles weekly/career, y cycles season,\n\
                Enter opens the selected game, Esc goes back.\n\
                \n\
                Anywhere: j/k rows, h/l columns, s sorts the cursor\n\
                column, B returns to the league view, q quits.";
    let block = Block::default().borders(Borders::ALL).title("Help");
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(text).block(block), popup);
}
