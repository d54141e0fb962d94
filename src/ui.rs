use crate::dashboard::{Dashboard, View};
use crate::provider::DataProvider;
use crate::task::Task;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;

const HELP: &str = " q quit | r refresh | Up/Down select | Enter detail | Esc back | s sort field | o sort order";

pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    board: &mut Dashboard,
    provider: &DataProvider,
) -> io::Result<()> {
    board.refresh(provider);
    loop {
        terminal.draw(|f| draw(f, board, provider.base_url()))?;

        if let Event::Key(key) = event::read()? {
            let in_list = matches!(board.view, View::List);
            if in_list {
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('r') => board.refresh(provider),
                    KeyCode::Up => board.select_prev(),
                    KeyCode::Down => board.select_next(),
                    KeyCode::Enter => board.open_selected(provider),
                    KeyCode::Char('s') => {
                        board.cycle_sort_field();
                        board.refresh(provider);
                    }
                    KeyCode::Char('o') => {
                        board.flip_sort_order();
                        board.refresh(provider);
                    }
                    _ => {}
                }
            } else {
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Esc | KeyCode::Backspace => board.close_detail(),
                    _ => {}
                }
            }
        }
    }
}

fn draw(f: &mut Frame, board: &Dashboard, base_url: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    match &board.view {
        View::List => draw_list(f, board, chunks[0]),
        View::Detail(task) => draw_detail(f, task, chunks[0]),
    }
    draw_status(f, board, base_url, chunks[1]);
    f.render_widget(
        Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}

fn draw_list(f: &mut Frame, board: &Dashboard, area: Rect) {
    let header = Row::new(["ID", "State", "Result", "Date"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = board
        .tasks
        .iter()
        .map(|t| {
            Row::new(vec![
                Cell::from(t.id.clone()),
                Cell::from(Span::styled(
                    t.state.clone(),
                    Style::default().fg(state_color(&t.state)),
                )),
                Cell::from(t.result_display().to_string()),
                Cell::from(t.date_display()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(36),
            Constraint::Length(10),
            Constraint::Min(20),
            Constraint::Length(26),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title("Task Dashboard")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    )
    .row_highlight_style(
        Style::default()
            .add_modifier(Modifier::BOLD)
            .bg(Color::DarkGray),
    );

    let mut state = TableState::default();
    if !board.tasks.is_empty() {
        state.select(Some(board.selected));
    }
    f.render_stateful_widget(table, area, &mut state);
}

fn draw_detail(f: &mut Frame, task: &Task, area: Rect) {
    let lines = vec![
        field_line("ID", task.id.clone()),
        field_line("State", task.state.clone()),
        field_line("Result", task.result_display().to_string()),
        field_line("Date", task.date_display()),
    ];
    let detail = Paragraph::new(lines).block(
        Block::default()
            .title(format!("Task {}", task.id))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(detail, area);
}

fn field_line(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:>8}: ", name),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}

fn draw_status(f: &mut Frame, board: &Dashboard, base_url: &str, area: Rect) {
    let (text, style) = match &board.status {
        Some(err) => (format!(" {}", err), Style::default().fg(Color::Red)),
        None => (
            format!(
                " {} tasks | sort: {} {} | {}",
                board.total,
                board.sort.field.as_str(),
                board.sort.order.as_str(),
                base_url
            ),
            Style::default().fg(Color::White),
        ),
    };
    f.render_widget(Paragraph::new(text).style(style), area);
}

fn state_color(state: &str) -> Color {
    match state {
        "SUCCESS" => Color::Green,
        "FAILURE" => Color::Red,
        "PENDING" | "STARTED" | "RETRY" => Color::Yellow,
        _ => Color::White,
    }
}
