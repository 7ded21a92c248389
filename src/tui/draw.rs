use crate::analysis::summary::{abbreviate_trail, summarize_ants, summarize_pheromones};
use crate::colony::trail::cycle_length;
use crate::simulation::engine::EngineState;
use crate::tui::app::App;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Color::White;
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Gauge, Padding, Paragraph, Row, Sparkline, Table, Wrap};

pub fn draw_app(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(7),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);

    frame.render_widget(build_header(app), chunks[0]);
    frame.render_widget(build_progress(app), chunks[1]);
    frame.render_widget(build_ant_table(app), middle[0]);
    frame.render_widget(build_best_panel(app), middle[1]);
    frame.render_widget(build_history(app, chunks[3]), chunks[3]);
    frame.render_widget(build_footer(), chunks[4]);
}

fn length_style(length: u64, best: u64) -> Style {
    if length <= best {
        Style::default().fg(Color::Green)
    } else if (length as f64) <= best as f64 * 1.1 {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Red)
    }
}

fn build_header(app: &'_ App) -> Block<'_> {
    let state = match app.engine.state() {
        EngineState::Running if app.auto_run => "running",
        EngineState::Running => "paused",
        EngineState::Terminated => "terminated",
    };
    Block::new()
        .title(Line::from(vec![
            Span::raw(" Antgraph ").style(Style::default().bold().cyan()),
            Span::raw("-").style(Style::default().add_modifier(Modifier::DIM)),
            Span::raw(format!(" {} ", app.scenario())).style(Style::default().bold()),
            Span::raw("-").style(Style::default().add_modifier(Modifier::DIM)),
            Span::raw(format!(" {} ", state)),
        ]))
        .title_alignment(Alignment::Center)
}

fn build_progress(app: &'_ App) -> Gauge<'_> {
    let max_time = app.engine.params().max_time;
    let ticks = app.engine.ticks();
    let ratio = if max_time == 0 {
        1.0
    } else {
        (ticks as f64 / max_time as f64).clamp(0.0, 1.0)
    };
    Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Time "))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!("{} / {}", ticks, max_time))
}

fn build_ant_table(app: &'_ App) -> Table<'_> {
    let graph = app.engine.graph();
    let best = app.engine.best().length();
    let rows = summarize_ants(app.engine.ants(), graph);

    Table::new(
        rows.into_iter().map(|row| {
            Row::new(vec![
                Cell::from(format!("{:>3}", row.id())),
                Cell::from(format!("{:>7}", row.length())).style(length_style(row.length(), best)),
                Cell::from(format!("{:>7}", row.cycle_length())),
                Cell::from(row.trail().to_string()),
            ])
        }),
        [
            Constraint::Length(4),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Min(20),
        ],
    )
    .header(
        Row::new([
            Cell::from("Ant"),
            Cell::from(" Length"),
            Cell::from("  Cycle"),
            Cell::from("Trail"),
        ])
        .style(Style::default().bg(Color::DarkGray).fg(White)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![
                Span::from(" Ants ").style(Style::default().bold()),
            ]))
            .padding(Padding::horizontal(1)),
    )
}

fn build_best_panel(app: &'_ App) -> Paragraph<'_> {
    let graph = app.engine.graph();
    let best = app.engine.best();
    let previous = app.engine.previous_snapshot();
    let current = app.engine.current_snapshot();

    let trend = if current.round_best_length() < previous.round_best_length() {
        "  ↘"
    } else if current.round_best_length() > previous.round_best_length() {
        "  ↗"
    } else {
        "  →"
    };

    let found_at = best
        .found_at()
        .map(|t| format!("tick {}", t))
        .unwrap_or_else(|| "initial colony".to_string());

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Best length  ").dim(),
            Span::raw(best.length().to_string()).bold().green(),
        ]),
        Line::from(vec![
            Span::raw("Closed tour  ").dim(),
            Span::raw(cycle_length(best.trail(), graph).to_string()),
        ]),
        Line::from(vec![
            Span::raw("Found at     ").dim(),
            Span::raw(found_at),
        ]),
        Line::from(vec![
            Span::raw("Round best   ").dim(),
            Span::raw(current.round_best_length().to_string()),
            Span::raw(trend).bold(),
        ]),
        Line::from(Span::raw(abbreviate_trail(current.round_best(), graph)).dim()),
        Line::from(""),
        Line::from(Span::raw(abbreviate_trail(best.trail(), graph)).cyan()),
        Line::from(""),
    ];

    if let Some(summary) = summarize_pheromones(app.engine.pheromones()) {
        let (i, j) = summary.strongest();
        lines.push(Line::from(vec![
            Span::raw("Pheromone    ").dim(),
            Span::raw(format!(
                "{:.4} .. {:.4} (mean {:.4})",
                summary.min(),
                summary.max(),
                summary.mean()
            )),
        ]));
        lines.push(Line::from(vec![
            Span::raw("Strongest    ").dim(),
            Span::raw(format!("{} - {}", graph.label(i), graph.label(j))),
        ]));
    }

    if let Some(err) = app.last_error() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::raw(err.to_string()).red().bold()));
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from(vec![
                    Span::from(" Best trail ").style(Style::default().bold()),
                ]))
                .padding(Padding::horizontal(1)),
        )
}

fn build_history(app: &'_ App, area: Rect) -> Sparkline<'_> {
    let history = app.engine.history();
    let width = area.width.saturating_sub(2) as usize;
    let recent = history[history.len().saturating_sub(width)..].to_vec();
    Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Round best length "),
        )
        .style(Style::default().fg(Color::Yellow))
        .data(recent)
}

fn build_footer() -> Line<'static> {
    Line::from(vec![
        Span::raw(" space ").bold(),
        Span::raw("step  ").dim(),
        Span::raw("r ").bold(),
        Span::raw("run/pause  ").dim(),
        Span::raw("q ").bold(),
        Span::raw("quit").dim(),
    ])
}
