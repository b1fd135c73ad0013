//! TUI rendering with ratatui
//!
//! Layout for the word ladder explorer.

use super::app::{App, Field, MessageStyle};
use crate::commands::FindOutcome;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Inputs
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_inputs(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Ladder
            Constraint::Percentage(40), // Side panel
        ])
        .split(chunks[2]);

    render_ladder(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪜 WORD LADDER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_inputs(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_input(f, " Start ", &app.start_input, app.focus == Field::Start, chunks[0]);
    render_input(f, " End ", &app.end_input, app.focus == Field::End, chunks[1]);
}

fn render_input(f: &mut Frame, title: &str, content: &str, focused: bool, area: Rect) {
    let (color, border) = if focused {
        (Color::Yellow, BorderType::Double)
    } else {
        (Color::DarkGray, BorderType::Plain)
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(border)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_ladder(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Ladder ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(result) = &app.last_result else {
        let paragraph = Paragraph::new("No search yet").block(block);
        f.render_widget(paragraph, area);
        return;
    };

    let content: Vec<Line> = if result.outcome == FindOutcome::Found {
        let last = result.ladder.len().saturating_sub(1);
        result
            .ladder
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let style = if i == 0 || i == last {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(vec![
                    Span::styled(format!("{i:>3}  "), Style::default().fg(Color::DarkGray)),
                    Span::styled(word.to_string(), style),
                ])
            })
            .collect()
    } else {
        vec![Line::from(Span::styled(
            format!("No path {} -> {}", result.start, result.end),
            Style::default().fg(Color::Red),
        ))]
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),      // Graph stats
            Constraint::Percentage(50), // Recent queries
            Constraint::Min(3),         // Messages
        ])
        .split(area);

    render_graph_stats(f, app, chunks[0]);
    render_recent(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_graph_stats(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(format!("Words:          {}", app.stats.words)),
        Line::from(format!("Edges:          {}", app.stats.edges)),
        Line::from(format!("Max out-degree: {}", app.stats.max_out_degree)),
        Line::from(format!("Isolated:       {}", app.stats.isolated)),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Graph ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_recent(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .recent
        .iter()
        .rev()
        .map(|query| {
            let outcome = query
                .steps
                .map_or_else(|| "no path".to_string(), |steps| format!("{steps} steps"));
            ListItem::new(format!("{} -> {}: {outcome}", query.start, query.end))
        })
        .collect();

    let list = List::new(items).block(Block::default().title(" Recent ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let focus = match app.focus {
        Field::Start => "Editing: start",
        Field::End => "Editing: end",
    };
    let mode = Paragraph::new(focus)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(mode, chunks[0]);

    let help = Paragraph::new("Esc: Quit | TAB: Switch | Enter: Search | Del: Clear")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, chunks[1]);
}
