//! Screen Rendering
//!
//! One draw function per screen, selected from the drill's (mode, phase)
//! pair. Everything renders from the drill's getters; no state lives here.

use anzan_core::{Drill, Mode, Phase, SEQUENCE_LEN};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Gauge, Paragraph};
use ratatui::Frame;

use crate::theme;

/// Render the whole screen for the drill's current state.
pub fn render(frame: &mut Frame, drill: &Drill) {
    let [content, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    match (drill.mode(), drill.phase()) {
        (Mode::Home, _) => draw_home(frame, content),
        (mode, Phase::Idle) => draw_setup(frame, content, drill, mode),
        (mode, Phase::Running) => draw_running(frame, content, drill, mode),
        (_, Phase::Finished) => draw_finished(frame, content),
        (_, Phase::ShowingAnswer) => draw_answer(frame, content, drill),
        (_, Phase::ShowingNumbers) => draw_numbers(frame, content, drill),
    }

    draw_status(frame, status, drill);
}

/// A centered rectangle of at most `width` x `height` within `area`.
fn centered_card(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

fn card_block(title: &str, accent: Color) -> Block<'_> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .title(format!(" {title} "))
}

fn hint_line(hint: &str) -> Line<'_> {
    Line::from(Span::styled(hint, Style::default().fg(theme::HINT_GRAY)))
}

fn draw_home(frame: &mut Frame, area: Rect) {
    let card = centered_card(area, 44, 12);
    let block = card_block("anzan", theme::CARD_INDIGO);
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let lines = vec![
        Line::from(Span::styled(
            "Flash Anzan",
            Style::default()
                .fg(theme::NUMBER_WHITE)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from("Choose your mode:"),
        Line::default(),
        Line::from(Span::styled(
            "[a] Auto Mode",
            Style::default().fg(theme::CARD_MUTED),
        )),
        Line::from(Span::styled(
            "[m] Manual Mode",
            Style::default().fg(theme::CARD_PURPLE),
        )),
        Line::default(),
        hint_line("[q] quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

fn draw_setup(frame: &mut Frame, area: Rect, drill: &Drill, mode: Mode) {
    let title = match mode {
        Mode::Auto => "auto mode",
        _ => "manual mode",
    };
    let card = centered_card(area, 48, 12);
    let block = card_block(title, theme::CARD_INDIGO);
    let inner = block.inner(card);
    frame.render_widget(block, card);

    if mode == Mode::Auto {
        let [readout, gauge_area, _, hints] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        let secs = drill.interval().as_secs_f32();
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::from("Time interval: "),
                Span::styled(
                    format!("{secs:.1}s"),
                    Style::default()
                        .fg(theme::NUMBER_WHITE)
                        .add_modifier(Modifier::BOLD),
                ),
            ]))
            .alignment(Alignment::Center),
            readout,
        );

        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(theme::GAUGE_INDIGO))
                .ratio(f64::from(secs / 10.0).clamp(0.0, 1.0))
                .label(""),
            gauge_area,
        );

        frame.render_widget(
            Paragraph::new(vec![
                hint_line("[left/right] adjust by 0.1s"),
                hint_line("[Enter] start    [h] home"),
            ])
            .alignment(Alignment::Center),
            hints,
        );
    } else {
        frame.render_widget(
            Paragraph::new(vec![
                Line::default(),
                Line::from("Press Enter to see each number"),
                Line::default(),
                hint_line("[Enter] start    [h] home"),
            ])
            .alignment(Alignment::Center),
            inner,
        );
    }
}

fn draw_running(frame: &mut Frame, area: Rect, drill: &Drill, mode: Mode) {
    let card = centered_card(area, 48, 12);
    let block = card_block("listen", theme::CARD_INDIGO);
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let [_, number_area, counter, progress, hints] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    let number = drill
        .current_number()
        .map_or_else(String::new, |n| n.to_string());
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            number,
            Style::default()
                .fg(theme::NUMBER_WHITE)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        number_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("Number {} of {SEQUENCE_LEN}", drill.current_index() + 1),
            Style::default().fg(theme::CARD_MUTED),
        )))
        .alignment(Alignment::Center),
        counter,
    );

    // In auto mode, show how close the next number is.
    if let Some(remaining) = drill.time_to_advance() {
        let interval = drill.interval().as_secs_f64();
        if interval > 0.0 {
            let ratio = (1.0 - remaining.as_secs_f64() / interval).clamp(0.0, 1.0);
            frame.render_widget(
                Gauge::default()
                    .gauge_style(Style::default().fg(theme::GAUGE_INDIGO))
                    .ratio(ratio)
                    .label(""),
                progress,
            );
        }
    }

    if mode == Mode::Manual {
        frame.render_widget(
            Paragraph::new(hint_line("[Enter] next")).alignment(Alignment::Center),
            hints,
        );
    }
}

fn draw_finished(frame: &mut Frame, area: Rect) {
    let card = centered_card(area, 48, 10);
    let block = card_block("done", theme::REVEAL_ORANGE);
    let inner = block.inner(card);
    frame.render_widget(block, card);

    frame.render_widget(
        Paragraph::new(vec![
            Line::default(),
            Line::from("Ready to see the answer?"),
            Line::default(),
            hint_line("[Enter] show answer"),
        ])
        .alignment(Alignment::Center),
        inner,
    );
}

fn draw_answer(frame: &mut Frame, area: Rect, drill: &Drill) {
    let card = centered_card(area, 48, 12);
    let block = card_block("answer", theme::ANSWER_GREEN);
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let answer = drill
        .answer()
        .map_or_else(String::new, |sum| sum.to_string());
    frame.render_widget(
        Paragraph::new(vec![
            Line::default(),
            Line::from("Answer:"),
            Line::from(Span::styled(
                answer,
                Style::default()
                    .fg(theme::ANSWER_GREEN)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            hint_line("[c] check numbers"),
            hint_line("[r] reset    [h] home"),
        ])
        .alignment(Alignment::Center),
        inner,
    );
}

fn draw_numbers(frame: &mut Frame, area: Rect, drill: &Drill) {
    let card = centered_card(area, 48, 16);
    let block = card_block("all numbers", theme::CHECK_AMBER);
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut lines = Vec::with_capacity(SEQUENCE_LEN + 3);
    if let Some(sequence) = drill.sequence() {
        for (position, value) in sequence.values().iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{value:+4}"),
                    Style::default()
                        .fg(theme::NUMBER_WHITE)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  (#{})", position + 1),
                    Style::default().fg(theme::HINT_GRAY),
                ),
            ]));
        }
    }
    lines.push(Line::from(Span::styled(
        "────────",
        Style::default().fg(theme::HINT_GRAY),
    )));
    if let Some(answer) = drill.answer() {
        lines.push(Line::from(vec![
            Span::from("Sum: "),
            Span::styled(
                answer.to_string(),
                Style::default()
                    .fg(theme::ANSWER_GREEN)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    lines.push(hint_line("[Enter] back"));

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

fn draw_status(frame: &mut Frame, area: Rect, drill: &Drill) {
    let text = format!(
        " {} | interval {:.1}s | [q] quit",
        drill.mode(),
        drill.interval().as_secs_f32()
    );
    frame.render_widget(
        Paragraph::new(text).style(
            Style::default()
                .bg(theme::STATUS_BG)
                .fg(theme::STATUS_FG),
        ),
        area,
    );
}
