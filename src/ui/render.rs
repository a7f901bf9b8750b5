use crate::ui::app::App;
use crate::ui::layout::{body_rows, layout_regions};
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_TEXT, HINT_TEXT, INVALID_INPUT, OUTPUT_OK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());
    let (input_row, rate_row, output_row) = body_rows(body);

    frame.render_widget(header_widget(app), header);
    draw_input(frame, app, input_row);
    frame.render_widget(rate_widget(app), rate_row);
    frame.render_widget(output_widget(app), output_row);
    frame.render_widget(footer_widget(footer), footer);
}

fn header_widget(app: &App) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled(
            " fxconv ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("EUR → USD", Style::default().fg(HEADER_TEXT)),
        Span::styled(
            format!("   {}", app.endpoint()),
            Style::default().fg(HINT_TEXT).add_modifier(Modifier::DIM),
        ),
    ]);

    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn draw_input(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let text = app.state().input_text().unwrap_or("").to_string();
    // Unparseable or absent text gets the error color, mirroring the
    // derived input_amount rather than re-validating here.
    let invalid = app.state().input_amount().is_none();
    let style = if invalid {
        Style::default().fg(INVALID_INPUT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };

    let widget = Paragraph::new(text.clone()).style(style).block(
        Block::default()
            .title(" Amount (EUR) ")
            .borders(Borders::ALL)
            .border_style(style),
    );
    frame.render_widget(widget, area);

    if area.width > 2 && area.height > 2 {
        let max_x = area.width.saturating_sub(2) as usize;
        let cursor_x = area.x + 1 + text.chars().count().min(max_x) as u16;
        frame.set_cursor_position((cursor_x, area.y + 1));
    }
}

fn rate_widget(app: &App) -> Paragraph<'static> {
    let line = match app.state().rate() {
        Some(rate) => Line::from(Span::styled(
            format!(" 1 EUR = {} USD", rate),
            Style::default().fg(HINT_TEXT),
        )),
        None => Line::from(Span::styled(
            " rate not loaded — press Enter to fetch",
            Style::default().fg(HINT_TEXT).add_modifier(Modifier::DIM),
        )),
    };
    Paragraph::new(line)
}

fn output_widget(app: &App) -> Paragraph<'static> {
    let (text, style) = match app.state().output_amount() {
        Some(amount) => (
            format!("{} USD", amount),
            Style::default().fg(OUTPUT_OK).add_modifier(Modifier::BOLD),
        ),
        None => ("...".to_string(), Style::default().fg(HINT_TEXT)),
    };

    Paragraph::new(Line::from(Span::styled(text, style))).block(
        Block::default()
            .title(" Converted (USD) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn footer_widget(area: Rect) -> Paragraph<'static> {
    let hints = " Enter: Reload │ Ctrl+U: Clear │ Esc: Quit";
    let version = format!("v{} ", VERSION);

    // Pad by char count, not byte count (the hints contain Unicode).
    let hints_width = hints.chars().count();
    let version_width = version.chars().count();
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints_width)
        .saturating_sub(version_width);

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

    let line = Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]);

    Paragraph::new(line)
        .style(text_style)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}
