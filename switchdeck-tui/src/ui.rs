//! Draw the demo page — tab bar, active section content, activity log,
//! status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::input;
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(8),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_tab_bar(f, chunks[0], app);
    render_content(f, chunks[1], app);
    render_log(f, chunks[2], app);
    render_status(f, chunks[3], app);
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" switchdeck ")
        .title_style(theme::accent());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let page = app.router.page();
    let mut spans: Vec<Span> = Vec::new();
    for (i, button) in page.buttons.iter().enumerate() {
        let mut style = if button.active {
            theme::active_button()
        } else {
            theme::idle_button()
        };
        if i == app.cursor {
            style = style.patch(theme::cursor_button());
        }
        spans.push(Span::styled(format!(" {}:{} ", i + 1, button.label), style));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn render_content(f: &mut Frame, area: Rect, app: &AppState) {
    let page = app.router.page();
    match page.active_section() {
        Some(section) => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme::panel_border(true))
                .title(format!(" {} ", section.title));
            let inner = block.inner(area);
            f.render_widget(block, area);
            let body = Paragraph::new(section.body.as_str())
                .style(theme::body())
                .wrap(Wrap { trim: false });
            f.render_widget(body, inner);
        }
        None => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme::panel_border(false));
            let inner = block.inner(area);
            f.render_widget(block, area);
            f.render_widget(
                Paragraph::new("no active section").style(theme::muted()),
                inner,
            );
        }
    }
}

fn render_log(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().borders(Borders::ALL).title(" Activity ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let log = app.log.borrow();
    let lines: Vec<Line> = log
        .iter()
        .take(inner.height as usize)
        .map(|entry| {
            Line::from(vec![
                Span::styled(format!("{} ", entry.at.format("%H:%M:%S")), theme::muted()),
                Span::styled(entry.message.clone(), Style::default()),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_status(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = vec![Span::styled(input::key_hints(), theme::muted())];
    spans.push(Span::raw(" | "));
    if app.router.has_pending() {
        spans.push(Span::styled("switching…", theme::warning()));
    } else {
        match app.router.active_section() {
            Some(active) => {
                spans.push(Span::styled(format!("active: {active}"), theme::positive()));
            }
            None => spans.push(Span::styled("no section active", theme::muted())),
        }
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
