//! Drawing the calculator form.
//!
//! Rendering reads the form state and never changes it; the result line is
//! the same string the one-shot commands print.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};

use crate::core::Mode;
use crate::display::render_result;

use super::app::FormApp;
use super::layout::{calculate_layout, LayoutMode};
use super::theme::Theme;

/// Width reserved for field labels
const LABEL_WIDTH: usize = 14;

/// Render the whole form
pub fn render_form(frame: &mut Frame, app: &FormApp) {
    let theme = Theme::default_theme();
    let mode = LayoutMode::from_terminal_width(frame.area().width);
    let chunks = calculate_layout(frame.area());

    render_header(frame, app, &theme, mode, chunks[0]);
    render_fields(frame, app, &theme, chunks[1]);
    render_result_line(frame, app, &theme, chunks[2]);
    if mode.shows_hints() {
        render_hints(frame, app, &theme, chunks[3]);
    }
}

fn render_header(frame: &mut Frame, app: &FormApp, theme: &Theme, mode: LayoutMode, area: Rect) {
    let locale = app.locale();
    let active = app.calculator().mode();

    let mut lines = vec![Line::from(Span::styled(
        locale.catalog().title,
        theme.title_style(),
    ))];
    if !mode.shows_tab_bar() {
        lines.push(Line::from(Span::styled(
            locale.mode_tab(active),
            theme.active_tab_style(),
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);

    if mode.shows_tab_bar() {
        let titles: Vec<Line> = Mode::all()
            .iter()
            .map(|m| Line::from(locale.mode_tab(*m)))
            .collect();
        let selected = Mode::all().iter().position(|m| *m == active).unwrap_or(0);
        let tabs = Tabs::new(titles)
            .select(selected)
            .style(theme.tab_style())
            .highlight_style(theme.active_tab_style());
        let tab_area = Rect {
            y: area.y + 1,
            height: area.height.saturating_sub(1),
            ..area
        };
        frame.render_widget(tabs, tab_area);
    }
}

fn render_fields(frame: &mut Frame, app: &FormApp, theme: &Theme, area: Rect) {
    let calculator = app.calculator();
    let focused = app.focused_field();

    let lines: Vec<Line> = calculator
        .active_fields()
        .into_iter()
        .map(|field| {
            let is_focused = field == focused;
            let marker = if is_focused { "▸ " } else { "  " };
            let name = app.locale().field_name(field);
            let text = calculator.field_text(field);

            let input = if text.is_empty() {
                Span::styled(name, theme.placeholder_style())
            } else {
                Span::styled(text, theme.input_style())
            };
            Line::from(vec![
                Span::styled(marker, theme.label_style(is_focused)),
                Span::styled(
                    format!("{:<width$}", name, width = LABEL_WIDTH),
                    theme.label_style(is_focused),
                ),
                input,
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_result_line(frame: &mut Frame, app: &FormApp, theme: &Theme, area: Rect) {
    let calculator = app.calculator();
    let Some(text) = render_result(calculator, app.locale()) else {
        return;
    };
    let style = match calculator.outcome() {
        Some(outcome) if outcome.is_value() => theme.value_style(),
        _ => theme.guidance_style(),
    };
    frame.render_widget(Paragraph::new(Line::from(Span::styled(text, style))), area);
}

fn render_hints(frame: &mut Frame, app: &FormApp, theme: &Theme, area: Rect) {
    let catalog = app.locale().catalog();
    let hints = format!(
        "Enter {} · Ctrl+R {} · Tab ⇄ · Esc ✕",
        catalog.calculate, catalog.reset
    );
    frame.render_widget(Paragraph::new(hints).style(theme.hint_style()), area);
}
