use folio_core::content::{Feature, GRID_COLUMNS};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::App;
use crate::document::DocBuilder;
use crate::theme::Theme;
use crate::widgets::text::{pad_line, truncate_str, wrap_plain, wrap_words, StyledWord};

/// "Projects & Expertise": heading, intro and the feature grid
pub struct ProjectsSection;

impl ProjectsSection {
    pub fn compose(doc: &mut DocBuilder, app: &App) {
        let theme = &app.theme;
        let section = &app.portfolio.projects;
        let width = doc.content_width();

        doc.mark_projects();
        doc.blank(1);
        let heading = Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD);
        doc.extend(center(wrap_plain(&section.heading, heading, width), width));
        if !section.intro.trim().is_empty() {
            doc.blank(1);
            let intro = Style::default().fg(theme.muted);
            doc.extend(center(wrap_plain(&section.intro, intro, width.min(72)), width));
        }
        doc.blank(2);

        let stacked = app.is_mobile();
        for row in grid_rows(&section.features, stacked) {
            compose_row(doc, &row, width, theme);
        }
    }
}

/// Features of one grid row with their spans
type GridRow<'a> = Vec<(&'a Feature, u16)>;

/// Pack features left to right into rows of `GRID_COLUMNS` columns
///
/// Stacked layouts give every card the full width.
fn grid_rows(features: &[Feature], stacked: bool) -> Vec<GridRow<'_>> {
    let mut rows: Vec<GridRow<'_>> = Vec::new();
    let mut current: GridRow<'_> = Vec::new();
    let mut used = 0;

    for feature in features {
        let span = if stacked {
            GRID_COLUMNS
        } else {
            feature.span.clamp(1, GRID_COLUMNS)
        };
        if used + span > GRID_COLUMNS && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push((feature, span));
        used += span;
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

fn compose_row(doc: &mut DocBuilder, row: &GridRow<'_>, width: u16, theme: &Theme) {
    let top = doc.row();
    let mut cards = Vec::with_capacity(row.len());
    let mut column = 0;

    for (index, (feature, span)) in row.iter().enumerate() {
        let x0 = width as u32 * column as u32 / GRID_COLUMNS as u32;
        column += span;
        let x1 = width as u32 * column as u32 / GRID_COLUMNS as u32;
        let last = index + 1 == row.len();
        let card_width = (x1 - x0) as u16 - if last { 0 } else { 1 };
        cards.push((card_width, card_lines(doc, feature, card_width, top, theme)));
    }

    let height = cards.iter().map(|(_, lines)| lines.len()).max().unwrap_or(0);
    let border = Style::default().fg(theme.bg2);
    for (card_width, lines) in cards.iter_mut() {
        // Equal heights: pad the body, keep the bottom border last
        while lines.len() < height {
            let inner = (*card_width as usize).saturating_sub(2);
            let filler = Line::from(vec![
                Span::styled("│", border),
                Span::raw(" ".repeat(inner)),
                Span::styled("│", border),
            ]);
            let at = lines.len().saturating_sub(1);
            lines.insert(at, filler);
        }
    }

    for r in 0..height {
        let mut spans = Vec::new();
        for (index, (card_width, lines)) in cards.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw(" "));
            }
            let line = pad_line(lines[r].clone(), *card_width as usize, Style::default());
            spans.extend(line.spans);
        }
        doc.push(Line::from(spans));
    }
    doc.blank(1);
}

/// One bordered card; links register at the rows they will occupy
fn card_lines(
    doc: &mut DocBuilder,
    feature: &Feature,
    width: u16,
    top: u16,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let border = Style::default().fg(theme.bg2);
    let inner = width.saturating_sub(4).max(1);
    let mut body: Vec<Line<'static>> = Vec::new();

    let title = Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD);
    body.extend(wrap_plain(&feature.title, title, inner));
    body.extend(wrap_plain(&feature.description, Style::default().fg(theme.fg1), inner));

    if !feature.tags.is_empty() {
        body.push(Line::default());
        let chip = Style::default().fg(theme.accent).bg(theme.bg1);
        let chips: Vec<StyledWord> = feature
            .tags
            .iter()
            .map(|t| StyledWord::new(format!(" {} ", t), chip))
            .collect();
        body.extend(wrap_words(&chips, inner));
    }

    if let Some(ref url) = feature.link {
        body.push(Line::default());
        // +1 for the top border
        let row = top + 1 + body.len() as u16;
        let focused = doc.link_at(row, feature.title.clone(), url.clone());
        body.push(link_line(&format!("↗ {}", url), inner as usize, focused, theme));
    }

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(Line::from(vec![
        Span::styled("╭", border),
        Span::styled("─".repeat(width.saturating_sub(2) as usize), border),
        Span::styled("╮", border),
    ]));
    for line in body {
        let mut spans = vec![Span::styled("│ ", border)];
        spans.extend(pad_line(line, inner as usize, Style::default()).spans);
        spans.push(Span::styled(" │", border));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(vec![
        Span::styled("╰", border),
        Span::styled("─".repeat(width.saturating_sub(2) as usize), border),
        Span::styled("╯", border),
    ]));
    lines
}

/// A link label, reversed when it has keyboard focus
pub fn link_line(label: &str, width: usize, focused: bool, theme: &Theme) -> Line<'static> {
    let mut style = Style::default().fg(theme.accent).add_modifier(Modifier::UNDERLINED);
    if focused {
        style = Style::default()
            .fg(theme.bg0)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD);
    }
    Line::from(Span::styled(truncate_str(label, width), style))
}

/// Center each line inside `width` columns
fn center(lines: Vec<Line<'static>>, width: u16) -> Vec<Line<'static>> {
    lines
        .into_iter()
        .map(|line| {
            let pad = (width as usize).saturating_sub(line.width()) / 2;
            let mut spans = vec![Span::raw(" ".repeat(pad))];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect()
}
