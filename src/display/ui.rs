//! Weather panel rendering.

use super::view::{DayView, DisplayView, Stat};
use super::ForecastDay;
use crate::shared::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the weather panel.
pub fn draw_weather(
    f: &mut Frame<'_>,
    view: Option<&DisplayView>,
    fetching: bool,
    scroll: u16,
    area: Rect,
    colors: &ThemeColors,
) {
    let lines = match view {
        Some(view) => weather_lines(view, fetching, colors),
        None => vec![Line::from(Span::styled(
            "No location yet. Press / to enter one.",
            Style::default().fg(colors.muted),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Weather ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    f.render_widget(paragraph, area);
}

/// Lines of the weather panel.
pub fn weather_lines(view: &DisplayView, fetching: bool, colors: &ThemeColors) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(colors.heading)
        .add_modifier(Modifier::BOLD);
    let clock = Style::default().fg(colors.clock).add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(Span::styled(view.header.place.clone(), heading))];
    if let Some(ref country) = view.header.country {
        lines.push(Line::from(Span::styled(country.clone(), heading)));
    }
    lines.push(Line::from(Span::styled(
        format!("{}  {}", view.header.time, view.header.date),
        clock,
    )));

    if view.days.is_empty() {
        lines.push(Line::from(""));
        let note = if fetching {
            "Fetching weather..."
        } else {
            "No weather data"
        };
        lines.push(Line::from(Span::styled(note, Style::default().fg(colors.muted))));
        return lines;
    }

    for day in &view.days {
        lines.push(Line::from(""));
        push_day(&mut lines, day, colors);
    }

    lines
}

fn push_day(lines: &mut Vec<Line<'static>>, day: &DayView, colors: &ThemeColors) {
    if let Some(ref date) = day.date {
        lines.push(Line::from(Span::styled(
            date.clone(),
            Style::default().fg(colors.clock).add_modifier(Modifier::BOLD),
        )));
    }

    lines.push(Line::from(vec![
        Span::styled(
            day.title,
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", day.condition),
            Style::default().fg(colors.text).add_modifier(Modifier::ITALIC),
        ),
    ]));

    for stat in &day.stats {
        lines.push(stat_line(stat, "  ", colors));
    }

    let key = match day.day {
        ForecastDay::Today => '1',
        ForecastDay::Tomorrow => '2',
        ForecastDay::DayAfter => '3',
    };
    let toggle = if day.hourly_expanded {
        "Hide Hourly"
    } else {
        "Show Hourly"
    };
    lines.push(Line::from(Span::styled(
        format!("  [{}] {}", key, toggle),
        Style::default().fg(colors.muted),
    )));

    if day.hourly_expanded && day.hours.is_empty() {
        lines.push(Line::from(Span::styled(
            "    No remaining hours",
            Style::default().fg(colors.muted),
        )));
    }

    for hour in &day.hours {
        lines.push(Line::from(vec![
            Span::styled(
                format!("    {}", hour.time),
                Style::default().fg(colors.label).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", hour.condition), Style::default().fg(colors.text)),
        ]));
        for stat in &hour.stats {
            lines.push(stat_line(stat, "      ", colors));
        }
    }
}

fn stat_line(stat: &Stat, indent: &str, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}{}: ", indent, stat.label),
            Style::default().fg(colors.label),
        ),
        Span::styled(stat.value.clone(), Style::default().fg(colors.value)),
    ])
}
