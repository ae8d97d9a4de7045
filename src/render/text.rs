use std::fmt::Write;

use super::{Body, NewsView, ReportView, ReturnClass, ReturnsView, ScoreClass, Screen, Surface};

/// Renders a [`Screen`] as plain terminal text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextSurface;

impl Surface for TextSurface {
    fn render(&self, screen: &Screen) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", screen.title);
        let _ = writeln!(out, "{}", screen.subtitle);
        let _ = writeln!(out);

        let value = if screen.input.value.is_empty() {
            screen.input.placeholder
        } else {
            screen.input.value.as_str()
        };
        let button = if screen.button.enabled {
            format!("[ {} ]", screen.button.label)
        } else {
            format!("( {} )", screen.button.label)
        };
        let _ = writeln!(out, "{}: {value}  {button}", screen.input.aria_label);

        match &screen.body {
            Body::Empty => {}
            Body::Loading { message } => {
                let _ = writeln!(out, "\n{message}");
            }
            Body::Error { message } => {
                let _ = writeln!(out, "\nError: {message}");
            }
            Body::Report(report) => write_report(&mut out, report),
        }
        out
    }
}

fn write_report(out: &mut String, report: &ReportView) {
    let _ = writeln!(out, "\n{} ({})", report.ticker, report.as_of_label);
    let _ = writeln!(out, "[{}] {}", report.badge.label, report.explanation);

    let sign = match report.momentum.score_class {
        ScoreClass::Positive => "▲",
        ScoreClass::Negative => "▼",
        ScoreClass::Neutral => "•",
    };
    let _ = writeln!(out, "\nMomentum");
    let _ = writeln!(out, "  Score: {} {sign}", report.momentum.score_text);
    let _ = writeln!(out, "  5-Day Returns:");
    match &report.momentum.returns {
        ReturnsView::Days(days) => {
            for day in days {
                let mark = match day.class {
                    ReturnClass::Positive => '+',
                    ReturnClass::Negative => '-',
                };
                let _ = writeln!(out, "    {mark} {}", day.text);
            }
        }
        ReturnsView::Placeholder(message) => {
            let _ = writeln!(out, "    {message}");
        }
    }

    let _ = writeln!(out, "\nLatest News");
    match &report.news {
        NewsView::Items(items) => {
            for (i, item) in items.iter().enumerate() {
                let _ = writeln!(out, "  {}. {} ({})", i + 1, item.title, item.published);
                if !item.description.is_empty() {
                    let _ = writeln!(out, "     {}", item.description);
                }
                let _ = writeln!(out, "     {}", item.href);
            }
        }
        NewsView::Placeholder(message) => {
            let _ = writeln!(out, "  {message}");
        }
    }
}
