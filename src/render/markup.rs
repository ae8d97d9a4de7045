use std::fmt::Write;

use super::{Body, NewsView, ReportView, ReturnsView, Screen, Surface};

/// Renders a [`Screen`] as an HTML fragment using the page's CSS class names.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSurface;

impl Surface for HtmlSurface {
    fn render(&self, screen: &Screen) -> String {
        let mut out = String::new();
        out.push_str("<div class=\"container\">\n");
        let _ = writeln!(out, "<h1>{}</h1>", escape(screen.title));
        let _ = writeln!(out, "<p class=\"subtitle\">{}</p>", escape(screen.subtitle));

        out.push_str("<div class=\"input-section\">\n");
        let _ = writeln!(
            out,
            "<input type=\"text\" placeholder=\"{}\" value=\"{}\" aria-label=\"{}\">",
            escape(screen.input.placeholder),
            escape(&screen.input.value),
            escape(screen.input.aria_label),
        );
        let disabled = if screen.button.enabled { "" } else { " disabled" };
        let _ = writeln!(out, "<button{disabled}>{}</button>", escape(screen.button.label));
        out.push_str("</div>\n");

        match &screen.body {
            Body::Empty => {}
            Body::Loading { message } => {
                let _ = writeln!(out, "<div class=\"loading-message\">{}</div>", escape(message));
            }
            Body::Error { message } => {
                let _ = writeln!(out, "<div class=\"error-message\">{}</div>", escape(message));
            }
            Body::Report(report) => write_report(&mut out, report),
        }

        out.push_str("</div>\n");
        out
    }
}

fn write_report(out: &mut String, report: &ReportView) {
    out.push_str("<div class=\"results-section\">\n");
    let _ = writeln!(
        out,
        "<h2 class=\"ticker-header\">{} <span class=\"as-of-date\">{}</span></h2>",
        escape(&report.ticker),
        escape(&report.as_of_label),
    );

    out.push_str("<div class=\"pulse-summary\">\n");
    let _ = writeln!(
        out,
        "<span class=\"{}\">{}</span>",
        escape(&report.badge.class),
        escape(&report.badge.label),
    );
    let _ = writeln!(out, "<p class=\"llm-explanation\">{}</p>", escape(&report.explanation));
    out.push_str("</div>\n");

    out.push_str("<div class=\"results-grid\">\n");

    out.push_str("<div class=\"card momentum-card\">\n<h3>Momentum</h3>\n");
    let score_class = report.momentum.score_class.css_class();
    let _ = writeln!(
        out,
        "<p><strong>Score:</strong> <span class=\"{}\">{}</span></p>",
        if score_class.is_empty() {
            "momentum-score".to_string()
        } else {
            format!("momentum-score {score_class}")
        },
        escape(&report.momentum.score_text),
    );
    out.push_str("<h4>5-Day Returns:</h4>\n<ul>\n");
    match &report.momentum.returns {
        ReturnsView::Days(days) => {
            for day in days {
                let _ = writeln!(
                    out,
                    "<li class=\"return-item {}\">{}</li>",
                    day.class.css_class(),
                    escape(&day.text),
                );
            }
        }
        ReturnsView::Placeholder(message) => {
            let _ = writeln!(out, "<li>{}</li>", escape(message));
        }
    }
    out.push_str("</ul>\n</div>\n");

    out.push_str("<div class=\"card news-card\">\n<h3>Latest News</h3>\n");
    match &report.news {
        NewsView::Items(items) => {
            out.push_str("<ul class=\"news-list\">\n");
            for item in items {
                let _ = writeln!(
                    out,
                    "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\"><strong>{}</strong></a>\
                     <p class=\"news-description\">{}</p>\
                     <span class=\"news-published\">{}</span></li>",
                    escape(&item.href),
                    escape(&item.title),
                    escape(&item.description),
                    escape(&item.published),
                );
            }
            out.push_str("</ul>\n");
        }
        NewsView::Placeholder(message) => {
            let _ = writeln!(out, "<p>{}</p>", escape(message));
        }
    }
    out.push_str("</div>\n");

    out.push_str("</div>\n</div>\n");
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
