//! Echo of error messages to an output sink
//!
//! Only active when `echoErrors` is set. Write failures are logged and
//! otherwise ignored, so echoing can never change an import's result.

use std::io::Write;

use tracing::warn;

use crate::import::ErrorRecord;
use crate::settings::Settings;

pub struct Echo<W> {
    sink: W,
    enabled: bool,
    html: bool,
}

impl<W: Write> Echo<W> {
    pub fn new(sink: W, settings: &Settings) -> Self {
        Self {
            sink,
            enabled: settings.echo_errors,
            html: settings.html_errors,
        }
    }

    pub fn error(&mut self, record: &ErrorRecord) {
        self.emit("import-error", &record.message);
    }

    /// Final summary line, written only if there was at least one error
    pub fn summary(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.emit("import-summary", &summary_line(count));
        if self.enabled {
            if let Err(e) = self.sink.flush() {
                warn!(error = %e, "failed to flush echo sink");
            }
        }
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn into_sink(self) -> W {
        self.sink
    }

    fn emit(&mut self, class: &str, text: &str) {
        if !self.enabled {
            return;
        }

        let written = if self.html {
            writeln!(self.sink, "<p class=\"{}\">{}</p>", class, escape_html(text))
        } else {
            writeln!(self.sink, "{}", text)
        };

        if let Err(e) = written {
            warn!(error = %e, "failed to echo import message");
        }
    }
}

/// `1 erro ocorreu` / `N erros ocorreram`
pub fn summary_line(count: usize) -> String {
    if count == 1 {
        "1 erro ocorreu".to_string()
    } else {
        format!("{} erros ocorreram", count)
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
