//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use annotate_snippets::{Group, Level, Renderer};

use super::Diagnostics;
use super::message::Severity;

/// Builder for rendering diagnostics with various options.
pub struct DiagnosticsPrinter<'d> {
    diagnostics: &'d Diagnostics,
    colored: bool,
}

impl<'d> DiagnosticsPrinter<'d> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            colored: false,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.format(&mut out);
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            let level = severity_to_level(diag.severity());
            let subject = format!("for type `{}`", diag.subject());
            let mut group = Group::with_title(level.primary_title(diag.message()))
                .element(Level::NOTE.message(subject.as_str()));

            if let Some(hint) = diag.kind().default_hint() {
                group = group.element(Level::NOTE.message(hint));
            }
            for hint in &diag.hints {
                group = group.element(Level::HELP.message(hint.as_str()));
            }

            if i > 0 {
                w.write_char('\n')?;
            }
            writeln!(w, "{}", renderer.render(&[group]))?;
        }

        Ok(())
    }
}

fn severity_to_level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Warning => Level::WARNING,
    }
}

impl Diagnostics {
    pub fn printer(&self) -> DiagnosticsPrinter<'_> {
        DiagnosticsPrinter::new(self)
    }
}
