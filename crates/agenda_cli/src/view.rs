//! Line-oriented terminal implementation of `ContactView`.

use agenda_core::presentation::{field_caption, TABLE_COLUMNS};
use agenda_core::{AgendaSnapshot, ContactField, ContactForm, ContactView, Notice, NoticeKind};
use log::warn;
use std::io::{self, BufRead, Write};

/// Terminal view over any line reader and writer.
pub struct TerminalView<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads one line; `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    pub fn prompt(&mut self, text: &str) {
        self.emit(text);
        if let Err(err) = self.output.flush() {
            warn!("event=terminal_flush module=cli status=error error={err}");
        }
    }

    pub fn print_line(&mut self, text: &str) {
        self.emit(&format!("{text}\n"));
    }

    pub fn print_table(&mut self, snapshot: &AgendaSnapshot) {
        let table = format_table(snapshot);
        self.emit(&table);
    }

    pub fn print_stats(&mut self, snapshot: &AgendaSnapshot) {
        let labels = &snapshot.labels;
        self.print_line(&format!(
            "{} | {} | {}",
            labels.total, labels.mean_age, labels.distinct_states
        ));
    }

    pub fn print_form(&mut self, form: &ContactForm) {
        let text = format_form(form);
        self.emit(&text);
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn emit(&mut self, text: &str) {
        if let Err(err) = self.output.write_all(text.as_bytes()) {
            warn!("event=terminal_write module=cli status=error error={err}");
        }
    }
}

impl<R: BufRead, W: Write> ContactView for TerminalView<R, W> {
    fn render(&mut self, snapshot: &AgendaSnapshot) {
        self.print_table(snapshot);
        self.print_stats(snapshot);
        if !snapshot.form.is_blank() {
            self.print_form(&snapshot.form);
        }
    }

    fn notify(&mut self, notice: &Notice) {
        let tag = match notice.kind {
            NoticeKind::Info => "info",
            NoticeKind::Warning => "aviso",
            NoticeKind::Error => "erro",
        };
        let message = notice.message.replace('\n', "\n    ");
        self.print_line(&format!("[{tag}] {}: {message}", notice.title));
    }

    fn confirm(&mut self, title: &str, message: &str) -> bool {
        self.prompt(&format!("{title}: {message} [s/N] "));
        match self.read_line() {
            Ok(Some(answer)) => matches!(
                answer.trim().to_ascii_lowercase().as_str(),
                "s" | "sim" | "y" | "yes"
            ),
            Ok(None) => false,
            Err(err) => {
                warn!("event=terminal_read module=cli status=error error={err}");
                false
            }
        }
    }
}

/// Formats the contact table with a leading 1-based row column.
pub fn format_table(snapshot: &AgendaSnapshot) -> String {
    let mut header = vec!["#".to_string()];
    header.extend(TABLE_COLUMNS.iter().map(|column| column.to_string()));

    let mut lines: Vec<Vec<String>> = vec![header];
    for (index, row) in snapshot.rows.iter().enumerate() {
        let marker = if snapshot.selection == Some(row.id) {
            format!("{}*", index + 1)
        } else {
            (index + 1).to_string()
        };
        let mut line = vec![marker];
        line.extend(row.cells().iter().map(|cell| cell.to_string()));
        lines.push(line);
    }

    let mut widths = vec![0usize; TABLE_COLUMNS.len() + 1];
    for line in &lines {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for line in &lines {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell, *width))
            .collect();
        out.push_str(cells.join(" | ").trim_end());
        out.push('\n');
    }
    out
}

fn format_form(form: &ContactForm) -> String {
    let mut out = String::new();
    for field in ContactField::ALL {
        out.push_str(&format!(
            "  {:<13} {}\n",
            field_caption(field),
            form.get(field)
        ));
    }
    out
}

fn pad(cell: &str, width: usize) -> String {
    let mut padded = cell.to_string();
    let missing = width.saturating_sub(cell.chars().count());
    padded.extend(std::iter::repeat(' ').take(missing));
    padded
}

#[cfg(test)]
mod tests {
    use super::{format_table, TerminalView};
    use agenda_core::{AgendaController, ContactView, Notice};
    use std::io::Cursor;

    #[test]
    fn table_lists_rows_with_currency_and_selection_marker() {
        let mut controller = AgendaController::with_examples();
        controller.select_row(1).unwrap();
        let table = format_table(&controller.snapshot());

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("#"));
        assert!(lines[1].contains("Ana Silva"));
        assert!(lines[1].contains("R$ 4500.00"));
        assert!(lines[2].starts_with("2*"));
    }

    #[test]
    fn confirm_accepts_portuguese_yes_and_defaults_to_no() {
        let mut view = TerminalView::new(Cursor::new("sim\n\n"), Vec::new());
        assert!(view.confirm("Confirmar", "ok?"));
        assert!(!view.confirm("Confirmar", "ok?"));
        assert!(!view.confirm("Confirmar", "ok?"));
    }

    #[test]
    fn notify_prints_kind_and_title() {
        let mut view = TerminalView::new(Cursor::new(""), Vec::new());
        view.notify(&Notice::warning("Campo obrigatório", "O campo Nome é obrigatório!"));
        let output = String::from_utf8(view.into_output()).unwrap();
        assert_eq!(
            output,
            "[aviso] Campo obrigatório: O campo Nome é obrigatório!\n"
        );
    }
}
