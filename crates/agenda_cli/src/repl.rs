//! Read-eval-print loop driving the controller from terminal input.

use crate::command::{parse_command, Command, CommandError, HELP};
use crate::view::TerminalView;
use agenda_core::{AgendaController, ContactAction};
use log::{debug, info};
use std::io::{self, BufRead, Write};

/// Runs commands until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    controller: &mut AgendaController,
    view: &mut TerminalView<R, W>,
) -> io::Result<()> {
    info!(
        "event=repl_start module=cli status=ok contacts={}",
        controller.contacts().len()
    );
    let snapshot = controller.refresh();
    view.print_table(&snapshot);
    view.print_stats(&snapshot);

    loop {
        view.prompt("agenda> ");
        let Some(line) = view.read_line()? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                view.print_line(&err.to_string());
                continue;
            }
        };

        let action = match command {
            Command::Quit => break,
            Command::Help => {
                view.print_line(HELP);
                continue;
            }
            Command::List => {
                view.print_table(&controller.snapshot());
                continue;
            }
            Command::Stats => {
                view.print_stats(&controller.snapshot());
                continue;
            }
            Command::Form => {
                view.print_form(controller.form());
                continue;
            }
            Command::Json => {
                match serde_json::to_string_pretty(&controller.snapshot()) {
                    Ok(json) => view.print_line(&json),
                    Err(err) => view.print_line(&format!("json encoding failed: {err}")),
                }
                continue;
            }
            Command::Set(field, value) => {
                controller.set_field(field, value);
                continue;
            }
            Command::Select(row) => ContactAction::SelectRow(row - 1),
            Command::Deselect => ContactAction::Deselect,
            Command::Add => ContactAction::Add,
            Command::Edit => ContactAction::Edit,
            Command::Remove => ContactAction::Remove,
            Command::Clear => ContactAction::Clear,
        };

        if let Err(err) = controller.handle(action, view) {
            debug!("event=repl_action module=cli status=rejected error_code={}", err.code());
        }
    }

    info!("event=repl_stop module=cli status=ok");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::view::TerminalView;
    use agenda_core::AgendaController;
    use std::io::Cursor;

    fn run_script(controller: &mut AgendaController, script: &str) -> String {
        let mut view = TerminalView::new(Cursor::new(script.to_string()), Vec::new());
        run(controller, &mut view).expect("in-memory io");
        String::from_utf8(view.into_output()).expect("utf-8 output")
    }

    #[test]
    fn add_flow_normalizes_and_updates_stats() {
        let mut controller = AgendaController::with_examples();
        let output = run_script(
            &mut controller,
            "set name maria souza\nset age 40\nset phone 123\nset email M@X.com\n\
             set income 2500,50\nset state ba\nadd\nquit\n",
        );

        assert!(output.contains("Contato adicionado com sucesso!"));
        assert!(output.contains("Maria Souza"));
        assert!(output.contains("R$ 2500.50"));
        assert!(output.contains("Total: 3 contatos"));
        assert_eq!(controller.contacts().len(), 3);
    }

    #[test]
    fn remove_reads_confirmation_from_same_input() {
        let mut controller = AgendaController::with_examples();
        let output = run_script(&mut controller, "select 1\nremove\nn\nremove\ns\n");

        assert!(output.contains("Confirmar exclusão"));
        assert_eq!(controller.contacts().len(), 1);
        assert_eq!(controller.contacts()[0].name, "Carlos Oliveira");
    }

    #[test]
    fn errors_are_reported_and_loop_continues() {
        let mut controller = AgendaController::with_examples();
        let output = run_script(&mut controller, "edit\nbogus\nselect 9\nlist\n");

        assert!(output.contains("Seleção necessária"));
        assert!(output.contains("unknown command `bogus`"));
        assert!(output.contains("out of bounds"));
        assert_eq!(controller.contacts().len(), 2);
    }

    #[test]
    fn json_prints_snapshot() {
        let mut controller = AgendaController::with_examples();
        let output = run_script(&mut controller, "json\n");
        assert!(output.contains("\"distinct_states\": 2"));
        assert!(output.contains("\"income\": \"R$ 6800.50\""));
    }
}
