use crate::context::CliContext;
use crate::handlers::LineConfirm;
use std::io::BufRead;
use todo_core::{Notice, TodoResult};
use todo_domain::{Outcome, PresentationPort, TaskList};

const HELP: &str = "\
Commands:
  add <text>           add a task
  edit <index> <text>  replace a task's text
  remove <index>       remove a task
  toggle <index>       flip done / not done
  check-all            mark every task done
  uncheck-all          mark every task not done
  clear                delete everything (asks first)
  undo | redo          step through history
  list                 print the list
  quit                 leave the shell";

/// Prints the list after every change and notices as plain lines.
struct ShellPresenter;

impl PresentationPort for ShellPresenter {
    fn render(&mut self, tasks: &TaskList) {
        print_list(tasks);
    }

    fn notify(&mut self, notice: Notice) {
        println!("{}", notice);
    }
}

fn print_list(tasks: &TaskList) {
    if tasks.is_empty() {
        println!("(no tasks)");
        return;
    }
    for (index, task) in tasks.iter().enumerate() {
        let marker = if task.completed { "[x]" } else { "[ ]" };
        println!("{} {} {}", index, marker, task.description);
    }
    println!(
        "({} tasks, {} completed)",
        tasks.len(),
        tasks.completed_count()
    );
}

fn parse_index(arg: &str) -> Option<usize> {
    arg.trim().parse().ok()
}

/// Runs commands from `input` until `quit` or end of input.
///
/// History lives only as long as the session; the list itself is saved
/// after every change.
pub fn run<R: BufRead>(ctx: &CliContext, mut input: R) -> anyhow::Result<()> {
    let mut controller = ctx.open(ShellPresenter)?;
    let mut line = String::new();

    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let trimmed = line.trim();
        let (name, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));

        let result: TodoResult<Outcome> = match name {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{}", HELP);
                continue;
            }
            "list" | "ls" => {
                print_list(controller.tasks());
                continue;
            }
            "add" => controller.add_task(rest),
            "edit" => {
                let (index, text) = rest.trim_start().split_once(' ').unwrap_or((rest, ""));
                match parse_index(index) {
                    Some(index) => controller.edit_task(index, text),
                    None => {
                        println!("Usage: edit <index> <text>");
                        continue;
                    }
                }
            }
            "remove" | "rm" | "toggle" => match parse_index(rest) {
                Some(index) if name == "toggle" => controller.toggle_task(index),
                Some(index) => controller.remove_task(index),
                None => {
                    println!("Usage: {} <index>", name);
                    continue;
                }
            },
            "check-all" => controller.check_all(),
            "uncheck-all" => controller.uncheck_all(),
            "clear" => controller.clear_all(&mut LineConfirm::new(&mut input)),
            "undo" => controller.undo(),
            "redo" => controller.redo(),
            other => {
                println!("Unknown command '{}'. Type 'help' for a list.", other);
                continue;
            }
        };

        match result {
            Ok(Outcome::Declined) => println!("Nothing changed"),
            Ok(_) => {}
            Err(e) if e.is_contract_violation() => println!("Error: {}", e),
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index(" 3 "), Some(3));
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("first"), None);
        assert_eq!(parse_index(""), None);
    }
}
