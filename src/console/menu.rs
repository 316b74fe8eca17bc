//! Interactive menu loop for the console front-end.

use crate::console::render::{self, Palette};
use crate::task::ports::TaskStore;
use crate::task::services::{AddTaskRequest, StatusFilter, TaskOperations, UpdateTaskRequest};
use std::io::{self, BufRead, Write};

/// One interactive console session over a task operation set.
///
/// The session is generic over its input and output so it runs equally
/// against a terminal and against test buffers. Reaching end of input ends
/// the session the same way the exit menu choice does.
pub struct ConsoleSession<S: TaskStore, R, W> {
    operations: TaskOperations<S>,
    input: R,
    output: W,
    palette: Palette,
}

impl<S: TaskStore, R: BufRead, W: Write> ConsoleSession<S, R, W> {
    /// Creates a session over the given operation set and I/O pair.
    #[must_use]
    pub const fn new(
        operations: TaskOperations<S>,
        input: R,
        output: W,
        palette: Palette,
    ) -> Self {
        Self {
            operations,
            input,
            output,
            palette,
        }
    }

    /// Runs the menu loop until the user exits or input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when reading input or writing output fails.
    pub fn run(mut self) -> io::Result<()> {
        writeln!(self.output, "{}", render::welcome_banner(self.palette))?;
        loop {
            writeln!(self.output, "\n{}", render::main_menu(self.palette))?;
            let Some(choice) = self.prompt("\nEnter your choice (1-7): ")? else {
                break;
            };
            match choice.as_str() {
                "1" => self.handle_add()?,
                "2" => self.handle_view()?,
                "3" => self.handle_update()?,
                "4" => self.handle_delete()?,
                "5" => self.handle_toggle()?,
                "6" => self.handle_summary()?,
                "7" => break,
                _ => self.report_error("invalid choice, enter a number between 1 and 7")?,
            }
        }
        writeln!(self.output, "\n{}", render::goodbye_banner(self.palette))
    }

    fn handle_add(&mut self) -> io::Result<()> {
        self.section("ADD NEW TASK")?;
        let Some(title) = self.prompt("Enter task title: ")? else {
            return Ok(());
        };
        let Some(description) = self.prompt("Enter task description (optional): ")? else {
            return Ok(());
        };

        let request = AddTaskRequest::new(title).with_description(description);
        match self.operations.add(request) {
            Ok(task) => {
                self.report_success(&format!("Task added successfully! (ID: {})", task.id()))?;
                writeln!(self.output, "{}", render::task_card(self.palette, &task))
            }
            Err(err) => self.report_error(&err.to_string()),
        }
    }

    fn handle_view(&mut self) -> io::Result<()> {
        self.section("VIEW TASKS")?;
        let Some(raw_filter) =
            self.prompt("Filter by status (complete/incomplete, blank for all): ")?
        else {
            return Ok(());
        };

        let filter = StatusFilter::parse(&raw_filter);
        match self.operations.list(filter) {
            Ok(tasks) => writeln!(self.output, "\n{}", render::task_list(self.palette, &tasks)),
            Err(err) => self.report_error(&err.to_string()),
        }
    }

    fn handle_update(&mut self) -> io::Result<()> {
        self.section("UPDATE TASK")?;
        let Some(id) = self.prompt_task_id("Enter task ID to update: ")? else {
            return Ok(());
        };
        writeln!(self.output, "Leave blank to keep the current value.")?;
        let Some(new_title) = self.prompt("Enter new title (or press Enter to skip): ")? else {
            return Ok(());
        };
        let Some(new_description) =
            self.prompt("Enter new description (or press Enter to skip): ")?
        else {
            return Ok(());
        };

        let mut request = UpdateTaskRequest::new(id);
        if !new_title.is_empty() {
            request = request.with_title(new_title);
        }
        if !new_description.is_empty() {
            request = request.with_description(new_description);
        }
        match self.operations.update(request) {
            Ok(task) => {
                self.report_success(&format!("Task (ID: {}) updated successfully!", task.id()))?;
                writeln!(self.output, "{}", render::task_card(self.palette, &task))
            }
            Err(err) => self.report_error(&err.to_string()),
        }
    }

    fn handle_delete(&mut self) -> io::Result<()> {
        self.section("DELETE TASK")?;
        let Some(id) = self.prompt_task_id("Enter task ID to delete: ")? else {
            return Ok(());
        };

        match self.operations.delete(id) {
            Ok(task) => self.report_success(&format!(
                "Task '{}' (ID: {}) deleted successfully!",
                task.title(),
                task.id()
            )),
            Err(err) => self.report_error(&err.to_string()),
        }
    }

    fn handle_toggle(&mut self) -> io::Result<()> {
        self.section("MARK TASK COMPLETE/INCOMPLETE")?;
        let Some(id) = self.prompt_task_id("Enter task ID: ")? else {
            return Ok(());
        };

        match self.operations.toggle(id, None) {
            Ok(task) => {
                let status = if task.completed() {
                    "complete"
                } else {
                    "incomplete"
                };
                self.report_success(&format!(
                    "Task '{}' (ID: {}) marked as {status}!",
                    task.title(),
                    task.id()
                ))
            }
            Err(err) => self.report_error(&err.to_string()),
        }
    }

    fn handle_summary(&mut self) -> io::Result<()> {
        self.section("TASK SUMMARY")?;
        match self.operations.summary() {
            Ok(summary) => {
                writeln!(self.output, "{}", render::summary_box(self.palette, &summary))
            }
            Err(err) => self.report_error(&err.to_string()),
        }
    }

    /// Prompts for a line of input; `None` signals end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// Prompts for a task id; reports a parse error and returns `None` for
    /// non-numeric input, leaving the caller to fall back to the menu.
    fn prompt_task_id(&mut self, text: &str) -> io::Result<Option<u64>> {
        let Some(raw) = self.prompt(text)? else {
            return Ok(None);
        };
        match raw.parse::<u64>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                self.report_error("please enter a valid number")?;
                Ok(None)
            }
        }
    }

    fn section(&mut self, title: &str) -> io::Result<()> {
        let heading = self.palette.info(&format!("--- {title} ---"));
        writeln!(self.output, "\n{heading}")
    }

    fn report_success(&mut self, text: &str) -> io::Result<()> {
        let line = render::success_line(self.palette, text);
        writeln!(self.output, "\n{line}")
    }

    fn report_error(&mut self, text: &str) -> io::Result<()> {
        let line = render::error_line(self.palette, text);
        writeln!(self.output, "\n{line}")
    }
}
