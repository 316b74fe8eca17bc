//! Colored string rendering for the console front-end.
//!
//! All functions build and return strings; nothing here writes to a
//! terminal. Colors are applied through a [`Palette`], which has a plain
//! mode so tests can assert on uncolored text.

use crate::task::domain::Task;
use crate::task::services::TaskSummary;
use crossterm::style::{Color, Stylize};

/// Width of banners, dividers, and boxes, in columns.
const LINE_WIDTH: usize = 60;

/// Completion marker for finished tasks.
const MARK_DONE: &str = "✓";
/// Completion marker for open tasks.
const MARK_OPEN: &str = "○";

/// Color scheme for console output.
///
/// The ANSI palette styles text with terminal escape sequences via
/// `crossterm`; the plain palette passes text through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colored: bool,
}

impl Palette {
    /// Palette that emits ANSI escape sequences.
    #[must_use]
    pub const fn ansi() -> Self {
        Self { colored: true }
    }

    /// Palette that emits unstyled text.
    #[must_use]
    pub const fn plain() -> Self {
        Self { colored: false }
    }

    fn paint(self, text: &str, color: Color) -> String {
        if self.colored {
            text.with(color).to_string()
        } else {
            text.to_owned()
        }
    }

    fn paint_bold(self, text: &str, color: Color) -> String {
        if self.colored {
            text.with(color).bold().to_string()
        } else {
            text.to_owned()
        }
    }

    /// Styles a primary heading.
    #[must_use]
    pub fn primary(self, text: &str) -> String {
        self.paint_bold(text, Color::Cyan)
    }

    /// Styles a success message.
    #[must_use]
    pub fn success(self, text: &str) -> String {
        self.paint(text, Color::Green)
    }

    /// Styles an error message.
    #[must_use]
    pub fn error(self, text: &str) -> String {
        self.paint(text, Color::Red)
    }

    /// Styles an informational heading.
    #[must_use]
    pub fn info(self, text: &str) -> String {
        self.paint_bold(text, Color::Blue)
    }

    /// Styles secondary text such as dividers and placeholders.
    #[must_use]
    pub fn muted(self, text: &str) -> String {
        self.paint(text, Color::DarkGrey)
    }

    /// Styles a task title.
    #[must_use]
    pub fn task(self, text: &str) -> String {
        self.paint(text, Color::Magenta)
    }

    /// Styles a not-yet-complete status.
    #[must_use]
    pub fn pending(self, text: &str) -> String {
        self.paint(text, Color::Yellow)
    }
}

fn boxed(palette: Palette, lines: &[&str], style: fn(Palette, &str) -> String) -> String {
    let inner = LINE_WIDTH.saturating_sub(2);
    let mut out = String::new();
    let top = format!("╔{}╗", "═".repeat(inner));
    let bottom = format!("╚{}╝", "═".repeat(inner));
    out.push_str(&style(palette, &top));
    out.push('\n');
    for line in lines {
        let row = format!("║{line:^inner$}║");
        out.push_str(&style(palette, &row));
        out.push('\n');
    }
    out.push_str(&style(palette, &bottom));
    out
}

/// Builds the welcome banner shown at session start.
#[must_use]
pub fn welcome_banner(palette: Palette) -> String {
    boxed(
        palette,
        &["", "WELCOME TO TALLY", "", "Organize your tasks, one session at a time", ""],
        Palette::primary,
    )
}

/// Builds the goodbye banner shown at session end.
#[must_use]
pub fn goodbye_banner(palette: Palette) -> String {
    boxed(
        palette,
        &["", "Thank you for using Tally!", "", "Stay organized, stay productive", ""],
        Palette::success,
    )
}

/// Builds the main menu.
#[must_use]
pub fn main_menu(palette: Palette) -> String {
    let divider = palette.muted(&"━".repeat(LINE_WIDTH));
    let mut out = String::new();
    out.push_str(&divider);
    out.push('\n');
    let heading = format!("{title:^width$}", title = "TALLY - MAIN MENU", width = LINE_WIDTH);
    out.push_str(&palette.primary(&heading));
    out.push('\n');
    out.push_str(&divider);
    out.push('\n');
    for option in [
        "1. Add Task",
        "2. View Tasks",
        "3. Update Task",
        "4. Delete Task",
        "5. Mark Task Complete/Incomplete",
        "6. View Task Summary",
        "7. Exit",
    ] {
        out.push_str(option);
        out.push('\n');
    }
    out.push_str(&divider);
    out
}

/// Builds a single task card: id, title, description, and status.
#[must_use]
pub fn task_card(palette: Palette, task: &Task) -> String {
    let divider = palette.muted(&"─".repeat(LINE_WIDTH));
    let (marker, status_text) = if task.completed() {
        (MARK_DONE, "Complete")
    } else {
        (MARK_OPEN, "Incomplete")
    };
    let status = if task.completed() {
        palette.success(&format!("{marker} {status_text}"))
    } else {
        palette.pending(&format!("{marker} {status_text}"))
    };
    let description = if task.description().is_empty() {
        palette.muted("(none)")
    } else {
        task.description().to_string()
    };

    let mut out = String::new();
    out.push_str(&palette.info(&format!("Task #{}", task.id())));
    out.push('\n');
    out.push_str(&divider);
    out.push('\n');
    out.push_str(&format!("Title: {}\n", palette.task(task.title().as_str())));
    out.push_str(&format!("Description: {description}\n"));
    out.push_str(&format!("Status: {status}\n"));
    out.push_str(&divider);
    out
}

/// Builds the full task listing, or an empty-list message.
#[must_use]
pub fn task_list(palette: Palette, tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return palette.pending("No tasks found. Your task list is empty!");
    }
    let divider = palette.muted(&"━".repeat(LINE_WIDTH));
    let mut out = String::new();
    out.push_str(&divider);
    out.push('\n');
    out.push_str(&palette.primary(&format!("TOTAL TASKS: {}", tasks.len())));
    out.push('\n');
    out.push_str(&divider);
    for task in tasks {
        out.push('\n');
        out.push_str(&task_card(palette, task));
    }
    out
}

/// Builds the summary box with total, complete, and incomplete counts.
#[must_use]
pub fn summary_box(palette: Palette, summary: &TaskSummary) -> String {
    let inner = LINE_WIDTH.saturating_sub(2);
    let mut out = String::new();
    out.push_str(&palette.info(&format!("┌{}┐", "─".repeat(inner))));
    out.push('\n');
    out.push_str(&palette.info(&format!("│{title:^inner$}│", title = "TASK SUMMARY")));
    out.push('\n');
    out.push_str(&palette.info(&format!("├{}┤", "─".repeat(inner))));
    out.push('\n');
    for (label, value, style) in [
        ("Total Tasks:", summary.total, Palette::primary as fn(Palette, &str) -> String),
        ("Completed:", summary.complete, Palette::success),
        ("Incomplete:", summary.incomplete, Palette::pending),
    ] {
        let row = format!("  {label:<18}{value}");
        let body = format!("{row:<inner$}");
        out.push_str(&format!(
            "{}{}{}\n",
            palette.info("│"),
            style(palette, &body),
            palette.info("│")
        ));
    }
    out.push_str(&palette.info(&format!("└{}┘", "─".repeat(inner))));
    out
}

/// Styles a success line with its check marker.
#[must_use]
pub fn success_line(palette: Palette, text: &str) -> String {
    palette.success(&format!("{MARK_DONE} {text}"))
}

/// Styles an error line with its cross marker.
#[must_use]
pub fn error_line(palette: Palette, text: &str) -> String {
    palette.error(&format!("✗ Error: {text}"))
}
