//! Interactive menu loop
//!
//! Holds only presentation state (the store handle and the current
//! locale); every change to the task list goes through the store's
//! operations and the screen is re-rendered from the store afterward.

use std::io::{self, Write};

use gorev_core::task::{Priority, SortKey, Task, TaskStore};
use gorev_core::Error;

use crate::lang::{error_key, message, Locale, MessageKey};

pub struct App {
    store: TaskStore,
    locale: Locale,
}

impl App {
    pub fn new(store: TaskStore, locale: Locale) -> Self {
        Self { store, locale }
    }

    pub fn run(mut self) -> io::Result<()> {
        loop {
            self.print_menu();
            let Some(choice) = prompt(self.msg(MessageKey::MenuChoice))? else {
                // End of input counts as exit
                println!("{}", self.msg(MessageKey::Goodbye));
                return Ok(());
            };
            match choice.as_str() {
                "1" => {
                    self.print_task_list();
                }
                "2" => self.add_task()?,
                "3" => self.edit_task()?,
                "4" => self.delete_task()?,
                "5" => self.toggle_completed()?,
                "6" => self.sorted_list()?,
                "7" => self.change_language(),
                "8" => {
                    println!("{}", self.msg(MessageKey::Goodbye));
                    return Ok(());
                }
                _ => println!("{}", self.msg(MessageKey::InvalidChoice)),
            }
        }
    }

    fn msg(&self, key: MessageKey) -> &'static str {
        message(self.locale, key)
    }

    fn print_menu(&self) {
        println!("\n{}", "=".repeat(40));
        println!("    {}    ", self.msg(MessageKey::AppTitle));
        println!("{}", "=".repeat(40));
        for key in [
            MessageKey::MenuList,
            MessageKey::MenuAdd,
            MessageKey::MenuEdit,
            MessageKey::MenuDelete,
            MessageKey::MenuToggle,
            MessageKey::MenuSort,
            MessageKey::MenuLanguage,
            MessageKey::MenuExit,
        ] {
            println!("{}", self.msg(key));
        }
        println!("{}", "-".repeat(40));
    }

    /// Print the numbered task list; false if there is nothing to show
    fn print_task_list(&self) -> bool {
        if self.store.is_empty() {
            println!("{}", self.msg(MessageKey::NoTasks));
            return false;
        }
        println!("\n{}", self.msg(MessageKey::TaskListHeader));
        for (i, task) in self.store.list().iter().enumerate() {
            println!("{}. {}", i + 1, self.format_task(task));
        }
        true
    }

    fn format_task(&self, task: &Task) -> String {
        let status = if task.completed { "✓" } else { "□" };
        let priority = match task.priority {
            Priority::Low => self.msg(MessageKey::LowPriority),
            Priority::Medium => self.msg(MessageKey::MediumPriority),
            Priority::High => self.msg(MessageKey::HighPriority),
        };
        match &task.due_date {
            Some(date) => format!("{} [{}] {} [{}]", status, priority, task.text, date),
            None => format!("{} [{}] {}", status, priority, task.text),
        }
    }

    fn add_task(&mut self) -> io::Result<()> {
        let Some(text) = prompt(self.msg(MessageKey::EnterTask))? else {
            return Ok(());
        };
        let Some(due_date) = prompt(self.msg(MessageKey::EnterDueDate))? else {
            return Ok(());
        };
        let Some(priority) = self.prompt_priority(MessageKey::EnterPriority, Priority::Medium)?
        else {
            return Ok(());
        };
        let Some(completed) = self.prompt_yes_no(MessageKey::EnterCompleted, false)? else {
            return Ok(());
        };

        let mut task = Task::new(text)
            .with_priority(priority)
            .with_completed(completed);
        if !due_date.is_empty() {
            task = task.with_due_date(due_date);
        }

        let result = self.store.add(task);
        self.report_mutation(result, MessageKey::TaskAdded);
        Ok(())
    }

    fn edit_task(&mut self) -> io::Result<()> {
        if !self.print_task_list() {
            return Ok(());
        }
        let Some(position) = self.prompt_position()? else {
            return Ok(());
        };
        let Some(current) = position
            .checked_sub(1)
            .and_then(|i| self.store.list().get(i))
            .cloned()
        else {
            println!("{}", self.msg(MessageKey::InvalidTaskNum));
            return Ok(());
        };

        let Some(text) = prompt(self.msg(MessageKey::EnterNewTask))? else {
            return Ok(());
        };
        let text = if text.is_empty() {
            current.text.clone()
        } else {
            text
        };

        let Some(date_input) = prompt(self.msg(MessageKey::EnterNewDueDate))? else {
            return Ok(());
        };
        let due_date = match date_input.as_str() {
            "-" => None,
            "" => current.due_date.clone(),
            _ => Some(date_input),
        };

        let Some(priority) = self.prompt_priority(MessageKey::EnterNewPriority, current.priority)?
        else {
            return Ok(());
        };
        let Some(completed) = self.prompt_yes_no(MessageKey::EnterCompleted, current.completed)?
        else {
            return Ok(());
        };

        let mut task = Task::new(text)
            .with_priority(priority)
            .with_completed(completed);
        if let Some(date) = due_date {
            task = task.with_due_date(date);
        }

        let result = self.store.edit(position, task);
        self.report_mutation(result, MessageKey::TaskEdited);
        Ok(())
    }

    fn delete_task(&mut self) -> io::Result<()> {
        if !self.print_task_list() {
            return Ok(());
        }
        let Some(position) = self.prompt_position()? else {
            return Ok(());
        };
        match self.prompt_yes_no(MessageKey::ConfirmDelete, false)? {
            Some(true) => {}
            _ => return Ok(()),
        }

        let result = self.store.delete(position);
        self.report_mutation(result, MessageKey::TaskDeleted);
        Ok(())
    }

    fn toggle_completed(&mut self) -> io::Result<()> {
        if !self.print_task_list() {
            return Ok(());
        }
        let Some(position) = self.prompt_position()? else {
            return Ok(());
        };
        let Some(current) = position
            .checked_sub(1)
            .and_then(|i| self.store.list().get(i))
            .cloned()
        else {
            println!("{}", self.msg(MessageKey::InvalidTaskNum));
            return Ok(());
        };

        let completed = !current.completed;
        let result = self.store.edit(position, current.with_completed(completed));
        self.report_mutation(result, MessageKey::TaskEdited);
        Ok(())
    }

    fn sorted_list(&self) -> io::Result<()> {
        if self.store.is_empty() {
            println!("{}", self.msg(MessageKey::NoTasks));
            return Ok(());
        }
        let Some(choice) = prompt(self.msg(MessageKey::SortPrompt))? else {
            return Ok(());
        };
        let key = match choice.as_str() {
            "1" => SortKey::Name,
            "2" => SortKey::Priority,
            "3" => SortKey::DueDate,
            _ => {
                println!("{}", self.msg(MessageKey::InvalidChoice));
                return Ok(());
            }
        };

        // Rows keep their storage numbers, so they stay valid for
        // edit/delete.
        println!("\n{}", self.msg(MessageKey::TaskListHeader));
        for (position, task) in self.store.sorted_view(key) {
            println!("{}. {}", position, self.format_task(task));
        }
        Ok(())
    }

    fn change_language(&mut self) {
        self.locale = self.locale.toggled();
        println!("{}", self.msg(MessageKey::LangChanged));
    }

    /// Prompt for a task number; `None` cancels the operation
    fn prompt_position(&self) -> io::Result<Option<usize>> {
        let Some(input) = prompt(self.msg(MessageKey::EnterTaskNum))? else {
            return Ok(None);
        };
        match input.parse::<usize>() {
            Ok(position) => Ok(Some(position)),
            Err(_) => {
                println!("{}", self.msg(MessageKey::InvalidTaskNum));
                Ok(None)
            }
        }
    }

    /// Prompt for a priority keyword; blank input keeps `default`
    fn prompt_priority(
        &self,
        key: MessageKey,
        default: Priority,
    ) -> io::Result<Option<Priority>> {
        let Some(input) = prompt(self.msg(key))? else {
            return Ok(None);
        };
        if input.is_empty() {
            return Ok(Some(default));
        }
        match Priority::parse(&input.to_lowercase()) {
            Some(priority) => Ok(Some(priority)),
            None => {
                println!("{}", self.msg(MessageKey::InvalidPriority));
                Ok(None)
            }
        }
    }

    /// Localized yes/no prompt; blank input keeps `default`
    fn prompt_yes_no(&self, key: MessageKey, default: bool) -> io::Result<Option<bool>> {
        let Some(input) = prompt(self.msg(key))? else {
            return Ok(None);
        };
        if input.is_empty() {
            return Ok(Some(default));
        }
        let input = input.to_lowercase();
        let yes = self.msg(MessageKey::Yes).to_lowercase();
        let initial = &yes[..yes
            .char_indices()
            .nth(1)
            .map(|(i, _)| i)
            .unwrap_or(yes.len())];
        Ok(Some(input == yes || input == initial))
    }

    /// Print the success message, then surface a persistence failure too:
    /// the mutation already applied in memory even when the write failed.
    fn report_mutation(&self, result: gorev_core::Result<Task>, success: MessageKey) {
        match result {
            Ok(_) => println!("{}", self.msg(success)),
            Err(Error::Persistence(detail)) => {
                println!("{}", self.msg(success));
                println!("{}{}", self.msg(MessageKey::FileError), detail);
            }
            Err(err) => self.report_error(&err),
        }
    }

    fn report_error(&self, err: &Error) {
        match err {
            Error::MalformedRecord(detail) | Error::Persistence(detail) => {
                println!("{}{}", self.msg(error_key(err)), detail);
            }
            _ => println!("{}", self.msg(error_key(err))),
        }
    }
}

/// Read one trimmed line from stdin; `None` on end of input
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
