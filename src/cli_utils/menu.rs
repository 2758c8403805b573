use dialoguer::Select;

use crate::cli_utils::CliResult;

/// Interactive menu builder
pub struct Menu {
    title: String,
    items: Vec<String>,
}

impl Menu {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            items: Vec::new(),
        }
    }

    pub fn items(mut self, items: Vec<&str>) -> Self {
        self.items.extend(items.iter().map(|s| s.to_string()));
        self
    }

    /// Show the menu and get the selected index
    pub fn interact(&self) -> CliResult<usize> {
        let idx = Select::new()
            .with_prompt(&self.title)
            .items(&self.items)
            .default(0)
            .interact()?;

        Ok(idx)
    }
}

/// Top level areas of the admin CLI
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Section {
    Users,
    Expenses,
    Budgets,
    Exit,
}

impl Section {
    pub fn select() -> CliResult<Self> {
        let menu = Menu::new("Select area").items(vec!["Users", "Expenses", "Budgets", "Exit"]);

        Ok(match menu.interact()? {
            0 => Section::Users,
            1 => Section::Expenses,
            2 => Section::Budgets,
            _ => Section::Exit,
        })
    }
}

/// Operations offered inside a section; each section lists its own subset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    List,
    View,
    Create,
    Delete,
    Status,
    Back,
}

impl Operation {
    pub fn label(&self) -> &'static str {
        match self {
            Operation::List => "List",
            Operation::View => "View",
            Operation::Create => "Create",
            Operation::Delete => "Delete",
            Operation::Status => "Status",
            Operation::Back => "Back",
        }
    }

    pub fn select(offered: &[Operation]) -> CliResult<Self> {
        let labels: Vec<&str> = offered.iter().map(Operation::label).collect();
        let idx = Menu::new("Select operation").items(labels).interact()?;

        Ok(offered.get(idx).copied().unwrap_or(Operation::Back))
    }
}
