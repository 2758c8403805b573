use std::io::Write;

use anyhow::{anyhow, Result};
use clap::Parser;
use colored::Colorize;

use expense_tracker_back_end::action_router::{ActionRouterInput, ActionRouterOutput};
use expense_tracker_back_end::budgets::db_types::BudgetInput;
use expense_tracker_back_end::budgets::processor_enums::{BudgetsProcessorInput, BudgetsProcessorOutput};
use expense_tracker_back_end::cli_helper::{call_action_router, execute_with_retry, initialize_app_config, resolve_user};
use expense_tracker_back_end::cli_utils::formatting::{
    format_date, format_decimal, format_optional, format_percentage, print_header, print_section,
};
use expense_tracker_back_end::cli_utils::menu::{Operation, Section};
use expense_tracker_back_end::cli_utils::{
    confirm, format_json, format_record, format_table, print_error, print_info, print_success, print_warning,
    CliError, Input,
};
use expense_tracker_back_end::expenses::db_types::ExpenseInput;
use expense_tracker_back_end::expenses::processor_enums::{ExpensesProcessorInput, ExpensesProcessorOutput};
use expense_tracker_back_end::users::db_types::{CreateUser, UserRecord};
use expense_tracker_back_end::users::processor_enums::{UsersProcessorInput, UsersProcessorOutput};
use expense_tracker_back_end::utils::app_config::AppConfig;

/// Operator tool for users, expenses and budgets
#[derive(Parser, Debug)]
#[command(name = "tracker-cli", version, about)]
struct Args {
    /// Postgres connection string, or memory:// for a throwaway session
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    eprintln!("{}", "╔═══════════════════════════════════════════════════════╗".bright_cyan());
    eprintln!("{}", "║           Expense Tracker Admin CLI                   ║".bright_cyan());
    eprintln!("{}", "╚═══════════════════════════════════════════════════════╝".bright_cyan());
    eprintln!();

    eprint!("Initializing app config... ");
    std::io::stderr().flush().ok();

    let app_config = match initialize_app_config(&args.database_url) {
        Ok(config) => {
            eprintln!("{}", "✓ Ready".green());
            config
        }
        Err(e) => {
            eprintln!("{}", "✗ Failed".red());
            eprintln!("Error: {}", e);
            return Err(e);
        }
    };

    eprintln!();

    loop {
        let outcome = match Section::select() {
            Ok(Section::Users) => users_menu(&app_config).await,
            Ok(Section::Expenses) => expenses_menu(&app_config).await,
            Ok(Section::Budgets) => budgets_menu(&app_config).await,
            Ok(Section::Exit) => {
                eprintln!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(e) => {
                eprintln!("{}", format!("Error: {}", e).red());
                break;
            }
        };

        // One failed operation should not end the session
        if let Err(e) = outcome {
            print_error(&e.to_string());
        }

        eprintln!();
    }

    Ok(())
}

async fn pick_user(app_config: &AppConfig) -> Result<UserRecord> {
    let username = Input::get_string("Username")?;
    resolve_user(app_config, &username).await
}

// Users

async fn users_menu(app_config: &AppConfig) -> Result<()> {
    match Operation::select(&[Operation::View, Operation::Create, Operation::Back])? {
        Operation::View => view_user(app_config).await,
        Operation::Create => create_user(app_config).await,
        _ => Ok(()),
    }
}

async fn view_user(app_config: &AppConfig) -> Result<()> {
    print_header("View User");

    let user = pick_user(app_config).await?;
    format_record(vec![("ID", user.id.to_string()), ("Username", user.username.clone())]);
    print_section("As JSON");
    println!("{}", format_json(&user));

    Ok(())
}

async fn create_user(app_config: &AppConfig) -> Result<()> {
    print_header("Create User");

    let username = Input::get_string("Username")?;
    let credential = Input::get_string("Credential (opaque, stored as given)")?;

    execute_with_retry(
        || {
            let input = ActionRouterInput::Users(UsersProcessorInput::CreateUser(CreateUser {
                username: username.clone(),
                credential: credential.clone(),
            }));
            let app_config = app_config.clone();

            async move {
                match call_action_router(input, app_config).await? {
                    ActionRouterOutput::Users(UsersProcessorOutput::CreateUser(user)) => {
                        print_success(&format!("User {} created with id {}", user.username, user.id));
                        Ok(())
                    }
                    _ => Err(anyhow!("Unexpected output type")),
                }
            }
        },
        "create_user",
    )
    .await
}

// Expenses

async fn run_expenses(app_config: &AppConfig, owner: &UserRecord, input: ExpensesProcessorInput) -> Result<ExpensesProcessorOutput> {
    match call_action_router(ActionRouterInput::Expenses(owner.clone(), input), app_config.clone()).await? {
        ActionRouterOutput::Expenses(output) => Ok(output),
        _ => Err(anyhow!("Unexpected output type")),
    }
}

async fn expenses_menu(app_config: &AppConfig) -> Result<()> {
    let owner = pick_user(app_config).await?;
    print_info(&format!("Acting for {} (id {})", owner.username, owner.id));

    match Operation::select(&[Operation::List, Operation::Create, Operation::Delete, Operation::Back])? {
        Operation::List => list_expenses(app_config, &owner).await,
        Operation::Create => create_expense(app_config, &owner).await,
        Operation::Delete => delete_expense(app_config, &owner).await,
        _ => Ok(()),
    }
}

async fn list_expenses(app_config: &AppConfig, owner: &UserRecord) -> Result<()> {
    print_header("Expenses");

    match run_expenses(app_config, owner, ExpensesProcessorInput::GetExpenses).await? {
        ExpensesProcessorOutput::GetExpenses(records) => {
            let rows = records
                .iter()
                .map(|e| {
                    vec![
                        e.id.to_string(),
                        format_date(&e.date),
                        e.category.clone(),
                        e.title.clone(),
                        format_decimal(&e.amount),
                        format_optional(&e.description),
                    ]
                })
                .collect();
            format_table(vec!["ID", "Date", "Category", "Title", "Amount", "Description"], rows);
            Ok(())
        }
        _ => Err(anyhow!("Unexpected output type")),
    }
}

async fn create_expense(app_config: &AppConfig, owner: &UserRecord) -> Result<()> {
    print_header("Create Expense");

    let input = ExpenseInput {
        title: Input::get_string("Title")?,
        amount: Some(Input::get_decimal("Amount")?),
        date: Some(Input::get_date("Date")?),
        category: Input::get_string("Category")?,
        description: Input::get_optional_string("Description")?,
    };

    match run_expenses(app_config, owner, ExpensesProcessorInput::CreateExpense(input)).await? {
        ExpensesProcessorOutput::CreateExpense(record) => {
            print_success(&format!("Expense {} recorded", record.id));
            Ok(())
        }
        _ => Err(anyhow!("Unexpected output type")),
    }
}

async fn delete_expense(app_config: &AppConfig, owner: &UserRecord) -> Result<()> {
    print_header("Delete Expense");

    let expense_id = Input::get_i64("Expense ID")?;
    print_warning("Deleted expenses cannot be recovered");
    if !confirm(&format!("Delete expense {}?", expense_id))? {
        return Err(CliError::UserCancelled.into());
    }

    match run_expenses(app_config, owner, ExpensesProcessorInput::DeleteExpense(expense_id)).await? {
        ExpensesProcessorOutput::DeleteExpense => {
            print_success(&format!("Expense {} deleted", expense_id));
            Ok(())
        }
        _ => Err(anyhow!("Unexpected output type")),
    }
}

// Budgets

async fn run_budgets(app_config: &AppConfig, owner: &UserRecord, input: BudgetsProcessorInput) -> Result<BudgetsProcessorOutput> {
    match call_action_router(ActionRouterInput::Budgets(owner.clone(), input), app_config.clone()).await? {
        ActionRouterOutput::Budgets(output) => Ok(output),
        _ => Err(anyhow!("Unexpected output type")),
    }
}

async fn budgets_menu(app_config: &AppConfig) -> Result<()> {
    let owner = pick_user(app_config).await?;
    print_info(&format!("Acting for {} (id {})", owner.username, owner.id));

    match Operation::select(&[Operation::List, Operation::Create, Operation::Status, Operation::Back])? {
        Operation::List => list_budgets(app_config, &owner).await,
        Operation::Create => create_budget(app_config, &owner).await,
        Operation::Status => budget_status(app_config, &owner).await,
        _ => Ok(()),
    }
}

async fn list_budgets(app_config: &AppConfig, owner: &UserRecord) -> Result<()> {
    print_header("Budgets");

    match run_budgets(app_config, owner, BudgetsProcessorInput::GetBudgets).await? {
        BudgetsProcessorOutput::GetBudgets(records) => {
            let rows = records
                .iter()
                .map(|b| {
                    vec![
                        b.id.to_string(),
                        b.category.clone(),
                        format_decimal(&b.amount),
                        format_date(&b.start_date),
                        format_date(&b.end_date),
                        format_optional(&b.description),
                    ]
                })
                .collect();
            format_table(vec!["ID", "Category", "Limit", "From", "To", "Description"], rows);
            Ok(())
        }
        _ => Err(anyhow!("Unexpected output type")),
    }
}

async fn create_budget(app_config: &AppConfig, owner: &UserRecord) -> Result<()> {
    print_header("Create Budget");

    let input = BudgetInput {
        category: Input::get_string("Category")?,
        amount: Some(Input::get_decimal("Limit")?),
        start_date: Some(Input::get_date("Start date")?),
        end_date: Some(Input::get_date("End date")?),
        description: Input::get_optional_string("Description")?,
    };

    match run_budgets(app_config, owner, BudgetsProcessorInput::CreateBudget(input)).await? {
        BudgetsProcessorOutput::CreateBudget(record) => {
            print_success(&format!("Budget {} created", record.id));
            Ok(())
        }
        _ => Err(anyhow!("Unexpected output type")),
    }
}

async fn budget_status(app_config: &AppConfig, owner: &UserRecord) -> Result<()> {
    print_header("Budget Status");

    let category = Input::get_string("Category")?;

    match run_budgets(app_config, owner, BudgetsProcessorInput::GetBudgetStatus(category)).await? {
        BudgetsProcessorOutput::GetBudgetStatus(status) => {
            format_record(vec![
                ("Category", status.budget.category.clone()),
                ("Window", format!("{} .. {}", format_date(&status.budget.start_date), format_date(&status.budget.end_date))),
                ("Limit", format_decimal(&status.budget.amount)),
                ("Spent", format_decimal(&status.total_spent)),
                ("Remaining", format_decimal(&status.remaining)),
                ("Used", format_percentage(status.percentage_used)),
            ]);

            print_section("Expenses in window");
            let rows = status
                .expenses
                .iter()
                .map(|e| vec![e.id.to_string(), format_date(&e.date), e.title.clone(), format_decimal(&e.amount)])
                .collect();
            format_table(vec!["ID", "Date", "Title", "Amount"], rows);

            if status.is_exceeded() {
                print_warning("Budget exceeded");
            }
            Ok(())
        }
        _ => Err(anyhow!("Unexpected output type")),
    }
}
