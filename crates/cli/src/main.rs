mod render;

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use smartspend_core::models::form::{FormAction, TransactionForm};
use smartspend_core::models::settings::Settings;
use smartspend_core::models::transaction::TransactionKind;
use smartspend_core::SmartSpend;

#[derive(Parser, Debug)]
#[command(name = "smartspend", version, about = "Track income and expenses against a SmartSpend server")]
struct Cli {
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides `api_base_url` from the settings file
    #[arg(long)]
    api_url: Option<String>,

    /// Overrides `token` from the settings file
    #[arg(long)]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Balance, spending overview and recent transactions
    Home,
    /// List the categories available for expenses (or incomes)
    Categories {
        #[arg(long)]
        income: bool,
    },
    /// Record a new expense (or income)
    Add {
        #[arg(long)]
        income: bool,
        #[arg(long)]
        amount: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        category_id: String,
        /// Defaults to now, as `YYYY-MM-DDTHH:MM`
        #[arg(long)]
        date: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();
    let cli = Cli::parse();
    let app = SmartSpend::new(load_settings(&cli)?)?;

    match cli.command {
        Command::Home => {
            let dashboard = app.load_home().await?;
            print!("{}", render::home(&dashboard));
        }
        Command::Categories { income } => {
            let kind = kind_of(income);
            let form = app
                .load_form_categories(TransactionForm::new().reduce(FormAction::SetKind(kind)))
                .await;
            print!("{}", render::category_options(&form.category_options()));
        }
        Command::Add {
            income,
            amount,
            description,
            category_id,
            date,
        } => {
            let kind = kind_of(income);
            let mut form = app
                .load_form_categories(TransactionForm::new().reduce(FormAction::SetKind(kind)))
                .await;
            let Some(category) = form.categories.iter().find(|c| c.id == category_id).cloned()
            else {
                bail!("no {kind} category with id '{category_id}'");
            };
            form = form
                .reduce(FormAction::SetAmount(amount))
                .reduce(FormAction::SetDescription(description))
                .reduce(FormAction::SelectCategory(category));
            if let Some(date) = date {
                form = form.reduce(FormAction::SetDate(date));
            }

            let (form, result) = app.save_transaction(form).await;
            if let Some(message) = form.error_message() {
                eprintln!("{message}");
            }
            let saved = result.context("failed to save transaction")?;
            println!("Saved {kind}: {} {}", saved.description, saved.amount);
        }
    }

    Ok(())
}

fn kind_of(income: bool) -> TransactionKind {
    if income {
        TransactionKind::Income
    } else {
        TransactionKind::Expense
    }
}

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(url) = &cli.api_url {
        settings.api_base_url = url.clone();
    }
    if let Some(token) = &cli.token {
        settings.token = Some(token.clone());
    }
    settings.validate()?;
    Ok(settings)
}

/// Log to stderr so rendered output on stdout stays clean.
/// Level comes from `RUST_LOG`, defaulting to `info`.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
