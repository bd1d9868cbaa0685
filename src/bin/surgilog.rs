//! Terminal front end for the SurgiLog client.
//!
//! Login state persists in the session file between invocations, so the
//! command surface mirrors the app's screens: dashboard, search, preview,
//! and the new-record form (a JSON draft file).

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use surgilog::prelude::*;
use surgilog::records::image_data_uri;
use surgilog::reference;
use surgilog::views::{dashboard, preview, search, visible_tabs, Tab};

#[derive(Parser)]
#[command(name = "surgilog", about = "Operative-record client", version)]
struct Cli {
    /// Record endpoint URL
    #[arg(long, env = "SURGILOG_URL")]
    url: String,

    /// Admin allow-list entries (repeatable)
    #[arg(long = "admin", env = "SURGILOG_ADMINS", value_delimiter = ',')]
    admins: Vec<String>,

    /// Treat the endpoint as legacy: fire-and-forget writes with a
    /// delayed refetch instead of an acknowledged write
    #[arg(long)]
    no_ack: bool,

    /// Session file path override
    #[arg(long)]
    session_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in with an email and persist the session
    Login { email: String },
    /// Clear the persisted session
    Logout,
    /// Show the logged-in user and the screens their role can open
    Whoami,
    /// Fetch all records and show the dashboard
    Dashboard,
    /// Fetch all records and search by HN, patient name or procedure
    Search { query: String },
    /// Fetch all records and print the two-page report for one record
    Preview { id: String },
    /// Submit a new record from a JSON draft file
    Submit {
        /// Draft file with the form fields (camelCase keys)
        #[arg(long)]
        file: PathBuf,
        /// Attach an image file as photo 1
        #[arg(long)]
        image1: Option<PathBuf>,
        /// Attach an image file as photo 2
        #[arg(long)]
        image2: Option<PathBuf>,
    },
    /// Render the report for a draft file without submitting it
    PrintDraft {
        #[arg(long)]
        file: PathBuf,
    },
    /// Suggest values for a form field (department, ward, staff)
    Suggest {
        field: SuggestField,
        input: String,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum SuggestField {
    Department,
    Ward,
    Staff,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            eprintln!("(run the command again to retry)");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let mut options = ClientOptions::default()
        .with_admin_emails(cli.admins.clone())
        .with_write_acknowledgment(!cli.no_ack);
    if let Some(path) = &cli.session_path {
        options = options.with_session_path(path.clone());
    }
    let client = SurgiLog::new_with_options(&cli.url, options);

    match cli.command {
        Command::Login { email } => {
            let user = client.auth().login(&email)?;
            println!("logged in as {} ({})", user.name, user.role);
        }
        Command::Logout => {
            client.auth().logout()?;
            println!("logged out");
        }
        Command::Whoami => {
            let user = require_login(&client)?;
            println!("{} <{}> role {}", user.name, user.email, user.role);
            for tab in visible_tabs(user.role) {
                let label = match tab {
                    Tab::Dashboard => "dashboard",
                    Tab::NewRecord => "new record",
                    Tab::Search => "search",
                };
                println!("  - {}", label);
            }
        }
        Command::Dashboard => {
            require_login(&client)?;
            let collection = hydrate(&client).await?;
            let stats = dashboard::DashboardStats::from_records(collection.records());
            print!("{}", dashboard::render(&stats));
        }
        Command::Search { query } => {
            let user = require_login(&client)?;
            let collection = hydrate(&client).await?;
            let results = search::search(collection.records(), &query);
            print!("{}", search::render(&results, user.role));
        }
        Command::Preview { id } => {
            require_login(&client)?;
            let collection = hydrate(&client).await?;
            let record = collection
                .get(&id)
                .ok_or_else(|| Error::record(format!("no record with id {}", id)))?;
            print!("{}", preview::render(record));
        }
        Command::Submit { file, image1, image2 } => {
            let user = require_login(&client)?;
            if !user.role.can_create_records() {
                return Err(Error::record("your role cannot create records"));
            }
            let mut draft = read_draft(&file)?;
            if let Some(path) = image1 {
                draft.image1_url = read_image(&path)?;
            }
            if let Some(path) = image2 {
                draft.image2_url = read_image(&path)?;
            }
            let record = draft.build_submission();
            let records = client.records().append(&record).await?;

            let mut collection = RecordCollection::new();
            collection.hydrate(records);

            // submit lands the user on search, filtered to the new patient
            println!("record {} submitted; store now holds {} records", record.id, collection.len());
            let results = search::search(collection.records(), &record.hospital_number);
            print!("{}", search::render(&results, user.role));
        }
        Command::PrintDraft { file } => {
            let user = require_login(&client)?;
            if !user.role.can_create_records() {
                return Err(Error::record("your role cannot create records"));
            }
            let draft = read_draft(&file)?;
            draft.validate_for_print()?;
            let record = draft.build_draft();
            print!("{}", preview::render(&record));
        }
        Command::Suggest { field, input } => {
            let matches = match field {
                SuggestField::Department => reference::suggest(reference::DEPARTMENTS, &input),
                SuggestField::Ward => reference::suggest(reference::WARDS, &input),
                SuggestField::Staff => reference::suggest_staff(&input),
            };
            for suggestion in matches {
                println!("{}", suggestion);
            }
        }
    }

    Ok(())
}

fn require_login(client: &SurgiLog) -> Result<User, Error> {
    client
        .auth()
        .current_user()?
        .ok_or_else(|| Error::session("not logged in; run `surgilog login <email>` first"))
}

async fn hydrate(client: &SurgiLog) -> Result<RecordCollection, Error> {
    let records = client.records().fetch_all().await?;
    let mut collection = RecordCollection::new();
    collection.hydrate(records);
    Ok(collection)
}

fn read_draft(path: &Path) -> Result<RecordDraft, Error> {
    let raw = std::fs::read_to_string(path)?;
    let draft = serde_json::from_str(&raw)?;
    Ok(draft)
}

fn read_image(path: &Path) -> Result<String, Error> {
    let bytes = std::fs::read(path)?;
    let mime = match path.extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        _ => "image/jpeg",
    };
    Ok(image_data_uri(mime, &bytes))
}
