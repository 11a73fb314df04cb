use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use eyre::{Result, eyre};
use staffstore::auth::Credentials;
use staffstore::filter::{self, Filters, StatusFilter};
use staffstore::models::{EmployeeDraft, Gender};
use staffstore::storage::FileBackend;
use staffstore::store::Store;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "staffstore")]
#[command(about = "Employee roster manager backed by local key-value storage")]
#[command(version)]
struct Cli {
    /// Store root directory (default: the platform data directory)
    #[arg(short, long)]
    store_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a session with the demo credentials
    Login {
        /// Username
        #[arg(short, long)]
        username: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },

    /// End the current session
    Logout,

    /// Show session state and roster totals
    Status,

    /// Add an employee to the roster
    Add(AddArgs),

    /// List employees, optionally filtered
    List(ListArgs),

    /// Edit an existing employee
    Edit(EditArgs),

    /// Delete an employee
    Delete {
        /// Employee id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Flip an employee between active and inactive
    Toggle {
        /// Employee id
        id: String,
    },

    /// Show roster totals
    Stats,
}

#[derive(Args)]
struct AddArgs {
    /// Full name
    #[arg(long)]
    name: String,

    /// Gender
    #[arg(long, value_enum)]
    gender: GenderArg,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    dob: NaiveDate,

    /// Home state, from the fixed list of Indian states
    #[arg(long)]
    state: String,

    /// Create the record as inactive
    #[arg(long)]
    inactive: bool,

    /// Profile image URL; omitted means a generated avatar
    #[arg(long)]
    image: Option<String>,
}

#[derive(Args)]
struct ListArgs {
    /// Case-insensitive substring match on the full name
    #[arg(short, long, default_value = "")]
    search: String,

    /// Keep only one gender
    #[arg(short, long, value_enum)]
    gender: Option<GenderArg>,

    /// Keep only active or only inactive employees
    #[arg(long, value_enum)]
    status: Option<StatusArg>,
}

#[derive(Args)]
struct EditArgs {
    /// Employee id
    id: String,

    /// New full name
    #[arg(long)]
    name: Option<String>,

    /// New gender
    #[arg(long, value_enum)]
    gender: Option<GenderArg>,

    /// New date of birth (YYYY-MM-DD)
    #[arg(long)]
    dob: Option<NaiveDate>,

    /// New home state
    #[arg(long)]
    state: Option<String>,

    /// New active flag
    #[arg(long)]
    active: Option<bool>,

    /// New profile image URL
    #[arg(long)]
    image: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
    Other,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
            GenderArg::Other => Gender::Other,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Active,
    Inactive,
}

impl From<StatusArg> for StatusFilter {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Active => StatusFilter::Active,
            StatusArg::Inactive => StatusFilter::Inactive,
        }
    }
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let root = match cli.store_path {
        Some(path) => path,
        None => dirs::data_dir()
            .ok_or_else(|| eyre!("No data directory on this platform; pass --store-path"))?,
    };

    // Open store
    let mut store = Store::open(&root)?;

    // Everything except the session commands sits behind the login gate
    let gated = !matches!(
        cli.command,
        Commands::Login { .. } | Commands::Logout | Commands::Status
    );
    if gated {
        require_login(&store)?;
        store.ensure_seeded()?;
    }

    match cli.command {
        Commands::Login { username, password } => cmd_login(&mut store, username, password)?,
        Commands::Logout => cmd_logout(&mut store)?,
        Commands::Status => cmd_status(&store),
        Commands::Add(args) => cmd_add(&mut store, args)?,
        Commands::List(args) => cmd_list(&store, args),
        Commands::Edit(args) => cmd_edit(&mut store, args)?,
        Commands::Delete { id, yes } => cmd_delete(&mut store, &id, yes)?,
        Commands::Toggle { id } => cmd_toggle(&mut store, &id)?,
        Commands::Stats => cmd_stats(&store),
    }

    Ok(())
}

fn require_login(store: &Store<FileBackend>) -> Result<()> {
    if store.is_authenticated() {
        Ok(())
    } else {
        Err(eyre!("Not logged in. Run `staffstore login` first"))
    }
}

fn cmd_login(store: &mut Store<FileBackend>, username: String, password: String) -> Result<()> {
    if store.is_authenticated() {
        println!("Already logged in");
        return Ok(());
    }

    let credentials = Credentials { username, password };
    if !credentials.verify() {
        return Err(eyre!(
            "Invalid credentials. Use username: admin, password: admin123"
        ));
    }

    store.login()?;
    println!("Logged in");
    Ok(())
}

fn cmd_logout(store: &mut Store<FileBackend>) -> Result<()> {
    store.logout()?;
    println!("Logged out");
    Ok(())
}

fn cmd_status(store: &Store<FileBackend>) {
    if store.is_authenticated() {
        println!("Session: {}", "logged in".green());
        let totals = filter::tally(&store.all());
        println!(
            "Employees: {} ({} active, {} inactive)",
            totals.total, totals.active, totals.inactive
        );
    } else {
        println!("Session: {}", "logged out".red());
    }
}

fn cmd_add(store: &mut Store<FileBackend>, args: AddArgs) -> Result<()> {
    let mut draft = EmployeeDraft::new(args.name, args.gender.into(), args.dob, args.state);
    draft.active = !args.inactive;
    draft.profile_image = args.image;

    let employee = store.add(draft)?;
    println!("Added {} ({})", employee.full_name, employee.id);
    Ok(())
}

fn cmd_list(store: &Store<FileBackend>, args: ListArgs) {
    let filters = Filters {
        search: args.search,
        gender: args.gender.map(Into::into),
        status: args.status.map(Into::into),
    };

    let roster = store.all();
    let view = filter::apply(&roster, &filters);

    if view.is_empty() {
        println!("No employees found");
        return;
    }

    println!(
        "{:<36}  {:<24}  {:<6}  {:<10}  {:<17}  {}",
        "ID", "NAME", "GENDER", "DOB", "STATE", "STATUS"
    );
    for employee in &view {
        let status = if employee.active {
            "active".green()
        } else {
            "inactive".red()
        };
        let gender = employee.gender.to_string();
        let dob = employee.date_of_birth.to_string();
        println!(
            "{:<36}  {:<24}  {:<6}  {:<10}  {:<17}  {}",
            employee.id, employee.full_name, gender, dob, employee.state, status
        );
    }
    println!("\n{} of {} employees", view.len(), roster.len());
}

fn cmd_edit(store: &mut Store<FileBackend>, args: EditArgs) -> Result<()> {
    let Some(current) = store.find(&args.id) else {
        println!("No employee with id {}", args.id);
        return Ok(());
    };

    // Flags that were not passed keep the current values; the store still
    // replaces the whole record
    let draft = EmployeeDraft {
        full_name: args.name.unwrap_or(current.full_name),
        gender: args.gender.map(Into::into).unwrap_or(current.gender),
        date_of_birth: args.dob.unwrap_or(current.date_of_birth),
        state: args.state.unwrap_or(current.state),
        active: args.active.unwrap_or(current.active),
        profile_image: args.image.or(Some(current.profile_image)),
    };

    if store.update(&args.id, draft)? {
        println!("Updated {}", args.id);
    } else {
        println!("No employee with id {}", args.id);
    }
    Ok(())
}

fn cmd_delete(store: &mut Store<FileBackend>, id: &str, yes: bool) -> Result<()> {
    let Some(employee) = store.find(id) else {
        println!("No employee with id {}", id);
        return Ok(());
    };

    if !yes {
        let prompt = format!(
            "Delete {}? This action cannot be undone. [y/N] ",
            employee.full_name
        );
        if !confirm(&prompt)? {
            println!("Cancelled");
            return Ok(());
        }
    }

    if store.remove(id)? {
        println!("Deleted {}", employee.full_name);
    } else {
        println!("No employee with id {}", id);
    }
    Ok(())
}

fn cmd_toggle(store: &mut Store<FileBackend>, id: &str) -> Result<()> {
    match store.toggle_active(id)? {
        Some(true) => println!("{} is now {}", id, "active".green()),
        Some(false) => println!("{} is now {}", id, "inactive".red()),
        None => println!("No employee with id {}", id),
    }
    Ok(())
}

fn cmd_stats(store: &Store<FileBackend>) {
    let totals = filter::tally(&store.all());
    println!("Total employees:    {}", totals.total);
    println!("Active employees:   {}", totals.active.to_string().green());
    println!("Inactive employees: {}", totals.inactive.to_string().red());
}

/// Ask a yes/no question on stdin; only an explicit yes confirms.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
