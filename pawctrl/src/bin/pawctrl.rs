use clap::{
    Parser,
    Subcommand,
};
use pawcore::{
    address::NewAddress,
    animal::AnimalQuery,
    person::WorkerRole,
    task::{
        CompletionStatus,
        TaskQuery,
        TaskSortKey,
    },
};
use pawctrl::platform::{
    Builder,
    NewWorker,
    Platform,
};

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[clap(flatten)]
    platform_builder: Builder,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(arg_required_else_help = true)]
    Shelter {
        #[command(subcommand)]
        cmd: ShelterCmd,
    },
    #[command(arg_required_else_help = true)]
    Worker {
        #[command(subcommand)]
        cmd: WorkerCmd,
    },
    #[command(arg_required_else_help = true)]
    Task {
        #[command(subcommand)]
        cmd: TaskCmd,
    },
    #[command(arg_required_else_help = true)]
    Animal {
        #[command(subcommand)]
        cmd: AnimalCmd,
    },
}

#[derive(Debug, clap::Args)]
struct AddressArgs {
    #[arg(long)]
    street1: String,
    #[arg(long)]
    street2: Option<String>,
    #[arg(long)]
    city: String,
    #[arg(long)]
    state: String,
    #[arg(long)]
    postal: String,
    #[arg(long)]
    country: String,
}

impl From<AddressArgs> for NewAddress {
    fn from(args: AddressArgs) -> Self {
        NewAddress {
            street1: args.street1,
            street2: args.street2,
            city: args.city,
            state: args.state,
            postal: args.postal,
            country: args.country,
        }
    }
}

#[derive(Debug, Subcommand)]
enum ShelterCmd {
    #[command(arg_required_else_help = true)]
    Create {
        name: String,
        phone_number: String,
        email_address: String,
        #[command(flatten)]
        address: AddressArgs,
    },
    List,
}

#[derive(Debug, Subcommand)]
enum WorkerCmd {
    /// Hire a worker, creating their login with the initial password
    #[command(arg_required_else_help = true)]
    Hire {
        shelter_id: i64,
        username: String,
        password: String,
        /// One of MA (manager), RE (regular) or VT (vet)
        role: WorkerRole,
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone_number: String,
        #[arg(long)]
        email: String,
        #[command(flatten)]
        address: AddressArgs,
    },
    List,
}

#[derive(Debug, Subcommand)]
enum TaskCmd {
    List {
        /// completed or incomplete; anything else lists every task
        #[arg(long, default_value = "")]
        status: String,
        #[arg(long)]
        assignee: Option<i64>,
        #[arg(long)]
        animal: Option<i64>,
        /// title, due_date or creation_datetime
        #[arg(long, default_value = "title")]
        sort: String,
    },
    #[command(arg_required_else_help = true)]
    Show {
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
enum AnimalCmd {
    List,
    #[command(arg_required_else_help = true)]
    Show {
        id: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    stderrlog::new()
        .module(module_path!())
        .module("pawac")
        .module("pawctrl")
        .module("pawdb_sqlite")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let platform = args.platform_builder
        .build()
        .await
        .map_err(anyhow::Error::from_boxed)?;

    match args.command {
        Commands::Shelter { cmd } => parse_shelter(&platform, cmd).await?,
        Commands::Worker { cmd } => parse_worker(&platform, cmd).await?,
        Commands::Task { cmd } => parse_task(&platform, cmd).await?,
        Commands::Animal { cmd } => parse_animal(&platform, cmd).await?,
    }

    Ok(())
}

async fn parse_shelter(
    platform: &Platform,
    arg: ShelterCmd,
) -> anyhow::Result<()> {
    match arg {
        ShelterCmd::Create { name, phone_number, email_address, address } => {
            let id = platform.create_shelter(
                &name,
                &phone_number,
                &email_address,
                &address.into(),
            ).await?;
            println!("shelter {name:?} created with id {id}");
        }
        ShelterCmd::List => {
            for shelter in platform.list_shelters().await?.iter() {
                println!("{}: {shelter}", shelter.id);
            }
        }
    }
    Ok(())
}

async fn parse_worker(
    platform: &Platform,
    arg: WorkerCmd,
) -> anyhow::Result<()> {
    match arg {
        WorkerCmd::Hire {
            shelter_id,
            username,
            password,
            role,
            name,
            phone_number,
            email,
            address,
        } => {
            let address_id = platform.resolve_address(&address.into()).await?;
            let actor = platform.hire_worker(
                &NewWorker {
                    name,
                    phone_number,
                    email,
                    address_id,
                    username,
                    role,
                    shelter_id,
                },
                &password,
            ).await?;
            println!(
                "hired {} ({}) as {} at shelter {}",
                actor.name,
                actor.username,
                actor.role.label(),
                actor.shelter_id,
            );
        }
        WorkerCmd::List => {
            println!("{}", serde_json::to_string_pretty(&platform.list_workers().await?)?);
        }
    }
    Ok(())
}

async fn parse_task(
    platform: &Platform,
    arg: TaskCmd,
) -> anyhow::Result<()> {
    match arg {
        TaskCmd::List { status, assignee, animal, sort } => {
            let query = TaskQuery {
                status: CompletionStatus::from(status.as_str()),
                assignee_id: assignee,
                animal_id: animal,
                sort: TaskSortKey::from(sort.as_str()),
            };
            for task in platform.list_tasks(&query).await?.iter() {
                let status = if task.is_completed() { "x" } else { " " };
                println!(
                    "[{status}] {}: {} (due {}, requires {})",
                    task.id,
                    task.title,
                    task.due_ts,
                    task.required_role.label(),
                );
            }
        }
        TaskCmd::Show { id } => {
            println!("{}", serde_json::to_string_pretty(&platform.get_task_detail(id).await?)?);
        }
    }
    Ok(())
}

async fn parse_animal(
    platform: &Platform,
    arg: AnimalCmd,
) -> anyhow::Result<()> {
    match arg {
        AnimalCmd::List => {
            for animal in platform.list_animals(&AnimalQuery::default()).await?.iter() {
                println!("{}: {animal} ({})", animal.id, animal.species());
            }
        }
        AnimalCmd::Show { id } => {
            println!("{}", serde_json::to_string_pretty(&platform.get_animal(id).await?)?);
            println!("{}", serde_json::to_string_pretty(&platform.list_animal_comments(id).await?)?);
        }
    }
    Ok(())
}
