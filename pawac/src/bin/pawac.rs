use clap::{
    Parser,
    Subcommand,
};
use pawac::{
    password::Password,
    platform::Builder as PlatformBuilder,
    Platform,
};
use pawcore::platform::ConnectorOption;
use pawdb_sqlite::SqliteBackend;

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[clap(long, value_name = "PAWAC_DB_URL", env = "PAWAC_DB_URL")]
    pawac_db_url: String,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(arg_required_else_help = true)]
    User {
        #[command(subcommand)]
        cmd: UserCmd,
    },
}

#[derive(Debug, Subcommand)]
enum UserCmd {
    #[command(arg_required_else_help = true)]
    Create {
        name: String,
    },
    #[command(arg_required_else_help = true)]
    Password {
        name: String,
        #[command(subcommand)]
        cmd: PasswordCmd,
    },
    #[command(arg_required_else_help = true)]
    Status {
        name: String,
    },
    /// Logout every session of the user
    #[command(arg_required_else_help = true)]
    Logout {
        name: String,
    },
}

#[derive(Debug, Subcommand)]
enum PasswordCmd {
    /// Reports the status of the password
    Check,
    /// Force a password reset
    Reset,
    /// Restrict the user account
    Restrict,
    #[command(arg_required_else_help = true)]
    /// Sets the password for the user
    Set {
        password: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    stderrlog::new()
        .module(module_path!())
        .module("pawac")
        .module("pawdb_sqlite")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let platform = PlatformBuilder::new()
        .ac_platform(
            SqliteBackend::ac(
                ConnectorOption::from(args.pawac_db_url)
                    .auto_create_db(true)
            ).await?
        )
        .password_autopurge(true)
        .build();

    match args.command {
        Commands::User { cmd } => {
            parse_user(&platform, cmd).await?;
        },
    }

    Ok(())
}

async fn parse_user(
    platform: &Platform,
    arg: UserCmd,
) -> anyhow::Result<()> {
    match arg {
        UserCmd::Create { name } => {
            let user = platform.create_user(&name).await?;
            let id = user.id();
            let name = user.name();
            println!("user {name:?} created with id {id}");
        }
        UserCmd::Password { name, cmd } => {
            parse_password(platform, name, cmd).await?
        }
        UserCmd::Status { name } => {
            let (user, password_status) = platform.login_status(&name).await?;
            println!("id: {}", user.id);
            println!("name: {}", user.name);
            println!("created_ts: {}", user.created_ts);
            println!("status: {password_status}");
            for session in platform.get_user_sessions(user.id).await?.into_iter() {
                println!(
                    "session from {} created at {}, last active at {}",
                    session.origin,
                    session.created_ts,
                    session.last_active_ts,
                );
            }
        }
        UserCmd::Logout { name } => {
            let (user, _) = platform.login_status(&name).await?;
            platform.logout_user(user.id).await?;
            println!("logged out all sessions for {name}");
        }
    }
    Ok(())
}

async fn parse_password(
    platform: &Platform,
    login: String,
    arg: PasswordCmd,
) -> anyhow::Result<()> {
    match arg {
        PasswordCmd::Check => {
            let (_, status) = platform.login_status(&login).await?;
            println!("user's password status: {status}");
        }
        PasswordCmd::Reset => {
            let (user, _) = platform.login_status(&login).await?;
            platform.force_user_id_password(user.id, Password::Reset).await?;
            println!("forced password reset for {login} on their next login");
        }
        PasswordCmd::Restrict => {
            let (user, _) = platform.login_status(&login).await?;
            platform.force_user_id_password(user.id, Password::Restricted).await?;
            platform.logout_user(user.id).await?;
            println!("restricted account for {login}");
        }
        PasswordCmd::Set { password } => {
            let (user, _) = platform.login_status(&login).await?;
            platform.force_user_id_password(user.id, Password::new(&password)).await?;
            println!("updated password for user {login}");
        }
    }
    Ok(())
}
