//! User Server command-line client.

use clap::{Parser, Subcommand};
use entities::{NewUser, UserUpdate};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_client::{UserClient, render::render_table};

/// Manage users on a User Server.
#[derive(Parser, Debug)]
#[command(name = "user-client", version)]
struct Cli {
    /// Base URL of the User Server.
    #[arg(
        long,
        global = true,
        env = "USER_CLIENT_SERVER_URL",
        default_value = "http://localhost:8080"
    )]
    server_url: String,

    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Command {
    /// List all users as a table.
    List,

    /// Show a single user.
    Get {
        /// User ID.
        id: i64,
    },

    /// Create a user.
    Create {
        /// Display name.
        #[arg(long)]
        name: String,
        /// Email address.
        #[arg(long)]
        email: String,
    },

    /// Replace a user's name and email.
    Update {
        /// User ID.
        id: i64,
        /// New display name.
        #[arg(long)]
        name: String,
        /// New email address.
        #[arg(long)]
        email: String,
    },

    /// Delete a user.
    Delete {
        /// User ID.
        id: i64,
    },

    /// Check that the server is reachable.
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let client = UserClient::new(&cli.server_url);

    match cli.command {
        Command::List => {
            let users = client.list_users().await?;
            print!("{}", render_table(&users));
        }
        Command::Get { id } => {
            let user = client.get_user(id).await?;
            print!("{}", render_table(&[user]));
        }
        Command::Create { name, email } => {
            let user = client.create_user(&NewUser::new(name, email)).await?;
            println!("Created user {}", user.id);
            print!("{}", render_table(&[user]));
        }
        Command::Update { id, name, email } => {
            let user = client.update_user(id, &UserUpdate::new(name, email)).await?;
            println!("Updated user {}", user.id);
            print!("{}", render_table(&[user]));
        }
        Command::Delete { id } => {
            client.delete_user(id).await?;
            println!("Deleted user {id}");
        }
        Command::Health => {
            client.health_check().await?;
            println!("OK");
        }
    }

    Ok(())
}
