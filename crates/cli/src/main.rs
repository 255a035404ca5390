//! Samovar CLI - terminal frontend for the café API.
//!
//! # Usage
//!
//! ```bash
//! # Sign in (token lands in the session file)
//! samovar login -u morteza
//!
//! # Today's numbers
//! samovar dashboard
//!
//! # Menu and orders
//! samovar products
//! samovar orders --status open
//! samovar new-order --table 4 3=2 7=1
//! samovar order-status 12 closed
//!
//! # Admin panel
//! samovar users list
//! samovar users create -u sara -n "سارا محمدی" -r cashier
//!
//! # Sign out
//! samovar logout
//! ```
//!
//! # Environment Variables
//!
//! - `SAMOVAR_BASE_URL` - Café API base URL (default: `http://127.0.0.1:8080`)
//! - `SAMOVAR_SESSION_FILE` - Session file path

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, Subcommand};

use samovar_client::{ApiClient, ClientConfig, SessionStore};
use samovar_core::alert::AlertFeed;

mod commands;
mod pages;
mod render;

use pages::Page;

#[derive(Parser)]
#[command(name = "samovar")]
#[command(author, version, about = "Terminal frontend for the Samovar café API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the session
    Login {
        /// Username
        #[arg(short, long)]
        username: String,

        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Sign out and clear the stored session
    Logout {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Refresh and show the signed-in profile
    Whoami,
    /// Show today's dashboard counters
    Dashboard,
    /// List the menu, optionally one category
    Products {
        /// Category name, or "all"
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List orders, optionally narrowed to one status
    Orders {
        /// Status filter (open, closed, cancelled)
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Place a new order from product-id=quantity pairs
    NewOrder {
        /// Table number
        #[arg(short, long)]
        table: Option<u32>,

        /// Discount in Toman
        #[arg(short, long, default_value_t = 0)]
        discount: i64,

        /// Order lines as product-id=quantity
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// Move an order to a new status
    OrderStatus {
        /// Order id
        id: i32,

        /// New status (open, closed, cancelled)
        status: String,
    },
    /// Manage user accounts (admin only)
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Check the server is reachable
    Ping,
}

#[derive(Subcommand)]
enum UserAction {
    /// List all accounts
    List,
    /// Create an account
    Create {
        /// Username
        #[arg(short, long)]
        username: String,

        /// Display name
        #[arg(short = 'n', long)]
        full_name: String,

        /// Role (admin, cashier)
        #[arg(short, long, default_value = "cashier")]
        role: String,

        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Flip an account's active flag
    ToggleActive {
        /// User id
        id: i32,
    },
    /// Delete an account
    Delete {
        /// User id
        id: i32,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

impl Commands {
    /// The page a command belongs to, for the bootstrap gate.
    const fn page(&self) -> Page {
        match self {
            Self::Login { .. } => Page::Login,
            Self::Ping => Page::Home,
            Self::Dashboard => Page::Dashboard,
            Self::Products { .. } | Self::NewOrder { .. } => Page::NewOrder,
            Self::Orders { .. } | Self::OrderStatus { .. } => Page::Orders,
            Self::Users { .. } => Page::Admin,
            // Logging out and asking "who am I" both need a session to act on.
            Self::Logout { .. } | Self::Whoami => Page::Dashboard,
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut alerts = AlertFeed::new();
    let result = run(cli, &mut alerts).await;

    let failed = result.is_err();
    if let Err(e) = result {
        alerts.danger(e.to_string(), Instant::now());
    }
    render::alerts(alerts.active(Instant::now()));
    if failed {
        std::process::exit(1);
    }
}

async fn run(cli: Cli, alerts: &mut AlertFeed) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    let session = SessionStore::open(&config.session_file);
    let api = ApiClient::new(
        config.base_url,
        session.clone(),
        Arc::new(pages::CliNavigator),
    );

    // Page bootstrap: the gate runs before any page logic.
    let page = cli.command.page();
    tracing::debug!(page = page.path(), "bootstrapping");
    if let Some(redirect) = pages::gate(page, &session) {
        return Err(match redirect {
            pages::Redirect::Login => "no active session - run `samovar login` first",
            pages::Redirect::Home => "this page needs the admin role",
        }
        .into());
    }

    // The user display: show who is signed in on every protected page.
    if !page.is_public()
        && let Some(user) = session.user()
    {
        render::user_banner(&user);
    }

    match cli.command {
        Commands::Login { username, password } => {
            commands::auth::login(&api, &username, password, alerts).await?;
        }
        Commands::Logout { yes } => commands::auth::logout(&api, yes, alerts)?,
        Commands::Whoami => commands::auth::whoami(&api).await?,
        Commands::Dashboard => commands::dashboard::show(&api).await?,
        Commands::Products { category } => {
            commands::products::list(&api, category.as_deref()).await?;
        }
        Commands::Orders { status } => commands::orders::list(&api, status.as_deref()).await?,
        Commands::NewOrder {
            table,
            discount,
            items,
        } => commands::orders::create(&api, table, discount, &items, alerts).await?,
        Commands::OrderStatus { id, status } => {
            commands::orders::set_status(&api, id, &status, alerts).await?;
        }
        Commands::Users { action } => match action {
            UserAction::List => commands::users::list(&api).await?,
            UserAction::Create {
                username,
                full_name,
                role,
                password,
            } => {
                commands::users::create(&api, &username, &full_name, &role, password, alerts)
                    .await?;
            }
            UserAction::ToggleActive { id } => {
                commands::users::toggle_active(&api, id, alerts).await?;
            }
            UserAction::Delete { id, yes } => {
                commands::users::delete(&api, id, yes, alerts).await?;
            }
        },
        Commands::Ping => commands::ping(&api).await?,
    }
    Ok(())
}
