//! CLI administration tool for link-target-controller.
//!
//! Provides commands for managing access tokens, content types and content
//! items, and for database checks, without going through the web UI.
//!
//! # Usage
//!
//! ```bash
//! # Create an administrator token
//! cargo run --bin admin -- token create --name alice --role administrator
//!
//! # List all tokens
//! cargo run --bin admin -- token list
//!
//! # Revoke a token
//! cargo run --bin admin -- token revoke alice
//!
//! # Register a custom content type and add an item
//! cargo run --bin admin -- type add book Books
//! cargo run --bin admin -- post add --type book --title "Dune"
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` (required): PostgreSQL connection
//! - `TOKEN_SIGNING_SECRET` (required): must match the server's value

use link_target_controller::application::services::{AuthService, ContentService};
use link_target_controller::config::{self, Config};
use link_target_controller::domain::entities::{NewContentItem, NewContentType, Role};
use link_target_controller::domain::repositories::{
    ContentRepository, ContentTypeRepository, TokenRepository,
};
use link_target_controller::infrastructure::Repositories;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

type Auth = AuthService<dyn TokenRepository>;
type Content = ContentService<dyn ContentRepository, dyn ContentTypeRepository>;

/// CLI tool for managing link-target-controller.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage access tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Manage content types
    Type {
        #[command(subcommand)]
        action: TypeAction,
    },

    /// Manage content items
    Post {
        #[command(subcommand)]
        action: PostAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Token management subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Create a new access token
    Create {
        /// Token owner (e.g., "alice", "editor-bot")
        #[arg(short, long)]
        name: Option<String>,

        /// Role: administrator, editor, author, contributor or subscriber
        #[arg(short, long)]
        role: Option<Role>,

        /// Custom token value (optional, auto-generated if not provided)
        #[arg(short, long)]
        token: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all tokens
    List,

    /// Revoke a token
    Revoke {
        /// Token name or ID to revoke
        name_or_id: String,
    },
}

/// Content type subcommands.
#[derive(Subcommand)]
enum TypeAction {
    /// Register a custom content type
    Add {
        /// Slug: lowercase letters, digits, `-` and `_`
        slug: String,

        /// Human readable plural label
        label: String,

        /// Register as non-public (never offered on the settings page)
        #[arg(long)]
        private: bool,
    },

    /// List registered content types
    List,
}

/// Content item subcommands.
#[derive(Subcommand)]
enum PostAction {
    /// Publish a content item
    Add {
        /// Content type slug
        #[arg(long = "type")]
        content_type: String,

        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        body: String,
    },

    /// List recent content items
    List {
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect(&config).await?;
    let repositories = Repositories::postgres(Arc::new(pool.clone()));

    match cli.command {
        Commands::Token { action } => {
            let auth = AuthService::new(
                repositories.tokens.clone(),
                config.token_signing_secret.clone(),
            );
            handle_token_action(action, &auth, repositories.tokens.as_ref()).await?
        }
        Commands::Type { action } => {
            handle_type_action(action, &content_service(&repositories)).await?
        }
        Commands::Post { action } => {
            handle_post_action(action, &content_service(&repositories)).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn connect(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL or DB_USER/DB_PASSWORD/DB_NAME must be set")?;

    let pool = PgPool::connect(database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    Ok(pool)
}

fn content_service(repositories: &Repositories) -> Content {
    ContentService::new(
        repositories.content.clone(),
        repositories.content_types.clone(),
    )
}

/// Dispatches token management commands.
async fn handle_token_action(
    action: TokenAction,
    auth: &Auth,
    repo: &dyn TokenRepository,
) -> Result<()> {
    match action {
        TokenAction::Create {
            name,
            role,
            token,
            yes,
        } => create_token(auth, name, role, token, yes).await,
        TokenAction::List => list_tokens(repo).await,
        TokenAction::Revoke { name_or_id } => revoke_token(repo, name_or_id).await,
    }
}

/// Creates a new access token with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for token name and role (or use provided)
/// 2. Generate random token or use provided value
/// 3. Display token details with warning
/// 4. Confirm creation (unless `--yes` flag)
/// 5. Store the HMAC hash in the database
///
/// The raw token is displayed once and cannot be retrieved later.
async fn create_token(
    auth: &Auth,
    name: Option<String>,
    role: Option<Role>,
    token: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔑 Create Access Token".bright_blue().bold());
    println!();

    let token_name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Token name")
            .interact_text()?,
    };

    let role = match role {
        Some(r) => r,
        None => {
            let answer: String = Input::new()
                .with_prompt("Role (administrator, editor, author, contributor, subscriber)")
                .with_initial_text("editor")
                .interact_text()?;
            answer.parse::<Role>()?
        }
    };

    let token_value = match token {
        Some(t) => {
            println!("{}", "⚠️  Using provided token value".yellow());
            t
        }
        None => {
            let generated = generate_token();
            println!("{}", "✨ Generated new token".green());
            generated
        }
    };

    println!();
    println!("{}", "Token details:".bright_white().bold());
    println!("  Name:  {}", token_name.cyan());
    println!("  Role:  {}", role.to_string().cyan());
    println!("  Token: {}", token_value.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "⚠️  IMPORTANT: Save this token now! You won't be able to see it again."
            .red()
            .bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    auth.register_token(&token_name, role, &token_value)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create token: {}", e))?;

    println!();
    println!("{}", "✅ Token created successfully!".green().bold());
    println!();
    println!(
        "  Log in at {} with this token.",
        "http://localhost:3000/admin/login".bright_cyan()
    );
    println!();

    Ok(())
}

/// Lists all access tokens with status indicators.
///
/// # Output Format
///
/// ```text
/// 📋 Access Tokens
///
///   ID  Name                 Role           Created              Status
///   ──────────────────────────────────────────────────────────────────────
///   1   alice                administrator  2025-01-15 10:30     ACTIVE
///   2   bot                  editor         2025-01-16 14:20     REVOKED
/// ```
async fn list_tokens(repo: &dyn TokenRepository) -> Result<()> {
    println!("{}", "📋 Access Tokens".bright_blue().bold());
    println!();

    let tokens = repo
        .list_tokens()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list tokens: {}", e))?;

    if tokens.is_empty() {
        println!("{}", "  No tokens found".yellow());
        println!();
        println!(
            "  Create one with: {} admin token create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<20} {:<14} {:<20} {:<10}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Role".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for token in &tokens {
        let status = if token.is_revoked() {
            "REVOKED".red()
        } else {
            "ACTIVE".green()
        };

        println!(
            "  {:<3} {:<20} {:<14} {:<20} {}",
            token.id.to_string().bright_black(),
            token.name.cyan(),
            token.role.to_string(),
            token
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status
        );
    }

    println!();
    println!(
        "  Total: {}",
        tokens.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Revokes a token by name or ID with confirmation prompt.
///
/// Numeric input is looked up by ID, anything else by exact name.
async fn revoke_token(repo: &dyn TokenRepository, name_or_id: String) -> Result<()> {
    println!("{}", "🔒 Revoke Access Token".bright_blue().bold());
    println!();

    let token = match name_or_id.parse::<i64>() {
        Ok(id) => repo.find_by_id(id).await,
        Err(_) => repo.find_by_name(&name_or_id).await,
    }
    .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
    .context("Token not found")?;

    if token.is_revoked() {
        println!("{}", "⚠️  This token is already revoked".yellow());
        return Ok(());
    }

    println!("  Token: {}", token.name.cyan());
    println!("  ID:    {}", token.id.to_string().bright_black());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Revoke this token?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    repo.revoke_token(token.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to revoke token: {}", e))?;

    println!();
    println!("{}", "✅ Token revoked successfully!".green().bold());
    println!();

    Ok(())
}

/// Dispatches content type commands.
async fn handle_type_action(action: TypeAction, content: &Content) -> Result<()> {
    match action {
        TypeAction::Add {
            slug,
            label,
            private,
        } => {
            let created = content
                .register_type(NewContentType {
                    slug,
                    label,
                    public: !private,
                    builtin: false,
                })
                .await
                .map_err(|e| anyhow::anyhow!("Failed to register content type: {}", e))?;

            println!(
                "{} {} ({})",
                "✅ Registered".green().bold(),
                created.slug.cyan(),
                created.label
            );
        }
        TypeAction::List => {
            println!("{}", "📚 Content Types".bright_blue().bold());
            println!();

            let types = content
                .list_types()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list content types: {}", e))?;

            for content_type in types {
                let flags = match (content_type.builtin, content_type.public) {
                    (true, _) => "builtin".bright_black(),
                    (false, true) => "public".green(),
                    (false, false) => "private".yellow(),
                };
                println!(
                    "  {:<20} {:<30} {}",
                    content_type.slug.cyan(),
                    content_type.label,
                    flags
                );
            }
            println!();
        }
    }

    Ok(())
}

/// Dispatches content item commands.
async fn handle_post_action(action: PostAction, content: &Content) -> Result<()> {
    match action {
        PostAction::Add {
            content_type,
            title,
            body,
        } => {
            let item = content
                .create_item(NewContentItem {
                    content_type,
                    title,
                    body,
                })
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create content item: {}", e))?;

            println!(
                "{} #{} {}",
                "✅ Published".green().bold(),
                item.id,
                item.permalink().bright_cyan()
            );
        }
        PostAction::List { limit } => {
            println!("{}", "📰 Recent Items".bright_blue().bold());
            println!();

            let items = content
                .recent(limit)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list content items: {}", e))?;

            if items.is_empty() {
                println!("{}", "  No content found".yellow());
            }

            for item in items {
                println!(
                    "  {:<5} {:<12} {:<20} {}",
                    item.id.to_string().bright_black(),
                    item.content_type.cyan(),
                    item.published_at
                        .format("%Y-%m-%d %H:%M")
                        .to_string()
                        .bright_black(),
                    item.title
                );
            }
            println!();
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let active_tokens: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM access_tokens WHERE revoked_at IS NULL")
                    .fetch_one(pool)
                    .await?;

            let items: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM content_items")
                .fetch_one(pool)
                .await?;

            let links: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM content_meta WHERE meta_key = 'vk-ltc-url' AND meta_value <> ''",
            )
            .fetch_one(pool)
            .await?;

            println!("  PostgreSQL:     {}", version.bright_white());
            println!("  Content items:  {}", items.to_string().bright_green().bold());
            println!("  Redirect links: {}", links.to_string().bright_green().bold());
            println!(
                "  Active tokens:  {}",
                active_tokens.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}

/// Generates a cryptographically random token.
///
/// # Format
///
/// - Length: 48 characters
/// - Character set: A-Z, a-z, 0-9
fn generate_token() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const TOKEN_LEN: usize = 48;

    let mut rng = rand::rng();

    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
