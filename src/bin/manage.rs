//! CLI administration tool for contact-book.
//!
//! Provides commands for signing caller JWTs and performing database
//! operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Sign a caller token for creator 42
//! cargo run --bin manage -- create-jwt --key keys/jwt_private.pem 42
//!
//! # Check database connection
//! cargo run --bin manage -- db check
//!
//! # Apply pending migrations
//! cargo run --bin manage -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required for `db` commands): PostgreSQL connection string
//!
//! # Features
//!
//! - **Token Signing**: RS256 JWTs carrying the creator id claim
//! - **Database Tools**: Connection checks, row counts, and migrations
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use sqlx::PgPool;
use std::path::PathBuf;

/// CLI tool for managing contact-book.
#[derive(Parser)]
#[command(name = "manage")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Sign a caller JWT for a creator id
    CreateJwt {
        /// Path to the PEM-encoded RSA private key
        #[arg(short, long)]
        key: PathBuf,

        /// Creator id to embed in the token
        creator_id: i64,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and show row counts
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::CreateJwt { key, creator_id } => create_jwt(&key, creator_id)?,
        Commands::Db { action } => handle_db_action(action).await?,
    }

    Ok(())
}

/// Signs an RS256 JWT carrying `{"id": creator_id}`.
///
/// The token has no expiry; the service identifies callers purely by the
/// signature and the embedded id.
///
/// # Flow
///
/// 1. Read the private key PEM from disk
/// 2. Sign the claims with RS256
/// 3. Display the token with usage instructions
fn create_jwt(key: &PathBuf, creator_id: i64) -> Result<()> {
    println!("{}", "🔑 Sign Caller JWT".bright_blue().bold());
    println!();

    let key_pem = std::fs::read(key)
        .with_context(|| format!("Failed to read private key from '{}'", key.display()))?;
    let encoding_key =
        EncodingKey::from_rsa_pem(&key_pem).context("Failed to parse RSA private key PEM")?;

    let claims = serde_json::json!({ "id": creator_id });
    let token = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)
        .context("Failed to sign token")?;

    println!("  Creator id: {}", creator_id.to_string().cyan());
    println!("  Token:      {}", token.bright_yellow().bold());
    println!();
    println!("{}", "Add this to your requests:".bright_white());
    println!(
        "  {}: Bearer {}",
        "Authorization".bright_cyan(),
        token.bright_yellow()
    );
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -X POST -H \"Authorization: Bearer {}\" -d \"name=Frank Foobar\" http://localhost:8080/api/users",
        token.bright_yellow()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic and maintenance commands.
async fn handle_db_action(action: DbAction) -> Result<()> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(&pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!();

            let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(&pool)
                .await?;

            let contacts_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
                .fetch_one(&pool)
                .await?;

            println!(
                "  Users:    {}",
                users_count.to_string().bright_green().bold()
            );
            println!(
                "  Contacts: {}",
                contacts_count.to_string().bright_green().bold()
            );
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🔧 Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
