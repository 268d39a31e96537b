use cashier_api::infra::config::{Config, StorageConfig};
use cashier_api::storage::postgres;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Checks that the configured PostgreSQL database is reachable.\n\
         Reads DATABASE_URL, or DB_HOST, DB_PORT, DB_USER, DB_PASSWORD, DB_NAME, DB_SSLMODE\n\
         (from the environment or a .env file).\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let config = Config::from_env()?;

    println!("> Preflight:");
    println!("  PORT={}", config.port);

    let db = match &config.storage {
        StorageConfig::Postgres(db) => db,
        StorageConfig::Memory => {
            println!("  STORAGE_BACKEND=memory (nothing to check)");
            println!("> Preflight OK.");
            return Ok(());
        }
    };
    println!("  Database: {}", db.target);

    let pool = postgres::connect(db).await?;
    sqlx::query("SELECT 1").execute(&pool).await?;
    println!("  Database is reachable.");

    for table in ["categories", "products"] {
        if postgres::table_exists(&pool, table).await? {
            println!("  Table '{}' exists.", table);
        } else {
            println!("  Table '{}' missing (created by api_server on startup).", table);
        }
    }

    println!("> Preflight OK.");
    Ok(())
}
