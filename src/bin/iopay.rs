use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use iopay_client::config::settings::{ApiEnvironment, ClientConfig};
use iopay_client::utils::logging::{self, LogLevel};
use iopay_client::{ApiResponse, Credentials, IopayClient};
use serde_json::{json, Value};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML config file; the IOPAY_* environment variables are used when absent
    #[arg(short, long, env = "IOPAY_CONFIG")]
    config: Option<String>,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    #[arg(long, value_enum)]
    environment: Option<ApiEnvironment>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Authenticate against the standard auth endpoint
    Auth(AuthArgs),
    /// Authenticate against the card (tokenization) auth endpoint
    AuthSensitive(AuthArgs),
    #[command(subcommand)]
    Customer(CustomerCommand),
    /// Tokenize a card given as JSON
    TokenizeCard { card: String },
    #[command(subcommand)]
    Transaction(TransactionCommand),
}

#[derive(clap::Args)]
struct AuthArgs {
    #[arg(long)]
    secret: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    io_seller_id: Option<String>,
}

#[derive(Subcommand)]
enum CustomerCommand {
    Create { customer: String },
    Get { customer_id: String },
    AssociateCard { customer_id: String, token_id: String },
    ListCards { customer_id: String },
    SetDefaultCard { customer_id: String, card_id: String },
    DeleteCard { customer_id: String, card_id: String },
    DeleteAllCards { customer_id: String },
}

#[derive(Subcommand)]
enum TransactionCommand {
    Create { customer_id: String, transaction: String },
    Cancel { transaction_id: String, amount: i64 },
    Capture { transaction_id: String, amount: i64 },
    Get { transaction_id: String },
    /// Query params as a JSON object
    List { query: Option<String> },
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env may also carry IOPAY_CONFIG and LOG_LEVEL, load it before parsing args
    dotenv().ok();
    let args = Args::parse();

    // -------------------------------
    // 1. Load config
    // -------------------------------

    let mut config = match &args.config {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::from_env(),
    };
    if let Some(environment) = args.environment {
        config.base_url = None;
        config.environment = Some(environment);
    }
    logging::init_logging(&logging::resolve(config.logging.as_ref(), args.log_level));

    // -------------------------------
    // 2. Run command
    // -------------------------------

    let client = IopayClient::new(&config)?;
    let response = run(&client, args.command).await?;

    info!(status = %response.status, "request finished");
    let output = json!({
        "status": response.status.as_u16(),
        "body": response.body.into_value(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn run(client: &IopayClient, command: Command) -> Result<ApiResponse> {
    match command {
        Command::Auth(auth) => client.authenticate(Some(&auth.into()), None).await,
        Command::AuthSensitive(auth) => client.authenticate_sensitive(Some(&auth.into()), None).await,
        Command::Customer(cmd) => {
            let customers = client.customers();
            match cmd {
                CustomerCommand::Create { customer } => customers.create(&parse_json(&customer)?).await,
                CustomerCommand::Get { customer_id } => customers.get(&customer_id).await,
                CustomerCommand::AssociateCard { customer_id, token_id } => {
                    customers.associate_card_token(&customer_id, &token_id).await
                }
                CustomerCommand::ListCards { customer_id } => customers.list_cards(&customer_id).await,
                CustomerCommand::SetDefaultCard { customer_id, card_id } => {
                    customers.set_default_card(&customer_id, &card_id).await
                }
                CustomerCommand::DeleteCard { customer_id, card_id } => {
                    customers.delete_card(&customer_id, &card_id).await
                }
                CustomerCommand::DeleteAllCards { customer_id } => customers.delete_all_cards(&customer_id).await,
            }
        }
        Command::TokenizeCard { card } => client.tokenize().card(&parse_json(&card)?).await,
        Command::Transaction(cmd) => {
            let transactions = client.transactions();
            match cmd {
                TransactionCommand::Create { customer_id, transaction } => {
                    transactions.create(&customer_id, &parse_json(&transaction)?).await
                }
                TransactionCommand::Cancel { transaction_id, amount } => transactions.cancel(&transaction_id, amount).await,
                TransactionCommand::Capture { transaction_id, amount } => transactions.capture(&transaction_id, amount).await,
                TransactionCommand::Get { transaction_id } => transactions.get(&transaction_id).await,
                TransactionCommand::List { query } => {
                    let query = match query {
                        Some(query) => parse_json(&query)?,
                        None => json!({}),
                    };
                    transactions.get_all(&query).await
                }
            }
        }
    }
}

impl From<AuthArgs> for Credentials {
    fn from(args: AuthArgs) -> Self {
        Credentials {
            secret: args.secret,
            email: args.email,
            io_seller_id: args.io_seller_id,
        }
    }
}

fn parse_json(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).with_context(|| format!("invalid JSON argument: {raw}"))
}
