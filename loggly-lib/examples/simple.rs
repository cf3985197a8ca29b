//! Prints recent login/logout events for a user.
//!
//! Run with: cargo run --example simple
//!
//! Requires environment variables (or a .env file) with:
//! - ACCOUNT
//! - USER
//! - PASS
//!
//! Set `RUST_LOG=loggly_lib=debug` to see each request.

use std::env;

use loggly_lib::auth::Credentials;
use loggly_lib::model::Event;
use loggly_lib::LogglyClient;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let account = env::var("ACCOUNT").expect("ACCOUNT not set");
    let user = env::var("USER").expect("USER not set");
    let pass = env::var("PASS").expect("PASS not set");

    let client = LogglyClient::builder()
        .account(account)
        .credentials(Credentials::new(user, pass))
        .build()?;

    let response = client
        .query("(login OR logout) AND tobi")
        .size(50)
        .from("-5h")
        .fetch()
        .await?;

    for event in response.events() {
        output(event)?;
    }
    println!();

    Ok(())
}

fn output(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    let Some(message) = event.parsed_logmsg() else {
        return Ok(());
    };

    println!();
    if let Some(fields) = message?.as_object() {
        for (key, value) in fields {
            println!("  {:>14}: {}", key, value);
        }
    }

    Ok(())
}
