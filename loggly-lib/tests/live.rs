//! Integration tests against a real account.
//!
//! These tests require real credentials and are ignored by default.
//! To run them, create a `.env` file in the loggly-lib directory with:
//!
//! ```env
//! LOGGLY_ACCOUNT=your-account
//! LOGGLY_USER=your-user
//! LOGGLY_PASS=your-password
//! ```
//!
//! Then run: `cargo test -p loggly-lib -- --ignored`

use std::env;
use std::num::NonZeroUsize;

use loggly_lib::api::search::SearchMode;
use loggly_lib::auth::Credentials;
use loggly_lib::LogglyClient;

fn load_client(mode: SearchMode) -> Option<LogglyClient> {
    let _ = dotenvy::dotenv();

    let account = env::var("LOGGLY_ACCOUNT").ok()?;
    let user = env::var("LOGGLY_USER").ok()?;
    let pass = env::var("LOGGLY_PASS").ok()?;

    LogglyClient::builder()
        .account(account)
        .credentials(Credentials::new(user, pass))
        .mode(mode)
        .build()
        .ok()
}

#[tokio::test]
#[ignore = "requires real credentials in .env file"]
async fn test_legacy_search() {
    let client = load_client(SearchMode::Legacy)
        .expect("Missing required environment variables. See module docs.");

    let response = client
        .query("*")
        .size(10)
        .from("-1h")
        .fetch()
        .await
        .expect("Search failed");

    assert!(response.len() <= 10);
    assert_eq!(response.next_url(), None);
    println!("Total events: {}", response.total());
}

#[tokio::test]
#[ignore = "requires real credentials in .env file"]
async fn test_iterate_first_page() {
    let client = load_client(SearchMode::Paginating)
        .expect("Missing required environment variables. See module docs.");

    let response = client
        .query("*")
        .size(5)
        .from("-1h")
        .fetch()
        .await
        .expect("Search failed");

    assert!(response.len() <= 5);
    assert_eq!(response.total(), 0);

    if let Some(cursor) = response.cursor() {
        let next = client.next_search(cursor).await.expect("Next page failed");
        println!("Second page: {} events", next.len());
    }
}

#[tokio::test]
#[ignore = "requires real credentials in .env file"]
async fn test_exhaustive_capped() {
    let cap = NonZeroUsize::new(5).unwrap();
    let client = load_client(SearchMode::exhaustive_capped(cap))
        .expect("Missing required environment variables. See module docs.");

    match client.query("*").size(10).from("-10m").fetch().await {
        Ok(response) => println!("Fetched {} events", response.len()),
        Err(loggly_lib::error::Error::PageLimitExceeded { limit }) => {
            println!("More than {} pages available", limit)
        }
        Err(e) => panic!("Search failed: {e}"),
    }
}
