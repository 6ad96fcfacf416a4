//! Basic Telegraph client example
//!
//! Run with: cargo run --example basic
//!
//! Creates a throwaway account, publishes a page and prints its view count.
//! Set TELEGRAPH_ACCESS_TOKEN to reuse an existing account instead.

use telegraph_rs::{
    ClientConfig, CreateAccountOptions, Element, Node, PageOptions, TelegraphClient, ViewsQuery,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ClientConfig::default().with_timeout_secs(30);
    let mut client = TelegraphClient::new(config.clone())?;

    match std::env::var("TELEGRAPH_ACCESS_TOKEN") {
        Ok(token) => client.set_access_token(token),
        Err(_) => {
            println!("Creating account...");
            let account = client
                .create_account(
                    "telegraph-rs",
                    &CreateAccountOptions::default().author_name("telegraph-rs demo"),
                )
                .await?
                .ok_or("server returned no account")?;
            println!("Account created, auth URL: {:?}", account.auth_url);
            client.set_access_token(account.access_token.ok_or("no access token")?);
        }
    }

    let content: Vec<Node> = vec![
        Element::new("h3").child("Hello from Rust").into(),
        Element::new("p")
            .child("This page was published with ")
            .child(
                Element::new("a")
                    .attr("href", "https://www.rust-lang.org")
                    .child("Rust"),
            )
            .child(".")
            .into(),
        Node::text("Bye."),
    ];

    let page = client
        .create_page("telegraph-rs demo", &content, &PageOptions::default())
        .await?
        .ok_or("server returned no page")?;
    println!("Published: {}", page.url);
    println!("Same page via config: {}", config.page_url(&page.path));

    let views = client.get_views(&page.path, &ViewsQuery::total()).await?;
    println!("Views: {}", views.map(|v| v.views).unwrap_or_default());

    Ok(())
}
