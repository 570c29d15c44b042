use cardfeed::{AsyncCardFeed, Page};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cardfeed=debug,info")),
        )
        .init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8080".to_string());

    eprintln!("Loading featured cards from {base_url}...");
    let feed = AsyncCardFeed::builder()
        .base_url(base_url)
        .build()
        .await
        .expect("Failed to initialize feed client");

    let page = feed
        .load_page(Page::new())
        .await
        .expect("Failed to load the page");

    println!("{page}");
}
