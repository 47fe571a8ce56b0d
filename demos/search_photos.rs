use std::io;

use unsplash::{Auth, SearchOpt, Unsplash};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let access_key = std::env::var("UNSPLASH_ACCESS_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNSPLASH_ACCESS_KEY environment variable is required",
        )
    })?;
    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "mountains".to_owned());

    let client = Unsplash::builder()
        .auth(Auth::client_id(access_key)?)
        .build()?;

    let opt = SearchOpt {
        per_page: Some(10),
        ..SearchOpt::new(query)
    };
    let (result, response) = client.search().photos(&opt).await?;
    if !response.is_success() {
        eprintln!("unsplash answered {}: {}", response.status(), response.text());
        return Ok(());
    }

    println!("total: {:?}, pages: {:?}", result.total, result.total_pages);
    for photo in result.results.unwrap_or_default() {
        let regular = photo.urls.and_then(|urls| urls.regular);
        println!("{:?} {:?}", photo.id, regular);
    }

    Ok(())
}
