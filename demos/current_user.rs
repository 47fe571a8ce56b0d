use std::io;

use unsplash::{Auth, Unsplash};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let token = std::env::var("UNSPLASH_ACCESS_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNSPLASH_ACCESS_TOKEN environment variable is required (user bearer token)",
        )
    })?;

    let client = Unsplash::builder().auth(Auth::bearer(token)?).build()?;
    let (user, response) = client.current_user().await?;

    println!(
        "status: {}, username: {:?}, name: {:?}, photos: {:?}, rate limit remaining: {:?}",
        response.status(),
        user.username,
        user.name,
        user.total_photos,
        response.rate_limit_remaining()
    );

    Ok(())
}
