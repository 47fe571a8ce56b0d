use std::io;

use unsplash::{Auth, Unsplash};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let access_key = std::env::var("UNSPLASH_ACCESS_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNSPLASH_ACCESS_KEY environment variable is required",
        )
    })?;

    let client = Unsplash::builder()
        .auth(Auth::client_id(access_key)?)
        .build()?;

    let (total, _) = client.stats().await?;
    let (month, _) = client.month_stats().await?;

    println!("total: {total:?}");
    println!("last 30 days: {month:?}");

    Ok(())
}
