use std::io;

use unsplash::{Auth, Orientation, RandomPhotoOpt, Unsplash};

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

    let opt = RandomPhotoOpt {
        count: Some(3),
        orientation: Some(Orientation::Landscape),
        ..Default::default()
    };
    let (photos, _) = client.photos().random(&opt).await?;
    for photo in photos {
        let author = photo.user.and_then(|user| user.username);
        println!("{:?} by {:?}", photo.id, author);
    }

    Ok(())
}
