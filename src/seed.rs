//! Startup loading of the static JSON documents into memory.
use crate::error::SeedError;
use crate::models::{car::CarModel, dealership::Dealership, review::Review};
use leptos::logging::{log, warn};
use serde::{de::DeserializeOwned, Deserialize};
use std::io::ErrorKind;
use std::path::Path;

pub const REVIEWS_FILE: &str = "reviews.json";
pub const DEALERSHIPS_FILE: &str = "dealerships.json";
pub const CARS_FILE: &str = "cars.json";

#[derive(Deserialize)]
struct ReviewsDocument {
    #[serde(default)]
    reviews: Vec<Review>,
}

#[derive(Deserialize)]
struct DealershipsDocument {
    #[serde(default)]
    dealerships: Vec<Dealership>,
}

#[derive(Deserialize)]
struct CarsDocument {
    #[serde(default)]
    cars: Vec<CarModel>,
}

/// Everything read from the data directory at startup.
#[derive(Debug, Default, Clone)]
pub struct Seed {
    pub reviews: Vec<Review>,
    pub dealerships: Vec<Dealership>,
    pub cars: Vec<CarModel>,
}

impl Seed {
    /// Reads the review and dealership documents, failing if either is missing
    /// or malformed. The car catalog is optional.
    pub async fn load(data_dir: &Path) -> Result<Self, SeedError> {
        let reviews: ReviewsDocument = read_document(&data_dir.join(REVIEWS_FILE)).await?;
        let dealerships: DealershipsDocument =
            read_document(&data_dir.join(DEALERSHIPS_FILE)).await?;

        let cars_path = data_dir.join(CARS_FILE);
        let cars = match read_document::<CarsDocument>(&cars_path).await {
            Ok(doc) => doc.cars,
            Err(SeedError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                warn!("[SEED] {} not found, car catalog is empty", cars_path.display());
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        log!(
            "[SEED] Loaded {} reviews, {} dealerships and {} car models from {}",
            reviews.reviews.len(),
            dealerships.dealerships.len(),
            cars.len(),
            data_dir.display()
        );

        Ok(Seed {
            reviews: reviews.reviews,
            dealerships: dealerships.dealerships,
            cars,
        })
    }
}

async fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, SeedError> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
