use crate::error::StoreError;
use crate::models::car::CarModel;
use crate::models::dealership::Dealership;
use crate::models::review::{NewReview, Review};
use crate::seed::Seed;
use leptos::logging::log;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Access to dealerships and reviews, shared by every HTTP worker.
pub trait Repository: Send + Sync {
    /// All reviews, in insertion order.
    fn reviews(&self) -> Result<Vec<Review>, StoreError>;

    /// Reviews of one dealership, in insertion order.
    fn reviews_for_dealer(&self, dealer_id: i64) -> Result<Vec<Review>, StoreError>;

    fn dealers(&self) -> Result<Vec<Dealership>, StoreError>;

    /// Dealerships whose state matches, ignoring case.
    fn dealers_in_state(&self, state: &str) -> Result<Vec<Dealership>, StoreError>;

    fn dealer(&self, dealer_id: i64) -> Result<Option<Dealership>, StoreError>;

    fn cars(&self) -> Result<Vec<CarModel>, StoreError>;

    /// Appends a review under the next id and returns the stored record.
    fn insert_review(&self, new_review: NewReview) -> Result<Review, StoreError>;
}


#[derive(Debug, Default)]
struct Collections {
    reviews: Vec<Review>,
    dealerships: Vec<Dealership>,
    cars: Vec<CarModel>,
    max_review_id: i64,
}

/// Process-local store. Nothing is written back to disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new(seed: Seed) -> Self {
        let max_review_id = seed.reviews.iter().map(|r| r.id).max().unwrap_or(0).max(0);
        log!(
            "[STORE] Holding {} reviews (max id {}) and {} dealerships",
            seed.reviews.len(),
            max_review_id,
            seed.dealerships.len()
        );
        MemoryStore {
            inner: RwLock::new(Collections {
                reviews: seed.reviews,
                dealerships: seed.dealerships,
                cars: seed.cars,
                max_review_id,
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Collections>, StoreError> {
        self.inner.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collections>, StoreError> {
        self.inner.write().map_err(|_| StoreError::Poisoned)
    }
}

impl Repository for MemoryStore {
    fn reviews(&self) -> Result<Vec<Review>, StoreError> {
        Ok(self.read()?.reviews.clone())
    }

    fn reviews_for_dealer(&self, dealer_id: i64) -> Result<Vec<Review>, StoreError> {
        Ok(self
            .read()?
            .reviews
            .iter()
            .filter(|r| r.dealership == dealer_id)
            .cloned()
            .collect())
    }

    fn dealers(&self) -> Result<Vec<Dealership>, StoreError> {
        Ok(self.read()?.dealerships.clone())
    }

    fn dealers_in_state(&self, state: &str) -> Result<Vec<Dealership>, StoreError> {
        Ok(self
            .read()?
            .dealerships
            .iter()
            .filter(|d| d.in_state(state))
            .cloned()
            .collect())
    }

    fn dealer(&self, dealer_id: i64) -> Result<Option<Dealership>, StoreError> {
        Ok(self.read()?.dealerships.iter().find(|d| d.id == dealer_id).cloned())
    }

    fn cars(&self) -> Result<Vec<CarModel>, StoreError> {
        Ok(self.read()?.cars.clone())
    }

    fn insert_review(&self, new_review: NewReview) -> Result<Review, StoreError> {
        let mut collections = self.write()?;
        // id is computed and the record appended under the same guard
        let last = collections.max_review_id;
        let id = last.checked_add(1).ok_or(StoreError::IdsExhausted { last })?;
        let review = new_review.into_review(id);
        collections.reviews.push(review.clone());
        collections.max_review_id = id;
        log!("[STORE] Inserted review {} for dealership {}", id, review.dealership);
        Ok(review)
    }
}
