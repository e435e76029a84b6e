pub mod car;
pub mod dealership;
pub mod review;
pub mod review_draft;
