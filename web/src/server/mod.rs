pub mod analysis;
pub mod feed;
