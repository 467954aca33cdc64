pub mod feed;
pub mod follow;
pub mod media_gen;
