pub mod capacity;
pub mod compare;
pub mod hide;
mod shared;
pub mod unveil;
