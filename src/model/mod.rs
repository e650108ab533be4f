pub mod criteria;
pub mod geometry;
