pub mod geometry;
pub mod params;
pub mod render;
