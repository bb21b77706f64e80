pub mod drop;
pub mod image_io;
