pub mod config;
pub mod consts;
pub mod crop;
pub mod error;
pub mod io;
pub mod upload;
pub mod widget;
