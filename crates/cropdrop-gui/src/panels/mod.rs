pub mod crop_modal;
pub mod drop_zone;
pub mod status;
