pub mod camera_service;

pub use camera_service::*;
