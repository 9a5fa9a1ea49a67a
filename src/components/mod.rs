pub mod app;
pub mod camera_controls;

pub use app::App;
