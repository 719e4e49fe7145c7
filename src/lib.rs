pub mod camera;
pub mod classify;
pub mod error;
pub mod loader;
pub mod materials;
pub mod scene;
pub mod showroom;

pub use error::CarvisError;
pub use showroom::Showroom;
