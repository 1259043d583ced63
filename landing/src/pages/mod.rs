// Site pages

mod landing;

pub use landing::LandingPage;
