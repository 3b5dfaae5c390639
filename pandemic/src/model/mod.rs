pub mod containment;
pub mod params;
pub mod sirs;
pub mod trajectory;
