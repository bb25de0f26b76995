pub mod home;
pub mod locations;
pub mod options;
pub mod products;

