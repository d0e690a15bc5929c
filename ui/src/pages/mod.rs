pub mod home;
pub mod not_found;
pub mod search;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use search::SearchPage;
