//! Page components, one per route.

mod admin_dashboard;
mod home;
mod login;
mod movie_details;
mod movie_form;
mod movies;
mod my_reviews;
mod not_found;
mod profile;
mod register;
mod search;

pub use admin_dashboard::AdminDashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use movie_details::MovieDetailsPage;
pub use movie_form::{AddMoviePage, EditMoviePage};
pub use movies::MoviesPage;
pub use my_reviews::MyReviewsPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
pub use search::SearchPage;
