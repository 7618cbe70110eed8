pub mod auth;
pub mod common;
pub mod footer;
pub mod icon;
pub mod movie_card;
pub mod navbar;
pub mod pages;
pub mod rating;
pub mod review_form;
pub mod review_item;

pub use footer::Footer;
pub use icon::{Icon, icons};
pub use movie_card::MovieCard;
pub use navbar::Navbar;
