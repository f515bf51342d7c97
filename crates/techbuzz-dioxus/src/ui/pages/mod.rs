//! One component per route. Route components are named after their
//! [`Route`](super::Route) variant.

mod catalog;
mod contact;
mod home;
mod not_found;
mod static_pages;

pub use catalog::{BlogPost, Blogs, Tutorial, Tutorials};
pub use contact::Contact;
pub use home::Home;
pub use not_found::PageNotFound;
pub use static_pages::{About, PrivacyPolicy, Terms};
