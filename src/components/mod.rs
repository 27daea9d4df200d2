//! UI components built with Leptos.
//!
//! Sections in page order:
//! - [`Navbar`] - Fixed top navigation with mobile menu
//! - [`Hero`] - Greeting, typewriter headline, particle background
//! - [`About`], [`Expertise`], [`Skills`] - Static profile sections
//! - [`Projects`] - Filterable project gallery with a spotlight carousel
//! - [`Testimonials`] - Auto-rotating quote slider
//! - [`Blog`] - Featured post plus filterable post list
//! - [`Contact`] - Client-side contact form
//! - [`Footer`] - Links and scroll-to-top button
//!
//! [`LoadError`] replaces the page when the content fails to load.
//!
//! Shared pieces: [`icons`] (icon theme), [`Reveal`] (scroll-triggered entrance),
//! and [`FilterBar`]/[`CarouselNav`] for the filterable sections.

mod about;
mod blog;
mod carousel;
mod contact;
mod expertise;
mod footer;
mod hero;
pub mod icons;
mod load_error;
mod navbar;
mod projects;
mod reveal;
mod skills;
mod testimonials;

pub use about::About;
pub use blog::Blog;
pub use carousel::{CarouselNav, FilterBar};
pub use contact::Contact;
pub use expertise::Expertise;
pub use footer::Footer;
pub use hero::Hero;
pub use load_error::LoadError;
pub use navbar::Navbar;
pub use projects::Projects;
pub use reveal::{Reveal, stagger};
pub use skills::Skills;
pub use testimonials::Testimonials;
