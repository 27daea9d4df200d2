//! Core logic for the portfolio site.
//!
//! Everything here is plain, synchronous, and browser-free:
//! - [`TypewriterCycler`] - Phrase typing/deleting state machine
//! - [`CarouselFilter`] and [`WrapCursor`] - Filtered, wrap-around navigation
//! - [`ContactMessage`] and [`SubmissionState`] - Contact form model
//! - [`SiteContent`] - Static page content loaded from TOML
//! - [`particles`] and [`scroll`] - Decorative and scroll-driven helpers
//!
//! Timers and rendering belong to the host.

pub mod carousel;
pub mod contact;
pub mod content;
mod cursor;
pub mod error;
pub mod particles;
pub mod scroll;
pub mod typewriter;

pub use carousel::{ALL_CATEGORY, CarouselFilter, Categorized};
pub use contact::{ContactMessage, SubmissionState, is_valid_email};
pub use content::{
    About, BlogPost, ExpertiseArea, Hero, NavLink, Profile, Project, SiteContent, Skill,
    SkillGroup, SocialLink, Stat, Testimonial,
};
pub use cursor::WrapCursor;
pub use error::{CarouselError, ContactError, ContactField, ContentError, TypewriterError};
pub use particles::Particle;
pub use scroll::ScrollState;
pub use typewriter::{Frame, TypeMode, TypewriterCycler, TypewriterTiming};
