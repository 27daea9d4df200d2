//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowDown as ArrowDown, LuArrowRight as ArrowRight, LuArrowUp as ArrowUp,
        LuBriefcase as Briefcase, LuCalendar as Calendar, LuChevronLeft as ChevronLeft,
        LuChevronRight as ChevronRight, LuCircleCheck as Success, LuClock as Clock,
        LuCode as Code, LuExternalLink as ExternalLink, LuMail as Mail, LuMapPin as Location,
        LuMenu as Menu, LuPhone as Phone, LuPlay as Play, LuSend as Send, LuStar as Star,
        LuTrendingUp as Trending, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowDown as ArrowDown, BsArrowRight as ArrowRight, BsArrowUp as ArrowUp,
        BsBoxArrowUpRight as ExternalLink, BsBriefcase as Briefcase, BsCalendar as Calendar,
        BsCheckCircle as Success, BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight,
        BsClock as Clock, BsCodeSlash as Code, BsEnvelope as Mail, BsGeoAltFill as Location,
        BsGraphUpArrow as Trending, BsList as Menu, BsPlayFill as Play, BsSend as Send,
        BsStarFill as Star, BsTelephone as Phone, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(ARROW_DOWN, ArrowDown);
themed_icon!(ARROW_RIGHT, ArrowRight);
themed_icon!(ARROW_UP, ArrowUp);
themed_icon!(BRIEFCASE, Briefcase);
themed_icon!(CALENDAR, Calendar);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CLOCK, Clock);
themed_icon!(CLOSE, Close);
themed_icon!(CODE, Code);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(LOCATION, Location);
themed_icon!(MAIL, Mail);
themed_icon!(MENU, Menu);
themed_icon!(PHONE, Phone);
themed_icon!(PLAY, Play);
themed_icon!(SEND, Send);
themed_icon!(STAR, Star);
themed_icon!(SUCCESS, Success);
themed_icon!(TRENDING, Trending);

// =============================================================================
// Brand Icons (theme-independent)
// =============================================================================

pub const GITHUB: Icon = icondata::BsGithub;
pub const LINKEDIN: Icon = icondata::BsLinkedin;
pub const TWITTER: Icon = icondata::BsTwitterX;

/// Icons cycled across the expertise cards.
pub const EXPERTISE: [Icon; 3] = [BRIEFCASE, TRENDING, CODE];

/// Picks an icon for a social link by its label, falling back to a generic link.
pub fn social_icon(label: &str) -> Icon {
    let label = label.to_ascii_lowercase();
    if label.contains("github") {
        GITHUB
    } else if label.contains("linkedin") {
        LINKEDIN
    } else if label.contains("twitter") || label == "x" {
        TWITTER
    } else if label.contains("mail") {
        MAIL
    } else {
        EXTERNAL_LINK
    }
}
