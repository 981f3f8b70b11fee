//! Data models for Tourvia

pub mod attraction;
pub mod booking;
pub mod review;
pub mod route;
pub mod taxonomy;
pub mod user;

// Re-export commonly used types
pub use attraction::{Attraction, AttractionStatus};
pub use booking::{Booking, BookingStatus};
pub use review::{ModerationDecision, Review, ReviewScope, ReviewStatus};
pub use route::{Route, RouteDetails, RouteStop};
pub use taxonomy::{Category, Region};
pub use user::{Caller, User, UserClaims};
