//! UI Components
//!
//! Reusable UI components for the desktop application.

mod admin_nav;
mod button;
mod header;
mod modal;
mod section;
mod status;
mod stories;
mod video_card;

pub use admin_nav::AdminNav;
pub use button::{Button, ButtonVariant};
pub use header::SiteHeader;
pub use modal::ConfirmModal;
pub use section::{measure_sections, PageSection};
pub use status::{EmptyState, LoadingState, MessageBanner};
pub use stories::StoriesStrip;
pub use video_card::VideoCard;
