//! Application views

mod admin_dashboard;
mod admin_upload;
mod home;

pub use admin_dashboard::AdminDashboard;
pub use admin_upload::AdminUpload;
pub use home::Home;
