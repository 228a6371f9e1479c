//! HTML template rendering handlers for the admin screens and public pages.

mod dashboard;
mod edit_post;
mod front;
mod login;
mod settings;

pub use dashboard::dashboard_handler;
pub use edit_post::{edit_post_handler, save_post_handler};
pub use front::{post_handler, recent_posts_handler};
pub use login::{login_page_handler, login_submit_handler, logout_handler};
pub use settings::{settings_page_handler, settings_submit_handler};
