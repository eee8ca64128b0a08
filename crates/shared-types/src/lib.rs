pub mod error;

// Crime Connect domain modules
pub mod alert;
pub mod analytics;
pub mod community;
pub mod incident;
pub mod news;
pub mod notification;
pub mod user;

pub use error::*;

// Re-export all domain types
pub use alert::*;
pub use analytics::*;
pub use community::*;
pub use incident::*;
pub use news::*;
pub use notification::*;
pub use user::*;
