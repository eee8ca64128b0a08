// Standalone form and layout widgets
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod pagination;
pub mod search_bar;
pub mod separator;
pub mod skeleton;
pub mod textarea;

// Interactive widgets (signal-driven, no external primitives)
pub mod dropdown_menu;
pub mod tabs;

// Chrome
pub mod navbar;
pub mod sidebar;

// Re-exports for convenience
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use dropdown_menu::*;
pub use form_select::*;
pub use input::*;
pub use navbar::*;
pub use page_header::*;
pub use pagination::*;
pub use search_bar::*;
pub use separator::*;
pub use sidebar::*;
pub use skeleton::*;
pub use tabs::*;
pub use textarea::*;
