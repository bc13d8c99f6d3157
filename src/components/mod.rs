//! UI Components
//!
//! Reusable Leptos components.

mod container_column;
mod item_row;
mod success_banner;

pub use container_column::ContainerColumn;
pub use item_row::ItemRow;
pub use success_banner::SuccessBanner;
