//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod loading;
pub mod nav;
pub mod toast;

pub use loading::{ChartSkeleton, ListSkeleton, Loading};
pub use nav::Nav;
pub use toast::Toast;
