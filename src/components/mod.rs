pub mod providers;
pub mod theme_badge;
