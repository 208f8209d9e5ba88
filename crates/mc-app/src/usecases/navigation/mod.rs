mod load_navigation;

pub use load_navigation::{LoadNavigation, LoadedNavigation};
