//! Command layer: one async function per CLI subcommand, each returning a
//! serializable view.

mod navigation;
mod next_id;
mod steps;

pub use navigation::load_navigation;
pub use next_id::next_member_id;
pub use steps::{wizard_steps, StepSummary};
