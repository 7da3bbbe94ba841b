pub mod board;
pub mod classify;
pub mod domain;
pub mod fetch;
pub mod group;

pub use board::{render_sign_in, BoardState, BoardView};
pub use classify::classify;
pub use domain::{ApplicationRecord, Stage};
pub use fetch::{FetchError, TrackerClient, ViewScope};
pub use group::{group, GroupedApplications};
