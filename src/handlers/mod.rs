pub mod cart;
pub mod health;
pub mod history;
pub mod moods;
pub mod recommendations;

pub use cart::cart_config;
pub use health::{health_check, health_options};
pub use history::history_config;
pub use moods::moods_config;
pub use recommendations::recommendations_config;
