pub mod dto;
pub mod logic;
pub mod model;

pub use dto::TaskDto;
pub use logic::LogicManager;
pub use model::{Model, ModelManager};
