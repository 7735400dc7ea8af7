pub mod traits;
pub mod expression;
pub mod mutation;
pub mod manager;

pub use manager::{AppConfig, ConfigManager};
pub use expression::ExpressionConfig;
pub use mutation::MutationConfig;
pub use traits::ConfigSection;
