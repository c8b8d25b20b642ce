pub mod loaders;
pub mod quiz_item;

pub use loaders::{load_questions, parse_csv, parse_toml};
pub use quiz_item::QuizItem;
