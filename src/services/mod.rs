pub mod answer_collector;
pub mod shuffle;

pub use answer_collector::{AnswerCollector, LineCollector};
pub use shuffle::{shuffle_items, ShuffleRng};
