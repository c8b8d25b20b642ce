pub mod session;
pub mod session_state;

pub use session::QuizSession;
pub use session_state::{SessionOutcome, SessionReport, SessionState};
