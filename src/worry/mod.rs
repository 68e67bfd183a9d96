pub mod session;
pub mod state;
pub mod summary;

pub use session::{AnxietyRating, WorryRecord, WorrySession};
pub use state::{back, choose, WorryState};
pub use summary::{rationale, render_note, summarize};
