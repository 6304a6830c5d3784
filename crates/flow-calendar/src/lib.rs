//! # flow-calendar
//!
//! Day-off annotation for forecast dates: weekends, Ontario statutory
//! holidays (observed days included), and a hand-maintained override table
//! of retail peak days.

mod annotator;
mod error;
mod official;
mod rules;

pub use annotator::CalendarAnnotator;
pub use error::CalendarError;
pub use official::OfficialCalendar;
pub use rules::{easter_sunday, is_weekend};
