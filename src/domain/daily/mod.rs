//! Daily report aggregate, date spans and the generator that builds them.

mod generator;
mod preparation;
mod span;
pub mod synthesis;

pub use generator::DailyEntryGenerator;
pub use preparation::{CautionPeriod, DailyPreparation, DaySummary, PowerHour};
pub use span::{period_name, CalendarDocument, CalendarMetadata, DateSpan, MAX_SPAN_DAYS};
