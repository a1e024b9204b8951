pub mod daily;
pub mod decode;

pub use daily::{DailyLog, read_daily_log};
