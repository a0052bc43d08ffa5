pub mod emotion;
pub mod side;
pub mod time_of_day;
pub mod trade;
