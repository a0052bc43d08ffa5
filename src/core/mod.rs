pub mod add;
pub mod backup;
pub mod calculator;
pub mod del;
pub mod log;
pub mod stats;
