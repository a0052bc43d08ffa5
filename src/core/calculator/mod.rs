pub mod duration;
pub mod pnl;
