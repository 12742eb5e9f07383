pub mod notify;
pub mod price_log;
pub mod tradeogre;
