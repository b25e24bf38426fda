pub mod stats_store;

pub use stats_store::StatsStore;
