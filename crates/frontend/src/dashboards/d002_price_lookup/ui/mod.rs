pub mod dashboard;

pub use dashboard::PriceLookupDashboard;
