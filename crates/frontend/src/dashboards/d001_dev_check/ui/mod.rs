pub mod dashboard;

pub use dashboard::DevCheckDashboard;
