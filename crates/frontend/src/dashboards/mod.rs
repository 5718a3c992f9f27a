pub mod d001_dev_check;
pub mod d002_price_lookup;

pub use d001_dev_check::ui::DevCheckDashboard;
pub use d002_price_lookup::ui::PriceLookupDashboard;
