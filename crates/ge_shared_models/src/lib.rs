pub mod category;
pub mod error;
pub mod item;
pub mod price;
pub mod trend;
pub mod wire;

pub use category::Category;
pub use error::Error;
pub use item::{BasicItemInfo, DetailedItemInfo, ItemInfo};
pub use price::{parse_percent, parse_price};
pub use trend::{PercentChangeTrend, PriceChangeTrend, PriceTrend, Trend};
pub use wire::Scalar;
