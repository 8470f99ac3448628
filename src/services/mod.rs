//! External collaborators: market data in, rendered reports out.

pub mod market_data;
pub mod notifier;
pub mod telegram;
pub mod yahoo;

pub use market_data::MarketDataProvider;
pub use notifier::Notifier;
pub use telegram::TelegramNotifier;
pub use yahoo::YahooFinanceProvider;
