pub mod aggregator;
pub mod category_resolver;
pub mod dashboard_service;
pub mod date_normalizer;
pub mod formatter;
pub mod transaction_service;
