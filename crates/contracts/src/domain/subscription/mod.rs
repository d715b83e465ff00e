pub mod dto;

pub use dto::SubscriptionDto;
