mod home;
pub use home::{feature_cards, FeatureCard, Home};

mod not_found;
pub use not_found::NotFound;
