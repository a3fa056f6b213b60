mod scenario;

pub use scenario::website_user_scenario;
