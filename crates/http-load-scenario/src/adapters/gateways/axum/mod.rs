mod target;

pub use target::Axum;
