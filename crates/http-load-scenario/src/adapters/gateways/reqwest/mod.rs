mod client;

pub use client::Reqwest;
