mod collector;
mod http_client;
mod recorder;
mod target;

pub use collector::Collector;
pub use http_client::HttpClient;
pub use recorder::Recorder;
pub use target::Target;
