//! Run the website user under goose.
//!
//! ```sh
//! cargo run --example goose_attack --features goose -- --host http://127.0.0.1:8080 -u 10 -t 30s
//! ```

use goose::GooseAttack;
use http_load_scenario::website_user_scenario;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    GooseAttack::initialize()?
        .register_scenario(website_user_scenario()?)
        .execute()
        .await?;
    Ok(())
}
