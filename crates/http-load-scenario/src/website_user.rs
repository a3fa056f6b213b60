//! The "WebsiteUser" behavior: browse the index page and submit a record to it.

use serde_json::{json, Value};

use crate::entities::{Action, UserBehavior};
use crate::error::ScenarioError;
use crate::use_cases::BehaviorBuilder;

pub const BEHAVIOR_NAME: &str = "WebsiteUser";

/// Every request of this behavior targets the root path
pub const INDEX_PATH: &str = "/";

pub const RECORD_DATA: &str = "AWS Community Day INDIA- This is our load testing record";

pub const MIN_WAIT_MS: u64 = 1000;
pub const MAX_WAIT_MS: u64 = 2000;

pub const WARM_UP: &str = "warm_up";
pub const INDEX: &str = "index";
pub const SUBMIT_RECORD: &str = "submit_record";

pub const INDEX_WEIGHT: u32 = 2;
pub const SUBMIT_RECORD_WEIGHT: u32 = 3;

/// JSON body of the record submission
pub fn record_payload() -> Value {
    json!({ "data": RECORD_DATA })
}

/// Build the website user behavior.
///
/// Browsing and submitting are declared under distinct names; a registry keyed
/// by name would otherwise let the second silently replace the first.
pub fn website_user() -> Result<UserBehavior, ScenarioError> {
    BehaviorBuilder::new(BEHAVIOR_NAME)
        .wait_between(MIN_WAIT_MS, MAX_WAIT_MS)
        .on_start(Action::get(WARM_UP, INDEX_PATH))
        .weighted(Action::get(INDEX, INDEX_PATH), INDEX_WEIGHT)
        .weighted(
            Action::post(SUBMIT_RECORD, INDEX_PATH).with_json(&record_payload()),
            SUBMIT_RECORD_WEIGHT,
        )
        .build()
}
