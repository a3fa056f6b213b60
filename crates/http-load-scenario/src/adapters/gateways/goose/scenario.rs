use goose::goose::{GooseUser, Scenario, Transaction, TransactionResult};
use goose::{scenario, transaction, GooseError};

use crate::error::ScenarioError;
use crate::website_user::{self, INDEX_PATH};

impl From<GooseError> for ScenarioError {
    fn from(e: GooseError) -> Self {
        ScenarioError::Engine(e.to_string())
    }
}

/// Export the website user behavior as a goose scenario.
///
/// Weights and wait bounds are read from [`website_user::website_user`].
/// Goose transactions are plain functions, so the request path and record
/// body are taken from the `website_user` constants rather than from the
/// built actions.
pub fn website_user_scenario() -> Result<Scenario, ScenarioError> {
    let behavior = website_user::website_user()?;
    let weight = |name: &str| -> Result<usize, ScenarioError> {
        behavior
            .action(name)
            .map(|action| action.weight.get() as usize)
            .ok_or_else(|| ScenarioError::Engine(format!("no action named '{name}'")))
    };

    let wait_time = behavior.wait_time();
    let scenario = scenario!("WebsiteUser")
        .set_wait_time(wait_time.min(), wait_time.max())?
        .register_transaction(
            transaction!(warm_up)
                .set_name(website_user::WARM_UP)
                .set_on_start(),
        )
        .register_transaction(
            transaction!(index)
                .set_name(website_user::INDEX)
                .set_weight(weight(website_user::INDEX)?)?,
        )
        .register_transaction(
            transaction!(submit_record)
                .set_name(website_user::SUBMIT_RECORD)
                .set_weight(weight(website_user::SUBMIT_RECORD)?)?,
        );

    Ok(scenario)
}

async fn warm_up(user: &mut GooseUser) -> TransactionResult {
    let _goose = user.get(INDEX_PATH).await?;
    Ok(())
}

async fn index(user: &mut GooseUser) -> TransactionResult {
    let _goose = user.get(INDEX_PATH).await?;
    Ok(())
}

async fn submit_record(user: &mut GooseUser) -> TransactionResult {
    let _goose = user
        .post_json(INDEX_PATH, &website_user::record_payload())
        .await?;
    Ok(())
}

#[cfg(all(test, feature = "goose"))]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_website_user_scenario_transactions() {
        let scenario = website_user_scenario().unwrap();
        let transactions: Vec<_> = scenario
            .transactions
            .iter()
            .map(|t| (t.name.as_str(), t.weight, t.on_start))
            .collect();

        assert_eq!(
            transactions,
            vec![
                (website_user::WARM_UP, 1, true),
                (website_user::INDEX, 2, false),
                (website_user::SUBMIT_RECORD, 3, false),
            ]
        );
    }

    #[test]
    fn test_website_user_scenario_wait_time() {
        let scenario = website_user_scenario().unwrap();
        assert_eq!(
            scenario.transaction_wait,
            Some((Duration::from_secs(1), Duration::from_secs(2)))
        );
    }

    #[test]
    fn test_website_user_scenario_name() {
        assert_eq!(website_user_scenario().unwrap().name, "WebsiteUser");
    }
}
