use serde_json::Value;

use super::{Method, Weight};

/// A named HTTP request a simulated user can issue, with its selection weight
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub name: String,
    pub method: Method,
    pub path: String,
    pub payload: Option<Value>,
    pub weight: Weight,
    /// Why the last `with_json` value could not be turned into a body
    pub(crate) payload_error: Option<String>,
}

impl Action {
    pub fn new(name: impl Into<String>, method: Method, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method,
            path: path.into(),
            payload: None,
            weight: Weight::ONE,
            payload_error: None,
        }
    }

    pub fn get(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, Method::Get, path)
    }

    pub fn post(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, Method::Post, path)
    }

    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    /// Attach a JSON body, serialized from any serde value.
    ///
    /// A value that does not serialize leaves the action without a body and
    /// makes [`crate::use_cases::BehaviorBuilder::build`] fail.
    pub fn with_json<T: serde::Serialize>(mut self, value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(payload) => {
                self.payload = Some(payload);
                self.payload_error = None;
            }
            Err(e) => {
                self.payload = None;
                self.payload_error = Some(e.to_string());
            }
        }
        self
    }

    pub fn payload_error(&self) -> Option<&str> {
        self.payload_error.as_deref()
    }

    /// The request body as sent on the wire, if any
    pub fn body(&self) -> Option<Vec<u8>> {
        self.payload
            .as_ref()
            .and_then(|payload| serde_json::to_vec(payload).ok())
    }
}
