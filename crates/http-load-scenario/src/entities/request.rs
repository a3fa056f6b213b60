use std::collections::HashMap;

/// An HTTP request observed by a recording target
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub method: super::Method,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl ReceivedRequest {
    pub fn new(method: super::Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn body_as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    pub fn body_as_json(&self) -> Option<serde_json::Value> {
        serde_json::from_slice(&self.body).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Method;

    #[test]
    fn test_request_body_as_str() {
        let request = ReceivedRequest::new(Method::Post, "/").with_body("Hello World");
        assert_eq!(request.body_as_str(), Some("Hello World"));
    }

    #[test]
    fn test_request_body_as_str_invalid_utf8() {
        let request = ReceivedRequest::new(Method::Post, "/").with_body(vec![0xFF, 0xFE]);
        assert_eq!(request.body_as_str(), None);
    }

    #[test]
    fn test_request_body_as_json() {
        let request = ReceivedRequest::new(Method::Post, "/")
            .with_header("content-type", "application/json")
            .with_body(r#"{"data": "x"}"#);
        assert_eq!(request.body_as_json().unwrap()["data"], "x");
        assert_eq!(request.headers["content-type"], "application/json");
    }
}
