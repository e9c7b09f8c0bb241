use serde::Serialize;

/// Uniform response envelope shared by every JSON endpoint.
///
/// Success responses carry `data` plus an optional `count` or `message`;
/// failures carry `error`. Fields that are not set stay off the wire.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: None,
            message: None,
            error: None,
        }
    }

    /// Success envelope for collection responses.
    pub fn with_count(data: T, count: usize) -> Self {
        Self {
            count: Some(count),
            ..Self::ok(data)
        }
    }

    /// Success envelope with a human-readable confirmation message.
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok(data)
        }
    }
}

impl Envelope<()> {
    /// Failure envelope; the message is the client-visible `error` string.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            count: None,
            message: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_omits_error() {
        let json = serde_json::to_value(Envelope::with_count(vec![1, 2], 2)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["count"], 2);
        assert!(json.get("error").is_none());
        assert!(json.get("message").is_none());
    }

    #[test]
    fn failure_envelope_omits_data() {
        let json = serde_json::to_value(Envelope::error("Route not found")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Route not found");
        assert!(json.get("data").is_none());
        assert!(json.get("count").is_none());
    }
}
