use serde::{Deserialize, Serialize};

/// Body of `POST /register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,

    /// ISO date string, passed through as typed in the form
    pub birthdate: String,

    pub email: String,
}

/// Successful `POST /register` reply
///
/// The identifier comes back under the wire name `playerID` and is what the
/// other endpoints expect in their `playerid` header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(rename = "playerID")]
    pub player_id: String,
}

/// Body of `POST /battle`: the card attribute the round is fought on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleRequest {
    pub field: String,
}

/// Envelope of an HTTP 400 reply
///
/// `error_code` is the application-level failure reason, distinct from the
/// HTTP status code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(rename = "errorCode")]
    pub error_code: String,

    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_response_reads_wire_field_name() {
        let reply: RegisterResponse = serde_json::from_str(r#"{"playerID":"abc123"}"#).unwrap();
        assert_eq!(reply.player_id, "abc123");
    }

    #[test]
    fn register_request_serializes_all_fields() {
        let body = RegisterRequest {
            username: "ash".to_string(),
            birthdate: "1996-02-27".to_string(),
            email: "ash@example.com".to_string(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["username"], "ash");
        assert_eq!(value["birthdate"], "1996-02-27");
        assert_eq!(value["email"], "ash@example.com");
    }

    #[test]
    fn battle_request_carries_field() {
        let body = BattleRequest {
            field: "damage".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"field":"damage"}"#
        );
    }

    #[test]
    fn error_body_reads_wire_field_name() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"errorCode":"BAD_FIELD","message":"invalid field"}"#)
                .unwrap();
        assert_eq!(body.error_code, "BAD_FIELD");
        assert_eq!(body.message, "invalid field");
    }
}
