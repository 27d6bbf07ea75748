//! One request builder per documented endpoint.
//!
//! Builders are pure: URL, header, and body assembly stays testable off the
//! network. The base URL is read from the form at submit time and passed in.

use contracts::game::{BattleRequest, RegisterRequest};

use super::{ApiCall, Method, CONTENT_TYPE_JSON, PLAYER_ID_HEADER};

fn json_headers() -> Vec<(String, String)> {
    vec![("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string())]
}

fn player_headers(player_id: &str) -> Vec<(String, String)> {
    let mut headers = json_headers();
    headers.push((PLAYER_ID_HEADER.to_string(), player_id.to_string()));
    headers
}

/// `GET /ping`: server liveness probe
pub fn ping(base: &str) -> ApiCall {
    ApiCall {
        method: Method::Get,
        url: format!("{}/ping", base),
        headers: json_headers(),
        body: None,
    }
}

/// `POST /register`: create a player
///
/// The reply carries the `playerID` every other endpoint wants as a header.
pub fn register(base: &str, username: &str, birthdate: &str, email: &str) -> ApiCall {
    let body = RegisterRequest {
        username: username.to_string(),
        birthdate: birthdate.to_string(),
        email: email.to_string(),
    };
    ApiCall {
        method: Method::Post,
        url: format!("{}/register", base),
        headers: json_headers(),
        body: serde_json::to_value(&body).ok(),
    }
}

/// `GET /profile`: player profile
pub fn profile(base: &str, player_id: &str) -> ApiCall {
    ApiCall {
        method: Method::Get,
        url: format!("{}/profile", base),
        headers: player_headers(player_id),
        body: None,
    }
}

/// `GET /buy-card`: add a new card to the player's deck
pub fn buy_card(base: &str, player_id: &str) -> ApiCall {
    ApiCall {
        method: Method::Get,
        url: format!("{}/buy-card", base),
        headers: player_headers(player_id),
        body: None,
    }
}

/// `GET /next-card`: peek at the player's next card
pub fn next_card(base: &str, player_id: &str) -> ApiCall {
    ApiCall {
        method: Method::Get,
        url: format!("{}/next-card", base),
        headers: player_headers(player_id),
        body: None,
    }
}

/// `POST /battle`: fight the computer on a chosen card attribute
pub fn battle(base: &str, player_id: &str, field: &str) -> ApiCall {
    let body = BattleRequest {
        field: field.to_string(),
    };
    ApiCall {
        method: Method::Post,
        url: format!("{}/battle", base),
        headers: player_headers(player_id),
        body: serde_json::to_value(&body).ok(),
    }
}

/// `GET /cards`: list the player's deck
pub fn list_cards(base: &str, player_id: &str) -> ApiCall {
    ApiCall {
        method: Method::Get,
        url: format!("{}/cards", base),
        headers: player_headers(player_id),
        body: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BASE: &str = "http://localhost:4000";

    fn header<'a>(call: &'a ApiCall, name: &str) -> Option<&'a str> {
        call.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn ping_builds_a_bare_get() {
        let call = ping(BASE);
        assert_eq!(call.method, Method::Get);
        assert_eq!(call.url, "http://localhost:4000/ping");
        assert_eq!(header(&call, "Content-Type"), Some(CONTENT_TYPE_JSON));
        assert_eq!(header(&call, PLAYER_ID_HEADER), None);
        assert_eq!(call.body, None);
    }

    #[test]
    fn register_posts_the_form_fields() {
        let call = register(BASE, "ash", "1996-02-27", "ash@example.com");
        assert_eq!(call.method, Method::Post);
        assert_eq!(call.url, "http://localhost:4000/register");
        assert_eq!(
            call.body,
            Some(json!({
                "username": "ash",
                "birthdate": "1996-02-27",
                "email": "ash@example.com",
            }))
        );
    }

    #[test]
    fn player_endpoints_carry_the_playerid_header() {
        for call in [
            profile(BASE, "abc123"),
            buy_card(BASE, "abc123"),
            next_card(BASE, "abc123"),
            list_cards(BASE, "abc123"),
        ] {
            assert_eq!(call.method, Method::Get);
            assert_eq!(header(&call, PLAYER_ID_HEADER), Some("abc123"));
            assert_eq!(header(&call, "Content-Type"), Some(CONTENT_TYPE_JSON));
            assert_eq!(call.body, None);
        }
    }

    #[test]
    fn player_endpoints_hit_their_paths() {
        assert_eq!(profile(BASE, "p").url, "http://localhost:4000/profile");
        assert_eq!(buy_card(BASE, "p").url, "http://localhost:4000/buy-card");
        assert_eq!(next_card(BASE, "p").url, "http://localhost:4000/next-card");
        assert_eq!(list_cards(BASE, "p").url, "http://localhost:4000/cards");
    }

    #[test]
    fn battle_posts_the_chosen_field() {
        let call = battle(BASE, "abc123", "damage");
        assert_eq!(call.method, Method::Post);
        assert_eq!(call.url, "http://localhost:4000/battle");
        assert_eq!(header(&call, PLAYER_ID_HEADER), Some("abc123"));
        assert_eq!(call.body, Some(json!({"field": "damage"})));
    }

    #[test]
    fn base_url_is_prepended_verbatim() {
        // Any string is accepted; a malformed base fails at the network layer
        let call = ping("not a url");
        assert_eq!(call.url, "not a url/ping");
    }
}
