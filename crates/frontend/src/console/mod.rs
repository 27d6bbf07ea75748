//! The "try it now" console: one documentation section per endpoint, each
//! with a live curl example, a form, and a response container.

pub mod forms;
pub mod response_view;
pub mod section;

use crate::api::Method;
use forms::{BattleForm, PingForm, PlayerIdForm, RegisterForm};
use leptos::prelude::*;
use section::EndpointSection;

/// One documentation section, as the sidebar sees it.
pub struct Section {
    /// Element id of the section, target of the sidebar item
    pub id: &'static str,
    pub label: &'static str,
    /// Nested anchor entries: (label, target element id)
    pub anchors: &'static [(&'static str, &'static str)],
}

pub const SECTIONS: &[Section] = &[
    Section {
        id: "ping",
        label: "Ping",
        anchors: &[("Example", "ping-example"), ("Try it now", "ping-try")],
    },
    Section {
        id: "register",
        label: "Register",
        anchors: &[
            ("Example", "register-example"),
            ("Try it now", "register-try"),
        ],
    },
    Section {
        id: "profile",
        label: "Profile",
        anchors: &[
            ("Example", "profile-example"),
            ("Try it now", "profile-try"),
        ],
    },
    Section {
        id: "buy-card",
        label: "Buy Card",
        anchors: &[
            ("Example", "buy-card-example"),
            ("Try it now", "buy-card-try"),
        ],
    },
    Section {
        id: "next-card",
        label: "Next Card",
        anchors: &[
            ("Example", "next-card-example"),
            ("Try it now", "next-card-try"),
        ],
    },
    Section {
        id: "battle",
        label: "Battle",
        anchors: &[("Example", "battle-example"), ("Try it now", "battle-try")],
    },
    Section {
        id: "cards",
        label: "List Cards",
        anchors: &[("Example", "cards-example"), ("Try it now", "cards-try")],
    },
];

#[component]
pub fn ApiConsole() -> impl IntoView {
    let profile_player_id = RwSignal::new(String::new());
    let buy_card_player_id = RwSignal::new(String::new());
    let next_card_player_id = RwSignal::new(String::new());
    let battle_player_id = RwSignal::new(String::new());
    let cards_player_id = RwSignal::new(String::new());

    // After a successful registration, fan the returned playerID out to every
    // form that sends it as a header.
    let on_registered = Callback::new(move |player_id: String| {
        for target in [
            profile_player_id,
            buy_card_player_id,
            next_card_player_id,
            battle_player_id,
            cards_player_id,
        ] {
            target.set(player_id.clone());
        }
    });

    view! {
        <main id="content" class="content">
            <EndpointSection
                id="ping"
                title="Ping"
                description="Check that the API server is up."
                method=Method::Get
                path="/ping"
                curl_flags=r#"-H "Content-Type: application/json""#
            >
                <PingForm />
            </EndpointSection>

            <EndpointSection
                id="register"
                title="Register"
                description="Create a new player. The reply carries the playerID required by every other endpoint."
                method=Method::Post
                path="/register"
                curl_flags=r#"-H "Content-Type: application/json" -d '{"username":"ash","birthdate":"1996-02-27","email":"ash@example.com"}'"#
            >
                <RegisterForm on_registered=on_registered />
            </EndpointSection>

            <EndpointSection
                id="profile"
                title="Profile"
                description="Retrieve the registered player's profile."
                method=Method::Get
                path="/profile"
                curl_flags=r#"-H "Content-Type: application/json" -H "playerid: <playerID>""#
            >
                <PlayerIdForm
                    form_id="profile-form"
                    input_id="profile-player-id"
                    player_id=profile_player_id
                    build_call=crate::api::endpoints::profile
                />
            </EndpointSection>

            <EndpointSection
                id="buy-card"
                title="Buy Card"
                description="Buy a new card for the player's deck."
                method=Method::Get
                path="/buy-card"
                curl_flags=r#"-H "Content-Type: application/json" -H "playerid: <playerID>""#
            >
                <PlayerIdForm
                    form_id="buy-card-form"
                    input_id="buy-card-player-id"
                    player_id=buy_card_player_id
                    build_call=crate::api::endpoints::buy_card
                />
            </EndpointSection>

            <EndpointSection
                id="next-card"
                title="Next Card"
                description="Peek at the next card in the player's deck."
                method=Method::Get
                path="/next-card"
                curl_flags=r#"-H "Content-Type: application/json" -H "playerid: <playerID>""#
            >
                <PlayerIdForm
                    form_id="next-card-form"
                    input_id="next-card-player-id"
                    player_id=next_card_player_id
                    build_call=crate::api::endpoints::next_card
                />
            </EndpointSection>

            <EndpointSection
                id="battle"
                title="Battle"
                description="Fight the computer on a chosen card attribute."
                method=Method::Post
                path="/battle"
                curl_flags=r#"-H "Content-Type: application/json" -H "playerid: <playerID>" -d '{"field":"damage"}'"#
            >
                <BattleForm player_id=battle_player_id />
            </EndpointSection>

            <EndpointSection
                id="cards"
                title="List Cards"
                description="List every card in the player's deck."
                method=Method::Get
                path="/cards"
                curl_flags=r#"-H "Content-Type: application/json" -H "playerid: <playerID>""#
            >
                <PlayerIdForm
                    form_id="cards-form"
                    input_id="cards-player-id"
                    player_id=cards_player_id
                    build_call=crate::api::endpoints::list_cards
                />
            </EndpointSection>
        </main>
    }
}
