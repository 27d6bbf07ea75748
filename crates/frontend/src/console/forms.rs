//! The seven "try it now" forms. Each one intercepts its submit event,
//! builds a request from the current field values, and renders the resulting
//! exchange into its own container.

use crate::api::{self, endpoints, ApiCall, ApiExchange, Outcome};
use crate::console::response_view::ResponseContainer;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::config::use_docs_config;
use contracts::game::RegisterResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn run_call(call: ApiCall, set_exchange: WriteSignal<Option<ApiExchange>>) {
    spawn_local(async move {
        set_exchange.set(Some(api::execute(call).await));
    });
}

/// `GET /ping`: no fields, just a trigger.
#[component]
pub fn PingForm() -> impl IntoView {
    let config = use_docs_config();
    let (exchange, set_exchange) = signal(None::<ApiExchange>);

    view! {
        <form
            id="ping-form"
            class="try-form"
            on:submit=move |ev| {
                ev.prevent_default();
                run_call(endpoints::ping(&config.base_url.get_untracked()), set_exchange);
            }
        >
            <Button button_type="submit">"Send Request"</Button>
        </form>
        <ResponseContainer exchange=exchange />
    }
}

/// `POST /register`: the only form with a post-success callback: the
/// returned playerID is handed to the console to fill the other forms.
#[component]
pub fn RegisterForm(on_registered: Callback<String>) -> impl IntoView {
    let config = use_docs_config();
    let (exchange, set_exchange) = signal(None::<ApiExchange>);
    let (username, set_username) = signal(String::new());
    let (birthdate, set_birthdate) = signal(String::new());
    let (email, set_email) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let call = endpoints::register(
            &config.base_url.get_untracked(),
            &username.get_untracked(),
            &birthdate.get_untracked(),
            &email.get_untracked(),
        );
        spawn_local(async move {
            let exchange = api::execute(call).await;
            if let Outcome::Success { body } = &exchange.outcome {
                if let Ok(reply) = serde_json::from_value::<RegisterResponse>(body.clone()) {
                    on_registered.run(reply.player_id);
                }
            }
            set_exchange.set(Some(exchange));
        });
    };

    view! {
        <form id="register-form" class="try-form" on:submit=on_submit>
            <Input
                label="Username"
                id="register-username"
                value=username
                on_input=Callback::new(move |value: String| set_username.set(value))
            />
            <Input
                label="Birthdate"
                id="register-birthdate"
                input_type="date"
                value=birthdate
                on_input=Callback::new(move |value: String| set_birthdate.set(value))
            />
            <Input
                label="Email"
                id="register-email"
                input_type="email"
                value=email
                on_input=Callback::new(move |value: String| set_email.set(value))
            />
            <Button button_type="submit">"Send Request"</Button>
        </form>
        <ResponseContainer exchange=exchange />
    }
}

/// Shared shape of the four GET endpoints that only need a player id.
#[component]
pub fn PlayerIdForm(
    /// Form element id, e.g. "profile-form"
    form_id: &'static str,
    /// Player id input element id
    input_id: &'static str,
    /// Owned by the console so registration can fill it
    player_id: RwSignal<String>,
    /// Request builder for this form's endpoint
    build_call: fn(&str, &str) -> ApiCall,
) -> impl IntoView {
    let config = use_docs_config();
    let (exchange, set_exchange) = signal(None::<ApiExchange>);

    view! {
        <form
            id=form_id
            class="try-form"
            on:submit=move |ev| {
                ev.prevent_default();
                run_call(
                    build_call(
                        &config.base_url.get_untracked(),
                        &player_id.get_untracked(),
                    ),
                    set_exchange,
                );
            }
        >
            <Input
                label="Player ID"
                id=input_id
                value=player_id
                on_input=Callback::new(move |value: String| player_id.set(value))
            />
            <Button button_type="submit">"Send Request"</Button>
        </form>
        <ResponseContainer exchange=exchange />
    }
}

/// `POST /battle`: player id header plus the attribute the round is
/// fought on.
#[component]
pub fn BattleForm(player_id: RwSignal<String>) -> impl IntoView {
    let config = use_docs_config();
    let (exchange, set_exchange) = signal(None::<ApiExchange>);
    let (field, set_field) = signal("damage".to_string());
    let field_options = vec![
        ("damage".to_string(), "Damage".to_string()),
        ("speed".to_string(), "Speed".to_string()),
        ("strength".to_string(), "Strength".to_string()),
    ];

    view! {
        <form
            id="battle-form"
            class="try-form"
            on:submit=move |ev| {
                ev.prevent_default();
                run_call(
                    endpoints::battle(
                        &config.base_url.get_untracked(),
                        &player_id.get_untracked(),
                        &field.get_untracked(),
                    ),
                    set_exchange,
                );
            }
        >
            <Input
                label="Player ID"
                id="battle-player-id"
                value=player_id
                on_input=Callback::new(move |value: String| player_id.set(value))
            />
            <Select
                label="Field"
                id="battle-field"
                value=field
                options=field_options
                on_change=Callback::new(move |value: String| set_field.set(value))
            />
            <Button button_type="submit">"Send Request"</Button>
        </form>
        <ResponseContainer exchange=exchange />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Method, PLAYER_ID_HEADER};

    // The four player-id forms dispatch through the `build_call` fn-pointer
    // prop; every builder handed to it must fit the same signature.
    #[test]
    fn player_id_form_builders_share_the_dispatch_signature() {
        let builders: [(fn(&str, &str) -> ApiCall, &str); 4] = [
            (endpoints::profile, "http://localhost:4000/profile"),
            (endpoints::buy_card, "http://localhost:4000/buy-card"),
            (endpoints::next_card, "http://localhost:4000/next-card"),
            (endpoints::list_cards, "http://localhost:4000/cards"),
        ];
        for (build_call, url) in builders {
            let call = build_call("http://localhost:4000", "abc123");
            assert_eq!(call.method, Method::Get);
            assert_eq!(call.url, url);
            assert!(call
                .headers
                .iter()
                .any(|(name, value)| name == PLAYER_ID_HEADER && value == "abc123"));
        }
    }
}
