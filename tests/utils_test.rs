use std::collections::HashMap;

use playdeck::config::Config;
use playdeck::spotify::{SpotifyClient, auth::SCOPES, error_message};
use playdeck::types::*;
use playdeck::utils::*;
use reqwest::Url;

// Helper function to create a test device
fn create_test_device(id: &str, is_active: bool, is_restricted: bool) -> Device {
    Device {
        id: Some(id.to_string()),
        name: format!("Device {}", id),
        is_active,
        is_restricted,
        device_type: "Computer".to_string(),
        volume_percent: Some(50),
    }
}

fn create_test_config() -> Config {
    Config {
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        redirect_uri: "http://localhost:8888/callback".to_string(),
        accounts_url: "https://accounts.example.com/".to_string(),
        api_url: "https://api.example.com/v1".to_string(),
        market: "US".to_string(),
    }
}

fn selected_id(devices: &[Device]) -> String {
    select_device(devices).unwrap().id.clone().unwrap()
}

#[test]
fn test_select_device_prefers_first_active() {
    let devices = vec![
        create_test_device("A", false, false),
        create_test_device("B", true, true), // active but restricted
        create_test_device("C", true, false),
    ];

    // Active wins regardless of the restriction flag
    assert_eq!(selected_id(&devices), "B");
}

#[test]
fn test_select_device_falls_back_to_unrestricted() {
    let devices = vec![
        create_test_device("A", false, true),
        create_test_device("B", false, false),
        create_test_device("C", false, false),
    ];

    assert_eq!(selected_id(&devices), "B");
}

#[test]
fn test_select_device_falls_back_to_first() {
    let devices = vec![
        create_test_device("A", false, true),
        create_test_device("B", false, true),
    ];

    assert_eq!(selected_id(&devices), "A");
}

#[test]
fn test_select_device_empty_list() {
    let devices: Vec<Device> = Vec::new();
    assert_eq!(select_device(&devices), Err(NoDevicesFound));
}

#[test]
fn test_select_device_examples() {
    // Restricted idle device next to an active one
    let devices = vec![
        create_test_device("A", false, true),
        create_test_device("B", true, false),
    ];
    assert_eq!(selected_id(&devices), "B");

    // Single restricted device is still used as a last resort
    let devices = vec![create_test_device("A", false, true)];
    assert_eq!(selected_id(&devices), "A");
}

#[test]
fn test_device_deserialize() {
    let json = r#"{
        "devices": [
            {"id": "abc", "is_active": true, "is_private_session": false, "is_restricted": false,
             "name": "Kitchen", "type": "Speaker", "volume_percent": 40, "supports_volume": true},
            {"id": null, "is_active": false, "is_restricted": true, "name": "Car", "type": "Automobile",
             "volume_percent": null}
        ]
    }"#;

    let payload: DevicesResponse = serde_json::from_str(json).unwrap();
    assert_eq!(payload.devices.len(), 2);
    assert_eq!(payload.devices[0].id.as_deref(), Some("abc"));
    assert_eq!(payload.devices[0].device_type, "Speaker");
    assert!(payload.devices[0].is_active);
    assert_eq!(payload.devices[1].id, None);
    assert!(payload.devices[1].is_restricted);
}

#[test]
fn test_build_search_query() {
    assert_eq!(
        build_search_query("Radiohead", SearchType::Artist),
        "artist:Radiohead"
    );
    assert_eq!(
        build_search_query("Karma Police", SearchType::Title),
        "track:Karma Police"
    );
    assert_eq!(build_search_query("Karma", SearchType::All), "Karma");
}

#[test]
fn test_search_type_from_param() {
    assert_eq!(SearchType::from_param(Some("artist")), SearchType::Artist);
    assert_eq!(SearchType::from_param(Some("title")), SearchType::Title);
    assert_eq!(SearchType::from_param(Some("all")), SearchType::All);
    assert_eq!(SearchType::from_param(Some("album")), SearchType::All);
    assert_eq!(SearchType::from_param(None), SearchType::All);
}

#[test]
fn test_playback_action_parse() {
    for action in PlaybackAction::ALL {
        let parsed: PlaybackAction = action.to_string().parse().unwrap();
        assert_eq!(parsed, action);
    }

    let result = "shuffle".parse::<PlaybackAction>();
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid action 'shuffle'"));

    // Parsing is case sensitive
    assert!("Play".parse::<PlaybackAction>().is_err());
}

#[test]
fn test_build_player_command() {
    assert_eq!(
        build_player_command(PlaybackAction::Play, Some("4uLU6hMCjMI75M1A2tKUQC")).unwrap(),
        PlayerCommand::Play {
            uris: vec!["spotify:track:4uLU6hMCjMI75M1A2tKUQC".to_string()]
        }
    );
    assert_eq!(
        build_player_command(PlaybackAction::Pause, None).unwrap(),
        PlayerCommand::Pause
    );
    assert_eq!(
        build_player_command(PlaybackAction::Next, Some("ignored")).unwrap(),
        PlayerCommand::Next
    );
    assert_eq!(
        build_player_command(PlaybackAction::Previous, None).unwrap(),
        PlayerCommand::Previous
    );

    // Play needs a track
    assert!(build_player_command(PlaybackAction::Play, None).is_err());
    assert!(build_player_command(PlaybackAction::Play, Some("")).is_err());
    assert!(build_player_command(PlaybackAction::Play, Some("  ")).is_err());
}

#[test]
fn test_auth_request_from_params() {
    let params = AuthParams {
        code: Some("code".to_string()),
        refresh_token: Some("refresh".to_string()),
    };
    assert_eq!(
        AuthRequest::from(params),
        AuthRequest::Refresh {
            refresh_token: "refresh".to_string()
        }
    );

    let params = AuthParams {
        code: Some("code".to_string()),
        refresh_token: None,
    };
    assert_eq!(
        AuthRequest::from(params),
        AuthRequest::CodeExchange {
            code: "code".to_string()
        }
    );

    // Empty values count as absent
    let params = AuthParams {
        code: Some(String::new()),
        refresh_token: Some(String::new()),
    };
    assert_eq!(AuthRequest::from(params), AuthRequest::AuthUrl);
    assert_eq!(AuthRequest::from(AuthParams::default()), AuthRequest::AuthUrl);

    // Whitespace-only values count as absent too
    let params = AuthParams {
        code: Some(" ".to_string()),
        refresh_token: Some("\t".to_string()),
    };
    assert_eq!(AuthRequest::from(params), AuthRequest::AuthUrl);
}

#[test]
fn test_params_from_query() {
    let query: HashMap<String, String> = [
        ("code".to_string(), "abc".to_string()),
        ("query".to_string(), "Creep".to_string()),
        ("type".to_string(), "title".to_string()),
    ]
    .into_iter()
    .collect();

    let auth = AuthParams::from(query.clone());
    assert_eq!(auth.code.as_deref(), Some("abc"));
    assert_eq!(auth.refresh_token, None);

    let search = SearchParams::from(query);
    assert_eq!(search.query.as_deref(), Some("Creep"));
    assert_eq!(search.search_type.as_deref(), Some("title"));
}

#[test]
fn test_non_empty() {
    assert_eq!(non_empty(Some("a".to_string())).as_deref(), Some("a"));
    assert_eq!(non_empty(Some("  ".to_string())), None);
    assert_eq!(non_empty(Some(String::new())), None);
    assert_eq!(non_empty(None), None);
}

#[test]
fn test_token_payload_serialize() {
    let payload = TokenPayload {
        access_token: "access".to_string(),
        refresh_token: None,
        expires_in: 3600,
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json, serde_json::json!({"access_token": "access", "expires_in": 3600}));
}

#[test]
fn test_generate_state() {
    let state = generate_state();

    assert_eq!(state.len(), STATE_LENGTH);
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(state, generate_state());
}

#[test]
fn test_authorize_url() {
    let client = SpotifyClient::new(&create_test_config());
    let url = client.authorize_url(&SCOPES, "xyz").unwrap();
    let url = Url::parse(&url).unwrap();

    assert_eq!(url.host_str(), Some("accounts.example.com"));
    assert_eq!(url.path(), "/authorize");

    let params: HashMap<String, String> = url.query_pairs().into_owned().collect();
    assert_eq!(params["client_id"], "client-id");
    assert_eq!(params["response_type"], "code");
    assert_eq!(params["redirect_uri"], "http://localhost:8888/callback");
    assert_eq!(params["state"], "xyz");
    assert_eq!(params["scope"], SCOPES.join(" "));
    assert!(params["scope"].contains("user-modify-playback-state"));
}

#[test]
fn test_error_message() {
    // Web API shape
    let body = r#"{"error": {"status": 404, "message": "Player command failed: No active device found"}}"#;
    assert_eq!(
        error_message(body).as_deref(),
        Some("Player command failed: No active device found")
    );

    // Accounts shape
    let body = r#"{"error": "invalid_grant", "error_description": "Invalid authorization code"}"#;
    assert_eq!(
        error_message(body).as_deref(),
        Some("invalid_grant: Invalid authorization code")
    );

    let body = r#"{"error": "invalid_client"}"#;
    assert_eq!(error_message(body).as_deref(), Some("invalid_client"));

    assert_eq!(error_message("not json"), None);
    assert_eq!(error_message(r#"{"ok": true}"#), None);
}
