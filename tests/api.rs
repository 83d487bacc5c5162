mod helpers;

use chrono::Duration;
use chrono::Utc;
use helpers::setup::spawn_app;
use dugout_sdk::{
    AnnouncementPriority, CreateAnnouncementInput, CreateEventInput, CreateTournamentInput,
    EventType, Platform, RegisterDeviceTokenInput, RemoveDeviceTokenInput, UpdateEventInput, ID,
};

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (_, sdk, _) = spawn_app().await;
    assert!(sdk.status.check_health().await.is_ok());
}

#[actix_web::main]
#[test]
async fn test_crud_events() {
    let (_, sdk, _) = spawn_app().await;

    let start_ts = Utc::now().timestamp_millis() + Duration::days(7).num_milliseconds();
    let res = sdk
        .event
        .create(CreateEventInput {
            title: "vs Tigers".into(),
            event_type: EventType::Game,
            start_ts,
            duration: 1000 * 60 * 90,
            location: Some("Field 3".into()),
        })
        .await
        .expect("Expected to create event");
    let event = res.event;
    assert_eq!(event.title, "vs Tigers");
    assert_eq!(event.event_type, EventType::Game);

    let event = sdk
        .event
        .get(event.id.clone())
        .await
        .expect("Expected to find event")
        .event;
    assert_eq!(event.location, Some("Field 3".into()));

    let new_start_ts = start_ts + Duration::days(1).num_milliseconds();
    let event = sdk
        .event
        .update(UpdateEventInput {
            event_id: event.id.clone(),
            title: None,
            event_type: None,
            start_ts: Some(new_start_ts),
            duration: None,
            location: None,
        })
        .await
        .expect("Expected to update event")
        .event;
    assert_eq!(event.start_ts, new_start_ts);
    assert_eq!(event.title, "vs Tigers");

    sdk.event
        .delete(event.id.clone())
        .await
        .expect("Expected to delete event");
    assert!(sdk.event.get(event.id).await.is_err());
}

#[actix_web::main]
#[test]
async fn test_get_unknown_event_is_not_found() {
    let (_, sdk, _) = spawn_app().await;
    assert!(sdk.event.get(ID::new()).await.is_err());
}

#[actix_web::main]
#[test]
async fn test_crud_tournaments() {
    let (_, sdk, _) = spawn_app().await;

    let start_ts = Utc::now().timestamp_millis() + Duration::days(120).num_milliseconds();
    let tournament = sdk
        .tournament
        .create(CreateTournamentInput {
            name: "Cooperstown Classic".into(),
            start_ts,
            location: Some("Cooperstown, NY".into()),
            hotel_name: Some("Marriott Downtown".into()),
            hotel_link: Some("https://example.com/booking".into()),
        })
        .await
        .expect("Expected to create tournament")
        .tournament;
    assert_eq!(tournament.name, "Cooperstown Classic");
    assert_eq!(tournament.hotel_name, Some("Marriott Downtown".into()));

    let tournament = sdk
        .tournament
        .get(tournament.id.clone())
        .await
        .expect("Expected to find tournament")
        .tournament;

    sdk.tournament
        .delete(tournament.id.clone())
        .await
        .expect("Expected to delete tournament");
    assert!(sdk.tournament.get(tournament.id).await.is_err());
}

#[actix_web::main]
#[test]
async fn test_crud_announcements() {
    let (_, sdk, _) = spawn_app().await;

    let announcement = sdk
        .announcement
        .create(CreateAnnouncementInput {
            title: "Rainout".into(),
            content: "Practice is cancelled today.".into(),
            priority: None,
        })
        .await
        .expect("Expected to create announcement")
        .announcement;
    // Priority defaults to normal when none is given
    assert_eq!(announcement.priority, AnnouncementPriority::Normal);

    let announcement = sdk
        .announcement
        .get(announcement.id.clone())
        .await
        .expect("Expected to find announcement")
        .announcement;

    sdk.announcement
        .delete(announcement.id.clone())
        .await
        .expect("Expected to delete announcement");
    assert!(sdk.announcement.get(announcement.id).await.is_err());
}

#[actix_web::main]
#[test]
async fn test_register_and_remove_device_tokens() {
    let (_, sdk, _) = spawn_app().await;
    let user_id = ID::new();

    let device_token = sdk
        .device_token
        .register(RegisterDeviceTokenInput {
            user_id: user_id.clone(),
            token: "test-device-token".into(),
            platform: Platform::Ios,
        })
        .await
        .expect("Expected to register device token")
        .device_token;
    assert!(device_token.active);
    assert_eq!(device_token.platform, Platform::Ios);

    let res = sdk
        .device_token
        .remove(RemoveDeviceTokenInput {
            user_id: user_id.clone(),
            token: "test-device-token".into(),
        })
        .await
        .expect("Expected to remove device token");
    assert_eq!(res.deleted_count, 1);

    let res = sdk
        .device_token
        .remove(RemoveDeviceTokenInput {
            user_id,
            token: "test-device-token".into(),
        })
        .await
        .expect("Expected remove to be idempotent");
    assert_eq!(res.deleted_count, 0);
}
