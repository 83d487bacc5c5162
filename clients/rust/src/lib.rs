mod announcement;
mod base;
mod device_token;
mod event;
mod notification;
mod status;
mod tournament;

use announcement::AnnouncementClient;
pub use announcement::CreateAnnouncementInput;
pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use device_token::DeviceTokenClient;
pub use device_token::{RegisterDeviceTokenInput, RemoveDeviceTokenInput};
use event::CalendarEventClient;
pub use event::{CreateEventInput, UpdateEventInput};
use notification::NotificationClient;
pub use dugout_api_structs::dtos::*;
pub use dugout_api_structs::process_due_notifications::APIResponse as ProcessDueNotificationsResponse;
pub use dugout_domain::{AnnouncementPriority, EventType, Platform, ID};
use status::StatusClient;
use std::sync::Arc;
use tournament::TournamentClient;
pub use tournament::CreateTournamentInput;

// Domain
pub use dugout_api_structs::dtos::AnnouncementDTO as Announcement;
pub use dugout_api_structs::dtos::CalendarEventDTO as CalendarEvent;
pub use dugout_api_structs::dtos::DeviceTokenDTO as DeviceToken;
pub use dugout_api_structs::dtos::TournamentDTO as Tournament;

/// Dugout Server SDK
///
/// The SDK contains methods for interacting with the Dugout server API.
#[derive(Clone)]
pub struct DugoutSDK {
    pub announcement: AnnouncementClient,
    pub device_token: DeviceTokenClient,
    pub event: CalendarEventClient,
    pub notification: NotificationClient,
    pub status: StatusClient,
    pub tournament: TournamentClient,
}

impl DugoutSDK {
    pub fn new<T: Into<String>>(address: String, cron_secret: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_cron_secret(cron_secret.into());
        let base = Arc::new(base);
        let announcement = AnnouncementClient::new(base.clone());
        let device_token = DeviceTokenClient::new(base.clone());
        let event = CalendarEventClient::new(base.clone());
        let notification = NotificationClient::new(base.clone());
        let status = StatusClient::new(base.clone());
        let tournament = TournamentClient::new(base);

        Self {
            announcement,
            device_token,
            event,
            notification,
            status,
            tournament,
        }
    }
}
