mod announcement;
mod device_token;
mod event;
mod notification;
mod shared;
mod tournament;

pub use announcement::{Announcement, AnnouncementPriority, InvalidAnnouncementPriorityError};
pub use device_token::{DeviceToken, InvalidPlatformError, Platform};
pub use event::{CalendarEvent, EventType, InvalidEventTypeError};
pub use notification::{
    InvalidNotificationKindError, InvalidNotificationStatusError, NotificationKind,
    NotificationPayload, NotificationStatus, ReminderLead, ScheduledNotification,
};
pub use shared::entity::{Entity, ID};
pub use tournament::Tournament;
