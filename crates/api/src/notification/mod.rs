mod cancel_announcement_push;
mod cancel_event_reminders;
mod cancel_tournament_travel;
mod process_due_notifications;
mod queue_announcement_push;
mod schedule_event_reminders;
mod schedule_tournament_travel;

pub use cancel_announcement_push::CancelAnnouncementPushUseCase;
pub use cancel_event_reminders::CancelEventRemindersUseCase;
pub use cancel_tournament_travel::CancelTournamentTravelUseCase;
pub use queue_announcement_push::QueueAnnouncementPushUseCase;
pub use schedule_event_reminders::ScheduleEventRemindersUseCase;
pub use schedule_tournament_travel::ScheduleTournamentTravelUseCase;

use actix_web::web;
use process_due_notifications::process_due_notifications_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/cron/process-notifications",
        web::get().to(process_due_notifications_controller),
    );
}
