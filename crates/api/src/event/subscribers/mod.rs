use super::{
    create_event::CreateEventUseCase, delete_event::DeleteEventUseCase,
    update_event::UpdateEventUseCase,
};
use crate::notification::{CancelEventRemindersUseCase, ScheduleEventRemindersUseCase};
use crate::shared::usecase::{execute, Subscriber};
use dugout_domain::CalendarEvent;

pub struct ScheduleRemindersOnEventCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateEventUseCase> for ScheduleRemindersOnEventCreated {
    async fn notify(&self, e: &CalendarEvent, ctx: &dugout_infra::DugoutContext) {
        let schedule_reminders = ScheduleEventRemindersUseCase { event: e.clone() };

        // Sideeffect, ignore result
        let _ = execute(schedule_reminders, ctx).await;
    }
}

pub struct SyncRemindersOnEventUpdated;

#[async_trait::async_trait(?Send)]
impl Subscriber<UpdateEventUseCase> for SyncRemindersOnEventUpdated {
    async fn notify(&self, e: &CalendarEvent, ctx: &dugout_infra::DugoutContext) {
        let cancel_reminders = CancelEventRemindersUseCase {
            event_id: e.id.clone(),
        };

        // Sideeffect, ignore result
        let _ = execute(cancel_reminders, ctx).await;

        let schedule_reminders = ScheduleEventRemindersUseCase { event: e.clone() };

        // Sideeffect, ignore result
        let _ = execute(schedule_reminders, ctx).await;
    }
}

pub struct CancelRemindersOnEventDeleted;

#[async_trait::async_trait(?Send)]
impl Subscriber<DeleteEventUseCase> for CancelRemindersOnEventDeleted {
    async fn notify(&self, e: &CalendarEvent, ctx: &dugout_infra::DugoutContext) {
        let cancel_reminders = CancelEventRemindersUseCase {
            event_id: e.id.clone(),
        };

        // Sideeffect, ignore result
        let _ = execute(cancel_reminders, ctx).await;
    }
}
