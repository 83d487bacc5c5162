use crate::shared::usecase::UseCase;
use dugout_domain::{CalendarEvent, NotificationKind, ReminderLead, ScheduledNotification};
use dugout_infra::DugoutContext;

/// Queues the push reminders for a `CalendarEvent`. A lead whose delivery
/// time already passed is skipped, so an event created tomorrow only gets
/// the 1 hour reminder.
#[derive(Debug)]
pub struct ScheduleEventRemindersUseCase {
    pub event: CalendarEvent,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for ScheduleEventRemindersUseCase {
    type Response = Vec<ScheduledNotification>;

    type Error = UseCaseError;

    const NAME: &'static str = "ScheduleEventReminders";

    async fn execute(&mut self, ctx: &DugoutContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();

        let mut scheduled = Vec::new();
        for lead in &[ReminderLead::Hours24, ReminderLead::Hours1] {
            let scheduled_for = self.event.start_ts - lead.offset_millis();
            if scheduled_for <= now {
                continue;
            }

            let notification = ScheduledNotification::new(
                NotificationKind::EventReminder(*lead),
                self.event.id.clone(),
                scheduled_for,
            );
            ctx.repos
                .scheduled_notifications
                .insert(&notification)
                .await
                .map_err(|_| UseCaseError::StorageError)?;
            scheduled.push(notification);
        }

        Ok(scheduled)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Duration;
    use dugout_domain::EventType;

    fn event_starting_at(start_ts: i64) -> CalendarEvent {
        CalendarEvent {
            id: Default::default(),
            title: "vs Tigers".into(),
            event_type: EventType::Game,
            start_ts,
            duration: 1000 * 60 * 90,
            location: Some("Field 3".into()),
            created: 0,
            updated: 0,
        }
    }

    #[actix_web::main]
    #[test]
    async fn schedules_both_reminder_leads() {
        let ctx = DugoutContext::create_inmemory();
        let start_ts = ctx.sys.get_timestamp_millis() + Duration::days(7).num_milliseconds();

        let mut usecase = ScheduleEventRemindersUseCase {
            event: event_starting_at(start_ts),
        };
        let scheduled = usecase.execute(&ctx).await.expect("To schedule reminders");

        assert_eq!(scheduled.len(), 2);
        assert_eq!(
            scheduled[0].kind,
            NotificationKind::EventReminder(ReminderLead::Hours24)
        );
        assert_eq!(
            scheduled[0].scheduled_for,
            start_ts - Duration::hours(24).num_milliseconds()
        );
        assert_eq!(
            scheduled[1].kind,
            NotificationKind::EventReminder(ReminderLead::Hours1)
        );
        assert_eq!(
            scheduled[1].scheduled_for,
            start_ts - Duration::hours(1).num_milliseconds()
        );

        let stored = ctx
            .repos
            .scheduled_notifications
            .find_due(start_ts, 10)
            .await
            .expect("To query notifications");
        assert_eq!(stored.len(), 2);
    }

    #[actix_web::main]
    #[test]
    async fn skips_leads_that_already_passed() {
        let ctx = DugoutContext::create_inmemory();
        let start_ts = ctx.sys.get_timestamp_millis() + Duration::hours(2).num_milliseconds();

        let mut usecase = ScheduleEventRemindersUseCase {
            event: event_starting_at(start_ts),
        };
        let scheduled = usecase.execute(&ctx).await.expect("To schedule reminders");

        assert_eq!(scheduled.len(), 1);
        assert_eq!(
            scheduled[0].kind,
            NotificationKind::EventReminder(ReminderLead::Hours1)
        );
    }

    #[actix_web::main]
    #[test]
    async fn schedules_nothing_for_started_events() {
        let ctx = DugoutContext::create_inmemory();
        let start_ts = ctx.sys.get_timestamp_millis() - Duration::hours(1).num_milliseconds();

        let mut usecase = ScheduleEventRemindersUseCase {
            event: event_starting_at(start_ts),
        };
        let scheduled = usecase.execute(&ctx).await.expect("To schedule reminders");

        assert!(scheduled.is_empty());
    }
}
