use super::subscribers::CancelRemindersOnEventDeleted;
use crate::error::DugoutError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use dugout_api_structs::delete_event::*;
use dugout_domain::{CalendarEvent, ID};
use dugout_infra::DugoutContext;

pub async fn delete_event_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<DugoutContext>,
) -> Result<HttpResponse, DugoutError> {
    let usecase = DeleteEventUseCase {
        event_id: path_params.event_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(DugoutError::from)
}

#[derive(Debug)]
pub struct DeleteEventUseCase {
    pub event_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for DugoutError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => {
                DugoutError::NotFound(format!("The event with id: {}, was not found.", event_id))
            }
            UseCaseError::StorageError => DugoutError::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteEventUseCase {
    type Response = CalendarEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteEvent";

    async fn execute(&mut self, ctx: &DugoutContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.events.delete(&self.event_id).await {
            Ok(Some(event)) => Ok(event),
            Ok(None) => Err(UseCaseError::NotFound(self.event_id.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(CancelRemindersOnEventDeleted)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::notification::ScheduleEventRemindersUseCase;
    use chrono::Duration;
    use dugout_domain::EventType;

    async fn insert_event(ctx: &DugoutContext, start_ts: i64) -> CalendarEvent {
        let event = CalendarEvent {
            id: Default::default(),
            title: "vs Tigers".into(),
            event_type: EventType::Game,
            start_ts,
            duration: 1000 * 60 * 90,
            location: Some("Field 3".into()),
            created: 0,
            updated: 0,
        };
        ctx.repos.events.insert(&event).await.unwrap();
        event
    }

    #[actix_web::main]
    #[test]
    async fn deletes_existing_event() {
        let ctx = DugoutContext::create_inmemory();
        let start_ts = ctx.sys.get_timestamp_millis() + Duration::days(3).num_milliseconds();
        let event = insert_event(&ctx, start_ts).await;

        let mut usecase = DeleteEventUseCase {
            event_id: event.id.clone(),
        };
        let res = usecase.execute(&ctx).await;
        assert!(res.is_ok());
        assert_eq!(res.unwrap().id, event.id);

        let stored = ctx.repos.events.find(&event.id).await.unwrap();
        assert!(stored.is_none());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_event() {
        let ctx = DugoutContext::create_inmemory();

        let mut usecase = DeleteEventUseCase {
            event_id: Default::default(),
        };
        let res = usecase.execute(&ctx).await;
        assert!(matches!(res, Err(UseCaseError::NotFound(_))));
    }

    #[actix_web::main]
    #[test]
    async fn cancels_pending_reminders_when_event_is_deleted() {
        let ctx = DugoutContext::create_inmemory();
        let start_ts = ctx.sys.get_timestamp_millis() + Duration::days(3).num_milliseconds();
        let event = insert_event(&ctx, start_ts).await;
        let schedule = ScheduleEventRemindersUseCase {
            event: event.clone(),
        };
        execute(schedule, &ctx).await.unwrap();
        let due = ctx
            .repos
            .scheduled_notifications
            .find_due(start_ts, 10)
            .await
            .unwrap();
        assert_eq!(due.len(), 2);

        let usecase = DeleteEventUseCase {
            event_id: event.id.clone(),
        };
        execute(usecase, &ctx).await.unwrap();

        let due = ctx
            .repos
            .scheduled_notifications
            .find_due(start_ts, 10)
            .await
            .unwrap();
        assert!(due.is_empty());
    }
}
