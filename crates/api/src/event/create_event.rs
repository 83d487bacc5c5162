use super::subscribers::ScheduleRemindersOnEventCreated;
use crate::error::DugoutError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use dugout_api_structs::create_event::*;
use dugout_domain::{CalendarEvent, EventType};
use dugout_infra::DugoutContext;

pub async fn create_event_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<DugoutContext>,
) -> Result<HttpResponse, DugoutError> {
    let body = body.0;
    let usecase = CreateEventUseCase {
        title: body.title,
        event_type: body.event_type,
        start_ts: body.start_ts,
        duration: body.duration,
        location: body.location,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Created().json(APIResponse::new(event)))
        .map_err(DugoutError::from)
}

#[derive(Debug)]
pub struct CreateEventUseCase {
    pub title: String,
    pub event_type: EventType,
    pub start_ts: i64,
    pub duration: i64,
    pub location: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for DugoutError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEventUseCase {
    type Response = CalendarEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateEvent";

    async fn execute(&mut self, ctx: &DugoutContext) -> Result<Self::Response, Self::Error> {
        let e = CalendarEvent {
            id: Default::default(),
            title: self.title.clone(),
            event_type: self.event_type,
            start_ts: self.start_ts,
            duration: self.duration,
            location: self.location.clone(),
            created: ctx.sys.get_timestamp_millis(),
            updated: ctx.sys.get_timestamp_millis(),
        };

        ctx.repos
            .events
            .insert(&e)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(e)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(ScheduleRemindersOnEventCreated)]
    }
}
