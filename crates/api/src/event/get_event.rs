use crate::error::DugoutError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use dugout_api_structs::get_event::*;
use dugout_domain::{CalendarEvent, ID};
use dugout_infra::DugoutContext;

pub async fn get_event_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<DugoutContext>,
) -> Result<HttpResponse, DugoutError> {
    let usecase = GetEventUseCase {
        event_id: path_params.event_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(DugoutError::from)
}

#[derive(Debug)]
pub struct GetEventUseCase {
    pub event_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for DugoutError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => {
                Self::NotFound(format!("The event with id: {}, was not found.", event_id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventUseCase {
    type Response = CalendarEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "GetEvent";

    async fn execute(&mut self, ctx: &DugoutContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.events.find(&self.event_id).await {
            Ok(Some(event)) => Ok(event),
            Ok(None) => Err(UseCaseError::NotFound(self.event_id.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use dugout_domain::EventType;

    #[actix_web::main]
    #[test]
    async fn finds_existing_event() {
        let ctx = DugoutContext::create_inmemory();
        let event = CalendarEvent {
            id: Default::default(),
            title: "Bullpen session".into(),
            event_type: EventType::Practice,
            start_ts: 1000,
            duration: 1000 * 60 * 60,
            location: None,
            created: 0,
            updated: 0,
        };
        ctx.repos.events.insert(&event).await.unwrap();

        let mut usecase = GetEventUseCase {
            event_id: event.id.clone(),
        };
        let res = usecase.execute(&ctx).await;

        assert_eq!(res.unwrap(), event);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_event() {
        let ctx = DugoutContext::create_inmemory();

        let mut usecase = GetEventUseCase {
            event_id: ID::new(),
        };
        let res = usecase.execute(&ctx).await;

        assert_eq!(res.unwrap_err(), UseCaseError::NotFound(usecase.event_id));
    }
}
