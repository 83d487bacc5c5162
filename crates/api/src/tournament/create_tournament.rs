use super::subscribers::ScheduleTravelOnTournamentCreated;
use crate::error::DugoutError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use dugout_api_structs::create_tournament::*;
use dugout_domain::Tournament;
use dugout_infra::DugoutContext;

pub async fn create_tournament_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<DugoutContext>,
) -> Result<HttpResponse, DugoutError> {
    let body = body.0;
    let usecase = CreateTournamentUseCase {
        name: body.name,
        start_ts: body.start_ts,
        location: body.location,
        hotel_name: body.hotel_name,
        hotel_link: body.hotel_link,
    };

    execute(usecase, &ctx)
        .await
        .map(|tournament| HttpResponse::Created().json(APIResponse::new(tournament)))
        .map_err(DugoutError::from)
}

#[derive(Debug)]
pub struct CreateTournamentUseCase {
    pub name: String,
    pub start_ts: i64,
    pub location: Option<String>,
    pub hotel_name: Option<String>,
    pub hotel_link: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for DugoutError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => DugoutError::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateTournamentUseCase {
    type Response = Tournament;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateTournament";

    async fn execute(&mut self, ctx: &DugoutContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let tournament = Tournament {
            id: Default::default(),
            name: self.name.clone(),
            start_ts: self.start_ts,
            location: self.location.clone(),
            hotel_name: self.hotel_name.clone(),
            hotel_link: self.hotel_link.clone(),
            created: now,
            updated: now,
        };

        ctx.repos
            .tournaments
            .insert(&tournament)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(tournament)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(ScheduleTravelOnTournamentCreated)]
    }
}
