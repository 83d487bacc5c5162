use super::subscribers::CancelTravelOnTournamentDeleted;
use crate::error::DugoutError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use dugout_api_structs::delete_tournament::*;
use dugout_domain::{Tournament, ID};
use dugout_infra::DugoutContext;

pub async fn delete_tournament_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<DugoutContext>,
) -> Result<HttpResponse, DugoutError> {
    let usecase = DeleteTournamentUseCase {
        tournament_id: path_params.tournament_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|tournament| HttpResponse::Ok().json(APIResponse::new(tournament)))
        .map_err(DugoutError::from)
}

#[derive(Debug)]
pub struct DeleteTournamentUseCase {
    pub tournament_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for DugoutError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(tournament_id) => DugoutError::NotFound(format!(
                "The tournament with id: {}, was not found.",
                tournament_id
            )),
            UseCaseError::StorageError => DugoutError::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteTournamentUseCase {
    type Response = Tournament;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteTournament";

    async fn execute(&mut self, ctx: &DugoutContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.tournaments.delete(&self.tournament_id).await {
            Ok(Some(tournament)) => Ok(tournament),
            Ok(None) => Err(UseCaseError::NotFound(self.tournament_id.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(CancelTravelOnTournamentDeleted)]
    }
}
