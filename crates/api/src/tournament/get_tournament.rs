use crate::error::DugoutError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use dugout_api_structs::get_tournament::*;
use dugout_domain::{Tournament, ID};
use dugout_infra::DugoutContext;

pub async fn get_tournament_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<DugoutContext>,
) -> Result<HttpResponse, DugoutError> {
    let usecase = GetTournamentUseCase {
        tournament_id: path_params.tournament_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|tournament| HttpResponse::Ok().json(APIResponse::new(tournament)))
        .map_err(DugoutError::from)
}

#[derive(Debug)]
pub struct GetTournamentUseCase {
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
impl UseCase for GetTournamentUseCase {
    type Response = Tournament;

    type Error = UseCaseError;

    const NAME: &'static str = "GetTournament";

    async fn execute(&mut self, ctx: &DugoutContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.tournaments.find(&self.tournament_id).await {
            Ok(Some(tournament)) => Ok(tournament),
            Ok(None) => Err(UseCaseError::NotFound(self.tournament_id.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[actix_web::main]
    #[test]
    async fn finds_existing_tournament() {
        let ctx = DugoutContext::create_inmemory();
        let tournament = Tournament {
            id: Default::default(),
            name: "Cooperstown Classic".into(),
            start_ts: 100,
            location: None,
            hotel_name: None,
            hotel_link: None,
            created: 0,
            updated: 0,
        };
        ctx.repos.tournaments.insert(&tournament).await.unwrap();

        let mut usecase = GetTournamentUseCase {
            tournament_id: tournament.id.clone(),
        };
        let res = usecase.execute(&ctx).await;
        assert!(res.is_ok());
        assert_eq!(res.unwrap().id, tournament.id);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_tournament() {
        let ctx = DugoutContext::create_inmemory();

        let mut usecase = GetTournamentUseCase {
            tournament_id: Default::default(),
        };
        let res = usecase.execute(&ctx).await;
        assert!(matches!(res, Err(UseCaseError::NotFound(_))));
    }
}
