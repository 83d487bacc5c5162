use crate::shared::usecase::UseCase;
use chrono::Duration;
use dugout_domain::{NotificationKind, ScheduledNotification, Tournament};
use dugout_infra::DugoutContext;

/// How far ahead of the first tournament day the travel reminder goes out
const TRAVEL_LEAD_DAYS: i64 = 90;

/// Queues the travel reminder for a `Tournament`. Tournaments starting
/// within the travel lead get no reminder, booking should already be
/// underway for those.
#[derive(Debug)]
pub struct ScheduleTournamentTravelUseCase {
    pub tournament: Tournament,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for ScheduleTournamentTravelUseCase {
    type Response = Option<ScheduledNotification>;

    type Error = UseCaseError;

    const NAME: &'static str = "ScheduleTournamentTravel";

    async fn execute(&mut self, ctx: &DugoutContext) -> Result<Self::Response, Self::Error> {
        let scheduled_for =
            self.tournament.start_ts - Duration::days(TRAVEL_LEAD_DAYS).num_milliseconds();
        if scheduled_for <= ctx.sys.get_timestamp_millis() {
            return Ok(None);
        }

        let notification = ScheduledNotification::new(
            NotificationKind::TournamentTravel,
            self.tournament.id.clone(),
            scheduled_for,
        );
        ctx.repos
            .scheduled_notifications
            .insert(&notification)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(Some(notification))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn tournament_starting_at(start_ts: i64) -> Tournament {
        Tournament {
            id: Default::default(),
            name: "Cooperstown Classic".into(),
            start_ts,
            location: Some("Cooperstown, NY".into()),
            hotel_name: None,
            hotel_link: None,
            created: 0,
            updated: 0,
        }
    }

    #[actix_web::main]
    #[test]
    async fn schedules_the_travel_reminder() {
        let ctx = DugoutContext::create_inmemory();
        let start_ts = ctx.sys.get_timestamp_millis() + Duration::days(120).num_milliseconds();

        let mut usecase = ScheduleTournamentTravelUseCase {
            tournament: tournament_starting_at(start_ts),
        };
        let scheduled = usecase
            .execute(&ctx)
            .await
            .expect("To schedule travel reminder")
            .expect("Travel reminder to be scheduled");

        assert_eq!(scheduled.kind, NotificationKind::TournamentTravel);
        assert_eq!(
            scheduled.scheduled_for,
            start_ts - Duration::days(90).num_milliseconds()
        );
    }

    #[actix_web::main]
    #[test]
    async fn skips_tournaments_within_the_travel_lead() {
        let ctx = DugoutContext::create_inmemory();
        let start_ts = ctx.sys.get_timestamp_millis() + Duration::days(30).num_milliseconds();

        let mut usecase = ScheduleTournamentTravelUseCase {
            tournament: tournament_starting_at(start_ts),
        };
        let scheduled = usecase
            .execute(&ctx)
            .await
            .expect("To execute the usecase");

        assert!(scheduled.is_none());
        let stored = ctx
            .repos
            .scheduled_notifications
            .find_due(start_ts, 10)
            .await
            .unwrap();
        assert!(stored.is_empty());
    }
}
