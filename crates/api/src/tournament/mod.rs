mod create_tournament;
mod delete_tournament;
mod get_tournament;
mod subscribers;

use actix_web::web;
use create_tournament::create_tournament_controller;
use delete_tournament::delete_tournament_controller;
use get_tournament::get_tournament_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/tournaments", web::post().to(create_tournament_controller));
    cfg.route(
        "/tournaments/{tournament_id}",
        web::get().to(get_tournament_controller),
    );
    cfg.route(
        "/tournaments/{tournament_id}",
        web::delete().to(delete_tournament_controller),
    );
}
