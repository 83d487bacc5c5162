mod create_announcement;
mod delete_announcement;
mod get_announcement;
mod subscribers;

use actix_web::web;
use create_announcement::create_announcement_controller;
use delete_announcement::delete_announcement_controller;
use get_announcement::get_announcement_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/announcements",
        web::post().to(create_announcement_controller),
    );
    cfg.route(
        "/announcements/{announcement_id}",
        web::get().to(get_announcement_controller),
    );
    cfg.route(
        "/announcements/{announcement_id}",
        web::delete().to(delete_announcement_controller),
    );
}
