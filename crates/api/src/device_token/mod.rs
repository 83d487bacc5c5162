mod register_device_token;
mod remove_device_token;

use actix_web::web;
use register_device_token::register_device_token_controller;
use remove_device_token::remove_device_token_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/device_tokens",
        web::post().to(register_device_token_controller),
    );
    cfg.route(
        "/device_tokens",
        web::delete().to(remove_device_token_controller),
    );
}
