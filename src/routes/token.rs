use actix_web::web;

use crate::handlers::token::get_token_details_handler;

pub fn configure_token_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/token-details", web::get().to(get_token_details_handler));
}
