pub mod health;
pub mod swagger;
pub mod users;

use actix_web::web;

/// Rotas de `/user` + health
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/user")
                .app_data(users::json_config())
                .route("", web::post().to(users::create_user))
                .route("", web::get().to(users::get_all_users))
                .route("/{userId}", web::get().to(users::get_user))
                .route("/{userId}", web::put().to(users::update_user))
                .route("/{userId}", web::delete().to(users::delete_user)),
        );
}
