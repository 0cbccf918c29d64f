use crate::{api::salary, config::Config};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    cfg.service(
        web::scope(&config.api_prefix).service(
            web::scope("/salary")
                .service(web::resource("/add").route(web::post().to(salary::add_salary)))
                .service(web::resource("/get").route(web::get().to(salary::list_salaries)))
                .service(web::resource("/summary").route(web::get().to(salary::summary)))
                .service(
                    web::resource("/delete/{record_key}")
                        .route(web::delete().to(salary::delete_salary)),
                ),
        ),
    );
}
