use actix_web::HttpResponse;
use wf_review_api_structs::dtos::DefaultSettingsDTO;
use wf_review_api_structs::get_default_data::*;
use wf_review_domain::DefaultSettings;

pub fn get_default_data_controller() -> HttpResponse {
    HttpResponse::Ok().json(APIResponse {
        data: DefaultSettingsDTO::new(DefaultSettings::default()),
    })
}
