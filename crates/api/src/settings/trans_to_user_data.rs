use actix_web::HttpResponse;
use wf_review_api_structs::dtos::UserPreferencesDTO;
use wf_review_api_structs::trans_to_user_data::*;
use wf_review_domain::DefaultSettings;

/// The defaults as the preferences a fresh install starts with
pub fn trans_to_user_data_controller() -> HttpResponse {
    HttpResponse::Ok().json(APIResponse {
        data: UserPreferencesDTO::new(DefaultSettings::default().to_user_preferences()),
    })
}
