use axum::response::IntoResponse;

use crate::template::{Template, filters};

#[derive(askama::Template)]
#[template(path = "pages/index.html")]
pub struct IndexTemplate {
    pub current_path: String,
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self {
            current_path: "home".to_owned(),
        }
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate::default())
}
