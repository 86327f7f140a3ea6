use axum::response::IntoResponse;
use jamboagri_contact::FORM_ANCHOR;
use jamboagri_content::CatalogEntry;
use url::form_urlencoded;

use crate::template::{Template, filters};

pub struct CropView {
    pub entry: CatalogEntry,
    /// Contact page link with the order message prefilled.
    pub order_href: String,
}

impl From<CatalogEntry> for CropView {
    fn from(entry: CatalogEntry) -> Self {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("message", &entry.order_message())
            .finish();

        Self {
            order_href: format!("/contact?{query}#{FORM_ANCHOR}"),
            entry,
        }
    }
}

#[derive(askama::Template)]
#[template(path = "pages/crops.html")]
pub struct CropsTemplate {
    pub current_path: String,
    pub crops: Vec<CropView>,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(CropsTemplate {
        current_path: "crops".to_owned(),
        crops: jamboagri_content::catalog()
            .into_iter()
            .map(CropView::from)
            .collect(),
    })
}
