use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};

pub(crate) mod filters {
    use time::OffsetDateTime;

    /// Appends the build version so browsers refetch assets after a deploy.
    #[askama::filter_fn]
    pub fn asset(value: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let version = askama::get_value::<String>(values, "asset_version")
            .map(String::as_str)
            .unwrap_or("dev");

        Ok(format!("{value}?v={version}"))
    }

    #[askama::filter_fn]
    pub fn copyright(value: &str, _values: &dyn askama::Values) -> askama::Result<String> {
        let year = OffsetDateTime::now_utc().year();

        let name = value.trim_end_matches('.');

        Ok(format!("© {year} {name}. All rights reserved."))
    }
}

pub struct Template {
    asset_version: String,
}

impl Template {
    pub fn new(asset_version: impl Into<String>) -> Self {
        Self {
            asset_version: asset_version.into(),
        }
    }

    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert("asset_version", Box::new(self.asset_version.to_owned()));

        template.render_with_values(&values)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        match self.render_with_values(template) {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(err = %err, "failed to render template");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template::new(state.asset_version.to_owned()))
    }
}
