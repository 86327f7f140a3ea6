use axum::{
    extract::{Form, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
};
use jamboagri_contact::{
    ContactForm, ContactInquiry, FORM_ANCHOR, Field, FocusTarget, Notice, PrefillPlan, SCROLL_DELAY,
    SubmitOutcome,
};
use url::form_urlencoded;

use crate::{
    routes::AppState,
    template::{Template, filters},
};

/// Query flag set by the redirect that follows a delivered inquiry.
const SENT_FLAG: &str = "sent";

/// Order of the inputs on the page.
const LAYOUT: [Field; 5] = [
    Field::Name,
    Field::Phone,
    Field::Email,
    Field::Location,
    Field::Message,
];

pub struct FieldView {
    pub name: String,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input_type: &'static str,
    pub autocomplete: &'static str,
    pub multiline: bool,
    pub value: String,
    pub error: Option<String>,
    /// Rendered as `data-rule-*` so the page can recheck edits in place.
    pub min_length: Option<usize>,
    pub pattern: Option<&'static str>,
    pub rule_message: &'static str,
}

impl FieldView {
    fn new(form: &ContactForm, field: Field) -> Self {
        let (label, placeholder, input_type, autocomplete) = match field {
            Field::Name => ("Full Name", "John Doe", "text", "name"),
            Field::Phone => ("Phone Number", "0700 000 000", "tel", "tel"),
            Field::Email => ("Email Address", "john@example.com", "email", "email"),
            Field::Location => ("Location/County", "e.g. Kirinyaga", "text", "address-level2"),
            Field::Message => (
                "How can we help?",
                "I am interested in ordering tissue culture bananas...",
                "text",
                "off",
            ),
        };

        Self {
            name: field.to_string(),
            label,
            placeholder,
            input_type,
            autocomplete,
            multiline: field == Field::Message,
            value: form.inquiry().get(field).to_owned(),
            error: form.error(field).map(str::to_owned),
            min_length: field.min_length(),
            pattern: field.pattern(),
            rule_message: field.rule_message(),
        }
    }
}

#[derive(askama::Template)]
#[template(path = "pages/contact.html")]
pub struct ContactTemplate {
    pub current_path: String,
    pub fields: Vec<FieldView>,
    pub notices: Vec<Notice>,
    pub submit_enabled: bool,
    /// Errors follow every edit once a submit attempt has shown them.
    pub validated: bool,
    pub state: String,
    /// Empty when the page should not scroll to the form.
    pub focus: String,
    pub strip_query: bool,
    pub scroll_delay_ms: u128,
}

impl ContactTemplate {
    fn new(form: &ContactForm, focus: Option<FocusTarget>, strip_query: bool) -> Self {
        Self {
            current_path: "contact".to_owned(),
            fields: LAYOUT
                .iter()
                .map(|field| FieldView::new(form, *field))
                .collect(),
            notices: form.notices().to_vec(),
            submit_enabled: form.is_submit_enabled(),
            validated: form.shows_errors(),
            state: form.state().to_string(),
            focus: focus.map(|f| f.to_string()).unwrap_or_default(),
            strip_query,
            scroll_delay_ms: SCROLL_DELAY.as_millis(),
        }
    }
}

fn new_form(app: &AppState) -> ContactForm {
    let mut form = ContactForm::new(app.config.email.submission(), app.provider.clone());
    form.initialize();
    form
}

fn is_sent_redirect(uri: &Uri) -> bool {
    uri.query().is_some_and(|query| {
        form_urlencoded::parse(query.as_bytes()).any(|(key, _)| key == SENT_FLAG)
    })
}

pub async fn page(template: Template, State(app): State<AppState>, uri: Uri) -> impl IntoResponse {
    let mut form = new_form(&app);

    let plan = PrefillPlan::from_url(&uri.to_string());
    form.apply_prefill(&plan);

    let mut view = ContactTemplate::new(&form, plan.focus, plan.normalized_url.is_some());
    if is_sent_redirect(&uri) {
        view.notices.push(Notice::Success);
        view.focus = FocusTarget::FirstField.to_string();
    }

    template.render(view)
}

pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<ContactInquiry>,
) -> Response {
    let mut form = new_form(&app);
    form.fill(input);

    let outcome = form.submit().await;
    tracing::info!(outcome = ?outcome, "contact form submitted");

    // Redirect so a reload cannot post the same inquiry twice.
    if outcome == SubmitOutcome::Sent {
        return Redirect::to(&format!("/contact?{SENT_FLAG}=1#{FORM_ANCHOR}")).into_response();
    }

    let focus = match outcome {
        SubmitOutcome::Invalid => LAYOUT
            .iter()
            .find(|field| form.error(**field).is_some())
            .map(|field| match field {
                Field::Message => FocusTarget::Message,
                _ => FocusTarget::FirstField,
            }),
        _ => Some(FocusTarget::FirstField),
    };

    let status = match outcome {
        SubmitOutcome::Invalid => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::OK,
    };

    form.settle();

    (status, template.render(ContactTemplate::new(&form, focus, false))).into_response()
}
