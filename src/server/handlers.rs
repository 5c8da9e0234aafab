//! Route handlers.
//!
//! Each handler extracts typed input, calls the contact service once, then
//! renders a page or redirects to the list with a flash message.

use crate::error::ServiceError;
use crate::server::error::{AppError, NOT_FOUND_PAGE};
use crate::server::forms::{prefill, CreateContactForm, DeleteContactForm, UpdateContactForm};
use crate::server::AppState;
use crate::session::{FlashStore, SESSION_COOKIE};
use crate::validation::{ContactInput, ValidationErrors};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use minijinja::context;

pub const CREATED_MESSAGE: &str = "Data Berhasil ditambahkan";
pub const UPDATED_MESSAGE: &str = "Data Berhasil diubah";
pub const DELETED_MESSAGE: &str = "Data Berhasil dihapus";

const LIST_PATH: &str = "/contact";

/// People listed on the home page, as `(name, email)`.
const HOME_PEOPLE: &[(&str, &str)] = &[("Khawaril", "khawarilputra@gmial.com")];

type PageResult = Result<Html<String>, AppError>;

pub async fn home(State(state): State<AppState>) -> PageResult {
    let people: Vec<_> = HOME_PEOPLE
        .iter()
        .map(|&(name, email)| context! { name => name, email => email })
        .collect();

    let html = state.views.render(
        "index.html",
        context! { title => "Home", people => people },
    )?;
    Ok(Html(html))
}

pub async fn about(State(state): State<AppState>) -> PageResult {
    let html = state.views.render("about.html", context! { title => "About" })?;
    Ok(Html(html))
}

/// `GET /contact`: every contact plus any pending flash messages.
pub async fn list_contacts(State(state): State<AppState>, jar: CookieJar) -> PageResult {
    let contacts = state.contacts.list_contacts().await?;
    let messages = jar
        .get(SESSION_COOKIE)
        .map(|cookie| state.flash.take(cookie.value()))
        .unwrap_or_default();

    let html = state.views.render(
        "contact.html",
        context! { title => "Contact", contacts => contacts, messages => messages },
    )?;
    Ok(Html(html))
}

/// `GET /contact/{name}`. An unknown name renders the page without data.
pub async fn show_contact(State(state): State<AppState>, Path(name): Path<String>) -> PageResult {
    let contact = state.contacts.find_contact(&name).await?;
    let html = state.views.render(
        "detail.html",
        context! { title => "Contact detail", contact => contact },
    )?;
    Ok(Html(html))
}

pub async fn add_contact_form(State(state): State<AppState>) -> PageResult {
    render_add_form(&state, &ContactInput::default(), &ValidationErrors::new()).map(Html)
}

/// `POST /contact`.
pub async fn create_contact(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CreateContactForm>,
) -> Result<Response, AppError> {
    let input = form.into_input();

    match state.contacts.create_contact(&input).await {
        Ok(_) => Ok(redirect_with_flash(&state.flash, jar, CREATED_MESSAGE)),
        Err(ServiceError::Invalid(errors)) => {
            let html = render_add_form(&state, &input, &errors)?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// `GET /contact/edit/{name}`. An unknown name renders the page without a form.
pub async fn edit_contact_form(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> PageResult {
    let contact = state.contacts.find_contact(&name).await?;

    let html = match contact {
        Some(contact) => render_edit_form(
            &state,
            contact.id.as_str(),
            &contact.name,
            &prefill(&contact),
            &ValidationErrors::new(),
        )?,
        None => state.views.render(
            "edit_contact.html",
            context! { title => "Edit contact", errors => ValidationErrors::new() },
        )?,
    };
    Ok(Html(html))
}

/// `PUT /contact`.
pub async fn update_contact(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<UpdateContactForm>,
) -> Result<Response, AppError> {
    let input = form.input();

    match state
        .contacts
        .update_contact(&form.id, &form.old_name, &input)
        .await
    {
        Ok(()) => Ok(redirect_with_flash(&state.flash, jar, UPDATED_MESSAGE)),
        Err(ServiceError::Invalid(errors)) => {
            let html = render_edit_form(&state, &form.id, &form.old_name, &input, &errors)?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// `DELETE /contact`. An unknown name is a 404.
pub async fn delete_contact(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<DeleteContactForm>,
) -> Result<Response, AppError> {
    state.contacts.delete_contact(&form.name).await?;
    Ok(redirect_with_flash(&state.flash, jar, DELETED_MESSAGE))
}

/// Fallback for unmatched paths.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE))
}

fn render_add_form(
    state: &AppState,
    values: &ContactInput,
    errors: &ValidationErrors,
) -> Result<String, AppError> {
    Ok(state.views.render(
        "add_contact.html",
        context! { title => "Add contact", values => values, errors => errors },
    )?)
}

fn render_edit_form(
    state: &AppState,
    id: &str,
    old_name: &str,
    values: &ContactInput,
    errors: &ValidationErrors,
) -> Result<String, AppError> {
    Ok(state.views.render(
        "edit_contact.html",
        context! {
            title => "Edit contact",
            id => id,
            old_name => old_name,
            values => values,
            errors => errors,
        },
    )?)
}

/// Queue `message` for the caller's session, issuing a session cookie if it
/// has none, and send it back to the list.
fn redirect_with_flash(flash: &FlashStore, jar: CookieJar, message: &str) -> Response {
    let (jar, session) = ensure_session(jar);
    flash.push(&session, message);
    (jar, Redirect::to(LIST_PATH)).into_response()
}

fn ensure_session(jar: CookieJar) -> (CookieJar, String) {
    if let Some(session) = jar.get(SESSION_COOKIE).map(|c| c.value().to_string()) {
        return (jar, session);
    }

    let session = FlashStore::new_session_id();
    let cookie = Cookie::build((SESSION_COOKIE, session.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    (jar.add(cookie), session)
}
