use crate::date::local_today;
use crate::errors::AppError;
use crate::models::{
    DateForm, RatingsResponse, SaveForm, SaveRatingRequest, SavedRatingResponse, TabForm,
    TodayResponse,
};
use crate::state::AppState;
use crate::stats::{sort_and_filter, summarize};
use crate::view::{CsvExport, export_csv};
use crate::widget::SaveOutcome;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let widget = state.widget.lock().await;
    Html(state.page.render(&*widget))
}

pub async fn change_date(State(state): State<AppState>, Form(form): Form<DateForm>) -> Redirect {
    state.widget.lock().await.on_date_change(&form.date);
    Redirect::to("/")
}

pub async fn save(
    State(state): State<AppState>,
    Form(form): Form<SaveForm>,
) -> Result<Redirect, AppError> {
    state.widget.lock().await.on_save(&form.date, &form.rating)?;
    Ok(Redirect::to("/"))
}

pub async fn switch_tab(State(state): State<AppState>, Form(form): Form<TabForm>) -> Redirect {
    state.widget.lock().await.on_tab(&form.tab);
    Redirect::to("/")
}

pub async fn export(State(state): State<AppState>) -> Response {
    match state.widget.lock().await.on_export() {
        Some(export) => csv_response(export),
        None => Redirect::to("/").into_response(),
    }
}

pub async fn get_today() -> Json<TodayResponse> {
    Json(TodayResponse {
        date: local_today(),
    })
}

pub async fn get_ratings(State(state): State<AppState>) -> Json<RatingsResponse> {
    let widget = state.widget.lock().await;
    let entries = sort_and_filter(&widget.store().load());
    let summary = summarize(&entries);
    Json(RatingsResponse { entries, summary })
}

pub async fn save_rating(
    State(state): State<AppState>,
    Json(payload): Json<SaveRatingRequest>,
) -> Result<Json<SavedRatingResponse>, AppError> {
    let outcome = state
        .widget
        .lock()
        .await
        .on_save(&payload.date, &payload.rating.as_raw())?;

    match outcome {
        SaveOutcome::Saved { date, rating } => Ok(Json(SavedRatingResponse { date, rating })),
        rejected => Err(AppError::bad_request(rejected.message())),
    }
}

pub async fn get_export(State(state): State<AppState>) -> Result<Response, AppError> {
    let widget = state.widget.lock().await;
    let export = export_csv(widget.store())
        .ok_or_else(|| AppError::not_found("Nothing to export yet. Add a rating first."))?;
    Ok(csv_response(export))
}

fn csv_response(export: CsvExport) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export.filename),
            ),
        ],
        export.content,
    )
        .into_response()
}
