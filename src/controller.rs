use crate::chain;
use crate::errors::AppError;
use crate::machine::{self, Outcome, PressEffect};
use crate::models::{DateFieldRequest, DateSelection, DisplayState, FieldName};
use crate::state::AppState;
use crate::view::render;
use tracing::{info, warn};

pub async fn snapshot(state: &AppState) -> DisplayState {
    let view = state.view.lock().await;
    render(&view)
}

/// Apply one dropdown change. An empty value unsets the field.
pub async fn edit_field(
    state: &AppState,
    request: DateFieldRequest,
) -> Result<DisplayState, AppError> {
    let value = request.value.trim();
    let mut view = state.view.lock().await;

    match request.field {
        FieldName::Year => {
            let year = parse_field::<i32>(value, "year")?;
            view.selector.set_year(year)?;
        }
        FieldName::Month => {
            let month = parse_field::<u32>(value, "month")?;
            view.selector.set_month(month)?;
        }
        FieldName::Day => {
            let day = parse_field::<u32>(value, "day")?;
            view.selector.set_day(day)?;
        }
    }

    if view.selector.is_complete() {
        view.error = None;
    }
    let next = machine::date_edited(view.button(), !view.result.is_empty());
    view.set_button(next);

    Ok(render(&view))
}

/// The trigger button (or the Enter key).
pub async fn press(state: &AppState) -> Result<DisplayState, AppError> {
    let selection = {
        let mut view = state.view.lock().await;
        let selection = view.selector.current_selection();
        let (next, effect) = machine::press(view.button(), selection.is_ok());

        match (effect, selection) {
            (PressEffect::Rejected, _) => {
                return Err(AppError::conflict("a lookup is already in progress"));
            }
            (PressEffect::ResetAll, _) => {
                info!("clearing result and date fields");
                view.result.clear();
                view.selector.reset();
                view.error = None;
                view.set_button(next);
                return Ok(render(&view));
            }
            (PressEffect::BeginLookup, Ok(selection)) => {
                info!(date = %selection.iso_date(), "starting lookup chain");
                view.error = None;
                view.set_button(next);
                selection
            }
            (_, Err(err)) => {
                info!(missing = ?err.missing, "date fields incomplete");
                view.error = Some(err.to_string());
                view.set_button(next);
                return Ok(render(&view));
            }
            (PressEffect::ShowFieldError, Ok(_)) => return Ok(render(&view)),
        }
    };

    // Detached from the request: the chain settles even if the caller goes away.
    let chain_state = state.clone();
    let settling = tokio::spawn(async move { run_and_settle(&chain_state, selection).await });
    settling.await.map_err(AppError::internal)
}

async fn run_and_settle(state: &AppState, selection: DateSelection) -> DisplayState {
    // Lock released: the two calls run without blocking other readers.
    let outcome = chain::run(&state.proxy, &selection).await;

    let mut view = state.view.lock().await;
    match outcome {
        Ok(image) => {
            info!(url = %image.url, "lookup chain succeeded");
            view.result.render(image);
            let next = machine::settle(view.button(), Outcome::Succeeded);
            view.set_button(next);
        }
        Err(err) => {
            warn!(error = %err, "lookup chain failed");
            view.result.clear();
            let next = machine::settle(view.button(), Outcome::Failed);
            view.set_button(next);
        }
    }

    render(&view)
}

fn parse_field<T: std::str::FromStr>(value: &str, name: &str) -> Result<Option<T>, AppError> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| AppError::bad_request(format!("{name} must be a number, got {value:?}")))
}
