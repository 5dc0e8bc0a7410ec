//! Event command implementation

use std::io::Write;

use crate::{
    format::{validate_datum, Record, RecordKind},
    keys::resolve_event_key,
    render::Palette,
    tba::TbaApi,
    Result, Year,
};

use super::emit;

/// Parameters for the event command
#[derive(Debug, Clone)]
pub struct EventParams {
    pub code: String,
    /// Falls back to the current year when the code has none.
    pub year: Option<Year>,
    pub datum: Option<String>,
    pub as_json: bool,
}

/// Handle the event command
pub async fn handle_event<A: TbaApi, W: Write>(
    api: &A,
    params: EventParams,
    palette: &Palette,
    out: &mut W,
) -> Result<()> {
    let key = resolve_event_key(&params.code, params.year)?;
    if let Some(datum) = params.datum.as_deref() {
        validate_datum(RecordKind::Event, datum)?;
    }

    tracing::debug!(%key, "fetching event");
    let event = api.fetch_event(&key).await?;

    emit(
        &Record::Event(event),
        params.datum.as_deref(),
        params.as_json,
        palette,
        out,
    )
}
