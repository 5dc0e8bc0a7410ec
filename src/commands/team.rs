//! Team command implementation

use std::io::Write;

use crate::{
    format::{validate_datum, Record, RecordKind},
    keys::resolve_team_key,
    render::Palette,
    tba::TbaApi,
    Result,
};

use super::emit;

/// Parameters for the team command
#[derive(Debug, Clone)]
pub struct TeamParams {
    pub number: i64,
    pub datum: Option<String>,
    pub as_json: bool,
}

/// Handle the team command
pub async fn handle_team<A: TbaApi, W: Write>(
    api: &A,
    params: TeamParams,
    palette: &Palette,
    out: &mut W,
) -> Result<()> {
    let key = resolve_team_key(params.number)?;
    if let Some(datum) = params.datum.as_deref() {
        validate_datum(RecordKind::Team, datum)?;
    }

    tracing::debug!(%key, "fetching team");
    let team = api.fetch_team(&key).await?;

    emit(
        &Record::Team(team),
        params.datum.as_deref(),
        params.as_json,
        palette,
        out,
    )
}
