use placemd_places::{PlacesClient, FIELD_CATALOG};
use placemd_report::{render_report, ReportOptions};

/// Searches for `place_name`, fetches the first hit with every catalog field,
/// and renders it.
///
/// Returns `Ok(None)` when the search matched nothing.
pub(crate) async fn lookup_and_render(
    client: &PlacesClient,
    place_name: &str,
    options: &ReportOptions,
) -> anyhow::Result<Option<String>> {
    let Some(hit) = client.find_place(place_name).await? else {
        return Ok(None);
    };

    let display_name = hit
        .display_name
        .as_ref()
        .and_then(|t| t.non_empty())
        .unwrap_or_default();
    tracing::info!(place_id = %hit.id, display_name, "place found");

    let place = client.get_place(&hit.id, FIELD_CATALOG).await?;
    tracing::debug!(?place, "place details fetched");

    Ok(Some(render_report(&place, options)))
}

#[cfg(test)]
#[path = "lookup_test.rs"]
mod tests;
