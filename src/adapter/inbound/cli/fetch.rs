//! Handler for the `fetch` command.

use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::http::HttpSource;
use crate::domain::{Severity, UpdateDetail};
use crate::error::{Error, Result};
use crate::infrastructure::config::settings::Settings;
use crate::port::UpdateSource;

/// Run one candidate cascade and print the record.
///
/// Nothing is persisted and no notification is sent.
pub async fn execute(settings: &Settings) -> Result<()> {
    let source = HttpSource::new(&settings.source)?;
    let record = source.fetch().await.ok_or(Error::NoRecord)?;

    output::section("Current update");
    output::field("Marker", &record.marker);
    output::field("Title", &record.display_title);
    match &record.detail {
        UpdateDetail::Status { indicator } => {
            let severity = Severity::from_indicator(Some(indicator));
            output::field("Indicator", format!("{} {indicator}", severity.symbol()));
        }
        UpdateDetail::Version { version } => output::field("Version", version),
        UpdateDetail::Entry { link, published } => {
            if let Some(link) = link {
                output::field("Link", link);
            }
            if let Some(published) = published {
                output::field("Published", published.to_rfc3339());
            }
        }
    }
    output::field("Source", &record.source_url);

    Ok(())
}
