use aqproxy_core::{AqError, Lookup, MonitorInstant, Record, RecordReport, SnapshotReport};

use crate::AqProxy;

fn required<'a>(label: &str, value: &'a str) -> Result<&'a str, AqError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AqError::InvalidArg(format!("{label} must not be empty")));
    }
    Ok(value)
}

impl AqProxy {
    /// Exactly one fetch for the configured site at `at` (or the configured reference).
    ///
    /// Unlike [`AqProxy::batch`], every failure is returned to the caller.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "aqproxy::router::fetch_single", skip(self))
    )]
    async fn fetch_single(&self, at: Option<&str>) -> Result<(MonitorInstant, Vec<Record>), AqError> {
        self.cfg.credential()?;
        let instant = self.instant_for(at)?;
        let query = self.query_at(instant)?;
        let records = self.source.fetch(&query).await?;
        Ok((instant, records))
    }

    /// Unfiltered records for one instant.
    ///
    /// # Errors
    /// Configuration, argument, transport, upstream and body-shape errors are
    /// all propagated.
    pub async fn snapshot(&self, at: Option<&str>) -> Result<SnapshotReport, AqError> {
        let (monitor_date, records) = self.fetch_single(at).await?;
        Ok(SnapshotReport {
            monitor_date,
            records,
        })
    }

    /// First record at `at` whose item name (local or English) equals `item`.
    ///
    /// Comparison ignores surrounding whitespace and ASCII case.
    ///
    /// # Errors
    /// `InvalidArg` for a blank `item`; otherwise as [`AqProxy::snapshot`].
    pub async fn pollutant(
        &self,
        item: &str,
        at: Option<&str>,
    ) -> Result<Lookup<RecordReport>, AqError> {
        self.cfg.credential()?;
        let item = required("pollutant item", item)?;
        let (monitor_date, records) = self.fetch_single(at).await?;
        Ok(records
            .into_iter()
            .find(|r| r.matches_item(item))
            .map_or(Lookup::NotFound, |record| {
                Lookup::Found(RecordReport {
                    monitor_date,
                    record,
                })
            }))
    }

    /// All records at `at` whose area equals `area`.
    ///
    /// # Errors
    /// `InvalidArg` for a blank `area`; otherwise as [`AqProxy::snapshot`].
    pub async fn area(
        &self,
        area: &str,
        at: Option<&str>,
    ) -> Result<Lookup<SnapshotReport>, AqError> {
        self.cfg.credential()?;
        let area = required("area", area)?;
        let (monitor_date, records) = self.fetch_single(at).await?;
        let records: Vec<Record> = records.into_iter().filter(|r| r.matches_area(area)).collect();
        if records.is_empty() {
            return Ok(Lookup::NotFound);
        }
        Ok(Lookup::Found(SnapshotReport {
            monitor_date,
            records,
        }))
    }
}
