use aqproxy_core::{AqError, BatchReport, Record, merge_records};

use crate::AqProxy;

impl AqProxy {
    /// Fetch every hourly instant of the configured window and merge the results.
    ///
    /// Behavior:
    /// - Checks the credential, then resolves the reference and builds the
    ///   window. Either failure returns before any fetch is issued.
    /// - Issues one fetch per instant, all concurrently, and waits for every
    ///   one to settle. There is no retry, cap or deadline beyond the source's
    ///   own transport timeout.
    /// - A failed fetch contributes no records and is logged at `warn`; it
    ///   never fails the batch.
    /// - Records are concatenated and stably sorted by their own timestamp.
    ///   `successful_requests` counts instants that yielded at least one record.
    ///
    /// # Errors
    /// Returns `AqError::Config` only, and only before fan-out.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "aqproxy::router::batch",
            skip(self),
            fields(source = self.source.name()),
        )
    )]
    pub async fn batch(&self) -> Result<BatchReport, AqError> {
        self.cfg.credential()?;
        let window = self.window()?;
        let base = self.query_at(window.reference())?;

        let tasks = window.instants().iter().map(|&at| {
            let source = &self.source;
            let query = base.at(at);
            async move {
                match source.fetch(&query).await {
                    Ok(records) => records,
                    Err(e) => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(
                            monitor_date = %at,
                            error = %e,
                            "fetch failed; instant contributes no records"
                        );
                        #[cfg(not(feature = "tracing"))]
                        let _ = e;
                        Vec::new()
                    }
                }
            }
        });

        let joined: Vec<Vec<Record>> = futures::future::join_all(tasks).await;
        let successful_requests = joined.iter().filter(|batch| !batch.is_empty()).count();
        let records = merge_records(joined, self.cfg.timezone);

        #[cfg(feature = "tracing")]
        tracing::info!(
            requested = window.len(),
            successful_requests,
            records = records.len(),
            "batch merged"
        );

        Ok(BatchReport {
            time_range: window.time_range(),
            requested: window.len(),
            successful_requests,
            records,
        })
    }
}
