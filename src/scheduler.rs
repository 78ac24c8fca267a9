use std::sync::Arc;

use anyhow::{Error, Result, anyhow};
use rand::{SeedableRng, rngs::StdRng};
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

use crate::dispatch::{BotContext, broadcast_quote_of_the_day, run_roster_scan};

/// Cron triggers for the two daily jobs. Each trigger is fire-and-forget:
/// runs share no mutable state, overlapping runs are not prevented, and a
/// failed run is logged without ever reaching the host process.
pub struct BotScheduler {
    scheduler: JobScheduler,
}

impl BotScheduler {
    pub async fn start(context: Arc<BotContext>) -> Result<Self, Error> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| anyhow!("Failed to create scheduler: {e}"))?;

        Self::register_quote_of_the_day(&scheduler, Arc::clone(&context)).await?;
        Self::register_roster_scan(&scheduler, context).await?;

        scheduler
            .start()
            .await
            .map_err(|e| anyhow!("Failed to start scheduler: {e}"))?;

        info!("Cron scheduler started");

        Ok(Self { scheduler })
    }

    pub async fn shutdown(&mut self) -> Result<(), Error> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| anyhow!("Failed to shutdown scheduler: {e}"))?;

        info!("Cron scheduler shut down");
        Ok(())
    }

    async fn register_quote_of_the_day(
        scheduler: &JobScheduler,
        context: Arc<BotContext>,
    ) -> Result<(), Error> {
        let schedule = context.config.qod_cron.clone();

        let job = Job::new_async(schedule.as_str(), move |_uuid, _lock| {
            let context = Arc::clone(&context);
            Box::pin(async move {
                info!("Quote of the day trigger fired");

                let mut rng = StdRng::from_os_rng();

                match broadcast_quote_of_the_day(
                    &context.slack,
                    &context.quotes,
                    &context.options,
                    &mut rng,
                )
                .await
                {
                    Ok(receipt) => info!(ts = %receipt.ts, "Quote of the day run finished"),
                    Err(e) => error!(error = %e, "Quote of the day run failed"),
                }
            })
        })
        .map_err(|e| anyhow!("Failed to create quote of the day schedule: {e}"))?;

        scheduler
            .add(job)
            .await
            .map_err(|e| anyhow!("Failed to add quote of the day schedule: {e}"))?;

        info!(cron = %schedule, "Registered: quote of the day");
        Ok(())
    }

    async fn register_roster_scan(
        scheduler: &JobScheduler,
        context: Arc<BotContext>,
    ) -> Result<(), Error> {
        let schedule = context.config.roster_cron.clone();

        let job = Job::new_async(schedule.as_str(), move |_uuid, _lock| {
            let context = Arc::clone(&context);
            Box::pin(async move {
                info!("Roster scan trigger fired");

                let mut rng = StdRng::from_os_rng();

                match run_roster_scan(
                    &context.sheets,
                    &context.mailer,
                    &context.slack,
                    &context.quotes,
                    &context.templates,
                    &context.options,
                    &mut rng,
                )
                .await
                {
                    Ok(report) => info!(
                        sent = report.sent(),
                        failed = report.failed(),
                        "Roster scan finished"
                    ),
                    Err(e) => error!(error = %e, "Roster scan aborted"),
                }
            })
        })
        .map_err(|e| anyhow!("Failed to create roster scan schedule: {e}"))?;

        scheduler
            .add(job)
            .await
            .map_err(|e| anyhow!("Failed to add roster scan schedule: {e}"))?;

        info!(cron = %schedule, "Registered: roster scan");
        Ok(())
    }
}
