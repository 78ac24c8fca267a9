use std::time::Duration;

use anyhow::{Error, Result};
use chrono::{Datelike, Local};
use rand::Rng;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::{
    clients::{
        mail::MailClient, quotes::QuoteClient, sheets::SheetsClient, slack::SlackClient,
        template::TemplateStore,
    },
    config::Config,
    models::{
        content::{AnniversaryContent, BirthdayContent},
        error::{DataSourceError, QuoteFetchError, SendFailure},
        mail::MailMessage,
        quote::Quote,
        report::{BatchReport, Channel, SendOutcome},
        roster::Roster,
        slack::ChatReceipt,
    },
    utils::{day_month, match_indices, render_text_block, tenure_years},
};

/// Fallback quote line used when the quote provider is unavailable, so a
/// provider outage never costs anyone their birthday email.
const DEFAULT_QUOTE: &str = "Wishing you a joyful day and a wonderful year ahead.";

const QOD_CATEGORIES: [&str; 12] = [
    "inspirational",
    "intelligence",
    "knowledge",
    "life",
    "success",
    "happiness",
    "hope",
    "freedom",
    "failure",
    "dreams",
    "health",
    "imagination",
];

#[allow(async_fn_in_trait)]
pub trait RosterSource {
    async fn fetch_roster(&self) -> Result<Roster, DataSourceError>;
}

#[allow(async_fn_in_trait)]
pub trait Mailer {
    async fn send(&self, message: &MailMessage) -> Result<(), SendFailure>;
}

#[allow(async_fn_in_trait)]
pub trait ChatSender {
    async fn post(&self, channel: &str, text: &str) -> Result<ChatReceipt, SendFailure>;
}

#[allow(async_fn_in_trait)]
pub trait QuoteSource {
    async fn by_category(&self, category: &str) -> Result<Quote, QuoteFetchError>;
    async fn quote_of_the_day(&self) -> Result<Quote, QuoteFetchError>;
}

#[derive(Debug, Clone)]
pub struct DispatchOptions {
    pub general_channel_id: String,
    pub birthday_send_delay: Duration,
}

/// All transport clients for one process, constructed once at startup and
/// passed in explicitly wherever they are needed.
pub struct BotContext {
    pub config: Config,
    pub sheets: SheetsClient,
    pub mailer: MailClient,
    pub slack: SlackClient,
    pub quotes: QuoteClient,
    pub templates: TemplateStore,
    pub options: DispatchOptions,
}

impl BotContext {
    pub fn new(config: Config) -> Result<Self, Error> {
        let sheets = SheetsClient::new(&config)?;
        let mailer = MailClient::new(&config)?;
        let slack = SlackClient::new(&config)?;
        let quotes = QuoteClient::new(&config)?;
        let templates = TemplateStore::new(&config);
        let options = config.dispatch_options();

        Ok(Self {
            config,
            sheets,
            mailer,
            slack,
            quotes,
            templates,
            options,
        })
    }
}

/// One full roster scan: fetch, match against today, dispatch wishes.
///
/// A `DataSourceError` aborts the batch before any send. Everything after
/// that point is failure-isolated per recipient and per channel; the
/// returned report always covers the whole batch.
pub async fn run_roster_scan<S, M, C, Q, R>(
    roster_source: &S,
    mailer: &M,
    chat: &C,
    quotes: &Q,
    templates: &TemplateStore,
    options: &DispatchOptions,
    rng: &mut R,
) -> Result<BatchReport, DataSourceError>
where
    S: RosterSource,
    M: Mailer,
    C: ChatSender,
    Q: QuoteSource,
    R: Rng,
{
    let roster = roster_source.fetch_roster().await?;

    let now = Local::now();
    let today = day_month(now.date_naive());

    let birthday_rows = match_indices(&roster.date_of_birth, &today);
    let anniversary_rows = match_indices(&roster.date_of_joining, &today);

    info!(
        today = %today,
        birthdays = birthday_rows.len(),
        anniversaries = anniversary_rows.len(),
        "Roster matched against today"
    );

    let mut report = BatchReport::default();

    send_birthday_wishes(
        &roster,
        &birthday_rows,
        mailer,
        chat,
        quotes,
        templates,
        options,
        rng,
        &mut report,
    )
    .await;

    send_anniversary_wishes(
        &roster,
        &anniversary_rows,
        mailer,
        chat,
        templates,
        options,
        now.year(),
        rng,
        &mut report,
    )
    .await;

    Ok(report)
}

/// Per matched row: resolve content, send the email, post the Slack wish.
/// A failure on either channel is recorded and the loop moves on. A short
/// pause between recipients keeps the transports from being burst.
#[allow(clippy::too_many_arguments)]
pub async fn send_birthday_wishes<M, C, Q, R>(
    roster: &Roster,
    rows: &[usize],
    mailer: &M,
    chat: &C,
    quotes: &Q,
    templates: &TemplateStore,
    options: &DispatchOptions,
    rng: &mut R,
    report: &mut BatchReport,
) where
    M: Mailer,
    C: ChatSender,
    Q: QuoteSource,
    R: Rng,
{
    for &row in rows {
        let (Some(name), Some(email)) = (roster.full_name.get(row), roster.email.get(row)) else {
            warn!(row, "Roster row is missing name or email, skipping");
            continue;
        };

        let content = resolve_birthday_content(quotes, rng).await;

        match templates.birthday(content.template_no, name, &content.rendered_quote).await {
            Ok(body) => {
                let message =
                    MailMessage::plain(email, format!("Happy Birthday! {name}"), body);

                let result = mailer.send(&message).await;

                if let Err(e) = &result {
                    warn!(row, error = %e, "Birthday email failed");
                }

                report.push(SendOutcome {
                    row: Some(row),
                    recipient: name.clone(),
                    channel: Channel::Mail,
                    result,
                });
            }
            Err(e) => {
                warn!(row, error = %e, "Birthday template failed");

                report.push(SendOutcome {
                    row: Some(row),
                    recipient: name.clone(),
                    channel: Channel::Mail,
                    result: Err(e),
                });
            }
        }

        let result = chat
            .post(&options.general_channel_id, &birthday_chat_text(name, &content))
            .await
            .map(|_| ());

        if let Err(e) = &result {
            warn!(row, error = %e, "Birthday Slack wish failed");
        }

        report.push(SendOutcome {
            row: Some(row),
            recipient: name.clone(),
            channel: Channel::Chat,
            result,
        });

        if options.birthday_send_delay > Duration::ZERO {
            sleep(options.birthday_send_delay).await;
        }
    }
}

/// Per matched row: resolve tenure, send the email, collect the name.
/// One aggregated Slack announcement for all anniversaries follows the
/// loop, failure-isolated like everything else.
#[allow(clippy::too_many_arguments)]
pub async fn send_anniversary_wishes<M, C, R>(
    roster: &Roster,
    rows: &[usize],
    mailer: &M,
    chat: &C,
    templates: &TemplateStore,
    options: &DispatchOptions,
    current_year: i32,
    rng: &mut R,
    report: &mut BatchReport,
) where
    M: Mailer,
    C: ChatSender,
    R: Rng,
{
    let mut names: Vec<String> = Vec::new();

    for &row in rows {
        let (Some(name), Some(email)) = (roster.full_name.get(row), roster.email.get(row)) else {
            warn!(row, "Roster row is missing name or email, skipping");
            continue;
        };

        let title = roster.title.get(row).map(String::as_str).unwrap_or("");
        let join_date = roster.date_of_joining.get(row).map(String::as_str).unwrap_or("");

        let content = resolve_anniversary_content(join_date, current_year, rng);

        let result = match templates
            .anniversary(content.template_no, name, title, join_date, content.tenure_years)
            .await
        {
            Ok(body) => {
                let message = MailMessage::plain(
                    email,
                    format!("Congratulations on Your Work Anniversary! {name}"),
                    body,
                );

                mailer.send(&message).await
            }
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            warn!(row, error = %e, "Anniversary email failed");
        }

        report.push(SendOutcome {
            row: Some(row),
            recipient: name.clone(),
            channel: Channel::Mail,
            result,
        });

        names.push(name.clone());
    }

    if names.is_empty() {
        return;
    }

    let recipients = names.join(", ");

    let result = chat
        .post(&options.general_channel_id, &anniversary_chat_text(&recipients))
        .await
        .map(|_| ());

    if let Err(e) = &result {
        warn!(error = %e, "Anniversary Slack announcement failed");
    }

    report.push(SendOutcome {
        row: None,
        recipient: recipients,
        channel: Channel::Chat,
        result,
    });
}

/// Picks a template at random and fetches a quote for the birthday email.
/// A provider failure is non-fatal: the recipient gets the default quote
/// line instead.
pub async fn resolve_birthday_content<Q, R>(quotes: &Q, rng: &mut R) -> BirthdayContent
where
    Q: QuoteSource,
    R: Rng,
{
    let template_no = rng.random_range(1..=5);

    match quotes.by_category("inspirational").await {
        Ok(quote) => BirthdayContent {
            template_no,
            rendered_quote: render_text_block(&quote.quote, 120, 28),
            quote: quote.quote,
            author: quote.author,
        },
        Err(e) => {
            warn!(error = %e, "Quote fetch failed, using default quote");

            BirthdayContent {
                template_no,
                quote: DEFAULT_QUOTE.to_string(),
                author: String::new(),
                rendered_quote: render_text_block(DEFAULT_QUOTE, 120, 28),
            }
        }
    }
}

/// Picks a template at random and derives tenure from the join date. A
/// join date without a recognizable year counts as zero years rather than
/// failing the recipient.
pub fn resolve_anniversary_content<R: Rng>(
    join_date: &str,
    current_year: i32,
    rng: &mut R,
) -> AnniversaryContent {
    let template_no = rng.random_range(1..=5);

    let tenure = match tenure_years(join_date, current_year) {
        Some(years) => years,
        None => {
            warn!(join_date, "No year component in join date, assuming zero tenure");
            0
        }
    };

    AnniversaryContent {
        template_no,
        tenure_years: tenure,
    }
}

/// Posts the daily good-morning quote to the team channel. Falls back to
/// the quote-of-the-day provider when the category provider fails.
pub async fn broadcast_quote_of_the_day<C, Q, R>(
    chat: &C,
    quotes: &Q,
    options: &DispatchOptions,
    rng: &mut R,
) -> Result<ChatReceipt, Error>
where
    C: ChatSender,
    Q: QuoteSource,
    R: Rng,
{
    let category = QOD_CATEGORIES[rng.random_range(0..QOD_CATEGORIES.len())];

    let quote = match quotes.by_category(category).await {
        Ok(quote) => quote,
        Err(e) => {
            warn!(category, error = %e, "Category quote failed, trying quote of the day");
            quotes.quote_of_the_day().await?
        }
    };

    let receipt = chat
        .post(&options.general_channel_id, &qod_chat_text(&quote))
        .await?;

    info!(ts = %receipt.ts, "Quote of the day posted");

    Ok(receipt)
}

fn birthday_chat_text(name: &str, content: &BirthdayContent) -> String {
    let first_name = name.split_whitespace().next().unwrap_or(name);
    let block = render_text_block(&content.quote, 80, 15);

    let mut text = format!(
        "Happy Birthday {name} :birthday: :tada: :cake: :confetti_ball:\n\n\
         Hope this message will glorify this marvellous day!\n\n{block}"
    );

    if !content.author.is_empty() {
        text.push_str(&format!("\n -- {}", content.author));
    }

    text.push_str(&format!("\n\nEnjoy the day {first_name}!"));
    text
}

fn anniversary_chat_text(recipients: &str) -> String {
    format!(
        "Congratulations on your Work Anniversary {recipients} \
         :technologist: :saluting_face: :clap: :partying_face: :confetti_ball:\n\n\
         Enjoy the day with a great smile on your face and wish you having \
         more fun with us for upcoming years."
    )
}

fn qod_chat_text(quote: &Quote) -> String {
    let mut text = format!("Dear Team, Good Morning!\n\nToday's Thought\n\n{}", quote.quote);

    if !quote.author.is_empty() {
        text.push_str(&format!("\n\n -- {}", quote.author));
    }

    text
}
