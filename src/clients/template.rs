use std::path::PathBuf;

use tracing::debug;

use crate::{config::Config, models::error::SendFailure};

/// On-disk message templates: five plain-text bodies per notification kind
/// under `<root>/dob/template-{1..5}.txt` and `<root>/doj/template-{1..5}.txt`.
/// Placeholder tokens are substituted verbatim before send.
pub struct TemplateStore {
    root: PathBuf,
    company_name: String,
}

impl TemplateStore {
    pub fn new(config: &Config) -> Self {
        Self {
            root: PathBuf::from(&config.templates_dir),
            company_name: config.company_name.clone(),
        }
    }

    pub fn with_root(root: impl Into<PathBuf>, company_name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            company_name: company_name.into(),
        }
    }

    pub async fn birthday(
        &self,
        template_no: u8,
        name: &str,
        quote_block: &str,
    ) -> Result<String, SendFailure> {
        let body = self.load("dob", template_no).await?;

        Ok(body.replace("[Name]", name).replace("[Quote]", quote_block))
    }

    pub async fn anniversary(
        &self,
        template_no: u8,
        name: &str,
        title: &str,
        join_date: &str,
        tenure_years: i32,
    ) -> Result<String, SendFailure> {
        let body = self.load("doj", template_no).await?;

        Ok(body
            .replace("[Name]", name)
            .replace("[Company]", &self.company_name)
            .replace("[Current Position/Title]", title)
            .replace("[Date of Joining]", join_date)
            .replace("[number of years]", &tenure_years.to_string()))
    }

    async fn load(&self, kind: &str, template_no: u8) -> Result<String, SendFailure> {
        let path = self.root.join(kind).join(format!("template-{template_no}.txt"));

        debug!(path = %path.display(), "Loading message template");

        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| SendFailure::template(path.display().to_string(), e.to_string()))
    }
}
