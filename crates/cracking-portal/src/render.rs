use tera::{Context, Tera};
use tracing::debug;

use cracking_core::models::profile::ProfileRecord;

use crate::error::PortalError;
use crate::summary::{CarerSummary, NOT_YET_PROVIDED};

/// The built-in carer summary template.
pub const SUMMARY_TEMPLATE: &str = include_str!("../templates/carer_summary.md");

/// Presentation knobs for the carer summary.
#[derive(Debug, Clone)]
pub struct PortalOptions {
    pub placeholder: String,
    pub prepared_on: Option<jiff::civil::Date>,
}

impl Default for PortalOptions {
    fn default() -> Self {
        Self {
            placeholder: NOT_YET_PROVIDED.to_string(),
            prepared_on: None,
        }
    }
}

/// Project a profile into a carer summary with the given options applied.
pub fn summarize(profile: &ProfileRecord, options: &PortalOptions) -> CarerSummary {
    let summary =
        CarerSummary::from_profile(profile).with_placeholder(options.placeholder.clone());
    match options.prepared_on {
        Some(date) => summary.with_prepared_on(date),
        None => summary,
    }
}

/// Render the carer summary for a profile with the built-in template.
pub fn render_summary(
    profile: &ProfileRecord,
    options: &PortalOptions,
) -> Result<String, PortalError> {
    render_template("carer_summary.md", SUMMARY_TEMPLATE, &summarize(profile, options))
}

/// Render a Tera template with a CarerSummary.
///
/// The summary fields (`title`, `rows`, `provided`, `total`, `placeholder`,
/// `prepared_on`) become the template context variables.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    summary: &CarerSummary,
) -> Result<String, PortalError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| PortalError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(summary)?;
    let context =
        Context::from_value(value).map_err(|e| PortalError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    debug!(
        template = template_name,
        provided = summary.provided,
        total = summary.total,
        "carer summary rendered"
    );
    Ok(rendered)
}
