use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("DOCX generation failed: {0}")]
    Docx(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for PortalError {
    fn from(e: tera::Error) -> Self {
        PortalError::TemplateRender(e.to_string())
    }
}
