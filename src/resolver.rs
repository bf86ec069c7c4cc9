//! Request resolution: style and size validation, then the demo or
//! generation path.
//!
//! Upstream failures never escape [`RequestResolver::resolve`]; they are
//! folded into a `fallback` result that still reports success.

use std::sync::Arc;

use crate::{
    catalog,
    classify::classify,
    error::{Result, ServiceError},
    logger,
    models::{
        CredentialProbe, GenerationOutcome, GenerationRequest, GenerationResult, ImageSize,
        StyleDefinition, StylesResponse,
    },
    openai::ImageBackend,
};

/// Upstream limit on prompt length.
pub const MAX_PROMPT_CHARS: usize = 4000;
pub const DISPLAY_PROMPT_CHARS: usize = 200;
pub const MAX_ERROR_CHARS: usize = 200;
pub const RECOVERY_STRATEGY: &str = "demo_image";

/// First `max` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

fn truncate_for_display(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", truncate_chars(text, max))
    } else {
        text.to_string()
    }
}

pub fn compose_prompt(style: &StyleDefinition, text: &str) -> String {
    truncate_chars(
        &format!("{}: {}", style.prompt_fragment, text),
        MAX_PROMPT_CHARS,
    )
}

#[derive(Clone)]
pub struct RequestResolver {
    backend: Arc<dyn ImageBackend>,
}

impl RequestResolver {
    pub fn new(backend: Arc<dyn ImageBackend>) -> Self {
        Self { backend }
    }

    pub fn styles(&self) -> StylesResponse {
        catalog::styles_response()
    }

    pub async fn resolve(&self, request: GenerationRequest) -> Result<GenerationResult> {
        let request_id = uuid::Uuid::new_v4().to_string();
        self.resolve_with_id(request, request_id).await
    }

    pub async fn resolve_with_id(
        &self,
        request: GenerationRequest,
        request_id: String,
    ) -> Result<GenerationResult> {
        let timer = logger::timer("generate");
        let rid = request_id.as_str();

        log::info!(
            request_id = rid;
            "Generate request: style={} text_chars={} credential={}",
            request.style,
            request.text.chars().count(),
            request.credential().is_some()
        );

        let style = catalog::find_style(&request.style).ok_or_else(|| {
            log::warn!(request_id = rid; "Rejected unknown style '{}'", request.style);
            ServiceError::InvalidStyle {
                style: request.style.clone(),
                available: catalog::style_ids(),
            }
        })?;

        let size: ImageSize = request.size.parse().map_err(|e| {
            log::warn!(request_id = rid; "Rejected malformed size '{}'", request.size);
            e
        })?;

        let (outcome, image_url, message) = match request.credential() {
            None => {
                log::info!(request_id = rid; "Mode: demo");
                (
                    GenerationOutcome::Demo,
                    catalog::demo_image_url(style.id, size),
                    format!("Demo: illustration in '{}' style", style.display_name),
                )
            }
            Some(api_key) => self.generate(rid, api_key, style, size, &request).await,
        };

        log::info!(
            request_id = rid;
            "Resolved as {} in {:.3}s",
            outcome.mode(),
            timer.elapsed_secs()
        );

        Ok(GenerationResult {
            status: "success",
            request_id,
            outcome,
            image_url,
            message,
            style: style.id.to_string(),
            style_name: style.display_name.to_string(),
            size: size.to_string(),
            generation_time: timer.elapsed_secs(),
        })
    }

    async fn generate(
        &self,
        rid: &str,
        api_key: &str,
        style: &StyleDefinition,
        size: ImageSize,
        request: &GenerationRequest,
    ) -> (GenerationOutcome, String, String) {
        let prompt = compose_prompt(style, &request.text);
        log::info!(
            request_id = rid;
            "Mode: generation ({} prompt chars)",
            prompt.chars().count()
        );

        match self
            .backend
            .generate_image(api_key, &prompt, &size.to_string(), &request.quality)
            .await
        {
            Ok(image) => {
                log::info!(request_id = rid; "Image generated");
                if let Some(revised) = &image.revised_prompt {
                    log::debug!(request_id = rid; "Upstream revised prompt: {}", revised);
                }
                (
                    GenerationOutcome::Generated {
                        quality: request.quality.clone(),
                        prompt_used: truncate_for_display(&prompt, DISPLAY_PROMPT_CHARS),
                    },
                    image.url,
                    format!("AI illustration in '{}' style", style.display_name),
                )
            }
            Err(e) => {
                let error_text = e.to_string();
                let category = classify(&error_text);
                log::error!(request_id = rid; "Image generation failed: {}", error_text);
                log::warn!(request_id = rid; "Falling back to demo image ({})", category);
                (
                    GenerationOutcome::Fallback {
                        quality: request.quality.clone(),
                        error_type: category,
                        error: truncate_chars(&error_text, MAX_ERROR_CHARS),
                        recovery_strategy: RECOVERY_STRATEGY,
                    },
                    catalog::demo_image_url(style.id, size),
                    category.user_message().to_string(),
                )
            }
        }
    }

    /// Checks a credential against the model-listing endpoint. Only a blank
    /// key is an error; upstream rejections are reported in the probe.
    pub async fn probe_credential(&self, api_key: &str) -> Result<CredentialProbe> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(ServiceError::MissingApiKey);
        }

        match self.backend.list_models(api_key).await {
            Ok(models) => {
                log::info!("Credential probe accepted ({} models)", models.len());
                Ok(CredentialProbe::Accepted {
                    status: "success",
                    valid: true,
                    models_available: models.len(),
                    message: "API key is valid".to_string(),
                })
            }
            Err(e) => {
                let error_text = e.to_string();
                let category = classify(&error_text);
                log::warn!("Credential probe rejected: {} ({})", error_text, category);
                Ok(CredentialProbe::Rejected {
                    status: "error",
                    valid: false,
                    error_type: category,
                    error: truncate_chars(&error_text, MAX_ERROR_CHARS),
                    message: format!("API key check failed: {}", category),
                })
            }
        }
    }
}
