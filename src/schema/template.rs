//! Template generation for workspace scaffolding

use chrono::{DateTime, Utc};
use rust_embed::Embed;
use tera::Tera;
use thiserror::Error;

use crate::core::identity::EntityId;

#[derive(Embed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// Context for template generation
#[derive(Debug, Clone)]
pub struct TemplateContext {
    pub id: EntityId,
    pub author: String,
    pub created: DateTime<Utc>,
    pub title: Option<String>,
    pub currency: Option<String>,
    pub default_suit_type: Option<String>,
    // sample profile measurements
    pub height_cm: Option<f64>,
    pub chest_cm: Option<f64>,
    pub waist_cm: Option<f64>,
}

impl TemplateContext {
    pub fn new(id: EntityId, author: String) -> Self {
        Self {
            id,
            author,
            created: Utc::now(),
            title: None,
            currency: None,
            default_suit_type: None,
            height_cm: None,
            chest_cm: None,
            waist_cm: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_default_suit_type(mut self, suit_type: impl Into<String>) -> Self {
        self.default_suit_type = Some(suit_type.into());
        self
    }

    pub fn with_measurements(mut self, height_cm: f64, chest_cm: f64, waist_cm: f64) -> Self {
        self.height_cm = Some(height_cm);
        self.chest_cm = Some(chest_cm);
        self.waist_cm = Some(waist_cm);
        self
    }
}

/// Template generator using Tera
pub struct TemplateGenerator {
    tera: Tera,
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Template rendering error: {0}")]
    RenderError(String),
}

impl TemplateGenerator {
    /// Create a new template generator with embedded templates
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();

        for file in EmbeddedTemplates::iter() {
            let filename = file.as_ref();
            if let Some(content) = EmbeddedTemplates::get(filename) {
                if let Ok(template_str) = std::str::from_utf8(&content.data) {
                    tera.add_raw_template(filename, template_str)
                        .map_err(|e| TemplateError::RenderError(e.to_string()))?;
                }
            }
        }

        Ok(Self { tera })
    }

    /// Generate the workspace config file
    pub fn generate_config(&self, ctx: &TemplateContext) -> Result<String, TemplateError> {
        let mut context = tera::Context::new();
        context.insert("author", &ctx.author);
        context.insert("created", &ctx.created.to_rfc3339());
        context.insert(
            "currency",
            &ctx.currency.clone().unwrap_or_else(|| "USD".to_string()),
        );
        context.insert(
            "default_suit_type",
            &ctx.default_suit_type
                .clone()
                .unwrap_or_else(|| "two-piece".to_string()),
        );

        if self.tera.get_template_names().any(|n| n == "config.yaml.tera") {
            self.tera
                .render("config.yaml.tera", &context)
                .map_err(|e| TemplateError::RenderError(e.to_string()))
        } else {
            Ok(self.hardcoded_config_template(ctx))
        }
    }

    /// Generate the starter catalog
    pub fn generate_catalog(&self, ctx: &TemplateContext) -> Result<String, TemplateError> {
        let mut context = tera::Context::new();
        context.insert(
            "title",
            &ctx.title.clone().unwrap_or_else(|| "House catalog".to_string()),
        );
        context.insert("author", &ctx.author);
        context.insert("created", &ctx.created.to_rfc3339());

        if self.tera.get_template_names().any(|n| n == "catalog.yaml.tera") {
            self.tera
                .render("catalog.yaml.tera", &context)
                .map_err(|e| TemplateError::RenderError(e.to_string()))
        } else {
            Ok(self.hardcoded_catalog_template(ctx))
        }
    }

    /// Generate a sample measurement profile
    pub fn generate_profile(&self, ctx: &TemplateContext) -> Result<String, TemplateError> {
        let mut context = tera::Context::new();
        context.insert("id", &ctx.id.to_string());
        context.insert("author", &ctx.author);
        context.insert("created", &ctx.created.to_rfc3339());
        context.insert(
            "title",
            &ctx.title.clone().unwrap_or_else(|| "Sample fit".to_string()),
        );
        context.insert("height_cm", &ctx.height_cm.unwrap_or(180.0));
        context.insert("chest_cm", &ctx.chest_cm.unwrap_or(98.0));
        context.insert("waist_cm", &ctx.waist_cm.unwrap_or(84.0));

        if self.tera.get_template_names().any(|n| n == "profile.yaml.tera") {
            self.tera
                .render("profile.yaml.tera", &context)
                .map_err(|e| TemplateError::RenderError(e.to_string()))
        } else {
            Ok(self.hardcoded_profile_template(ctx))
        }
    }

    fn hardcoded_config_template(&self, ctx: &TemplateContext) -> String {
        let currency = ctx.currency.clone().unwrap_or_else(|| "USD".to_string());
        let default_suit_type = ctx
            .default_suit_type
            .clone()
            .unwrap_or_else(|| "two-piece".to_string());

        format!(
            r#"# sartor workspace configuration

author: {author}
currency: {currency}
default_suit_type: {default_suit_type}
"#,
            author = ctx.author,
            currency = currency,
            default_suit_type = default_suit_type,
        )
    }

    fn hardcoded_catalog_template(&self, ctx: &TemplateContext) -> String {
        let title = ctx.title.clone().unwrap_or_else(|| "House catalog".to_string());

        format!(
            r##"# Catalog: {title}
# Prices are integers in minor currency units (cents).
# price_delta may be negative for cheaper alternatives.

name: "{title}"

base_prices:
  two_piece: 150000
  three_piece: 185000

fabrics:
  - id: wool-super120
    name: Wool Super 120s
    description: All-season worsted wool
  - id: cotton-twill
    name: Cotton twill
    description: Casual weave for warm seasons
    price_delta: -20000
  - id: irish-linen
    name: Irish linen
    description: Breathable summer cloth
    price_delta: 10000
  - id: cashmere-blend
    name: Cashmere blend
    description: Wool-cashmere luxury hand
    price_delta: 50000

colors:
  - id: midnight-navy
    name: Midnight navy
    value: "#191970"
  - id: charcoal
    name: Charcoal
    value: "#36454F"
  - id: stone-beige
    name: Stone beige
    value: "#B8AB9A"

styles:
  - id: classic
    name: Classic cut
    description: Regular fit through chest and waist
  - id: slim
    name: Slim cut
    description: Trimmed silhouette, higher armholes
  - id: double-breasted
    name: Double breasted
    description: Six-button front, structured shoulder

# Each axis may be narrowed to a subset; ids are fixed.
details:
  buttons:
    - id: one
      name: One button
    - id: two
      name: Two button
    - id: three
      name: Three button
  lapels:
    - id: notch
      name: Notch lapel
    - id: peak
      name: Peak lapel
    - id: shawl
      name: Shawl collar
  vents:
    - id: center
      name: Center vent
    - id: side
      name: Side vents
    - id: none
      name: No vent
  pockets:
    - id: flap
      name: Flap pockets
    - id: jetted
      name: Jetted pockets
    - id: patch
      name: Patch pockets
  linings:
    - id: full
      name: Fully lined
    - id: half
      name: Half lined
    - id: unlined
      name: Unlined
"##,
            title = title,
        )
    }

    fn hardcoded_profile_template(&self, ctx: &TemplateContext) -> String {
        let title = ctx.title.clone().unwrap_or_else(|| "Sample fit".to_string());
        let created = ctx.created.to_rfc3339();
        let height_cm = ctx.height_cm.unwrap_or(180.0);
        let chest_cm = ctx.chest_cm.unwrap_or(98.0);
        let waist_cm = ctx.waist_cm.unwrap_or(84.0);

        format!(
            r#"# Measurement profile: {title}
# Lengths are centimeters. Replace with real measurements.

id: {id}
name: "{title}"

height_cm: {height_cm}
chest_cm: {chest_cm}
waist_cm: {waist_cm}

notes: |
  Sample profile created by sartor init.

created: {created}
author: {author}
"#,
            id = ctx.id,
            title = title,
            height_cm = height_cm,
            chest_cm = chest_cm,
            waist_cm = waist_cm,
            created = created,
            author = ctx.author,
        )
    }
}

impl Default for TemplateGenerator {
    fn default() -> Self {
        Self::new().expect("Failed to create template generator")
    }
}
