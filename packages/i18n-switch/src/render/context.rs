//! Render Context
//!
//! State shared by every render pass of one transform call. The first pass
//! that begins generates one `<ng-template>` per projection point; every
//! later pass replays the same identifiers in encounter order.

use super::uniq_id::IdSource;
use crate::error::RenderError;

/// Prefix of the template reference variable of generated declarations
pub const GENERATED_TEMPLATE_PREFIX: &str = "automaticallyGeneratedTemplate";

/// Redraws allowed when the id source repeats a token
const MAX_ID_ATTEMPTS: usize = 16;

pub struct RenderContext<'a> {
    id_source: &'a dyn IdSource,
    generation_enabled: bool,
    templates_generated: bool,
    projection_counter: usize,
    generated_identifiers: Vec<String>,
    generated_templates: Vec<String>,
}

impl<'a> RenderContext<'a> {
    pub fn new(id_source: &'a dyn IdSource) -> Self {
        RenderContext {
            id_source,
            generation_enabled: false,
            templates_generated: false,
            projection_counter: 0,
            generated_identifiers: Vec::new(),
            generated_templates: Vec::new(),
        }
    }

    /// Start a render pass.
    ///
    /// Generation is enabled for the first pass only.
    pub fn begin_pass(&mut self) {
        self.generation_enabled = !self.templates_generated;
        self.templates_generated = true;
        self.projection_counter = 0;
    }

    /// Check that a replaying pass visited every generated projection point.
    pub fn finish_pass(&self) -> Result<(), RenderError> {
        if !self.generation_enabled && self.projection_counter != self.generated_identifiers.len() {
            return Err(RenderError::ProjectionMismatch {
                generated: self.generated_identifiers.len(),
                found: self.projection_counter,
            });
        }
        Ok(())
    }

    pub fn generation_enabled(&self) -> bool {
        self.generation_enabled
    }

    pub fn projection_counter(&self) -> usize {
        self.projection_counter
    }

    pub fn identifiers(&self) -> &[String] {
        &self.generated_identifiers
    }

    pub fn templates(&self) -> &[String] {
        &self.generated_templates
    }

    pub fn templates_joined(&self) -> String {
        self.generated_templates.concat()
    }

    /// Route a rendered projection point through its shared template.
    ///
    /// Returns the reference that replaces `element` in the current branch.
    pub fn project(&mut self, element: String) -> Result<String, RenderError> {
        if self.generation_enabled {
            let id = self.draw_id()?;
            self.generated_templates.push(format!(
                "<ng-template #{}{}>{}</ng-template>",
                GENERATED_TEMPLATE_PREFIX, id, element
            ));
            self.generated_identifiers.push(id);
        }

        let id = self
            .generated_identifiers
            .get(self.projection_counter)
            .ok_or(RenderError::ProjectionMismatch {
                generated: self.generated_identifiers.len(),
                found: self.projection_counter + 1,
            })?;
        let reference = format!(
            "<ng-container *ngTemplateOutlet=\"{}{}\"></ng-container>",
            GENERATED_TEMPLATE_PREFIX, id
        );

        self.projection_counter += 1;
        Ok(reference)
    }

    fn draw_id(&self) -> Result<String, RenderError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.id_source.next_id();
            if !self.generated_identifiers.contains(&id) {
                return Ok(id);
            }
        }
        Err(RenderError::IdentifierExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}

impl std::fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("generation_enabled", &self.generation_enabled)
            .field("projection_counter", &self.projection_counter)
            .field("generated_identifiers", &self.generated_identifiers)
            .finish()
    }
}
