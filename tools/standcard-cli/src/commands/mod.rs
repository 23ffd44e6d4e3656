pub mod check;
pub mod layout;
pub mod reg_table;
pub mod render;

use std::path::PathBuf;

use standcard_common::config::AppConfig;
use standcard_common::error::StandcardResult;
use standcard_table_model::job::RenderJob;
use standcard_table_model::layout::Layout;
use standcard_table_model::record::Record;

use crate::ResourceArgs;

/// Template, font, and layout after applying flag overrides to the config.
#[derive(Debug, Clone)]
pub struct Resources {
    pub template_path: PathBuf,
    pub font_path: PathBuf,
    pub layout: Layout,
}

impl Resources {
    /// Flags win over the config file; the built-in layout is the fallback.
    pub fn resolve(config: &AppConfig, args: &ResourceArgs) -> StandcardResult<Self> {
        let layout = Self::resolve_layout(config, args)?;
        Ok(Self::with_layout(config, args, layout))
    }

    /// Load the layout file named by the flags or config, if any.
    pub fn resolve_layout(config: &AppConfig, args: &ResourceArgs) -> StandcardResult<Layout> {
        let layout_path = args
            .layout
            .clone()
            .or_else(|| config.resources.layout_path.clone());

        Ok(match layout_path {
            Some(path) => Layout::load(path)?,
            None => Layout::default(),
        })
    }

    /// Resolve template and font paths around an already loaded layout.
    pub fn with_layout(config: &AppConfig, args: &ResourceArgs, layout: Layout) -> Self {
        Self {
            template_path: args
                .template
                .clone()
                .unwrap_or_else(|| config.resources.template_path.clone()),
            font_path: args
                .font
                .clone()
                .unwrap_or_else(|| config.resources.font_path.clone()),
            layout,
        }
    }

    /// Assemble a render job for already-selected records.
    pub fn job(
        &self,
        tournament: String,
        organization: String,
        stage: String,
        records: Vec<Record>,
        output_path: PathBuf,
    ) -> RenderJob {
        RenderJob {
            tournament,
            organization,
            stage,
            records,
            template_path: self.template_path.clone(),
            font_path: self.font_path.clone(),
            output_path,
            layout: self.layout.clone(),
        }
    }
}
