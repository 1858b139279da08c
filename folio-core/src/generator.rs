use std::path::{Path, PathBuf};

use log::{error, info, warn};
use serde::Serialize;
use tera::Context;

use crate::config::{SiteConfig, TemplateKind};
use crate::markdown::{self, DocumentError};
use crate::nav::{self, NavContext};
use crate::scanner::{Category, ContentScanner, ScanError};
use crate::template::{TemplateError, TemplateRenderer};
use crate::writer;

#[derive(Debug)]
pub enum GenerateError {
    Scan(ScanError),
    Document(DocumentError),
    Template(TemplateError),
    Io(std::io::Error),
    Serialization(serde_json::Error),
}

impl From<ScanError> for GenerateError {
    fn from(err: ScanError) -> Self {
        GenerateError::Scan(err)
    }
}

impl From<DocumentError> for GenerateError {
    fn from(err: DocumentError) -> Self {
        GenerateError::Document(err)
    }
}

impl From<TemplateError> for GenerateError {
    fn from(err: TemplateError) -> Self {
        GenerateError::Template(err)
    }
}

impl From<std::io::Error> for GenerateError {
    fn from(err: std::io::Error) -> Self {
        GenerateError::Io(err)
    }
}

impl From<serde_json::Error> for GenerateError {
    fn from(err: serde_json::Error) -> Self {
        GenerateError::Serialization(err)
    }
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::Scan(e) => write!(f, "Scan error: {}", e),
            GenerateError::Document(e) => write!(f, "Document error: {}", e),
            GenerateError::Template(e) => write!(f, "Template error: {}", e),
            GenerateError::Io(e) => write!(f, "IO error: {}", e),
            GenerateError::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for GenerateError {}

/// One entry in a scrolling page's client-side section index. Field names
/// are part of the embedded blob contract.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Section {
    section_id: String,
    section_name: String,
}

/// One summary row on a master-detail index page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DetailItem {
    title: String,
    short_description: String,
    more_info_link: String,
}

/// Drives the whole pipeline: output reset, content discovery, then
/// per-category dispatch to the matching page strategy.
pub struct Generator {
    config: SiteConfig,
    renderer: TemplateRenderer,
    content_dir: PathBuf,
    output_dir: PathBuf,
}

impl Generator {
    pub fn new<C, O, T>(
        config: SiteConfig,
        content_dir: C,
        output_dir: O,
        theme_dir: T,
    ) -> Result<Self, GenerateError>
    where
        C: AsRef<Path>,
        O: AsRef<Path>,
        T: AsRef<Path>,
    {
        let renderer = TemplateRenderer::new(theme_dir)?;

        Ok(Self {
            config,
            renderer,
            content_dir: content_dir.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
        })
    }

    /// Resets the output tree, scans the content root and generates every
    /// category not excluded from generation. A failing category is logged
    /// and skipped; only output reset and root traversal failures abort
    /// the run.
    pub fn run(&self) -> Result<(), GenerateError> {
        self.reset_output()?;

        let tree = ContentScanner::new(&self.content_dir).scan()?;

        info!("starting page generation");
        for category in &tree {
            if self.config.is_generation_excluded(&category.name) {
                continue;
            }

            info!("generating {} pages", category.name);
            let nav = nav::build_nav(&tree, &category.name, &self.config);
            let kind = self.config.template_for(&category.name);
            if let Err(e) = self.generate_category(kind, category, &nav) {
                error!("generation failed for {}: {}", category.name, e);
            }
        }
        info!("page generation complete");

        Ok(())
    }

    /// Removes the previous root index page and `pages` tree, then recreates
    /// an empty `pages` directory. Absence of either is not an error.
    fn reset_output(&self) -> Result<(), GenerateError> {
        let index = self.output_dir.join("index.html");
        if index.exists() {
            std::fs::remove_file(&index)?;
        }

        let pages = self.pages_dir();
        if pages.exists() {
            std::fs::remove_dir_all(&pages)?;
        }
        std::fs::create_dir_all(&pages)?;

        Ok(())
    }

    fn generate_category(
        &self,
        kind: TemplateKind,
        category: &Category,
        nav: &NavContext,
    ) -> Result<(), GenerateError> {
        match kind {
            TemplateKind::Home => self.generate_home(category, nav),
            TemplateKind::StaticPage => self.generate_static(category, nav),
            TemplateKind::ScrollingPage => self.generate_scrolling(category, nav),
            TemplateKind::MasterDetail => self.generate_master_detail(category, nav),
        }
    }

    /// Home renders from the first file only, so there is no sibling to fall
    /// back to: a parse failure here fails the category. Front-matter
    /// `profilePic`/`aboutMe` fall back to the configured defaults, and the
    /// default-home flag is passed through as a rendering hint.
    fn generate_home(&self, category: &Category, nav: &NavContext) -> Result<(), GenerateError> {
        let Some(first) = category.files.first() else {
            warn!("home category {} has no files", category.name);
            return Ok(());
        };

        let doc = markdown::parse_document(first)?;
        let mut context = self.page_context(nav)?;
        context.insert(
            "display_default_home_page",
            &self.config.display_default_home_page,
        );
        context.insert("profile_pic", doc.meta_or("profilePic", &self.config.profile_pic));
        context.insert("about_me", doc.meta_or("aboutMe", &self.config.about_me));
        context.insert("page_content", &doc.html);

        let html = self
            .renderer
            .render(TemplateKind::Home.template_name(), &context)?;
        writer::write_page(&html, &self.output_dir.join("index.html"))?;

        Ok(())
    }

    /// One page per file, each a pure `file -> page` mapping. A failing file
    /// is logged and its siblings still generate.
    fn generate_static(&self, category: &Category, nav: &NavContext) -> Result<(), GenerateError> {
        for file in &category.files {
            if let Err(e) = self.generate_static_page(file, nav) {
                warn!("skipping {}: {}", file.display(), e);
            }
        }

        Ok(())
    }

    fn generate_static_page(&self, file: &Path, nav: &NavContext) -> Result<(), GenerateError> {
        let doc = markdown::parse_document(file)?;
        let mut context = self.page_context(nav)?;
        context.insert("page_content", &doc.html);

        let html = self
            .renderer
            .render(TemplateKind::StaticPage.template_name(), &context)?;
        let out = self.pages_dir().join(format!("{}.html", file_stem(file)));
        writer::write_page(&html, &out)?;

        Ok(())
    }

    /// Every file in the category becomes a section of a single page. The
    /// section index is embedded as a JSON blob for client-side navigation.
    fn generate_scrolling(
        &self,
        category: &Category,
        nav: &NavContext,
    ) -> Result<(), GenerateError> {
        let mut sections = Vec::new();
        let mut bodies = Vec::new();
        for file in &category.files {
            let doc = match markdown::parse_document(file) {
                Ok(doc) => doc,
                Err(e) => {
                    warn!("skipping section {}: {}", file.display(), e);
                    continue;
                }
            };

            sections.push(Section {
                section_id: markdown::slugify(doc.meta_or("title", "")),
                section_name: file_stem(file),
            });
            bodies.push(doc.html);
        }

        let mut context = self.page_context(nav)?;
        context.insert("sections", &sections);
        context.insert("projects", &bodies);
        context.insert("sections_json", &serde_json::to_string(&sections)?);

        let html = self
            .renderer
            .render(TemplateKind::ScrollingPage.template_name(), &context)?;
        writer::write_page(&html, &self.category_page_path(category))?;

        Ok(())
    }

    /// Each file yields a detail page plus a summary row; after all files,
    /// one master page renders from the accumulated rows. Every write
    /// completes before this returns. A failing file is dropped from the
    /// master list so its link never dangles.
    fn generate_master_detail(
        &self,
        category: &Category,
        nav: &NavContext,
    ) -> Result<(), GenerateError> {
        let mut detail_items = Vec::new();
        for file in &category.files {
            let doc = match markdown::parse_document(file) {
                Ok(doc) => doc,
                Err(e) => {
                    warn!("skipping {}: {}", file.display(), e);
                    continue;
                }
            };

            let stem = file_stem(file);
            let mut context = self.page_context(nav)?;
            context.insert("page_content", &doc.html);
            let html = match self
                .renderer
                .render(TemplateKind::StaticPage.template_name(), &context)
            {
                Ok(html) => html,
                Err(e) => {
                    warn!("skipping detail page {}: {}", stem, e);
                    continue;
                }
            };
            writer::write_page(&html, &self.pages_dir().join(format!("{stem}.html")))?;

            detail_items.push(DetailItem {
                title: doc.meta_or("title", "").to_string(),
                short_description: doc.meta_or("shortDescription", "").to_string(),
                more_info_link: format!("/pages/{stem}.html"),
            });
        }

        let mut context = self.page_context(nav)?;
        context.insert("detail_items", &detail_items);

        let html = self
            .renderer
            .render(TemplateKind::MasterDetail.template_name(), &context)?;
        writer::write_page(&html, &self.category_page_path(category))?;

        Ok(())
    }

    fn page_context(&self, nav: &NavContext) -> Result<Context, GenerateError> {
        Ok(Context::from_serialize(nav).map_err(TemplateError::from)?)
    }

    fn pages_dir(&self) -> PathBuf {
        self.output_dir.join("pages")
    }

    fn category_page_path(&self, category: &Category) -> PathBuf {
        self.pages_dir().join(format!("{}.html", category.name))
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}
