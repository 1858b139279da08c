use std::{collections::HashMap, fmt, path::Path};

use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parsing(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parsing(e) => write!(f, "TOML parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parsing(value)
    }
}

/// The page-shape strategy assigned to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Home,
    StaticPage,
    ScrollingPage,
    MasterDetail,
}

impl TemplateKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "home" => Some(TemplateKind::Home),
            "static-page" => Some(TemplateKind::StaticPage),
            "scrolling-page" => Some(TemplateKind::ScrollingPage),
            "master-detail" => Some(TemplateKind::MasterDetail),
            _ => None,
        }
    }

    /// Name of the theme template this strategy renders through.
    pub fn template_name(&self) -> &'static str {
        match self {
            TemplateKind::Home => "home.html",
            TemplateKind::StaticPage => "static-page.html",
            TemplateKind::ScrollingPage => "scrolling-page.html",
            TemplateKind::MasterDetail => "master-detail.html",
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Config {
    pub site: Option<SiteConfig>,
}

impl Config {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&data)?;

        Ok(config)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub sub_title: String,
    pub profile_pic: String,
    pub about_me: String,
    pub excluded_generated_pages: Vec<String>,
    pub excluded_menu_items: Vec<String>,
    pub display_default_home_page: bool,
    pub resume_link: String,
    /// Category name to template kind (`home`, `static-page`,
    /// `scrolling-page`, `master-detail`).
    pub templates: HashMap<String, String>,
    pub menu_order: HashMap<String, i32>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            sub_title: String::new(),
            profile_pic: String::new(),
            about_me: String::new(),
            excluded_generated_pages: Vec::new(),
            excluded_menu_items: Vec::new(),
            display_default_home_page: true,
            resume_link: String::new(),
            templates: HashMap::new(),
            menu_order: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Resolves the strategy for a category. An unmapped or unrecognized
    /// mapping degrades to one static page per file rather than failing
    /// the run.
    pub fn template_for(&self, category: &str) -> TemplateKind {
        self.templates
            .get(category)
            .and_then(|value| TemplateKind::parse(value))
            .unwrap_or(TemplateKind::StaticPage)
    }

    pub fn is_menu_excluded(&self, category: &str) -> bool {
        self.excluded_menu_items.iter().any(|c| c == category)
    }

    pub fn is_generation_excluded(&self, category: &str) -> bool {
        self.excluded_generated_pages.iter().any(|c| c == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_site_table() {
        let toml = r#"
            [site]
            title = "Bob Alan"
            sub_title = "UX Designer"
            excluded_generated_pages = ["resume"]
            excluded_menu_items = ["home"]
            resume_link = "/contents/resume/resume.pdf"

            [site.templates]
            "my work" = "scrolling-page"
            home = "home"

            [site.menu_order]
            "my work" = 1
            resume = 2
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        let site = config.site.unwrap();
        assert_eq!(site.title, "Bob Alan");
        assert!(site.is_generation_excluded("resume"));
        assert!(site.is_menu_excluded("home"));
        assert_eq!(site.template_for("my work"), TemplateKind::ScrollingPage);
        assert_eq!(site.menu_order["my work"], 1);
        // Defaults survive a partial table
        assert!(site.display_default_home_page);
    }

    #[test]
    fn reads_a_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "[site]\ntitle = \"Bob Alan\"\n").unwrap();

        let config = Config::read(&path).unwrap();
        assert_eq!(config.site.unwrap().title, "Bob Alan");

        assert!(Config::read(dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn unmapped_category_falls_back_to_static() {
        let site = SiteConfig::default();
        assert_eq!(site.template_for("notes"), TemplateKind::StaticPage);
    }

    #[test]
    fn unrecognized_mapping_falls_back_to_static() {
        let mut site = SiteConfig::default();
        site.templates
            .insert("notes".to_string(), "carousel".to_string());
        assert_eq!(site.template_for("notes"), TemplateKind::StaticPage);
    }

    #[test]
    fn template_kind_parses_all_known_names() {
        assert_eq!(TemplateKind::parse("home"), Some(TemplateKind::Home));
        assert_eq!(
            TemplateKind::parse("static-page"),
            Some(TemplateKind::StaticPage)
        );
        assert_eq!(
            TemplateKind::parse("scrolling-page"),
            Some(TemplateKind::ScrollingPage)
        );
        assert_eq!(
            TemplateKind::parse("master-detail"),
            Some(TemplateKind::MasterDetail)
        );
        assert_eq!(TemplateKind::parse("ejs"), None);
    }
}
