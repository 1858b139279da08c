use serde::Serialize;

use crate::config::SiteConfig;
use crate::scanner::Category;

/// Categories without a configured order sort after every ordered one.
pub const DEFAULT_MENU_ORDER: i32 = 99;

#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    pub display_name: String,
    pub href: String,
    pub is_active: bool,
    pub order: i32,
}

/// Header data shared by every page, rebuilt per page so the active
/// menu item can differ.
#[derive(Debug, Serialize)]
pub struct NavContext {
    pub page_title: String,
    pub page_sub_title: String,
    pub menu_items: Vec<MenuItem>,
}

/// Derives the menu from the content tree. Excluded categories are dropped,
/// `resume` links to the configured static asset instead of a generated page,
/// and items sort ascending by configured order. The sort is stable, so
/// equal orders keep discovery order.
pub fn build_nav(tree: &[Category], active_category: &str, config: &SiteConfig) -> NavContext {
    let mut menu_items = Vec::new();
    for category in tree {
        if config.is_menu_excluded(&category.name) {
            continue;
        }

        let href = if category.name == "resume" {
            config.resume_link.clone()
        } else {
            format!("/pages/{}.html", category.name)
        };
        let order = config
            .menu_order
            .get(&category.name)
            .copied()
            .unwrap_or(DEFAULT_MENU_ORDER);

        menu_items.push(MenuItem {
            display_name: category.name.replace("%20", " "),
            href,
            is_active: category.name == active_category,
            order,
        });
    }

    menu_items.sort_by_key(|item| item.order);

    NavContext {
        page_title: config.title.clone(),
        page_sub_title: config.sub_title.clone(),
        menu_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str) -> Category {
        Category {
            name: name.to_string(),
            files: Vec::new(),
        }
    }

    fn config() -> SiteConfig {
        SiteConfig {
            title: "Bob Alan".to_string(),
            sub_title: "UX Designer".to_string(),
            resume_link: "/contents/resume/resume.pdf".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn explicit_orders_come_first_then_default() {
        let tree = vec![category("c"), category("a"), category("b")];
        let mut config = config();
        config.menu_order.insert("a".to_string(), 1);
        config.menu_order.insert("b".to_string(), 2);

        let nav = build_nav(&tree, "a", &config);

        let names: Vec<&str> = nav
            .menu_items
            .iter()
            .map(|i| i.display_name.as_str())
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(nav.menu_items[2].order, DEFAULT_MENU_ORDER);
    }

    #[test]
    fn equal_orders_keep_discovery_order() {
        let tree = vec![category("zeta"), category("alpha"), category("mid")];

        let nav = build_nav(&tree, "", &config());

        let names: Vec<&str> = nav
            .menu_items
            .iter()
            .map(|i| i.display_name.as_str())
            .collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn excluded_categories_never_appear() {
        let tree = vec![category("home"), category("my work")];
        let mut config = config();
        config.excluded_menu_items.push("home".to_string());

        let nav = build_nav(&tree, "my work", &config);

        assert_eq!(nav.menu_items.len(), 1);
        assert_eq!(nav.menu_items[0].display_name, "my work");
    }

    #[test]
    fn resume_links_to_the_configured_asset() {
        let tree = vec![category("resume"), category("writing")];

        let nav = build_nav(&tree, "writing", &config());

        let resume = nav
            .menu_items
            .iter()
            .find(|i| i.display_name == "resume")
            .unwrap();
        assert_eq!(resume.href, "/contents/resume/resume.pdf");
        let writing = nav
            .menu_items
            .iter()
            .find(|i| i.display_name == "writing")
            .unwrap();
        assert_eq!(writing.href, "/pages/writing.html");
    }

    #[test]
    fn percent_twenty_is_displayed_as_a_space() {
        let tree = vec![category("my%20work")];

        let nav = build_nav(&tree, "my%20work", &config());

        assert_eq!(nav.menu_items[0].display_name, "my work");
        // href keeps the raw category name, it addresses the generated file
        assert_eq!(nav.menu_items[0].href, "/pages/my%20work.html");
        assert!(nav.menu_items[0].is_active);
    }

    #[test]
    fn only_the_active_category_is_marked() {
        let tree = vec![category("a"), category("b")];

        let nav = build_nav(&tree, "b", &config());

        assert!(!nav.menu_items[0].is_active);
        assert!(nav.menu_items[1].is_active);
    }
}
