// Project grid filtering and the details modal

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub text: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
}

// Card titles map to catalog ids: lowercase, whitespace runs become `-`,
// anything outside `[A-Za-z0-9_-]` is dropped.
#[wasm_bindgen]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_space = false;
    for c in title.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            slug.push(c);
        }
    }
    slug
}

#[wasm_bindgen]
pub fn matches_filter(filter: &str, category: &str) -> bool {
    filter == ALL_CATEGORIES || filter == category
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ProjectCatalog {
    projects: BTreeMap<String, Project>,
}

impl ProjectCatalog {
    pub fn from_json(text: &str) -> Result<ProjectCatalog, String> {
        serde_json::from_str(text).map_err(|e| format!("invalid project catalog: {}", e))
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.get(id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn insert(&mut self, id: impl Into<String>, project: Project) {
        self.projects.insert(id.into(), project);
    }

    pub fn builtin() -> ProjectCatalog {
        fn strings(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| (*s).to_owned()).collect()
        }
        fn link(text: &str, icon: &str) -> ProjectLink {
            ProjectLink {
                text: text.to_owned(),
                url: "#".to_owned(),
                icon: icon.to_owned(),
            }
        }

        let mut catalog = ProjectCatalog::default();
        catalog.insert(
            "network-vulnerability-scanner",
            Project {
                title: "Network Vulnerability Scanner".into(),
                description: "A comprehensive network vulnerability scanner built with Python that \
                    automatically discovers network hosts, identifies open ports, and detects potential \
                    security vulnerabilities. The tool integrates with multiple vulnerability databases \
                    and provides detailed reporting capabilities."
                    .into(),
                tech: strings(&["Python", "Nmap", "Socket Programming", "JSON", "SQLite"]),
                features: strings(&[
                    "Automated network discovery using ARP and ICMP",
                    "Multi-threaded port scanning for improved performance",
                    "Service version detection and banner grabbing",
                    "Integration with CVE database for vulnerability matching",
                    "Detailed HTML and PDF report generation",
                    "Command-line interface with multiple scan options",
                    "False positive reduction algorithms",
                    "Network topology mapping",
                ]),
                links: vec![
                    link("View on GitHub", "fab fa-github"),
                    link("Live Demo", "fas fa-external-link-alt"),
                    link("Documentation", "fas fa-book"),
                ],
            },
        );
        catalog.insert(
            "password-security-analyzer",
            Project {
                title: "Password Security Analyzer".into(),
                description: "An advanced password strength analyzer that evaluates password security \
                    using multiple algorithms including entropy calculation, dictionary attacks, and \
                    pattern recognition. Provides actionable recommendations for password improvement."
                    .into(),
                tech: strings(&["Python", "Regex", "Entropy Calculation", "Machine Learning"]),
                features: strings(&[
                    "Shannon entropy calculation for randomness assessment",
                    "Dictionary attack simulation with common passwords",
                    "Pattern recognition for keyboard walks and sequences",
                    "Strength scoring with detailed breakdown",
                    "Password generation with customizable criteria",
                    "Batch analysis for multiple passwords",
                    "Integration with HaveIBeenPwned API",
                    "Real-time strength feedback",
                ]),
                links: vec![
                    link("View on GitHub", "fab fa-github"),
                    link("Try Online", "fas fa-external-link-alt"),
                ],
            },
        );
        catalog
    }
}

// Filter selection plus the project currently shown in the modal.
#[wasm_bindgen]
pub struct ProjectBrowser {
    catalog: ProjectCatalog,
    filter: String,
    open: Option<String>,
}

#[wasm_bindgen]
impl ProjectBrowser {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ProjectBrowser {
        ProjectBrowser::with_catalog(ProjectCatalog::builtin())
    }

    pub fn from_json(json: &str) -> Result<ProjectBrowser, JsValue> {
        let catalog = ProjectCatalog::from_json(json).map_err(|e| JsValue::from_str(&e))?;
        Ok(ProjectBrowser::with_catalog(catalog))
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.filter = filter.to_owned();
    }

    pub fn filter(&self) -> String {
        self.filter.clone()
    }

    pub fn is_visible(&self, category: &str) -> bool {
        matches_filter(&self.filter, category)
    }

    // Opens the modal for `id`; unknown ids leave it as it was.
    pub fn open(&mut self, id: &str) -> bool {
        if self.catalog.get(id).is_some() {
            self.open = Some(id.to_owned());
            true
        } else {
            false
        }
    }

    pub fn open_from_title(&mut self, title: &str) -> bool {
        self.open(&slugify(title))
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn current_id(&self) -> Option<String> {
        self.open.clone()
    }

    pub fn current_json(&self) -> Option<String> {
        serde_json::to_string(self.current()?).ok()
    }
}

impl ProjectBrowser {
    pub fn with_catalog(catalog: ProjectCatalog) -> ProjectBrowser {
        ProjectBrowser {
            catalog,
            filter: ALL_CATEGORIES.to_owned(),
            open: None,
        }
    }

    pub fn current(&self) -> Option<&Project> {
        self.catalog.get(self.open.as_deref()?)
    }
}

impl Default for ProjectBrowser {
    fn default() -> Self {
        ProjectBrowser::new()
    }
}
