//! Declarative node predicates and the structural locator.
//!
//! A [`LocatorSpec`] is what configuration carries: either a raw CSS selector
//! or a structured `label` + attribute rules form. Both compile to a
//! [`Locator`], which depends only on a node's label and attributes.

use scraper::Selector;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::document::{Document, Node};
use crate::error::{Error, Result};

/// A single attribute constraint inside a structured locator.
///
/// Exactly one of `equals`, `contains` or `word` is normally set; with none
/// set the rule only requires the attribute to be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AttributeRule {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equals: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains: Option<String>,
    /// Matches one whitespace-separated token, like a single class name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
}

/// Locator as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LocatorSpec {
    Css(String),
    Element {
        label: String,
        #[serde(default)]
        attributes: Vec<AttributeRule>,
    },
}

impl LocatorSpec {
    /// Render as a CSS selector.
    pub fn to_css(&self) -> String {
        match self {
            LocatorSpec::Css(css) => css.clone(),
            LocatorSpec::Element { label, attributes } => {
                let mut css = label.clone();
                for rule in attributes {
                    let mut any = false;
                    if let Some(v) = &rule.equals {
                        css.push_str(&format!("[{}=\"{}\"]", rule.name, escape_css_string(v)));
                        any = true;
                    }
                    if let Some(v) = &rule.contains {
                        css.push_str(&format!("[{}*=\"{}\"]", rule.name, escape_css_string(v)));
                        any = true;
                    }
                    if let Some(v) = &rule.word {
                        css.push_str(&format!("[{}~=\"{}\"]", rule.name, escape_css_string(v)));
                        any = true;
                    }
                    if !any {
                        css.push_str(&format!("[{}]", rule.name));
                    }
                }
                css
            }
        }
    }

    /// Compile into a [`Locator`]. `field` names the selector in errors.
    pub fn compile(&self, field: &'static str) -> Result<Locator> {
        Locator::parse(field, &self.to_css())
    }
}

impl From<&str> for LocatorSpec {
    fn from(css: &str) -> Self {
        LocatorSpec::Css(css.to_string())
    }
}

fn escape_css_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// A compiled node predicate.
#[derive(Debug, Clone)]
pub struct Locator {
    source: String,
    selector: Selector,
}

impl Locator {
    /// Compile a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelector`] if `css` is empty or does not parse.
    pub fn parse(field: &'static str, css: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidSelector {
            field,
            selector: css.to_string(),
            reason,
        };
        if css.trim().is_empty() {
            return Err(invalid("empty selector".to_string()));
        }
        let selector = Selector::parse(css).map_err(|e| invalid(e.to_string()))?;
        Ok(Self {
            source: css.to_string(),
            selector,
        })
    }

    /// The selector text this locator was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub(crate) fn selector(&self) -> &Selector {
        &self.selector
    }
}

/// Find the content region holding all news blocks.
///
/// # Errors
///
/// Returns [`Error::RegionNotFound`] when nothing matches `region`.
#[instrument(level = "debug", skip_all, fields(selector = %region.as_str()))]
pub fn locate_region<'d>(document: &'d Document, region: &Locator) -> Result<Node<'d>> {
    let node = document
        .find_first(region)
        .ok_or_else(|| Error::RegionNotFound(region.as_str().to_string()))?;
    debug!(label = node.label(), "Located news region");
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_spec_passes_through() {
        let spec = LocatorSpec::from("div.news > a[href]");
        assert_eq!(spec.to_css(), "div.news > a[href]");
    }

    #[test]
    fn test_element_spec_renders_attribute_rules() {
        let spec = LocatorSpec::Element {
            label: "div".to_string(),
            attributes: vec![
                AttributeRule {
                    name: "class".to_string(),
                    equals: Some("tw-my-6 lg:tw-mb-12".to_string()),
                    ..Default::default()
                },
                AttributeRule {
                    name: "data-kind".to_string(),
                    contains: Some("news".to_string()),
                    ..Default::default()
                },
                AttributeRule {
                    name: "id".to_string(),
                    ..Default::default()
                },
            ],
        };
        assert_eq!(
            spec.to_css(),
            r#"div[class="tw-my-6 lg:tw-mb-12"][data-kind*="news"][id]"#
        );
        assert!(spec.compile("region").is_ok());
    }

    #[test]
    fn test_element_spec_escapes_quotes() {
        let spec = LocatorSpec::Element {
            label: "a".to_string(),
            attributes: vec![AttributeRule {
                name: "title".to_string(),
                equals: Some(r#"say "hi""#.to_string()),
                ..Default::default()
            }],
        };
        assert_eq!(spec.to_css(), r#"a[title="say \"hi\""]"#);
        assert!(spec.compile("link").is_ok());
    }

    #[test]
    fn test_structured_class_equality_matches_full_attribute() {
        let doc = Document::parse_str(
            r#"<div class="tw-my-6">no</div><div class="tw-my-6 lg:tw-mb-12"><p>yes</p></div>"#,
        );
        let region = LocatorSpec::Element {
            label: "div".to_string(),
            attributes: vec![AttributeRule {
                name: "class".to_string(),
                equals: Some("tw-my-6 lg:tw-mb-12".to_string()),
                ..Default::default()
            }],
        }
        .compile("region")
        .unwrap();
        let node = locate_region(&doc, &region).unwrap();
        assert_eq!(node.text(), "yes");
    }

    #[test]
    fn test_word_rule_matches_single_class() {
        let doc = Document::parse_str(r#"<div class="card news big"><p>hit</p></div>"#);
        let spec = LocatorSpec::Element {
            label: "div".to_string(),
            attributes: vec![AttributeRule {
                name: "class".to_string(),
                word: Some("news".to_string()),
                ..Default::default()
            }],
        };
        let region = spec.compile("region").unwrap();
        assert_eq!(locate_region(&doc, &region).unwrap().text(), "hit");
    }

    #[test]
    fn test_invalid_selector_is_reported() {
        let err = Locator::parse("block", "div[").unwrap_err();
        match err {
            Error::InvalidSelector { field, selector, .. } => {
                assert_eq!(field, "block");
                assert_eq!(selector, "div[");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(Locator::parse("block", "   ").is_err());
    }

    #[test]
    fn test_locate_region_missing() {
        let doc = Document::parse_str("<div class='other'></div>");
        let region = Locator::parse("region", "div.news").unwrap();
        assert!(matches!(
            locate_region(&doc, &region),
            Err(Error::RegionNotFound(sel)) if sel == "div.news"
        ));
    }

    #[test]
    fn test_spec_deserializes_from_yaml() {
        let css: LocatorSpec = serde_yaml::from_str("\"time\"").unwrap();
        assert_eq!(css, LocatorSpec::Css("time".to_string()));

        let yaml = "label: div\nattributes:\n  - name: class\n    contains: news\n";
        let structured: LocatorSpec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(structured.to_css(), r#"div[class*="news"]"#);
    }
}
