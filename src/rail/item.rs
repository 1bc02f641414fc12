// SPDX-License-Identifier: MPL-2.0
//! Rail items and their visual payloads.
//!
//! Items are immutable display records. The rail never inspects them beyond
//! requiring at least one; ids are expected to be unique and stable but are
//! not validated.
//!
//! Items can be loaded from a TOML file with an `[[items]]` array:
//!
//! ```toml
//! [[items]]
//! id = "fission"
//! title = "Fission"
//! meta = "Base → Neutron + Proton"
//! input_tokens = ["base"]
//! output_tokens = ["neutron", "proton"]
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

/// Stable identifier of a rail item, either textual or numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::Text(value.to_string())
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        ItemId::Number(value)
    }
}

/// Tokens of the stabilization protocol shown in reaction visuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    Base,
    Neutron,
    Proton,
}

impl TokenKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Base => "Base",
            TokenKind::Neutron => "Neutron",
            TokenKind::Proton => "Proton",
        }
    }
}

/// How tokens flow through a reaction, which decides the arrow drawn between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowShape {
    /// One input becomes two outputs.
    Split,
    /// Two inputs become one output.
    Merge,
    /// Anything else.
    Direct,
}

/// A token reaction: input tokens turn into output tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenFlow {
    pub inputs: Vec<TokenKind>,
    pub outputs: Vec<TokenKind>,
}

impl TokenFlow {
    #[must_use]
    pub fn new(inputs: Vec<TokenKind>, outputs: Vec<TokenKind>) -> Self {
        Self { inputs, outputs }
    }

    #[must_use]
    pub fn shape(&self) -> FlowShape {
        match (self.inputs.len(), self.outputs.len()) {
            (1, 2) => FlowShape::Split,
            (2, 1) => FlowShape::Merge,
            _ => FlowShape::Direct,
        }
    }
}

/// Visual payload of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visual {
    /// Path or URL of an image.
    Image(String),
    /// Token reaction diagram.
    TokenFlow(TokenFlow),
}

/// Navigation reference handed to the host when an item is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTarget(String);

impl NavTarget {
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self(href.into())
    }

    #[must_use]
    pub fn href(&self) -> &str {
        &self.0
    }
}

/// A single card of the rail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RailItem {
    id: ItemId,
    title: String,
    description: Option<String>,
    meta: Option<String>,
    visual: Option<Visual>,
    target: Option<NavTarget>,
}

impl RailItem {
    #[must_use]
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            meta: None,
            visual: None,
            target: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    #[must_use]
    pub fn with_visual(mut self, visual: Visual) -> Self {
        self.visual = Some(visual);
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: NavTarget) -> Self {
        self.target = Some(target);
        self
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn meta(&self) -> Option<&str> {
        self.meta.as_deref()
    }

    pub fn visual(&self) -> Option<&Visual> {
        self.visual.as_ref()
    }

    pub fn target(&self) -> Option<&NavTarget> {
        self.target.as_ref()
    }
}

/// On-disk shape of an item. Token lists win over `image` when both are set.
#[derive(Debug, Deserialize)]
struct ItemRecord {
    id: ItemId,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    meta: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    href: Option<String>,
    #[serde(default)]
    input_tokens: Option<Vec<TokenKind>>,
    #[serde(default)]
    output_tokens: Option<Vec<TokenKind>>,
}

impl From<ItemRecord> for RailItem {
    fn from(record: ItemRecord) -> Self {
        let visual = match (record.input_tokens, record.output_tokens, record.image) {
            (Some(inputs), Some(outputs), _) => {
                Some(Visual::TokenFlow(TokenFlow::new(inputs, outputs)))
            }
            (_, _, Some(image)) => Some(Visual::Image(image)),
            _ => None,
        };

        RailItem {
            id: record.id,
            title: record.title,
            description: record.description,
            meta: record.meta,
            visual,
            target: record.href.map(NavTarget::new),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ItemFile {
    #[serde(default)]
    items: Vec<ItemRecord>,
}

/// Ordered, non-empty collection of rail items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RailItems(Vec<RailItem>);

impl RailItems {
    /// Wraps `items`, failing with [`Error::EmptyRail`] if there are none.
    pub fn new(items: Vec<RailItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyRail);
        }
        Ok(Self(items))
    }

    /// Parses an `[[items]]` TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ItemFile =
            toml::from_str(content).map_err(|err| Error::Items(err.to_string()))?;
        Self::new(file.items.into_iter().map(RailItem::from).collect())
    }

    /// Reads and parses an item file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// The four reactions of the "how it works" section.
    #[must_use]
    pub fn how_it_works() -> Self {
        use TokenKind::{Base, Neutron, Proton};

        Self(vec![
            RailItem::new("fission", "Fission")
                .with_meta("Base → Neutron + Proton")
                .with_description(
                    "Split base tokens into neutrons and protons, unlocking the dual-token \
                     structure and flexible DeFi strategies.",
                )
                .with_visual(Visual::TokenFlow(TokenFlow::new(
                    vec![Base],
                    vec![Neutron, Proton],
                ))),
            RailItem::new("fusion", "Fusion")
                .with_meta("Neutron + Proton → Base")
                .with_description(
                    "Merge neutrons and protons back into base tokens, restoring the original \
                     asset with precision and efficiency.",
                )
                .with_visual(Visual::TokenFlow(TokenFlow::new(
                    vec![Neutron, Proton],
                    vec![Base],
                ))),
            RailItem::new("beta-plus", "Beta Decay β+")
                .with_meta("Proton → Neutron")
                .with_description(
                    "Convert protons into neutrons; fees adjust dynamically from reserve \
                     balance, optimizing protocol economics.",
                )
                .with_visual(Visual::TokenFlow(TokenFlow::new(vec![Proton], vec![Neutron]))),
            RailItem::new("beta-minus", "Beta Decay β−")
                .with_meta("Neutron → Proton")
                .with_description(
                    "Transform neutrons into protons, adjusting your position in the \
                     dual-token system seamlessly.",
                )
                .with_visual(Visual::TokenFlow(TokenFlow::new(vec![Neutron], vec![Proton]))),
        ])
    }

    /// Number of items, never zero.
    #[must_use]
    pub fn count(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.0.len()).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn get(&self, index: usize) -> Option<&RailItem> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RailItem> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_collection_is_rejected() {
        assert!(matches!(RailItems::new(Vec::new()), Err(Error::EmptyRail)));
    }

    #[test]
    fn how_it_works_has_four_token_flows() {
        let items = RailItems::how_it_works();
        assert_eq!(items.count().get(), 4);
        assert!(items
            .iter()
            .all(|item| matches!(item.visual(), Some(Visual::TokenFlow(_)))));
        assert_eq!(items.get(0).map(RailItem::title), Some("Fission"));
        assert_eq!(
            items.get(3).map(|item| item.id().clone()),
            Some(ItemId::from("beta-minus"))
        );
    }

    #[test]
    fn flow_shape_classifies_split_merge_and_direct() {
        use TokenKind::{Base, Neutron, Proton};
        assert_eq!(
            TokenFlow::new(vec![Base], vec![Neutron, Proton]).shape(),
            FlowShape::Split
        );
        assert_eq!(
            TokenFlow::new(vec![Neutron, Proton], vec![Base]).shape(),
            FlowShape::Merge
        );
        assert_eq!(
            TokenFlow::new(vec![Proton], vec![Neutron]).shape(),
            FlowShape::Direct
        );
        assert_eq!(TokenFlow::new(vec![], vec![]).shape(), FlowShape::Direct);
    }

    #[test]
    fn token_file_parses_visuals_and_targets() {
        let content = r#"
            [[items]]
            id = "fission"
            title = "Fission"
            input_tokens = ["base"]
            output_tokens = ["neutron", "proton"]
            image = "ignored.png"

            [[items]]
            id = 7
            title = "Whitepaper"
            image = "whitepaper1.png"
            href = "/whitepaper"

            [[items]]
            id = "plain"
            title = "Plain"
        "#;

        let items = RailItems::from_toml_str(content).expect("items should parse");
        assert_eq!(items.count().get(), 3);

        let first = items.get(0).expect("first item");
        assert!(matches!(
            first.visual(),
            Some(Visual::TokenFlow(flow)) if flow.shape() == FlowShape::Split
        ));

        let second = items.get(1).expect("second item");
        assert_eq!(second.id(), &ItemId::Number(7));
        assert_eq!(
            second.visual(),
            Some(&Visual::Image("whitepaper1.png".to_string()))
        );
        assert_eq!(second.target().map(NavTarget::href), Some("/whitepaper"));

        let third = items.get(2).expect("third item");
        assert!(third.visual().is_none());
        assert!(third.description().is_none());
    }

    #[test]
    fn token_file_without_items_is_empty_rail() {
        let result = RailItems::from_toml_str("");
        assert!(matches!(result, Err(Error::EmptyRail)));
    }

    #[test]
    fn token_file_with_unknown_token_fails() {
        let content = r#"
            [[items]]
            id = "bad"
            title = "Bad"
            input_tokens = ["electron"]
            output_tokens = ["base"]
        "#;
        assert!(matches!(
            RailItems::from_toml_str(content),
            Err(Error::Items(_))
        ));
    }

    #[test]
    fn load_from_path_reads_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("items.toml");
        fs::write(&path, "[[items]]\nid = \"a\"\ntitle = \"A\"\n").expect("failed to write");

        let items = RailItems::load_from_path(&path).expect("items should load");
        assert_eq!(items.get(0).map(RailItem::title), Some("A"));
    }

    #[test]
    fn item_id_display() {
        assert_eq!(ItemId::from(42_i64).to_string(), "42");
        assert_eq!(ItemId::from("fusion").to_string(), "fusion");
    }
}
