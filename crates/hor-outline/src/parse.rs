//! Sidebars file decoding.
//!
//! Accepted item forms, mirroring the usual sidebars syntax:
//!
//! ```yaml
//! someSidebar:
//!   Fundamentals:
//!     - 01-00-WhatIsReact                 # doc id shorthand
//!     - type: doc                         # explicit doc
//!       id: Props
//!       label: Props in depth
//!     - Labs A:                           # group shorthand; several keys
//!         - JavaScript: [labs/js/Intro]   #   become sibling groups
//!     - type: category                    # explicit group
//!       label: Testing
//!       collapsed: false
//!       items: [Testing]
//!     - type: link
//!       label: Starter Files
//!       href: https://github.com/example/starter
//! ```
//!
//! Map order is preserved everywhere. Repeated section names are kept so
//! that validation can report them; repeated sidebar names are rejected
//! here.

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::error::ParseError;
use crate::model::{Group, Leaf, Node, Outline, Section, Sidebars};

/// Item as written in the file, before conversion to [`Node`].
#[derive(Deserialize)]
#[serde(untagged)]
enum RawItem {
    Id(ScalarId),
    Tagged(TaggedItem),
    Shorthand(OrderedMap<Vec<RawItem>>),
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TaggedItem {
    Doc {
        id: String,
        #[serde(default)]
        label: Option<String>,
    },
    Link {
        label: String,
        href: String,
    },
    Category {
        label: String,
        items: Vec<RawItem>,
        #[serde(default = "default_collapsed")]
        collapsed: bool,
    },
}

fn default_collapsed() -> bool {
    true
}

/// Doc id shorthand. Unquoted YAML numbers (`- 404`) are taken as ids.
///
/// Floats use their shortest display form, so `1.50` becomes `"1.5"`;
/// quote such ids to keep them verbatim.
struct ScalarId(String);

impl<'de> Deserialize<'de> for ScalarId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScalarIdVisitor;

        impl Visitor<'_> for ScalarIdVisitor {
            type Value = ScalarId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a doc id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(ScalarId(v.to_owned()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(ScalarId(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(ScalarId(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(ScalarId(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(ScalarId(v.to_string()))
            }
        }

        deserializer.deserialize_any(ScalarIdVisitor)
    }
}

/// Map decoded as an ordered list of entries, duplicates included.
struct OrderedMap<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

impl RawItem {
    /// Convert into nodes; one shorthand map may produce several groups.
    fn push_into(self, out: &mut Vec<Node>) {
        match self {
            Self::Id(ScalarId(id)) => out.push(Node::Leaf(Leaf::Doc { id, label: None })),
            Self::Tagged(TaggedItem::Doc { id, label }) => {
                out.push(Node::Leaf(Leaf::Doc { id, label }));
            }
            Self::Tagged(TaggedItem::Link { label, href }) => {
                out.push(Node::Leaf(Leaf::Link { label, href }));
            }
            Self::Tagged(TaggedItem::Category {
                label,
                items,
                collapsed,
            }) => out.push(Node::Group(Group {
                label,
                items: convert_items(items),
                collapsed,
            })),
            Self::Shorthand(OrderedMap(groups)) => {
                for (label, items) in groups {
                    out.push(Node::Group(Group {
                        label,
                        items: convert_items(items),
                        collapsed: true,
                    }));
                }
            }
        }
    }
}

fn convert_items(items: Vec<RawItem>) -> Vec<Node> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        item.push_into(&mut out);
    }
    out
}

impl<'de> Deserialize<'de> for Outline {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let OrderedMap(sections) = OrderedMap::<Vec<RawItem>>::deserialize(deserializer)?;
        Ok(Outline::from_sections(
            sections
                .into_iter()
                .map(|(name, items)| Section {
                    name,
                    items: convert_items(items),
                })
                .collect(),
        ))
    }
}

impl<'de> Deserialize<'de> for Sidebars {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let OrderedMap(pairs) = OrderedMap::<Outline>::deserialize(deserializer)?;
        for (i, (name, _)) in pairs.iter().enumerate() {
            if pairs[..i].iter().any(|(earlier, _)| earlier == name) {
                return Err(de::Error::custom(format!("duplicate sidebar '{name}'")));
            }
        }
        Ok(Sidebars::from_pairs(pairs))
    }
}

impl Sidebars {
    /// Decode a sidebars document in JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Json`] on malformed input.
    pub fn from_json_str(content: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Decode a sidebars document in YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Yaml`] on malformed input.
    pub fn from_yaml_str(content: &str) -> Result<Self, ParseError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Read a sidebars file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the file cannot be read, has an unknown
    /// extension, or is malformed.
    pub fn load(path: &Path) -> Result<Self, ParseError> {
        let format = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str,
            Some("yaml" | "yml") => Self::from_yaml_str,
            _ => return Err(ParseError::UnsupportedFormat(path.to_path_buf())),
        };

        let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let sidebars = format(&content)?;
        tracing::debug!(
            path = %path.display(),
            sidebar_count = sidebars.len(),
            "Loaded sidebars"
        );
        Ok(sidebars)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SIDEBARS_YAML: &str = r"
someSidebar:
  Fundamentals:
    - 01-00-WhatIsReact
    - 13.1-ReactHookForm
    - Labs A:
        - JavaScript:
            - labs/js/Introduction
          TypeScript:
            - labs/ts/Introduction
    - Props
  Labs:
    - JavaScript:
        - labs/js/Introduction
        - type: link
          label: Starter Files
          href: https://github.com/craigmckeachie/react-starter-files
  Gatsby:
    - Concepts: [gatsby/concepts/Overview]
      Labs: [gatsby/labs/Overview]
";

    #[test]
    fn test_yaml_shorthand_structure() {
        let sidebars = Sidebars::from_yaml_str(SIDEBARS_YAML).unwrap();
        let outline = sidebars.get("someSidebar").unwrap();

        let expected = Outline::new()
            .with_section(
                "Fundamentals",
                vec![
                    "01-00-WhatIsReact".into(),
                    "13.1-ReactHookForm".into(),
                    Node::group(
                        "Labs A",
                        vec![
                            Node::group("JavaScript", vec!["labs/js/Introduction".into()]),
                            Node::group("TypeScript", vec!["labs/ts/Introduction".into()]),
                        ],
                    ),
                    "Props".into(),
                ],
            )
            .with_section(
                "Labs",
                vec![Node::group(
                    "JavaScript",
                    vec![
                        "labs/js/Introduction".into(),
                        Node::link(
                            "Starter Files",
                            "https://github.com/craigmckeachie/react-starter-files",
                        ),
                    ],
                )],
            )
            .with_section(
                "Gatsby",
                vec![
                    Node::group("Concepts", vec!["gatsby/concepts/Overview".into()]),
                    Node::group("Labs", vec!["gatsby/labs/Overview".into()]),
                ],
            );

        assert_eq!(outline, &expected);
    }

    #[test]
    fn test_json_tagged_forms() {
        let json = r#"{
            "docs": {
                "Advanced": [
                    {"type": "doc", "id": "CustomHooks", "label": "Custom Hooks"},
                    {"type": "category", "label": "Testing", "collapsed": false,
                     "items": ["Testing"]}
                ]
            }
        }"#;

        let sidebars = Sidebars::from_json_str(json).unwrap();
        let section = &sidebars.get("docs").unwrap().sections()[0];

        assert_eq!(
            section.items,
            vec![
                Node::Leaf(Leaf::Doc {
                    id: "CustomHooks".to_owned(),
                    label: Some("Custom Hooks".to_owned()),
                }),
                Node::Group(Group {
                    label: "Testing".to_owned(),
                    items: vec!["Testing".into()],
                    collapsed: false,
                }),
            ]
        );
    }

    #[test]
    fn test_json_preserves_duplicate_sections() {
        let json = r#"{"s": {"A": ["x"], "B": ["y"], "A": ["z"]}}"#;

        let sidebars = Sidebars::from_json_str(json).unwrap();
        let names: Vec<_> = sidebars
            .get("s")
            .unwrap()
            .sections()
            .iter()
            .map(|s| s.name.as_str())
            .collect();

        assert_eq!(names, vec!["A", "B", "A"]);
    }

    #[test]
    fn test_json_duplicate_sidebar_rejected() {
        let json = r#"{"s": {"A": ["x"]}, "s": {"B": ["y"]}}"#;

        let err = Sidebars::from_json_str(json).unwrap_err();

        assert!(matches!(err, ParseError::Json(_)));
        assert!(err.to_string().contains("duplicate sidebar 's'"));
    }

    #[test]
    fn test_empty_section_parses() {
        let sidebars = Sidebars::from_json_str(r#"{"s": {"Foo": []}}"#).unwrap();

        assert!(sidebars.get("s").unwrap().sections()[0].items.is_empty());
    }

    #[test]
    fn test_sidebar_order_preserved() {
        let yaml = "zeta:\n  A: [a]\nalpha:\n  B: [b]\n";

        let sidebars = Sidebars::from_yaml_str(yaml).unwrap();

        assert_eq!(sidebars.names().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_malformed_item_rejected() {
        let err = Sidebars::from_json_str(r#"{"s": {"A": [true]}}"#).unwrap_err();

        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn test_unquoted_numeric_ids() {
        let sidebars = Sidebars::from_yaml_str("s:\n  A: [404, 1.5, '007']\n").unwrap();

        let ids: Vec<_> = sidebars.get("s").unwrap().doc_ids().collect();

        assert_eq!(ids, vec!["404", "1.5", "007"]);
    }

    #[test]
    fn test_json_numeric_id() {
        let sidebars = Sidebars::from_json_str(r#"{"s": {"Errors": [404]}}"#).unwrap();

        assert_eq!(sidebars.get("s").unwrap().doc_ids().collect::<Vec<_>>(), vec!["404"]);
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let yaml_path = dir.path().join("sidebars.yml");
        std::fs::write(&yaml_path, "main:\n  Redux: [Redux, ReactRedux]\n").unwrap();
        let json_path = dir.path().join("sidebars.json");
        std::fs::write(&json_path, r#"{"main": {"Redux": ["Redux", "ReactRedux"]}}"#).unwrap();

        let from_yaml = Sidebars::load(&yaml_path).unwrap();
        let from_json = Sidebars::load(&json_path).unwrap();

        assert_eq!(from_yaml, from_json);
        assert_eq!(from_yaml.len(), 1);
    }

    #[test]
    fn test_load_unsupported_extension() {
        let err = Sidebars::load(Path::new("sidebars.js")).unwrap_err();

        assert!(matches!(err, ParseError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Sidebars::load(Path::new("/nonexistent/sidebars.yaml")).unwrap_err();

        assert!(matches!(err, ParseError::Io { .. }));
    }
}
