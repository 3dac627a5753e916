//! Elementary relation vocabulary and chain tokenization

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{KinshipError, Result};

/// Connective written between hops ("妻的父")
pub const CONNECTIVE: char = '的';

/// Two-character display form of the husband token
pub const HUSBAND_SYNONYM: &str = "丈夫";

/// Gender of a relation or kinship node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    /// Only the root ("我") carries no gender
    Unknown,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the ten atomic kinship hops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementaryRelation {
    Father,
    Mother,
    Husband,
    Wife,
    ElderBrother,
    YoungerBrother,
    ElderSister,
    YoungerSister,
    Son,
    Daughter,
}

impl ElementaryRelation {
    pub const ALL: [ElementaryRelation; 10] = [
        Self::Father,
        Self::Mother,
        Self::Husband,
        Self::Wife,
        Self::ElderBrother,
        Self::YoungerBrother,
        Self::ElderSister,
        Self::YoungerSister,
        Self::Son,
        Self::Daughter,
    ];

    /// Canonical single-character token
    pub fn symbol(&self) -> char {
        match self {
            Self::Father => '父',
            Self::Mother => '母',
            Self::Husband => '夫',
            Self::Wife => '妻',
            Self::ElderBrother => '兄',
            Self::YoungerBrother => '弟',
            Self::ElderSister => '姐',
            Self::YoungerSister => '妹',
            Self::Son => '子',
            Self::Daughter => '女',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.symbol() == symbol)
    }

    /// Form shown to users; the husband token expands to "丈夫"
    pub fn display_form(&self) -> &'static str {
        match self {
            Self::Father => "父",
            Self::Mother => "母",
            Self::Husband => HUSBAND_SYNONYM,
            Self::Wife => "妻",
            Self::ElderBrother => "兄",
            Self::YoungerBrother => "弟",
            Self::ElderSister => "姐",
            Self::YoungerSister => "妹",
            Self::Son => "子",
            Self::Daughter => "女",
        }
    }

    pub fn gender(&self) -> Gender {
        match self {
            Self::Father
            | Self::Husband
            | Self::ElderBrother
            | Self::YoungerBrother
            | Self::Son => Gender::Male,
            Self::Mother
            | Self::Wife
            | Self::ElderSister
            | Self::YoungerSister
            | Self::Daughter => Gender::Female,
        }
    }

    /// Generation change applied by this hop: +1 parents, -1 children, 0 otherwise
    pub fn generation_delta(&self) -> i32 {
        match self {
            Self::Father | Self::Mother => 1,
            Self::Son | Self::Daughter => -1,
            _ => 0,
        }
    }

    pub fn is_spouse(&self) -> bool {
        matches!(self, Self::Husband | Self::Wife)
    }

    /// Parent or child hop
    pub fn is_lineal(&self) -> bool {
        matches!(self, Self::Father | Self::Mother | Self::Son | Self::Daughter)
    }

    /// Whether this hop replaces the gender carried along a chain.
    ///
    /// Sibling hops keep the inherited gender; spouse and lineal hops take
    /// their own.
    pub fn overrides_inherited_gender(&self) -> bool {
        self.is_spouse() || self.is_lineal()
    }
}

impl fmt::Display for ElementaryRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// Serialized as the single-character token so snapshots read like the UI
impl Serialize for ElementaryRelation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_char(self.symbol())
    }
}

impl<'de> Deserialize<'de> for ElementaryRelation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let symbol = char::deserialize(deserializer)?;
        Self::from_symbol(symbol)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown relation token: {symbol}")))
    }
}

/// Byte order mark left at the front of text pasted from some editors
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Remove every whitespace character, including ones inside the chain.
///
/// U+FEFF is not Unicode whitespace but is invisible, so it goes too.
pub fn strip_whitespace(text: &str) -> String {
    text.chars()
        .filter(|&c| !c.is_whitespace() && c != BYTE_ORDER_MARK)
        .collect()
}

/// Rewrite every "丈夫" into the canonical "夫" token
pub fn canonicalize(text: &str) -> String {
    text.replace(HUSBAND_SYNONYM, &ElementaryRelation::Husband.symbol().to_string())
}

/// A non-empty sequence of hops outward from self
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationChain(Vec<ElementaryRelation>);

impl RelationChain {
    /// Tokenize chain text, silently dropping anything outside the vocabulary.
    ///
    /// The husband synonym is canonicalized first so that "丈夫" yields a
    /// single hop.
    pub fn tokenize(text: &str) -> Vec<ElementaryRelation> {
        canonicalize(&strip_whitespace(text))
            .chars()
            .filter(|c| *c != CONNECTIVE)
            .filter_map(ElementaryRelation::from_symbol)
            .collect()
    }

    pub fn parse(text: &str) -> Result<Self> {
        let relations = Self::tokenize(text);
        if relations.is_empty() {
            return Err(KinshipError::UnrecognizedChain(text.to_string()));
        }
        Ok(Self(relations))
    }

    pub fn relations(&self) -> &[ElementaryRelation] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Canonical key form ("夫的父"), as used by the override table
    pub fn canonical_text(&self) -> String {
        let mut text = String::new();
        for (i, relation) in self.0.iter().enumerate() {
            if i > 0 {
                text.push(CONNECTIVE);
            }
            text.push(relation.symbol());
        }
        text
    }
}

impl fmt::Display for RelationChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, relation) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{CONNECTIVE}")?;
            }
            f.write_str(relation.display_form())?;
        }
        Ok(())
    }
}

/// Render chain text for display: hops joined by "的", husband shown as "丈夫"
pub fn format_chain(text: &str) -> String {
    RelationChain::tokenize(text)
        .iter()
        .map(|r| r.display_form())
        .collect::<Vec<_>>()
        .join(&CONNECTIVE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ElementaryRelation::*;

    #[test]
    fn test_vocabulary_is_closed() {
        for relation in ElementaryRelation::ALL {
            assert_eq!(ElementaryRelation::from_symbol(relation.symbol()), Some(relation));
        }
        assert_eq!(ElementaryRelation::from_symbol('的'), None);
        assert_eq!(ElementaryRelation::from_symbol('丈'), None);
    }

    #[test]
    fn test_fixed_gender_and_generation() {
        assert_eq!(Father.gender(), Gender::Male);
        assert_eq!(Father.generation_delta(), 1);
        assert_eq!(Wife.gender(), Gender::Female);
        assert_eq!(Wife.generation_delta(), 0);
        assert_eq!(Daughter.generation_delta(), -1);
        assert!(ElementaryRelation::ALL
            .iter()
            .all(|r| (-1..=1).contains(&r.generation_delta())));
    }

    #[test]
    fn test_gender_override_rule() {
        assert!(Husband.overrides_inherited_gender());
        assert!(Mother.overrides_inherited_gender());
        assert!(Son.overrides_inherited_gender());
        assert!(!ElderSister.overrides_inherited_gender());
        assert!(!YoungerBrother.overrides_inherited_gender());
    }

    #[test]
    fn test_tokenize_drops_unknown_characters() {
        assert_eq!(RelationChain::tokenize("妻的父"), vec![Wife, Father]);
        assert_eq!(RelationChain::tokenize("妻 x的 父?"), vec![Wife, Father]);
        assert_eq!(RelationChain::tokenize("丈夫的母"), vec![Husband, Mother]);
        assert!(RelationChain::tokenize("hello").is_empty());
    }

    #[test]
    fn test_parse_rejects_empty_chain() {
        assert!(matches!(
            RelationChain::parse("的的"),
            Err(KinshipError::UnrecognizedChain(_))
        ));
        assert!(RelationChain::parse("").is_err());

        let chain = RelationChain::parse("父的兄的子").unwrap();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.relations(), &[Father, ElderBrother, Son]);
    }

    #[test]
    fn test_canonical_husband_token() {
        assert_eq!(canonicalize("丈夫的父"), "夫的父");
        assert_eq!(canonicalize("父的丈夫的丈夫"), "父的夫的夫");
        assert_eq!(strip_whitespace(" 妻 的\t父\u{3000}"), "妻的父");
    }

    #[test]
    fn test_strip_byte_order_mark() {
        assert_eq!(strip_whitespace("\u{FEFF}妻的父"), "妻的父");
        assert_eq!(strip_whitespace("\u{FEFF} \u{FEFF}"), "");
        assert_eq!(RelationChain::tokenize("\u{FEFF}丈夫的母"), vec![Husband, Mother]);
    }

    #[test]
    fn test_display_forms() {
        let chain = RelationChain::parse("夫的 父").unwrap();
        assert_eq!(chain.to_string(), "丈夫的父");
        assert_eq!(chain.canonical_text(), "夫的父");
        assert_eq!(format_chain("妻的兄的夫"), "妻的兄的丈夫");
        assert_eq!(format_chain("???"), "");
    }
}
