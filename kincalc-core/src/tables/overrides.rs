//! Override table of fixed titles for whole chains

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::relation::canonicalize;

/// Display form of the wife hop that older inputs spelled out
const WIFE_DISPLAY_PREFIX: &str = "妻子的";
const WIFE_CANONICAL_PREFIX: &str = "妻的";

static GLOBAL_OVERRIDES: OnceLock<OverrideTable> = OnceLock::new();

/// Full chains whose title is fixed regardless of graph or arithmetic.
///
/// Keys use the canonical single-character tokens. Every `妻的…` key is
/// also reachable through its `妻子的…` spelling.
const ENTRIES: &[(&str, &str)] = &[
    // wife's family
    ("妻的父", "岳父"),
    ("妻的母", "岳母"),
    ("妻的兄", "大舅子"),
    ("妻的弟", "小舅子"),
    ("妻的姐", "大姨子"),
    ("妻的妹", "小姨子"),
    ("妻的子", "继子"),
    ("妻的女", "继女"),
    ("妻的父的子", "大舅子/小舅子"),
    ("妻的父的兄", "岳伯父"),
    ("妻的父的弟", "岳叔父"),
    ("妻的父的姐", "岳姑妈"),
    ("妻的父的妹", "岳姑妈"),
    ("妻的母的子", "大舅子/小舅子"),
    ("妻的母的兄", "岳舅父"),
    ("妻的母的弟", "岳舅父"),
    ("妻的母的姐", "岳姨妈"),
    ("妻的母的妹", "岳姨妈"),
    ("妻的兄的妻", "大舅嫂"),
    ("妻的弟的妻", "小舅嫂"),
    ("妻的姐的夫", "大姨夫"),
    ("妻的妹的夫", "小姨夫"),
    ("妻的兄的子", "内侄"),
    ("妻的弟的子", "内侄"),
    ("妻的兄的女", "内侄女"),
    ("妻的弟的女", "内侄女"),
    ("妻的姐的子", "外甥"),
    ("妻的妹的子", "外甥"),
    ("妻的姐的女", "外甥女"),
    ("妻的妹的女", "外甥女"),
    // husband's family
    ("夫的父", "公公"),
    ("夫的母", "婆婆"),
    ("夫的兄", "大伯"),
    ("夫的弟", "小叔"),
    ("夫的姐", "大姑"),
    ("夫的妹", "小姑"),
    ("夫的子", "继子"),
    ("夫的女", "继女"),
    ("夫的父的兄", "伯公"),
    ("夫的父的弟", "叔公"),
    ("夫的父的姐", "姑婆"),
    ("夫的父的妹", "姑婆"),
    ("夫的母的兄", "舅公"),
    ("夫的母的弟", "舅公"),
    ("夫的母的姐", "姨婆"),
    ("夫的母的妹", "姨婆"),
    ("夫的兄的妻", "大伯母"),
    ("夫的弟的妻", "小婶"),
    ("夫的姐的夫", "大姑父"),
    ("夫的妹的夫", "小姑父"),
    ("夫的兄的子", "侄子"),
    ("夫的弟的子", "侄子"),
    ("夫的兄的女", "侄女"),
    ("夫的弟的女", "侄女"),
    ("夫的姐的子", "外甥"),
    ("夫的妹的子", "外甥"),
    ("夫的姐的女", "外甥女"),
    ("夫的妹的女", "外甥女"),
    // father's side
    ("父的父", "爷爷"),
    ("父的母", "奶奶"),
    ("父的夫", "父亲"),
    ("父的妻", "母亲"),
    ("父的兄", "伯父"),
    ("父的弟", "叔父"),
    ("父的姐", "姑妈"),
    ("父的妹", "姑妈"),
    ("父的子", "哥哥/弟弟"),
    ("父的女", "姐姐/妹妹"),
    ("父的兄的妻", "伯母"),
    ("父的弟的妻", "婶婶"),
    ("父的姐的夫", "姑父"),
    ("父的妹的夫", "姑父"),
    ("父的兄的子", "堂兄/堂弟"),
    ("父的弟的子", "堂兄/堂弟"),
    ("父的兄的女", "堂姐/堂妹"),
    ("父的弟的女", "堂姐/堂妹"),
    ("父的姐的子", "表兄/表弟"),
    ("父的妹的子", "表兄/表弟"),
    ("父的姐的女", "表姐/表妹"),
    ("父的妹的女", "表姐/表妹"),
    // mother's side
    ("母的父", "外公"),
    ("母的母", "外婆"),
    ("母的夫", "父亲"),
    ("母的妻", "母亲"),
    ("母的兄", "舅舅"),
    ("母的弟", "舅舅"),
    ("母的姐", "姨妈"),
    ("母的妹", "姨妈"),
    ("母的子", "哥哥/弟弟"),
    ("母的女", "姐姐/妹妹"),
    ("母的兄的妻", "舅母"),
    ("母的弟的妻", "舅母"),
    ("母的姐的夫", "姨父"),
    ("母的妹的夫", "姨父"),
    ("母的兄的子", "表兄/表弟"),
    ("母的弟的子", "表兄/表弟"),
    ("母的兄的女", "表姐/表妹"),
    ("母的弟的女", "表姐/表妹"),
    ("母的姐的子", "表兄/表弟"),
    ("母的妹的子", "表兄/表弟"),
    ("母的姐的女", "表姐/表妹"),
    ("母的妹的女", "表姐/表妹"),
    // siblings' households
    ("兄的妻", "嫂子"),
    ("弟的妻", "弟媳"),
    ("兄的夫", "兄夫"),
    ("弟的夫", "弟夫"),
    ("姐的夫", "姐夫"),
    ("妹的夫", "妹夫"),
    ("姐的妻", "姐妻"),
    ("妹的妻", "妹妻"),
    ("兄的子", "侄子"),
    ("弟的子", "侄子"),
    ("兄的女", "侄女"),
    ("弟的女", "侄女"),
    ("姐的子", "外甥"),
    ("妹的子", "外甥"),
    ("姐的女", "外甥女"),
    ("妹的女", "外甥女"),
    ("兄的子的妻", "侄媳"),
    ("弟的子的妻", "侄媳"),
    ("兄的女的夫", "侄女婿"),
    ("弟的女的夫", "侄女婿"),
    ("姐的子的妻", "外甥媳"),
    ("妹的子的妻", "外甥媳"),
    ("姐的女的夫", "外甥女婿"),
    ("妹的女的夫", "外甥女婿"),
    // grandchildren's spouses
    ("子的子的妻", "孙媳"),
    ("子的女的夫", "孙女婿"),
    ("女的子的妻", "外孙媳"),
    ("女的女的夫", "外孙女婿"),
    // great-grandparents
    ("父的父的父", "太爷爷"),
    ("父的父的母", "太奶奶"),
    ("父的母的父", "太爷爷"),
    ("父的母的母", "太奶奶"),
    ("母的父的父", "太外公"),
    ("母的父的母", "太外婆"),
    ("母的母的父", "太外公"),
    ("母的母的母", "太外婆"),
];

/// Literal chain text → title, checked before any other strategy
#[derive(Debug, Clone)]
pub struct OverrideTable {
    entries: HashMap<String, String>,
}

impl OverrideTable {
    pub fn standard() -> Self {
        let mut entries: HashMap<String, String> = ENTRIES
            .iter()
            .map(|&(key, title)| (key.to_string(), title.to_string()))
            .collect();

        let aliases: Vec<_> = ENTRIES
            .iter()
            .filter_map(|&(key, title)| {
                key.strip_prefix(WIFE_CANONICAL_PREFIX)
                    .map(|rest| (format!("{WIFE_DISPLAY_PREFIX}{rest}"), title.to_string()))
            })
            .collect();
        entries.extend(aliases);

        Self { entries }
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn global() -> &'static OverrideTable {
        GLOBAL_OVERRIDES.get_or_init(Self::standard)
    }

    /// Exact lookup of one key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Two-step lookup of whitespace-stripped chain text: the literal form
    /// first, then the form with "丈夫" rewritten to "夫".
    pub fn lookup(&self, stripped: &str) -> Option<&str> {
        if let Some(title) = self.get(stripped) {
            debug!("Override hit on literal key: {}", stripped);
            return Some(title);
        }

        let canonical = canonicalize(stripped);
        if canonical != stripped {
            if let Some(title) = self.get(&canonical) {
                debug!("Override hit on canonical key: {}", canonical);
                return Some(title);
            }
        }

        None
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
