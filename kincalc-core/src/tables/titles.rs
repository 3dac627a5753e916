//! Title table for the generation/gender arithmetic fallback

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::relation::ElementaryRelation::{self, *};
use crate::relation::Gender;

/// Returned when no generic label fits the generation
pub const UNKNOWN_RELATION: &str = "未知关系";

static GLOBAL_TITLES: OnceLock<TitleTable> = OnceLock::new();

/// Lookup key for the arithmetic fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TitleKey {
    pub generation: i32,
    pub gender: Gender,
    /// Last hop of the chain
    pub relation: ElementaryRelation,
}

impl TitleKey {
    pub fn new(generation: i32, gender: Gender, relation: ElementaryRelation) -> Self {
        Self {
            generation,
            gender,
            relation,
        }
    }
}

const M: Gender = Gender::Male;
const F: Gender = Gender::Female;

const ENTRIES: &[(i32, Gender, ElementaryRelation, &str)] = &[
    // elders, male
    (2, M, Father, "太爷爷"),
    (2, M, Mother, "太外公"),
    (1, M, Father, "爷爷"),
    (1, M, Mother, "外公"),
    (1, M, ElderBrother, "伯父"),
    (1, M, YoungerBrother, "叔父"),
    (1, M, ElderSister, "姑父"),
    (1, M, YoungerSister, "姑父"),
    (1, M, Son, "父亲"),
    (1, M, Daughter, "父亲"),
    (1, M, Husband, "公公"),
    (1, M, Wife, "岳父"),
    // elders, female
    (2, F, Father, "太奶奶"),
    (2, F, Mother, "太外婆"),
    (1, F, Father, "奶奶"),
    (1, F, Mother, "外婆"),
    (1, F, ElderBrother, "伯母"),
    (1, F, YoungerBrother, "婶婶"),
    (1, F, ElderSister, "姑妈"),
    (1, F, YoungerSister, "姑妈"),
    (1, F, Son, "母亲"),
    (1, F, Daughter, "母亲"),
    (1, F, Husband, "婆婆"),
    (1, F, Wife, "岳母"),
    // peers, male
    (0, M, ElderBrother, "哥哥"),
    (0, M, YoungerBrother, "弟弟"),
    (0, M, ElderSister, "姐夫"),
    (0, M, YoungerSister, "妹夫"),
    (0, M, Husband, "丈夫"),
    (0, M, Wife, "妻子"),
    (0, M, Father, "父亲"),
    (0, M, Mother, "母亲"),
    // peers, female
    (0, F, ElderSister, "姐姐"),
    (0, F, YoungerSister, "妹妹"),
    (0, F, ElderBrother, "嫂子"),
    (0, F, YoungerBrother, "弟媳"),
    (0, F, Husband, "丈夫"),
    (0, F, Wife, "妻子"),
    (0, F, Father, "父亲"),
    (0, F, Mother, "母亲"),
    // juniors, male
    (-1, M, Son, "儿子"),
    (-1, M, Daughter, "女婿"),
    (-1, M, ElderBrother, "侄子"),
    (-1, M, YoungerBrother, "侄子"),
    (-1, M, ElderSister, "外甥"),
    (-1, M, YoungerSister, "外甥"),
    // juniors, female
    (-1, F, Son, "儿媳"),
    (-1, F, Daughter, "女儿"),
    (-1, F, ElderBrother, "侄女"),
    (-1, F, YoungerBrother, "侄女"),
    (-1, F, ElderSister, "外甥女"),
    (-1, F, YoungerSister, "外甥女"),
];

/// (generation, gender, last hop) → title, consulted by the arithmetic fallback
#[derive(Debug, Clone)]
pub struct TitleTable {
    entries: HashMap<TitleKey, String>,
}

impl TitleTable {
    pub fn standard() -> Self {
        Self::from_entries(
            ENTRIES
                .iter()
                .map(|&(generation, gender, relation, title)| {
                    (TitleKey::new(generation, gender, relation), title)
                }),
        )
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (TitleKey, S)>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }

    pub fn global() -> &'static TitleTable {
        GLOBAL_TITLES.get_or_init(Self::standard)
    }

    pub fn get(&self, key: &TitleKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Label synthesized from generation and gender alone
pub fn generic_title(generation: i32, gender: Gender) -> &'static str {
    let male = gender == Gender::Male;
    match generation {
        g if g > 1 => {
            if male {
                "太爷爷辈"
            } else {
                "太奶奶辈"
            }
        }
        1 => {
            if male {
                "长辈（男）"
            } else {
                "长辈（女）"
            }
        }
        0 => {
            if male {
                "同辈（男）"
            } else {
                "同辈（女）"
            }
        }
        -1 => {
            if male {
                "晚辈（男）"
            } else {
                "晚辈（女）"
            }
        }
        _ => UNKNOWN_RELATION,
    }
}
