//! Static wiring of the kinship graph
//!
//! Stages are applied in order. Within a stage every node is added before
//! any edge, so an edge may only name titles from its own or earlier stages.
//! Edge order matters: traversal follows the first matching edge out of a
//! node, so an edge listed earlier wins over a later one with the same hop.

use crate::relation::ElementaryRelation::{self, *};
use crate::relation::Gender;

/// (title, gender, generation)
pub(crate) type NodeSpec = (&'static str, Gender, i32);

/// (from, to, hop, reverse hop)
pub(crate) type EdgeSpec = (
    &'static str,
    &'static str,
    ElementaryRelation,
    Option<ElementaryRelation>,
);

pub(crate) struct Stage {
    pub name: &'static str,
    pub nodes: &'static [NodeSpec],
    pub edges: &'static [EdgeSpec],
}

const M: Gender = Gender::Male;
const F: Gender = Gender::Female;
const U: Gender = Gender::Unknown;

pub(crate) const STAGES: [Stage; 4] = [
    IMMEDIATE_FAMILY,
    EXTENDED_FAMILY,
    IN_LAWS_AND_COUSINS,
    COLLATERAL_LINES,
];

/// Self plus every one-hop relative
const IMMEDIATE_FAMILY: Stage = Stage {
    name: "immediate family",
    nodes: &[
        ("我", U, 0),
        ("父亲", M, 1),
        ("母亲", F, 1),
        ("丈夫", M, 0),
        ("妻子", F, 0),
        ("哥哥", M, 0),
        ("弟弟", M, 0),
        ("姐姐", F, 0),
        ("妹妹", F, 0),
        ("儿子", M, -1),
        ("女儿", F, -1),
    ],
    edges: &[
        ("我", "父亲", Father, None),
        ("我", "母亲", Mother, None),
        ("父亲", "我", Son, Some(Father)),
        ("母亲", "我", Daughter, Some(Mother)),
        ("我", "丈夫", Husband, None),
        ("我", "妻子", Wife, None),
        ("丈夫", "我", Wife, Some(Husband)),
        ("妻子", "我", Husband, Some(Wife)),
        ("我", "哥哥", ElderBrother, None),
        ("我", "弟弟", YoungerBrother, None),
        ("我", "姐姐", ElderSister, None),
        ("我", "妹妹", YoungerSister, None),
        ("我", "儿子", Son, None),
        ("我", "女儿", Daughter, None),
        ("儿子", "我", Father, Some(Son)),
        ("女儿", "我", Mother, Some(Daughter)),
    ],
};

/// Grandparents, parents' siblings, spouse's family, siblings' and children's households
const EXTENDED_FAMILY: Stage = Stage {
    name: "extended family",
    nodes: &[
        ("爷爷", M, 2),
        ("奶奶", F, 2),
        ("伯父", M, 1),
        ("叔父", M, 1),
        ("姑妈", F, 1),
        ("外公", M, 2),
        ("外婆", F, 2),
        ("舅舅", M, 1),
        ("姨妈", F, 1),
        ("岳父", M, 1),
        ("岳母", F, 1),
        ("公公", M, 1),
        ("婆婆", F, 1),
        ("嫂子", F, 0),
        ("弟媳", F, 0),
        ("姐夫", M, 0),
        ("妹夫", M, 0),
        ("侄子", M, -1),
        ("侄女", F, -1),
        ("外甥", M, -1),
        ("外甥女", F, -1),
        ("儿媳", F, -1),
        ("女婿", M, -1),
        ("孙子", M, -2),
        ("孙女", F, -2),
        ("外孙", M, -2),
        ("外孙女", F, -2),
        ("大舅子", M, 0),
        ("小舅子", M, 0),
        ("大姨子", F, 0),
        ("小姨子", F, 0),
        ("大伯", M, 0),
        ("小叔", M, 0),
        ("大姑", F, 0),
        ("小姑", F, 0),
    ],
    edges: &[
        ("父亲", "爷爷", Father, None),
        ("父亲", "奶奶", Mother, None),
        ("父亲", "伯父", ElderBrother, None),
        ("父亲", "叔父", YoungerBrother, None),
        ("父亲", "姑妈", ElderSister, None),
        ("母亲", "外公", Father, None),
        ("母亲", "外婆", Mother, None),
        ("母亲", "舅舅", ElderBrother, None),
        ("母亲", "姨妈", ElderSister, None),
        ("妻子", "岳父", Father, None),
        ("妻子", "岳母", Mother, None),
        ("丈夫", "公公", Father, None),
        ("丈夫", "婆婆", Mother, None),
        ("哥哥", "嫂子", Wife, None),
        ("弟弟", "弟媳", Wife, None),
        ("姐姐", "姐夫", Husband, None),
        ("妹妹", "妹夫", Husband, None),
        ("哥哥", "侄子", Son, None),
        ("哥哥", "侄女", Daughter, None),
        ("姐姐", "外甥", Son, None),
        ("姐姐", "外甥女", Daughter, None),
        ("儿子", "儿媳", Wife, None),
        ("女儿", "女婿", Husband, None),
        ("儿子", "孙子", Son, None),
        ("儿子", "孙女", Daughter, None),
        ("女儿", "外孙", Son, None),
        ("女儿", "外孙女", Daughter, None),
        ("妻子", "大舅子", ElderBrother, None),
        ("妻子", "小舅子", YoungerBrother, None),
        ("妻子", "大姨子", ElderSister, None),
        ("妻子", "小姨子", YoungerSister, None),
        ("丈夫", "大伯", ElderBrother, None),
        ("丈夫", "小叔", YoungerBrother, None),
        ("丈夫", "大姑", ElderSister, None),
        ("丈夫", "小姑", YoungerSister, None),
        ("母亲", "父亲", Husband, None),
        ("父亲", "母亲", Wife, None),
    ],
};

/// Spouses and children of the previous stage, cousins, great-grandparents
const IN_LAWS_AND_COUSINS: Stage = Stage {
    name: "in-laws and cousins",
    nodes: &[
        ("大舅嫂", F, 0),
        ("小舅嫂", F, 0),
        ("大姨夫", M, 0),
        ("小姨夫", M, 0),
        ("内侄", M, -1),
        ("内侄女", F, -1),
        ("大伯母", F, 0),
        ("小婶", F, 0),
        ("大姑父", M, 0),
        ("小姑父", M, 0),
        ("伯母", F, 1),
        ("婶婶", F, 1),
        ("姑父", M, 1),
        ("舅母", F, 1),
        ("姨父", M, 1),
        ("堂兄", M, 0),
        ("堂弟", M, 0),
        ("堂姐", F, 0),
        ("堂妹", F, 0),
        ("表兄", M, 0),
        ("表弟", M, 0),
        ("表姐", F, 0),
        ("表妹", F, 0),
        ("太爷爷", M, 3),
        ("太奶奶", F, 3),
        ("太外公", M, 3),
        ("太外婆", F, 3),
    ],
    edges: &[
        ("大舅子", "大舅嫂", Wife, None),
        ("小舅子", "小舅嫂", Wife, None),
        ("大姨子", "大姨夫", Husband, None),
        ("小姨子", "小姨夫", Husband, None),
        ("大舅子", "内侄", Son, None),
        ("大舅子", "内侄女", Daughter, None),
        ("小舅子", "内侄", Son, None),
        ("小舅子", "内侄女", Daughter, None),
        ("大伯", "大伯母", Wife, None),
        ("小叔", "小婶", Wife, None),
        ("大姑", "大姑父", Husband, None),
        ("小姑", "小姑父", Husband, None),
        ("伯父", "伯母", Wife, None),
        ("叔父", "婶婶", Wife, None),
        ("姑妈", "姑父", Husband, None),
        ("舅舅", "舅母", Wife, None),
        ("姨妈", "姨父", Husband, None),
        ("伯父", "堂兄", Son, None),
        ("伯父", "堂弟", Son, None),
        ("伯父", "堂姐", Daughter, None),
        ("伯父", "堂妹", Daughter, None),
        ("叔父", "堂兄", Son, None),
        ("叔父", "堂弟", Son, None),
        ("叔父", "堂姐", Daughter, None),
        ("叔父", "堂妹", Daughter, None),
        ("姑妈", "表兄", Son, None),
        ("姑妈", "表弟", Son, None),
        ("姑妈", "表姐", Daughter, None),
        ("姑妈", "表妹", Daughter, None),
        ("舅舅", "表兄", Son, None),
        ("舅舅", "表弟", Son, None),
        ("舅舅", "表姐", Daughter, None),
        ("舅舅", "表妹", Daughter, None),
        ("姨妈", "表兄", Son, None),
        ("姨妈", "表弟", Son, None),
        ("姨妈", "表姐", Daughter, None),
        ("姨妈", "表妹", Daughter, None),
        ("爷爷", "太爷爷", Father, None),
        ("奶奶", "太奶奶", Mother, None),
        ("外公", "太外公", Father, None),
        ("外婆", "太外婆", Mother, None),
    ],
};

/// Younger-sibling lines, third-generation descendants and the spouses'
/// collateral elders. Edges here only add hops a node did not have yet.
const COLLATERAL_LINES: Stage = Stage {
    name: "collateral lines",
    nodes: &[
        ("侄媳", F, -1),
        ("侄女婿", M, -1),
        ("外甥媳", F, -1),
        ("外甥女婿", M, -1),
        ("孙媳", F, -2),
        ("孙女婿", M, -2),
        ("外孙媳", F, -2),
        ("外孙女婿", M, -2),
        ("曾孙", M, -3),
        ("曾孙女", F, -3),
        ("外曾孙", M, -3),
        ("外曾孙女", F, -3),
        ("伯公", M, 1),
        ("叔公", M, 1),
        ("姑婆", F, 1),
        ("舅公", M, 1),
        ("姨婆", F, 1),
        ("岳伯父", M, 1),
        ("岳叔父", M, 1),
        ("岳姑妈", F, 1),
        ("岳舅父", M, 1),
        ("岳姨妈", F, 1),
    ],
    edges: &[
        ("父亲", "姑妈", YoungerSister, None),
        ("母亲", "舅舅", YoungerBrother, None),
        ("母亲", "姨妈", YoungerSister, None),
        ("弟弟", "侄子", Son, None),
        ("弟弟", "侄女", Daughter, None),
        ("妹妹", "外甥", Son, None),
        ("妹妹", "外甥女", Daughter, None),
        ("大姨子", "外甥", Son, None),
        ("大姨子", "外甥女", Daughter, None),
        ("小姨子", "外甥", Son, None),
        ("小姨子", "外甥女", Daughter, None),
        ("大伯", "侄子", Son, None),
        ("大伯", "侄女", Daughter, None),
        ("小叔", "侄子", Son, None),
        ("小叔", "侄女", Daughter, None),
        ("大姑", "外甥", Son, None),
        ("大姑", "外甥女", Daughter, None),
        ("小姑", "外甥", Son, None),
        ("小姑", "外甥女", Daughter, None),
        ("侄子", "侄媳", Wife, None),
        ("侄女", "侄女婿", Husband, None),
        ("外甥", "外甥媳", Wife, None),
        ("外甥女", "外甥女婿", Husband, None),
        ("孙子", "孙媳", Wife, None),
        ("孙女", "孙女婿", Husband, None),
        ("外孙", "外孙媳", Wife, None),
        ("外孙女", "外孙女婿", Husband, None),
        ("孙子", "曾孙", Son, None),
        ("孙子", "曾孙女", Daughter, None),
        ("孙女", "外曾孙", Son, None),
        ("孙女", "外曾孙女", Daughter, None),
        ("外孙", "外曾孙", Son, None),
        ("外孙", "外曾孙女", Daughter, None),
        ("外孙女", "外曾孙", Son, None),
        ("外孙女", "外曾孙女", Daughter, None),
        ("爷爷", "奶奶", Wife, Some(Husband)),
        ("奶奶", "爷爷", Husband, Some(Wife)),
        ("外公", "外婆", Wife, Some(Husband)),
        ("外婆", "外公", Husband, Some(Wife)),
        ("爷爷", "太奶奶", Mother, None),
        ("奶奶", "太爷爷", Father, None),
        ("外公", "太外婆", Mother, None),
        ("外婆", "太外公", Father, None),
        ("公公", "婆婆", Wife, Some(Husband)),
        ("婆婆", "公公", Husband, Some(Wife)),
        ("岳父", "岳母", Wife, Some(Husband)),
        ("岳母", "岳父", Husband, Some(Wife)),
        ("公公", "伯公", ElderBrother, None),
        ("公公", "叔公", YoungerBrother, None),
        ("公公", "姑婆", ElderSister, None),
        ("公公", "姑婆", YoungerSister, None),
        ("婆婆", "舅公", ElderBrother, None),
        ("婆婆", "舅公", YoungerBrother, None),
        ("婆婆", "姨婆", ElderSister, None),
        ("婆婆", "姨婆", YoungerSister, None),
        ("岳父", "岳伯父", ElderBrother, None),
        ("岳父", "岳叔父", YoungerBrother, None),
        ("岳父", "岳姑妈", ElderSister, None),
        ("岳父", "岳姑妈", YoungerSister, None),
        ("岳母", "岳舅父", ElderBrother, None),
        ("岳母", "岳舅父", YoungerBrother, None),
        ("岳母", "岳姨妈", ElderSister, None),
        ("岳母", "岳姨妈", YoungerSister, None),
    ],
};
