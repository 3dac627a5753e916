//! Integration tests for chain resolution
//!
//! These tests drive the public API end to end:
//! - Strategy priority (override, graph, arithmetic)
//! - Husband synonym and whitespace handling
//! - Sentinel messages for unusable input
//! - Determinism and concurrent use of the shared graph

use kincalc_core::{
    fold_chain, format_chain, generic_title, resolve, resolve_detailed, ElementaryRelation,
    KinshipGraph, OverrideTable, ResolutionSource, TitleTable, COMPUTATION_ERROR_SENTINEL,
    EMPTY_INPUT_SENTINEL, SELF_TITLE, UNKNOWN_RELATION, UNRECOGNIZED_SENTINEL,
};
use std::collections::{HashSet, VecDeque};

/// Every chain of one to `max_len` hops, in canonical text form
fn all_chains(max_len: usize) -> Vec<Vec<ElementaryRelation>> {
    let mut chains: Vec<Vec<ElementaryRelation>> = vec![vec![]];
    let mut out = Vec::new();
    for _ in 0..max_len {
        chains = chains
            .iter()
            .flat_map(|prefix| {
                ElementaryRelation::ALL.into_iter().map(move |r| {
                    let mut next = prefix.clone();
                    next.push(r);
                    next
                })
            })
            .collect();
        out.extend(chains.iter().cloned());
    }
    out
}

fn chain_text(chain: &[ElementaryRelation]) -> String {
    chain
        .iter()
        .map(|r| r.symbol().to_string())
        .collect::<Vec<_>>()
        .join("的")
}

#[test]
fn test_documented_examples() {
    assert_eq!(resolve("妻的父"), "岳父");
    assert_eq!(resolve("父的父"), "爷爷");
    assert_eq!(resolve("丈夫的母"), "婆婆");
    assert_eq!(resolve("子的子"), "孙子");
    assert_eq!(resolve("父的父的父的父"), "太爷爷辈");
    assert_eq!(resolve(""), EMPTY_INPUT_SENTINEL);
    assert_eq!(resolve("abc"), UNRECOGNIZED_SENTINEL);
}

#[test]
fn test_every_override_wins() {
    for (key, title) in OverrideTable::global().iter() {
        let resolution = resolve_detailed(key);
        assert_eq!(resolution.title, title, "override {key}");
        assert_eq!(resolution.source, ResolutionSource::Override, "override {key}");
    }
}

#[test]
fn test_strategy_priority_over_short_chains() {
    let graph = KinshipGraph::global();
    let overrides = OverrideTable::global();
    let titles = TitleTable::global();

    for chain in all_chains(3) {
        let text = chain_text(&chain);
        let resolution = resolve_detailed(&text);

        if let Some(title) = overrides.lookup(&text) {
            assert_eq!(resolution.source, ResolutionSource::Override, "{text}");
            assert_eq!(resolution.title, title, "{text}");
        } else if let Ok(node) = graph.find_by_path(&chain) {
            assert_eq!(resolution.source, ResolutionSource::Graph, "{text}");
            assert_eq!(resolution.title, node.title, "{text}");
        } else {
            let key = fold_chain(&chain).unwrap();
            match titles.get(&key) {
                Some(title) => {
                    assert_eq!(resolution.source, ResolutionSource::TitleTable, "{text}");
                    assert_eq!(resolution.title, title, "{text}");
                }
                None => {
                    assert_eq!(resolution.source, ResolutionSource::Generic, "{text}");
                    assert_eq!(resolution.title, generic_title(key.generation, key.gender));
                }
            }
        }
    }
}

#[test]
fn test_graph_answers_descendant_lines() {
    let cases = [
        ("子的子", "孙子"),
        ("子的女", "孙女"),
        ("女的子", "外孙"),
        ("女的女", "外孙女"),
        ("子的妻", "儿媳"),
        ("女的夫", "女婿"),
        ("子的子的子", "曾孙"),
    ];
    for (chain, expected) in cases {
        let resolution = resolve_detailed(chain);
        assert_eq!(resolution.title, expected, "{chain}");
        assert_eq!(resolution.source, ResolutionSource::Graph, "{chain}");
    }
}

#[test]
fn test_single_hops_reach_direct_relatives() {
    let graph = KinshipGraph::global();
    for relation in ElementaryRelation::ALL {
        let text = relation.symbol().to_string();
        let expected = graph.find_by_path(&[relation]).unwrap();
        assert_eq!(resolve(&text), expected.title, "{text}");
    }
}

#[test]
fn test_arithmetic_fallback() {
    let cases = [
        ("兄的父", "爷爷", ResolutionSource::TitleTable),
        ("姐的母", "外婆", ResolutionSource::TitleTable),
        ("姐的兄", "嫂子", ResolutionSource::TitleTable),
        ("妹的弟", "弟媳", ResolutionSource::TitleTable),
        ("夫的父的父", "太爷爷", ResolutionSource::TitleTable),
        ("兄的父的女", "同辈（女）", ResolutionSource::Generic),
        ("兄的父的子", "同辈（男）", ResolutionSource::Generic),
        ("子的子的父", "晚辈（男）", ResolutionSource::Generic),
        ("母的母的母的母", "太奶奶辈", ResolutionSource::Generic),
        ("子的子的子的子", UNKNOWN_RELATION, ResolutionSource::Generic),
    ];
    for (chain, title, source) in cases {
        let resolution = resolve_detailed(chain);
        assert_eq!(resolution.title, title, "{chain}");
        assert_eq!(resolution.source, source, "{chain}");
    }
}

#[test]
fn test_husband_synonym_equivalence() {
    for chain in all_chains(3) {
        if !chain.contains(&ElementaryRelation::Husband) {
            continue;
        }
        let short = chain_text(&chain);
        let long = short.replace('夫', "丈夫");
        assert_eq!(resolve(&short), resolve(&long), "{short} vs {long}");
    }
}

#[test]
fn test_whitespace_is_ignored() {
    assert_eq!(resolve("  妻 的\t父\n"), "岳父");
    assert_eq!(resolve("丈 夫的父"), "公公");
    assert_eq!(resolve("兄 的 父"), resolve("兄的父"));
    assert_eq!(resolve("\u{FEFF}妻的父"), "岳父");
}

#[test]
fn test_sentinels() {
    for blank in ["", " ", "\t\n", "\u{3000}", "\u{FEFF}", "\u{FEFF} "] {
        let resolution = resolve_detailed(blank);
        assert_eq!(resolution.title, EMPTY_INPUT_SENTINEL, "{blank:?}");
        assert_eq!(resolution.source, ResolutionSource::Sentinel);
    }

    for garbage in ["abc", "的的", "丈", "hello 的 world"] {
        assert_eq!(resolve(garbage), UNRECOGNIZED_SENTINEL, "{garbage:?}");
    }

    // stray characters are dropped, not rejected
    assert_eq!(resolve("x父y的z父"), resolve("父的父"));
    assert_ne!(resolve("父的父"), COMPUTATION_ERROR_SENTINEL);
}

#[test]
fn test_resolution_is_deterministic() {
    let inputs = ["妻的父", "兄的父的女", "子的子的子", "丈夫的兄的子", "abc", ""];
    let first: Vec<_> = inputs.iter().map(|s| resolve_detailed(s)).collect();
    for _ in 0..5 {
        let again: Vec<_> = inputs.iter().map(|s| resolve_detailed(s)).collect();
        assert_eq!(first, again);
    }
}

#[test]
fn test_concurrent_resolution() {
    let inputs: Vec<String> = all_chains(2).iter().map(|c| chain_text(c)).collect();
    let expected: Vec<String> = inputs.iter().map(|s| resolve(s)).collect();
    let shared = &inputs;

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(move || shared.iter().map(|s| resolve(s)).collect::<Vec<_>>()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_every_node_reachable_from_self() {
    let snapshot = KinshipGraph::global().snapshot();
    let mut seen: HashSet<&str> = HashSet::from([SELF_TITLE]);
    let mut queue = VecDeque::from([SELF_TITLE]);

    while let Some(current) = queue.pop_front() {
        for edge in snapshot.edges.iter().filter(|e| e.from == current) {
            if seen.insert(edge.to.as_str()) {
                queue.push_back(edge.to.as_str());
            }
        }
    }

    assert_eq!(seen.len(), snapshot.nodes.len());
}

#[test]
fn test_format_chain() {
    assert_eq!(format_chain("夫的父"), "丈夫的父");
    assert_eq!(format_chain("丈夫 的 母"), "丈夫的母");
    assert_eq!(format_chain("妻的兄的子"), "妻的兄的子");
}
