//! Rule-based English lemmatizer.
//!
//! Irregular forms come from a lookup table; regular inflections are undone by
//! suffix rules (`-s/-es/-ies`, `-ing`, `-ed`) with consonant undoubling and
//! silent-`e` restoration. Rules are applied until the word stops changing, so
//! every lemma is a fixpoint: `lemmatize(lemmatize(w)) == lemmatize(w)`.

use std::collections::{HashMap, HashSet};

const IRREGULAR: &[(&str, &str)] = &[
    ("analyses", "analysis"),
    ("appendices", "appendix"),
    ("began", "begin"),
    ("begun", "begin"),
    ("bought", "buy"),
    ("brought", "bring"),
    ("built", "build"),
    ("caused", "cause"),
    ("causing", "cause"),
    ("children", "child"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("crises", "crisis"),
    ("criteria", "criterion"),
    ("diagnoses", "diagnosis"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("feet", "foot"),
    ("felt", "feel"),
    ("found", "find"),
    ("geese", "goose"),
    ("goes", "go"),
    ("gone", "go"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("held", "hold"),
    ("hypotheses", "hypothesis"),
    ("indices", "index"),
    ("kept", "keep"),
    ("knew", "know"),
    ("knives", "knife"),
    ("known", "know"),
    ("led", "lead"),
    ("left", "leave"),
    ("lives", "life"),
    ("lost", "lose"),
    ("matrices", "matrix"),
    ("men", "man"),
    ("met", "meet"),
    ("mice", "mouse"),
    ("oversaw", "oversee"),
    ("overseen", "oversee"),
    ("paid", "pay"),
    ("phenomena", "phenomenon"),
    ("ran", "run"),
    ("sent", "send"),
    ("sold", "sell"),
    ("sought", "seek"),
    ("spent", "spend"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("taught", "teach"),
    ("teeth", "tooth"),
    ("theses", "thesis"),
    ("thought", "think"),
    ("told", "tell"),
    ("took", "take"),
    ("understood", "understand"),
    ("vertices", "vertex"),
    ("wives", "wife"),
    ("women", "woman"),
    ("won", "win"),
    ("wrote", "write"),
    ("written", "write"),
];

/// Words whose surface form is already their lemma even though a suffix rule
/// would fire on them.
const INVARIANT: &[&str] = &[
    "analytics", "aws", "devops", "embed", "gas", "ios", "jenkins", "kubernetes", "lens",
    "mathematics", "news", "pandas", "physics", "postgres", "redis", "sass", "series", "species",
    "speed",
];

/// Stems that take a silent `e` back once `-ing`/`-ed` is removed.
const E_RESTORING_ENDINGS: &[&str] = &[
    "at", "bl", "cl", "dl", "fl", "gl", "kl", "pl", "tl", "iz", "yz", "dg", "ag", "ang", "uir",
    "pir", "sir", "v", "c",
];

#[derive(Debug, Clone)]
pub struct Lemmatizer {
    irregular: HashMap<&'static str, &'static str>,
    invariant: HashSet<&'static str>,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Lemmatizer {
    pub fn english() -> Self {
        Self {
            irregular: IRREGULAR.iter().copied().collect(),
            invariant: INVARIANT.iter().copied().collect(),
        }
    }

    /// Reduces a lowercase word to its dictionary base form.
    pub fn lemmatize(&self, word: &str) -> String {
        let mut current = word.to_string();
        // Rules shorten the word and table targets are stable, so this settles quickly.
        for _ in 0..=word.len() {
            match self.step(&current) {
                Some(next) if next != current => current = next,
                _ => break,
            }
        }
        current
    }

    fn step(&self, word: &str) -> Option<String> {
        if self.invariant.contains(word) {
            return None;
        }
        if let Some(lemma) = self.irregular.get(word) {
            return Some((*lemma).to_string());
        }
        if !word.is_ascii() {
            return None;
        }
        strip_plural(word)
            .or_else(|| strip_inflection(word, "ing"))
            .or_else(|| strip_inflection(word, "ed"))
    }
}

fn strip_plural(word: &str) -> Option<String> {
    if word.len() <= 3 || !word.ends_with('s') {
        return None;
    }
    if ["ss", "us", "is", "as"].iter().any(|s| word.ends_with(s)) {
        return None;
    }
    if let Some(stem) = word.strip_suffix("ies") {
        if word.len() > 4 {
            return Some(format!("{stem}y"));
        }
    }
    if let Some(stem) = word.strip_suffix("es") {
        let sibilant = ["ss", "x", "ch", "sh", "zz"].iter().any(|s| stem.ends_with(s))
            || (stem.len() > 2 && stem.ends_with("us") && !stem.ends_with("ous"));
        if sibilant {
            return Some(stem.to_string());
        }
    }
    Some(word[..word.len() - 1].to_string())
}

fn strip_inflection(word: &str, suffix: &str) -> Option<String> {
    let stem = word.strip_suffix(suffix)?;
    if suffix == "ed" {
        if word.ends_with("eed") {
            return None;
        }
        if let Some(base) = stem.strip_suffix('i') {
            if base.len() >= 2 {
                return Some(format!("{base}y"));
            }
        }
    }
    if stem.len() < 3 || !has_vowel(stem.as_bytes()) {
        return None;
    }
    Some(restore_base(stem))
}

fn restore_base(stem: &str) -> String {
    let b = stem.as_bytes();
    let n = b.len();
    let last = b[n - 1];

    if last == b[n - 2] && is_consonant(b, n - 1) && !matches!(last, b'l' | b's' | b'z') {
        return stem[..n - 1].to_string();
    }

    let restores_e = (E_RESTORING_ENDINGS.iter().any(|e| stem.ends_with(e))
        && !stem.ends_with("ic")
        && !stem.ends_with("ync"))
        || (stem.ends_with("ur") && !stem.ends_with("our"))
        || (last == b's' && !is_consonant(b, n - 2) && !stem.ends_with("us"))
        || stem.ends_with("ous")
        || (measure(b) == 1 && ends_cvc(b));

    if restores_e {
        format!("{stem}e")
    } else {
        stem.to_string()
    }
}

fn is_consonant(b: &[u8], i: usize) -> bool {
    match b[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !is_consonant(b, i - 1),
        _ => true,
    }
}

fn has_vowel(b: &[u8]) -> bool {
    (0..b.len()).any(|i| !is_consonant(b, i))
}

/// Number of vowel-consonant sequences in the stem.
fn measure(b: &[u8]) -> usize {
    let mut m = 0;
    let mut prev_vowel = false;
    for i in 0..b.len() {
        let consonant = is_consonant(b, i);
        if consonant && prev_vowel {
            m += 1;
        }
        prev_vowel = !consonant;
    }
    m
}

fn ends_cvc(b: &[u8]) -> bool {
    let n = b.len();
    n >= 3
        && is_consonant(b, n - 3)
        && !is_consonant(b, n - 2)
        && is_consonant(b, n - 1)
        && !matches!(b[n - 1], b'w' | b'x' | b'y')
}
