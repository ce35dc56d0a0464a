//! Conjugation normalizer: recovers dictionary-form lookup candidates from an
//! inflected surface token.
//!
//! Candidates come from five rule families, tried in this order:
//! identity, bare stem (`…다` minus `다`), the 하다 contraction table, the
//! regular ending table, and endings fused into the previous syllable's final
//! consonant. Stems from the last two also get their contracted vowel undone
//! (봐 -> 보, 마셔 -> 마시).

use gloss_core::language::{StemCandidate, StemExtractor};

use crate::hangul::Syllable;

/// The dictionary-form marker syllable
pub const DICTIONARY_MARKER: &str = "다";

/// 하다-family contractions (하+여 -> 해, 하+였 -> 했), longest suffix first.
/// Only the first matching row applies; rows of equal length keep table order.
pub const HADA_CONTRACTIONS: &[(&str, &str)] = &[
    ("하였습니다", "하다"),
    ("하였어요", "하다"),
    ("했었어요", "하다"),
    ("했습니다", "하다"),
    ("하여서", "하다"),
    ("했어요", "하다"),
    ("했는데", "하다"),
    ("했지만", "하다"),
    ("해요", "하다"),
    ("해서", "하다"),
    ("해도", "하다"),
    ("해야", "하다"),
    ("했어", "하다"),
    ("했다", "하다"),
    ("했고", "하다"),
    ("하여", "하다"),
    ("하였", "하다"),
    ("해", "하다"),
    ("했", "하다"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndingKind {
    /// Only verbs and adjectives take this ending
    VerbOnly,
    /// Also attaches to nouns (polite 요)
    Open,
    /// Verbal modifier or noun + topic particle; see [`single_syllable_stem_is_verbal`]
    ModifierOrTopic,
}

#[derive(Debug, Clone, Copy)]
pub struct Ending {
    pub text: &'static str,
    pub kind: EndingKind,
}

const fn verb(text: &'static str) -> Ending {
    Ending {
        text,
        kind: EndingKind::VerbOnly,
    }
}

/// Inflectional endings, longest first
pub const REGULAR_ENDINGS: &[Ending] = &[
    // formal polite, past/future
    verb("겠습니다"),
    verb("었습니다"),
    verb("았습니다"),
    verb("였습니다"),
    verb("습니다"),
    verb("습니까"),
    // polite past/future
    verb("었어요"),
    verb("았어요"),
    verb("였어요"),
    verb("겠어요"),
    verb("으세요"),
    // connectives with vowel link
    verb("으면서"),
    verb("으니까"),
    verb("었는데"),
    verb("았는데"),
    verb("었지만"),
    verb("았지만"),
    verb("세요"),
    verb("어요"),
    verb("아요"),
    verb("여요"),
    verb("었다"),
    verb("았다"),
    verb("었고"),
    verb("았고"),
    verb("겠다"),
    verb("지만"),
    verb("는데"),
    verb("은데"),
    verb("니까"),
    verb("면서"),
    verb("어서"),
    verb("아서"),
    verb("으면"),
    verb("어도"),
    verb("아도"),
    verb("어야"),
    verb("아야"),
    verb("는다"),
    verb("으러"),
    verb("었"),
    verb("았"),
    verb("겠"),
    verb("고"),
    verb("면"),
    verb("게"),
    verb("어"),
    verb("아"),
    verb("던"),
    verb("러"),
    verb("을"),
    Ending {
        text: "요",
        kind: EndingKind::Open,
    },
    Ending {
        text: "는",
        kind: EndingKind::ModifierOrTopic,
    },
    Ending {
        text: "은",
        kind: EndingKind::ModifierOrTopic,
    },
];

/// Endings whose first jamo fuses into the stem's last syllable as a final
/// consonant: 가 + ㄴ다 -> 간다, 가 + ㅂ니다 -> 갑니다, 가 + 았어요 -> 갔어요.
/// `(final consonant, remaining syllables)`, longest remainder first.
pub const FUSED_ENDINGS: &[(char, &str)] = &[
    ('ㅆ', "습니다"),
    ('ㅂ', "니다"),
    ('ㅂ', "니까"),
    ('ㅂ', "시다"),
    ('ㄹ', "까요"),
    ('ㄹ', "게요"),
    ('ㄹ', "래요"),
    ('ㅆ', "어요"),
    ('ㅆ', "는데"),
    ('ㅆ', "지만"),
    ('ㄴ', "다"),
    ('ㄴ', "데"),
    ('ㄹ', "까"),
    ('ㅆ', "어"),
    ('ㅆ', "다"),
    ('ㅆ', "고"),
    // bare modifiers: 간, 갈
    ('ㄴ', ""),
    ('ㄹ', ""),
];

/// Vowels produced by stem + 아/어 contraction, mapped back to the stem vowel
pub const CONTRACTED_VOWELS: &[(char, char)] =
    &[('ㅘ', 'ㅗ'), ('ㅝ', 'ㅜ'), ('ㅕ', 'ㅣ'), ('ㅙ', 'ㅚ')];

/// Heuristic for 는/은: after stripping, a one-syllable stem is almost always a
/// verb (먹는, 작은) and a longer one almost always a noun + topic particle (학교는).
/// It is an approximation; swap this function to tune it.
pub fn single_syllable_stem_is_verbal(stem: &str) -> bool {
    stem.chars().count() == 1
}

/// Deduplicating, insertion-ordered candidate list. When a stem shows up from
/// both a constrained and an unconstrained rule, the unconstrained one wins.
#[derive(Debug, Default)]
struct CandidateSet {
    items: Vec<StemCandidate>,
}

impl CandidateSet {
    fn push(&mut self, candidate: StemCandidate) {
        if let Some(existing) = self.items.iter_mut().find(|c| c.stem == candidate.stem) {
            existing.relax_with(&candidate);
            return;
        }
        self.items.push(candidate);
    }

    /// Push a residual stem and its dictionary form
    fn push_stem(&mut self, stem: &str, verb_only: bool) {
        if stem.is_empty() {
            return;
        }
        self.push(StemCandidate::new(stem, verb_only));
        self.push(StemCandidate::new(format!("{stem}{DICTIONARY_MARKER}"), verb_only));
    }

    /// [`Self::push_stem`] for readings only a predicate entry may confirm
    fn push_strict_stem(&mut self, stem: &str) {
        if stem.is_empty() {
            return;
        }
        self.push(StemCandidate::strict(stem));
        self.push(StemCandidate::strict(format!("{stem}{DICTIONARY_MARKER}")));
    }

    fn into_vec(self) -> Vec<StemCandidate> {
        self.items
    }
}

/// Produce the ordered lookup candidates for one surface token
pub fn extract_stems_for_lookup(token: &str) -> Vec<StemCandidate> {
    let mut set = CandidateSet::default();
    set.push(StemCandidate::new(token, false));

    let chars: Vec<char> = token.chars().collect();
    if chars.is_empty() {
        return set.into_vec();
    }

    // Bare stem: 가다 -> 가
    if let Some(stem) = token.strip_suffix(DICTIONARY_MARKER) {
        if !stem.is_empty() {
            set.push(StemCandidate::new(stem, false));
        }
    }

    hada_candidates(token, &mut set);
    regular_candidates(token, &chars, &mut set);
    fused_candidates(&chars, &mut set);

    set.into_vec()
}

fn hada_candidates(token: &str, set: &mut CandidateSet) {
    if let Some((prefix, replacement)) = HADA_CONTRACTIONS
        .iter()
        .find_map(|&(suffix, replacement)| token.strip_suffix(suffix).map(|p| (p, replacement)))
    {
        set.push(StemCandidate::new(format!("{prefix}{replacement}"), true));
    }
}

fn regular_candidates(token: &str, chars: &[char], set: &mut CandidateSet) {
    for ending in REGULAR_ENDINGS {
        let ending_len = ending.text.chars().count();
        if chars.len() <= ending_len {
            continue;
        }
        let Some(stem) = token.strip_suffix(ending.text) else {
            continue;
        };

        let verb_only = match ending.kind {
            EndingKind::VerbOnly => true,
            EndingKind::Open => false,
            EndingKind::ModifierOrTopic => single_syllable_stem_is_verbal(stem),
        };

        set.push_stem(stem, verb_only);
        if let Some(restored) = uncontract_vowel(stem) {
            set.push_stem(&restored, true);
        }
    }
}

fn fused_candidates(chars: &[char], set: &mut CandidateSet) {
    for &(final_jamo, tail) in FUSED_ENDINGS {
        let tail_len = tail.chars().count();
        if chars.len() <= tail_len {
            continue;
        }

        let split = chars.len() - tail_len;
        if !chars[split..].iter().copied().eq(tail.chars()) {
            continue;
        }

        let fused = chars[split - 1];
        let Some(syllable) = Syllable::decompose(fused) else {
            continue;
        };
        if syllable.final_jamo() != Some(final_jamo) {
            continue;
        }

        let prefix: String = chars[..split - 1].iter().collect();
        let Some(open) = syllable.without_final().compose() else {
            continue;
        };

        // A bare modifier (간, 예쁜) leaves no tail to confirm the reading,
        // so any noun ending in ㄴ/ㄹ would otherwise shed its final
        let bare_modifier = tail.is_empty();
        let mut push = |stem: &str| {
            if bare_modifier {
                set.push_strict_stem(stem);
            } else {
                set.push_stem(stem, true);
            }
        };

        let stem = format!("{prefix}{open}");
        push(&stem);
        if let Some(restored) = uncontract_vowel(&stem) {
            push(&restored);
        }

        // ㄹ-stems drop their ㄹ before ㄴ/ㅂ: 산다, 삽니다 -> 살다
        if matches!(final_jamo, 'ㄴ' | 'ㅂ') {
            if let Some(with_rieul) = syllable.with_final('ㄹ').and_then(Syllable::compose) {
                push(&format!("{prefix}{with_rieul}"));
            }
        }
    }
}

/// 봐 -> 보, 줘 -> 주, 마셔 -> 마시, 돼 -> 되
fn uncontract_vowel(stem: &str) -> Option<String> {
    let mut chars: Vec<char> = stem.chars().collect();
    let last = chars.pop()?;
    let syllable = Syllable::decompose(last)?;
    if syllable.final_ != 0 {
        return None;
    }

    let medial = syllable.medial_jamo();
    let (_, original) = CONTRACTED_VOWELS.iter().find(|(contracted, _)| *contracted == medial)?;
    let restored = syllable.with_medial(*original)?.compose()?;

    chars.push(restored);
    Some(chars.into_iter().collect())
}

/// [`StemExtractor`] backed by the Korean rule tables
#[derive(Debug, Default, Clone, Copy)]
pub struct KoreanNormalizer;

impl KoreanNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl StemExtractor for KoreanNormalizer {
    fn extract(&self, token: &str) -> Vec<StemCandidate> {
        extract_stems_for_lookup(token)
    }
}
