//! Hangul syllable block arithmetic.
//!
//! A precomposed syllable is `0xAC00 + (initial * 21 + medial) * 28 + final`,
//! with 19 initials, 21 medials and 28 finals (index 0 = no final consonant).

const SYLLABLE_BASE: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;
const INITIAL_COUNT: u32 = 19;
const MEDIAL_COUNT: u32 = 21;
const FINAL_COUNT: u32 = 28;

/// Final consonants in index order, as compatibility jamo. Index 0 (none) is a placeholder.
const FINALS: [char; 28] = [
    '\0', 'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ',
    'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Medial vowels in index order, as compatibility jamo
const MEDIALS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ',
    'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// A precomposed syllable split into its jamo indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    pub initial: u32,
    pub medial: u32,
    pub final_: u32,
}

impl Syllable {
    pub fn decompose(c: char) -> Option<Self> {
        let code = c as u32;
        if !(SYLLABLE_BASE..=SYLLABLE_LAST).contains(&code) {
            return None;
        }
        let offset = code - SYLLABLE_BASE;
        Some(Self {
            initial: offset / (MEDIAL_COUNT * FINAL_COUNT),
            medial: (offset % (MEDIAL_COUNT * FINAL_COUNT)) / FINAL_COUNT,
            final_: offset % FINAL_COUNT,
        })
    }

    pub fn compose(self) -> Option<char> {
        if self.initial >= INITIAL_COUNT
            || self.medial >= MEDIAL_COUNT
            || self.final_ >= FINAL_COUNT
        {
            return None;
        }
        let code =
            SYLLABLE_BASE + (self.initial * MEDIAL_COUNT + self.medial) * FINAL_COUNT + self.final_;
        char::from_u32(code)
    }

    /// Final consonant as a compatibility jamo, if any
    pub fn final_jamo(self) -> Option<char> {
        (self.final_ != 0).then(|| FINALS[self.final_ as usize])
    }

    pub fn medial_jamo(self) -> char {
        MEDIALS[self.medial as usize]
    }

    pub fn without_final(self) -> Self {
        Self { final_: 0, ..self }
    }

    pub fn with_final(self, jamo: char) -> Option<Self> {
        let index = FINALS.iter().skip(1).position(|&f| f == jamo)? + 1;
        Some(Self {
            final_: index as u32,
            ..self
        })
    }

    pub fn with_medial(self, medial: char) -> Option<Self> {
        let index = MEDIALS.iter().position(|&m| m == medial)?;
        Some(Self {
            medial: index as u32,
            ..self
        })
    }
}

/// True for precomposed Hangul syllable blocks (U+AC00..=U+D7A3)
pub fn is_syllable(c: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(c as u32))
}

/// Split text into maximal `(char_offset, chars, is_hangul)` runs
pub fn hangul_runs(text: &str) -> Vec<(usize, Vec<char>, bool)> {
    let mut runs: Vec<(usize, Vec<char>, bool)> = Vec::new();

    for (pos, c) in text.chars().enumerate() {
        let hangul = is_syllable(c);
        match runs.last_mut() {
            Some((_, chars, kind)) if *kind == hangul => chars.push(c),
            _ => runs.push((pos, vec![c], hangul)),
        }
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decompose_and_compose_round_trip() {
        let s = Syllable::decompose('갔').unwrap();
        assert_eq!(s.final_jamo(), Some('ㅆ'));
        assert_eq!(s.medial_jamo(), 'ㅏ');
        assert_eq!(s.without_final().compose(), Some('가'));
        assert_eq!(s.with_final('ㄹ').and_then(Syllable::compose), Some('갈'));
    }

    #[test]
    fn medial_replacement() {
        let s = Syllable::decompose('봐').unwrap();
        assert_eq!(s.medial_jamo(), 'ㅘ');
        assert_eq!(s.with_medial('ㅗ').and_then(Syllable::compose), Some('보'));
    }

    #[test]
    fn non_syllables_are_rejected() {
        assert!(Syllable::decompose('a').is_none());
        assert!(Syllable::decompose('ㄱ').is_none());
        assert!(!is_syllable('。'));
    }

    #[test]
    fn runs_split_on_script_changes() {
        let runs = hangul_runs("밥을 먹어!");
        let shapes: Vec<(usize, String, bool)> = runs
            .into_iter()
            .map(|(pos, chars, hangul)| (pos, chars.into_iter().collect(), hangul))
            .collect();
        assert_eq!(
            shapes,
            vec![
                (0, "밥을".to_string(), true),
                (2, " ".to_string(), false),
                (3, "먹어".to_string(), true),
                (5, "!".to_string(), false),
            ]
        );
    }
}
