use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default preprocessor: compose jamo sequences into syllable blocks
    fn process(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        // NFC, not NFKC: compatibility folding would rewrite full-width
        // punctuation and shift the offsets the caller maps back onto its text
        text.nfc()
            .filter(|c| !c.is_control() || matches!(c, '\n' | '\t'))
            .collect()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
