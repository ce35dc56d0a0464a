use gloss_lang_korean::{
    AnnotateConfig, KoreanProcessor, LevelFilter, PartOfSpeech, TopikLevel, VocabularyEntry,
    VocabularyIndex, annotate, extract_stems_for_lookup,
};

fn word(form: &str, pos: PartOfSpeech, en: &str) -> VocabularyEntry {
    VocabularyEntry::new(form, pos, TopikLevel::I).with_translation("en", en)
}

fn index(entries: Vec<VocabularyEntry>) -> VocabularyIndex {
    VocabularyIndex::from_entries(entries).unwrap()
}

fn en() -> AnnotateConfig {
    AnnotateConfig::default()
}

#[test]
fn end_to_end_inflected_verb() {
    let index = index(vec![word("먹다", PartOfSpeech::Verb, "eat")]);

    let spans = annotate("밥을 먹었어요", &index, &en()).unwrap();

    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].surface, "먹었어요");
    assert_eq!((spans[0].start, spans[0].end), (3, 7));
    assert_eq!(spans[0].translation, "eat");
}

#[test]
fn longest_match_preferred() {
    // 서 alone hits the index too, so only window order keeps 서다 whole
    let index = index(vec![
        word("서다", PartOfSpeech::Verb, "to stand"),
        word("서", PartOfSpeech::Noun, "west"),
    ]);

    let spans = annotate("서다", &index, &en()).unwrap();
    assert_eq!(spans.len(), 1);
    assert_eq!((spans[0].start, spans[0].end), (0, 2));
    assert_eq!(spans[0].entry.dictionary_form, "서다");

    let spans = annotate("섰다", &index, &en()).unwrap();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].surface, "섰다");
    assert_eq!(spans[0].entry.dictionary_form, "서다");
}

#[test]
fn fused_modifier_only_confirms_predicates() {
    let index = index(vec![
        word("사지", PartOfSpeech::Noun, "limbs"),
        word("서", PartOfSpeech::Noun, "west"),
        word("먹다", PartOfSpeech::Verb, "eat"),
        word("예쁘다", PartOfSpeech::Adjective, "pretty"),
    ]);

    assert!(annotate("사진", &index, &en()).unwrap().is_empty());

    let spans = annotate("예쁜", &index, &en()).unwrap();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].entry.dictionary_form, "예쁘다");
}

#[test]
fn standalone_particle_is_never_annotated() {
    let without = index(vec![word("학교", PartOfSpeech::Noun, "school")]);
    assert!(annotate("는", &without, &en()).unwrap().is_empty());

    let with = index(vec![
        word("학교", PartOfSpeech::Noun, "school"),
        word("는", PartOfSpeech::Other, "topic marker"),
    ]);
    assert!(annotate("는", &with, &en()).unwrap().is_empty());
}

#[test]
fn verb_ending_rejects_noun_stem() {
    let index = index(vec![
        word("서", PartOfSpeech::Noun, "west"),
        word("서다", PartOfSpeech::Verb, "to stand"),
    ]);

    let spans = annotate("서고", &index, &en()).unwrap();

    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].entry.dictionary_form, "서다");
    assert_eq!(spans[0].translation, "to stand");
}

#[test]
fn hada_contraction_round_trip() {
    let stems = extract_stems_for_lookup("공부해요");
    assert!(stems.iter().any(|c| c.stem == "공부하다" && c.verb_only));
}

#[test]
fn annotate_is_idempotent() {
    let processor = KoreanProcessor::new();
    let index = processor.build_index(true, &[]).unwrap();
    let text = "안녕하세요! 저는 대학생이에요. 친구와 학교에서 공부했어요. 경제가 중요합니다.";

    let first = annotate(text, &index, &en()).unwrap();
    let second = annotate(text, &index, &en()).unwrap();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn spans_are_sorted_and_disjoint() {
    let processor = KoreanProcessor::new();
    let index = processor.build_index(true, &[]).unwrap();
    let texts = [
        "밥을 먹고 물을 마셔요",
        "예쁜 가게에서 책을 읽었습니다",
        "사람들이 서울에 살아요 그리고 일했어요",
        "가가가가가가가가가가",
        "abc 학교 123 학생 ... 감사합니다",
    ];

    for text in texts {
        let spans = annotate(text, &index, &en()).unwrap();
        for span in &spans {
            assert!(span.start < span.end, "{text}: empty span {span:?}");
            let surface: String =
                text.chars().skip(span.start).take(span.end - span.start).collect();
            assert_eq!(surface, span.surface);
        }
        for pair in spans.windows(2) {
            assert!(pair[0].end <= pair[1].start, "{text}: overlap {:?} / {:?}", pair[0], pair[1]);
        }
    }
}

#[test]
fn english_fallback_translation() {
    let entry = VocabularyEntry::new("학교", PartOfSpeech::Noun, TopikLevel::I)
        .with_translation("en", "school")
        .with_translation("ja", "学校");
    let index = index(vec![entry]);

    let ru = AnnotateConfig::new("ru", LevelFilter::All);
    let spans = annotate("학교", &index, &ru).unwrap();
    assert_eq!(spans[0].translation, "school");

    let ja = AnnotateConfig::new("ja", LevelFilter::All);
    let spans = annotate("학교", &index, &ja).unwrap();
    assert_eq!(spans[0].translation, "学校");
}

#[test]
fn conjugated_forms_from_embedded_list() {
    let processor = KoreanProcessor::new();
    let index = processor.build_index(true, &[]).unwrap();

    let cases = [
        ("봤어요", "보다"),
        ("마셔요", "마시다"),
        ("갑니다", "가다"),
        ("살아요", "살다"),
        ("만듭니다", "만들다"),
        ("공부했습니다", "공부하다"),
        ("예쁜", "예쁘다"),
        ("작은", "작다"),
    ];

    for (surface, expected) in cases {
        let spans = annotate(surface, &index, &en()).unwrap();
        assert_eq!(spans.len(), 1, "{surface}: {spans:?}");
        assert_eq!(spans[0].entry.dictionary_form, expected, "{surface}");
        assert_eq!(spans[0].surface, surface);
    }
}

#[test]
fn level_filter_limits_annotations() {
    let processor = KoreanProcessor::new();
    let index = processor.build_index(true, &[]).unwrap();
    let text = "경제가 발전했어요";

    let all = annotate(text, &index, &en()).unwrap();
    assert_eq!(all.len(), 2);

    // 경제 and 발전하다 are TOPIK II; only the 하다 in 했어요 is left
    let beginner = AnnotateConfig::new("en", LevelFilter::I);
    let spans = annotate(text, &index, &beginner).unwrap();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].surface, "했어요");
    assert_eq!(spans[0].entry.dictionary_form, "하다");
}
