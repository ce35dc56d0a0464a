/// Standalone grammatical particles that must never be annotated as vocabulary
pub const PARTICLES: &[&str] = &[
    // subject / topic / object
    "이", "가", "은", "는", "을", "를",
    // possessive, locative, dative
    "의", "에", "에서", "에게", "께", "한테",
    // instrumental / direction
    "로", "으로",
    // conjunctive
    "와", "과", "하고", "랑", "이랑",
    // auxiliary
    "도", "만", "부터", "까지", "처럼", "이나",
];

pub fn is_particle(token: &str) -> bool {
    PARTICLES.contains(&token)
}
