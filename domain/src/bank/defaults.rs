//! Built-in question bank

use crate::core::question::Question;

const DEFAULT_TEXTS: [&str; 20] = [
    "Comfort built on illusion is still worth preserving.",
    "You would risk your life to help strangers gain freedom from a system that deceives them.",
    "Rules imposed by unseen authorities should always be obeyed for the sake of order.",
    "Knowing the future removes the freedom to choose differently.",
    "A single person can fundamentally change the fate of an entire world.",
    "Violence is sometimes necessary to break oppressive control.",
    "Doubt in what your senses tell you is a sign of weakness.",
    "Sacrificing personal happiness for the greater good is a worthy choice.",
    "Machines, once given power, will inevitably seek to dominate humans.",
    "Love is a force powerful enough to alter destiny.",
    "Ignorance is preferable to a painful truth.",
    "Everyone has a purpose that has already been decided for them.",
    "Trusting a stranger who offers you the truth is reckless.",
    "A world without suffering would be a world worth accepting, even if it were false.",
    "Peace with an enemy is possible only when both sides choose it.",
    "Those who enforce the rules are just doing their jobs and carry no blame.",
    "Belief in someone can change what they are able to do.",
    "It is better to be told what is real than to find out for yourself.",
    "Freeing others is worth the risk of being betrayed by one of your own.",
    "Choice is an illusion created between those with power and those without.",
];

/// The built-in bank: 20 statements with ids 1 through 20.
pub fn default_questions() -> Vec<Question> {
    DEFAULT_TEXTS
        .iter()
        .zip(1u32..)
        .map(|(text, id)| Question::new(id, *text))
        .collect()
}
