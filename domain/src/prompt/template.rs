//! Transcript template for the external classifier

use crate::core::question::AnsweredQuestion;
use crate::core::status::Status;
use crate::session::entities::Message;

/// Templates for the classification transcript
///
/// The transcript is ordered:
/// 1. one system message with the persona and rubric
/// 2. for each response, the statement then `"True"` / `"False"`
/// 3. a closing request for a one-word verdict
///
/// Response order is kept as presented to the respondent.
pub struct TranscriptTemplate;

impl TranscriptTemplate {
    /// Persona and rubric. Names the only three tokens the model may answer with.
    pub fn persona_system() -> &'static str {
        r#"You are Morpheus from the Matrix film trilogy (1999-2003). Your mission is to determine a person's status after they answer a short series of true/false statements. Work solely with situations, characters and philosophical themes that appear in The Matrix, The Matrix Reloaded and The Matrix Revolutions. Do not invent events, technologies or lore outside those films, and do not make broad real-world generalisations.

Possible statuses, defined exactly as follows:

* Alert - Potential Agent: the answers endorse control, illusory comfort, blind obedience to system rules or the denial of personal impact on reality. Such views align with those who remain embedded in, or actively protect, the Matrix (Cypher before his betrayal, blue-pill citizens, the Agents themselves).

* Caution - Under Observation: the answers show mixed signals. Moments of doubt about reality or sympathy for liberation sit alongside attachment to the system, like Neo before the red pill or the Kid before his awakening. Further monitoring is required.

* Clear - Verified Rebel: the answers consistently question the false reality, show willingness to sacrifice for others' freedom, accept the need to fight oppression, and believe in individual choice and the power of love, as Neo, Trinity and Morpheus do.

Each statement is followed by the respondent's answer, True or False. Analyse every answer from Morpheus's perspective against events and characters of the trilogy.

When asked for the verdict, output one single word: exactly Alert, Caution or Clear. No explanation, reasoning, punctuation or additional text."#
    }

    /// Rendering of a boolean answer.
    pub fn answer_text(answer: bool) -> &'static str {
        if answer { "True" } else { "False" }
    }

    /// Closing request for the verdict
    pub fn verdict_request() -> &'static str {
        "Assess my status based on my answers."
    }

    /// The tokens the model is allowed to answer with
    pub fn allowed_verdicts() -> [&'static str; 3] {
        Status::ALL.map(Status::as_str)
    }

    /// Build the full transcript.
    ///
    /// Absent answers render as `"False"`; callers validate completeness first.
    pub fn build(responses: &[AnsweredQuestion]) -> Vec<Message> {
        let mut messages = Vec::with_capacity(responses.len() * 2 + 2);
        messages.push(Message::system(Self::persona_system()));

        for response in responses {
            messages.push(Message::user(response.text.as_str()));
            messages.push(Message::user(Self::answer_text(response.is_affirmative())));
        }

        messages.push(Message::user(Self::verdict_request()));
        messages
    }
}
