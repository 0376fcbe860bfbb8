//! Instruction compiler: preferences in, ordered prompt directives out.
//!
//! [`compile`] is the one piece of real logic in the crate. It is a pure
//! function over a closed input domain: no I/O, no hidden state, and no
//! failure modes. Empty required text produces a weaker directive (e.g.
//! "Theme or subject: .") rather than an error.
//!
//! Directive order is significant. The sequence is the literal prompt the
//! model sees, so it must be reproduced exactly; tests pin both the wording
//! and the ordering.

use serde::{Deserialize, Serialize};

use crate::preferences::PoemPreferences;

/// The complete ordered sequence of directives for one generation request.
///
/// Never mutated after construction; a fresh set is compiled per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionSet {
    directives: Vec<String>,
}

impl InstructionSet {
    /// The directives in prompt order.
    pub fn directives(&self) -> &[String] {
        &self.directives
    }

    /// Number of directives.
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// True when the set holds no directives. `compile` never produces this;
    /// the method exists for completeness of the collection-like API.
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Join the directives into the single prompt text submitted to the
    /// model, one directive per line.
    pub fn as_prompt(&self) -> String {
        self.directives.join("\n")
    }
}

impl IntoIterator for InstructionSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.directives.into_iter()
    }
}

/// True for an optional free-text field that was actually supplied.
/// No trimming: whitespace counts as present.
fn is_present(field: &Option<String>) -> bool {
    matches!(field, Some(s) if !s.is_empty())
}

/// Compile a preference record into the ordered directive sequence.
///
/// Field values are interpolated verbatim, with no escaping of
/// markdown-significant characters; the downstream consumer is a language
/// model, not a strict parser.
pub fn compile(prefs: &PoemPreferences) -> InstructionSet {
    let range = prefs.length.range();

    let mut directives = vec![
        "Compose a personalized poem using the following preferences.".to_string(),
        format!(
            "Poem type: {}. Structure: {}. Tone: {}.",
            prefs.poem_type, prefs.structure, prefs.mood
        ),
        format!("Theme or subject: {}.", prefs.theme),
        format!(
            "Line count should be between {} and {}.",
            range.min_lines, range.max_lines
        ),
        // Kept even though the title-resolution directive below supersedes
        // it; the placeholder's position influences model emphasis.
        "The poem must begin with a markdown-formatted title using the format: ### <Title>"
            .to_string(),
    ];

    if is_present(&prefs.recipient) {
        directives.push(format!(
            "The poem is for: {}.",
            prefs.recipient.as_deref().unwrap_or_default()
        ));
    }
    if is_present(&prefs.keywords) {
        directives.push(format!(
            "Include these words or ideas: {}.",
            prefs.keywords.as_deref().unwrap_or_default()
        ));
    }
    if let Some(poet) = prefs.mimic_poet {
        directives.push(format!("Try to mimic the poetic style of {}.", poet));
    }

    if is_present(&prefs.custom_title) {
        directives.push(format!(
            "Use this title exactly: ### {}",
            prefs.custom_title.as_deref().unwrap_or_default()
        ));
    } else {
        directives.push(
            "You must generate a poetic title and place it in markdown as: ### <Title>"
                .to_string(),
        );
    }

    if prefs.wants_explanation {
        directives.push(
            "After the poem, add a short explanation (2–4 lines) under the markdown heading \
             '### 📖 Explanation'."
                .to_string(),
        );
    } else {
        directives
            .push("Do not include any explanation. Only return the poem with its title.".to_string());
    }

    directives.push("Format everything using clean markdown.".to_string());

    InstructionSet { directives }
}
