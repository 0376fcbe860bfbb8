//! End-to-end tests of the compose flow through the public API, with the
//! generation client replaced by a canned provider. No network access.

use std::sync::Arc;

use async_trait::async_trait;
use verse_forge::llm::{Choice, GenerationRequest, GenerationResponse, LlmProvider, Message, Usage};
use verse_forge::preferences::{LengthBucket, Mood, Poet, PoemStructure, PoemType};
use verse_forge::{compile, GenerationError, PoemGenerator, PoemPreferences};

struct CannedProvider(&'static str);

#[async_trait]
impl LlmProvider for CannedProvider {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        Ok(GenerationResponse {
            id: "resp-test".to_string(),
            model: request.model,
            choices: vec![Choice {
                index: 0,
                message: Message {
                    role: "assistant".to_string(),
                    content: self.0.to_string(),
                },
                finish_reason: "stop".to_string(),
            }],
            usage: Usage {
                prompt_tokens: 120,
                completion_tokens: 60,
                total_tokens: 180,
            },
        })
    }
}

fn full_prefs() -> PoemPreferences {
    PoemPreferences {
        poem_type: PoemType::Celebratory,
        theme: "a decade of friendship".to_string(),
        recipient: Some("an old friend".to_string()),
        mood: Mood::Joyful,
        structure: PoemStructure::RhymingCouplets,
        length: LengthBucket::Medium,
        custom_title: Some("Ten Years On".to_string()),
        keywords: Some("summer, letters, laughter".to_string()),
        mimic_poet: Some(Poet::PabloNeruda),
        wants_explanation: true,
    }
}

#[test]
fn compile_emits_every_optional_directive_when_all_fields_are_set() {
    let set = compile(&full_prefs());
    let directives = set.directives();

    // 5 unconditional leading + recipient + keywords + poet + title +
    // explanation + closing format directive.
    assert_eq!(directives.len(), 11);
    assert_eq!(directives[5], "The poem is for: an old friend.");
    assert_eq!(
        directives[6],
        "Include these words or ideas: summer, letters, laughter."
    );
    assert_eq!(
        directives[7],
        "Try to mimic the poetic style of Pablo Neruda."
    );
    assert_eq!(directives[8], "Use this title exactly: ### Ten Years On");
    assert!(directives[9].starts_with("After the poem, add a short explanation"));
}

#[test]
fn compile_relative_directive_order_is_stable_across_subsets() {
    // Dropping optionals must never reorder what remains.
    let full = compile(&full_prefs());
    let partial = compile(&PoemPreferences {
        recipient: None,
        mimic_poet: None,
        ..full_prefs()
    });

    let full_directives: Vec<&String> = full
        .directives()
        .iter()
        .filter(|d| {
            !d.starts_with("The poem is for:") && !d.starts_with("Try to mimic the poetic style")
        })
        .collect();
    let partial_directives: Vec<&String> = partial.directives().iter().collect();
    assert_eq!(full_directives, partial_directives);
}

#[tokio::test]
async fn compose_returns_the_model_text() {
    let generator = PoemGenerator::new(
        Arc::new(CannedProvider("### Ten Years On\nA verse.")),
        "gpt-4o",
    );

    let poem = generator
        .compose(&full_prefs())
        .await
        .expect("compose should succeed");
    assert_eq!(poem, "### Ten Years On\nA verse.");
}
