//! Static reference guide for the supported poem structures.
//!
//! Backs the `structures` CLI command: a short description plus a miniature
//! example per structural form, so users can pick a form without leaving the
//! terminal.

use crate::preferences::PoemStructure;

/// Reference entry for one poem structure.
#[derive(Debug, Clone)]
pub struct StructureGuide {
    /// The structure this entry describes.
    pub structure: PoemStructure,
    /// One-line characterization of the form.
    pub summary: &'static str,
    /// A miniature example in the form, blockquote-ready.
    pub example: &'static str,
}

/// Static array of all structure guide entries, in presentation order.
pub static STRUCTURE_GUIDES: &[StructureGuide] = &[
    StructureGuide {
        structure: PoemStructure::FreeVerse,
        summary: "No rules. Just natural flow.",
        example: "I walk alone where no path lies,\nThe wind decides my destination.",
    },
    StructureGuide {
        structure: PoemStructure::RhymingCouplets,
        summary: "Pairs of lines with rhyming ends (AABB).",
        example: "The stars above begin to gleam,\nWhile I drift into a dream.",
    },
    StructureGuide {
        structure: PoemStructure::Haiku,
        summary: "3 lines, nature-themed, 5-7-5.",
        example: "Winter whispers low\nBeneath the quiet snowfall\nDreams begin to glow.",
    },
    StructureGuide {
        structure: PoemStructure::Limerick,
        summary: "5-line poem, humorous, AABBA rhyme.",
        example: "A cat with a love for ballet,\nDanced gracefully every day...",
    },
    StructureGuide {
        structure: PoemStructure::Sonnet,
        summary: "14 lines, classic rhyme, romantic.",
        example: "Your smile, a spark.\nMy world turns bright.",
    },
    StructureGuide {
        structure: PoemStructure::Acrostic,
        summary: "First letter of each line spells a word.",
        example: "Holding hope in every night,\nEven when we lose the light.",
    },
    StructureGuide {
        structure: PoemStructure::SurpriseMe,
        summary: "A randomly chosen poetic form, for the curious or adventurous.",
        example: "Anything from a couplet to an ode.",
    },
];

/// Look up the guide entry for a structure. Total over all structures.
pub fn get_structure_guide(structure: PoemStructure) -> &'static StructureGuide {
    STRUCTURE_GUIDES
        .iter()
        .find(|guide| guide.structure == structure)
        .unwrap_or(&STRUCTURE_GUIDES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_covers_every_structure() {
        for &structure in PoemStructure::ALL {
            let guide = get_structure_guide(structure);
            assert_eq!(guide.structure, structure);
            assert!(!guide.summary.is_empty());
            assert!(!guide.example.is_empty());
        }
        assert_eq!(STRUCTURE_GUIDES.len(), PoemStructure::ALL.len());
    }

    #[test]
    fn test_guide_order_matches_presentation_order() {
        let order: Vec<PoemStructure> = STRUCTURE_GUIDES.iter().map(|g| g.structure).collect();
        assert_eq!(order.as_slice(), PoemStructure::ALL);
    }
}
