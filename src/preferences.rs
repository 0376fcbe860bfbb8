//! Typed poem preferences and the fixed choice catalogs.
//!
//! Every selectable field is a real enum rather than a validated string, so
//! the compiler works over a closed input domain. The human-readable labels
//! returned by [`as_str`](PoemType::as_str) are interpolated into directives
//! verbatim, en-dashes and all, and must not be edited casually.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of poem being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum PoemType {
    Romantic,
    Reflective,
    Motivational,
    Melancholic,
    NatureInspired,
    Humorous,
    Narrative,
    Abstract,
    Spiritual,
    Celebratory,
    Farewell,
    Gratitude,
    Inspirational,
    Apology,
    Friendship,
    Mystical,
}

impl PoemType {
    /// All poem types, in presentation order.
    pub const ALL: &'static [PoemType] = &[
        PoemType::Romantic,
        PoemType::Reflective,
        PoemType::Motivational,
        PoemType::Melancholic,
        PoemType::NatureInspired,
        PoemType::Humorous,
        PoemType::Narrative,
        PoemType::Abstract,
        PoemType::Spiritual,
        PoemType::Celebratory,
        PoemType::Farewell,
        PoemType::Gratitude,
        PoemType::Inspirational,
        PoemType::Apology,
        PoemType::Friendship,
        PoemType::Mystical,
    ];

    /// Human-readable label, interpolated verbatim into directives.
    pub fn as_str(&self) -> &'static str {
        match self {
            PoemType::Romantic => "Romantic",
            PoemType::Reflective => "Reflective",
            PoemType::Motivational => "Motivational",
            PoemType::Melancholic => "Melancholic",
            PoemType::NatureInspired => "Nature inspired",
            PoemType::Humorous => "Humorous",
            PoemType::Narrative => "Narrative",
            PoemType::Abstract => "Abstract",
            PoemType::Spiritual => "Spiritual",
            PoemType::Celebratory => "Celebratory",
            PoemType::Farewell => "Farewell",
            PoemType::Gratitude => "Gratitude",
            PoemType::Inspirational => "Inspirational",
            PoemType::Apology => "Apology",
            PoemType::Friendship => "Friendship",
            PoemType::Mystical => "Mystical",
        }
    }
}

impl fmt::Display for PoemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The tone or mood of the poem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Mood {
    Hopeful,
    Wistful,
    DarkAndDeep,
    Playful,
    CalmAndSerene,
    Passionate,
    Mysterious,
    Joyful,
    Lonely,
    Nostalgic,
    Empowering,
    Dreamy,
    Heartbroken,
    Melancholic,
    Angry,
    Curious,
    Grateful,
    Philosophical,
    Whimsical,
    Sacred,
    Bittersweet,
    Surreal,
    Flirty,
    Romantic,
    Satirical,
    Ironic,
    Reflective,
    Introspective,
}

impl Mood {
    /// All moods, in presentation order.
    pub const ALL: &'static [Mood] = &[
        Mood::Hopeful,
        Mood::Wistful,
        Mood::DarkAndDeep,
        Mood::Playful,
        Mood::CalmAndSerene,
        Mood::Passionate,
        Mood::Mysterious,
        Mood::Joyful,
        Mood::Lonely,
        Mood::Nostalgic,
        Mood::Empowering,
        Mood::Dreamy,
        Mood::Heartbroken,
        Mood::Melancholic,
        Mood::Angry,
        Mood::Curious,
        Mood::Grateful,
        Mood::Philosophical,
        Mood::Whimsical,
        Mood::Sacred,
        Mood::Bittersweet,
        Mood::Surreal,
        Mood::Flirty,
        Mood::Romantic,
        Mood::Satirical,
        Mood::Ironic,
        Mood::Reflective,
        Mood::Introspective,
    ];

    /// Human-readable label, interpolated verbatim into directives.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Hopeful => "Hopeful",
            Mood::Wistful => "Wistful",
            Mood::DarkAndDeep => "Dark and deep",
            Mood::Playful => "Playful",
            Mood::CalmAndSerene => "Calm and serene",
            Mood::Passionate => "Passionate",
            Mood::Mysterious => "Mysterious",
            Mood::Joyful => "Joyful",
            Mood::Lonely => "Lonely",
            Mood::Nostalgic => "Nostalgic",
            Mood::Empowering => "Empowering",
            Mood::Dreamy => "Dreamy",
            Mood::Heartbroken => "Heartbroken",
            Mood::Melancholic => "Melancholic",
            Mood::Angry => "Angry",
            Mood::Curious => "Curious",
            Mood::Grateful => "Grateful",
            Mood::Philosophical => "Philosophical",
            Mood::Whimsical => "Whimsical",
            Mood::Sacred => "Sacred",
            Mood::Bittersweet => "Bittersweet",
            Mood::Surreal => "Surreal",
            Mood::Flirty => "Flirty",
            Mood::Romantic => "Romantic",
            Mood::Satirical => "Satirical",
            Mood::Ironic => "Ironic",
            Mood::Reflective => "Reflective",
            Mood::Introspective => "Introspective",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The structural form of the poem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum PoemStructure {
    FreeVerse,
    RhymingCouplets,
    Haiku,
    Limerick,
    Sonnet,
    Acrostic,
    SurpriseMe,
}

impl PoemStructure {
    /// All structures, in presentation order.
    pub const ALL: &'static [PoemStructure] = &[
        PoemStructure::FreeVerse,
        PoemStructure::RhymingCouplets,
        PoemStructure::Haiku,
        PoemStructure::Limerick,
        PoemStructure::Sonnet,
        PoemStructure::Acrostic,
        PoemStructure::SurpriseMe,
    ];

    /// Human-readable label, interpolated verbatim into directives.
    pub fn as_str(&self) -> &'static str {
        match self {
            PoemStructure::FreeVerse => "Free Verse",
            PoemStructure::RhymingCouplets => "Rhyming Couplets",
            PoemStructure::Haiku => "Haiku",
            PoemStructure::Limerick => "Limerick",
            PoemStructure::Sonnet => "Sonnet",
            PoemStructure::Acrostic => "Acrostic",
            PoemStructure::SurpriseMe => "Surprise Me",
        }
    }
}

impl fmt::Display for PoemStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inclusive line-count range for a length bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub min_lines: u32,
    pub max_lines: u32,
}

/// A labeled preset mapping to an inclusive line-count range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum LengthBucket {
    VeryShort,
    Short,
    Medium,
    Long,
    VeryLong,
    Extended,
    Epic,
}

impl LengthBucket {
    /// All length buckets, in presentation order.
    pub const ALL: &'static [LengthBucket] = &[
        LengthBucket::VeryShort,
        LengthBucket::Short,
        LengthBucket::Medium,
        LengthBucket::Long,
        LengthBucket::VeryLong,
        LengthBucket::Extended,
        LengthBucket::Epic,
    ];

    /// Human-readable label, interpolated verbatim into directives.
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthBucket::VeryShort => "Very Short (3–5 lines)",
            LengthBucket::Short => "Short (6–10 lines)",
            LengthBucket::Medium => "Medium (11–15 lines)",
            LengthBucket::Long => "Long (16–25 lines)",
            LengthBucket::VeryLong => "Very Long (26–40 lines)",
            LengthBucket::Extended => "Extended (41–60 lines)",
            LengthBucket::Epic => "Epic (60+ lines)",
        }
    }

    /// Inclusive line-count range for this bucket. Total over all buckets;
    /// `min_lines <= max_lines` holds by construction.
    pub fn range(&self) -> LineRange {
        let (min_lines, max_lines) = match self {
            LengthBucket::VeryShort => (3, 5),
            LengthBucket::Short => (6, 10),
            LengthBucket::Medium => (11, 15),
            LengthBucket::Long => (16, 25),
            LengthBucket::VeryLong => (26, 40),
            LengthBucket::Extended => (41, 60),
            LengthBucket::Epic => (60, 100),
        };
        LineRange {
            min_lines,
            max_lines,
        }
    }
}

impl fmt::Display for LengthBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A famous poet whose style the poem should imitate.
///
/// "No mimicry requested" is modeled as `Option::<Poet>::None` on the
/// preference record, not as a sentinel variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Poet {
    WilliamShakespeare,
    RobertFrost,
    EmilyDickinson,
    LangstonHughes,
    Rumi,
    SylviaPlath,
    PabloNeruda,
    MayaAngelou,
    JohnKeats,
    WilliamWordsworth,
}

impl Poet {
    /// All poets, in presentation order.
    pub const ALL: &'static [Poet] = &[
        Poet::WilliamShakespeare,
        Poet::RobertFrost,
        Poet::EmilyDickinson,
        Poet::LangstonHughes,
        Poet::Rumi,
        Poet::SylviaPlath,
        Poet::PabloNeruda,
        Poet::MayaAngelou,
        Poet::JohnKeats,
        Poet::WilliamWordsworth,
    ];

    /// The poet's name as interpolated into the mimicry directive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Poet::WilliamShakespeare => "William Shakespeare",
            Poet::RobertFrost => "Robert Frost",
            Poet::EmilyDickinson => "Emily Dickinson",
            Poet::LangstonHughes => "Langston Hughes",
            Poet::Rumi => "Rumi",
            Poet::SylviaPlath => "Sylvia Plath",
            Poet::PabloNeruda => "Pablo Neruda",
            Poet::MayaAngelou => "Maya Angelou",
            Poet::JohnKeats => "John Keats",
            Poet::WilliamWordsworth => "William Wordsworth",
        }
    }
}

impl fmt::Display for Poet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One complete set of poem preferences, constructed once per generation
/// request and never mutated afterwards.
///
/// Optional free-text fields are explicit `Option`s. An empty `Some("")` is
/// still treated as absent by the compiler; values are never trimmed or
/// case-normalized before interpolation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoemPreferences {
    pub poem_type: PoemType,
    pub theme: String,
    pub recipient: Option<String>,
    pub mood: Mood,
    pub structure: PoemStructure,
    pub length: LengthBucket,
    pub custom_title: Option<String>,
    pub keywords: Option<String>,
    pub mimic_poet: Option<Poet>,
    pub wants_explanation: bool,
}
