//! Fixed lookup tables used by the normalizer.
//!
//! All of these are built once. Lookups that miss fall back to a default;
//! none of them fail.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Broad shape of a formation, used for aggregate statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormationClass {
    /// Two long lines facing.
    Longways,
    /// Small groups progressing around the room.
    Round,
    /// Couples arranged on the sides of a square or triangle.
    Square,
    /// Unrecognized formation tag.
    Other,
}

impl FormationClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Longways => "longways",
            Self::Round => "round",
            Self::Square => "square",
            Self::Other => "other",
        }
    }

    pub fn all() -> &'static [FormationClass] {
        &[Self::Longways, Self::Round, Self::Square, Self::Other]
    }
}

/// Participants assumed when a formation tag is not in [`FORMATIONS`].
pub const DEFAULT_PARTICIPANTS: u32 = 4;

/// Formation tag → (participants, class).
///
/// Participant counts are the usual size of one set, not a count derived
/// from the choreography.
pub const FORMATIONS: &[(&str, u32, FormationClass)] = &[
    ("two_couples_facing", 4, FormationClass::Round),
    ("three_facing_three", 6, FormationClass::Round),
    ("four_facing_four", 8, FormationClass::Round),
    ("couples_round", 2, FormationClass::Round),
    ("long_lines", 10, FormationClass::Longways),
    ("four_hand", 4, FormationClass::Square),
    ("six_hand", 6, FormationClass::Square),
    ("eight_hand", 8, FormationClass::Square),
    ("sixteen_hand", 16, FormationClass::Square),
];

/// Upper bpm bounds (exclusive) for the tempo bands; anything faster is "Fast".
pub const TEMPO_BANDS: &[(u32, &str)] = &[(115, "Moderate"), (125, "Lively")];
pub const FASTEST_TEMPO_BAND: &str = "Fast";

/// Handhold keywords in priority order, matched case-insensitively against
/// a movement description. The first hit wins.
pub const HANDHOLD_KEYWORDS: &[(&str, &str)] = &[
    ("right hand", "Right hands joined"),
    ("left hand", "Left hands joined"),
    ("both hands", "Both hands joined"),
    ("hands across", "Hands across in a star"),
    ("no hand", "No handhold"),
];
pub const DEFAULT_HANDHOLDS: &str = "Various handholds as described";

pub const DEFAULT_FOOTWORK: &str = "Standard ceili footwork";

pub const MAX_TIPS: usize = 3;
pub const DEFAULT_TIPS: &[&str] = &[
    "Keep in time with the music",
    "Stay aware of the other dancers in your set",
];

/// Attached unchanged to every step.
pub const COMMON_MISTAKES: &[&str] = &[
    "Rushing ahead of the music",
    "Losing count of the bars",
    "Letting the formation drift out of shape",
];

/// Region recorded for dances that belong to no particular county.
pub const DEFAULT_REGION: &str = "All Ireland";

/// Curated Irish-language dance titles, keyed by exact English title.
pub static TITLE_TRANSLATIONS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        HashMap::from([
            ("The Walls of Limerick", "Ballaí Luimní"),
            ("The Siege of Ennis", "Léigear Inse"),
            ("The Siege of Carrick", "Léigear Charraig"),
            ("The Bridge of Athlone", "Droichead Átha Luain"),
            ("The Waves of Tory", "Tonnta Thoraí"),
            ("The Antrim Reel", "Ríl Aontroma"),
            ("Trip to the Cottage", "Turas go dtí an Teachín"),
            ("The Fairy Reel", "Ríl na Sióg"),
            ("The Four Hand Reel", "Ríl Cheathrair"),
            ("The Eight Hand Reel", "Ríl Ochtair"),
            ("The Sixteen Hand Reel", "Ríl Sé Duine Dhéag"),
            ("The High Cauled Cap", "An Caipín Ard"),
            ("The Gates of Derry", "Geataí Dhoire"),
            ("The Connemara Set", "Seit Chonamara"),
            ("The Cashel Set", "Seit Chaisil"),
            ("Rince Fada", "Rince Fada"),
        ])
    });

/// Curated Irish-language movement names, keyed by exact English name.
pub static MOVEMENT_TRANSLATIONS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        HashMap::from([
            ("Advance and Retire", "Ar Aghaidh agus ar Gcúl"),
            ("Swing", "Luascadh"),
            ("Sidestep", "Céim Taobh"),
            ("Lead Around", "Timpeall"),
            ("Body", "Corp an Rince"),
            ("Right Hands Across", "Lámha Deasa Trasna"),
            ("Left Hands Back", "Lámha Clé ar Ais"),
            ("Hands Across", "Lámha Trasna"),
            ("Ring", "Fáinne"),
            ("Promenade", "Siúlóid"),
        ])
    });
