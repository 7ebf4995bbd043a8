//! Cosmetic variation so repeated runs do not open the same way.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

const TIME_OF_DAY: &[&str] = &[
    "early morning",
    "mid-morning",
    "noon",
    "afternoon",
    "dusk",
    "evening",
    "late night",
    "midnight",
    "pre-dawn",
];

const WEATHER: &[&str] = &[
    "clear skies",
    "overcast",
    "light rain",
    "heavy rain",
    "fog",
    "mist",
    "snow flurries",
    "windy conditions",
    "humid atmosphere",
    "crisp air",
];

const CAMERA: &[&str] = &[
    "wide establishing shot",
    "close-up",
    "medium shot",
    "low angle",
    "high angle",
    "dutch angle",
    "over-the-shoulder",
    "tracking shot",
];

const MOOD: &[&str] = &[
    "tense",
    "peaceful",
    "ominous",
    "hopeful",
    "melancholic",
    "energetic",
    "mysterious",
    "contemplative",
    "anxious",
    "serene",
];

/// Time, weather, camera and mood woven into a prompt.
///
/// # Examples
///
/// ```
/// use storyreel_story::Variation;
///
/// let a = Variation::draw(Some(7));
/// let b = Variation::draw(Some(7));
/// assert_eq!(a, b);
/// assert_eq!(a.seed, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variation {
    /// Seed the draw was made from
    pub seed: u64,
    /// Time of day
    pub time_of_day: String,
    /// Weather or atmosphere
    pub weather: String,
    /// Camera style
    pub camera: String,
    /// Overall mood
    pub mood: String,
}

impl Variation {
    /// Draw a variation. The same seed always gives the same draw.
    pub fn draw(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen_range(0..1_000_000));
        let mut rng = StdRng::seed_from_u64(seed);

        Self {
            seed,
            time_of_day: pick(&mut rng, TIME_OF_DAY),
            weather: pick(&mut rng, WEATHER),
            camera: pick(&mut rng, CAMERA),
            mood: pick(&mut rng, MOOD),
        }
    }
}

fn pick(rng: &mut StdRng, options: &[&str]) -> String {
    options[rng.gen_range(0..options.len())].to_string()
}
