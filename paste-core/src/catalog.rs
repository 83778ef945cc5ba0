//! Emoji dataset used by the matcher
//!
//! The built-in table covers the most commonly searched emoji. Hosts with a full
//! dataset load it as JSON: `[{"character": "😀", "name": "grinning face", "keywords": ["smile"]}]`.

use crate::interface::{Emoji, PasteError};
use serde::Deserialize;

/// An emoji plus the extra words it can be found by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub emoji: Emoji,
    pub keywords: Vec<String>,
}

#[derive(Deserialize)]
struct RawEntry {
    character: String,
    name: String,
    #[serde(default)]
    keywords: Vec<String>,
}

// (character, name, space-separated keywords)
const BUILTIN: &[(&str, &str, &str)] = &[
    ("😀", "grinning face", "smile happy joy"),
    ("😃", "grinning face with big eyes", "smile happy"),
    ("😄", "grinning face with smiling eyes", "smile happy laugh"),
    ("😁", "beaming face with smiling eyes", "grin happy"),
    ("😆", "grinning squinting face", "laugh satisfied"),
    ("😅", "grinning face with sweat", "relief nervous"),
    ("😂", "face with tears of joy", "laugh lol cry haha"),
    ("🤣", "rolling on the floor laughing", "rofl lol laugh"),
    ("😊", "smiling face with smiling eyes", "blush happy"),
    ("😇", "smiling face with halo", "angel innocent"),
    ("🙂", "slightly smiling face", "smile"),
    ("🙃", "upside down face", "silly sarcasm"),
    ("😉", "winking face", "wink flirt"),
    ("😍", "smiling face with heart eyes", "love crush"),
    ("😘", "face blowing a kiss", "kiss love"),
    ("😋", "face savoring food", "yum delicious tongue"),
    ("😜", "winking face with tongue", "silly joke"),
    ("🤔", "thinking face", "hmm think consider"),
    ("🤐", "zipper mouth face", "secret quiet"),
    ("😐", "neutral face", "meh blank"),
    ("😏", "smirking face", "smirk smug"),
    ("😒", "unamused face", "meh unhappy"),
    ("🙄", "face with rolling eyes", "eyeroll whatever"),
    ("😬", "grimacing face", "awkward oops"),
    ("😌", "relieved face", "calm relief"),
    ("😔", "pensive face", "sad dejected"),
    ("😴", "sleeping face", "sleep tired zzz"),
    ("😷", "face with medical mask", "sick ill doctor"),
    ("🤒", "face with thermometer", "sick fever"),
    ("🤢", "nauseated face", "sick gross vomit"),
    ("😎", "smiling face with sunglasses", "cool sun"),
    ("🤓", "nerd face", "geek glasses"),
    ("😕", "confused face", "puzzled"),
    ("😟", "worried face", "concern nervous"),
    ("😮", "face with open mouth", "wow surprise"),
    ("😲", "astonished face", "shocked amazed"),
    ("😳", "flushed face", "embarrassed blush"),
    ("😢", "crying face", "sad tear cry"),
    ("😭", "loudly crying face", "sob sad cry"),
    ("😱", "face screaming in fear", "scream scared horror"),
    ("😤", "face with steam from nose", "angry triumph"),
    ("😡", "pouting face", "angry mad rage"),
    ("😠", "angry face", "mad annoyed"),
    ("💀", "skull", "dead death dying"),
    ("💩", "pile of poo", "poop crap"),
    ("🤡", "clown face", "clown joke"),
    ("👻", "ghost", "halloween spooky boo"),
    ("👽", "alien", "ufo space"),
    ("🤖", "robot", "bot machine"),
    ("😺", "grinning cat", "cat smile"),
    ("🙈", "see no evil monkey", "monkey shy"),
    ("❤️", "red heart", "love heart"),
    ("💔", "broken heart", "heartbreak sad"),
    ("💯", "hundred points", "100 perfect score"),
    ("💥", "collision", "boom explosion"),
    ("💤", "zzz", "sleep tired"),
    ("👋", "waving hand", "wave hello bye"),
    ("👌", "ok hand", "okay perfect"),
    ("✌️", "victory hand", "peace"),
    ("🤞", "crossed fingers", "luck hope"),
    ("👍", "thumbs up", "like yes approve"),
    ("👎", "thumbs down", "dislike no"),
    ("👏", "clapping hands", "clap applause bravo"),
    ("🙌", "raising hands", "celebrate hooray"),
    ("🙏", "folded hands", "please pray thanks"),
    ("💪", "flexed biceps", "strong muscle"),
    ("👀", "eyes", "look see"),
    ("🧠", "brain", "smart think"),
    ("🐶", "dog face", "dog puppy pet"),
    ("🐱", "cat face", "cat kitten pet"),
    ("🦊", "fox", "animal"),
    ("🐻", "bear", "animal"),
    ("🐼", "panda", "animal bear"),
    ("🐸", "frog", "animal toad"),
    ("🐵", "monkey face", "animal"),
    ("🦄", "unicorn", "magic fantasy"),
    ("🐝", "honeybee", "bee insect"),
    ("🌸", "cherry blossom", "flower spring"),
    ("🌹", "rose", "flower love"),
    ("🌵", "cactus", "plant desert"),
    ("🍀", "four leaf clover", "luck irish"),
    ("🍕", "pizza", "food cheese"),
    ("🍔", "hamburger", "burger food"),
    ("🌮", "taco", "food mexican"),
    ("🍣", "sushi", "food japanese fish"),
    ("🍩", "doughnut", "donut dessert"),
    ("🍪", "cookie", "dessert"),
    ("🎂", "birthday cake", "birthday party cake"),
    ("🍺", "beer mug", "beer drink"),
    ("🍷", "wine glass", "wine drink"),
    ("☕", "hot beverage", "coffee tea"),
    ("🔥", "fire", "hot lit flame"),
    ("⭐", "star", "favorite"),
    ("🌈", "rainbow", "pride weather"),
    ("☀️", "sun", "weather sunny"),
    ("🌙", "crescent moon", "night moon"),
    ("⚡", "high voltage", "lightning zap electric"),
    ("❄️", "snowflake", "snow cold winter"),
    ("🎉", "party popper", "party celebrate tada"),
    ("🎁", "wrapped gift", "present birthday"),
    ("🎈", "balloon", "party"),
    ("🏆", "trophy", "win award champion"),
    ("⚽", "soccer ball", "football sport"),
    ("🏀", "basketball", "sport ball"),
    ("🎮", "video game", "controller gaming"),
    ("🎵", "musical note", "music song"),
    ("📱", "mobile phone", "iphone cell"),
    ("💻", "laptop", "computer mac"),
    ("📷", "camera", "photo picture"),
    ("💡", "light bulb", "idea"),
    ("💰", "money bag", "money cash rich"),
    ("✉️", "envelope", "mail email letter"),
    ("📌", "pushpin", "pin"),
    ("🔑", "key", "lock password"),
    ("🚀", "rocket", "launch space ship"),
    ("✈️", "airplane", "flight travel plane"),
    ("🚗", "automobile", "car drive"),
    ("🏠", "house", "home"),
    ("✅", "check mark button", "done yes ok"),
    ("❌", "cross mark", "no wrong cancel"),
    ("❓", "red question mark", "question what"),
    ("❗", "red exclamation mark", "exclamation important"),
];

/// The built-in emoji table
pub fn builtin() -> Vec<CatalogEntry> {
    BUILTIN
        .iter()
        .map(|(character, name, keywords)| CatalogEntry {
            emoji: Emoji::new(*character, *name),
            keywords: keywords.split_whitespace().map(str::to_string).collect(),
        })
        .collect()
}

/// Parse a JSON dataset. Entries with a blank character or name are rejected.
pub fn from_json(json: &str) -> Result<Vec<CatalogEntry>, PasteError> {
    let raw: Vec<RawEntry> = serde_json::from_str(json)
        .map_err(|e| PasteError::InvalidInput(format!("emoji dataset: {}", e)))?;

    raw.into_iter()
        .enumerate()
        .map(|(i, entry)| {
            if entry.character.trim().is_empty() || entry.name.trim().is_empty() {
                return Err(PasteError::InvalidInput(format!(
                    "emoji dataset entry {} has an empty character or name",
                    i
                )));
            }
            Ok(CatalogEntry {
                emoji: Emoji::new(entry.character, entry.name),
                keywords: entry.keywords,
            })
        })
        .collect()
}
