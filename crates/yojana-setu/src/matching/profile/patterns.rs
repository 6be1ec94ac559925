//! Ordered pattern tables used by the extractor. Within a table the first entry that
//! matches wins.

use std::sync::LazyLock;

use regex::Regex;

use super::{Caste, EducationLevel, Gender, IndianState, Occupation};

const NUMBER: &str = r"(\d[\d,]*(?:\.\d+)?)";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("profile pattern compiles")
}

fn table<T: Copy>(entries: &[(T, &str)]) -> Vec<(T, Regex)> {
    entries
        .iter()
        .map(|(key, pattern)| (*key, compile(pattern)))
        .collect()
}

/// Applied to the original text; capture 1 is the age.
pub(super) static AGE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b(\d{1,3})\s*(?:years?|yrs?)?\s*old\b",
        r"(?i)\bage\s*(?:is|:)?\s*(\d{1,3})\b",
        r"(?i)\bi\s*am\s*(\d{1,3})\b",
        r"(?i)\b(\d{1,3})\s*(?:year|yr)s?\b",
    ]
    .into_iter()
    .map(compile)
    .collect()
});

pub(super) static GENDER: LazyLock<Vec<(Gender, Regex)>> = LazyLock::new(|| {
    table(&[
        (
            Gender::Female,
            r"\b(?:women|woman|females?|girls?|lady|ladies|mahila|widow(?:ed|s)?|mothers?|stree|aurat|ladki)\b|ಮಹಿಳೆ|ಹೆಣ್ಣು|ಹುಡುಗಿ|ಮಗಳು",
        ),
        (
            Gender::Male,
            r"\b(?:man|men|males?|boys?|guy|aadmi|ladka)\b|ಗಂಡ|ಹುಡುಗ|ಮಗ",
        ),
    ])
});

pub(super) static OCCUPATION: LazyLock<Vec<(Occupation, Regex)>> = LazyLock::new(|| {
    table(&[
        (
            Occupation::Farmer,
            r"farmer|kisan|agriculture|farming|cultivat|krishi|krishik|raita|ಕೃಷಿಕ|ರೈತ",
        ),
        (
            Occupation::Student,
            r"student|studying|college|university|school|education|vidyarthi|padhai|chhatra|ವಿದ್ಯಾರ್ಥಿ",
        ),
        (
            Occupation::Unemployed,
            r"unemployed|jobless|no\s+job|without\s+job|berozgar|nirudyogi|ನಿರುದ್ಯೋಗಿ",
        ),
        (
            Occupation::Worker,
            r"worker|labour|laborer|mazdoor|construction|daily\s*wage|karmik|shramik|ಕಾರ್ಮಿಕ",
        ),
        (
            Occupation::Artisan,
            r"artisan|craftsman|handicraft|weaver|potter|blacksmith|karigar|ಕುಶಲಕರ್ಮಿ",
        ),
        (
            Occupation::Fisherman,
            r"fisherman|fisher|fishing|matsya|meengar|machhiwara|ಮೀನುಗಾರ",
        ),
        (
            Occupation::Entrepreneur,
            r"entrepreneur|business|startup|self.?employ|msme|vyapari|udyami|ಉದ್ಯಮಿ",
        ),
        (
            Occupation::Teacher,
            r"teacher|professor|lecturer|shikshak|adhyapak|ಶಿಕ್ಷಕ",
        ),
        (
            Occupation::Healthcare,
            r"doctor|nurse|medical|healthcare|hospital|vaidya|chikitsak|ವೈದ್ಯ",
        ),
    ])
});

/// How an income pattern contributes once it matches.
pub(super) enum IncomeRule {
    /// Capture 1 is the amount; the optional `unit` group marks lakh.
    Amount(Regex),
    /// A poverty keyword; sets the bpl bracket and flag.
    PovertyKeyword(Regex),
}

pub(super) static INCOME: LazyLock<Vec<IncomeRule>> = LazyLock::new(|| {
    vec![
        IncomeRule::Amount(compile(&format!(
            r"(?i)\b(?:income|earn\w*|salary|kamata|kamai)\s*(?:is|of|:)?\s*(?:rs\.?|₹|inr)?\s*{NUMBER}\s*(?P<unit>lakhs?|lacs?)?"
        ))),
        IncomeRule::Amount(compile(&format!(
            r"(?i)(?:\brs\.?|₹|\binr)\s*{NUMBER}\s*(?P<unit>lakhs?|lacs?)?"
        ))),
        IncomeRule::Amount(compile(&format!(
            r"(?i)\b{NUMBER}\s*(?P<unit>lakhs?|lacs?)\b"
        ))),
        IncomeRule::PovertyKeyword(compile(r"(?i)\bbpl\b|below\s*poverty\s*line")),
        IncomeRule::PovertyKeyword(compile(r"(?i)\bpoor\b|low\s*income|economically\s*weak")),
    ]
});

pub(super) static CASTE: LazyLock<Vec<(Caste, Regex)>> = LazyLock::new(|| {
    table(&[
        (
            Caste::Sc,
            r"\bsc\b|scheduled\s*caste|dalit|ಪರಿಶಿಷ್ಟ\s*ಜಾತಿ",
        ),
        (
            Caste::St,
            r"\bst\b|scheduled\s*tribe|tribal|adivasi|ಪರಿಶಿಷ್ಟ\s*ಪಂಗಡ|ಬುಡಕಟ್ಟು",
        ),
        (
            Caste::Obc,
            r"\bobc\b|other\s*backward\s*class|backward\s*class|ಹಿಂದುಳಿದ\s*ವರ್ಗ",
        ),
        (
            Caste::General,
            r"\bgeneral\b|unreserved|open\s*category|ಸಾಮಾನ್ಯ",
        ),
        (
            Caste::Minority,
            r"minorit(?:y|ies)|muslim|christian|\bsikh|buddhist|\bjain\b|\bparsi\b|ಅಲ್ಪಸಂಖ್ಯಾತ",
        ),
    ])
});

/// A state is recognised by its name or cities on the lower-cased text, or by an
/// upper-case abbreviation on the original text ("UP" but not "grew up").
pub(super) struct StateRule {
    pub(super) state: IndianState,
    pub(super) name: Regex,
    pub(super) abbreviation: Option<Regex>,
}

pub(super) static STATE: LazyLock<Vec<StateRule>> = LazyLock::new(|| {
    let entries: [(IndianState, &str, Option<&str>); 31] = [
        (
            IndianState::AndhraPradesh,
            r"\b(?:andhra\s*pradesh|andhra)\b",
            Some(r"\bAP\b"),
        ),
        (IndianState::ArunachalPradesh, r"\barunachal\b", None),
        (IndianState::Assam, r"\bassam\b", None),
        (IndianState::Bihar, r"\bbihar\b", None),
        (
            IndianState::Chhattisgarh,
            r"\b(?:chhattisgarh|chattisgarh)\b",
            None,
        ),
        (IndianState::Goa, r"\bgoa\b", None),
        (IndianState::Gujarat, r"\bgujarat\b", None),
        (IndianState::Haryana, r"\bharyana\b", None),
        (IndianState::HimachalPradesh, r"\bhimachal\b", None),
        (IndianState::Jharkhand, r"\bjharkhand\b", None),
        (
            IndianState::Karnataka,
            r"\b(?:karnataka|bangalore|bengaluru)\b",
            None,
        ),
        (IndianState::Kerala, r"\bkerala\b", None),
        (
            IndianState::MadhyaPradesh,
            r"\bmadhya\s*pradesh\b",
            Some(r"\bMP\b"),
        ),
        (
            IndianState::Maharashtra,
            r"\b(?:maharashtra|mumbai|pune)\b",
            None,
        ),
        (IndianState::Manipur, r"\bmanipur\b", None),
        (IndianState::Meghalaya, r"\bmeghalaya\b", None),
        (IndianState::Mizoram, r"\bmizoram\b", None),
        (IndianState::Nagaland, r"\bnagaland\b", None),
        (IndianState::Odisha, r"\b(?:odisha|orissa)\b", None),
        (IndianState::Punjab, r"\bpunjab\b", None),
        (IndianState::Rajasthan, r"\b(?:rajasthan|jaipur)\b", None),
        (IndianState::Sikkim, r"\bsikkim\b", None),
        (
            IndianState::TamilNadu,
            r"\b(?:tamil\s*nadu|chennai)\b",
            Some(r"\bTN\b"),
        ),
        (IndianState::Telangana, r"\b(?:telangana|hyderabad)\b", None),
        (IndianState::Tripura, r"\btripura\b", None),
        (
            IndianState::UttarPradesh,
            r"\b(?:uttar\s*pradesh|lucknow)\b",
            Some(r"\bUP\b"),
        ),
        (
            IndianState::Uttarakhand,
            r"\b(?:uttarakhand|uttaranchal)\b",
            None,
        ),
        (
            IndianState::WestBengal,
            r"\b(?:west\s*bengal|kolkata)\b",
            Some(r"\bWB\b"),
        ),
        (IndianState::Delhi, r"\b(?:delhi|ncr)\b", None),
        (
            IndianState::Puducherry,
            r"\b(?:puducherry|pondicherry)\b",
            None,
        ),
        (
            IndianState::JammuAndKashmir,
            r"\b(?:jammu|kashmir|j&k)\b",
            None,
        ),
    ];

    entries
        .into_iter()
        .map(|(state, name, abbreviation)| StateRule {
            state,
            name: compile(name),
            abbreviation: abbreviation.map(compile),
        })
        .collect()
});

/// How a land pattern converts its match into acres.
pub(super) enum LandRule {
    Acres(Regex),
    Hectares(Regex),
    /// A qualitative phrase mapped to a fixed acreage.
    Fixed(Regex, f64),
}

pub(super) const HECTARE_IN_ACRES: f64 = 2.47;

pub(super) static LAND: LazyLock<Vec<LandRule>> = LazyLock::new(|| {
    vec![
        LandRule::Acres(compile(&format!(r"(?i)\b{NUMBER}\s*(?:acres?|acr)\b"))),
        LandRule::Hectares(compile(&format!(r"(?i)\b{NUMBER}\s*(?:hectares?|ha)\b"))),
        LandRule::Acres(compile(&format!(r"(?i)\bland\s*(?:of\s*)?{NUMBER}"))),
        LandRule::Fixed(compile(r"(?i)small\s*(?:farmer|land|holding)"), 1.0),
        LandRule::Fixed(compile(r"(?i)marginal\s*(?:farmer|land)"), 1.0),
        LandRule::Fixed(compile(r"(?i)landless"), 0.0),
    ]
});

pub(super) static DISABILITY: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"disabled|disability|handicapped|divyang|\bblind\b|\bdeaf\b|physically\s*challenged|viklang|ವಿಕಲಚೇತನ",
    )
});

pub(super) static WIDOW: LazyLock<Regex> = LazyLock::new(|| compile(r"widow|vidhwa|ವಿಧವೆ"));

pub(super) static SENIOR: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"senior\s*citizen|old\s*age|elderly|pension|60\+|above\s*60|vridh|ಹಿರಿಯ\s*ನಾಗರಿಕ",
    )
});

pub(super) static BPL: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"\bbpl\b|below\s*poverty|\bpoor\b|economically\s*weak|\bews\b|low\s*income|garib|ಬಡವ",
    )
});

/// Highest tier first, so "higher secondary" is not read as "secondary" and
/// "2nd year degree" is not read as primary school.
pub(super) static EDUCATION: LazyLock<Vec<(EducationLevel, Regex)>> = LazyLock::new(|| {
    table(&[
        (
            EducationLevel::Phd,
            r"\bph\.?\s*d\b|doctorate|\bresearch\b|ಪಿಎಚ್\s*ಡಿ",
        ),
        (
            EducationLevel::Postgraduate,
            r"\b(?:pg|postgraduate|post\s*graduat\w*|masters?|ma|msc|mcom|mtech|mba)\b|ಸ್ನಾತಕೋತ್ತರ",
        ),
        (
            EducationLevel::Undergraduate,
            r"\b(?:ug|undergraduate|bachelors?|ba|bsc|bcom|btech|b\.e|degree|graduation|graduate)\b|ಪದವಿ",
        ),
        (
            EducationLevel::Diploma,
            r"\b(?:diploma|iti|polytechnic)\b|ಡಿಪ್ಲೊಮಾ",
        ),
        (
            EducationLevel::HigherSecondary,
            r"\b(?:11th|12th|class\s*1[12]|puc|higher\s*secondary|inter|intermediate)\b|ಪಿಯುಸಿ",
        ),
        (
            EducationLevel::Secondary,
            r"\b(?:9th|10th|class\s*(?:9|10)|sslc|secondary|high\s*school|matric\w*)\b|ಪ್ರೌಢಶಾಲೆ",
        ),
        (
            EducationLevel::Middle,
            r"\b(?:6th|7th|8th|class\s*[6-8]|middle\s*school)\b|ಮಧ್ಯಮ",
        ),
        (
            EducationLevel::Primary,
            r"\b(?:1st|2nd|3rd|4th|5th|class\s*[1-5]|primary|prathamik)\b|ಪ್ರಾಥಮಿಕ",
        ),
    ])
});
