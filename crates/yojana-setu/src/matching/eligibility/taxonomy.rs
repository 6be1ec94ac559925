//! Keyword vocabularies searched for in lower-cased scheme text.
//!
//! Short tokens that occur inside unrelated words ("sc" in "scholarship", "men" in
//! "women", "ews" in "news") are declared as [`Term::Word`] and only match on word
//! boundaries. Everything else is a [`Term::Fragment`] and matches anywhere, so
//! "cultivat" still finds "cultivators".

use crate::matching::profile::{Caste, EducationLevel, Gender, Occupation};

use Term::{Fragment, Word};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Fragment(&'static str),
    Word(&'static str),
}

impl Term {
    pub fn text(self) -> &'static str {
        match self {
            Fragment(text) | Word(text) => text,
        }
    }

    pub fn found_in(self, haystack: &str) -> bool {
        match self {
            Fragment(text) => haystack.contains(text),
            Word(text) => contains_word(haystack, text),
        }
    }

    /// Looks for `prefix` immediately followed by this term, e.g. "only sc".
    pub fn found_after(self, prefix: &str, haystack: &str) -> bool {
        let phrase = format!("{prefix} {}", self.text().trim());
        match self {
            Fragment(_) => haystack.contains(&phrase),
            Word(_) => contains_word(haystack, &phrase),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordSet(&'static [Term]);

impl KeywordSet {
    pub fn terms(self) -> impl Iterator<Item = Term> {
        self.0.iter().copied()
    }

    pub fn any_in(self, haystack: &str) -> bool {
        self.terms().any(|term| term.found_in(haystack))
    }

    /// Number of distinct terms present.
    pub fn count_in(self, haystack: &str) -> usize {
        self.terms().filter(|term| term.found_in(haystack)).count()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn contains_word(haystack: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    haystack.match_indices(word).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + word.len()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

pub fn occupation_keywords(occupation: Occupation) -> KeywordSet {
    KeywordSet(match occupation {
        Occupation::Farmer => &[
            Fragment("farmer"),
            Fragment("kisan"),
            Fragment("agriculture"),
            Fragment("farming"),
            Fragment("cultivat"),
            Fragment("crop"),
            Fragment("irrigation"),
            Fragment("krishi"),
            Fragment("kheti"),
            Fragment("pm-kisan"),
            Fragment("pradhan mantri kisan"),
        ],
        Occupation::Student => &[
            Fragment("student"),
            Fragment("scholar"),
            Fragment("education"),
            Fragment("school"),
            Fragment("college"),
            Fragment("university"),
            Fragment("study"),
            Fragment("academic"),
            Fragment("scholarship"),
        ],
        Occupation::Unemployed => &[
            Fragment("unemployed"),
            Fragment("jobless"),
            Fragment("employment"),
            Fragment("berozgar"),
            Fragment("rozgar"),
            Fragment("skill training"),
            Fragment("vocational"),
        ],
        Occupation::Worker => &[
            Fragment("worker"),
            Fragment("labour"),
            Fragment("laborer"),
            Fragment("construction"),
            Fragment("building"),
            Fragment("mazdoor"),
            Fragment("shramik"),
            Fragment("daily wage"),
        ],
        Occupation::Artisan => &[
            Fragment("artisan"),
            Fragment("handicraft"),
            Fragment("craft"),
            Fragment("weaver"),
            Fragment("handloom"),
            Fragment("potter"),
            Fragment("blacksmith"),
            Fragment("traditional"),
        ],
        Occupation::Fisherman => &[
            Fragment("fisherman"),
            Fragment("fisher"),
            Fragment("fishing"),
            Fragment("fish"),
            Fragment("marine"),
            Fragment("boat"),
            Fragment("matsya"),
            Fragment("coastal"),
        ],
        Occupation::Entrepreneur => &[
            Fragment("entrepreneur"),
            Fragment("msme"),
            Fragment("business"),
            Fragment("startup"),
            Fragment("enterprise"),
            Fragment("industry"),
            Fragment("self-employ"),
            Fragment("mudra"),
        ],
        Occupation::Teacher => &[
            Fragment("teacher"),
            Fragment("teaching"),
            Fragment("shikshak"),
            Fragment("adhyapak"),
        ],
        Occupation::Healthcare => &[
            Fragment("health"),
            Fragment("medical"),
            Fragment("hospital"),
            Fragment("medicine"),
            Fragment("treatment"),
            Fragment("disease"),
            Fragment("ayushman"),
        ],
    })
}

pub fn gender_keywords(gender: Gender) -> KeywordSet {
    KeywordSet(match gender {
        Gender::Female => &[
            Word("woman"),
            Word("women"),
            Word("female"),
            Word("females"),
            Word("girl"),
            Word("girls"),
            Word("lady"),
            Word("ladies"),
            Word("mahila"),
            Word("widow"),
            Word("widows"),
            Word("widowed"),
            Word("mother"),
            Word("mothers"),
            Word("pregnant"),
            Word("maternity"),
            Word("beti"),
        ],
        Gender::Male => &[
            Word("man"),
            Word("men"),
            Word("male"),
            Word("males"),
            Word("boy"),
            Word("boys"),
        ],
    })
}

/// Opposite-gender evidence ignores terms containing "man" or "employment", which
/// are too generic to mark a scheme as gender specific.
pub fn opposite_gender_terms(gender: Gender) -> impl Iterator<Item = Term> {
    gender_keywords(gender.opposite())
        .terms()
        .filter(|term| !["employment", "man"].iter().any(|ignore| term.text().contains(ignore)))
}

/// Keywords for a reserved category. The general category has none.
pub fn caste_keywords(caste: Caste) -> KeywordSet {
    KeywordSet(match caste {
        Caste::Sc => &[
            Fragment("scheduled caste"),
            Word("sc"),
            Fragment("dalit"),
            Word("sc category"),
        ],
        Caste::St => &[
            Fragment("scheduled tribe"),
            Word("st"),
            Fragment("tribal"),
            Fragment("adivasi"),
            Fragment("tribe"),
            Word("st category"),
        ],
        Caste::Obc => &[
            Word("obc"),
            Fragment("backward class"),
            Fragment("other backward"),
            Word("obc category"),
        ],
        Caste::Minority => &[
            Fragment("minority"),
            Fragment("minorities"),
            Word("muslim"),
            Word("christian"),
            Word("sikh"),
            Word("buddhist"),
            Word("jain"),
        ],
        Caste::General => &[],
    })
}

/// Categories whose explicit exclusivity can penalise other applicants.
pub const RESERVED_CASTES: [Caste; 4] = [Caste::Sc, Caste::St, Caste::Obc, Caste::Minority];

pub const BPL_KEYWORDS: KeywordSet = KeywordSet(&[
    Word("bpl"),
    Fragment("below poverty"),
    Word("poor"),
    Fragment("economically weak"),
    Word("ews"),
    Fragment("low income"),
    Fragment("destitute"),
    Fragment("antyodaya"),
]);

pub const LOW_INCOME_KEYWORDS: KeywordSet = KeywordSet(&[
    Word("small"),
    Word("marginal"),
    Fragment("weaker section"),
]);

pub const SENIOR_KEYWORDS: KeywordSet = KeywordSet(&[
    Fragment("senior citizen"),
    Fragment("old age"),
    Fragment("pension"),
    Fragment("elderly"),
    Fragment("60 years"),
    Word("aged"),
    Fragment("vridha"),
]);

pub const DISABILITY_KEYWORDS: KeywordSet = KeywordSet(&[
    Fragment("disabled"),
    Fragment("disability"),
    Fragment("handicapped"),
    Fragment("divyang"),
    Fragment("differently abled"),
    Word("pwd"),
]);

pub const WIDOW_KEYWORDS: KeywordSet = KeywordSet(&[
    Fragment("widow"),
    Fragment("vidhwa"),
    Fragment("destitute women"),
]);

pub const LAND_HOLDING_KEYWORDS: KeywordSet = KeywordSet(&[
    Fragment("small farmer"),
    Fragment("marginal farmer"),
    Fragment("small and marginal"),
    Fragment("small/marginal"),
    Fragment("hectare"),
    Fragment("acre"),
    Fragment("land holding"),
    Fragment("landholding"),
]);

pub const EDUCATION_SCHEME_KEYWORDS: KeywordSet = KeywordSet(&[
    Fragment("scholarship"),
    Fragment("education"),
    Fragment("student"),
    Fragment("school"),
    Fragment("college"),
]);

pub fn education_keywords(level: EducationLevel) -> KeywordSet {
    KeywordSet(match level {
        EducationLevel::Primary => &[
            Word("primary"),
            Word("class 1"),
            Word("class 2"),
            Word("class 3"),
            Word("class 4"),
            Word("class 5"),
            Word("1st"),
            Word("2nd"),
            Word("3rd"),
            Word("4th"),
            Word("5th"),
        ],
        EducationLevel::Middle => &[
            Fragment("middle school"),
            Word("class 6"),
            Word("class 7"),
            Word("class 8"),
            Word("6th"),
            Word("7th"),
            Word("8th"),
        ],
        EducationLevel::Secondary => &[
            Word("10th"),
            Word("class 10"),
            Word("sslc"),
            Word("secondary"),
            Fragment("high school"),
            Fragment("matric"),
            Word("class 9"),
            Word("9th"),
        ],
        EducationLevel::HigherSecondary => &[
            Word("12th"),
            Word("class 12"),
            Word("puc"),
            Fragment("higher secondary"),
            Fragment("intermediate"),
            Word("class 11"),
            Word("11th"),
        ],
        EducationLevel::Undergraduate => &[
            Fragment("undergraduate"),
            Word("degree"),
            Fragment("bachelor"),
            Word("ba"),
            Word("bsc"),
            Word("bcom"),
            Word("btech"),
            Word("graduation"),
            Word("graduate"),
        ],
        EducationLevel::Postgraduate => &[
            Fragment("postgraduate"),
            Word("masters"),
            Word("ma"),
            Word("msc"),
            Word("mcom"),
            Word("mtech"),
            Word("mba"),
            Fragment("post graduation"),
        ],
        EducationLevel::Diploma => &[
            Word("diploma"),
            Word("iti"),
            Fragment("polytechnic"),
            Fragment("vocational"),
        ],
        EducationLevel::Phd => &[
            Word("phd"),
            Fragment("doctorate"),
            Word("research"),
            Fragment("doctoral"),
        ],
    })
}
