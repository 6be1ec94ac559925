use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Age limit stated in a scheme's eligibility text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeRequirement {
    Between { min: u32, max: u32 },
    AtLeast(u32),
    Under(u32),
}

impl AgeRequirement {
    pub fn admits(self, age: u32) -> bool {
        match self {
            AgeRequirement::Between { min, max } => (min..=max).contains(&age),
            AgeRequirement::AtLeast(min) => age >= min,
            AgeRequirement::Under(max) => age < max,
        }
    }

    pub fn reason(self, age: u32) -> String {
        match self {
            AgeRequirement::Between { min, max } => {
                format!("Age {age} is within {min}-{max} years requirement")
            }
            AgeRequirement::AtLeast(min) => format!("Age {age} meets minimum {min} years"),
            AgeRequirement::Under(max) => format!("Age {age} is under {max} years limit"),
        }
    }
}

#[derive(Clone, Copy)]
enum Shape {
    Range,
    Above,
    Below,
}

/// Tried in order; the first shape found decides the requirement.
static SHAPES: LazyLock<Vec<(Regex, Shape)>> = LazyLock::new(|| {
    [
        (r"\b(\d{1,2})\s*(?:to|-)\s*(\d{1,2})\s*years?", Shape::Range),
        (r"between\s*(\d{1,2})\s*(?:and|-)\s*(\d{1,2})", Shape::Range),
        (r"above\s*(\d{1,2})\s*years?", Shape::Above),
        (r"below\s*(\d{1,2})\s*years?", Shape::Below),
        (
            r"\b(\d{1,2})\s*years?\s*(?:of\s*age|old|or\s*above)",
            Shape::Above,
        ),
        (r"minimum\s*(?:age\s*)?(\d{1,2})", Shape::Above),
        (r"maximum\s*(?:age\s*)?(\d{1,2})", Shape::Below),
    ]
    .into_iter()
    .map(|(pattern, shape)| {
        let regex = Regex::new(&format!("(?i){pattern}")).expect("age shape compiles");
        (regex, shape)
    })
    .collect()
});

fn number(captures: &Captures<'_>, group: usize) -> Option<u32> {
    captures.get(group)?.as_str().parse().ok()
}

/// Reads the first recognisable age limit from eligibility text.
pub fn parse_requirement(eligibility: &str) -> Option<AgeRequirement> {
    let (captures, shape) = SHAPES
        .iter()
        .find_map(|(regex, shape)| regex.captures(eligibility).map(|captures| (captures, *shape)))?;

    match shape {
        Shape::Range => Some(AgeRequirement::Between {
            min: number(&captures, 1)?,
            max: number(&captures, 2)?,
        }),
        Shape::Above => number(&captures, 1).map(AgeRequirement::AtLeast),
        Shape::Below => number(&captures, 1).map(AgeRequirement::Under),
    }
}
