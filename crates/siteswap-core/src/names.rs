//! Authentic pattern names and families
//!
//! A static lookup table keyed by canonical form. Names and
//! relationships are sourced from the Library of Juggling, The Juggling
//! Edge and the JugglingLab documentation; this is data, not logic, and
//! only lives here because it consumes the canonicalizer's output key.

use serde::Serialize;

/// A sourced human name for a canonical pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PatternName {
    pub name: &'static str,
    pub sources: &'static [&'static str],
}

/// How a related pattern connects to a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    Prerequisite,
    Variation,
    Progression,
    FamilyMember,
}

/// A named variation within a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Variation {
    pub name: &'static str,
    pub siteswap: &'static str,
    pub difficulty: u8,
}

/// A pattern related to a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelatedPattern {
    pub name: &'static str,
    pub siteswap: &'static str,
    pub relationship: Relationship,
}

/// Researched family record for a canonical pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternFamily {
    pub primary_name: &'static str,
    pub alternative_names: &'static [&'static str],
    pub inventor: Option<&'static str>,
    pub difficulty: u8,
    pub variations: &'static [Variation],
    pub related_patterns: &'static [RelatedPattern],
    pub sources: &'static [&'static str],
}

const LIBRARY: &str = "Library of Juggling";
const EDGE: &str = "The Juggling Edge";
const JUGGLING_LAB: &str = "JugglingLab Documentation";

/// Look up the authentic name for a canonical form.
pub fn lookup_name(canonical: &str) -> Option<PatternName> {
    let entry = match canonical {
        "3" | "333" => PatternName {
            name: "Cascade",
            sources: &[LIBRARY, EDGE, JUGGLING_LAB],
        },
        "441" => PatternName { name: "Half-Box", sources: &[LIBRARY] },
        "531" => PatternName { name: "Box", sources: &[LIBRARY] },
        "423" => PatternName { name: "Burke's Barrage", sources: &[LIBRARY] },
        "51" => PatternName { name: "Shower", sources: &[LIBRARY] },
        "4" | "444" => PatternName {
            name: "Fountain",
            sources: &[LIBRARY, EDGE, JUGGLING_LAB],
        },
        "5" | "555" => PatternName {
            name: "Cascade",
            sources: &[LIBRARY, EDGE, JUGGLING_LAB],
        },
        "(4,4)" => PatternName {
            name: "Synchronous Fountain",
            sources: &[EDGE, JUGGLING_LAB],
        },
        "(4,2x)(2x,4)" => PatternName { name: "Box", sources: &[EDGE, LIBRARY] },
        "(4,4)(4,0)" => PatternName { name: "Columns", sources: &[EDGE, LIBRARY] },
        "[33]" => PatternName {
            name: "Multiplex Cascade",
            sources: &[EDGE, JUGGLING_LAB],
        },
        _ => return None,
    };
    Some(entry)
}

/// Look up the researched family record for a canonical form.
pub fn lookup_family(canonical: &str) -> Option<&'static PatternFamily> {
    match canonical {
        "3" => Some(&MILLS_MESS_FAMILY),
        "441" => Some(&HALF_BOX_FAMILY),
        "531" => Some(&BOX_FAMILY),
        "423" => Some(&BARRAGE_FAMILY),
        "4" => Some(&FOUNTAIN_FAMILY),
        _ => None,
    }
}

static MILLS_MESS_FAMILY: PatternFamily = PatternFamily {
    primary_name: "Mills Mess",
    alternative_names: &["Cascade"],
    inventor: Some("Steven Mills"),
    difficulty: 5,
    variations: &[
        Variation { name: "Mills Mess (Basic)", siteswap: "3", difficulty: 5 },
        Variation { name: "441 Mills Mess", siteswap: "441", difficulty: 6 },
        Variation { name: "531 Mills Mess", siteswap: "531", difficulty: 7 },
        Variation { name: "Half-Mess", siteswap: "3", difficulty: 4 },
        Variation { name: "Reverse Mills Mess", siteswap: "3", difficulty: 5 },
    ],
    related_patterns: &[
        RelatedPattern {
            name: "Reverse Cascade",
            siteswap: "3",
            relationship: Relationship::Prerequisite,
        },
        RelatedPattern {
            name: "Four Ball Mills Mess",
            siteswap: "4",
            relationship: Relationship::Progression,
        },
        RelatedPattern {
            name: "Boston Mess",
            siteswap: "3",
            relationship: Relationship::FamilyMember,
        },
    ],
    sources: &[LIBRARY],
};

static HALF_BOX_FAMILY: PatternFamily = PatternFamily {
    primary_name: "Half-Box",
    alternative_names: &["441", "Parallel Schizophrenic"],
    inventor: None,
    difficulty: 4,
    variations: &[
        Variation { name: "Half-Box (Basic)", siteswap: "441", difficulty: 4 },
        Variation { name: "Reverse 441", siteswap: "441", difficulty: 4 },
        Variation { name: "441 Mills Mess", siteswap: "441", difficulty: 6 },
    ],
    related_patterns: &[
        RelatedPattern {
            name: "Box",
            siteswap: "(4,2x)(2x,4)",
            relationship: Relationship::Progression,
        },
        RelatedPattern {
            name: "Two in One",
            siteswap: "40",
            relationship: Relationship::Prerequisite,
        },
        RelatedPattern {
            name: "Shower",
            siteswap: "51",
            relationship: Relationship::Progression,
        },
    ],
    sources: &[LIBRARY],
};

static BOX_FAMILY: PatternFamily = PatternFamily {
    primary_name: "Box",
    alternative_names: &["See-Saw"],
    inventor: None,
    difficulty: 6,
    variations: &[
        Variation { name: "Box (Basic)", siteswap: "(4,2x)(2x,4)", difficulty: 6 },
        Variation { name: "Broken Box", siteswap: "(4,2x)*", difficulty: 6 },
        Variation { name: "Extended Box", siteswap: "(4x,2x)(4,2x)*", difficulty: 6 },
        Variation { name: "Karas' Box", siteswap: "(4,2x)*", difficulty: 8 },
    ],
    related_patterns: &[
        RelatedPattern {
            name: "531 (Tower Pattern)",
            siteswap: "531",
            relationship: Relationship::FamilyMember,
        },
        RelatedPattern {
            name: "Half-Box (441)",
            siteswap: "441",
            relationship: Relationship::Prerequisite,
        },
        RelatedPattern {
            name: "Shower",
            siteswap: "51",
            relationship: Relationship::Prerequisite,
        },
    ],
    sources: &[LIBRARY],
};

static BARRAGE_FAMILY: PatternFamily = PatternFamily {
    primary_name: "Burke's Barrage",
    alternative_names: &[],
    inventor: Some("Ken Burke"),
    difficulty: 4,
    variations: &[
        Variation { name: "423 (Basic)", siteswap: "423", difficulty: 2 },
        Variation { name: "Takeouts", siteswap: "423", difficulty: 4 },
        Variation { name: "Fake Mess", siteswap: "423", difficulty: 3 },
        Variation { name: "The W (Columns 423)", siteswap: "423", difficulty: 2 },
    ],
    related_patterns: &[
        RelatedPattern {
            name: "Weave",
            siteswap: "432",
            relationship: Relationship::Progression,
        },
        RelatedPattern {
            name: "Two in One",
            siteswap: "40",
            relationship: Relationship::Prerequisite,
        },
        RelatedPattern {
            name: "Mills Mess",
            siteswap: "3",
            relationship: Relationship::Variation,
        },
    ],
    sources: &[LIBRARY, "Wikipedia"],
};

static FOUNTAIN_FAMILY: PatternFamily = PatternFamily {
    primary_name: "Fountain",
    alternative_names: &["Asynchronous Fountain"],
    inventor: None,
    difficulty: 7,
    variations: &[
        Variation { name: "Fountain (Basic)", siteswap: "4", difficulty: 7 },
        Variation { name: "Synchronous Fountain", siteswap: "(4,4)", difficulty: 6 },
        Variation { name: "Four Ball Mills Mess", siteswap: "4", difficulty: 8 },
    ],
    related_patterns: &[
        RelatedPattern {
            name: "Two in One",
            siteswap: "40",
            relationship: Relationship::Prerequisite,
        },
        RelatedPattern {
            name: "Half-Box (441)",
            siteswap: "441",
            relationship: Relationship::Prerequisite,
        },
        RelatedPattern {
            name: "Four Ball Columns",
            siteswap: "(4,4)",
            relationship: Relationship::FamilyMember,
        },
    ],
    sources: &[LIBRARY],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_names() {
        assert_eq!(lookup_name("3").unwrap().name, "Cascade");
        assert_eq!(lookup_name("441").unwrap().name, "Half-Box");
        assert_eq!(lookup_name("531").unwrap().name, "Box");
        assert_eq!(lookup_name("(4,4)").unwrap().name, "Synchronous Fountain");
        assert_eq!(lookup_name("[33]").unwrap().name, "Multiplex Cascade");
    }

    #[test]
    fn test_lookup_unknown_is_none() {
        assert!(lookup_name("97531").is_none());
        assert!(lookup_family("97531").is_none());
    }

    #[test]
    fn test_family_records() {
        let family = lookup_family("423").unwrap();
        assert_eq!(family.primary_name, "Burke's Barrage");
        assert_eq!(family.inventor, Some("Ken Burke"));
        assert!(family
            .related_patterns
            .iter()
            .any(|r| r.relationship == Relationship::Prerequisite));
    }
}
