/// Semantic part groups a mesh can be bucketed into. Membership is
/// non-exclusive: one node may land in several groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    Body,
    Wheels,
    Interior,
    Glass,
    PaintBody,
    Doors,
    Lights,
}

impl PartKind {
    pub fn label(self) -> &'static str {
        match self {
            PartKind::Body => "body",
            PartKind::Wheels => "wheels",
            PartKind::Interior => "interior",
            PartKind::Glass => "glass",
            PartKind::PaintBody => "paintBody",
            PartKind::Doors => "doors",
            PartKind::Lights => "lights",
        }
    }
}

/// One name-substring rule. Rules are tested in order, independently; a node
/// joins every bucket whose keywords match.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub kind: PartKind,
    pub keywords: &'static [&'static str],
}

pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        kind: PartKind::PaintBody,
        keywords: &["paint"],
    },
    KeywordRule {
        kind: PartKind::Body,
        keywords: &[
            "body", "chassis", "paint", "exterior", "hood", "trunk", "bumper", "fender", "panel",
            "shell",
        ],
    },
    KeywordRule {
        kind: PartKind::Doors,
        keywords: &["door"],
    },
    KeywordRule {
        kind: PartKind::Wheels,
        keywords: &["wheel", "tire", "rim", "alloy"],
    },
    KeywordRule {
        kind: PartKind::Interior,
        keywords: &["interior", "seat", "dashboard", "steering"],
    },
    KeywordRule {
        kind: PartKind::Glass,
        keywords: &["glass", "window", "windshield"],
    },
    KeywordRule {
        kind: PartKind::Lights,
        keywords: &["light", "lamp", "headlight", "taillight"],
    },
];

/// Names containing any of these never fall through to the body catch-all.
pub const BODY_EXCLUSIONS: &[&str] = &[
    "glass", "window", "wheel", "tire", "interior", "seat", "light", "lamp",
];

pub fn contains_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| name.contains(k))
}
