//! Keyword category tables
//!
//! Each category carries a fixed weight that is applied once per matching
//! phrase. Phrases are matched as plain substrings of the normalized
//! (lowercase, punctuation-free) text, so they must be written in that form.

use serde::Serialize;

/// Direction a category pushes the scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// Raises the fraud score
    Boost,
    /// Lowers the fraud score and raises the safe score
    Reduce,
}

/// One row of a rule table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Category {
    pub name: &'static str,
    pub kind: CategoryKind,
    pub weight: f64,
    pub phrases: &'static [&'static str],
}

impl Category {
    /// Phrases of this category contained in `text`, one entry per phrase
    pub fn matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.phrases.iter().copied().filter(move |phrase| text.contains(phrase))
    }
}

/// Phishing and scam signals
pub const BOOST_CATEGORIES: &[Category] = &[
    Category {
        name: "social",
        kind: CategoryKind::Boost,
        weight: 0.035,
        phrases: &[
            "you have been selected",
            "selected to win",
            "congratulations",
            "winner",
            "claim your reward",
            "claim your prize",
            "you have won",
            "free iphone",
            "gift card",
            "dear customer",
            "dear user",
            "verify your identity",
            "confirm identity",
            "confirm your identity",
            "identity verification",
        ],
    },
    Category {
        name: "financial",
        kind: CategoryKind::Boost,
        weight: 0.04,
        phrases: &[
            "bank account",
            "credit card",
            "payment failure",
            "payment failed",
            "wire transfer",
            "bank transfer",
            "refund",
            "billing information",
            "unauthorized transaction",
            "tax refund",
            "bitcoin",
            "lottery",
            "million dollar",
            "inheritance",
            "unpaid invoice",
        ],
    },
    Category {
        name: "brands",
        kind: CategoryKind::Boost,
        weight: 0.025,
        phrases: &[
            "paypal",
            "microsoft",
            "amazon",
            "netflix",
            "dhl",
            "apple id",
            "fedex",
            "wells fargo",
            "bank of america",
        ],
    },
    Category {
        name: "urgency",
        kind: CategoryKind::Boost,
        weight: 0.045,
        phrases: &[
            "urgent",
            "immediately",
            "final warning",
            "suspended",
            "account locked",
            "act now",
            "action required",
            "expires today",
            "last chance",
            "restricted",
            "security alert",
            "unauthorized access",
            "limited time",
        ],
    },
    Category {
        name: "links",
        kind: CategoryKind::Boost,
        weight: 0.05,
        phrases: &[
            "click here",
            "clicking here",
            "click the link",
            "click below",
            "login to resolve",
            "log in to",
            "sign in to",
            "verify your account",
            "reset your password",
            "update your details",
            "follow the link",
            "download the attachment",
        ],
    },
    Category {
        name: "visual",
        kind: CategoryKind::Boost,
        weight: 0.02,
        phrases: &["💰", "🔥", "👀", "🎁", "🚨", "⚠", "❗", "free", "bonus"],
    },
];

/// Business and formal-communication signals
pub const REDUCE_CATEGORIES: &[Category] = &[
    Category {
        name: "structure",
        kind: CategoryKind::Reduce,
        weight: 0.025,
        phrases: &[
            "attached is",
            "please find attached",
            "agenda",
            "meeting",
            "report",
            "minutes",
            "schedule",
            "quarterly",
            "project update",
            "as discussed",
        ],
    },
    Category {
        name: "polite",
        kind: CategoryKind::Reduce,
        weight: 0.02,
        phrases: &[
            "thank you",
            "thanks",
            "please let me know",
            "for your time",
            "i hope this",
            "appreciate",
            "looking forward",
        ],
    },
    Category {
        name: "internal",
        kind: CategoryKind::Reduce,
        weight: 0.03,
        phrases: &[
            "our team",
            "the team",
            "colleagues",
            "department",
            "internal",
            "our weekly",
            "all staff",
            "newsletter",
            "onboarding",
        ],
    },
    Category {
        name: "closings",
        kind: CategoryKind::Reduce,
        weight: 0.015,
        phrases: &[
            "best regards",
            "kind regards",
            "warm regards",
            "regards",
            "sincerely",
            "cheers",
            "talk soon",
        ],
    },
];

/// Boost and reduce tables used by one adjuster
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    pub boost: &'static [Category],
    pub reduce: &'static [Category],
}

impl RuleSet {
    pub fn new(boost: &'static [Category], reduce: &'static [Category]) -> Self {
        Self { boost, reduce }
    }

    pub fn categories(&self) -> impl Iterator<Item = &'static Category> {
        let (boost, reduce) = (self.boost, self.reduce);
        boost.iter().chain(reduce.iter())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(BOOST_CATEGORIES, REDUCE_CATEGORIES)
    }
}
