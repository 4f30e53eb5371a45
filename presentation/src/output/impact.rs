//! Static "typical optimization impact" panel shown after a successful analysis

/// One headline figure in the impact panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImpactMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
    pub help: &'static str,
}

pub const IMPACT_TITLE: &str = "📊 Typical Optimization Impact";
pub const IMPACT_CAPTION: &str = "Based on experience optimizing similar mainframe batch jobs";

/// Fixed figures; they do not depend on the analyzed job
pub const IMPACT_METRICS: [ImpactMetric; 4] = [
    ImpactMetric {
        label: "⏱️ Time Savings",
        value: "40%",
        delta: "2.4 hrs/day",
        help: "Typical parallelization + resource tuning gains",
    },
    ImpactMetric {
        label: "💰 Annual Savings",
        value: "$438K",
        delta: "Positive ROI",
        help: "2.4 hrs × 365 days × $500/hr mainframe cost",
    },
    ImpactMetric {
        label: "📅 Implementation",
        value: "1-2 weeks",
        delta: "Fast deployment",
        help: "Most changes are configuration, not code",
    },
    ImpactMetric {
        label: "🎯 Risk Level",
        value: "Low",
        delta: "Safe changes",
        help: "Phase 1 changes are low-risk configuration",
    },
];

/// Where to get a free Gemini API key
pub const API_KEY_HELP_URL: &str = "https://makersuite.google.com/app/apikey";
