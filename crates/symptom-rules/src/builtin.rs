//! Built-in rule data
//!
//! Ordered by priority: the emergency rule must stay first so that a message
//! mentioning both chest pain and a fever is treated as an emergency.

use advisory::{Advisory, NextStepCta, Urgency, EMERGENCY_CALL_TARGET, FACILITY_FINDER_ROUTE};

use crate::table::Rule;

struct StaticAdvisory {
    urgency: Urgency,
    summary_title: &'static str,
    reasoning_bullets: &'static [&'static str],
    recommendations: &'static [&'static str],
    red_flags: &'static [&'static str],
    cta_label: &'static str,
    cta_target: &'static str,
}

impl StaticAdvisory {
    fn to_advisory(&self) -> Advisory {
        Advisory {
            urgency: self.urgency,
            summary_title: self.summary_title.to_string(),
            reasoning_bullets: owned(self.reasoning_bullets),
            recommendations: owned(self.recommendations),
            red_flags: owned(self.red_flags),
            next_step_cta: NextStepCta::new(self.cta_label, self.cta_target),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

struct StaticRule {
    keywords: &'static [&'static str],
    advisory: StaticAdvisory,
}

const FIND_CLINICS: &str = "Find clinics in Quesnel";

static RULES: &[StaticRule] = &[
    // Cardiac / respiratory emergency
    StaticRule {
        keywords: &[
            "chest pain",
            "chest",
            "heart",
            "breathing",
            "breath",
            "unconscious",
            "not breathing",
            "stroke",
        ],
        advisory: StaticAdvisory {
            urgency: Urgency::High,
            summary_title: "Potential Emergency Symptoms",
            reasoning_bullets: &[
                "Chest pain and difficulty breathing can indicate serious conditions",
                "These symptoms require immediate professional evaluation",
            ],
            recommendations: &[
                "Call 911 immediately or go to G.R. Baker Memorial ER",
                "Do not drive yourself if experiencing severe symptoms",
                "Stay calm and sit upright if having difficulty breathing",
            ],
            red_flags: &[
                "Crushing or squeezing chest pain",
                "Pain radiating to arm, jaw, or back",
                "Sudden severe shortness of breath",
                "Loss of consciousness",
                "Signs of stroke (face drooping, arm weakness, speech difficulty)",
            ],
            cta_label: "Call 911",
            cta_target: EMERGENCY_CALL_TARGET,
        },
    },
    // Fever
    StaticRule {
        keywords: &["fever", "temperature", "hot", "chills"],
        advisory: StaticAdvisory {
            urgency: Urgency::Moderate,
            summary_title: "Possible Common Illness Pattern",
            reasoning_bullets: &[
                "Fever is a common sign your body is fighting an infection",
                "Most fevers in adults resolve within a few days with rest",
            ],
            recommendations: &[
                "Rest and stay hydrated — drink plenty of water and clear fluids",
                "Monitor your temperature regularly",
                "Over-the-counter fever reducers may help (follow package directions)",
                "If fever exceeds 39°C (102°F) or lasts more than 3 days, seek care",
            ],
            red_flags: &[
                "Fever above 39°C / 102°F that does not respond to medication",
                "Difficulty breathing or chest pain",
                "Severe headache with stiff neck",
                "Rash that does not blanch when pressed",
            ],
            cta_label: FIND_CLINICS,
            cta_target: FACILITY_FINDER_ROUTE,
        },
    },
    // Upper respiratory / cold
    StaticRule {
        keywords: &[
            "cough",
            "sore throat",
            "cold",
            "flu",
            "congestion",
            "runny nose",
            "sneezing",
        ],
        advisory: StaticAdvisory {
            urgency: Urgency::Low,
            summary_title: "Possible Upper Respiratory Pattern",
            reasoning_bullets: &[
                "Cough and cold symptoms are very common and usually viral",
                "Most resolve within 7–10 days without specific treatment",
            ],
            recommendations: &[
                "Rest and drink warm fluids",
                "Honey and warm water can soothe a sore throat (adults only)",
                "Use over-the-counter cold relief products as needed",
                "Visit a clinic if symptoms worsen or persist beyond 10 days",
            ],
            red_flags: &[
                "Difficulty breathing or wheezing",
                "High fever developing alongside cough",
                "Coughing up blood",
            ],
            cta_label: FIND_CLINICS,
            cta_target: FACILITY_FINDER_ROUTE,
        },
    },
    // Injury / bleeding
    StaticRule {
        keywords: &[
            "injury", "cut", "bleeding", "broken", "fracture", "sprain", "fall", "wound",
        ],
        advisory: StaticAdvisory {
            urgency: Urgency::Moderate,
            summary_title: "Possible Injury Assessment Needed",
            reasoning_bullets: &[
                "Injuries may range from minor to requiring urgent care",
                "Proper assessment ensures correct treatment",
            ],
            recommendations: &[
                "Apply pressure to any bleeding wound with a clean cloth",
                "Immobilize the area if you suspect a fracture",
                "Apply ice wrapped in cloth for swelling (20 min on, 20 min off)",
                "Visit the ER or UPCC for proper evaluation",
            ],
            red_flags: &[
                "Uncontrollable bleeding",
                "Visible bone or deep wound",
                "Inability to move a limb",
                "Head injury with confusion or vomiting",
            ],
            cta_label: FIND_CLINICS,
            cta_target: FACILITY_FINDER_ROUTE,
        },
    },
    // Headache
    StaticRule {
        keywords: &["headache", "migraine", "head pain"],
        advisory: StaticAdvisory {
            urgency: Urgency::Low,
            summary_title: "Possible Headache Pattern",
            reasoning_bullets: &[
                "Headaches are very common and usually not serious",
                "They can be caused by stress, dehydration, or tension",
            ],
            recommendations: &[
                "Rest in a quiet, dark room",
                "Stay hydrated and eat regular meals",
                "Over-the-counter pain relievers may help",
                "If this is a new, severe, or unusual headache, see a doctor",
            ],
            red_flags: &[
                "\"Worst headache of my life\" or thunderclap onset",
                "Headache with fever and stiff neck",
                "Headache after a head injury",
                "Vision changes or confusion",
            ],
            cta_label: FIND_CLINICS,
            cta_target: FACILITY_FINDER_ROUTE,
        },
    },
    // Gastrointestinal
    StaticRule {
        keywords: &["stomach", "nausea", "vomiting", "diarrhea", "abdominal", "belly"],
        advisory: StaticAdvisory {
            urgency: Urgency::Low,
            summary_title: "Possible Gastrointestinal Pattern",
            reasoning_bullets: &[
                "Stomach issues are common and often caused by viruses or food",
                "Most cases resolve within 24–48 hours",
            ],
            recommendations: &[
                "Stay hydrated with small, frequent sips of water or electrolyte drinks",
                "Avoid solid foods until nausea passes, then try bland foods",
                "Rest and monitor symptoms",
                "See a clinic if symptoms last more than 48 hours",
            ],
            red_flags: &[
                "Severe abdominal pain that is getting worse",
                "Blood in vomit or stool",
                "Signs of dehydration (dizziness, dry mouth, no urination)",
                "High fever with abdominal pain",
            ],
            cta_label: FIND_CLINICS,
            cta_target: FACILITY_FINDER_ROUTE,
        },
    },
    // Prescription / pharmacy
    StaticRule {
        keywords: &["refill", "prescription", "medication", "pharmacy", "pill", "medicine"],
        advisory: StaticAdvisory {
            urgency: Urgency::Low,
            summary_title: "Prescription / Pharmacy Inquiry",
            reasoning_bullets: &[
                "BC pharmacists can renew many prescriptions for a short supply",
                "Contact your local pharmacy for details",
            ],
            recommendations: &[
                "Call Shoppers Drug Mart at (250) 992-2214",
                "Bring your old prescription bottle or medication name",
                "If urgent, visit a walk-in clinic for a new prescription",
            ],
            red_flags: &[
                "Running out of critical medication (e.g., insulin, heart meds)",
                "Adverse reaction to medication — seek immediate care",
            ],
            cta_label: "Find pharmacies",
            cta_target: FACILITY_FINDER_ROUTE,
        },
    },
];

static DEFAULT_ADVISORY: StaticAdvisory = StaticAdvisory {
    urgency: Urgency::Low,
    summary_title: "General Health Inquiry",
    reasoning_bullets: &[
        "Your symptoms don't match a specific pattern in our guide",
        "A healthcare professional can provide personalized advice",
    ],
    recommendations: &[
        "Call HealthLink BC at 8-1-1 to speak with a nurse 24/7",
        "Visit a walk-in clinic for a professional assessment",
        "Keep track of your symptoms (when they started, severity)",
    ],
    red_flags: &[
        "If symptoms worsen suddenly, seek immediate care",
        "Difficulty breathing, chest pain, or loss of consciousness → Call 911",
    ],
    cta_label: FIND_CLINICS,
    cta_target: FACILITY_FINDER_ROUTE,
};

/// Owned copies of the built-in rules, in priority order
pub(crate) fn rules() -> Vec<Rule> {
    RULES
        .iter()
        .map(|rule| Rule {
            keywords: owned(rule.keywords),
            advisory: rule.advisory.to_advisory(),
        })
        .collect()
}

/// Advisory returned when no rule matches
pub(crate) fn default_advisory() -> Advisory {
    DEFAULT_ADVISORY.to_advisory()
}
