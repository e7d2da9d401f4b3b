//! Static catalog of generative-AI use cases and country insights.
//!
//! The catalog is compiled into the binary and never mutated. Slices of
//! tuples rather than maps: key order is display order for the dropdowns,
//! and the tables are small enough that linear scans are the lookup.

use serde::Serialize;
use serde_json::{json, Map, Value};

/// Fallback returned when no industry/function pair matches.
pub const NO_MATCH_MESSAGE: &str = "No relevant use cases found.";

type FunctionEntry = (&'static str, &'static [&'static str]);
type IndustryEntry = (&'static str, &'static [FunctionEntry]);

const USE_CASES: &[IndustryEntry] = &[
    (
        "Retail",
        &[
            (
                "Marketing",
                &[
                    "AI-generated personalized ad campaigns",
                    "Demand forecasting using generative AI",
                    "Customer sentiment analysis from reviews",
                ],
            ),
            (
                "Operations",
                &[
                    "AI-powered inventory optimization",
                    "Generative AI for supply chain simulation",
                    "Virtual assistants for supplier communication",
                ],
            ),
            (
                "Sales",
                &[
                    "Chatbots for customer interaction",
                    "AI-powered product recommendation engines",
                    "Dynamic pricing optimization using AI models",
                ],
            ),
        ],
    ),
    (
        "Healthcare",
        &[
            (
                "R&D",
                &[
                    "AI for molecule discovery",
                    "Synthetic data for clinical trials",
                    "Generative models for protein structure prediction",
                ],
            ),
            (
                "Operations",
                &[
                    "Patient engagement via chatbots",
                    "Summarizing medical records with generative AI",
                    "Predictive analytics for resource allocation",
                ],
            ),
            (
                "Clinical Practice",
                &[
                    "Automated transcription for patient consultations",
                    "Medical imaging enhancement with generative AI",
                    "AI-generated treatment pathway suggestions",
                ],
            ),
        ],
    ),
    (
        "Finance",
        &[
            (
                "Risk Management",
                &[
                    "Fraud detection using generative AI",
                    "AI-generated risk scenarios for stress testing",
                    "Dynamic credit scoring models",
                ],
            ),
            (
                "Customer Service",
                &[
                    "Virtual financial assistants for clients",
                    "Automated report generation for account reviews",
                    "Chatbots for loan processing inquiries",
                ],
            ),
            (
                "Product Development",
                &[
                    "Generative AI for creating personalized financial products",
                    "AI-driven financial forecasting",
                    "Market trend analysis using AI models",
                ],
            ),
        ],
    ),
    (
        "Manufacturing",
        &[
            (
                "Production",
                &[
                    "AI-generated predictive maintenance schedules",
                    "Generative AI for supply chain optimization",
                    "Product design prototypes using AI models",
                ],
            ),
            (
                "Quality Control",
                &[
                    "Automated defect detection in production lines",
                    "AI-powered process optimization suggestions",
                    "Simulation models for testing new processes",
                ],
            ),
            (
                "Logistics",
                &[
                    "Route optimization with AI models",
                    "Generative AI for warehouse space planning",
                    "Dynamic demand and supply balancing algorithms",
                ],
            ),
        ],
    ),
    (
        "Government",
        &[
            (
                "Public Services",
                &[
                    "Chatbots for citizen engagement",
                    "Automated report summarization for policymakers",
                    "Generative AI for urban planning simulations",
                ],
            ),
            (
                "Education",
                &[
                    "AI-powered curriculum personalization",
                    "Automated content creation for e-learning platforms",
                    "Generative models for creating training simulations",
                ],
            ),
            (
                "Healthcare Policy",
                &[
                    "Predictive models for disease outbreak management",
                    "Generative AI for resource allocation simulations",
                    "Synthesizing anonymized patient datasets for research",
                ],
            ),
        ],
    ),
];

const COUNTRY_INSIGHTS: &[(&str, &[&str])] = &[
    (
        "Germany",
        &[
            "Focus on manufacturing use cases due to its industrial base.",
            "Emphasis on quality control and production optimization.",
        ],
    ),
    (
        "France",
        &[
            "Strong focus on healthcare and finance sectors.",
            "AI-driven R&D in pharmaceuticals and risk management.",
        ],
    ),
    (
        "United Kingdom",
        &[
            "Advanced retail and finance applications.",
            "Generative AI for fraud detection and customer engagement.",
        ],
    ),
    (
        "Netherlands",
        &[
            "Logistics and transportation AI solutions.",
            "Focus on sustainable supply chain optimization.",
        ],
    ),
    (
        "Sweden",
        &[
            "Sustainability-focused manufacturing use cases.",
            "AI for renewable energy grid management.",
        ],
    ),
    (
        "Italy",
        &[
            "AI in luxury retail and fashion design.",
            "Generative AI for personalized marketing campaigns.",
        ],
    ),
    (
        "Spain",
        &[
            "Tourism-related AI solutions like travel assistants.",
            "Generative AI for hospitality industry optimization.",
        ],
    ),
];

/// Dropdown options derived from the catalog keys, in defined order.
///
/// `business_functions` is a `serde_json` map (insertion-ordered via the
/// `preserve_order` feature) so the industries appear in catalog order in
/// the serialized response.
#[derive(Debug, Serialize)]
pub struct CatalogOptions {
    pub countries: Vec<&'static str>,
    pub industries: Vec<&'static str>,
    #[serde(rename = "businessFunctions")]
    pub business_functions: Map<String, Value>,
}

/// Enumerate catalog keys for UI population. Infallible.
pub fn options() -> CatalogOptions {
    let countries = COUNTRY_INSIGHTS
        .iter()
        .map(|(country, _)| *country)
        .collect();
    let industries = USE_CASES.iter().map(|(industry, _)| *industry).collect();
    let business_functions = USE_CASES
        .iter()
        .map(|(industry, functions)| {
            let names: Vec<&str> = functions.iter().map(|(name, _)| *name).collect();
            (industry.to_string(), json!(names))
        })
        .collect();

    CatalogOptions {
        countries,
        industries,
        business_functions,
    }
}

/// Use cases for an industry/function pair, as an owned list.
///
/// Returns the sentinel [`NO_MATCH_MESSAGE`] when either key is unknown.
/// Exact match only. Callers receive a fresh `Vec` so appending insights
/// can never touch the stored tables.
pub fn lookup(industry: &str, business_function: &str) -> Vec<String> {
    USE_CASES
        .iter()
        .find(|(name, _)| *name == industry)
        .and_then(|(_, functions)| {
            functions
                .iter()
                .find(|(name, _)| *name == business_function)
        })
        .map(|(_, cases)| cases.iter().map(|case| case.to_string()).collect())
        .unwrap_or_else(|| vec![NO_MATCH_MESSAGE.to_string()])
}

/// Insight strings for a country, or an empty slice when none exist.
pub fn insights_for(country: &str) -> &'static [&'static str] {
    COUNTRY_INSIGHTS
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, insights)| *insights)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_cover_every_catalog_key() {
        let opts = options();

        assert_eq!(opts.industries.len(), USE_CASES.len());
        for (industry, functions) in USE_CASES {
            assert!(opts.industries.iter().any(|i| i == industry));
            let listed = opts
                .business_functions
                .get(*industry)
                .expect("industry missing from businessFunctions");
            let expected: Vec<&str> = functions.iter().map(|(name, _)| *name).collect();
            assert_eq!(listed, &json!(expected));
        }

        assert_eq!(opts.countries.len(), COUNTRY_INSIGHTS.len());
        for (country, _) in COUNTRY_INSIGHTS {
            assert!(opts.countries.iter().any(|c| c == country));
        }
    }

    #[test]
    fn lookup_returns_stored_list_in_order() {
        assert_eq!(
            lookup("Retail", "Marketing"),
            vec![
                "AI-generated personalized ad campaigns",
                "Demand forecasting using generative AI",
                "Customer sentiment analysis from reviews",
            ]
        );
    }

    #[test]
    fn lookup_unknown_industry_yields_sentinel() {
        assert_eq!(lookup("Nonexistent", "Marketing"), vec![NO_MATCH_MESSAGE]);
    }

    #[test]
    fn lookup_unknown_function_yields_sentinel() {
        assert_eq!(lookup("Retail", "Nonexistent"), vec![NO_MATCH_MESSAGE]);
    }

    #[test]
    fn lookup_hands_out_an_owned_copy() {
        let mut first = lookup("Manufacturing", "Production");
        first.push("scribble".to_string());

        // The stored table must be untouched by the append above.
        let second = lookup("Manufacturing", "Production");
        assert_eq!(second.len(), 3);
        assert!(!second.contains(&"scribble".to_string()));
    }

    #[test]
    fn insights_for_known_country() {
        let insights = insights_for("Germany");
        assert_eq!(insights.len(), 2);
        assert_eq!(
            insights[0],
            "Focus on manufacturing use cases due to its industrial base."
        );
    }

    #[test]
    fn insights_for_unknown_country_is_empty() {
        assert!(insights_for("Atlantis").is_empty());
    }
}
