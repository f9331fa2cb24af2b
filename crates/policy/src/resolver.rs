//! Policy resolver — maps `(type, category)` to a behavioral contract.
//!
//! `resolve` is a total function over all string inputs: a specific
//! catalogue record when one exists, the per-type default record for a
//! valid type with an unmapped category, and a universal-refusal policy
//! when the type itself is unrecognized.
//!
//! The refusal text is owned here and produced by a single shared template
//! so the "must match verbatim" contract is structurally impossible to
//! violate: only the expertise area varies. Policies are computed fresh per
//! request — no caching, no hidden state.

use serde::Serialize;

use crate::catalog::{self, CategoryPolicy};
use crate::registry::GuidanceType;

/// The derived instruction + refusal pair governing one category's allowed
/// conversational scope. Never stored; pure function of `(type, category)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Policy {
    pub expertise_area: String,
    pub system_instruction: String,
    pub refusal_text: String,
}

/// Closing reinforcement sentence appended to every instruction, identical
/// across all categories.
const CLOSING_REINFORCEMENT: &str = "IMPORTANT: Adherence to the defined role and boundaries is paramount. Never deviate. Always prioritize the mandatory refusal mechanism when a query is out of scope. Do not attempt to be helpful outside your defined function.";

/// Refusal text for requests arriving with an unrecognized guidance type.
const UNDEFINED_PROFILE_REFUSAL: &str = "My current configuration does not allow me to assist. Please select a specific expert profile from the main options.";

/// The shared refusal template. This message must be returned verbatim by
/// the model when a query is out of scope; the wording is byte-identical
/// for every category except the substituted expertise area.
pub fn refusal_message(expertise_area: &str) -> String {
    format!(
        "My designated function is exclusively focused on {expertise_area}. \
         I am programmed to refuse any request outside this specific operational scope. \
         Please restrict your questions strictly to {expertise_area}, or select a \
         different expert profile better suited to your query. \
         I cannot assist with other topics."
    )
}

/// Resolve `(type, category)` to a policy.
pub fn resolve(type_str: &str, category: &str) -> Policy {
    match GuidanceType::parse(type_str) {
        Some(guidance) => {
            let entry =
                catalog::lookup(guidance, category).unwrap_or_else(|| catalog::default_entry(guidance));
            from_entry(entry)
        }
        None => undefined_profile_policy(),
    }
}

/// Build a policy from one catalogue record via the four-part template:
/// scope statement, permitted actions, absolute boundaries, mandatory
/// verbatim refusal — then the shared closing sentence.
fn from_entry(entry: &CategoryPolicy) -> Policy {
    let refusal_text = refusal_message(entry.expertise_area);

    let mut instruction = format!(
        "Your *sole and absolute function* is to act as {}. \
         Your operational scope is *strictly confined* to {}.\n",
        entry.role, entry.expertise_area
    );

    instruction.push_str("**Permitted actions:**\n");
    for action in entry.permitted {
        instruction.push_str("- ");
        instruction.push_str(action);
        instruction.push_str(".\n");
    }

    instruction.push_str("**ABSOLUTE Boundaries & Forbidden Actions:**\n");
    for action in entry.forbidden {
        instruction.push_str("- It is *strictly forbidden* to ");
        instruction.push_str(action);
        instruction.push_str(".\n");
    }

    instruction.push_str(
        "**Mandatory Refusal:** Any user query that deviates *even slightly* from this \
         operational scope *must* be met *immediately* and *verbatim* with the refusal message: ",
    );
    instruction.push_str(&refusal_text);
    instruction.push(' ');
    instruction.push_str(CLOSING_REINFORCEMENT);

    Policy {
        expertise_area: entry.expertise_area.to_string(),
        system_instruction: instruction,
        refusal_text,
    }
}

/// Maximally restrictive policy for an unrecognized guidance type: declines
/// every request regardless of content.
fn undefined_profile_policy() -> Policy {
    let mut instruction = String::from(
        "You are operating outside of a defined expert profile. Your function is undefined.\n\
         **ABSOLUTE Boundaries & Forbidden Actions:**\n\
         - It is *strictly forbidden* to provide medical, legal, financial, therapeutic, or any specialized advice.\n\
         - It is *strictly forbidden* to claim any expertise.\n\
         **Mandatory Refusal:** You *must* refuse all requests. State: ",
    );
    instruction.push_str(UNDEFINED_PROFILE_REFUSAL);
    instruction.push(' ');
    instruction.push_str(CLOSING_REINFORCEMENT);

    Policy {
        expertise_area: "a limited scope".into(),
        system_instruction: instruction,
        refusal_text: UNDEFINED_PROFILE_REFUSAL.into(),
    }
}
