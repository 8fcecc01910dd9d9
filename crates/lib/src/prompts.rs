//! # Default Suggested Prompts
//!
//! This module contains the built-in prompt catalog content. These are
//! loaded programmatically as the base configuration layer and can be
//! overridden per category by a user-supplied catalog file.

// --- Fallback ---

/// The `default` category, substituted whenever a requested category key is
/// absent from the catalog.
pub const DEFAULT_PROMPTS: &[&str] = &[
    "What vaccinations does my pet need?",
    "How often should I feed my pet?",
    "What are signs of a healthy pet?",
];

// --- General Follow-ups ---

/// Appended to every suggestion list, after any keyword-triggered prompts.
pub const GENERAL_PROMPTS: &[&str] = &[
    "Can you explain these results in simple terms?",
    "Is there anything urgent in this report?",
    "What questions should I ask my vet?",
];

// --- Medication ---

pub const MEDICATION_PROMPTS: &[&str] = &[
    "How should I give this medication to my pet?",
    "What side effects should I watch for?",
    "What happens if I miss a dose?",
];

// --- Follow-up Visits ---

pub const FOLLOWUP_PROMPTS: &[&str] = &[
    "When should I schedule the next visit?",
    "What should I monitor before the follow-up?",
    "What records should I bring to the next appointment?",
];

// --- Health Concerns ---

pub const HEALTH_CONCERNS_PROMPTS: &[&str] = &[
    "Has your pet's appetite changed recently?",
    "Is your pet drinking more water than usual?",
    "Have you noticed any changes in energy level?",
];

// --- Stool Analysis ---

pub const POOP_ANALYSIS_PROMPTS: &[&str] = &[
    "What color is normal for pet poop?",
    "How often should my pet poop?",
    "What does runny poop indicate?",
];

// --- Training ---

pub const TRAINING_DOG_PROMPTS: &[&str] = &[
    "How can I stop my dog from pulling on leash?",
    "What's the best way to crate train?",
    "How do I stop my dog from barking?",
];

pub const TRAINING_CAT_PROMPTS: &[&str] = &[
    "How do I litter train my kitten?",
    "How can I stop my cat from scratching furniture?",
    "Tips for introducing a new cat?",
];
