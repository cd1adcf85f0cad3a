//! Species and move name handling.
//!
//! Inventory records carry form-qualified names ("Galarian Meowth",
//! "Gigantamax Pikachu") while the species tables are keyed by plain names.
//! This module normalizes both and resolves a form-qualified name to its base
//! species.

use phf::phf_map;

/// The kind of special form a name prefix denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Regional,
    Gigantamax,
}

static FORM_PREFIXES: phf::Map<&'static str, FormKind> = phf_map! {
    "alolan" => FormKind::Regional,
    "galarian" => FormKind::Regional,
    "hisuian" => FormKind::Regional,
    "paldean" => FormKind::Regional,
    "gigantamax" => FormKind::Gigantamax,
    "gmax" => FormKind::Gigantamax,
};

/// A name split into its base species and optional form prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesForm {
    pub base: String,
    pub form: Option<FormKind>,
}

/// Lowercase, trimmed, single-spaced species key.
pub fn normalize_species_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Move key that ignores case, spaces, hyphens and underscores,
/// so "Double-Edge", "double edge" and "DOUBLE_EDGE" compare equal.
pub fn normalize_move_name(name: &str) -> String {
    name.to_lowercase().replace([' ', '-', '_'], "")
}

pub fn form_keyword(word: &str) -> Option<FormKind> {
    FORM_PREFIXES.get(word.to_lowercase().as_str()).copied()
}

/// Strip a leading form keyword: "Galarian Meowth" -> base "Meowth", Regional.
pub fn resolve_base_species(name: &str) -> SpeciesForm {
    let trimmed = name.trim();
    if let Some((first, rest)) = trimmed.split_once(char::is_whitespace) {
        if let Some(form) = form_keyword(first) {
            let rest = rest.trim();
            if !rest.is_empty() {
                return SpeciesForm {
                    base: rest.to_string(),
                    form: Some(form),
                };
            }
        }
    }
    SpeciesForm {
        base: trimmed.to_string(),
        form: None,
    }
}

/// Whether an inventory name is selected by one entry of a user's species list.
///
/// A plain species name selects only the plain form, so "Meowth" does not
/// select "Galarian Meowth". A form keyword on its own ("Galarian") selects
/// every name carrying that keyword, and a multi-word target selects names
/// that contain it as whole words, as long as the words left over are not a
/// form keyword.
pub fn matches_species_filter(record_name: &str, target: &str) -> bool {
    let name = normalize_species_name(record_name);
    let target = normalize_species_name(target);
    if target.is_empty() {
        return false;
    }
    if name == target {
        return true;
    }

    let name_words: Vec<&str> = name.split(' ').collect();
    let target_words: Vec<&str> = target.split(' ').collect();

    if target_words.len() == 1 && form_keyword(target_words[0]).is_some() {
        return name_words.contains(&target_words[0]);
    }
    if target_words.len() < 2 {
        return false;
    }

    name_words
        .windows(target_words.len())
        .enumerate()
        .any(|(start, window)| {
            window == target_words.as_slice()
                && name_words[..start]
                    .iter()
                    .chain(&name_words[start + target_words.len()..])
                    .all(|word| form_keyword(word).is_none())
        })
}
