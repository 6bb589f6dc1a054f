//! Cycling through Tab completion candidates.

use folio_core::AutocompleteResult;

/// Candidates offered by an ambiguous Tab press.
///
/// Further presses walk the list, wrapping at the end. Argument candidates
/// keep the command word in front (`open ` + id).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Completions {
    lead: String,
    candidates: Vec<String>,
    selected: Option<usize>,
}

impl Completions {
    /// `common` is the completer's common prefix, including the command word
    /// for argument completion.
    pub fn new(common: &str, candidates: Vec<String>) -> Self {
        let lead = match common.split_once(' ') {
            Some((cmd, _)) => format!("{} ", cmd),
            None => String::new(),
        };
        Self {
            lead,
            candidates,
            selected: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Select the next candidate and return the full input line for it.
    pub fn cycle(&mut self) -> Option<String> {
        if self.candidates.is_empty() {
            return None;
        }
        let next = self.selected.map_or(0, |i| (i + 1) % self.candidates.len());
        self.selected = Some(next);
        Some(format!("{}{}", self.lead, self.candidates[next]))
    }
}

/// Outcome of a Tab press on `typed`: the new input value, if it changes,
/// and the candidates to cycle through next.
pub fn tab_press(typed: &str, result: AutocompleteResult) -> (Option<String>, Completions) {
    match result {
        AutocompleteResult::Single(completed) => (Some(completed), Completions::default()),
        AutocompleteResult::Multiple(common, matches) => {
            let mut completions = Completions::new(&common, matches);
            let value = if common.len() > typed.len() {
                Some(common)
            } else {
                completions.cycle()
            };
            (value, completions)
        }
        AutocompleteResult::None => (None, Completions::default()),
    }
}

/// Length in UTF-16 code units, the unit of DOM selection offsets.
pub fn utf16_len(s: &str) -> u32 {
    s.encode_utf16().count() as u32
}
