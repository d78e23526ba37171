//! Structural checks over a set of dance records.
//!
//! None of these problems stop generation: the normalizer accepts dangling
//! prerequisites and duplicates as-is. The checks exist so the generator
//! can warn about them and `check --strict` can refuse them.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::types::SourceDance;

/// A structural problem found in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueIssue {
    /// Two or more records share an id.
    DuplicateId { id: String, count: usize },
    /// A prerequisite names an id no record has.
    DanglingPrerequisite { dance: String, missing: String },
    /// Prerequisites loop back on themselves. The path starts and ends
    /// with the same id.
    PrerequisiteCycle { path: Vec<String> },
    /// A record has no movements at all.
    NoMovements { dance: String },
}

impl fmt::Display for CatalogueIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { id, count } => {
                write!(f, "id '{id}' is used by {count} dances")
            }
            Self::DanglingPrerequisite { dance, missing } => {
                write!(f, "'{dance}' lists unknown prerequisite '{missing}'")
            }
            Self::PrerequisiteCycle { path } => {
                write!(f, "prerequisite cycle: {}", path.join(" -> "))
            }
            Self::NoMovements { dance } => write!(f, "'{dance}' has no movements"),
        }
    }
}

/// Run every structural check, returning issues in a stable order:
/// duplicates, then per-dance problems in catalogue order, then cycles.
pub fn check_catalogue(dances: &[SourceDance]) -> Vec<CatalogueIssue> {
    let mut issues = Vec::new();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for dance in dances {
        *counts.entry(dance.id.as_str()).or_default() += 1;
    }
    let mut reported = HashSet::new();
    for dance in dances {
        let count = counts[dance.id.as_str()];
        if count > 1 && reported.insert(dance.id.as_str()) {
            issues.push(CatalogueIssue::DuplicateId {
                id: dance.id.clone(),
                count,
            });
        }
    }

    for dance in dances {
        if dance.movements.is_empty() {
            issues.push(CatalogueIssue::NoMovements {
                dance: dance.id.clone(),
            });
        }
        for prereq in &dance.prerequisites {
            if !counts.contains_key(prereq.as_str()) {
                issues.push(CatalogueIssue::DanglingPrerequisite {
                    dance: dance.id.clone(),
                    missing: prereq.clone(),
                });
            }
        }
    }

    issues.extend(
        find_cycles(dances)
            .into_iter()
            .map(|path| CatalogueIssue::PrerequisiteCycle { path }),
    );

    issues
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Depth-first search over the prerequisite graph, reporting each back
/// edge as one cycle. Visits dances in catalogue order so output is stable.
fn find_cycles(dances: &[SourceDance]) -> Vec<Vec<String>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    for (i, dance) in dances.iter().enumerate() {
        index.entry(dance.id.as_str()).or_insert(i);
    }

    let mut marks = vec![Mark::Unvisited; dances.len()];
    let mut cycles = Vec::new();

    for start in 0..dances.len() {
        if marks[start] != Mark::Unvisited {
            continue;
        }
        // Explicit stack of (node, next prerequisite to look at).
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        marks[start] = Mark::InProgress;

        while let Some(&(node, next)) = stack.last() {
            let prereqs = &dances[node].prerequisites;
            if next >= prereqs.len() {
                marks[node] = Mark::Done;
                stack.pop();
                continue;
            }
            let target = prereqs[next].as_str();
            if let Some(top) = stack.last_mut() {
                top.1 += 1;
            }

            let Some(&t) = index.get(target) else {
                continue;
            };
            match marks[t] {
                Mark::Unvisited => {
                    marks[t] = Mark::InProgress;
                    stack.push((t, 0));
                }
                Mark::InProgress => {
                    let from = stack.iter().position(|&(n, _)| n == t).unwrap_or(0);
                    let mut path: Vec<String> = stack[from..]
                        .iter()
                        .map(|&(n, _)| dances[n].id.clone())
                        .collect();
                    path.push(dances[t].id.clone());
                    cycles.push(path);
                }
                Mark::Done => {}
            }
        }
    }

    cycles
}
